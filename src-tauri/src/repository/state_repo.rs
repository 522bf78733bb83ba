//! Dashboard State Repository
//!
//! Persists the serialized dashboard as a single-row document.

use async_trait::async_trait;
use rusqlite::{params, Connection};
use std::sync::Arc;
use tokio::sync::Mutex;

use nexus_core::{DashboardState, DomainError, DomainResult};

use super::traits::StateRepository;

pub struct SqliteStateRepository {
    conn: Arc<Mutex<Option<Connection>>>,
}

impl SqliteStateRepository {
    pub fn new(conn: Arc<Mutex<Option<Connection>>>) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl StateRepository for SqliteStateRepository {
    async fn load(&self) -> DomainResult<Option<DashboardState>> {
        let guard = self.conn.lock().await;
        let conn = guard
            .as_ref()
            .ok_or(DomainError::Internal("Database not initialized".to_string()))?;

        let mut stmt = conn
            .prepare("SELECT payload FROM dashboard_state WHERE id = 1")
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        let mut rows = stmt
            .query([])
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        if let Ok(Some(row)) = rows.next() {
            let payload: String = row
                .get(0)
                .map_err(|e| DomainError::Internal(e.to_string()))?;
            let state = serde_json::from_str(&payload)
                .map_err(|e| DomainError::Internal(format!("corrupt payload: {}", e)))?;
            Ok(Some(state))
        } else {
            Ok(None)
        }
    }

    async fn save(&self, state: &DashboardState) -> DomainResult<()> {
        let guard = self.conn.lock().await;
        let conn = guard
            .as_ref()
            .ok_or(DomainError::Internal("Database not initialized".to_string()))?;

        let payload = serde_json::to_string(state)
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        conn.execute(
            "INSERT OR REPLACE INTO dashboard_state (id, payload, updated_at) VALUES (1, ?, ?)",
            params![payload, chrono::Utc::now().timestamp_millis()],
        )
        .map_err(|e| DomainError::Internal(e.to_string()))?;

        Ok(())
    }
}
