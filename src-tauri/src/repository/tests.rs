//! Repository Integration Tests
//!
//! Tests for SqliteStateRepository with in-memory and on-disk databases.

#[cfg(test)]
mod tests {
    use crate::repository::{init_db, SqliteStateRepository, StateRepository};
    use nexus_core::DashboardState;
    use std::path::PathBuf;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    async fn setup_repo(db_path: PathBuf) -> SqliteStateRepository {
        let conn = init_db(&db_path).await.expect("Failed to init test DB");
        SqliteStateRepository::new(Arc::new(Mutex::new(Some(conn))))
    }

    #[tokio::test]
    async fn test_load_before_first_save_is_none() {
        let repo = setup_repo(PathBuf::from(":memory:")).await;

        let loaded = repo.load().await.expect("Load failed");
        assert!(loaded.is_none());
    }

    #[tokio::test]
    async fn test_save_then_load_round_trips() {
        let repo = setup_repo(PathBuf::from(":memory:")).await;

        let state = DashboardState::starter();
        repo.save(&state).await.expect("Save failed");

        let loaded = repo.load().await.expect("Load failed").expect("No state");
        assert_eq!(loaded, state);
    }

    #[tokio::test]
    async fn test_save_replaces_previous_document() {
        let repo = setup_repo(PathBuf::from(":memory:")).await;

        repo.save(&DashboardState::starter()).await.unwrap();

        let mut renamed = DashboardState::starter();
        renamed.title = "Command Deck".to_string();
        repo.save(&renamed).await.unwrap();

        let loaded = repo.load().await.unwrap().unwrap();
        assert_eq!(loaded.title, "Command Deck");
        assert_eq!(loaded.links.len(), 3);
    }

    #[tokio::test]
    async fn test_state_survives_reconnect() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let db_path = dir.path().join("nexus.db");

        {
            let repo = setup_repo(db_path.clone()).await;
            repo.save(&DashboardState::starter()).await.unwrap();
        }

        let repo = setup_repo(db_path).await;
        let loaded = repo.load().await.unwrap();
        assert!(loaded.is_some());
        assert_eq!(loaded.unwrap().categories.len(), 2);
    }

    #[tokio::test]
    async fn test_uninitialized_connection_errors() {
        let repo = SqliteStateRepository::new(Arc::new(Mutex::new(None)));

        assert!(repo.load().await.is_err());
        assert!(repo.save(&DashboardState::default()).await.is_err());
    }
}
