//! Repository Layer - Core Traits
//!
//! Defines the abstract interface for dashboard persistence.
//! Implementations can use SQLite, in-memory, etc.

use async_trait::async_trait;
use nexus_core::{DashboardState, DomainResult};

/// Persistence port for the dashboard aggregate.
///
/// The whole dashboard travels as one document: the storage layer is flat
/// key-value, no relational mapping of the collections. The engine treats
/// `save` as fire-and-forget; nothing upstream awaits an acknowledgement.
#[async_trait]
pub trait StateRepository: Send + Sync {
    /// Load the persisted dashboard, `None` before the first save
    async fn load(&self) -> DomainResult<Option<DashboardState>>;

    /// Persist the full current dashboard, replacing the previous document
    async fn save(&self, state: &DashboardState) -> DomainResult<()>;
}
