//! Core Entity Trait
//!
//! Basic contract for all domain entities: a unique identifier and
//! thread-safety, so entities can cross the IPC boundary freely.

use serde::{Deserialize, Serialize};

/// Core trait for all domain entities
pub trait Entity: Sized + Send + Sync + Clone {
    /// The type of the entity's unique identifier
    type Id: Clone + Eq + std::hash::Hash + Send + Sync;

    /// Returns a reference to the entity's unique identifier
    fn id(&self) -> &Self::Id;
}

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
///
/// The only error a user ever sees is a rejected import; everything else in
/// this subsystem resolves to a silent no-op.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum DomainError {
    InvalidImport(String),
    NotFound(String),
    Internal(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainError::InvalidImport(msg) => write!(f, "Invalid import: {}", msg),
            DomainError::NotFound(msg) => write!(f, "Not found: {}", msg),
            DomainError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}
