//! Nexus Core
//!
//! Domain entities and the ordering engine for the Nexus start page.
//! This crate has NO external dependencies (except serde for serialization),
//! so it compiles for both the WASM frontend and the native backend.

mod engine;
mod entity;
mod model;
mod transfer;

pub use engine::{CategoryGroup, CommitListener, DropKind, OrderingEngine};
pub use entity::{DomainError, DomainResult, Entity};
pub use model::{normalize_url, Category, CustomTheme, DashboardState, LinkItem, Theme};
pub use transfer::{export_json, parse_import, ImportDocument};
