//! Commands Layer
//!
//! Tauri command handlers that bridge frontend to backend services.

mod dashboard_cmd;
mod file_cmd;
mod url_cmd;

pub use dashboard_cmd::*;
pub use file_cmd::*;
pub use url_cmd::*;
