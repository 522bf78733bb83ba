//! Tauri Commands for Dashboard State
//!
//! Exposes load/save of the persisted dashboard to the frontend via IPC.

use tauri::State;

use nexus_core::DashboardState;

use crate::repository::StateRepository;
use crate::AppState;

/// Load the persisted dashboard. `None` on a fresh profile; the frontend
/// falls back to starter content.
#[tauri::command]
pub async fn load_dashboard(state: State<'_, AppState>) -> Result<Option<DashboardState>, String> {
    state.repo.load().await.map_err(|e| e.to_string())
}

/// Persist the full current dashboard (fire-and-forget from the frontend's
/// point of view).
#[tauri::command]
pub async fn save_dashboard(
    state: State<'_, AppState>,
    dashboard: DashboardState,
) -> Result<(), String> {
    state.repo.save(&dashboard).await.map_err(|e| e.to_string())
}
