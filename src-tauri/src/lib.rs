//! Nexus Backend
//!
//! Layered architecture:
//! - repository: persistence of the dashboard document (SQLite)
//! - commands: Tauri command handlers
//!
//! Domain entities and the ordering engine live in the shared `nexus-core`
//! crate; the backend only stores and retrieves the serialized state.

use std::path::PathBuf;
use tauri::Manager;
use tracing::{error, info};

mod commands;
mod repository;

use repository::{init_db, DbState, SqliteStateRepository};

/// Application state shared across commands
pub struct AppState {
    pub repo: SqliteStateRepository,
    pub db_path: PathBuf,
}

/// Get database path from app handle
fn get_db_path(app_handle: &tauri::AppHandle) -> PathBuf {
    let app_dir = app_handle.path().app_data_dir().unwrap();
    std::fs::create_dir_all(&app_dir).unwrap();
    app_dir.join("nexus.db")
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    tauri::Builder::default()
        .plugin(tauri_plugin_dialog::init())
        .setup(|app| {
            // Single instance check - must be first!
            #[cfg(desktop)]
            app.handle().plugin(tauri_plugin_single_instance::init(|_app, _args, _cwd| {
                // Focus the existing window when a new instance tries to start
                #[cfg(desktop)]
                if let Some(window) = _app.get_webview_window("main") {
                    let _ = window.set_focus();
                }
            }))?;

            let db_path = get_db_path(app.handle());

            // Create the shared connection slot and manage state IMMEDIATELY;
            // commands answer "not initialized" until the background init
            // fills the slot and the frontend retries.
            let db_state = DbState::new();
            app.manage(AppState {
                repo: SqliteStateRepository::new(db_state.conn.clone()),
                db_path: db_path.clone(),
            });

            // Initialize database asynchronously in background
            tauri::async_runtime::spawn(async move {
                match init_db(&db_path).await {
                    Ok(conn) => {
                        *db_state.conn.lock().await = Some(conn);
                        info!("database initialized at {}", db_path.display());
                    }
                    Err(e) => {
                        error!("database init failed: {}", e);
                    }
                }
            });

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // Dashboard state
            commands::load_dashboard,
            commands::save_dashboard,
            // Export / import / icons
            commands::export_dashboard,
            commands::import_dashboard,
            commands::pick_icon_file,
            // OS integration
            commands::open_url,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
