//! File Commands
//!
//! Native dialogs for icon picking and backup export/import.

use tauri::{command, AppHandle, Runtime};
use tauri_plugin_dialog::DialogExt;

/// Pick an image file and return it as a data URL for inline icon storage
#[command]
pub async fn pick_icon_file<R: Runtime>(app: AppHandle<R>) -> Result<Option<String>, String> {
    #[cfg(not(any(target_os = "android", target_os = "ios")))]
    {
        let result = app
            .dialog()
            .file()
            .add_filter("Images", &["png", "jpg", "jpeg", "gif", "webp", "svg"])
            .blocking_pick_file();
        let Some(picked) = result else {
            return Ok(None);
        };

        let path = std::path::PathBuf::from(picked.to_string());
        let bytes = std::fs::read(&path).map_err(|e| format!("Failed to read icon: {}", e))?;

        let mime_type = mime_guess::from_path(&path).first_or_octet_stream();
        let encoded = base64::Engine::encode(&base64::engine::general_purpose::STANDARD, &bytes);

        Ok(Some(format!("data:{};base64,{}", mime_type.essence_str(), encoded)))
    }
    #[cfg(any(target_os = "android", target_os = "ios"))]
    {
        // Not supported/implemented on mobile for now
        Ok(None)
    }
}

/// Save the exported backup document where the user chooses.
/// Returns false when the dialog is cancelled.
#[command]
pub async fn export_dashboard<R: Runtime>(app: AppHandle<R>, json: String) -> Result<bool, String> {
    #[cfg(not(any(target_os = "android", target_os = "ios")))]
    {
        let result = app
            .dialog()
            .file()
            .set_file_name("dashboard-backup.json")
            .add_filter("JSON", &["json"])
            .blocking_save_file();
        let Some(picked) = result else {
            return Ok(false);
        };

        let path = std::path::PathBuf::from(picked.to_string());
        std::fs::write(&path, json).map_err(|e| format!("Failed to write backup: {}", e))?;

        Ok(true)
    }
    #[cfg(any(target_os = "android", target_os = "ios"))]
    {
        let _ = json;
        Ok(false)
    }
}

/// Pick a backup document and return its raw contents for validation in the
/// core. Returns `None` when the dialog is cancelled.
#[command]
pub async fn import_dashboard<R: Runtime>(app: AppHandle<R>) -> Result<Option<String>, String> {
    #[cfg(not(any(target_os = "android", target_os = "ios")))]
    {
        let result = app
            .dialog()
            .file()
            .add_filter("JSON", &["json"])
            .blocking_pick_file();
        let Some(picked) = result else {
            return Ok(None);
        };

        let path = std::path::PathBuf::from(picked.to_string());
        let raw = std::fs::read_to_string(&path)
            .map_err(|e| format!("Failed to read backup: {}", e))?;

        Ok(Some(raw))
    }
    #[cfg(any(target_os = "android", target_os = "ios"))]
    {
        Ok(None)
    }
}
