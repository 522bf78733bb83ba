//! URL Commands
//!
//! Opens link destinations in the system browser.

use tracing::warn;

/// Open a link in the default browser. Only web schemes are allowed through;
/// anything else is refused at this boundary.
#[tauri::command]
pub async fn open_url(url: String) -> Result<(), String> {
    let lower = url.to_lowercase();
    if !lower.starts_with("http://") && !lower.starts_with("https://") {
        warn!("refused to open non-web url: {}", url);
        return Err("Only http(s) links can be opened".to_string());
    }
    open::that(&url).map_err(|e| format!("Failed to open browser: {}", e))
}
