//! Tauri Command Wrappers
//!
//! Frontend bindings to backend commands.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use nexus_core::DashboardState;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "core"], catch)]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

/// Backend command errors arrive as JS strings; anything else is debugged
fn error_text(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

async fn invoke_checked(cmd: &str, args: JsValue) -> Result<JsValue, String> {
    invoke(cmd, args).await.map_err(error_text)
}

// ========================
// Command Argument Structs
// ========================

#[derive(Serialize)]
pub struct SaveDashboardArgs<'a> {
    pub dashboard: &'a DashboardState,
}

#[derive(Serialize)]
pub struct OpenUrlArgs<'a> {
    pub url: &'a str,
}

#[derive(Serialize)]
pub struct ExportArgs<'a> {
    pub json: &'a str,
}

// ========================
// Dashboard State Commands
// ========================

pub async fn load_dashboard() -> Result<Option<DashboardState>, String> {
    let result = invoke_checked("load_dashboard", JsValue::NULL).await?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn save_dashboard(dashboard: &DashboardState) -> Result<(), String> {
    let js_args = serde_wasm_bindgen::to_value(&SaveDashboardArgs { dashboard })
        .map_err(|e| e.to_string())?;
    invoke_checked("save_dashboard", js_args).await?;
    Ok(())
}

// ========================
// Export / Import / Icons
// ========================

/// Returns false when the save dialog was cancelled
pub async fn export_dashboard(json: &str) -> Result<bool, String> {
    let js_args = serde_wasm_bindgen::to_value(&ExportArgs { json }).map_err(|e| e.to_string())?;
    let result = invoke_checked("export_dashboard", js_args).await?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

/// Returns the raw backup document, or None when the dialog was cancelled
pub async fn import_dashboard() -> Result<Option<String>, String> {
    let result = invoke_checked("import_dashboard", JsValue::NULL).await?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

/// Returns a data URL for the picked image, or None when cancelled
pub async fn pick_icon_file() -> Result<Option<String>, String> {
    let result = invoke_checked("pick_icon_file", JsValue::NULL).await?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

// ========================
// OS Integration
// ========================

pub async fn open_url(url: &str) -> Result<(), String> {
    let js_args = serde_wasm_bindgen::to_value(&OpenUrlArgs { url }).map_err(|e| e.to_string())?;
    invoke_checked("open_url", js_args).await?;
    Ok(())
}
