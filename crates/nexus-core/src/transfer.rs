//! Export / Import
//!
//! Serializes the dashboard to a portable JSON document and validates
//! documents coming back in. Import is all-or-nothing: a rejected document
//! leaves current state untouched.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::entity::{DomainError, DomainResult};
use crate::model::{Category, CustomTheme, DashboardState, LinkItem, Theme};

/// The portable document shape: `categories`, `links`, `title`, `subtitle`,
/// `theme` (the custom-theme block).
#[derive(Debug, Serialize)]
struct ExportDocument<'a> {
    categories: &'a [Category],
    links: &'a [LinkItem],
    title: &'a str,
    subtitle: &'a str,
    theme: &'a CustomTheme,
}

/// Parsed import document. `categories` and `links` are required; the rest
/// falls back to current values when absent. Unrecognized fields are
/// ignored. `mode` (dark/light) is accepted on import only.
#[derive(Debug, Clone, Deserialize)]
pub struct ImportDocument {
    pub categories: Vec<Category>,
    pub links: Vec<LinkItem>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub theme: Option<CustomTheme>,
    #[serde(default)]
    pub mode: Option<Theme>,
}

/// Serialize the current dashboard into the portable document
pub fn export_json(state: &DashboardState) -> DomainResult<String> {
    let doc = ExportDocument {
        categories: &state.categories,
        links: &state.links,
        title: &state.title,
        subtitle: &state.subtitle,
        theme: &state.custom_theme,
    };
    serde_json::to_string_pretty(&doc).map_err(|e| DomainError::Internal(e.to_string()))
}

/// Parse and validate an import document. Both `categories` and `links`
/// must be present or the whole document is rejected.
pub fn parse_import(raw: &str) -> DomainResult<ImportDocument> {
    let value: Value = serde_json::from_str(raw)
        .map_err(|e| DomainError::InvalidImport(format!("not valid JSON: {}", e)))?;
    let object = value
        .as_object()
        .ok_or_else(|| DomainError::InvalidImport("expected a JSON object".to_string()))?;
    for key in ["categories", "links"] {
        if !object.contains_key(key) {
            return Err(DomainError::InvalidImport(format!(
                "missing required key `{}`",
                key
            )));
        }
    }
    serde_json::from_value(value).map_err(|e| DomainError::InvalidImport(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::OrderingEngine;

    #[test]
    fn test_export_has_exact_top_level_keys() {
        let json = export_json(&DashboardState::starter()).unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();
        let object = value.as_object().unwrap();
        let mut keys: Vec<&str> = object.keys().map(|k| k.as_str()).collect();
        keys.sort_unstable();
        assert_eq!(keys, vec!["categories", "links", "subtitle", "theme", "title"]);
    }

    #[test]
    fn test_import_rejects_missing_required_keys() {
        let err = parse_import(r#"{"categories": []}"#).unwrap_err();
        assert!(matches!(err, DomainError::InvalidImport(_)));
        let err = parse_import(r#"{"links": []}"#).unwrap_err();
        assert!(matches!(err, DomainError::InvalidImport(_)));
    }

    #[test]
    fn test_import_rejects_non_object() {
        assert!(parse_import("[1, 2, 3]").is_err());
        assert!(parse_import("not json at all").is_err());
    }

    #[test]
    fn test_import_ignores_unknown_fields() {
        let doc = parse_import(
            r#"{"categories": [], "links": [], "wallpaperPack": "aurora"}"#,
        )
        .unwrap();
        assert!(doc.categories.is_empty());
        assert!(doc.title.is_none());
    }

    #[test]
    fn test_import_optional_fields_fall_back() {
        let mut engine = OrderingEngine::new(DashboardState::starter());
        let title_before = engine.state().title.clone();
        let doc = parse_import(r#"{"categories": [], "links": []}"#).unwrap();
        engine.apply_import(doc);
        assert_eq!(engine.state().title, title_before);
        assert!(engine.state().categories.is_empty());
        assert!(engine.state().links.is_empty());
    }

    #[test]
    fn test_export_import_round_trip() {
        let state = DashboardState::starter();
        let json = export_json(&state).unwrap();
        let doc = parse_import(&json).unwrap();
        let mut engine = OrderingEngine::new(DashboardState::default());
        engine.apply_import(doc);
        assert_eq!(engine.state().categories, state.categories);
        assert_eq!(engine.state().links, state.links);
        assert_eq!(engine.state().title, state.title);
        assert_eq!(engine.state().custom_theme, state.custom_theme);
    }

    #[test]
    fn test_rejected_import_leaves_state_untouched() {
        let mut engine = OrderingEngine::new(DashboardState::starter());
        let before = engine.state().clone();
        if let Ok(doc) = parse_import(r#"{"title": "hijack"}"#) {
            engine.apply_import(doc);
        }
        assert_eq!(engine.state(), &before);
        assert_eq!(engine.revision(), 0);
    }
}
