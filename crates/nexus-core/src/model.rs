//! Dashboard Entities
//!
//! Categories, link items and the aggregate dashboard state.

use serde::{Deserialize, Serialize};

use super::entity::Entity;

/// A named group of links. Display order is insertion order in the
/// category collection; categories carry no position field of their own.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier
    pub id: String,
    /// Display title, freely mutable
    pub title: String,
}

impl Category {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}

impl Entity for Category {
    type Id = String;

    fn id(&self) -> &String {
        &self.id
    }
}

/// A bookmark tile. Belongs to exactly one category at all times; its place
/// in the global link sequence determines the order shown inside that
/// category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LinkItem {
    /// Unique identifier
    pub id: String,
    /// Display title
    pub title: String,
    /// Destination URL (normalized on save, see [`normalize_url`])
    pub url: String,
    /// Owning category id
    pub category_id: String,
    /// Optional icon as a data URL
    #[serde(default)]
    pub icon_data: Option<String>,
    /// Activation counter; only ever incremented or reset to zero
    #[serde(default)]
    pub clicks: u32,
}

impl LinkItem {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        url: impl Into<String>,
        category_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            url: url.into(),
            category_id: category_id.into(),
            icon_data: None,
            clicks: 0,
        }
    }
}

impl Entity for LinkItem {
    type Id = String;

    fn id(&self) -> &String {
        &self.id
    }
}

/// Dark/light display mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

/// User-customizable styling applied on top of the dark/light mode
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomTheme {
    pub primary_color: String,
    pub font_family: String,
    #[serde(default)]
    pub background_image: String,
    /// 0 to 100
    #[serde(default = "default_overlay_opacity")]
    pub background_overlay_opacity: u8,
}

fn default_overlay_opacity() -> u8 {
    80
}

impl Default for CustomTheme {
    fn default() -> Self {
        Self {
            primary_color: "#7c3aed".to_string(),
            font_family: "Inter".to_string(),
            background_image: String::new(),
            background_overlay_opacity: 80,
        }
    }
}

/// The whole persisted dashboard: the link/category collections the engine
/// owns plus the page chrome (title, subtitle, theming, scratchpad note).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardState {
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub links: Vec<LinkItem>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub custom_theme: CustomTheme,
    #[serde(default)]
    pub note: String,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            categories: Vec::new(),
            links: Vec::new(),
            title: "The Nexus".to_string(),
            subtitle: "Gateway to the digital realm".to_string(),
            theme: Theme::Dark,
            custom_theme: CustomTheme::default(),
            note: String::new(),
        }
    }
}

impl DashboardState {
    /// Starter content shown on first launch, before anything is persisted.
    pub fn starter() -> Self {
        let categories = vec![
            Category::new("cat_1", "Productivity"),
            Category::new("cat_2", "Entertainment"),
        ];
        let mut links = vec![
            LinkItem::new("link_1", "Gmail", "https://mail.google.com", "cat_1"),
            LinkItem::new("link_2", "GitHub", "https://github.com", "cat_1"),
            LinkItem::new("link_3", "YouTube", "https://youtube.com", "cat_2"),
        ];
        links[0].clicks = 12;
        links[1].clicks = 8;
        links[2].clicks = 25;
        Self {
            categories,
            links,
            ..Default::default()
        }
    }
}

/// Normalize a user-entered URL: prefix `https://` when no scheme is given.
/// An entirely empty value stays empty; the caller decides whether to reject
/// it at the form level.
pub fn normalize_url(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    let lower = trimmed.to_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_url_adds_scheme() {
        assert_eq!(normalize_url("example.com"), "https://example.com");
        assert_eq!(normalize_url("  example.com  "), "https://example.com");
    }

    #[test]
    fn test_normalize_url_keeps_existing_scheme() {
        assert_eq!(normalize_url("http://example.com"), "http://example.com");
        assert_eq!(normalize_url("HTTPS://Example.com"), "HTTPS://Example.com");
    }

    #[test]
    fn test_normalize_url_empty_stays_empty() {
        assert_eq!(normalize_url(""), "");
        assert_eq!(normalize_url("   "), "");
    }

    #[test]
    fn test_theme_serialization() {
        assert_eq!(Theme::Dark.as_str(), "dark");
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        let json = serde_json::to_string(&Theme::Light).unwrap();
        assert_eq!(json, "\"light\"");
    }

    #[test]
    fn test_starter_links_reference_starter_categories() {
        let state = DashboardState::starter();
        for link in &state.links {
            assert!(state.categories.iter().any(|c| c.id == link.category_id));
        }
    }

    #[test]
    fn test_state_deserializes_with_missing_fields() {
        let state: DashboardState = serde_json::from_str("{}").unwrap();
        assert!(state.categories.is_empty());
        assert_eq!(state.theme, Theme::Dark);
        assert_eq!(state.custom_theme.background_overlay_opacity, 80);
    }
}
