//! UI State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Only UI chrome
//! lives here; the link/category collections are owned by the ordering
//! engine in `nexus-core`.

use leptos::prelude::*;
use reactive_stores::Store;

use nexus_core::LinkItem;

/// Context menu placement and subject
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContextMenuState {
    pub visible: bool,
    pub x: i32,
    pub y: i32,
    pub link_id: Option<String>,
}

/// UI-only state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct UiState {
    /// Free-text filter applied to the grouped view; a leading '/' switches
    /// the header into command-palette mode
    pub search_query: String,
    /// Widgets sidebar visibility
    pub show_widgets: bool,
    /// Link editor modal
    pub modal_open: bool,
    /// Link being edited (None = creating a new one)
    pub editing_link: Option<LinkItem>,
    /// Category preselected for a new link
    pub target_category: Option<String>,
    /// Style customization modal
    pub style_modal_open: bool,
    /// Right-click menu on a link card
    pub context_menu: ContextMenuState,
}

/// Type alias for the store
pub type UiStore = Store<UiState>;

// ========================
// Store Helper Functions
// ========================

/// Open the link editor, either on an existing link or blank for a new one
pub fn open_link_editor(ui: &UiStore, link: Option<LinkItem>, target_category: Option<String>) {
    ui.editing_link().set(link);
    ui.target_category().set(target_category);
    ui.modal_open().set(true);
}

/// Close the link editor and forget its subject
pub fn close_link_editor(ui: &UiStore) {
    ui.modal_open().set(false);
    ui.editing_link().set(None);
    ui.target_category().set(None);
}

/// Show the context menu for a link at the given page position
pub fn open_context_menu(ui: &UiStore, x: i32, y: i32, link_id: String) {
    ui.context_menu().set(ContextMenuState {
        visible: true,
        x,
        y,
        link_id: Some(link_id),
    });
}

/// Hide the context menu
pub fn close_context_menu(ui: &UiStore) {
    ui.context_menu().set(ContextMenuState::default());
}

/// Close every overlay at once (Escape)
pub fn close_overlays(ui: &UiStore) {
    close_context_menu(ui);
    close_link_editor(ui);
    ui.style_modal_open().set(false);
}
