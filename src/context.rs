//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::html;
use leptos::prelude::*;
use leptos_dragdrop::DndSignals;

use nexus_core::OrderingEngine;

use crate::store::UiStore;

/// App-wide handles provided via context. Everything here is `Copy` so
/// components can capture it freely.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// The ordering engine: sole owner of the link/category collections
    pub engine: RwSignal<OrderingEngine>,
    /// UI-only state (search, overlays, widgets toggle)
    pub ui: UiStore,
    /// Drag signal bundle shared by link cards and category zones
    pub dnd: DndSignals,
    /// True once persisted state has been loaded; gates the save effect
    pub ready: RwSignal<bool>,
    /// Search input node, focused by the Ctrl/Cmd+K hotkey
    pub search_input: NodeRef<html::Input>,
}

impl AppContext {
    /// Reactive edit-mode read (tracks the engine signal)
    pub fn edit_mode(&self) -> bool {
        self.engine.with(|e| e.edit_mode())
    }

    /// Toggle edit mode on both the engine (gesture gating) and the drag
    /// layer (mousedown arming)
    pub fn set_edit_mode(&self, enabled: bool) {
        self.engine.update(|e| e.set_edit_mode(enabled));
        self.dnd.enabled.set(enabled);
    }
}

/// Get the app context; panics if used outside `App`
pub fn use_app() -> AppContext {
    expect_context::<AppContext>()
}
