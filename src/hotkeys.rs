//! Global Hotkeys
//!
//! Document-level keydown bindings: Ctrl/Cmd+K focuses search, Escape closes
//! overlays, Alt+N starts a new link, Alt+W toggles the widgets sidebar.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::context::AppContext;
use crate::store::{close_overlays, open_link_editor, UiStateStoreFields};

pub fn bind_global_hotkeys(ctx: AppContext) {
    use wasm_bindgen::closure::Closure;

    let on_keydown = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(move |ev: web_sys::KeyboardEvent| {
        let key = ev.key();

        // Search hotkey (Cmd+K / Ctrl+K)
        if (ev.meta_key() || ev.ctrl_key()) && key == "k" {
            ev.prevent_default();
            if let Some(input) = ctx.search_input.get_untracked() {
                let _ = input.focus();
            }
        }

        // Close overlays on Esc
        if key == "Escape" {
            close_overlays(&ctx.ui);
        }

        // Power user hotkeys
        if ev.alt_key() && key == "n" {
            ev.prevent_default();
            let first_category = ctx
                .engine
                .with_untracked(|e| e.state().categories.first().map(|c| c.id.clone()));
            match first_category {
                Some(id) => open_link_editor(&ctx.ui, None, Some(id)),
                None => {
                    ctx.engine.update(|e| {
                        e.add_category("New Category");
                    });
                    ctx.set_edit_mode(true);
                }
            }
        }
        if ev.alt_key() && key == "w" {
            ev.prevent_default();
            ctx.ui.show_widgets().update(|v| *v = !*v);
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref());
        }
    }
    on_keydown.forget();
}
