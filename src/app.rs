//! Nexus Frontend App
//!
//! Root component: owns the engine signal, wires persistence and drag
//! gestures into it, and composes the page.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use wasm_bindgen::JsCast;

use gloo_timers::future::TimeoutFuture;
use leptos_dragdrop::{bind_global_mouseup, create_dnd_signals};

use nexus_core::{export_json, parse_import, DashboardState, OrderingEngine};

use crate::commands;
use crate::components::{
    CategoryBoard, ContextMenu, EditModal, Greeting, HeaderBar, Hero, StyleModal, Widgets,
};
use crate::context::AppContext;
use crate::hotkeys::bind_global_hotkeys;
use crate::store::{UiState, UiStateStoreFields, UiStore};

/// Serialize the dashboard and hand it to the native save dialog
pub fn export_backup(ctx: AppContext) {
    let json = match ctx.engine.with_untracked(|e| export_json(e.state())) {
        Ok(json) => json,
        Err(e) => {
            web_sys::console::error_1(&format!("[EXPORT] {}", e).into());
            return;
        }
    };
    spawn_local(async move {
        match commands::export_dashboard(&json).await {
            Ok(true) => web_sys::console::log_1(&"[EXPORT] backup written".into()),
            Ok(false) => {}
            Err(e) => web_sys::console::error_1(&format!("[EXPORT] {}", e).into()),
        }
    });
}

/// Pick a backup document, validate it in the core, apply it wholesale.
/// A rejected document leaves current state untouched.
pub fn import_backup(ctx: AppContext) {
    spawn_local(async move {
        match commands::import_dashboard().await {
            Ok(Some(raw)) => match parse_import(&raw) {
                Ok(doc) => {
                    ctx.engine.update(|e| e.apply_import(doc));
                    alert("Dashboard imported successfully!");
                }
                Err(e) => alert(&e.to_string()),
            },
            Ok(None) => {}
            Err(e) => alert(&format!("Import failed: {}", e)),
        }
    });
}

pub fn alert(message: &str) {
    if let Some(win) = web_sys::window() {
        let _ = win.alert_with_message(message);
    }
}

pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|win| win.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// `#rrggbb` -> `r g b` for the CSS variables; malformed input falls back to
/// the default accent.
fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return (124, 58, 237);
    }
    let parse = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16);
    match (parse(0), parse(2), parse(4)) {
        (Ok(r), Ok(g), Ok(b)) => (r, g, b),
        _ => (124, 58, 237),
    }
}

#[cfg(test)]
mod tests {
    use super::hex_to_rgb;

    #[test]
    fn test_hex_to_rgb_parses_channels() {
        assert_eq!(hex_to_rgb("#7c3aed"), (124, 58, 237));
        assert_eq!(hex_to_rgb("2563eb"), (37, 99, 235));
    }

    #[test]
    fn test_hex_to_rgb_falls_back_on_garbage() {
        assert_eq!(hex_to_rgb(""), (124, 58, 237));
        assert_eq!(hex_to_rgb("#12345"), (124, 58, 237));
        assert_eq!(hex_to_rgb("#zzzzzz"), (124, 58, 237));
    }
}

#[component]
pub fn App() -> impl IntoView {
    let engine = RwSignal::new(OrderingEngine::new(DashboardState::starter()));
    let ui: UiStore = Store::new(UiState::default());
    let dnd = create_dnd_signals();
    let ready = RwSignal::new(false);
    let search_input = NodeRef::new();

    let ctx = AppContext {
        engine,
        ui,
        dnd,
        ready,
        search_input,
    };
    provide_context(ctx);

    // Load persisted state, retrying while the backend database comes up
    Effect::new(move |_| {
        spawn_local(async move {
            let mut attempts = 0u32;
            let loaded = loop {
                match commands::load_dashboard().await {
                    Ok(state) => break state,
                    Err(_) if attempts < 20 => {
                        attempts += 1;
                        TimeoutFuture::new(250).await;
                    }
                    Err(e) => {
                        web_sys::console::warn_1(&format!("[APP] load failed: {}", e).into());
                        break None;
                    }
                }
            };
            if let Some(state) = loaded {
                web_sys::console::log_1(&format!("[APP] loaded {} links", state.links.len()).into());
                engine.update(|e| e.replace_state(state));
            }
            ready.set(true);
        });
    });

    // Persistence sink: fire-and-forget save on every committed mutation
    Effect::new(move |prev: Option<u64>| {
        let revision = engine.with(|e| e.revision());
        if ready.get() && prev.is_some_and(|p| p != revision) {
            let state = engine.with_untracked(|e| e.state().clone());
            spawn_local(async move {
                if let Err(e) = commands::save_dashboard(&state).await {
                    web_sys::console::warn_1(&format!("[APP] save failed: {}", e).into());
                }
            });
        }
        revision
    });

    // Custom theme CSS variables on the document root
    Effect::new(move |_| {
        let custom = engine.with(|e| e.state().custom_theme.clone());
        let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Some(root) = doc.document_element() else {
            return;
        };
        let Ok(root) = root.dyn_into::<web_sys::HtmlElement>() else {
            return;
        };
        let style = root.style();
        let (r, g, b) = hex_to_rgb(&custom.primary_color);
        let _ = style.set_property("--color-primary", &format!("{} {} {}", r, g, b));
        let _ = style.set_property(
            "--color-primary-hover",
            &format!(
                "{} {} {}",
                r.saturating_sub(30),
                g.saturating_sub(30),
                b.saturating_sub(30)
            ),
        );
        let _ = style.set_property("--font-family", &custom.font_family);
    });

    // Drag gestures -> engine events
    Effect::new(move |_| {
        if let Some(id) = dnd.dragging_id.get() {
            engine.update(|e| e.drag_start(&id));
        }
    });
    Effect::new(move |_| {
        if let Some(target) = dnd.drop_target.get() {
            let id = target.id().to_string();
            engine.update(|e| e.drag_over(&id));
        }
    });
    bind_global_mouseup(dnd, move |dragged, target| {
        let target_id = target.map(|t| t.id().to_string());
        web_sys::console::log_1(
            &format!("[DND] drop: dragged={}, target={:?}", dragged, target_id).into(),
        );
        engine.update(|e| e.drag_end(target_id.as_deref()));
    });

    bind_global_hotkeys(ctx);

    let theme_class = move || engine.with(|e| format!("app-shell {}", e.state().theme.as_str()));
    let background_style = move || {
        let image = engine.with(|e| e.state().custom_theme.background_image.clone());
        if image.is_empty() {
            String::new()
        } else {
            format!(
                "background-image: url({}); background-size: cover; background-position: center;",
                image
            )
        }
    };
    let overlay_style = move || {
        let custom = engine.with(|e| e.state().custom_theme.clone());
        if custom.background_image.is_empty() {
            "display: none;".to_string()
        } else {
            format!(
                "opacity: {};",
                f64::from(custom.background_overlay_opacity) / 100.0
            )
        }
    };
    let widgets_class = move || {
        if ui.show_widgets().get() {
            "widgets-panel open"
        } else {
            "widgets-panel"
        }
    };
    let has_categories = move || engine.with(|e| !e.state().categories.is_empty());

    view! {
        <div class=theme_class style=background_style>
            <div class="background-overlay" style=overlay_style></div>
            <div class="app-frame">
                <HeaderBar />
                <div class="content-row">
                    <main class="main-scroll">
                        <div class="page-column">
                            <Greeting />
                            <Hero />
                            <CategoryBoard />
                            <Show when=move || !has_categories()>
                                <div class="empty-state">
                                    <h3>"Initialize Workspace"</h3>
                                    <p>"Create a category to begin constructing your dashboard."</p>
                                    <button
                                        class="primary-btn"
                                        on:click=move |_| {
                                            ctx.engine.update(|e| { e.add_category("New Category"); });
                                            ctx.set_edit_mode(true);
                                        }
                                    >
                                        "Create Category"
                                    </button>
                                </div>
                            </Show>
                        </div>
                    </main>

                    <aside class=widgets_class>
                        <Widgets />
                    </aside>
                </div>
            </div>

            <EditModal />
            <StyleModal />
            <ContextMenu />
        </div>
    }
}
