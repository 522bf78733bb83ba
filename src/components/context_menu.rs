//! Context Menu Component
//!
//! Right-click menu on a link card: open, copy URL, edit, reset clicks,
//! delete. A stale link id (deleted while the menu is up) just closes it.

use leptos::prelude::*;
use leptos::task::spawn_local;

use nexus_core::LinkItem;

use crate::app::confirm;
use crate::commands;
use crate::context::use_app;
use crate::store::{close_context_menu, open_link_editor, UiStateStoreFields};

#[component]
pub fn ContextMenu() -> impl IntoView {
    let ctx = use_app();
    let ui = ctx.ui;

    let menu = move || ui.context_menu().get();
    let current_link = move || -> Option<LinkItem> {
        let id = menu().link_id?;
        ctx.engine
            .with(|e| e.state().links.iter().find(|l| l.id == id).cloned())
    };

    let open = move |_| {
        if let Some(link) = current_link() {
            ctx.engine.update(|e| e.record_click(&link.id));
            spawn_local(async move {
                let _ = commands::open_url(&link.url).await;
            });
        }
        close_context_menu(&ui);
    };

    let copy_url = move |_| {
        if let Some(link) = current_link() {
            spawn_local(async move {
                let Some(win) = web_sys::window() else { return };
                let promise = win.navigator().clipboard().write_text(&link.url);
                if wasm_bindgen_futures::JsFuture::from(promise).await.is_err() {
                    web_sys::console::warn_1(&"[MENU] clipboard write failed".into());
                }
            });
        }
        close_context_menu(&ui);
    };

    let edit = move |_| {
        if let Some(link) = current_link() {
            open_link_editor(&ui, Some(link), None);
        } else {
            close_context_menu(&ui);
        }
    };

    let reset_clicks = move |_| {
        if let Some(link) = current_link() {
            ctx.engine.update(|e| e.reset_clicks(&link.id));
        }
        close_context_menu(&ui);
    };

    let delete = move |_| {
        if let Some(link) = current_link() {
            if confirm("Are you sure you want to delete this link?") {
                ctx.engine.update(|e| e.remove_link(&link.id));
            }
        }
        close_context_menu(&ui);
    };

    view! {
        <Show when=move || menu().visible>
            <div
                class="context-backdrop"
                on:click=move |_| close_context_menu(&ui)
                on:contextmenu=move |ev: web_sys::MouseEvent| {
                    ev.prevent_default();
                    close_context_menu(&ui);
                }
            ></div>
            <div
                class="context-menu"
                style=move || format!("top: {}px; left: {}px;", menu().y, menu().x)
                on:contextmenu=move |ev: web_sys::MouseEvent| ev.prevent_default()
            >
                <button class="context-item" on:click=open>"Open"</button>
                <button class="context-item" on:click=copy_url>"Copy URL"</button>
                <div class="context-divider"></div>
                <button class="context-item" on:click=edit>"Edit"</button>
                <button class="context-item" on:click=reset_clicks>"Reset Clicks"</button>
                <div class="context-divider"></div>
                <button class="context-item danger" on:click=delete>"Delete"</button>
            </div>
        </Show>
    }
}
