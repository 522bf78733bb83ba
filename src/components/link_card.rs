//! Link Card Component
//!
//! One bookmark tile. Draggable in edit mode; activates (and counts) the
//! link otherwise. Right-click opens the context menu.

use leptos::prelude::*;
use leptos::task::spawn_local;

use leptos_dragdrop::{make_on_link_mouseenter, make_on_mouseleave, make_on_mousedown, DropTarget};
use nexus_core::LinkItem;

use crate::app::confirm;
use crate::commands;
use crate::context::use_app;
use crate::store::{open_context_menu, open_link_editor};

/// Links clicked more than this often get the popular badge
const POPULAR_THRESHOLD: u32 = 5;

#[component]
pub fn LinkCard(link: LinkItem, edit_mode: bool) -> impl IntoView {
    let ctx = use_app();
    let id = link.id.clone();
    let is_popular = link.clicks > POPULAR_THRESHOLD;

    let on_mousedown = make_on_mousedown(ctx.dnd, id.clone());
    let on_mouseenter = make_on_link_mouseenter(ctx.dnd, id.clone());
    let on_mouseleave = make_on_mouseleave(ctx.dnd);

    let card_class = {
        let id = id.clone();
        move || {
            let mut c = String::from("link-card");
            if ctx.dnd.dragging_id.get().as_deref() == Some(id.as_str()) {
                c.push_str(" dragging");
            }
            let is_target = matches!(
                ctx.dnd.drop_target.get(),
                Some(DropTarget::Link(ref target)) if *target == id
            );
            if is_target {
                c.push_str(" drop-target");
            }
            c
        }
    };

    let activate = {
        let link = link.clone();
        move |_: web_sys::MouseEvent| {
            // The mouseup that finished a drag also produces a click
            if ctx.dnd.drag_just_ended.get_untracked() {
                return;
            }
            if ctx.edit_mode() {
                open_link_editor(&ctx.ui, Some(link.clone()), None);
                return;
            }
            let id = link.id.clone();
            let url = link.url.clone();
            ctx.engine.update(|e| e.record_click(&id));
            spawn_local(async move {
                if let Err(e) = commands::open_url(&url).await {
                    web_sys::console::warn_1(&format!("[LINK] open failed: {}", e).into());
                }
            });
        }
    };

    let on_context_menu = {
        let id = id.clone();
        move |ev: web_sys::MouseEvent| {
            ev.prevent_default();
            // Keep the menu inside the right edge
            let menu_width = 192;
            let mut x = ev.page_x();
            let y = ev.page_y();
            if let Some(win) = web_sys::window() {
                if let Ok(width) = win.inner_width() {
                    let width = width.as_f64().unwrap_or(0.0) as i32;
                    if x + menu_width > width {
                        x = width - menu_width - 10;
                    }
                }
            }
            open_context_menu(&ctx.ui, x, y, id.clone());
        }
    };

    let delete = {
        let id = id.clone();
        move |ev: web_sys::MouseEvent| {
            ev.stop_propagation();
            if confirm("Are you sure you want to delete this link?") {
                ctx.engine.update(|e| e.remove_link(&id));
            }
        }
    };

    view! {
        <div
            class=card_class
            on:mousedown=on_mousedown
            on:mouseenter=on_mouseenter
            on:mouseleave=on_mouseleave
            on:click=activate
            on:contextmenu=on_context_menu
        >
            {(!edit_mode && is_popular).then(|| view! {
                <span class="popular-badge" title="Popular Link">{"\u{1F525}"}</span>
            })}

            {edit_mode.then(|| view! {
                <span class="drag-handle" title="Drag to reorder">{"\u{2847}"}</span>
                <button class="card-delete-btn" title="Delete Link" on:click=delete>
                    {"\u{00D7}"}
                </button>
            })}

            <div class="link-icon">
                {match link.icon_data.clone() {
                    Some(icon) => view! {
                        <img src=icon alt=link.title.clone() />
                    }.into_any(),
                    None => view! {
                        <span class="link-icon-fallback">{"\u{2197}"}</span>
                    }.into_any(),
                }}
            </div>
            <span class="link-title">{link.title.clone()}</span>
        </div>
    }
}
