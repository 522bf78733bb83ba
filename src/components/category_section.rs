//! Category Section Component
//!
//! One category: header (title, count, open-all, delete) and the link grid,
//! which doubles as a drop zone for cross-category drags.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use leptos_dragdrop::{make_on_category_mouseenter, make_on_mouseleave, DropTarget};
use nexus_core::CategoryGroup;

use crate::app::confirm;
use crate::commands;
use crate::components::LinkCard;
use crate::context::use_app;
use crate::store::open_link_editor;

#[component]
pub fn CategorySection(group: CategoryGroup, edit_mode: bool) -> impl IntoView {
    let ctx = use_app();
    let category = group.category;
    let links = group.links;
    let cat_id = category.id.clone();
    let link_count = links.len();

    let on_zone_mouseenter = make_on_category_mouseenter(ctx.dnd, cat_id.clone());
    let on_zone_mouseleave = make_on_mouseleave(ctx.dnd);

    let zone_class = {
        let cat_id = cat_id.clone();
        move || {
            let mut c = String::from("category-zone");
            let is_over = matches!(
                ctx.dnd.drop_target.get(),
                Some(DropTarget::Category(ref id)) if *id == cat_id
            );
            if is_over {
                c.push_str(" drop-over");
            }
            c
        }
    };

    let rename = {
        let cat_id = cat_id.clone();
        move |ev: web_sys::Event| {
            let Some(target) = ev.target() else { return };
            let Some(input) = target.dyn_ref::<web_sys::HtmlInputElement>() else { return };
            let title = input.value();
            ctx.engine.update(|e| e.rename_category(&cat_id, &title));
        }
    };

    let delete_category = {
        let cat_id = cat_id.clone();
        move |ev: web_sys::MouseEvent| {
            ev.stop_propagation();
            if confirm("Delete category and all its links?") {
                ctx.engine.update(|e| e.remove_category(&cat_id));
            }
        }
    };

    let add_link = {
        let cat_id = cat_id.clone();
        move |_| open_link_editor(&ctx.ui, None, Some(cat_id.clone()))
    };

    let open_all = {
        let title = category.title.clone();
        let urls: Vec<String> = links.iter().map(|l| l.url.clone()).collect();
        move |_| {
            if confirm(&format!("Open all {} links in \"{}\"?", urls.len(), title)) {
                for url in urls.clone() {
                    spawn_local(async move {
                        let _ = commands::open_url(&url).await;
                    });
                }
            }
        }
    };

    view! {
        <section class="category-section">
            <div class="category-header">
                {if edit_mode {
                    view! {
                        <input
                            class="category-title-input"
                            type="text"
                            placeholder="Category Name"
                            prop:value=category.title.clone()
                            on:change=rename
                        />
                    }.into_any()
                } else {
                    view! {
                        <div class="category-title-row">
                            <h2 class="category-title">{category.title.clone()}</h2>
                            <span class="category-count">{link_count}</span>
                            {(link_count > 0).then(|| view! {
                                <button class="icon-btn open-all-btn" title="Open All Links" on:click=open_all>
                                    {"\u{1F680}"}
                                </button>
                            })}
                        </div>
                    }.into_any()
                }}
                {edit_mode.then(|| view! {
                    <button class="icon-btn danger" title="Delete Category" on:click=delete_category>
                        {"\u{1F5D1}"}
                    </button>
                })}
            </div>

            <div
                class=zone_class
                on:mouseenter=on_zone_mouseenter
                on:mouseleave=on_zone_mouseleave
            >
                <div class="link-grid">
                    {links
                        .iter()
                        .cloned()
                        .map(|link| view! { <LinkCard link=link edit_mode=edit_mode /> })
                        .collect_view()}

                    <button class="add-link-card" title="Add New Link" on:click=add_link>
                        <span class="add-link-plus">"+"</span>
                        <span class="add-link-label">"Add Link"</span>
                    </button>
                </div>

                {links.is_empty().then(|| view! {
                    <div class="category-empty-hint">"Empty category"</div>
                })}
            </div>
        </section>
    }
}
