//! Hero Component
//!
//! Dashboard title and subtitle (editable in edit mode) plus the edit-mode
//! action bar (new category, import, export).

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::app::{export_backup, import_backup};
use crate::context::use_app;

#[component]
pub fn Hero() -> impl IntoView {
    let ctx = use_app();

    let title = move || ctx.engine.with(|e| e.state().title.clone());
    let subtitle = move || ctx.engine.with(|e| e.state().subtitle.clone());

    let input_value = |ev: &web_sys::Event| -> Option<String> {
        let target = ev.target()?;
        let input = target.dyn_ref::<web_sys::HtmlInputElement>()?.clone();
        Some(input.value())
    };

    let set_title = move |ev: web_sys::Event| {
        if let Some(value) = input_value(&ev) {
            ctx.engine.update(|e| e.set_title(&value));
        }
    };
    let set_subtitle = move |ev: web_sys::Event| {
        if let Some(value) = input_value(&ev) {
            ctx.engine.update(|e| e.set_subtitle(&value));
        }
    };

    let add_category = move |_| {
        ctx.engine.update(|e| {
            e.add_category("New Category");
        });
    };

    view! {
        <div class="hero">
            {move || if ctx.edit_mode() {
                view! {
                    <div class="hero-edit">
                        <input
                            class="hero-title-input"
                            type="text"
                            placeholder="Dashboard Title"
                            prop:value=title()
                            on:change=set_title
                        />
                        <input
                            class="hero-subtitle-input"
                            type="text"
                            placeholder="Enter a subtitle..."
                            prop:value=subtitle()
                            on:change=set_subtitle
                        />
                        <div class="hero-actions">
                            <button class="primary-btn" on:click=add_category>
                                "+ New Category"
                            </button>
                            <button class="secondary-btn" on:click=move |_| import_backup(ctx)>
                                "Import"
                            </button>
                            <button class="secondary-btn" on:click=move |_| export_backup(ctx)>
                                "Export"
                            </button>
                        </div>
                    </div>
                }.into_any()
            } else {
                view! {
                    <div class="hero-display">
                        <h1 class="hero-title">{title()}</h1>
                        <p class="hero-subtitle">{subtitle()}</p>
                    </div>
                }.into_any()
            }}
        </div>
    }
}
