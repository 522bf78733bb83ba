//! Edit Modal Component
//!
//! Create/edit form for a link: title, URL, category and icon. The icon can
//! be picked from disk (stored as a data URL) or pointed at a favicon
//! service derived from the URL.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::app::alert;
use crate::commands;
use crate::context::use_app;
use crate::store::{close_link_editor, UiStateStoreFields};

/// Hostname part of a URL, scheme optional
fn domain_of(url: &str) -> Option<String> {
    let rest = url.trim();
    let rest = rest
        .strip_prefix("https://")
        .or_else(|| rest.strip_prefix("http://"))
        .unwrap_or(rest);
    let domain = rest.split(['/', '?']).next()?;
    if domain.is_empty() {
        None
    } else {
        Some(domain.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::domain_of;

    #[test]
    fn test_domain_of_strips_scheme_and_path() {
        assert_eq!(domain_of("https://mail.google.com/inbox"), Some("mail.google.com".to_string()));
        assert_eq!(domain_of("github.com?tab=repos"), Some("github.com".to_string()));
        assert_eq!(domain_of("  "), None);
    }
}

#[component]
pub fn EditModal() -> impl IntoView {
    let ctx = use_app();
    let ui = ctx.ui;

    let title = RwSignal::new(String::new());
    let url = RwSignal::new(String::new());
    let category_id = RwSignal::new(String::new());
    let icon_data = RwSignal::new(None::<String>);

    // Re-seed the form whenever the modal opens
    Effect::new(move |_| {
        if !ui.modal_open().get() {
            return;
        }
        match ui.editing_link().get_untracked() {
            Some(link) => {
                title.set(link.title.clone());
                url.set(link.url.clone());
                category_id.set(link.category_id.clone());
                icon_data.set(link.icon_data.clone());
            }
            None => {
                let preselected = ui.target_category().get_untracked().or_else(|| {
                    ctx.engine
                        .with_untracked(|e| e.state().categories.first().map(|c| c.id.clone()))
                });
                title.set(String::new());
                url.set(String::new());
                category_id.set(preselected.unwrap_or_default());
                icon_data.set(None);
            }
        }
    });

    let on_title_input = move |ev: web_sys::Event| {
        if let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) {
            title.set(input.value());
        }
    };
    let on_url_input = move |ev: web_sys::Event| {
        if let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) {
            url.set(input.value());
        }
    };
    let on_category_change = move |ev: web_sys::Event| {
        if let Some(select) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlSelectElement>().ok()) {
            category_id.set(select.value());
        }
    };

    let pick_icon = move |_| {
        spawn_local(async move {
            match commands::pick_icon_file().await {
                Ok(Some(data)) => icon_data.set(Some(data)),
                Ok(None) => {}
                Err(e) => alert(&format!("Could not load icon: {}", e)),
            }
        });
    };

    let fetch_favicon = move |_| {
        let Some(domain) = domain_of(&url.get_untracked()) else {
            alert("Please enter a valid URL first.");
            return;
        };
        icon_data.set(Some(format!(
            "https://www.google.com/s2/favicons?domain={}&sz=128",
            domain
        )));
        // Auto-fill title if empty
        if title.get_untracked().is_empty() {
            let label = domain.split('.').next().unwrap_or(&domain);
            let mut chars = label.chars();
            let capitalized = match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            };
            title.set(capitalized);
        }
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = title.get_untracked();
        let address = url.get_untracked();
        if name.is_empty() || address.is_empty() {
            return;
        }
        let category = category_id.get_untracked();
        let icon = icon_data.get_untracked();
        match ui.editing_link().get_untracked() {
            Some(link) => ctx.engine.update(|e| {
                e.update_link(&link.id, &name, &address, &category, icon);
            }),
            None => ctx.engine.update(|e| {
                e.add_link(&name, &address, &category, icon);
            }),
        }
        close_link_editor(&ui);
    };

    let heading = move || {
        if ui.editing_link().get().is_some() {
            "Edit Link"
        } else {
            "Add New Link"
        }
    };

    view! {
        <Show when=move || ui.modal_open().get()>
            <div class="modal-backdrop">
                <div class="modal">
                    <div class="modal-header">
                        <h3>{heading}</h3>
                        <button class="icon-btn" on:click=move |_| close_link_editor(&ui)>
                            {"\u{00D7}"}
                        </button>
                    </div>

                    <form class="modal-body" on:submit=on_submit>
                        <div class="icon-picker" on:click=pick_icon title="Pick an image">
                            {move || match icon_data.get() {
                                Some(icon) => view! {
                                    <img class="icon-preview" src=icon alt="Preview" />
                                }.into_any(),
                                None => view! {
                                    <span class="icon-placeholder">"Upload"</span>
                                }.into_any(),
                            }}
                        </div>

                        <label class="field-label">"URL"</label>
                        <input
                            class="field-input"
                            type="text"
                            placeholder="example.com"
                            prop:value=move || url.get()
                            on:input=on_url_input
                        />
                        {move || (!url.get().is_empty() && icon_data.get().is_none()).then(|| view! {
                            <button type="button" class="link-btn" on:click=fetch_favicon>
                                "Auto-fetch icon"
                            </button>
                        })}

                        <label class="field-label">"Title"</label>
                        <input
                            class="field-input"
                            type="text"
                            placeholder="My Link"
                            prop:value=move || title.get()
                            on:input=on_title_input
                        />

                        <label class="field-label">"Category"</label>
                        <select
                            class="field-input"
                            prop:value=move || category_id.get()
                            on:change=on_category_change
                        >
                            <For
                                each=move || ctx.engine.with(|e| e.state().categories.clone())
                                key=|c| c.clone()
                                children=move |c| {
                                    view! { <option value=c.id.clone()>{c.title.clone()}</option> }
                                }
                            />
                        </select>

                        <div class="modal-actions">
                            <button type="button" class="secondary-btn" on:click=move |_| close_link_editor(&ui)>
                                "Cancel"
                            </button>
                            <button type="submit" class="primary-btn">
                                "Save Link"
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
