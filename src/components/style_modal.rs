//! Style Modal Component
//!
//! Accent color, background image/overlay and font family customization.
//! Every control writes straight through to the engine so the page restyles
//! live while the modal is open.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use nexus_core::CustomTheme;

use crate::context::use_app;
use crate::store::UiStateStoreFields;

const PRESET_COLORS: &[&str] = &[
    "#7c3aed", // Purple (default)
    "#2563eb", // Blue
    "#059669", // Emerald
    "#dc2626", // Red
    "#db2777", // Pink
    "#ea580c", // Orange
];

const FONTS: &[(&str, &str)] = &[
    ("Inter", "Modern"),
    ("Roboto", "Neutral"),
    ("Poppins", "Geometric"),
    ("Lora", "Elegant"),
];

#[component]
pub fn StyleModal() -> impl IntoView {
    let ctx = use_app();
    let ui = ctx.ui;

    let current = move || ctx.engine.with(|e| e.state().custom_theme.clone());

    let apply = move |mutate: &dyn Fn(&mut CustomTheme)| {
        ctx.engine.update(|e| {
            let mut theme = e.state().custom_theme.clone();
            mutate(&mut theme);
            e.set_custom_theme(theme);
        });
    };

    let on_color_input = move |ev: web_sys::Event| {
        if let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) {
            let value = input.value();
            apply(&move |t| t.primary_color = value.clone());
        }
    };
    let on_background_change = move |ev: web_sys::Event| {
        if let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) {
            let value = input.value();
            apply(&move |t| t.background_image = value.clone());
        }
    };
    let on_overlay_input = move |ev: web_sys::Event| {
        if let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) {
            if let Ok(value) = input.value().parse::<u8>() {
                apply(&move |t| t.background_overlay_opacity = value.min(100));
            }
        }
    };

    view! {
        <Show when=move || ui.style_modal_open().get()>
            <div class="modal-backdrop">
                <div class="modal">
                    <div class="modal-header">
                        <h3>"Customize Style"</h3>
                        <button class="icon-btn" on:click=move |_| ui.style_modal_open().set(false)>
                            {"\u{00D7}"}
                        </button>
                    </div>

                    <div class="modal-body">
                        <label class="field-label">"Accent Color"</label>
                        <div class="color-row">
                            {PRESET_COLORS.iter().map(|&color| {
                                let selected = move || current().primary_color == color;
                                view! {
                                    <button
                                        class=move || if selected() { "color-swatch selected" } else { "color-swatch" }
                                        style=format!("background-color: {};", color)
                                        on:click=move |_| apply(&move |t| t.primary_color = color.to_string())
                                    ></button>
                                }
                            }).collect_view()}
                            <input
                                type="color"
                                class="color-input"
                                title="Custom Color"
                                prop:value=move || current().primary_color
                                on:input=on_color_input
                            />
                        </div>

                        <label class="field-label">"Background"</label>
                        <input
                            class="field-input"
                            type="text"
                            placeholder="Paste Image URL (e.g. Unsplash)..."
                            prop:value=move || current().background_image
                            on:change=on_background_change
                        />
                        <div class="field-hint">"Leave empty for default solid background."</div>

                        {move || (!current().background_image.is_empty()).then(|| view! {
                            <div class="overlay-row">
                                <span class="field-hint">
                                    "Overlay Opacity " {move || current().background_overlay_opacity} "%"
                                </span>
                                <input
                                    type="range"
                                    min="0"
                                    max="100"
                                    prop:value=move || current().background_overlay_opacity.to_string()
                                    on:input=on_overlay_input
                                />
                            </div>
                        })}

                        <label class="field-label">"Font Family"</label>
                        <div class="font-grid">
                            {FONTS.iter().map(|&(name, label)| {
                                let selected = move || current().font_family == name;
                                view! {
                                    <button
                                        class=move || if selected() { "font-choice selected" } else { "font-choice" }
                                        style=format!("font-family: {};", name)
                                        on:click=move |_| apply(&move |t| t.font_family = name.to_string())
                                    >
                                        <span class="font-name">{name}</span>
                                        <span class="font-label">{label}</span>
                                    </button>
                                }
                            }).collect_view()}
                        </div>
                    </div>

                    <div class="modal-actions">
                        <button
                            class="secondary-btn"
                            on:click=move |_| apply(&move |t| *t = CustomTheme::default())
                        >
                            "Reset"
                        </button>
                        <button class="primary-btn" on:click=move |_| ui.style_modal_open().set(false)>
                            "Done"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
