//! Header Bar Component
//!
//! Sticky header: widgets toggle, search with slash-command palette, theme
//! toggle, style modal button and the edit-mode switch.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use nexus_core::Theme;

use crate::app::export_backup;
use crate::context::{use_app, AppContext};
use crate::store::UiStateStoreFields;

/// Slash commands offered in the palette
const COMMANDS: &[(&str, &str)] = &[
    ("/theme", "Toggle Dark/Light Mode"),
    ("/add", "Add New Category"),
    ("/widgets", "Toggle Widgets"),
    ("/export", "Export Configuration"),
];

fn run_command(ctx: AppContext, cmd: &str) {
    match cmd {
        "/theme" => ctx.engine.update(|e| {
            let next = e.state().theme.toggled();
            e.set_theme(next);
        }),
        "/add" => {
            ctx.engine.update(|e| {
                e.add_category("New Category");
            });
            ctx.set_edit_mode(true);
        }
        "/widgets" => ctx.ui.show_widgets().update(|v| *v = !*v),
        "/export" => export_backup(ctx),
        _ => {}
    }
}

#[component]
pub fn HeaderBar() -> impl IntoView {
    let ctx = use_app();
    let ui = ctx.ui;

    let query = move || ui.search_query().get();
    let is_command = move || query().starts_with('/');
    let matching_commands = move || {
        let q = query();
        COMMANDS
            .iter()
            .filter(|(cmd, _)| cmd.contains(&q))
            .copied()
            .collect::<Vec<_>>()
    };

    let on_search_input = move |ev: web_sys::Event| {
        let Some(target) = ev.target() else { return };
        let Some(input) = target.dyn_ref::<web_sys::HtmlInputElement>() else { return };
        ui.search_query().set(input.value());
    };

    let toggle_theme = move |_| {
        ctx.engine.update(|e| {
            let next = e.state().theme.toggled();
            e.set_theme(next);
        });
    };

    let toggle_widgets = move |_| ui.show_widgets().update(|v| *v = !*v);

    let toggle_edit = move |_| {
        let enabled = !ctx.engine.with_untracked(|e| e.edit_mode());
        ctx.set_edit_mode(enabled);
    };

    let theme_icon = move || {
        ctx.engine.with(|e| match e.state().theme {
            Theme::Dark => "\u{2600}",
            Theme::Light => "\u{263E}",
        })
    };

    view! {
        <header class="header-bar">
            <button
                class=move || if ui.show_widgets().get() { "icon-btn active" } else { "icon-btn" }
                title="Toggle Power Sidebar (Alt+W)"
                on:click=toggle_widgets
            >
                {"\u{25E7}"}
            </button>

            <div class="search-wrap">
                <input
                    node_ref=ctx.search_input
                    class="search-input"
                    type="text"
                    placeholder="Search or type '/' for commands..."
                    prop:value=query
                    on:input=on_search_input
                />
                {move || (!query().is_empty()).then(|| view! {
                    <button
                        class="search-clear"
                        on:click=move |_| ui.search_query().set(String::new())
                    >
                        {"\u{00D7}"}
                    </button>
                })}

                // Command palette dropdown
                {move || (is_command() && !matching_commands().is_empty()).then(|| view! {
                    <div class="command-palette">
                        {matching_commands()
                            .into_iter()
                            .map(|(cmd, desc)| view! {
                                <button
                                    class="command-row"
                                    on:click=move |_| {
                                        run_command(ctx, cmd);
                                        ui.search_query().set(String::new());
                                    }
                                >
                                    <span class="command-name">{cmd}</span>
                                    <span class="command-desc">{desc}</span>
                                </button>
                            })
                            .collect_view()}
                    </div>
                })}
            </div>

            <div class="header-controls">
                <button class="icon-btn" title="Toggle Theme" on:click=toggle_theme>
                    {theme_icon}
                </button>

                {move || ctx.edit_mode().then(|| view! {
                    <button
                        class="icon-btn"
                        title="Customize Style"
                        on:click=move |_| ui.style_modal_open().set(true)
                    >
                        {"\u{1F3A8}"}
                    </button>
                })}

                <button
                    class=move || if ctx.edit_mode() { "edit-toggle active" } else { "edit-toggle" }
                    on:click=toggle_edit
                >
                    {move || if ctx.edit_mode() { "Done" } else { "Edit" }}
                </button>
            </div>
        </header>
    }
}
