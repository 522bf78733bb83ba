//! Category Board Component
//!
//! Renders the grouped view of the link collection: one section per
//! category, in category order, filtered by the search query.

use leptos::prelude::*;

use crate::components::CategorySection;
use crate::context::use_app;
use crate::store::UiStateStoreFields;

#[component]
pub fn CategoryBoard() -> impl IntoView {
    let ctx = use_app();

    // Each entry carries the edit flag so toggling edit mode re-renders the
    // sections. The key is the full group value - verbose but guaranteed to
    // re-render whenever any link or title inside it changes.
    let groups = move || {
        let filter = ctx.ui.search_query().get();
        let edit = ctx.edit_mode();
        ctx.engine
            .with(|e| e.grouped_by_category(&filter, edit))
            .into_iter()
            .map(|group| (edit, group))
            .collect::<Vec<_>>()
    };

    view! {
        <div class="category-board">
            <For
                each=groups
                key=|entry| entry.clone()
                children=move |(edit, group)| {
                    view! { <CategorySection group=group edit_mode=edit /> }
                }
            />
        </div>
    }
}
