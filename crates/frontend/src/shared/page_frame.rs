//! Root element of every routed page.
//!
//! Carries `id="{entity}--{category}"` (e.g. `"a002_dc--list"`) and
//! `data-page-category`, so styles and DOM inspection can tell pages apart.

use super::page_standard::*;
use leptos::prelude::*;

/// Page wrapper. The category also picks the modifier class
/// (`page--detail`, `page--form`, `page--dashboard`; lists get plain `page`).
#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`.
    #[prop(into)]
    page_id: String,
    /// `PAGE_CAT_*` value
    category: &'static str,
    children: Children,
) -> impl IntoView {
    if !is_valid_page_id(&page_id) {
        log::warn!("Page id '{}' does not follow {{entity}}--{{category}}", page_id);
    }

    let class = match category {
        PAGE_CAT_DETAIL => "page page--detail",
        PAGE_CAT_CREATE => "page page--form",
        PAGE_CAT_DASHBOARD => "page page--dashboard",
        _ => "page",
    };

    view! {
        <div
            id=page_id
            class=class
            data-page-category=category
        >
            {children()}
        </div>
    }
}
