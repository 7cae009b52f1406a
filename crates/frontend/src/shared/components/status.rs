//! Loading / error / empty placeholders used by every page.

use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <Flex gap=FlexGap::Small style="align-items:center;padding:var(--spacing-4xl);justify-content:center;">
            <Spinner />
            <span>"Loading..."</span>
        </Flex>
    }
}

#[component]
pub fn ErrorBanner(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="alert alert--error" role="alert">
            {icon("alert")}
            <strong>"Error: "</strong>
            {message}
        </div>
    }
}

/// Shown for an empty id or an unknown path.
#[component]
pub fn NotFound(#[prop(optional, into)] what: Option<String>) -> impl IntoView {
    let message = match what {
        Some(what) => format!("{} not found", what),
        None => "Page not found".to_string(),
    };
    view! {
        <div class="empty-state">
            <h2>{message}</h2>
            <a href="/">"Back to purchase orders"</a>
        </div>
    }
}
