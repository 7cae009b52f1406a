//! Top bar: application title and theme switch.

use crate::shared::icons::icon;
use crate::shared::theme::ThemeToggle;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    view! {
        <div class="top-header">
            <div class="top-header__brand">
                {icon("po")}
                <span class="top-header__title">"SenstoSales"</span>
            </div>

            <div class="top-header__actions">
                <ThemeToggle />
            </div>
        </div>
    }
}
