use crate::routes::routes::AppRoutes;
use crate::shared::theme::ThemeProvider;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <ConfigProvider>
            <ThemeProvider>
                <AppRoutes />
            </ThemeProvider>
        </ConfigProvider>
    }
}
