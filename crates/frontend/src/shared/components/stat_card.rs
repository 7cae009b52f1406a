use crate::shared::icons::icon;
use leptos::prelude::*;

/// Single statistic with an icon. `None` renders a dash.
#[component]
pub fn StatCard(
    /// Label displayed above the value
    #[prop(into)]
    label: String,
    /// Icon tag for the icon() helper
    #[prop(into)]
    icon_name: String,
    #[prop(into)]
    value: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class="stat-card__icon">{icon(&icon_name)}</div>
            <div class="stat-card__body">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">
                    {move || value.get().unwrap_or_else(|| "—".to_string())}
                </div>
            </div>
        </div>
    }
}
