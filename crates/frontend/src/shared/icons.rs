//! Icon registry.
//!
//! Icons are a closed set: templates refer to them by tag, the tag is
//! resolved once through [`IconName::from_name`], and an unknown tag logs a
//! warning and renders nothing.

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconName {
    PurchaseOrder,
    DeliveryChallan,
    Invoice,
    Srv,
    Plus,
    Close,
    Search,
    Alert,
    Theme,
}

impl IconName {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "po" => Some(IconName::PurchaseOrder),
            "dc" => Some(IconName::DeliveryChallan),
            "invoice" => Some(IconName::Invoice),
            "srv" => Some(IconName::Srv),
            "plus" => Some(IconName::Plus),
            "close" => Some(IconName::Close),
            "search" => Some(IconName::Search),
            "alert" => Some(IconName::Alert),
            "theme" => Some(IconName::Theme),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            IconName::PurchaseOrder => "po",
            IconName::DeliveryChallan => "dc",
            IconName::Invoice => "invoice",
            IconName::Srv => "srv",
            IconName::Plus => "plus",
            IconName::Close => "close",
            IconName::Search => "search",
            IconName::Alert => "alert",
            IconName::Theme => "theme",
        }
    }

    pub fn render(self) -> AnyView {
        match self {
            IconName::PurchaseOrder => view! {
                <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
                    <circle cx="9" cy="21" r="1"/>
                    <circle cx="20" cy="21" r="1"/>
                    <path d="M1 1h4l2.68 12.39a2 2 0 0 0 2 1.61h7.72a2 2 0 0 0 2-1.61L23 6H6"/>
                </svg>
            }.into_any(),
            IconName::DeliveryChallan => view! {
                <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
                    <path d="M3 7h13v10H3z"/>
                    <path d="M16 7h3l2 3v7h-5z"/>
                    <circle cx="7.5" cy="18" r="1.5"/>
                    <circle cx="18.5" cy="18" r="1.5"/>
                </svg>
            }.into_any(),
            IconName::Invoice => view! {
                <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
                    <path d="M14 2H6a2 2 0 0 0-2 2v16l4-2 4 2 4-2 4 2V8z"/>
                    <path d="M14 2v6h6"/>
                    <path d="M8 13h8"/>
                    <path d="M8 17h5"/>
                </svg>
            }.into_any(),
            IconName::Srv => view! {
                <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
                    <rect x="3" y="3" width="18" height="18" rx="2"/>
                    <path d="M9 12l2 2 4-4"/>
                </svg>
            }.into_any(),
            IconName::Plus => view! {
                <svg width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
                    <line x1="12" y1="5" x2="12" y2="19"/>
                    <line x1="5" y1="12" x2="19" y2="12"/>
                </svg>
            }.into_any(),
            IconName::Close => view! {
                <svg width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
                    <line x1="18" y1="6" x2="6" y2="18"/>
                    <line x1="6" y1="6" x2="18" y2="18"/>
                </svg>
            }.into_any(),
            IconName::Search => view! {
                <svg width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
                    <circle cx="11" cy="11" r="8"/>
                    <line x1="21" y1="21" x2="16.65" y2="16.65"/>
                </svg>
            }.into_any(),
            IconName::Alert => view! {
                <svg width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
                    <circle cx="12" cy="12" r="10"/>
                    <line x1="12" y1="8" x2="12" y2="12"/>
                    <line x1="12" y1="16" x2="12.01" y2="16"/>
                </svg>
            }.into_any(),
            IconName::Theme => view! {
                <svg width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
                    <path d="M21 12.79A9 9 0 1 1 11.21 3 7 7 0 0 0 21 12.79z"/>
                </svg>
            }.into_any(),
        }
    }
}

/// Render an icon by tag. Unknown tags render nothing.
pub fn icon(name: &str) -> AnyView {
    match IconName::from_name(name) {
        Some(icon_name) => icon_name.render(),
        None => {
            log::warn!("Unknown icon tag: {}", name);
            ().into_any()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_round_trip() {
        for tag in ["po", "dc", "invoice", "srv", "plus", "close", "search", "alert", "theme"] {
            let name = IconName::from_name(tag).unwrap();
            assert_eq!(name.as_str(), tag);
        }
    }

    #[test]
    fn test_unknown_tag() {
        assert_eq!(IconName::from_name("customers"), None);
        assert_eq!(IconName::from_name(""), None);
    }
}
