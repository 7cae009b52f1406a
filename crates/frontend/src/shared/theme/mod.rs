//! Theme management.
//!
//! Design tokens ship with the bundle (`design-tokens.json`) and are
//! validated strictly at startup. The dark/light choice can be switched by
//! the user and is persisted in localStorage; everything else comes from
//! the tokens and is exposed to CSS as custom properties.

use contracts::shared::design_tokens::{DesignTokens, Surface, ThemeMode};
use leptos::prelude::*;
use web_sys::window;

const DEFAULT_TOKENS: &str = include_str!("../../../design-tokens.json");

const THEME_STORAGE_KEY: &str = "app-theme";

/// Parse the embedded tokens. A rejected file is fatal: the error names
/// the offending field and reaches the console through the panic hook.
pub fn load_design_tokens() -> DesignTokens {
    parse_tokens_or_abort(DEFAULT_TOKENS)
}

fn parse_tokens_or_abort(text: &str) -> DesignTokens {
    match DesignTokens::from_json(text) {
        Ok(tokens) => tokens,
        Err(e) => {
            log::error!("design-tokens.json rejected: {}", e);
            panic!("design-tokens.json rejected: {}", e);
        }
    }
}

/// Inline style text with the token custom properties.
pub fn css_text(tokens: &DesignTokens) -> String {
    tokens
        .css_variables()
        .iter()
        .map(|(name, value)| format!("{}:{};", name, value))
        .collect()
}

fn load_theme_from_storage() -> Option<ThemeMode> {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(THEME_STORAGE_KEY).ok().flatten())
        .and_then(|s| s.parse::<ThemeMode>().ok())
}

fn save_theme_to_storage(mode: ThemeMode) {
    if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
        if let Err(e) = storage.set_item(THEME_STORAGE_KEY, mode.as_str()) {
            log::warn!("Failed to persist theme: {:?}", e);
        }
    }
}

fn set_attribute_or_warn(element: &web_sys::Element, name: &str, value: &str) {
    if let Err(e) = element.set_attribute(name, value) {
        log::warn!("Failed to set {} on <{}>: {:?}", name, element.tag_name().to_lowercase(), e);
    }
}

fn apply_tokens(tokens: &DesignTokens, mode: ThemeMode) {
    let document = match window().and_then(|w| w.document()) {
        Some(doc) => doc,
        None => return,
    };

    if let Some(root) = document.document_element() {
        set_attribute_or_warn(&root, "style", &css_text(tokens));
    }

    if let Some(body) = document.body() {
        set_attribute_or_warn(&body, "data-theme", mode.as_str());
        let surface = match tokens.effects.surface {
            Surface::Claymorphic => "claymorphic",
            Surface::Flat => "flat",
            Surface::Glass => "glass",
        };
        set_attribute_or_warn(&body, "data-surface", surface);
    }
}

/// Theme context type.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub tokens: StoredValue<DesignTokens>,
    pub mode: RwSignal<ThemeMode>,
}

impl ThemeContext {
    /// Set the mode and persist it.
    pub fn set_mode(&self, mode: ThemeMode) {
        self.mode.set(mode);
        save_theme_to_storage(mode);
        self.tokens.with_value(|tokens| apply_tokens(tokens, mode));
    }

    pub fn toggle(&self) {
        let next = match self.mode.get_untracked() {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        };
        self.set_mode(next);
    }
}

/// Provides theme context to children components.
#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
    let tokens = load_design_tokens();
    let initial = load_theme_from_storage().unwrap_or(tokens.theme);
    apply_tokens(&tokens, initial);

    provide_context(ThemeContext {
        tokens: StoredValue::new(tokens),
        mode: RwSignal::new(initial),
    });

    children()
}

/// Hook to use the theme context.
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext not found. Wrap your app with ThemeProvider.")
}

/// Dark/light switch for the top bar.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_theme();

    view! {
        <button class="theme-toggle" title="Toggle theme" on:click=move |_| ctx.toggle()>
            {crate::shared::icons::icon("theme")}
            <span>{move || match ctx.mode.get() {
                ThemeMode::Dark => "Dark",
                ThemeMode::Light => "Light",
            }}</span>
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shipped_tokens_are_valid() {
        let tokens = DesignTokens::from_json(DEFAULT_TOKENS).unwrap();
        assert_eq!(tokens.theme, ThemeMode::Dark);
        assert_eq!(load_design_tokens(), tokens);
    }

    #[test]
    fn test_css_text() {
        let css = css_text(&load_design_tokens());
        assert!(css.starts_with("--brand-primary:#2563eb;"));
        assert!(css.contains("--transition-ms:180ms;"));
        assert!(css.contains("--radius-0:6px;"));
        assert!(css.contains("--radius-2:20px;"));
    }

    #[test]
    #[should_panic(expected = "design-tokens.json rejected")]
    fn test_rejected_tokens_abort_startup() {
        let mut value: serde_json::Value = serde_json::from_str(DEFAULT_TOKENS).unwrap();
        value["effects"].as_object_mut().unwrap().remove("glass");
        parse_tokens_or_abort(&value.to_string());
    }

    #[test]
    fn test_stored_theme_names() {
        assert_eq!("light".parse::<ThemeMode>().ok(), Some(ThemeMode::Light));
        assert!("forest".parse::<ThemeMode>().is_err());
    }
}
