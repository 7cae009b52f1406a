//! Design-token configuration schema.
//!
//! Every level is strict: a missing field or an unknown field fails the
//! parse. Configuration errors are never tolerated silently.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Dark,
    Light,
}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Dark => "dark",
            ThemeMode::Light => "light",
        }
    }
}

/// Same names as the token file, e.g. a theme stored by the client.
impl FromStr for ThemeMode {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_value(serde_json::Value::String(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Surface {
    Claymorphic,
    Flat,
    Glass,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GlassPolicy {
    Optional,
    Required,
    None,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Brand {
    pub primary: String,
    pub background: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Interaction {
    pub hover: String,
    pub transition_ms: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Effects {
    pub surface: Surface,
    pub depth: String,
    pub interaction: Interaction,
    pub glass: GlassPolicy,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Motion {
    pub library: String,
    pub reduce_on_low_power_devices: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Layout {
    pub radius_scale: Vec<String>,
    pub shadow_style: String,
    pub padding_min: String,
    pub feedback_states: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Performance {
    pub lazy_load_heavy_components: bool,
    pub avoid_re_render_chains: bool,
    pub memoize_static_ui_parts: bool,
    pub critical_css_in_bundle: bool,
}

/// Root of the design-token file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DesignTokens {
    pub theme: ThemeMode,
    pub brand: Brand,
    pub effects: Effects,
    pub motion: Motion,
    pub layout: Layout,
    pub performance: Performance,
}

impl DesignTokens {
    /// Strictly parse tokens from JSON text.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Strictly parse tokens from an already decoded JSON value.
    pub fn from_value(value: serde_json::Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }

    /// CSS custom properties derived from the tokens, in a stable order.
    pub fn css_variables(&self) -> Vec<(String, String)> {
        let mut vars = vec![
            ("--brand-primary".to_string(), self.brand.primary.clone()),
            ("--brand-background".to_string(), self.brand.background.clone()),
            (
                "--transition-ms".to_string(),
                format!("{}ms", self.effects.interaction.transition_ms),
            ),
            ("--padding-min".to_string(), self.layout.padding_min.clone()),
        ];
        for (i, radius) in self.layout.radius_scale.iter().enumerate() {
            vars.push((format!("--radius-{}", i), radius.clone()));
        }
        vars
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_tokens() -> serde_json::Value {
        json!({
            "theme": "dark",
            "brand": { "primary": "#3b82f6", "background": "#0f172a" },
            "effects": {
                "surface": "glass",
                "depth": "medium",
                "interaction": { "hover": "lift", "transition_ms": 150 },
                "glass": "optional"
            },
            "motion": { "library": "css", "reduce_on_low_power_devices": true },
            "layout": {
                "radius_scale": ["4px", "8px", "16px"],
                "shadow_style": "soft",
                "padding_min": "8px",
                "feedback_states": ["hover", "focus", "active", "disabled"]
            },
            "performance": {
                "lazy_load_heavy_components": true,
                "avoid_re_render_chains": true,
                "memoize_static_ui_parts": true,
                "critical_css_in_bundle": false
            }
        })
    }

    #[test]
    fn test_valid_tokens_parse() {
        let tokens = DesignTokens::from_value(valid_tokens()).unwrap();
        assert_eq!(tokens.theme, ThemeMode::Dark);
        assert_eq!(tokens.effects.surface, Surface::Glass);
        assert_eq!(tokens.effects.glass, GlassPolicy::Optional);
        assert_eq!(tokens.effects.interaction.transition_ms, 150.0);
    }

    #[test]
    fn test_missing_glass_is_rejected() {
        let mut value = valid_tokens();
        value["effects"].as_object_mut().unwrap().remove("glass");
        let err = DesignTokens::from_value(value).unwrap_err();
        assert!(err.to_string().contains("glass"));
    }

    #[test]
    fn test_unknown_top_level_field_is_rejected() {
        let mut value = valid_tokens();
        value["typography"] = json!({ "family": "Inter" });
        let err = DesignTokens::from_value(value).unwrap_err();
        assert!(err.to_string().contains("typography"));
    }

    #[test]
    fn test_unknown_nested_field_is_rejected() {
        let mut value = valid_tokens();
        value["brand"]["accent"] = json!("#f00");
        assert!(DesignTokens::from_value(value).is_err());
    }

    #[test]
    fn test_enum_values_are_checked() {
        let mut value = valid_tokens();
        value["theme"] = json!("forest");
        assert!(DesignTokens::from_value(value).is_err());

        let mut value = valid_tokens();
        value["effects"]["interaction"]["transition_ms"] = json!("150");
        assert!(DesignTokens::from_value(value).is_err());
    }

    #[test]
    fn test_css_variables() {
        let tokens = DesignTokens::from_value(valid_tokens()).unwrap();
        let vars = tokens.css_variables();
        assert_eq!(vars[0], ("--brand-primary".to_string(), "#3b82f6".to_string()));
        assert!(vars.contains(&("--transition-ms".to_string(), "150ms".to_string())));
        assert!(vars.contains(&("--radius-2".to_string(), "16px".to_string())));
    }

    #[test]
    fn test_theme_mode_from_str() {
        assert_eq!("dark".parse::<ThemeMode>().unwrap(), ThemeMode::Dark);
        assert_eq!("light".parse::<ThemeMode>().unwrap(), ThemeMode::Light);
        assert!("Dark".parse::<ThemeMode>().is_err());
        assert!("".parse::<ThemeMode>().is_err());
    }
}
