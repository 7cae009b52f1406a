//! Client configuration.
//!
//! The default is embedded in the bundle. A build can override it by
//! setting `SENSTO_CONFIG_TOML` to a complete TOML document at compile time.

use serde::Deserialize;
use std::sync::OnceLock;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Backend port on the same host the page was served from
    pub port: u16,
    /// Path prefix of every REST endpoint
    pub prefix: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct UiConfig {
    pub search_debounce_ms: u64,
    /// Queries shorter than this do not filter lists
    pub search_min_chars: usize,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
port = 3000
prefix = "/api"

[ui]
search_debounce_ms = 300
search_min_chars = 3
"#;

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                port: 3000,
                prefix: "/api".to_string(),
            },
            ui: UiConfig {
                search_debounce_ms: 300,
                search_min_chars: 3,
            },
        }
    }
}

pub fn parse_config(text: &str) -> Result<AppConfig, toml::de::Error> {
    toml::from_str(text)
}

/// Load configuration: build-time override first, then the embedded default.
pub fn load_config() -> AppConfig {
    if let Some(text) = option_env!("SENSTO_CONFIG_TOML") {
        match parse_config(text) {
            Ok(config) => {
                log::info!("Using build-time configuration override");
                return config;
            }
            Err(e) => log::warn!("Invalid SENSTO_CONFIG_TOML, ignoring: {}", e),
        }
    }

    match parse_config(DEFAULT_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Embedded configuration is invalid: {}", e);
            AppConfig::default()
        }
    }
}

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Process-wide configuration, loaded on first use.
pub fn current() -> &'static AppConfig {
    CONFIG.get_or_init(load_config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_incomplete_config_is_rejected() {
        assert!(parse_config("[api]\nport = 8080\n").is_err());
    }

    #[test]
    fn test_override_values() {
        let config = parse_config(
            "[api]\nport = 8080\nprefix = \"/v2\"\n[ui]\nsearch_debounce_ms = 0\nsearch_min_chars = 1\n",
        )
        .unwrap();
        assert_eq!(config.api.port, 8080);
        assert_eq!(config.api.prefix, "/v2");
        assert_eq!(config.ui.search_min_chars, 1);
    }
}
