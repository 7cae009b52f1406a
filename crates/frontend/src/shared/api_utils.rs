//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs and making requests.
//! Errors are returned as display-ready messages.

use super::config::{self, ApiConfig};
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Compose the API base URL from page location parts and the configuration.
pub fn format_api_base(protocol: &str, hostname: &str, api: &ApiConfig) -> String {
    format!("{}//{}:{}{}", protocol, hostname, api.port, api.prefix)
}

/// Get the base URL for API requests
///
/// Uses the current window location with the configured backend port.
/// Returns an empty string if window is not available.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format_api_base(&protocol, &hostname, &config::current().api)
}

/// Build a full API URL from a path relative to the API prefix (e.g. "/dc/42")
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// GET a JSON document
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let url = api_url(path);
    let response = Request::get(&url)
        .header("Cache-Control", "no-cache, no-store, must-revalidate")
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("Server error: {}", response.status()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// POST a JSON body and decode the JSON answer
pub async fn post_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, String> {
    let url = api_url(path);
    let response = Request::post(&url)
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("Server error: {}", response.status()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_api_base() {
        let api = ApiConfig {
            port: 3000,
            prefix: "/api".to_string(),
        };
        assert_eq!(
            format_api_base("https:", "sales.local", &api),
            "https://sales.local:3000/api"
        );
    }
}
