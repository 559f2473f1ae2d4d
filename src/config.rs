//! Runtime Configuration
//!
//! `config.json` is served next to `index.html` and only names the backend.

use serde::Deserialize;

use crate::api::{ApiRequest, Transport};
use crate::error::ApiError;

pub const CONFIG_PATH: &str = "config.json";
pub const DEFAULT_BACKEND_ADDRESS: &str = "http://localhost:8081";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    pub backend_address: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_address: DEFAULT_BACKEND_ADDRESS.to_string(),
        }
    }
}

impl Config {
    /// Backend address without a trailing slash
    pub fn base_url(&self) -> &str {
        self.backend_address.trim_end_matches('/')
    }
}

/// Loads `config.json`, substituting the default on any failure
pub async fn load_config<T: Transport>(transport: &T) -> Config {
    match fetch_config(transport).await {
        Ok(config) => {
            log::info!("[CONFIG] Loaded config.json: backend {}", config.backend_address);
            config
        }
        Err(e) => {
            let config = Config::default();
            log::warn!(
                "[CONFIG] Failed to load config.json ({}), using default backend {}",
                e,
                config.backend_address
            );
            config
        }
    }
}

async fn fetch_config<T: Transport>(transport: &T) -> Result<Config, ApiError> {
    let response = transport.send(ApiRequest::get(CONFIG_PATH)).await?;
    if !response.ok() {
        return Err(ApiError::Status {
            status: response.status,
            detail: response.body,
        });
    }
    let config: Config = response.json()?;
    if config.backend_address.trim().is_empty() {
        return Err(ApiError::Decode("empty backend_address".to_string()));
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::MockTransport;

    #[tokio::test]
    async fn test_load_config_from_file() {
        let transport = MockTransport::new();
        transport.respond(200, r#"{"backend_address":"https://booking.example/"}"#);

        let config = load_config(&transport).await;

        assert_eq!(config.backend_address, "https://booking.example/");
        assert_eq!(config.base_url(), "https://booking.example");
        assert_eq!(transport.requests()[0].url, CONFIG_PATH);
    }

    #[tokio::test]
    async fn test_network_failure_uses_default() {
        let transport = MockTransport::new();
        transport.fail(ApiError::Network("file:// fetch blocked".to_string()));

        let config = load_config(&transport).await;

        assert_eq!(config.backend_address, DEFAULT_BACKEND_ADDRESS);
    }

    #[tokio::test]
    async fn test_malformed_or_missing_file_uses_default() {
        let transport = MockTransport::new();
        transport.respond(200, "<html>not json</html>");
        transport.respond(404, "");
        transport.respond(200, r#"{"backend_address":""}"#);

        for _ in 0..3 {
            assert_eq!(load_config(&transport).await, Config::default());
        }
    }
}
