//! Runtime configuration and service construction for the CLI.
//!
//! The library core reads no environment. The CLI resolves these values
//! from flags and environment variables and builds the client from them.

use std::time::Duration;

use anyhow::Result;
use log::debug;
use reqwest::Client;

use crate::client::TornClient;
use crate::schema::OPENAPI_URL;
use crate::transport::{DEFAULT_API_URL, HttpTransport, USER_AGENT};

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "TORN_API_KEY";

/// Environment variable overriding the API base URL.
pub const API_URL_ENV: &str = "TORN_API_URL";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_url: String,
    pub openapi_url: String,
    pub timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            openapi_url: OPENAPI_URL.to_string(),
            timeout: None,
        }
    }
}

impl Config {
    pub fn new(api_url: Option<String>, timeout_secs: Option<u64>) -> Self {
        let defaults = Self::default();
        Self {
            api_url: api_url.unwrap_or(defaults.api_url),
            timeout: timeout_secs.map(Duration::from_secs),
            ..defaults
        }
    }
}

/// Build the HTTP transport from configuration.
pub fn build_transport(config: &Config) -> Result<HttpTransport> {
    let mut builder = HttpTransport::builder().base_url(&config.api_url);
    if let Some(timeout) = config.timeout {
        builder = builder.timeout(timeout);
        debug!("HTTP transport configured with a {:?} timeout", timeout);
    }
    builder.build()
}

/// Build a Torn API client from configuration.
pub fn build_client(config: &Config) -> Result<TornClient<HttpTransport>> {
    Ok(TornClient::with_transport(build_transport(config)?))
}

/// Build a plain HTTP client for the schema download.
pub fn build_schema_client(config: &Config) -> Result<Client> {
    let mut builder = Client::builder().user_agent(USER_AGENT);
    if let Some(timeout) = config.timeout {
        builder = builder.timeout(timeout);
    }
    Ok(builder.build()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = Config::new(None, None);
        assert_eq!(config.api_url, "https://api.torn.com/v2");
        assert_eq!(config.openapi_url, "https://www.torn.com/swagger/openapi.json");
        assert_eq!(config.timeout, None);
    }

    #[test]
    fn test_config_overrides() {
        let config = Config::new(Some("http://localhost:8080".into()), Some(30));
        assert_eq!(config.api_url, "http://localhost:8080");
        assert_eq!(config.timeout, Some(Duration::from_secs(30)));
    }

    #[test]
    fn test_build_client_uses_api_url() {
        let config = Config::new(Some("http://localhost:8080/".into()), Some(5));
        let client = build_client(&config).unwrap();
        assert_eq!(client.transport().base_url(), "http://localhost:8080");
    }

    #[tokio::test]
    async fn test_build_schema_client_sends_user_agent() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/")
            .match_header("user-agent", USER_AGENT)
            .create_async()
            .await;

        let client = build_schema_client(&Config::default()).unwrap();
        let _ = client.get(server.url()).send().await;

        mock.assert_async().await;
    }
}
