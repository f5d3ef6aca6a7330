//! HTTP transport to the Gemini `generateContent` endpoint.

use super::types::{GenerateContentRequest, GenerateContentResponse};
use crate::config::{ApiConfig, ApiKey};
use crate::error::{Error, Result};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, warn};

/// Performs a single `generateContent` call against a named model.
///
/// This is the only fallible seam under the clients; everything above it
/// converts errors into fallback values.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ModelTransport: Send + Sync {
    async fn generate_content(
        &self,
        model: &str,
        request: GenerateContentRequest,
    ) -> Result<GenerateContentResponse>;
}

/// Builder for creating a Gemini transport.
pub struct GeminiTransportBuilder {
    config: ApiConfig,
    api_key: ApiKey,
}

impl GeminiTransportBuilder {
    /// Set the API configuration.
    pub fn config(mut self, config: ApiConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the transport.
    pub fn build(self) -> Result<GeminiTransport> {
        GeminiTransport::new(&self.config, self.api_key)
    }
}

/// reqwest-backed [`ModelTransport`].
pub struct GeminiTransport {
    http: reqwest::Client,
    base_url: String,
    api_key: ApiKey,
}

impl GeminiTransport {
    /// Start building a transport with default settings.
    pub fn builder(api_key: ApiKey) -> GeminiTransportBuilder {
        GeminiTransportBuilder {
            config: ApiConfig::default(),
            api_key,
        }
    }

    /// Create a new transport.
    pub fn new(config: &ApiConfig, api_key: ApiKey) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    /// Endpoint URL for a model.
    pub fn endpoint(&self, model: &str) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.base_url, model)
    }
}

#[async_trait]
impl ModelTransport for GeminiTransport {
    async fn generate_content(
        &self,
        model: &str,
        request: GenerateContentRequest,
    ) -> Result<GenerateContentResponse> {
        let url = self.endpoint(model);
        debug!(model, "Sending generateContent request");

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", self.api_key.expose())
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    Error::network(format!("request to {model} timed out"))
                } else if e.is_connect() {
                    Error::network(format!("could not connect to {}", self.base_url))
                } else {
                    Error::Http(e)
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read error body".to_string());
            warn!(model, status = status.as_u16(), "Model API returned an error");
            return Err(Error::api(status.as_u16(), body));
        }

        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key() -> ApiKey {
        ApiKey::new("test-key")
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let config = ApiConfig {
            base_url: "https://example.test/".to_string(),
            ..ApiConfig::default()
        };
        let transport = GeminiTransport::new(&config, key()).unwrap();
        assert_eq!(
            transport.endpoint("gemini-2.5-pro"),
            "https://example.test/v1beta/models/gemini-2.5-pro:generateContent"
        );
    }

    #[test]
    fn test_builder_uses_default_base_url() {
        let transport = GeminiTransport::builder(key()).build().unwrap();
        assert!(
            transport
                .endpoint("m")
                .starts_with("https://generativelanguage.googleapis.com/")
        );
    }

    #[test]
    fn test_builder_applies_config() {
        let transport = GeminiTransport::builder(key())
            .config(ApiConfig {
                base_url: "http://localhost:8080/".to_string(),
                ..ApiConfig::default()
            })
            .build()
            .unwrap();
        assert_eq!(
            transport.endpoint("m"),
            "http://localhost:8080/v1beta/models/m:generateContent"
        );
    }

    #[tokio::test]
    async fn test_unreachable_host_is_a_recoverable_error() {
        let config = ApiConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            timeout_secs: 2,
            ..ApiConfig::default()
        };
        let transport = GeminiTransport::new(&config, key()).unwrap();

        let err = transport
            .generate_content("m", GenerateContentRequest::prompt("ping"))
            .await
            .unwrap_err();
        assert!(err.is_recoverable(), "unexpected error: {err}");
    }
}
