//! LibreTranslate Provider Implementation
//!
//! Talks to a self-hosted LibreTranslate-compatible engine over HTTP.
//!
//! # Examples
//!
//! ```no_run
//! use parley_provider::LibreTranslateProvider;
//!
//! let provider =
//!     LibreTranslateProvider::new("http://127.0.0.1:5000", Some("key".to_string())).unwrap();
//! assert_eq!(provider.endpoint(), "http://127.0.0.1:5000");
//! ```

use crate::wire::{TranslateBody, TranslateReply};
use crate::ProviderError;
use async_trait::async_trait;
use parley_domain::traits::{ProviderRequest, ProviderTranslation, TranslationProvider};
use std::time::Duration;

/// Default engine endpoint
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000";

/// Default timeout for translation requests (30 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// HTTP provider for a LibreTranslate-compatible engine
///
/// Each call is a single `POST {endpoint}/translate`. Failures are returned to
/// the caller as-is; nothing is retried.
#[derive(Debug, Clone)]
pub struct LibreTranslateProvider {
    endpoint: String,
    api_key: Option<String>,
    client: reqwest::Client,
}

impl LibreTranslateProvider {
    /// Create a provider with the default timeout
    pub fn new(
        endpoint: impl Into<String>,
        api_key: Option<String>,
    ) -> Result<Self, ProviderError> {
        Self::with_timeout(endpoint, api_key, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Create a provider with a custom request timeout
    pub fn with_timeout(
        endpoint: impl Into<String>,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                ProviderError::Communication(format!("Failed to build HTTP client: {}", e))
            })?;

        Ok(Self {
            endpoint: endpoint.into(),
            api_key: api_key.filter(|key| !key.is_empty()),
            client,
        })
    }

    /// The configured engine endpoint
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn translate_url(&self) -> String {
        format!("{}/translate", self.endpoint.trim_end_matches('/'))
    }
}

#[async_trait]
impl TranslationProvider for LibreTranslateProvider {
    type Error = ProviderError;

    async fn translate(
        &self,
        request: &ProviderRequest,
    ) -> Result<ProviderTranslation, Self::Error> {
        let url = self.translate_url();
        let body = TranslateBody {
            q: &request.text,
            source: request.source.as_str(),
            target: request.target.as_str(),
            format: "text",
            api_key: self.api_key.as_deref(),
        };

        tracing::debug!(
            url = %url,
            source = %request.source,
            target = %request.target,
            "Calling translation engine"
        );

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(ProviderError::from_transport)?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body: error_text,
            });
        }

        let reply: TranslateReply = response
            .json()
            .await
            .map_err(|e| {
                ProviderError::InvalidResponse(format!("Failed to parse response: {}", e))
            })?;

        Ok(reply.into_translation(&request.source))
    }
}
