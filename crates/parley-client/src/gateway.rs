//! Gateway communication.

use crate::error::ClientError;
use async_trait::async_trait;
use parley_domain::{ErrorBody, TranslateRequest, TranslateResponse};
use std::time::Duration;

/// Default gateway base URL
pub const DEFAULT_GATEWAY_URL: &str = "http://localhost:3001";

/// Anything that can answer a translation request on behalf of the client
#[async_trait]
pub trait TranslationGateway: Send + Sync {
    /// Send one translation request
    async fn translate(&self, request: &TranslateRequest) -> Result<TranslateResponse, ClientError>;
}

/// HTTP client for `POST /api/translate`
#[derive(Debug, Clone)]
pub struct HttpGateway {
    base_url: String,
    client: reqwest::Client,
}

impl HttpGateway {
    /// Create a gateway client for the given base URL
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .map_err(|e| ClientError::Connection(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self::with_client(base_url, client))
    }

    /// Create a gateway client reusing an existing HTTP client
    pub fn with_client(base_url: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            base_url: base_url.into(),
            client,
        }
    }

    /// The configured base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl TranslationGateway for HttpGateway {
    async fn translate(
        &self,
        request: &TranslateRequest,
    ) -> Result<TranslateResponse, ClientError> {
        let url = format!("{}/api/translate", self.base_url.trim_end_matches('/'));

        let response = self.client.post(&url).json(request).send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ErrorBody>()
                .await
                .map(|body| body.message)
                .unwrap_or_else(|_| status.to_string());
            return Err(ClientError::Gateway {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json().await?)
    }
}
