//! Error types for the Gateway.
//!
//! Callers only ever see a generic message; the detailed cause is logged.

use crate::config::ConfigError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use parley_domain::api::{INVALID_REQUEST, TRANSLATION_FAILED};
use parley_domain::ErrorBody;
use parley_provider::ProviderError;
use parley_store::StoreError;
use thiserror::Error;

/// Gateway error
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The request body is malformed or has nothing to translate
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Translation engine failure
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Record store failure
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// A previous holder of the store lock panicked
    #[error("Record store lock poisoned")]
    StorePoisoned,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Server binding error
    #[error("Failed to bind server: {0}")]
    Bind(#[from] std::io::Error),

    /// Server error
    #[error("Server error: {0}")]
    Server(String),

    /// Internal error (e.g. a blocking task was cancelled)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl GatewayError {
    /// HTTP status reported to the caller
    pub fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message reported to the caller
    pub fn public_message(&self) -> &'static str {
        match self {
            GatewayError::InvalidRequest(_) => INVALID_REQUEST,
            _ => TRANSLATION_FAILED,
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "Translation request failed");
        } else {
            tracing::warn!(error = %self, "Rejected translation request");
        }

        let body = Json(ErrorBody::new(self.public_message()));
        (status, body).into_response()
    }
}
