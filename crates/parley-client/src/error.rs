//! Error types for the translator client.

use thiserror::Error;

/// Client operation errors
#[derive(Debug, Error)]
pub enum ClientError {
    /// Connection error (network, DNS, refused, timeout)
    #[error("Connection error: {0}")]
    Connection(String),

    /// The gateway answered with a non-success status
    #[error("Gateway error (HTTP {status}): {message}")]
    Gateway {
        /// HTTP status code
        status: u16,
        /// Message from the gateway's error body
        message: String,
    },

    /// The gateway's reply could not be parsed
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// A platform capability (speech, clipboard) failed or is unavailable
    #[error("Capability unavailable: {0}")]
    Capability(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ClientError::InvalidResponse(e.to_string())
        } else if let Some(status) = e.status() {
            ClientError::Gateway {
                status: status.as_u16(),
                message: e.to_string(),
            }
        } else {
            ClientError::Connection(e.to_string())
        }
    }
}
