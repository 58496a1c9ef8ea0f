//! Parley Translation Provider Layer
//!
//! Implementations of the `TranslationProvider` trait from `parley-domain`.
//!
//! # Providers
//!
//! - `MockProvider`: Deterministic mock for testing
//! - `LibreTranslateProvider`: HTTP client for a LibreTranslate-compatible engine
//!
//! # Examples
//!
//! ```
//! use parley_provider::MockProvider;
//! use parley_domain::traits::{ProviderRequest, TranslationProvider};
//! use parley_domain::SourceLanguage;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let provider = MockProvider::new("Hola").with_detected_language("en");
//! let request = ProviderRequest {
//!     text: "Hello".to_string(),
//!     source: SourceLanguage::Auto,
//!     target: "es".into(),
//! };
//! let result = provider.translate(&request).await.unwrap();
//! assert_eq!(result.translated_text, "Hola");
//! assert_eq!(result.detected_language.as_str(), "en");
//! # }
//! ```

#![warn(missing_docs)]

pub mod libretranslate;
pub mod wire;

use async_trait::async_trait;
use parley_domain::traits::{ProviderRequest, ProviderTranslation, TranslationProvider};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard};
use thiserror::Error;
use wire::{normalize_detected_language, DetectedLanguageField};

pub use libretranslate::LibreTranslateProvider;

/// Errors that can occur while calling a translation engine
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Network or connection failure
    #[error("Communication error: {0}")]
    Communication(String),

    /// The engine did not answer in time
    #[error("Translation engine timed out")]
    Timeout,

    /// The engine answered with a non-success status
    #[error("HTTP {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body, for diagnostics
        body: String,
    },

    /// The engine's reply could not be understood
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl ProviderError {
    pub(crate) fn from_transport(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ProviderError::Timeout
        } else {
            ProviderError::Communication(format!("Request failed: {}", e))
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Mock translation provider for deterministic testing
///
/// Returns pre-configured translations without any network calls and records
/// every request it receives. Clones share the same call log.
#[derive(Debug, Clone)]
pub struct MockProvider {
    default_translation: String,
    detected: Option<DetectedLanguageField>,
    responses: Arc<Mutex<HashMap<String, String>>>,
    errors: Arc<Mutex<HashSet<String>>>,
    fail_all: bool,
    requests: Arc<Mutex<Vec<ProviderRequest>>>,
}

impl MockProvider {
    /// Create a MockProvider with a fixed translation for all inputs
    pub fn new(translation: impl Into<String>) -> Self {
        Self {
            default_translation: translation.into(),
            detected: None,
            responses: Arc::new(Mutex::new(HashMap::new())),
            errors: Arc::new(Mutex::new(HashSet::new())),
            fail_all: false,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A provider whose every call fails as if the engine were unreachable
    pub fn failing() -> Self {
        Self {
            fail_all: true,
            ..Self::default()
        }
    }

    /// Report a flat detected-language code
    pub fn with_detected_language(mut self, code: impl Into<String>) -> Self {
        self.detected = Some(DetectedLanguageField::Code(code.into()));
        self
    }

    /// Report the detected language in any wire shape
    pub fn with_detected_field(mut self, field: DetectedLanguageField) -> Self {
        self.detected = Some(field);
        self
    }

    /// Add a specific translation for a given input text
    pub fn add_response(&mut self, text: impl Into<String>, translation: impl Into<String>) {
        lock(&self.responses).insert(text.into(), translation.into());
    }

    /// Configure to fail for a specific input text
    pub fn add_error(&mut self, text: impl Into<String>) {
        lock(&self.errors).insert(text.into());
    }

    /// Number of times translate was called
    pub fn call_count(&self) -> usize {
        lock(&self.requests).len()
    }

    /// Every request received so far, oldest first
    pub fn requests(&self) -> Vec<ProviderRequest> {
        lock(&self.requests).clone()
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new("Default mock translation")
    }
}

#[async_trait]
impl TranslationProvider for MockProvider {
    type Error = ProviderError;

    async fn translate(
        &self,
        request: &ProviderRequest,
    ) -> Result<ProviderTranslation, Self::Error> {
        lock(&self.requests).push(request.clone());

        if self.fail_all || lock(&self.errors).contains(&request.text) {
            return Err(ProviderError::Communication("Mock error".to_string()));
        }

        let translated_text = lock(&self.responses)
            .get(&request.text)
            .cloned()
            .unwrap_or_else(|| self.default_translation.clone());

        Ok(ProviderTranslation {
            translated_text,
            detected_language: normalize_detected_language(self.detected.clone(), &request.source),
        })
    }
}
