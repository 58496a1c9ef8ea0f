//! Request and response bodies of the gateway's HTTP API

use crate::{LanguageCode, SourceLanguage};
use serde::{Deserialize, Serialize};

/// Public message for any failed translation
pub const TRANSLATION_FAILED: &str = "Translation failed";

/// Public message for a request the gateway refuses to forward
pub const INVALID_REQUEST: &str = "Invalid translation request";

/// Body of `POST /api/translate`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateRequest {
    /// Text to translate
    pub text: String,

    /// Source language, possibly `"auto"`; auto-detect when omitted
    #[serde(default)]
    pub source_lang: SourceLanguage,

    /// Target language
    pub target_lang: LanguageCode,
}

impl TranslateRequest {
    /// Create a translation request
    pub fn new(
        text: impl Into<String>,
        source_lang: SourceLanguage,
        target_lang: impl Into<LanguageCode>,
    ) -> Self {
        Self {
            text: text.into(),
            source_lang,
            target_lang: target_lang.into(),
        }
    }

    /// Whether the text is empty or whitespace only
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Successful reply of `POST /api/translate`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateResponse {
    /// Provider output
    pub translated_text: String,

    /// Detected source language, or the requested one if detection was absent
    pub detected_language: LanguageCode,

    /// Whether the translation was written to the record store
    #[serde(default = "default_recorded")]
    pub recorded: bool,
}

fn default_recorded() -> bool {
    true
}

/// Failure reply of the gateway
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Generic, user-safe message
    pub message: String,
}

impl ErrorBody {
    /// Create an error body
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
