//! Wire format of the LibreTranslate-style `/translate` endpoint
//!
//! The engine reports the detected source language either as a bare code or as
//! an object such as `{"language": "fr", "confidence": 92.0}`. Both shapes are
//! parsed into [`DetectedLanguageField`] and collapsed into one canonical
//! [`LanguageCode`] by [`normalize_detected_language`].

use parley_domain::traits::ProviderTranslation;
use parley_domain::{LanguageCode, SourceLanguage};
use serde::{Deserialize, Serialize};

/// Outbound request body
#[derive(Debug, Serialize)]
pub(crate) struct TranslateBody<'a> {
    pub q: &'a str,
    pub source: &'a str,
    pub target: &'a str,
    pub format: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<&'a str>,
}

/// Detected-language field in either of the shapes the engine emits
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum DetectedLanguageField {
    /// A bare language code
    Code(String),

    /// An object carrying the code and, optionally, a confidence score
    Detail {
        /// Detected language code
        language: Option<String>,
        /// Detection confidence as reported by the engine
        confidence: Option<f64>,
    },
}

impl DetectedLanguageField {
    /// The language code carried by either shape, if any
    pub fn into_code(self) -> Option<LanguageCode> {
        let code = match self {
            DetectedLanguageField::Code(code) => code,
            DetectedLanguageField::Detail { language, .. } => language?,
        };
        let code = LanguageCode::new(code);
        (!code.is_empty()).then_some(code)
    }
}

/// Resolve the source language of a translation
///
/// Returns the detected code when the engine supplied a non-empty one, and the
/// requested source language otherwise (which is `"auto"` for detection
/// requests the engine did not answer).
pub fn normalize_detected_language(
    field: Option<DetectedLanguageField>,
    requested: &SourceLanguage,
) -> LanguageCode {
    field
        .and_then(DetectedLanguageField::into_code)
        .unwrap_or_else(|| requested.to_code())
}

/// Inbound response body
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateReply {
    /// Translated text
    pub translated_text: String,

    /// Detected source language, when the engine reports one
    #[serde(default)]
    pub detected_source_language: Option<DetectedLanguageField>,

    /// Older name of the same field; consulted only when the primary one is
    /// absent or empty
    #[serde(default)]
    pub detected_language: Option<DetectedLanguageField>,
}

impl TranslateReply {
    /// Convert into the canonical provider result
    pub fn into_translation(self, requested: &SourceLanguage) -> ProviderTranslation {
        let detected = self
            .detected_source_language
            .and_then(DetectedLanguageField::into_code)
            .or_else(|| self.detected_language.and_then(DetectedLanguageField::into_code));

        ProviderTranslation {
            translated_text: self.translated_text,
            detected_language: detected.unwrap_or_else(|| requested.to_code()),
        }
    }
}
