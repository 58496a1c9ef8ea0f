//! Language codes and the auto-detect sentinel

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentinel source language asking the provider to detect the language
pub const AUTO_DETECT: &str = "auto";

/// A language tag as understood by the translation provider (e.g. "en", "zh")
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageCode(String);

impl LanguageCode {
    /// Create a language code, trimming surrounding whitespace
    pub fn new(code: impl Into<String>) -> Self {
        let code = code.into();
        let trimmed = code.trim();
        if trimmed.len() == code.len() {
            Self(code)
        } else {
            Self(trimmed.to_string())
        }
    }

    /// Get the code as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is the `"auto"` sentinel
    pub fn is_auto(&self) -> bool {
        self.0 == AUTO_DETECT
    }

    /// Whether the code carries no language at all
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LanguageCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl From<String> for LanguageCode {
    fn from(code: String) -> Self {
        Self::new(code)
    }
}

/// Requested source language: either an explicit code or auto-detection
///
/// Serialized as a plain string, with `"auto"` standing for [`SourceLanguage::Auto`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SourceLanguage {
    /// Let the provider detect the language
    #[default]
    Auto,

    /// An explicit language code
    Code(LanguageCode),
}

impl SourceLanguage {
    /// Parse a source language, mapping `"auto"` to [`SourceLanguage::Auto`]
    ///
    /// # Examples
    ///
    /// ```
    /// use parley_domain::SourceLanguage;
    ///
    /// assert!(SourceLanguage::parse("auto").is_auto());
    /// assert_eq!(SourceLanguage::parse("fr").as_str(), "fr");
    /// ```
    pub fn parse(s: &str) -> Self {
        let code = LanguageCode::new(s);
        if code.is_auto() {
            SourceLanguage::Auto
        } else {
            SourceLanguage::Code(code)
        }
    }

    /// Whether detection was requested
    pub fn is_auto(&self) -> bool {
        matches!(self, SourceLanguage::Auto)
    }

    /// The string sent on the wire
    pub fn as_str(&self) -> &str {
        match self {
            SourceLanguage::Auto => AUTO_DETECT,
            SourceLanguage::Code(code) => code.as_str(),
        }
    }

    /// The language as a code; `Auto` becomes the `"auto"` code
    pub fn to_code(&self) -> LanguageCode {
        match self {
            SourceLanguage::Auto => LanguageCode::new(AUTO_DETECT),
            SourceLanguage::Code(code) => code.clone(),
        }
    }
}

impl fmt::Display for SourceLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for SourceLanguage {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<SourceLanguage> for String {
    fn from(lang: SourceLanguage) -> Self {
        lang.as_str().to_string()
    }
}

impl From<LanguageCode> for SourceLanguage {
    fn from(code: LanguageCode) -> Self {
        if code.is_auto() {
            SourceLanguage::Auto
        } else {
            SourceLanguage::Code(code)
        }
    }
}
