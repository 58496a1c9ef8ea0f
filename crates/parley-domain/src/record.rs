//! Record module - the persisted log entry of one completed translation

use crate::LanguageCode;
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

/// Current time in milliseconds since the Unix epoch
pub fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Unique identifier for a translation record based on UUIDv7
///
/// UUIDv7 ids sort by creation time, so the newest records are the largest ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecordId(u128);

impl RecordId {
    /// Generate a new UUIDv7-based RecordId
    ///
    /// # Examples
    ///
    /// ```
    /// use parley_domain::RecordId;
    ///
    /// let id = RecordId::new();
    /// assert!(id.value() > 0);
    /// ```
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7().as_u128())
    }

    /// Create a RecordId from a raw u128 value
    ///
    /// This is primarily for storage layer deserialization.
    pub fn from_value(value: u128) -> Self {
        Self(value)
    }

    /// Parse a RecordId from its hyphenated UUID string
    pub fn from_string(s: &str) -> Result<Self, String> {
        uuid::Uuid::parse_str(s)
            .map(|u| Self(u.as_u128()))
            .map_err(|e| format!("Invalid record id: {}", e))
    }

    /// Get the raw u128 value
    pub fn value(&self) -> u128 {
        self.0
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", uuid::Uuid::from_u128(self.0))
    }
}

/// A translation that has not been stored yet
///
/// The store assigns the id and the timestamp at insert time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTranslation {
    /// Original input text
    pub source_text: String,

    /// Provider output
    pub translated_text: String,

    /// Resolved source language (detected, or the explicit request)
    pub source_lang: LanguageCode,

    /// Requested target language
    pub target_lang: LanguageCode,
}

/// A stored translation record
///
/// Records are immutable once created; no update or delete path exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRecord {
    /// Unique identifier
    pub id: RecordId,

    /// Original input text
    pub source_text: String,

    /// Provider output
    pub translated_text: String,

    /// Resolved source language
    pub source_lang: LanguageCode,

    /// Requested target language
    pub target_lang: LanguageCode,

    /// Creation time in milliseconds since the Unix epoch
    pub timestamp: u64,
}

impl TranslationRecord {
    /// Build the stored form of a translation
    pub fn from_new(new: NewTranslation, id: RecordId, timestamp: u64) -> Self {
        Self {
            id,
            source_text: new.source_text,
            translated_text: new.translated_text,
            source_lang: new.source_lang,
            target_lang: new.target_lang,
            timestamp,
        }
    }
}
