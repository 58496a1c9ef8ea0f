//! Trait definitions for external interactions
//!
//! These traits define the boundaries between the gateway and its
//! infrastructure. Implementations live in other crates.

use crate::{LanguageCode, NewTranslation, RecordId, SourceLanguage, TranslationRecord};
use async_trait::async_trait;

/// Insert-only storage of translation records
///
/// Implemented by the infrastructure layer (parley-store). There is no update
/// or delete operation.
pub trait RecordStore {
    /// Error type for store operations
    type Error;

    /// Insert a new record, assigning its id and timestamp
    fn insert_record(
        &mut self,
        translation: NewTranslation,
    ) -> Result<TranslationRecord, Self::Error>;

    /// Get a record by ID
    fn get_record(&self, id: RecordId) -> Result<Option<TranslationRecord>, Self::Error>;

    /// The most recent records, newest first
    fn recent_records(&self, limit: usize) -> Result<Vec<TranslationRecord>, Self::Error>;

    /// Total number of records
    fn count(&self) -> Result<u64, Self::Error>;
}

/// What the gateway asks a provider to translate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderRequest {
    /// Text to translate
    pub text: String,

    /// Source language, possibly auto-detect
    pub source: SourceLanguage,

    /// Target language
    pub target: LanguageCode,
}

/// A provider result in canonical shape
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderTranslation {
    /// Translated text
    pub translated_text: String,

    /// Resolved source language: the detected code, or the requested one
    pub detected_language: LanguageCode,
}

/// Trait for translation engines
///
/// Implemented by the infrastructure layer (parley-provider)
#[async_trait]
pub trait TranslationProvider: Send + Sync {
    /// Error type for provider operations
    type Error: std::error::Error + Send + Sync + 'static;

    /// Translate one piece of text
    async fn translate(
        &self,
        request: &ProviderRequest,
    ) -> Result<ProviderTranslation, Self::Error>;
}
