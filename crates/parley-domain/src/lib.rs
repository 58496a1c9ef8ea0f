//! Parley Domain Layer
//!
//! Core types shared by the gateway, the store, the provider adapters and the
//! translator client. Infrastructure lives in other crates; this crate only
//! defines the vocabulary and the trait seams between them.
//!
//! ## Key Concepts
//!
//! - **Record**: an immutable log entry of one completed translation
//! - **Language code**: a provider language tag, or the `"auto"` sentinel
//! - **Wire schemas**: the request and response bodies of `POST /api/translate`
//! - **Traits**: `RecordStore` and `TranslationProvider`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod api;
pub mod language;
pub mod record;
pub mod traits;

// Re-exports for convenience
pub use api::{ErrorBody, TranslateRequest, TranslateResponse};
pub use language::{LanguageCode, SourceLanguage, AUTO_DETECT};
pub use record::{now_millis, NewTranslation, RecordId, TranslationRecord};
