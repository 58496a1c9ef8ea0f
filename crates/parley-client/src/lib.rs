//! Parley Translator Client
//!
//! Client-side half of Parley: an explicit state container for the translator
//! view, a controller that talks to the gateway, and the language catalogue.
//!
//! # Examples
//!
//! ```no_run
//! use parley_client::{HttpGateway, Translator};
//! use parley_domain::SourceLanguage;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let gateway = HttpGateway::new("http://localhost:3001").unwrap();
//! let mut translator = Translator::new(gateway);
//! translator.translate_text("Hello", SourceLanguage::Auto, "es").await;
//! println!("{}", translator.state().translated_text);
//! # }
//! ```

#![warn(missing_docs)]

pub mod capabilities;
pub mod error;
pub mod gateway;
pub mod languages;
pub mod state;
pub mod translator;

pub use capabilities::{Clipboard, SpeechSynthesizer};
pub use error::ClientError;
pub use gateway::{HttpGateway, TranslationGateway};
pub use state::{
    Action, FavoriteItem, HistoryItem, ItemId, RequestPhase, RequestSeq, TranslatorState,
    HISTORY_LIMIT, TRANSLATION_ERROR_MESSAGE,
};
pub use translator::{PendingTranslation, Translator};
