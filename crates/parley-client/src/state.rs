//! Translator view state and its transitions.
//!
//! [`TranslatorState::apply`] is a pure function of the current state and an
//! [`Action`]; ids, timestamps and sequence tokens arrive inside the actions,
//! so every transition is reproducible in tests.

use crate::languages;
use parley_domain::{LanguageCode, SourceLanguage, TranslateRequest, TranslateResponse};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum number of history entries kept
pub const HISTORY_LIMIT: usize = 20;

/// Text shown in place of a translation when the request fails
pub const TRANSLATION_ERROR_MESSAGE: &str = "Error occurred during translation. Please try again.";

/// Default target language
pub const DEFAULT_TARGET: &str = "en";

/// Locally generated identifier of a history or favorite entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(Uuid);

impl ItemId {
    /// Generate a fresh id
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

/// A past translation kept in memory by the client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryItem {
    /// Local identifier
    pub id: ItemId,
    /// Original text
    pub source_text: String,
    /// Translation
    pub translated_text: String,
    /// Source language (the detected one for auto-detect requests)
    pub source_lang: LanguageCode,
    /// Target language
    pub target_lang: LanguageCode,
    /// Creation time in milliseconds since the Unix epoch
    pub timestamp: u64,
}

/// Favorites share the history entry shape
pub type FavoriteItem = HistoryItem;

/// Token identifying one translation request; later requests get larger tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RequestSeq(u64);

impl RequestSeq {
    /// Raw token value
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Lifecycle of the latest translation request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestPhase {
    /// Nothing requested yet
    #[default]
    Idle,
    /// Waiting for the gateway
    Loading,
    /// The latest request produced a translation
    Succeeded,
    /// The latest request failed
    Failed,
}

/// State transitions
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Edit the input text
    SetSourceText(String),
    /// Pick the source language
    SetSourceLang(SourceLanguage),
    /// Pick the target language
    SetTargetLang(LanguageCode),
    /// A request tagged `seq` was sent
    TranslationStarted(RequestSeq),
    /// The request tagged `seq` came back with a translation
    TranslationSucceeded {
        /// Token of the answered request
        seq: RequestSeq,
        /// What was asked
        request: TranslateRequest,
        /// What the gateway answered
        response: TranslateResponse,
        /// Id for the new history entry
        item_id: ItemId,
        /// Time of completion
        timestamp: u64,
    },
    /// The request tagged `seq` failed
    TranslationFailed(RequestSeq),
    /// Exchange source and target
    Swap,
    /// Store a copy of `item` as a favorite under `id`
    AddFavorite {
        /// Entry to copy
        item: HistoryItem,
        /// Id of the new favorite
        id: ItemId,
    },
    /// Favorite the active translation
    FavoriteCurrent {
        /// Id of the new favorite
        id: ItemId,
        /// Time of the action
        timestamp: u64,
    },
    /// Drop a favorite
    RemoveFavorite(ItemId),
    /// Show a history entry again
    LoadFromHistory(HistoryItem),
    /// Forget all history
    ClearHistory,
    /// Flip the dark-mode flag
    ToggleDarkMode,
}

/// Everything the translator view shows
#[derive(Debug, Clone, PartialEq)]
pub struct TranslatorState {
    /// Input text
    pub source_text: String,
    /// Active translation, or the error message after a failure
    pub translated_text: String,
    /// Selected source language
    pub source_lang: SourceLanguage,
    /// Selected target language
    pub target_lang: LanguageCode,
    /// Language reported by the last successful translation
    pub detected_language: Option<LanguageCode>,
    /// Lifecycle of the latest request
    pub phase: RequestPhase,
    /// Recent translations, newest first
    pub history: Vec<HistoryItem>,
    /// User-curated translations, newest first
    pub favorites: Vec<FavoriteItem>,
    /// Dark-mode flag
    pub dark_mode: bool,
    latest_request: RequestSeq,
}

impl Default for TranslatorState {
    fn default() -> Self {
        Self {
            source_text: String::new(),
            translated_text: String::new(),
            source_lang: SourceLanguage::Auto,
            target_lang: LanguageCode::new(DEFAULT_TARGET),
            detected_language: None,
            phase: RequestPhase::Idle,
            history: Vec::new(),
            favorites: Vec::new(),
            dark_mode: false,
            latest_request: RequestSeq::default(),
        }
    }
}

impl TranslatorState {
    /// Apply one transition
    pub fn apply(self, action: Action) -> Self {
        match action {
            Action::SetSourceText(text) => Self { source_text: text, ..self },
            Action::SetSourceLang(lang) => Self { source_lang: lang, ..self },
            Action::SetTargetLang(lang) => Self { target_lang: lang, ..self },
            Action::TranslationStarted(seq) => {
                // A token at or below the latest one can never complete
                if seq <= self.latest_request {
                    return self;
                }
                Self {
                    phase: RequestPhase::Loading,
                    latest_request: seq,
                    ..self
                }
            }
            Action::TranslationSucceeded {
                seq,
                request,
                response,
                item_id,
                timestamp,
            } => self.translation_succeeded(seq, request, response, item_id, timestamp),
            Action::TranslationFailed(seq) => {
                if seq != self.latest_request {
                    return self;
                }
                Self {
                    translated_text: TRANSLATION_ERROR_MESSAGE.to_string(),
                    phase: RequestPhase::Failed,
                    ..self
                }
            }
            Action::Swap => self.swap(),
            Action::AddFavorite { item, id } => self.add_favorite(HistoryItem { id, ..item }),
            Action::FavoriteCurrent { id, timestamp } => {
                let item = HistoryItem {
                    id,
                    source_text: self.source_text.clone(),
                    translated_text: self.translated_text.clone(),
                    source_lang: self.resolved_source_lang(),
                    target_lang: self.target_lang.clone(),
                    timestamp,
                };
                self.add_favorite(item)
            }
            Action::RemoveFavorite(id) => {
                let mut state = self;
                state.favorites.retain(|item| item.id != id);
                state
            }
            Action::LoadFromHistory(item) => Self {
                source_text: item.source_text,
                translated_text: item.translated_text,
                source_lang: SourceLanguage::from(item.source_lang),
                target_lang: item.target_lang,
                ..self
            },
            Action::ClearHistory => Self {
                history: Vec::new(),
                ..self
            },
            Action::ToggleDarkMode => Self {
                dark_mode: !self.dark_mode,
                ..self
            },
        }
    }

    fn translation_succeeded(
        self,
        seq: RequestSeq,
        request: TranslateRequest,
        response: TranslateResponse,
        item_id: ItemId,
        timestamp: u64,
    ) -> Self {
        // Superseded requests must not overwrite newer results
        if seq != self.latest_request {
            return self;
        }

        let source_lang = match &request.source_lang {
            SourceLanguage::Auto => response.detected_language.clone(),
            SourceLanguage::Code(code) => code.clone(),
        };
        let item = HistoryItem {
            id: item_id,
            source_text: request.text,
            translated_text: response.translated_text.clone(),
            source_lang,
            target_lang: request.target_lang,
            timestamp,
        };

        let mut history = self.history;
        history.insert(0, item);
        history.truncate(HISTORY_LIMIT);

        Self {
            translated_text: response.translated_text,
            detected_language: Some(response.detected_language),
            phase: RequestPhase::Succeeded,
            history,
            ..self
        }
    }

    fn swap(self) -> Self {
        match self.source_lang {
            SourceLanguage::Auto => self,
            SourceLanguage::Code(source) => Self {
                source_lang: SourceLanguage::from(self.target_lang),
                target_lang: source,
                source_text: self.translated_text,
                translated_text: self.source_text,
                ..self
            },
        }
    }

    fn add_favorite(self, item: FavoriteItem) -> Self {
        let mut favorites = self.favorites;
        favorites.insert(0, item);
        Self { favorites, ..self }
    }

    /// Token for the next request
    pub fn next_request(&self) -> RequestSeq {
        RequestSeq(self.latest_request.0 + 1)
    }

    /// Token of the most recent request
    pub fn latest_request(&self) -> RequestSeq {
        self.latest_request
    }

    /// Whether a request is in flight
    pub fn is_loading(&self) -> bool {
        self.phase == RequestPhase::Loading
    }

    /// Whether the submit control should be enabled
    pub fn can_submit(&self) -> bool {
        !self.source_text.trim().is_empty() && !self.is_loading()
    }

    /// Whether swap would do anything
    pub fn can_swap(&self) -> bool {
        !self.source_lang.is_auto()
    }

    /// The request the current input describes, or `None` for blank input
    pub fn request(&self) -> Option<TranslateRequest> {
        if self.source_text.trim().is_empty() {
            return None;
        }
        Some(TranslateRequest::new(
            self.source_text.clone(),
            self.source_lang.clone(),
            self.target_lang.clone(),
        ))
    }

    /// Display name of the detected language while auto-detect is selected
    pub fn detected_label(&self) -> Option<&'static str> {
        if !self.source_lang.is_auto() {
            return None;
        }
        self.detected_language
            .as_ref()
            .and_then(|code| languages::display_name(code.as_str()))
    }

    fn resolved_source_lang(&self) -> LanguageCode {
        match (&self.source_lang, &self.detected_language) {
            (SourceLanguage::Auto, Some(detected)) => detected.clone(),
            (source, _) => source.to_code(),
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: history never exceeds the cap and the newest entry is first
        #[test]
        fn test_history_cap_property(texts in proptest::collection::vec("[a-z]{1,8}", 1..40)) {
            let mut state = TranslatorState::default();
            for text in &texts {
                state = state.apply(Action::SetSourceText(text.clone()));
                let seq = state.next_request();
                state = state.apply(Action::TranslationStarted(seq));
                let request = state.request().unwrap();
                state = state.apply(Action::TranslationSucceeded {
                    seq,
                    request,
                    response: TranslateResponse {
                        translated_text: text.to_uppercase(),
                        detected_language: "en".into(),
                        recorded: true,
                    },
                    item_id: ItemId::new(),
                    timestamp: 0,
                });
                prop_assert!(state.history.len() <= HISTORY_LIMIT);
                prop_assert_eq!(&state.history[0].source_text, text);
            }
        }

        /// Property: swapping twice restores an explicit-source state
        #[test]
        fn test_swap_involution(source in "[a-z]{2}", target in "[a-z]{2}", a in ".*", b in ".*") {
            prop_assume!(source != "auto");
            let state = TranslatorState {
                source_text: a,
                translated_text: b,
                source_lang: SourceLanguage::parse(&source),
                target_lang: LanguageCode::new(target.clone()),
                ..TranslatorState::default()
            };
            prop_assume!(!state.target_lang.is_auto());
            let twice = state.clone().apply(Action::Swap).apply(Action::Swap);
            prop_assert_eq!(twice, state);
        }
    }
}
