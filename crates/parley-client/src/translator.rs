//! Translator controller: the state container plus its side effects.

use crate::capabilities::{Clipboard, SpeechSynthesizer};
use crate::error::ClientError;
use crate::gateway::TranslationGateway;
use crate::state::{Action, HistoryItem, ItemId, RequestSeq, TranslatorState};
use parley_domain::{now_millis, LanguageCode, SourceLanguage, TranslateRequest, TranslateResponse};

/// A request that has been issued but not answered yet
#[derive(Debug, Clone, PartialEq)]
pub struct PendingTranslation {
    /// Sequence token; only the latest token's answer is applied
    pub seq: RequestSeq,
    /// Body sent to the gateway
    pub request: TranslateRequest,
}

/// Owns a [`TranslatorState`] and performs gateway calls for it
///
/// Overlapping requests are supported through
/// [`begin_translation`](Self::begin_translation) and
/// [`complete_translation`](Self::complete_translation): answers to superseded
/// requests are dropped.
pub struct Translator<G> {
    gateway: G,
    state: TranslatorState,
}

impl<G: TranslationGateway> Translator<G> {
    /// Create a translator with default state
    pub fn new(gateway: G) -> Self {
        Self::with_state(gateway, TranslatorState::default())
    }

    /// Create a translator resuming from an existing state
    pub fn with_state(gateway: G, state: TranslatorState) -> Self {
        Self { gateway, state }
    }

    /// Current view state
    pub fn state(&self) -> &TranslatorState {
        &self.state
    }

    /// The gateway used for requests
    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Apply a transition
    pub fn dispatch(&mut self, action: Action) {
        let state = std::mem::take(&mut self.state);
        self.state = state.apply(action);
    }

    /// Edit the input text
    pub fn set_source_text(&mut self, text: impl Into<String>) {
        self.dispatch(Action::SetSourceText(text.into()));
    }

    /// Pick the source language
    pub fn set_source_lang(&mut self, lang: SourceLanguage) {
        self.dispatch(Action::SetSourceLang(lang));
    }

    /// Pick the target language
    pub fn set_target_lang(&mut self, lang: impl Into<LanguageCode>) {
        self.dispatch(Action::SetTargetLang(lang.into()));
    }

    /// Enter the loading state for the current input
    ///
    /// Returns `None`, without touching the state, when the input is blank.
    pub fn begin_translation(&mut self) -> Option<PendingTranslation> {
        let request = self.state.request()?;
        let seq = self.state.next_request();
        self.dispatch(Action::TranslationStarted(seq));
        Some(PendingTranslation { seq, request })
    }

    /// Apply the outcome of a request
    ///
    /// Returns `false` when the request was superseded and its outcome dropped.
    pub fn complete_translation(
        &mut self,
        pending: PendingTranslation,
        result: Result<TranslateResponse, ClientError>,
    ) -> bool {
        let current = pending.seq == self.state.latest_request();
        if !current {
            tracing::debug!(seq = pending.seq.value(), "Dropping answer to superseded request");
        }

        match result {
            Ok(response) => self.dispatch(Action::TranslationSucceeded {
                seq: pending.seq,
                request: pending.request,
                response,
                item_id: ItemId::new(),
                timestamp: now_millis(),
            }),
            Err(e) => {
                tracing::warn!(error = %e, seq = pending.seq.value(), "Translation request failed");
                self.dispatch(Action::TranslationFailed(pending.seq));
            }
        }

        current
    }

    /// Translate the current input
    ///
    /// Blank input is a no-op and returns `false`; otherwise exactly one gateway
    /// call is made.
    pub async fn translate(&mut self) -> bool {
        let Some(pending) = self.begin_translation() else {
            return false;
        };
        let result = self.gateway.translate(&pending.request).await;
        self.complete_translation(pending, result);
        true
    }

    /// Set all inputs, then translate
    pub async fn translate_text(
        &mut self,
        text: impl Into<String>,
        source: SourceLanguage,
        target: impl Into<LanguageCode>,
    ) -> bool {
        self.set_source_text(text);
        self.set_source_lang(source);
        self.set_target_lang(target);
        self.translate().await
    }

    /// Exchange source and target; does nothing while auto-detect is selected
    pub fn swap(&mut self) {
        self.dispatch(Action::Swap);
    }

    /// Save a copy of `item` as a favorite and return the favorite's id
    pub fn add_favorite(&mut self, item: &HistoryItem) -> ItemId {
        let id = ItemId::new();
        self.dispatch(Action::AddFavorite {
            item: item.clone(),
            id,
        });
        id
    }

    /// Save the active translation as a favorite
    ///
    /// Returns `None` when there is no translation to save.
    pub fn favorite_current(&mut self) -> Option<ItemId> {
        if self.state.translated_text.is_empty() {
            return None;
        }
        let id = ItemId::new();
        self.dispatch(Action::FavoriteCurrent {
            id,
            timestamp: now_millis(),
        });
        Some(id)
    }

    /// Drop a favorite
    pub fn remove_favorite(&mut self, id: ItemId) {
        self.dispatch(Action::RemoveFavorite(id));
    }

    /// Show a history entry again without calling the gateway
    pub fn load_from_history(&mut self, item: &HistoryItem) {
        self.dispatch(Action::LoadFromHistory(item.clone()));
    }

    /// Forget all history
    pub fn clear_history(&mut self) {
        self.dispatch(Action::ClearHistory);
    }

    /// Flip dark mode
    pub fn toggle_dark_mode(&mut self) {
        self.dispatch(Action::ToggleDarkMode);
    }

    /// Read the input text aloud
    pub fn speak_source(&self, speech: &dyn SpeechSynthesizer) -> Result<(), ClientError> {
        let lang = match (&self.state.source_lang, &self.state.detected_language) {
            (SourceLanguage::Auto, Some(detected)) => detected.as_str(),
            (source, _) => source.as_str(),
        };
        speak(speech, &self.state.source_text, lang)
    }

    /// Read the translation aloud
    pub fn speak_translation(&self, speech: &dyn SpeechSynthesizer) -> Result<(), ClientError> {
        speak(speech, &self.state.translated_text, self.state.target_lang.as_str())
    }

    /// Copy the input text
    pub fn copy_source(&self, clipboard: &dyn Clipboard) -> Result<(), ClientError> {
        copy(clipboard, &self.state.source_text)
    }

    /// Copy the translation
    pub fn copy_translation(&self, clipboard: &dyn Clipboard) -> Result<(), ClientError> {
        copy(clipboard, &self.state.translated_text)
    }
}

fn speak(speech: &dyn SpeechSynthesizer, text: &str, lang: &str) -> Result<(), ClientError> {
    if text.is_empty() {
        return Ok(());
    }
    speech.speak(text, lang)
}

fn copy(clipboard: &dyn Clipboard, text: &str) -> Result<(), ClientError> {
    if text.is_empty() {
        return Ok(());
    }
    clipboard.write_text(text)
}
