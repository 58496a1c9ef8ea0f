//! Tests for the Translator controller against an in-process gateway

use async_trait::async_trait;
use parley_client::{
    ClientError, Clipboard, RequestPhase, SpeechSynthesizer, TranslationGateway, Translator,
    HISTORY_LIMIT, TRANSLATION_ERROR_MESSAGE,
};
use parley_domain::{SourceLanguage, TranslateRequest, TranslateResponse};
use std::sync::{Arc, Mutex};

/// Gateway double that records requests and answers with an uppercase echo
#[derive(Clone, Default)]
struct MockGateway {
    requests: Arc<Mutex<Vec<TranslateRequest>>>,
    fail: bool,
}

impl MockGateway {
    fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl TranslationGateway for MockGateway {
    async fn translate(
        &self,
        request: &TranslateRequest,
    ) -> Result<TranslateResponse, ClientError> {
        self.requests.lock().unwrap().push(request.clone());
        if self.fail {
            return Err(ClientError::Gateway {
                status: 500,
                message: "Translation failed".to_string(),
            });
        }
        Ok(TranslateResponse {
            translated_text: request.text.to_uppercase(),
            detected_language: "en".into(),
            recorded: true,
        })
    }
}

#[derive(Default)]
struct RecordingSpeech {
    spoken: Mutex<Vec<(String, String)>>,
}

impl SpeechSynthesizer for RecordingSpeech {
    fn speak(&self, text: &str, lang: &str) -> Result<(), ClientError> {
        self.spoken.lock().unwrap().push((text.to_string(), lang.to_string()));
        Ok(())
    }
}

#[derive(Default)]
struct RecordingClipboard {
    contents: Mutex<Option<String>>,
}

impl Clipboard for RecordingClipboard {
    fn write_text(&self, text: &str) -> Result<(), ClientError> {
        *self.contents.lock().unwrap() = Some(text.to_string());
        Ok(())
    }
}

#[tokio::test]
async fn test_blank_input_makes_no_call() {
    let gateway = MockGateway::default();
    let mut translator = Translator::new(gateway.clone());

    for blank in ["", "   ", "\n\t"] {
        assert!(!translator.translate_text(blank, SourceLanguage::Auto, "es").await);
    }

    assert_eq!(gateway.call_count(), 0);
    assert_eq!(translator.state().phase, RequestPhase::Idle);
}

#[tokio::test]
async fn test_non_blank_input_makes_one_call() {
    let gateway = MockGateway::default();
    let mut translator = Translator::new(gateway.clone());

    assert!(translator.translate_text("hello", SourceLanguage::Auto, "es").await);

    assert_eq!(gateway.call_count(), 1);
    let state = translator.state();
    assert_eq!(state.phase, RequestPhase::Succeeded);
    assert_eq!(state.translated_text, "HELLO");
    assert_eq!(state.history.len(), 1);
    assert_eq!(state.history[0].source_lang.as_str(), "en");
    assert_eq!(state.history[0].target_lang.as_str(), "es");
}

#[tokio::test]
async fn test_failure_shows_message_and_keeps_input() {
    let gateway = MockGateway::failing();
    let mut translator = Translator::new(gateway.clone());

    translator.translate_text("hello", SourceLanguage::Auto, "es").await;

    let state = translator.state();
    assert_eq!(gateway.call_count(), 1);
    assert_eq!(state.phase, RequestPhase::Failed);
    assert_eq!(state.translated_text, TRANSLATION_ERROR_MESSAGE);
    assert_eq!(state.source_text, "hello");
    assert!(state.history.is_empty());
}

#[tokio::test]
async fn test_history_capped_newest_first() {
    let mut translator = Translator::new(MockGateway::default());

    for i in 0..(HISTORY_LIMIT + 3) {
        translator.set_source_text(format!("word {}", i));
        translator.translate().await;
    }

    let history = &translator.state().history;
    assert_eq!(history.len(), HISTORY_LIMIT);
    assert_eq!(history[0].source_text, format!("word {}", HISTORY_LIMIT + 2));
}

#[tokio::test]
async fn test_overlapping_requests_latest_wins() {
    let gateway = MockGateway::default();
    let mut translator = Translator::new(gateway.clone());

    translator.set_source_text("first");
    let first = translator.begin_translation().unwrap();
    translator.set_source_text("second");
    let second = translator.begin_translation().unwrap();
    assert!(translator.state().is_loading());

    let second_result = gateway.translate(&second.request).await;
    let first_result = gateway.translate(&first.request).await;

    assert!(translator.complete_translation(second, second_result));
    assert!(!translator.complete_translation(first, first_result));

    let state = translator.state();
    assert_eq!(state.translated_text, "SECOND");
    assert_eq!(state.history.len(), 1);
    assert_eq!(state.history[0].source_text, "second");
}

#[tokio::test]
async fn test_new_attempt_after_failure() {
    let mut translator = Translator::new(MockGateway::failing());
    translator.translate_text("hello", SourceLanguage::Auto, "es").await;
    assert_eq!(translator.state().phase, RequestPhase::Failed);

    let pending = translator.begin_translation().unwrap();
    assert_eq!(translator.state().phase, RequestPhase::Loading);
    assert_eq!(pending.request.text, "hello");
}

#[tokio::test]
async fn test_load_from_history_does_not_call_gateway() {
    let gateway = MockGateway::default();
    let mut translator = Translator::new(gateway.clone());
    translator.translate_text("one", SourceLanguage::parse("fr"), "de").await;
    translator.translate_text("two", SourceLanguage::Auto, "es").await;

    let item = translator.state().history[1].clone();
    translator.load_from_history(&item);

    let state = translator.state();
    assert_eq!(gateway.call_count(), 2);
    assert_eq!(state.source_text, "one");
    assert_eq!(state.translated_text, "ONE");
    assert_eq!(state.source_lang.as_str(), "fr");
    assert_eq!(state.target_lang.as_str(), "de");
}

#[tokio::test]
async fn test_favorites_roundtrip() {
    let mut translator = Translator::new(MockGateway::default());
    translator.translate_text("hello", SourceLanguage::Auto, "es").await;

    let item = translator.state().history[0].clone();
    let from_history = translator.add_favorite(&item);
    let current = translator.favorite_current().unwrap();

    assert_eq!(translator.state().favorites.len(), 2);
    assert_eq!(translator.state().favorites[0].id, current);

    translator.remove_favorite(from_history);
    assert_eq!(translator.state().favorites.len(), 1);
    assert_eq!(translator.state().history.len(), 1);
}

#[tokio::test]
async fn test_swap_respects_auto() {
    let mut translator = Translator::new(MockGateway::default());
    translator.translate_text("hello", SourceLanguage::Auto, "es").await;

    let before = translator.state().clone();
    translator.swap();
    assert_eq!(translator.state(), &before);

    translator.set_source_lang(SourceLanguage::parse("en"));
    translator.swap();
    let state = translator.state();
    assert_eq!(state.source_lang.as_str(), "es");
    assert_eq!(state.target_lang.as_str(), "en");
    assert_eq!(state.source_text, "HELLO");
    assert_eq!(state.translated_text, "hello");
}

#[tokio::test]
async fn test_speech_and_clipboard_delegate() {
    let mut translator = Translator::new(MockGateway::default());
    let speech = RecordingSpeech::default();
    let clipboard = RecordingClipboard::default();

    // Nothing to read or copy yet
    translator.speak_translation(&speech).unwrap();
    assert!(speech.spoken.lock().unwrap().is_empty());

    translator.translate_text("hello", SourceLanguage::Auto, "es").await;
    translator.speak_source(&speech).unwrap();
    translator.speak_translation(&speech).unwrap();
    translator.copy_translation(&clipboard).unwrap();

    let spoken = speech.spoken.lock().unwrap().clone();
    assert_eq!(
        spoken,
        vec![
            ("hello".to_string(), "en".to_string()),
            ("HELLO".to_string(), "es".to_string()),
        ]
    );
    assert_eq!(clipboard.contents.lock().unwrap().as_deref(), Some("HELLO"));

    translator.copy_source(&clipboard).unwrap();
    assert_eq!(clipboard.contents.lock().unwrap().as_deref(), Some("hello"));
}

#[tokio::test]
async fn test_dark_mode_and_clear_history() {
    let mut translator = Translator::new(MockGateway::default());
    translator.translate_text("hello", SourceLanguage::Auto, "es").await;

    translator.toggle_dark_mode();
    translator.clear_history();

    assert!(translator.state().dark_mode);
    assert!(translator.state().history.is_empty());
    assert_eq!(translator.state().detected_label(), Some("English"));
}
