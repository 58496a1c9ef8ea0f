//! Tests for LibreTranslateProvider against a local stub engine

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use parley_domain::traits::{ProviderRequest, TranslationProvider};
use parley_domain::SourceLanguage;
use parley_provider::{LibreTranslateProvider, ProviderError};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use std::time::Duration;

type Received = Arc<Mutex<Vec<Value>>>;

/// Serve `app` on an ephemeral port and return its base URL
async fn spawn_engine(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

/// Stub engine answering every call with `reply`, recording request bodies
async fn engine_replying(reply: Value) -> (String, Received) {
    let received: Received = Arc::new(Mutex::new(Vec::new()));
    let app = Router::new()
        .route(
            "/translate",
            post(move |State(received): State<Received>, Json(body): Json<Value>| {
                let reply = reply.clone();
                async move {
                    received.lock().unwrap().push(body);
                    Json(reply)
                }
            }),
        )
        .with_state(received.clone());
    (spawn_engine(app).await, received)
}

fn request(text: &str, source: &str, target: &str) -> ProviderRequest {
    ProviderRequest {
        text: text.to_string(),
        source: SourceLanguage::parse(source),
        target: target.into(),
    }
}

#[tokio::test]
async fn test_sends_libretranslate_body() {
    let (url, received) =
        engine_replying(json!({"translatedText": "Hola", "detectedSourceLanguage": "en"})).await;
    let provider = LibreTranslateProvider::new(url, Some("15432h23i78".to_string())).unwrap();

    provider.translate(&request("Hello", "auto", "es")).await.unwrap();

    let bodies = received.lock().unwrap().clone();
    assert_eq!(bodies.len(), 1);
    assert_eq!(
        bodies[0],
        json!({
            "q": "Hello",
            "source": "auto",
            "target": "es",
            "format": "text",
            "api_key": "15432h23i78"
        })
    );
}

#[tokio::test]
async fn test_flat_detected_language() {
    let (url, _) =
        engine_replying(json!({"translatedText": "Hola", "detectedSourceLanguage": "en"})).await;
    let provider = LibreTranslateProvider::new(url, None).unwrap();

    let result = provider.translate(&request("Hello", "auto", "es")).await.unwrap();
    assert_eq!(result.translated_text, "Hola");
    assert_eq!(result.detected_language.as_str(), "en");
}

#[tokio::test]
async fn test_object_detected_language() {
    let (url, _) = engine_replying(json!({
        "translatedText": "Hello",
        "detectedSourceLanguage": {"language": "fr", "confidence": 87.5}
    }))
    .await;
    let provider = LibreTranslateProvider::new(url, None).unwrap();

    let result = provider.translate(&request("Bonjour", "auto", "en")).await.unwrap();
    assert_eq!(result.detected_language.as_str(), "fr");
}

#[tokio::test]
async fn test_reply_with_both_detection_fields() {
    let (url, _) = engine_replying(json!({
        "translatedText": "Hola",
        "detectedSourceLanguage": "en",
        "detectedLanguage": {"language": "en", "confidence": 90}
    }))
    .await;
    let provider = LibreTranslateProvider::new(url, None).unwrap();

    let result = provider.translate(&request("Hello", "auto", "es")).await.unwrap();
    assert_eq!(result.translated_text, "Hola");
    assert_eq!(result.detected_language.as_str(), "en");
}

#[tokio::test]
async fn test_missing_detection_uses_requested_source() {
    let (url, _) = engine_replying(json!({"translatedText": "Guten Tag"})).await;
    let provider = LibreTranslateProvider::new(url, None).unwrap();

    let result = provider.translate(&request("Good day", "en", "de")).await.unwrap();
    assert_eq!(result.detected_language.as_str(), "en");
}

#[tokio::test]
async fn test_malformed_reply() {
    let (url, _) = engine_replying(json!({"unexpected": true})).await;
    let provider = LibreTranslateProvider::new(url, None).unwrap();

    let result = provider.translate(&request("Hello", "auto", "es")).await;
    assert!(matches!(result, Err(ProviderError::InvalidResponse(_))));
}

#[tokio::test]
async fn test_error_status() {
    let app = Router::new().route(
        "/translate",
        post(|| async { (StatusCode::BAD_REQUEST, Json(json!({"error": "Invalid API key"}))) }),
    );
    let provider = LibreTranslateProvider::new(spawn_engine(app).await, None).unwrap();

    match provider.translate(&request("Hello", "auto", "es")).await {
        Err(ProviderError::Status { status, body }) => {
            assert_eq!(status, 400);
            assert!(body.contains("Invalid API key"));
        }
        other => panic!("Expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_timeout() {
    let app = Router::new().route(
        "/translate",
        post(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Json(json!({"translatedText": "too late"}))
        }),
    );
    let url = spawn_engine(app).await;
    let provider =
        LibreTranslateProvider::with_timeout(url, None, Duration::from_millis(200)).unwrap();

    let result = provider.translate(&request("Hello", "auto", "es")).await;
    assert!(matches!(result, Err(ProviderError::Timeout)));
}
