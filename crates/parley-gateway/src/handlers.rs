//! HTTP request handlers for the Gateway service.
//!
//! Implements the translation endpoint and a health check using axum.

use crate::config::{ConfigError, GatewayConfig};
use crate::error::GatewayError;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, HeaderValue, Method},
    response::Json,
    routing::{get, post},
    Router as AxumRouter,
};
use parley_domain::traits::{ProviderRequest, RecordStore, TranslationProvider};
use parley_domain::{NewTranslation, TranslateRequest, TranslateResponse, TranslationRecord};
use parley_provider::ProviderError;
use parley_store::StoreError;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

/// Translation engine shared by all requests
pub type SharedProvider = Arc<dyn TranslationProvider<Error = ProviderError>>;

/// Record store shared by all requests; SQLite connections are not `Sync`
pub type SharedStore = Arc<Mutex<dyn RecordStore<Error = StoreError> + Send>>;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Upstream translation engine
    pub provider: SharedProvider,
    /// Insert-only record store
    pub store: SharedStore,
}

impl AppState {
    /// Create application state
    pub fn new(provider: SharedProvider, store: SharedStore) -> Self {
        Self { provider, store }
    }
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    /// "healthy" when the store answers, "degraded" otherwise
    pub status: String,
    /// Number of stored translation records, if the store answered
    pub records: Option<u64>,
}

/// POST /api/translate - Translate text and record the result
///
/// Provider failures answer 500 with a generic message and store nothing. A
/// store failure after a successful translation still answers 200, with
/// `recorded: false`.
async fn translate(
    State(state): State<AppState>,
    payload: Result<Json<TranslateRequest>, JsonRejection>,
) -> Result<Json<TranslateResponse>, GatewayError> {
    let Json(request) = payload.map_err(|e| GatewayError::InvalidRequest(e.body_text()))?;

    if request.is_blank() {
        return Err(GatewayError::InvalidRequest("text is blank".to_string()));
    }
    if request.target_lang.is_empty() {
        return Err(GatewayError::InvalidRequest("targetLang is empty".to_string()));
    }

    let provider_request = ProviderRequest {
        text: request.text.clone(),
        source: request.source_lang.clone(),
        target: request.target_lang.clone(),
    };

    let translation = state.provider.translate(&provider_request).await?;

    let new_record = NewTranslation {
        source_text: request.text,
        translated_text: translation.translated_text.clone(),
        source_lang: translation.detected_language.clone(),
        target_lang: request.target_lang,
    };

    let recorded = match record_translation(state.store.clone(), new_record).await {
        Ok(record) => {
            info!(
                id = %record.id,
                source = %record.source_lang,
                target = %record.target_lang,
                "Recorded translation"
            );
            true
        }
        Err(e) => {
            tracing::error!(error = %e, "Translation succeeded but was not recorded");
            false
        }
    };

    Ok(Json(TranslateResponse {
        translated_text: translation.translated_text,
        detected_language: translation.detected_language,
        recorded,
    }))
}

/// Insert a record on the blocking pool
async fn record_translation(
    store: SharedStore,
    translation: NewTranslation,
) -> Result<TranslationRecord, GatewayError> {
    tokio::task::spawn_blocking(move || {
        let mut store = store.lock().map_err(|_| GatewayError::StorePoisoned)?;
        store.insert_record(translation).map_err(GatewayError::from)
    })
    .await
    .map_err(|e| GatewayError::Internal(e.to_string()))?
}

/// GET /health - Store health check
async fn health_check(State(state): State<AppState>) -> Json<HealthCheckResponse> {
    let store = state.store.clone();
    let records = tokio::task::spawn_blocking(move || {
        let store = store.lock().ok()?;
        store.count().ok()
    })
    .await
    .ok()
    .flatten();

    let status = if records.is_some() { "healthy" } else { "degraded" };

    Json(HealthCheckResponse {
        status: status.to_string(),
        records,
    })
}

/// Create the axum router with all routes
pub fn create_router(state: AppState) -> AxumRouter {
    AxumRouter::new()
        .route("/api/translate", post(translate))
        .route("/health", get(health_check))
        .with_state(state)
}

/// Create the router with the CORS policy from the configuration
pub fn create_app(state: AppState, config: &GatewayConfig) -> Result<AxumRouter, ConfigError> {
    Ok(create_router(state).layer(cors_layer(&config.allowed_origin)?))
}

/// CORS policy admitting the configured client origin
///
/// `"*"` admits any origin without credentials; anything else must be a single
/// origin, which is then allowed to send credentials.
pub fn cors_layer(allowed_origin: &str) -> Result<CorsLayer, ConfigError> {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    if allowed_origin.trim() == "*" {
        return Ok(layer.allow_origin(Any));
    }

    let origin =
        HeaderValue::from_str(allowed_origin.trim()).map_err(|_| ConfigError::InvalidValue {
            field: "allowed_origin".to_string(),
            value: allowed_origin.to_string(),
        })?;

    Ok(layer.allow_origin(origin).allow_credentials(true))
}
