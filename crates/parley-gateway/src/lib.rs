//! Parley Gateway
//!
//! HTTP front door of the translation system: forwards each request to the
//! translation engine, records the result, and answers with a normalized body.

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod handlers;

use config::GatewayConfig;
use handlers::{create_app, AppState};
use parley_provider::LibreTranslateProvider;
use parley_store::SqliteStore;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;
use tracing::info;

pub use error::GatewayError;

/// Build application state from configuration
///
/// Opens the record store and prepares the engine client.
pub fn build_state(config: &GatewayConfig) -> Result<AppState, GatewayError> {
    let store = SqliteStore::new(&config.database)?;
    let provider = LibreTranslateProvider::with_timeout(
        config.provider.endpoint.clone(),
        config.provider.api_key.clone(),
        Duration::from_secs(config.provider.timeout_secs),
    )?;

    Ok(AppState::new(Arc::new(provider), Arc::new(Mutex::new(store))))
}

/// Start the Gateway HTTP server
///
/// Validates configuration, opens the store, and serves until the process is
/// stopped.
pub async fn start_server(config: GatewayConfig) -> Result<(), GatewayError> {
    config.validate()?;

    info!("Starting Parley Gateway");
    info!("Bind address: {}", config.bind_addr());
    info!("Record database: {}", config.database);
    info!("Translation engine: {}", config.provider.endpoint);
    info!("Allowed origin: {}", config.allowed_origin);

    let state = build_state(&config)?;
    let app = create_app(state, &config)?;

    let listener = TcpListener::bind(&config.bind_addr()).await?;
    info!("Gateway listening on {}", config.bind_addr());

    axum::serve(listener, app)
        .await
        .map_err(|e| GatewayError::Server(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use parley_domain::traits::RecordStore;

    #[test]
    fn test_build_state_in_memory() {
        let config = GatewayConfig {
            database: ":memory:".to_string(),
            ..GatewayConfig::default()
        };
        let state = build_state(&config).unwrap();
        assert_eq!(state.store.lock().unwrap().count().unwrap(), 0);
    }
}
