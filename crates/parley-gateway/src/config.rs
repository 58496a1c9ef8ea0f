//! Configuration file parsing for the Gateway.
//!
//! Settings come from an optional TOML file, then environment variables
//! override individual fields.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Gateway configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse config TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Missing required field
    #[error("Missing required configuration field: {0}")]
    MissingField(String),

    /// A field holds a value that cannot be used
    #[error("Invalid value for {field}: {value}")]
    InvalidValue {
        /// Field or environment variable name
        field: String,
        /// Offending value
        value: String,
    },
}

/// Environment variable overriding the database path
pub const ENV_DATABASE: &str = "PARLEY_DATABASE";
/// Environment variable overriding the listening port
pub const ENV_PORT: &str = "PORT";
/// Environment variable overriding the bind address
pub const ENV_BIND_ADDRESS: &str = "PARLEY_BIND_ADDRESS";
/// Environment variable overriding the allowed CORS origin
pub const ENV_ALLOWED_ORIGIN: &str = "PARLEY_ALLOWED_ORIGIN";
/// Environment variable overriding the provider endpoint
pub const ENV_PROVIDER_URL: &str = "PARLEY_PROVIDER_URL";
/// Environment variable overriding the provider API key
pub const ENV_PROVIDER_API_KEY: &str = "PARLEY_PROVIDER_API_KEY";

/// Gateway configuration loaded from TOML
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    /// Bind address (e.g., "127.0.0.1")
    pub bind_address: String,

    /// Bind port (default: 3001)
    pub bind_port: u16,

    /// SQLite database path for translation records
    pub database: String,

    /// Origin allowed to call the API from a browser
    pub allowed_origin: String,

    /// Upstream translation engine
    pub provider: ProviderConfig,
}

/// Translation engine configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// Engine base URL (e.g., "http://127.0.0.1:5000")
    pub endpoint: String,

    /// Static credential sent with every request
    pub api_key: Option<String>,

    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        GatewayConfig {
            bind_address: "127.0.0.1".to_string(),
            bind_port: 3001,
            database: "parley.db".to_string(),
            allowed_origin: "http://localhost:5173".to_string(),
            provider: ProviderConfig::default(),
        }
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        ProviderConfig {
            endpoint: parley_provider::libretranslate::DEFAULT_ENDPOINT.to_string(),
            api_key: None,
            timeout_secs: parley_provider::libretranslate::DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl GatewayConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: GatewayConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Apply overrides from the process environment
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from any key lookup (the environment, in production)
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(database) = lookup(ENV_DATABASE) {
            self.database = database;
        }
        if let Some(port) = lookup(ENV_PORT) {
            self.bind_port = port.trim().parse().map_err(|_| ConfigError::InvalidValue {
                field: ENV_PORT.to_string(),
                value: port.clone(),
            })?;
        }
        if let Some(address) = lookup(ENV_BIND_ADDRESS) {
            self.bind_address = address;
        }
        if let Some(origin) = lookup(ENV_ALLOWED_ORIGIN) {
            self.allowed_origin = origin;
        }
        if let Some(endpoint) = lookup(ENV_PROVIDER_URL) {
            self.provider.endpoint = endpoint;
        }
        if let Some(api_key) = lookup(ENV_PROVIDER_API_KEY) {
            self.provider.api_key = Some(api_key);
        }
        Ok(())
    }

    /// Check required fields
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.database.trim().is_empty() {
            return Err(ConfigError::MissingField("database".to_string()));
        }
        if self.provider.endpoint.trim().is_empty() {
            return Err(ConfigError::MissingField("provider.endpoint".to_string()));
        }
        if self.provider.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "provider.timeout_secs".to_string(),
                value: "0".to_string(),
            });
        }
        Ok(())
    }

    /// Get the full bind address (address:port)
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.bind_port)
    }
}
