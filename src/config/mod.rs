//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `CAREER_COMPASS` prefix and nested values use double underscores as separators.
//! Every section has defaults, so the service starts with no variables set.
//!
//! # Example
//!
//! ```no_run
//! use career_compass::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {:?}", config.server.socket_addr());
//! ```

mod assessment;
mod catalog;
mod embedding;
mod error;
mod matching;
mod server;

pub use assessment::AssessmentConfig;
pub use catalog::CatalogConfig;
pub use embedding::{EmbeddingBackend, EmbeddingConfig, OnnxPooling};
pub use error::{ConfigError, ValidationError};
pub use matching::MatchingConfig;
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Embedding provider selection and credentials
    #[serde(default)]
    pub embedding: EmbeddingConfig,

    /// Reference data location
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Assessment session lifetime
    #[serde(default)]
    pub assessment: AssessmentConfig,

    /// Recommendation weights and result sizes
    #[serde(default)]
    pub matching: MatchingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `CAREER_COMPASS` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `CAREER_COMPASS__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `CAREER_COMPASS__EMBEDDING__PROVIDER=openai` -> `embedding.provider = openai`
    /// - `CAREER_COMPASS__EMBEDDING__ONNX_MODEL_PATH=/models/bert.onnx` -> `embedding.onnx_model_path`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("CAREER_COMPASS")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for the first invalid section.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.embedding.validate()?;
        self.assessment.validate()?;
        self.matching.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
