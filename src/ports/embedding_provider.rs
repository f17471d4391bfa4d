//! Embedding Provider Port - Interface for text embedding backends.
//!
//! The study plan generator maps free text (a major) to the closest
//! reference subject by comparing embedding vectors. This port hides where
//! those vectors come from: a local deterministic hasher, a local ONNX
//! model, a hosted model, or a test double.
//!
//! # Example
//!
//! ```ignore
//! use async_trait::async_trait;
//!
//! struct ConstantProvider;
//!
//! #[async_trait]
//! impl EmbeddingProvider for ConstantProvider {
//!     async fn embed(&self, _text: &str) -> Result<Vec<f32>, EmbeddingError> {
//!         Ok(vec![1.0, 0.0])
//!     }
//!     // ... other methods
//! }
//! ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Port for text embedding generation.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Embed a single text into a vector.
    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError>;

    /// Dimensionality of the vectors this provider returns.
    fn dimensions(&self) -> usize;

    /// Get provider information (name, model).
    fn provider_info(&self) -> EmbeddingProviderInfo;
}

/// Provider identification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbeddingProviderInfo {
    /// Provider name (e.g., "hash", "openai").
    pub name: String,
    /// Model identifier.
    pub model: String,
    pub dimensions: usize,
}

impl EmbeddingProviderInfo {
    pub fn new(name: impl Into<String>, model: impl Into<String>, dimensions: usize) -> Self {
        Self {
            name: name.into(),
            model: model.into(),
            dimensions,
        }
    }
}

/// Errors from embedding providers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmbeddingError {
    /// Provider is unavailable.
    #[error("embedding provider unavailable: {message}")]
    Unavailable { message: String },

    /// API key or authentication failed.
    #[error("embedding provider authentication failed")]
    AuthenticationFailed,

    /// Rate limited by provider.
    #[error("rate limited: retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u32 },

    /// Network error during request.
    #[error("network error: {0}")]
    Network(String),

    /// Request timed out.
    #[error("request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u32 },

    /// Failed to parse provider response.
    #[error("parse error: {0}")]
    Parse(String),

    /// Provider returned a vector of unexpected size.
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// A local model file could not be loaded.
    #[error("failed to load model {path}: {reason}")]
    ModelLoadFailed { path: String, reason: String },

    /// A local model failed while embedding.
    #[error("inference failed: {0}")]
    InferenceFailed(String),
}

impl EmbeddingError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    pub fn rate_limited(retry_after_secs: u32) -> Self {
        Self::RateLimited { retry_after_secs }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    pub fn timeout(timeout_secs: u32) -> Self {
        Self::Timeout { timeout_secs }
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    pub fn dimension_mismatch(expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch { expected, actual }
    }

    pub fn model_load_failed(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ModelLoadFailed {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub fn inference_failed(reason: impl Into<String>) -> Self {
        Self::InferenceFailed(reason.into())
    }

    /// Returns true if the provider could not be reached or refused for load.
    ///
    /// These map to 503; the remaining variants mean the provider answered
    /// but the answer was unusable.
    pub fn is_unavailable(&self) -> bool {
        matches!(
            self,
            EmbeddingError::Unavailable { .. }
                | EmbeddingError::RateLimited { .. }
                | EmbeddingError::Network(_)
                | EmbeddingError::Timeout { .. }
        )
    }
}
