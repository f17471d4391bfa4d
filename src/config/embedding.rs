//! Embedding provider configuration

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

use super::error::ValidationError;

/// Embedding provider configuration
#[derive(Debug, Clone, Deserialize)]
pub struct EmbeddingConfig {
    /// Which backend produces embeddings
    #[serde(default)]
    pub provider: EmbeddingBackend,

    /// Vector size for the hash provider
    #[serde(default = "default_dimensions")]
    pub dimensions: usize,

    /// OpenAI API key
    pub openai_api_key: Option<String>,

    /// OpenAI embedding model
    #[serde(default = "default_model")]
    pub model: String,

    /// OpenAI API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Output size requested from OpenAI; unset keeps the model's own
    pub openai_dimensions: Option<usize>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// ONNX model file. The model takes `input_ids` and `attention_mask`
    /// and returns hidden states or pooled vectors as its first output.
    pub onnx_model_path: Option<PathBuf>,

    /// WordPiece `vocab.txt` matching the ONNX model. Without it token ids
    /// are hashed into the vocabulary range.
    pub onnx_vocab_path: Option<PathBuf>,

    /// How the ONNX model's hidden states become one vector
    #[serde(default)]
    pub onnx_pooling: OnnxPooling,
}

/// Embedding backend type
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum EmbeddingBackend {
    #[default]
    Hash,
    OpenAI,
    /// Local ONNX model. Needs the `onnx` cargo feature and an ONNX
    /// Runtime library (`ORT_DYLIB_PATH`).
    Onnx,
}

/// Pooling over the ONNX model's sequence output
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OnnxPooling {
    /// First token (`[CLS]`)
    #[default]
    Cls,
    /// Mean over all tokens
    Mean,
}

impl EmbeddingConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check if OpenAI is configured
    pub fn has_openai(&self) -> bool {
        self.openai_api_key.as_ref().is_some_and(|k| !k.is_empty())
    }

    /// Validate embedding configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(1..=4096).contains(&self.dimensions) {
            return Err(ValidationError::InvalidDimensions);
        }
        if self.openai_dimensions.is_some_and(|d| !(1..=4096).contains(&d)) {
            return Err(ValidationError::InvalidDimensions);
        }
        if self.timeout_secs == 0 {
            return Err(ValidationError::InvalidTimeout);
        }
        match self.provider {
            EmbeddingBackend::OpenAI if !self.has_openai() => {
                Err(ValidationError::MissingRequired("OPENAI_API_KEY"))
            }
            EmbeddingBackend::Onnx if self.onnx_model_path.is_none() => {
                Err(ValidationError::MissingRequired("ONNX_MODEL_PATH"))
            }
            _ => Ok(()),
        }
    }
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            provider: EmbeddingBackend::default(),
            dimensions: default_dimensions(),
            openai_api_key: None,
            model: default_model(),
            base_url: default_base_url(),
            openai_dimensions: None,
            timeout_secs: default_timeout(),
            onnx_model_path: None,
            onnx_vocab_path: None,
            onnx_pooling: OnnxPooling::default(),
        }
    }
}

fn default_dimensions() -> usize {
    384
}

fn default_model() -> String {
    "text-embedding-3-small".to_string()
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_timeout() -> u64 {
    30
}
