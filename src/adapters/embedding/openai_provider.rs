//! OpenAI Embeddings Provider - Implementation of EmbeddingProvider for
//! OpenAI's `/embeddings` endpoint.
//!
//! # Configuration
//!
//! ```ignore
//! let config = OpenAIEmbeddingConfig::new(api_key)
//!     .with_model("text-embedding-3-small")
//!     .with_base_url("https://api.openai.com/v1");
//!
//! let provider = OpenAIEmbeddingProvider::new(config)?;
//! ```

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::ports::{EmbeddingError, EmbeddingProvider, EmbeddingProviderInfo};

/// Configuration for the OpenAI embeddings provider.
#[derive(Debug, Clone)]
pub struct OpenAIEmbeddingConfig {
    /// API key for authentication.
    api_key: Secret<String>,
    /// Embedding model (e.g., "text-embedding-3-small").
    pub model: String,
    /// Base URL for the API (default: https://api.openai.com/v1).
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
    /// Requested output size; `None` keeps the model's native size.
    pub dimensions: Option<usize>,
}

impl OpenAIEmbeddingConfig {
    /// Creates a new configuration with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            model: "text-embedding-3-small".to_string(),
            base_url: "https://api.openai.com/v1".to_string(),
            timeout: Duration::from_secs(30),
            dimensions: None,
        }
    }

    /// Sets the model to use.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Requests shortened vectors (text-embedding-3 models only).
    pub fn with_dimensions(mut self, dimensions: usize) -> Self {
        self.dimensions = Some(dimensions);
        self
    }

    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// OpenAI embeddings provider.
pub struct OpenAIEmbeddingProvider {
    config: OpenAIEmbeddingConfig,
    client: Client,
}

impl OpenAIEmbeddingProvider {
    /// Creates a new provider with the given configuration.
    ///
    /// # Errors
    ///
    /// - `Unavailable` if the HTTP client cannot be built
    pub fn new(config: OpenAIEmbeddingConfig) -> Result<Self, EmbeddingError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| EmbeddingError::unavailable(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    fn embeddings_url(&self) -> String {
        format!("{}/embeddings", self.config.base_url)
    }

    /// Native vector size for known models.
    fn native_dimensions(model: &str) -> usize {
        match model {
            "text-embedding-3-large" => 3072,
            _ => 1536,
        }
    }

    async fn send_request(&self, text: &str) -> Result<Response, EmbeddingError> {
        let body = EmbeddingRequest {
            model: &self.config.model,
            input: text,
            dimensions: self.config.dimensions,
        };

        self.client
            .post(self.embeddings_url())
            .header("Authorization", format!("Bearer {}", self.config.api_key()))
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    EmbeddingError::timeout(self.config.timeout.as_secs() as u32)
                } else if e.is_connect() {
                    EmbeddingError::network(format!("Connection failed: {}", e))
                } else {
                    EmbeddingError::network(e.to_string())
                }
            })
    }

    async fn handle_response_status(response: Response) -> Result<Response, EmbeddingError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(Self::status_error(status, &body))
    }

    /// Maps a non-success status to an error.
    fn status_error(status: StatusCode, body: &str) -> EmbeddingError {
        match status.as_u16() {
            401 | 403 => EmbeddingError::AuthenticationFailed,
            429 => EmbeddingError::rate_limited(30),
            500..=599 => EmbeddingError::unavailable(format!("Server error {}: {}", status, body)),
            _ => EmbeddingError::parse(format!("Unexpected status {}: {}", status, body)),
        }
    }
}

#[async_trait]
impl EmbeddingProvider for OpenAIEmbeddingProvider {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        let response = self.send_request(text).await.map_err(|e| {
            tracing::warn!(error = %e, model = %self.config.model, "embedding request failed");
            e
        })?;
        let response = Self::handle_response_status(response).await.map_err(|e| {
            tracing::error!(error = %e, model = %self.config.model, "embedding request rejected");
            e
        })?;

        let parsed: EmbeddingResponse = response
            .json()
            .await
            .map_err(|e| EmbeddingError::parse(format!("Failed to parse response: {}", e)))?;

        let embedding = parsed
            .data
            .into_iter()
            .next()
            .map(|d| d.embedding)
            .ok_or_else(|| EmbeddingError::parse("No embedding in response"))?;

        if let Some(expected) = self.config.dimensions {
            if embedding.len() != expected {
                return Err(EmbeddingError::dimension_mismatch(expected, embedding.len()));
            }
        }
        Ok(embedding)
    }

    fn dimensions(&self) -> usize {
        self.config
            .dimensions
            .unwrap_or_else(|| Self::native_dimensions(&self.config.model))
    }

    fn provider_info(&self) -> EmbeddingProviderInfo {
        EmbeddingProviderInfo::new("openai", self.config.model.clone(), self.dimensions())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Wire types
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Serialize)]
struct EmbeddingRequest<'a> {
    model: &'a str,
    input: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    dimensions: Option<usize>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingData>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingData {
    embedding: Vec<f32>,
}
