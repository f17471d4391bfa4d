//! Mock Embedding Provider for testing.
//!
//! Wraps the deterministic hash provider so matching still behaves
//! sensibly, and adds:
//!
//! - Fixed vectors for chosen texts
//! - Error injection (queued one-shot errors or a sticky failure)
//! - Simulated delays
//! - Call tracking for verification
//!
//! # Example
//!
//! ```ignore
//! let provider = MockEmbeddingProvider::new()
//!     .with_error(MockError::Unavailable { message: "down".into() });
//!
//! assert!(provider.embed("Law").await.is_err());
//! assert!(provider.embed("Law").await.is_ok());
//! ```

use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio::time::sleep;

use super::hash_provider::HashEmbeddingProvider;
use crate::ports::{EmbeddingError, EmbeddingProvider, EmbeddingProviderInfo};

/// Mock error types for testing error handling.
#[derive(Debug, Clone)]
pub enum MockError {
    Unavailable { message: String },
    AuthenticationFailed,
    RateLimited { retry_after_secs: u32 },
    Network { message: String },
    Timeout { timeout_secs: u32 },
    Parse { message: String },
}

impl From<MockError> for EmbeddingError {
    fn from(err: MockError) -> Self {
        match err {
            MockError::Unavailable { message } => EmbeddingError::unavailable(message),
            MockError::AuthenticationFailed => EmbeddingError::AuthenticationFailed,
            MockError::RateLimited { retry_after_secs } => {
                EmbeddingError::rate_limited(retry_after_secs)
            }
            MockError::Network { message } => EmbeddingError::network(message),
            MockError::Timeout { timeout_secs } => EmbeddingError::timeout(timeout_secs),
            MockError::Parse { message } => EmbeddingError::parse(message),
        }
    }
}

/// Mock embedding provider for testing.
#[derive(Debug, Clone)]
pub struct MockEmbeddingProvider {
    fallback: HashEmbeddingProvider,
    fixed: Arc<Mutex<HashMap<String, Vec<f32>>>>,
    errors: Arc<Mutex<VecDeque<MockError>>>,
    sticky_error: Option<MockError>,
    delay: Duration,
    calls: Arc<Mutex<Vec<String>>>,
}

impl Default for MockEmbeddingProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MockEmbeddingProvider {
    /// Creates a mock backed by a small hash provider.
    pub fn new() -> Self {
        Self {
            fallback: HashEmbeddingProvider::new(64),
            fixed: Arc::new(Mutex::new(HashMap::new())),
            errors: Arc::new(Mutex::new(VecDeque::new())),
            sticky_error: None,
            delay: Duration::ZERO,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A provider whose every call fails with `error`.
    pub fn failing(error: MockError) -> Self {
        Self {
            sticky_error: Some(error),
            ..Self::new()
        }
    }

    /// Returns `vector` whenever exactly `text` is embedded.
    ///
    /// The vector should match the mock's 64 dimensions.
    pub fn with_vector(self, text: impl Into<String>, vector: Vec<f32>) -> Self {
        lock(&self.fixed).insert(text.into(), vector);
        self
    }

    /// Queues an error for the next call.
    pub fn with_error(self, error: MockError) -> Self {
        lock(&self.errors).push_back(error);
        self
    }

    /// Sets simulated latency per request.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Returns the number of embed calls made.
    pub fn call_count(&self) -> usize {
        lock(&self.calls).len()
    }

    /// Returns the texts embedded so far, in call order.
    pub fn get_calls(&self) -> Vec<String> {
        lock(&self.calls).clone()
    }
}

/// Locks a mutex, recovering the data if a panicking test poisoned it.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[async_trait]
impl EmbeddingProvider for MockEmbeddingProvider {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        lock(&self.calls).push(text.to_string());

        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        if let Some(error) = &self.sticky_error {
            return Err(error.clone().into());
        }
        if let Some(error) = lock(&self.errors).pop_front() {
            return Err(error.into());
        }
        if let Some(vector) = lock(&self.fixed).get(text) {
            return Ok(vector.clone());
        }
        Ok(self.fallback.embed_text(text))
    }

    fn dimensions(&self) -> usize {
        self.fallback.dimensions()
    }

    fn provider_info(&self) -> EmbeddingProviderInfo {
        EmbeddingProviderInfo::new("mock", "mock-embedding-1", self.dimensions())
    }
}
