//! Embedding provider adapters.
//!
//! - `HashEmbeddingProvider` - Deterministic offline feature hashing (default)
//! - `OnnxEmbeddingProvider` - Local ONNX model (`onnx` feature)
//! - `OpenAIEmbeddingProvider` - OpenAI `/embeddings` API
//! - `MockEmbeddingProvider` - Configurable test double

mod hash_provider;
mod mock_provider;
#[cfg(feature = "onnx")]
mod onnx_provider;
mod openai_provider;

pub use hash_provider::{HashEmbeddingProvider, HASH_MODEL};
pub use mock_provider::{MockEmbeddingProvider, MockError};
#[cfg(feature = "onnx")]
pub use onnx_provider::{OnnxEmbeddingConfig, OnnxEmbeddingProvider, Pooling, ONNX_PROVIDER};
pub use openai_provider::{OpenAIEmbeddingConfig, OpenAIEmbeddingProvider};
