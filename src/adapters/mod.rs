//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `catalog` - Reference data loaded from YAML/JSON files
//! - `embedding` - Embedding providers (hash, OpenAI, mock)
//! - `http` - Axum REST API
//! - `storage` - Assessment session storage

pub mod catalog;
pub mod embedding;
pub mod http;
pub mod storage;
