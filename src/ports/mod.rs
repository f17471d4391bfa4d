//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `EmbeddingProvider` - Text embeddings for subject matching
//! - `AssessmentRepository` - Storage for assessment sessions

mod assessment_repository;
mod embedding_provider;

pub use assessment_repository::AssessmentRepository;
pub use embedding_provider::{EmbeddingError, EmbeddingProvider, EmbeddingProviderInfo};
