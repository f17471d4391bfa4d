//! Storage Adapters
//!
//! Implementations of the AssessmentRepository port.
//!
//! ## Available Adapters
//!
//! - **InMemoryAssessmentRepository** - Process-local map with lazy TTL expiry

mod in_memory_assessment_repository;

pub use in_memory_assessment_repository::InMemoryAssessmentRepository;
