//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers and error types
//! that form the vocabulary of the Career Compass domain.

mod answer_score;
mod errors;
mod ids;
mod timestamp;

pub use answer_score::AnswerScore;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::AssessmentId;
pub use timestamp::Timestamp;
