use thiserror::Error;

use crate::ports::EmbeddingError;

/// Errors from study plan generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StudyPlanError {
    /// The major was empty or whitespace.
    #[error("Major is required")]
    MajorRequired,

    /// The catalog holds no subjects to match against.
    #[error("No reference subjects are available")]
    NoSubjects,

    /// The embedding provider failed.
    #[error("Embedding failed: {0}")]
    Embedding(#[from] EmbeddingError),
}

impl StudyPlanError {
    pub fn embedding(err: EmbeddingError) -> Self {
        StudyPlanError::Embedding(err)
    }
}
