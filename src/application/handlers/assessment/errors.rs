use crate::domain::assessment::AssessmentError;
use crate::domain::foundation::{AssessmentId, DomainError, ErrorCode};

/// Converts a repository error, keeping not-found and version conflicts
/// distinct for `id`.
pub(crate) fn repository_error(id: AssessmentId) -> impl FnOnce(DomainError) -> AssessmentError {
    move |err| match err.code {
        ErrorCode::AssessmentNotFound => AssessmentError::not_found(id),
        ErrorCode::ConcurrencyConflict => AssessmentError::conflict(id),
        _ => AssessmentError::from(err),
    }
}
