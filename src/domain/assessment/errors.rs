//! Assessment-specific error types.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | NotFound | 404 |
//! | InvalidState | 409 |
//! | Conflict | 409 |
//! | ValidationFailed | 400 |
//! | Infrastructure | 500 |

use crate::domain::foundation::{AssessmentId, DomainError, ErrorCode, ValidationError};

/// Assessment workflow errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssessmentError {
    /// Assessment does not exist or has expired.
    NotFound(AssessmentId),

    /// The assessment is not in a stage that allows the operation.
    InvalidState { current: String, attempted: String },

    /// Another request stored a newer version first.
    Conflict(AssessmentId),

    /// Submitted answers failed validation.
    ValidationFailed { field: String, message: String },

    /// Repository or other infrastructure failure.
    Infrastructure(String),
}

impl AssessmentError {
    pub fn not_found(id: AssessmentId) -> Self {
        AssessmentError::NotFound(id)
    }

    pub fn invalid_state(current: impl Into<String>, attempted: impl Into<String>) -> Self {
        AssessmentError::InvalidState {
            current: current.into(),
            attempted: attempted.into(),
        }
    }

    pub fn conflict(id: AssessmentId) -> Self {
        AssessmentError::Conflict(id)
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        AssessmentError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        AssessmentError::Infrastructure(message.into())
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            AssessmentError::NotFound(_) => ErrorCode::AssessmentNotFound,
            AssessmentError::InvalidState { .. } => ErrorCode::InvalidStateTransition,
            AssessmentError::Conflict(_) => ErrorCode::ConcurrencyConflict,
            AssessmentError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            AssessmentError::Infrastructure(_) => ErrorCode::StorageError,
        }
    }

    /// Returns a user-facing error message.
    pub fn message(&self) -> String {
        match self {
            AssessmentError::NotFound(id) => format!("Assessment not found: {}", id),
            AssessmentError::InvalidState { current, attempted } => {
                format!("Cannot {} while assessment is {}", attempted, current)
            }
            AssessmentError::Conflict(id) => {
                format!("Assessment {} was changed by another request; reload and retry", id)
            }
            AssessmentError::ValidationFailed { message, .. } => message.clone(),
            AssessmentError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for AssessmentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for AssessmentError {}

impl From<ValidationError> for AssessmentError {
    fn from(err: ValidationError) -> Self {
        AssessmentError::ValidationFailed {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<DomainError> for AssessmentError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed => AssessmentError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            ErrorCode::InvalidStateTransition => AssessmentError::InvalidState {
                current: "unknown".to_string(),
                attempted: err.message,
            },
            _ => AssessmentError::Infrastructure(err.to_string()),
        }
    }
}

impl From<AssessmentError> for DomainError {
    fn from(err: AssessmentError) -> Self {
        DomainError::new(err.code(), err.message())
    }
}
