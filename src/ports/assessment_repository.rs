//! Assessment repository port.
//!
//! Defines the contract for storing in-progress and completed assessments.
//! Assessments are short-lived; implementations may drop them after a TTL
//! and must then report them as missing.

use crate::domain::assessment::Assessment;
use crate::domain::foundation::{AssessmentId, DomainError};
use async_trait::async_trait;

/// Repository port for Assessment aggregate persistence.
#[async_trait]
pub trait AssessmentRepository: Send + Sync {
    /// Save a new assessment.
    ///
    /// # Errors
    ///
    /// - `StorageError` on persistence failure
    async fn save(&self, assessment: &Assessment) -> Result<(), DomainError>;

    /// Update an existing assessment.
    ///
    /// The stored copy must still be at `assessment.version()`; on success
    /// the stored version advances by one.
    ///
    /// # Errors
    ///
    /// - `AssessmentNotFound` if the assessment doesn't exist or has expired
    /// - `ConcurrencyConflict` if another update was stored first
    /// - `StorageError` on persistence failure
    async fn update(&self, assessment: &Assessment) -> Result<(), DomainError>;

    /// Find an assessment by its ID.
    ///
    /// Returns `None` if not found or expired.
    async fn find_by_id(&self, id: &AssessmentId) -> Result<Option<Assessment>, DomainError>;

    /// Delete an assessment.
    ///
    /// # Errors
    ///
    /// - `AssessmentNotFound` if the assessment doesn't exist or has expired
    async fn delete(&self, id: &AssessmentId) -> Result<(), DomainError>;
}
