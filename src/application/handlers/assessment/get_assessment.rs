//! GetAssessmentHandler - Query handler for loading an assessment.

use std::sync::Arc;

use super::errors::repository_error;
use crate::domain::assessment::{Assessment, AssessmentError};
use crate::domain::foundation::AssessmentId;
use crate::ports::AssessmentRepository;

/// Query for a single assessment.
#[derive(Debug, Clone)]
pub struct GetAssessmentQuery {
    pub assessment_id: AssessmentId,
}

/// Handler for assessment lookups. Expired assessments are not found.
pub struct GetAssessmentHandler {
    repository: Arc<dyn AssessmentRepository>,
}

impl GetAssessmentHandler {
    pub fn new(repository: Arc<dyn AssessmentRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetAssessmentQuery) -> Result<Assessment, AssessmentError> {
        let id = query.assessment_id;
        self.repository
            .find_by_id(&id)
            .await
            .map_err(repository_error(id))?
            .ok_or_else(|| AssessmentError::not_found(id))
    }
}
