//! DiscardAssessmentHandler - Command handler for "start over".

use std::sync::Arc;

use super::errors::repository_error;
use crate::domain::assessment::AssessmentError;
use crate::domain::foundation::AssessmentId;
use crate::ports::AssessmentRepository;

/// Command to delete an assessment and its answers.
#[derive(Debug, Clone)]
pub struct DiscardAssessmentCommand {
    pub assessment_id: AssessmentId,
}

pub struct DiscardAssessmentHandler {
    repository: Arc<dyn AssessmentRepository>,
}

impl DiscardAssessmentHandler {
    pub fn new(repository: Arc<dyn AssessmentRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: DiscardAssessmentCommand) -> Result<(), AssessmentError> {
        let id = cmd.assessment_id;
        self.repository
            .delete(&id)
            .await
            .map_err(repository_error(id))?;

        tracing::info!(assessment_id = %id, "Assessment discarded");
        Ok(())
    }
}
