//! StartAssessmentHandler - Command handler for starting a questionnaire.

use std::sync::Arc;

use crate::domain::assessment::{Assessment, AssessmentError};
use crate::domain::foundation::AssessmentId;
use crate::ports::AssessmentRepository;

/// Command to start a new assessment.
#[derive(Debug, Clone, Default)]
pub struct StartAssessmentCommand;

/// Handler for starting assessments.
pub struct StartAssessmentHandler {
    repository: Arc<dyn AssessmentRepository>,
}

impl StartAssessmentHandler {
    pub fn new(repository: Arc<dyn AssessmentRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, _cmd: StartAssessmentCommand) -> Result<Assessment, AssessmentError> {
        let assessment = Assessment::new(AssessmentId::new());
        self.repository.save(&assessment).await?;

        tracing::info!(assessment_id = %assessment.id(), "Assessment started");
        Ok(assessment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryAssessmentRepository;
    use crate::domain::assessment::AssessmentStage;

    #[tokio::test]
    async fn starts_and_stores_assessment() {
        let repo = Arc::new(InMemoryAssessmentRepository::new(60));
        let handler = StartAssessmentHandler::new(repo.clone());

        let assessment = handler.handle(StartAssessmentCommand).await.unwrap();

        assert_eq!(assessment.stage(), AssessmentStage::AwaitingPersonality);
        assert!(repo.find_by_id(&assessment.id()).await.unwrap().is_some());
    }
}
