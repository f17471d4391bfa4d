//! SubmitAnswersHandler - Command handler for questionnaire answers.
//!
//! Personality answers move the assessment to the interest step. Interest
//! answers trigger aggregation and both matchers, completing the assessment.

use std::sync::Arc;

use super::errors::repository_error;
use crate::domain::assessment::{
    AnswerSet, Assessment, AssessmentError, AssessmentOutcome, QuestionBank, QuestionnaireSection,
};
use crate::domain::foundation::AssessmentId;
use crate::domain::matching::RecommendationEngine;
use crate::ports::AssessmentRepository;

/// Command carrying one section's answers.
#[derive(Debug, Clone)]
pub struct SubmitAnswersCommand {
    pub assessment_id: AssessmentId,
    pub section: QuestionnaireSection,
    pub answers: AnswerSet,
}

/// Handler for submitting answers.
pub struct SubmitAnswersHandler {
    repository: Arc<dyn AssessmentRepository>,
    questions: Arc<QuestionBank>,
    engine: Arc<RecommendationEngine>,
}

impl SubmitAnswersHandler {
    pub fn new(
        repository: Arc<dyn AssessmentRepository>,
        questions: Arc<QuestionBank>,
        engine: Arc<RecommendationEngine>,
    ) -> Self {
        Self {
            repository,
            questions,
            engine,
        }
    }

    pub async fn handle(&self, cmd: SubmitAnswersCommand) -> Result<Assessment, AssessmentError> {
        let id = cmd.assessment_id;

        // 1. Load the assessment
        let mut assessment = self
            .repository
            .find_by_id(&id)
            .await
            .map_err(repository_error(id))?
            .ok_or_else(|| AssessmentError::not_found(id))?;

        // 2. Record answers (domain validation)
        let unknown = match cmd.section {
            QuestionnaireSection::Personality => {
                let unknown = cmd.answers.unknown_ids(self.questions.personality());
                assessment.record_personality(cmd.answers, self.questions.personality())?;
                unknown
            }
            QuestionnaireSection::Interests => {
                let unknown = cmd.answers.unknown_ids(self.questions.interests());
                assessment.record_interests(cmd.answers, self.questions.interests())?;
                unknown
            }
        };
        if !unknown.is_empty() {
            tracing::debug!(assessment_id = %id, ?unknown, "ignoring answers to unknown questions");
        }

        // 3. Score and recommend once both sections are in
        if cmd.section == QuestionnaireSection::Interests {
            let (trait_scores, interest_scores) = assessment.scores(&self.questions)?;
            let recommendations = self.engine.recommend(&trait_scores, &interest_scores);
            assessment.complete(AssessmentOutcome {
                trait_scores,
                interest_scores,
                recommendations,
            })?;
        }

        // 4. Persist the update
        self.repository
            .update(&assessment)
            .await
            .map_err(repository_error(id))?;

        tracing::info!(
            assessment_id = %id,
            section = %cmd.section,
            stage = %assessment.stage(),
            "Answers recorded"
        );
        Ok(assessment)
    }
}
