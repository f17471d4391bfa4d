//! GenerateStudyPlanHandler - Command handler for study plan generation.

use std::sync::Arc;

use crate::domain::study_plan::{StudyPlan, StudyPlanError, SubjectMatcher};

/// Command to generate a study plan for a free-text major.
#[derive(Debug, Clone)]
pub struct GenerateStudyPlanCommand {
    pub major: String,
}

/// Result of study plan generation.
#[derive(Debug, Clone)]
pub struct GenerateStudyPlanResult {
    pub plan: StudyPlan,
    /// Cosine similarity between the major and the matched subject.
    pub similarity: f32,
}

pub struct GenerateStudyPlanHandler {
    matcher: Arc<SubjectMatcher>,
}

impl GenerateStudyPlanHandler {
    pub fn new(matcher: Arc<SubjectMatcher>) -> Self {
        Self { matcher }
    }

    pub async fn handle(
        &self,
        cmd: GenerateStudyPlanCommand,
    ) -> Result<GenerateStudyPlanResult, StudyPlanError> {
        let major = cmd.major.trim();
        if major.is_empty() {
            return Err(StudyPlanError::MajorRequired);
        }

        let matched = self.matcher.best_match(major).await.map_err(|e| {
            if let StudyPlanError::Embedding(inner) = &e {
                tracing::warn!(error = %inner, major, "Study plan embedding failed");
            }
            e
        })?;

        tracing::info!(
            major,
            subject = %matched.subject.name,
            similarity = matched.similarity,
            "Study plan generated"
        );

        Ok(GenerateStudyPlanResult {
            plan: StudyPlan::assemble(major, &matched.subject),
            similarity: matched.similarity,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::embedding::{HashEmbeddingProvider, MockEmbeddingProvider, MockError};
    use crate::domain::catalog::ReferenceCatalog;
    use crate::ports::{EmbeddingError, EmbeddingProvider};

    fn handler(provider: impl EmbeddingProvider + 'static) -> GenerateStudyPlanHandler {
        let matcher = SubjectMatcher::new(Arc::new(ReferenceCatalog::builtin()), Arc::new(provider));
        GenerateStudyPlanHandler::new(Arc::new(matcher))
    }

    #[tokio::test]
    async fn computer_science_major_gets_computer_science_plan() {
        let catalog = ReferenceCatalog::builtin();
        let result = handler(HashEmbeddingProvider::default())
            .handle(GenerateStudyPlanCommand {
                major: "Computer Science".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(result.plan.matched_subject, "Computer Science");
        assert!((result.similarity - 1.0).abs() < 1e-5);
        let reference = &catalog.subjects()[0];
        assert_eq!(result.plan.resources.books, reference.books);
        assert_eq!(result.plan.resources.courses, reference.courses);
        assert_eq!(result.plan.resources.videos, reference.video);
    }

    #[tokio::test]
    async fn major_is_trimmed() {
        let result = handler(HashEmbeddingProvider::default())
            .handle(GenerateStudyPlanCommand {
                major: "  Law  ".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(result.plan.major, "Law");
        assert_eq!(result.plan.matched_subject, "Law");
    }

    #[tokio::test]
    async fn empty_major_is_rejected_without_embedding() {
        let provider = MockEmbeddingProvider::new();
        let tracker = provider.clone();

        let err = handler(provider)
            .handle(GenerateStudyPlanCommand {
                major: String::new(),
            })
            .await
            .unwrap_err();

        assert_eq!(err, StudyPlanError::MajorRequired);
        assert_eq!(tracker.call_count(), 0);
    }

    #[tokio::test]
    async fn embeds_major_then_each_subject() {
        let provider = MockEmbeddingProvider::new();
        let tracker = provider.clone();

        handler(provider)
            .handle(GenerateStudyPlanCommand {
                major: "Biology".to_string(),
            })
            .await
            .unwrap();

        let calls = tracker.get_calls();
        assert_eq!(calls.len(), 7);
        assert_eq!(calls[0], "Biology");
        assert_eq!(calls[1], "Computer Science");
    }

    #[tokio::test]
    async fn provider_failure_is_returned() {
        let provider = MockEmbeddingProvider::failing(MockError::Network {
            message: "connection reset".into(),
        });

        let err = handler(provider)
            .handle(GenerateStudyPlanCommand {
                major: "History".to_string(),
            })
            .await
            .unwrap_err();

        assert_eq!(
            err,
            StudyPlanError::Embedding(EmbeddingError::network("connection reset"))
        );
    }
}
