//! Embedding-based lookup of the reference subject closest to a major.

use std::sync::Arc;

use super::errors::StudyPlanError;
use super::similarity::cosine_similarity;
use crate::domain::catalog::{ReferenceCatalog, Subject};
use crate::ports::EmbeddingProvider;

/// The best subject for a major and how close it was.
#[derive(Debug, Clone, PartialEq)]
pub struct SubjectMatch {
    pub subject: Subject,
    pub similarity: f32,
}

/// Finds the catalog subject most similar to free text.
pub struct SubjectMatcher {
    catalog: Arc<ReferenceCatalog>,
    provider: Arc<dyn EmbeddingProvider>,
}

impl SubjectMatcher {
    pub fn new(catalog: Arc<ReferenceCatalog>, provider: Arc<dyn EmbeddingProvider>) -> Self {
        Self { catalog, provider }
    }

    /// Embeds the major and every subject name, returning the closest subject.
    ///
    /// Embeddings are computed one at a time and not cached. Ties go to the
    /// subject listed first.
    pub async fn best_match(&self, major: &str) -> Result<SubjectMatch, StudyPlanError> {
        let major = major.trim();
        if major.is_empty() {
            return Err(StudyPlanError::MajorRequired);
        }

        let major_embedding = self.provider.embed(major).await?;

        let mut best: Option<(&Subject, f32)> = None;
        for subject in self.catalog.subjects() {
            let embedding = self.provider.embed(&subject.name).await?;
            let similarity = cosine_similarity(&major_embedding, &embedding);
            tracing::trace!(subject = %subject.name, similarity, "subject similarity");

            match best {
                Some((_, top)) if similarity <= top => {}
                _ => best = Some((subject, similarity)),
            }
        }

        let (subject, similarity) = best.ok_or(StudyPlanError::NoSubjects)?;
        tracing::debug!(major, subject = %subject.name, similarity, "matched subject");

        Ok(SubjectMatch {
            subject: subject.clone(),
            similarity,
        })
    }
}
