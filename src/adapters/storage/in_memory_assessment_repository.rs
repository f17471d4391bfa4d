//! In-Memory Assessment Repository
//!
//! Keeps assessments in a process-local map. Entries older than the TTL
//! (measured from their last update) are treated as missing and removed
//! when touched; `save` also sweeps every expired entry. `update` only
//! succeeds against the version the caller loaded.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::assessment::Assessment;
use crate::domain::foundation::{AssessmentId, DomainError, ErrorCode, Timestamp};
use crate::ports::AssessmentRepository;

/// In-memory storage for assessments with lazy expiry.
#[derive(Debug, Clone)]
pub struct InMemoryAssessmentRepository {
    assessments: Arc<RwLock<HashMap<AssessmentId, Assessment>>>,
    ttl_minutes: i64,
}

impl InMemoryAssessmentRepository {
    /// Create a repository whose entries expire after `ttl_minutes` of inactivity.
    pub fn new(ttl_minutes: i64) -> Self {
        Self {
            assessments: Arc::new(RwLock::new(HashMap::new())),
            ttl_minutes,
        }
    }

    /// Remove every expired assessment, returning how many were dropped.
    pub async fn purge_expired(&self) -> usize {
        let now = Timestamp::now();
        let mut assessments = self.assessments.write().await;
        let before = assessments.len();
        assessments.retain(|_, a| !a.is_expired(self.ttl_minutes, &now));
        let purged = before - assessments.len();
        if purged > 0 {
            tracing::debug!(purged, remaining = assessments.len(), "purged expired assessments");
        }
        purged
    }

    /// Get the number of stored assessments, expired ones included.
    pub async fn len(&self) -> usize {
        self.assessments.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.assessments.read().await.is_empty()
    }

    /// Removes `id` if it has expired; returns true when it is live.
    fn evict_if_expired(
        &self,
        assessments: &mut HashMap<AssessmentId, Assessment>,
        id: &AssessmentId,
    ) -> bool {
        let now = Timestamp::now();
        match assessments.get(id) {
            Some(a) if a.is_expired(self.ttl_minutes, &now) => {
                assessments.remove(id);
                tracing::debug!(assessment_id = %id, "assessment expired");
                false
            }
            Some(_) => true,
            None => false,
        }
    }

    fn not_found(id: &AssessmentId) -> DomainError {
        DomainError::new(
            ErrorCode::AssessmentNotFound,
            format!("Assessment not found: {}", id),
        )
    }
}

impl Default for InMemoryAssessmentRepository {
    fn default() -> Self {
        Self::new(60)
    }
}

#[async_trait]
impl AssessmentRepository for InMemoryAssessmentRepository {
    async fn save(&self, assessment: &Assessment) -> Result<(), DomainError> {
        self.purge_expired().await;
        let mut assessments = self.assessments.write().await;
        assessments.insert(assessment.id(), assessment.clone());
        Ok(())
    }

    async fn update(&self, assessment: &Assessment) -> Result<(), DomainError> {
        let id = assessment.id();
        let mut assessments = self.assessments.write().await;
        if !self.evict_if_expired(&mut assessments, &id) {
            return Err(Self::not_found(&id));
        }

        let stored_version = assessments.get(&id).map(Assessment::version);
        if stored_version != Some(assessment.version()) {
            tracing::debug!(
                assessment_id = %id,
                expected = assessment.version(),
                found = ?stored_version,
                "stale assessment update rejected"
            );
            return Err(DomainError::new(
                ErrorCode::ConcurrencyConflict,
                format!("Assessment version mismatch: {}", id),
            ));
        }

        let mut next = assessment.clone();
        next.advance_version();
        assessments.insert(id, next);
        Ok(())
    }

    async fn find_by_id(&self, id: &AssessmentId) -> Result<Option<Assessment>, DomainError> {
        let mut assessments = self.assessments.write().await;
        if !self.evict_if_expired(&mut assessments, id) {
            return Ok(None);
        }
        Ok(assessments.get(id).cloned())
    }

    async fn delete(&self, id: &AssessmentId) -> Result<(), DomainError> {
        let mut assessments = self.assessments.write().await;
        if !self.evict_if_expired(&mut assessments, id) {
            return Err(Self::not_found(id));
        }
        assessments.remove(id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::{AnswerSet, QuestionBank};

    fn stale_assessment(minutes_ago: i64) -> Assessment {
        Assessment::started_at(AssessmentId::new(), Timestamp::now().plus_minutes(-minutes_ago))
    }

    #[tokio::test]
    async fn save_and_find_round_trip() {
        let repo = InMemoryAssessmentRepository::new(60);
        let assessment = Assessment::new(AssessmentId::new());

        repo.save(&assessment).await.unwrap();
        let found = repo.find_by_id(&assessment.id()).await.unwrap();

        assert_eq!(found, Some(assessment));
    }

    #[tokio::test]
    async fn find_unknown_returns_none() {
        let repo = InMemoryAssessmentRepository::default();
        assert!(repo.find_by_id(&AssessmentId::new()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn update_replaces_stored_assessment() {
        let repo = InMemoryAssessmentRepository::new(60);
        let mut assessment = Assessment::new(AssessmentId::new());
        repo.save(&assessment).await.unwrap();

        let bank = QuestionBank::standard();
        assessment
            .record_personality(Default::default(), bank.personality())
            .unwrap();
        repo.update(&assessment).await.unwrap();

        let found = repo.find_by_id(&assessment.id()).await.unwrap().unwrap();
        assert_eq!(found.stage(), assessment.stage());
    }

    #[tokio::test]
    async fn update_advances_stored_version() {
        let repo = InMemoryAssessmentRepository::new(60);
        let assessment = Assessment::new(AssessmentId::new());
        repo.save(&assessment).await.unwrap();

        repo.update(&assessment).await.unwrap();

        let found = repo.find_by_id(&assessment.id()).await.unwrap().unwrap();
        assert_eq!(found.version(), assessment.version() + 1);
    }

    #[tokio::test]
    async fn stale_update_is_rejected() {
        let repo = InMemoryAssessmentRepository::new(60);
        let bank = QuestionBank::standard();
        let original = Assessment::new(AssessmentId::new());
        repo.save(&original).await.unwrap();

        let mut first = repo.find_by_id(&original.id()).await.unwrap().unwrap();
        let mut second = first.clone();

        first
            .record_personality(AnswerSet::new().with("patient", 2), bank.personality())
            .unwrap();
        repo.update(&first).await.unwrap();

        second
            .record_personality(AnswerSet::new().with("patient", 5), bank.personality())
            .unwrap();
        let err = repo.update(&second).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::ConcurrencyConflict);
        let stored = repo.find_by_id(&original.id()).await.unwrap().unwrap();
        assert_eq!(stored.personality_answers().unwrap().get("patient"), Some(2));
    }

    #[tokio::test]
    async fn update_unknown_is_not_found() {
        let repo = InMemoryAssessmentRepository::new(60);
        let err = repo
            .update(&Assessment::new(AssessmentId::new()))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::AssessmentNotFound);
    }

    #[tokio::test]
    async fn delete_removes_assessment() {
        let repo = InMemoryAssessmentRepository::new(60);
        let assessment = Assessment::new(AssessmentId::new());
        repo.save(&assessment).await.unwrap();

        repo.delete(&assessment.id()).await.unwrap();

        assert!(repo.find_by_id(&assessment.id()).await.unwrap().is_none());
        assert!(repo.delete(&assessment.id()).await.is_err());
    }

    #[tokio::test]
    async fn expired_assessment_is_missing_and_purged() {
        let repo = InMemoryAssessmentRepository::new(60);
        let stale = stale_assessment(90);
        repo.assessments.write().await.insert(stale.id(), stale.clone());

        assert!(repo.find_by_id(&stale.id()).await.unwrap().is_none());
        assert!(repo.is_empty().await);
    }

    #[tokio::test]
    async fn save_sweeps_expired_entries() {
        let repo = InMemoryAssessmentRepository::new(60);
        for _ in 0..3 {
            let stale = stale_assessment(120);
            repo.assessments.write().await.insert(stale.id(), stale);
        }

        repo.save(&Assessment::new(AssessmentId::new())).await.unwrap();

        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn recent_assessment_survives_purge() {
        let repo = InMemoryAssessmentRepository::new(60);
        let recent = stale_assessment(10);
        repo.assessments.write().await.insert(recent.id(), recent);

        assert_eq!(repo.purge_expired().await, 0);
        assert_eq!(repo.len().await, 1);
    }
}
