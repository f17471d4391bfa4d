//! Assessment aggregate: one user's pass through the questionnaire.
//!
//! An assessment moves `awaiting_personality → awaiting_interests →
//! completed`. Answers live only as long as the assessment does; expired
//! assessments are treated as missing.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::aggregator::{aggregate, InterestScores, TraitScores};
use super::answers::AnswerSet;
use super::errors::AssessmentError;
use super::questions::{Question, QuestionBank};
use super::tags::{Interest, PersonalityTrait};
use crate::domain::foundation::{AssessmentId, Timestamp};
use crate::domain::matching::Recommendations;

/// Where an assessment is in the questionnaire flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentStage {
    AwaitingPersonality,
    AwaitingInterests,
    Completed,
}

impl fmt::Display for AssessmentStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AssessmentStage::AwaitingPersonality => "awaiting_personality",
            AssessmentStage::AwaitingInterests => "awaiting_interests",
            AssessmentStage::Completed => "completed",
        };
        f.write_str(s)
    }
}

/// Scores and recommendations produced when an assessment completes.
#[derive(Debug, Clone, PartialEq)]
pub struct AssessmentOutcome {
    pub trait_scores: TraitScores,
    pub interest_scores: InterestScores,
    pub recommendations: Recommendations,
}

impl AssessmentOutcome {
    pub fn suggested_major(&self) -> Option<&str> {
        self.recommendations.suggested_major()
    }
}

/// Assessment aggregate.
///
/// # Invariants
///
/// - `interest_answers` is only set when `personality_answers` is
/// - `outcome` is set exactly when `stage` is `Completed`
/// - `version` starts at 1 and only the repository advances it, once per
///   stored update
#[derive(Debug, Clone, PartialEq)]
pub struct Assessment {
    id: AssessmentId,
    version: u32,
    stage: AssessmentStage,
    personality_answers: Option<AnswerSet>,
    interest_answers: Option<AnswerSet>,
    outcome: Option<AssessmentOutcome>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Assessment {
    /// Starts a new assessment awaiting personality answers.
    pub fn new(id: AssessmentId) -> Self {
        Self::started_at(id, Timestamp::now())
    }

    /// Starts a new assessment with an explicit creation time.
    pub fn started_at(id: AssessmentId, now: Timestamp) -> Self {
        Self {
            id,
            version: 1,
            stage: AssessmentStage::AwaitingPersonality,
            personality_answers: None,
            interest_answers: None,
            outcome: None,
            created_at: now,
            updated_at: now,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> AssessmentId {
        self.id
    }

    /// Stored version this copy was loaded at. Used for optimistic locking.
    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn stage(&self) -> AssessmentStage {
        self.stage
    }

    pub fn personality_answers(&self) -> Option<&AnswerSet> {
        self.personality_answers.as_ref()
    }

    pub fn interest_answers(&self) -> Option<&AnswerSet> {
        self.interest_answers.as_ref()
    }

    pub fn outcome(&self) -> Option<&AssessmentOutcome> {
        self.outcome.as_ref()
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Behavior
    // ─────────────────────────────────────────────────────────────────────────

    /// Records personality answers.
    ///
    /// Allowed at any stage. Resubmitting restarts the interest step and
    /// discards any previous outcome.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if an answer to a known question is outside 1-5
    pub fn record_personality(
        &mut self,
        answers: AnswerSet,
        questions: &[Question<PersonalityTrait>],
    ) -> Result<(), AssessmentError> {
        answers.validate_against(questions)?;

        self.personality_answers = Some(answers);
        self.interest_answers = None;
        self.outcome = None;
        self.stage = AssessmentStage::AwaitingInterests;
        self.touch();
        Ok(())
    }

    /// Records interest answers. Any previous outcome is discarded until
    /// [`Assessment::complete`] runs again.
    ///
    /// # Errors
    ///
    /// - `InvalidState` if personality answers have not been recorded
    /// - `ValidationFailed` if an answer to a known question is outside 1-5
    pub fn record_interests(
        &mut self,
        answers: AnswerSet,
        questions: &[Question<Interest>],
    ) -> Result<(), AssessmentError> {
        if self.personality_answers.is_none() {
            return Err(AssessmentError::invalid_state(
                self.stage.to_string(),
                "submit interests",
            ));
        }
        answers.validate_against(questions)?;

        self.interest_answers = Some(answers);
        self.outcome = None;
        self.stage = AssessmentStage::AwaitingInterests;
        self.touch();
        Ok(())
    }

    /// Aggregates both answer sets into score maps.
    ///
    /// # Errors
    ///
    /// - `InvalidState` unless both answer sets are recorded
    pub fn scores(
        &self,
        bank: &QuestionBank,
    ) -> Result<(TraitScores, InterestScores), AssessmentError> {
        match (&self.personality_answers, &self.interest_answers) {
            (Some(personality), Some(interests)) => Ok((
                aggregate(bank.personality(), personality),
                aggregate(bank.interests(), interests),
            )),
            _ => Err(AssessmentError::invalid_state(
                self.stage.to_string(),
                "score answers",
            )),
        }
    }

    /// Stores the outcome and marks the assessment completed.
    ///
    /// # Errors
    ///
    /// - `InvalidState` unless interest answers are recorded
    pub fn complete(&mut self, outcome: AssessmentOutcome) -> Result<(), AssessmentError> {
        if self.interest_answers.is_none() {
            return Err(AssessmentError::invalid_state(
                self.stage.to_string(),
                "complete",
            ));
        }
        self.outcome = Some(outcome);
        self.stage = AssessmentStage::Completed;
        self.touch();
        Ok(())
    }

    /// Returns the outcome of a completed assessment.
    ///
    /// # Errors
    ///
    /// - `InvalidState` if the assessment is not completed
    pub fn results(&self) -> Result<&AssessmentOutcome, AssessmentError> {
        self.outcome
            .as_ref()
            .ok_or_else(|| AssessmentError::invalid_state(self.stage.to_string(), "view results"))
    }

    /// True when no activity happened within the last `ttl_minutes`.
    pub fn is_expired(&self, ttl_minutes: i64, now: &Timestamp) -> bool {
        now.is_after(&self.updated_at.plus_minutes(ttl_minutes))
    }

    /// Moves to the next stored version.
    pub(crate) fn advance_version(&mut self) {
        self.version = self.version.saturating_add(1);
    }

    fn touch(&mut self) {
        let now = Timestamp::now();
        if now.is_after(&self.updated_at) {
            self.updated_at = now;
        }
    }
}
