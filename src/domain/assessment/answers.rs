//! Raw questionnaire answers as submitted by a user.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::questions::Question;
use crate::domain::foundation::{AnswerScore, ValidationError};

/// Mapping from question id to the raw integer answer.
///
/// Values are kept as submitted; range checks happen in
/// [`AnswerSet::validate_against`]. The aggregator also skips out-of-range
/// values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet(BTreeMap<String, i64>);

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an answer, replacing any previous answer to the same question.
    pub fn insert(&mut self, question_id: impl Into<String>, value: i64) {
        self.0.insert(question_id.into(), value);
    }

    /// Builder-style variant of [`AnswerSet::insert`].
    pub fn with(mut self, question_id: impl Into<String>, value: i64) -> Self {
        self.insert(question_id, value);
        self
    }

    pub fn get(&self, question_id: &str) -> Option<i64> {
        self.0.get(question_id).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Checks every answer to a known question lies in the 1-5 range.
    ///
    /// Answers to ids that are not in `questions` are ignored here; they
    /// never reach a score map.
    pub fn validate_against<T>(&self, questions: &[Question<T>]) -> Result<(), ValidationError> {
        for question in questions {
            if let Some(value) = self.get(&question.id) {
                AnswerScore::try_new(&question.id, value)?;
            }
        }
        Ok(())
    }

    /// Answer ids that match no question in `questions`.
    pub fn unknown_ids<T>(&self, questions: &[Question<T>]) -> Vec<String> {
        self.0
            .keys()
            .filter(|id| !questions.iter().any(|q| &q.id == *id))
            .cloned()
            .collect()
    }
}

impl FromIterator<(String, i64)> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = (String, i64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl From<BTreeMap<String, i64>> for AnswerSet {
    fn from(map: BTreeMap<String, i64>) -> Self {
        Self(map)
    }
}
