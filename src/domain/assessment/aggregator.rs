//! Trait/Interest Aggregator - reduces raw answers to per-tag averages.

use serde::Serialize;
use std::collections::BTreeMap;

use super::answers::AnswerSet;
use super::questions::Question;
use super::tags::{Interest, PersonalityTrait};
use crate::domain::foundation::AnswerScore;

/// Averaged score per tag, each in [1, 5].
///
/// Tags with no answered question are absent rather than zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ScoreMap<T: Ord>(BTreeMap<T, f64>);

/// Averaged personality trait scores.
pub type TraitScores = ScoreMap<PersonalityTrait>;

/// Averaged interest scores.
pub type InterestScores = ScoreMap<Interest>;

impl<T: Ord + Copy> ScoreMap<T> {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    pub fn get(&self, tag: &T) -> Option<f64> {
        self.0.get(tag).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (T, f64)> + '_ {
        self.0.iter().map(|(tag, score)| (*tag, *score))
    }
}

impl<T: Ord + Copy> Default for ScoreMap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord + Copy> FromIterator<(T, f64)> for ScoreMap<T> {
    fn from_iter<I: IntoIterator<Item = (T, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Groups answers by the question's tag and averages each group.
///
/// Out-of-range answers are dropped, not raised: callers validate input
/// before it gets here, so anything left is ignored.
pub fn aggregate<T: Ord + Copy>(questions: &[Question<T>], answers: &AnswerSet) -> ScoreMap<T> {
    let mut sums: BTreeMap<T, (f64, u32)> = BTreeMap::new();

    for question in questions {
        let Some(raw) = answers.get(&question.id) else {
            continue;
        };
        match AnswerScore::try_new(&question.id, raw) {
            Ok(score) => {
                let entry = sums.entry(question.tag).or_insert((0.0, 0));
                entry.0 += score.as_f64();
                entry.1 += 1;
            }
            Err(e) => {
                tracing::debug!(question_id = %question.id, error = %e, "dropping invalid answer");
            }
        }
    }

    sums.into_iter()
        .map(|(tag, (sum, count))| (tag, sum / f64::from(count)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::QuestionBank;
    use proptest::prelude::*;

    #[test]
    fn averages_answers_sharing_a_tag() {
        let questions = vec![
            Question::new("a1", "?", PersonalityTrait::Analytical),
            Question::new("a2", "?", PersonalityTrait::Analytical),
            Question::new("p1", "?", PersonalityTrait::Patient),
        ];
        let answers = AnswerSet::new().with("a1", 2).with("a2", 5).with("p1", 3);

        let scores = aggregate(&questions, &answers);

        assert_eq!(scores.get(&PersonalityTrait::Analytical), Some(3.5));
        assert_eq!(scores.get(&PersonalityTrait::Patient), Some(3.0));
    }

    #[test]
    fn unanswered_tags_are_absent() {
        let bank = QuestionBank::standard();
        let answers = AnswerSet::new().with("curious", 4);

        let scores = aggregate(bank.personality(), &answers);

        assert_eq!(scores.len(), 1);
        assert_eq!(scores.get(&PersonalityTrait::Creative), None);
    }

    #[test]
    fn empty_answers_yield_empty_map() {
        let bank = QuestionBank::standard();
        let scores = aggregate(bank.interests(), &AnswerSet::new());
        assert!(scores.is_empty());
    }

    #[test]
    fn out_of_range_answers_are_dropped() {
        let bank = QuestionBank::standard();
        let answers = AnswerSet::new().with("analytical", 9).with("patient", 0).with("curious", 5);

        let scores = aggregate(bank.personality(), &answers);

        assert_eq!(scores.len(), 1);
        assert_eq!(scores.get(&PersonalityTrait::Curious), Some(5.0));
    }

    #[test]
    fn unknown_question_ids_are_ignored() {
        let bank = QuestionBank::standard();
        let answers = AnswerSet::new().with("astrology", 5);
        assert!(aggregate(bank.personality(), &answers).is_empty());
    }

    #[test]
    fn serializes_with_tag_names_as_keys() {
        let bank = QuestionBank::standard();
        let answers = AnswerSet::new().with("helping_others", 4);
        let json = serde_json::to_value(aggregate(bank.interests(), &answers)).unwrap();
        assert_eq!(json["helping others"], 4.0);
    }

    proptest! {
        #[test]
        fn scores_stay_within_answer_scale(values in proptest::collection::vec(-10i64..=15, 10)) {
            let bank = QuestionBank::standard();
            let answers: AnswerSet = bank
                .personality()
                .iter()
                .zip(values)
                .map(|(q, v)| (q.id.clone(), v))
                .collect();

            let scores = aggregate(bank.personality(), &answers);

            for (_, score) in scores.iter() {
                prop_assert!((1.0..=5.0).contains(&score));
            }
        }

        #[test]
        fn repeated_tags_average_within_bounds(values in proptest::collection::vec(1i64..=5, 1..8)) {
            let questions: Vec<_> = (0..values.len())
                .map(|i| Question::new(format!("q{i}"), "?", Interest::Research))
                .collect();
            let answers: AnswerSet = values
                .iter()
                .enumerate()
                .map(|(i, v)| (format!("q{i}"), *v))
                .collect();

            let score = aggregate(&questions, &answers).get(&Interest::Research).unwrap();
            let expected = values.iter().sum::<i64>() as f64 / values.len() as f64;

            prop_assert!((score - expected).abs() < 1e-9);
        }
    }
}
