//! Career matching: occupations scored against aggregated answers.

use serde::Serialize;
use std::collections::BTreeSet;

use super::ranking::{rank_top, Scored};
use crate::domain::assessment::ScoreMap;
use crate::domain::assessment::{InterestScores, TraitScores};
use crate::domain::catalog::Occupation;

/// Blend weights for the career score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CareerWeights {
    pub trait_weight: f64,
    pub interest_weight: f64,
}

impl Default for CareerWeights {
    fn default() -> Self {
        Self {
            trait_weight: 0.4,
            interest_weight: 0.6,
        }
    }
}

/// One scored occupation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CareerMatch {
    pub occupation: Occupation,
    pub trait_match: f64,
    pub interest_match: f64,
    pub score: f64,
}

impl Scored for CareerMatch {
    fn score(&self) -> f64 {
        self.score
    }
}

/// Scores every occupation and ranks them.
#[derive(Debug, Clone, Copy, Default)]
pub struct CareerMatcher {
    weights: CareerWeights,
}

impl CareerMatcher {
    pub fn new(weights: CareerWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> CareerWeights {
        self.weights
    }

    /// Ranks `occupations` for the given score maps, keeping `top_n`.
    pub fn rank(
        &self,
        occupations: &[Occupation],
        traits: &TraitScores,
        interests: &InterestScores,
        top_n: usize,
    ) -> Vec<CareerMatch> {
        let scored = occupations
            .iter()
            .map(|occupation| self.score(occupation, traits, interests))
            .collect();
        let ranked = rank_top(scored, top_n);

        tracing::debug!(
            candidates = occupations.len(),
            returned = ranked.len(),
            top = ranked.first().map(|m| m.occupation.name.as_str()),
            "Ranked careers"
        );
        ranked
    }

    /// Scores a single occupation.
    pub fn score(
        &self,
        occupation: &Occupation,
        traits: &TraitScores,
        interests: &InterestScores,
    ) -> CareerMatch {
        let trait_match = tag_match(&occupation.traits, traits);
        let interest_match = tag_match(&occupation.interests, interests);
        CareerMatch {
            occupation: occupation.clone(),
            trait_match,
            interest_match,
            score: self.weights.trait_weight * trait_match
                + self.weights.interest_weight * interest_match,
        }
    }
}

/// Sum of the found tag scores divided by the number of tags on the occupation.
fn tag_match<T: Ord + Copy>(tags: &BTreeSet<T>, scores: &ScoreMap<T>) -> f64 {
    if tags.is_empty() {
        return 0.0;
    }
    let total: f64 = tags.iter().filter_map(|tag| scores.get(tag)).sum();
    total / tags.len() as f64
}
