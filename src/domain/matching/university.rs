//! University matching: institutions scored against recommended fields.

use serde::Serialize;
use std::collections::BTreeSet;

use super::career::CareerMatch;
use super::ranking::{rank_top, Scored};
use crate::domain::catalog::{FieldOfStudy, University};

/// Blend weights and cost normalisation for the university score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniversityWeights {
    pub program_weight: f64,
    pub cost_weight: f64,
    pub acceptance_weight: f64,
    pub graduation_weight: f64,
    /// Cost at which the cost score reaches zero.
    pub cost_ceiling: f64,
}

impl Default for UniversityWeights {
    fn default() -> Self {
        Self {
            program_weight: 0.5,
            cost_weight: 0.2,
            acceptance_weight: 0.1,
            graduation_weight: 0.2,
            cost_ceiling: 60_000.0,
        }
    }
}

/// One scored university.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UniversityMatch {
    pub university: University,
    pub program_match: f64,
    /// Not clamped: costs above the ceiling go negative.
    pub cost_score: f64,
    pub score: f64,
}

impl Scored for UniversityMatch {
    fn score(&self) -> f64 {
        self.score
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct UniversityMatcher {
    weights: UniversityWeights,
}

impl UniversityMatcher {
    pub fn new(weights: UniversityWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> UniversityWeights {
        self.weights
    }

    /// Fields implied by the careers' education requirements.
    pub fn recommended_fields(careers: &[CareerMatch]) -> BTreeSet<FieldOfStudy> {
        careers
            .iter()
            .filter_map(|career| career.occupation.field_of_study())
            .collect()
    }

    /// Ranks `universities` for the given career recommendations.
    pub fn rank(
        &self,
        universities: &[University],
        careers: &[CareerMatch],
        top_n: usize,
    ) -> Vec<UniversityMatch> {
        let fields = Self::recommended_fields(careers);
        let scored = universities
            .iter()
            .map(|university| self.score(university, &fields))
            .collect();
        let ranked = rank_top(scored, top_n);

        tracing::debug!(
            fields = ?fields,
            candidates = universities.len(),
            returned = ranked.len(),
            "Ranked universities"
        );
        ranked
    }

    /// Scores a single university against a set of fields.
    pub fn score(&self, university: &University, fields: &BTreeSet<FieldOfStudy>) -> UniversityMatch {
        let program_match = if fields.is_empty() {
            0.0
        } else {
            let offered = fields.iter().filter(|field| university.offers(**field)).count();
            offered as f64 / fields.len() as f64
        };
        let cost_score = 1.0 - f64::from(university.cost) / self.weights.cost_ceiling;

        let w = &self.weights;
        let score = w.program_weight * program_match
            + w.cost_weight * cost_score
            + w.acceptance_weight * university.acceptance_rate
            + w.graduation_weight * university.graduation_rate;

        UniversityMatch {
            university: university.clone(),
            program_match,
            cost_score,
            score,
        }
    }
}
