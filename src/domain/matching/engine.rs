//! Recommendation engine: careers first, then universities for those careers.

use std::sync::Arc;

use super::career::{CareerMatch, CareerMatcher, CareerWeights};
use super::university::{UniversityMatch, UniversityMatcher, UniversityWeights};
use crate::domain::assessment::{InterestScores, TraitScores};
use crate::domain::catalog::ReferenceCatalog;

/// Tunables for the recommendation engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchingPolicy {
    pub career: CareerWeights,
    pub university: UniversityWeights,
    pub career_top_n: usize,
    pub university_top_n: usize,
}

impl Default for MatchingPolicy {
    fn default() -> Self {
        Self {
            career: CareerWeights::default(),
            university: UniversityWeights::default(),
            career_top_n: 3,
            university_top_n: 3,
        }
    }
}

/// Ranked careers and the universities recommended for them.
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendations {
    pub careers: Vec<CareerMatch>,
    pub universities: Vec<UniversityMatch>,
}

impl Recommendations {
    /// Name of the top-ranked occupation, used to pre-fill the study plan major.
    pub fn suggested_major(&self) -> Option<&str> {
        self.careers.first().map(|c| c.occupation.name.as_str())
    }
}

/// Runs both matchers over a shared catalog.
#[derive(Debug, Clone)]
pub struct RecommendationEngine {
    catalog: Arc<ReferenceCatalog>,
    careers: CareerMatcher,
    universities: UniversityMatcher,
    career_top_n: usize,
    university_top_n: usize,
}

impl RecommendationEngine {
    pub fn new(catalog: Arc<ReferenceCatalog>, policy: MatchingPolicy) -> Self {
        Self {
            catalog,
            careers: CareerMatcher::new(policy.career),
            universities: UniversityMatcher::new(policy.university),
            career_top_n: policy.career_top_n,
            university_top_n: policy.university_top_n,
        }
    }

    pub fn catalog(&self) -> &ReferenceCatalog {
        &self.catalog
    }

    pub fn recommend(&self, traits: &TraitScores, interests: &InterestScores) -> Recommendations {
        let careers = self.careers.rank(
            self.catalog.occupations(),
            traits,
            interests,
            self.career_top_n,
        );
        let universities =
            self.universities
                .rank(self.catalog.universities(), &careers, self.university_top_n);

        Recommendations {
            careers,
            universities,
        }
    }
}
