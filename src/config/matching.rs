//! Recommendation weights and result sizes

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::matching::{CareerWeights, MatchingPolicy, UniversityWeights};

/// Matching configuration
///
/// Defaults reproduce [`MatchingPolicy::default`].
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MatchingConfig {
    pub career_top_n: usize,
    pub university_top_n: usize,
    pub trait_weight: f64,
    pub interest_weight: f64,
    pub program_weight: f64,
    pub cost_weight: f64,
    pub acceptance_weight: f64,
    pub graduation_weight: f64,
    /// Annual cost (USD) at which the cost score reaches zero
    pub cost_ceiling: f64,
}

impl MatchingConfig {
    /// Build the domain policy from this configuration.
    pub fn to_policy(&self) -> MatchingPolicy {
        MatchingPolicy {
            career: CareerWeights {
                trait_weight: self.trait_weight,
                interest_weight: self.interest_weight,
            },
            university: UniversityWeights {
                program_weight: self.program_weight,
                cost_weight: self.cost_weight,
                acceptance_weight: self.acceptance_weight,
                graduation_weight: self.graduation_weight,
                cost_ceiling: self.cost_ceiling,
            },
            career_top_n: self.career_top_n,
            university_top_n: self.university_top_n,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.career_top_n == 0 {
            return Err(ValidationError::InvalidTopN("career_top_n"));
        }
        if self.university_top_n == 0 {
            return Err(ValidationError::InvalidTopN("university_top_n"));
        }

        let weights = [
            ("trait_weight", self.trait_weight),
            ("interest_weight", self.interest_weight),
            ("program_weight", self.program_weight),
            ("cost_weight", self.cost_weight),
            ("acceptance_weight", self.acceptance_weight),
            ("graduation_weight", self.graduation_weight),
        ];
        if let Some((name, _)) = weights.iter().find(|(_, w)| !w.is_finite() || *w < 0.0) {
            return Err(ValidationError::InvalidWeight(*name));
        }

        if !self.cost_ceiling.is_finite() || self.cost_ceiling <= 0.0 {
            return Err(ValidationError::InvalidCostCeiling);
        }
        Ok(())
    }
}

impl Default for MatchingConfig {
    fn default() -> Self {
        let policy = MatchingPolicy::default();
        Self {
            career_top_n: policy.career_top_n,
            university_top_n: policy.university_top_n,
            trait_weight: policy.career.trait_weight,
            interest_weight: policy.career.interest_weight,
            program_weight: policy.university.program_weight,
            cost_weight: policy.university.cost_weight,
            acceptance_weight: policy.university.acceptance_weight,
            graduation_weight: policy.university.graduation_weight,
            cost_ceiling: policy.university.cost_ceiling,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_domain_policy() {
        assert_eq!(MatchingConfig::default().to_policy(), MatchingPolicy::default());
    }

    #[test]
    fn test_rejects_zero_top_n() {
        let config = MatchingConfig {
            career_top_n: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidTopN("career_top_n")));
    }

    #[test]
    fn test_rejects_negative_or_nan_weights() {
        let config = MatchingConfig {
            cost_weight: -0.1,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidWeight("cost_weight")));

        let config = MatchingConfig {
            trait_weight: f64::NAN,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidWeight("trait_weight")));
    }

    #[test]
    fn test_rejects_non_positive_cost_ceiling() {
        let config = MatchingConfig {
            cost_ceiling: 0.0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidCostCeiling));
    }
}
