//! Weighted-average matching of answers against the reference catalog.
//!
//! - `career` - occupations scored from trait and interest averages
//! - `university` - universities scored from the careers' fields of study
//! - `engine` - runs both in sequence with a [`MatchingPolicy`]

mod career;
mod engine;
mod ranking;
mod university;

pub use career::{CareerMatch, CareerMatcher, CareerWeights};
pub use engine::{MatchingPolicy, RecommendationEngine, Recommendations};
pub use ranking::{rank_top, Scored};
pub use university::{UniversityMatch, UniversityMatcher, UniversityWeights};
