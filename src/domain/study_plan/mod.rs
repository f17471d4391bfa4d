//! Study plan generation: match a major to a reference subject, then fill
//! the four-year template with that subject's resources.

mod errors;
mod plan;
mod similarity;
mod subject_matcher;

pub use errors::StudyPlanError;
pub use plan::{StudyPlan, StudyResources, StudyTimeline, YearPlan};
pub use similarity::cosine_similarity;
pub use subject_matcher::{SubjectMatch, SubjectMatcher};
