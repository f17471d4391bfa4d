//! HTTP adapter for study plan generation.
//!
//! - `POST /api/generate-study-plan` - Four-year plan for a free-text major

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::GenerateStudyPlanRequest;
pub use handlers::{StudyPlanApiError, StudyPlanAppState};
pub use routes::study_plan_router;
