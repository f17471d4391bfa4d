//! HTTP adapter for the questionnaire and its recommendations.
//!
//! - `GET /api/questions` - Questionnaire
//! - `POST /api/assessments` - Start an assessment
//! - `GET|DELETE /api/assessments/:id` - View or discard
//! - `POST /api/assessments/:id/{personality,interests}` - Submit answers
//! - `GET /api/assessments/:id/results` - Recommendations

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;
pub use handlers::{AssessmentApiError, AssessmentAppState};
pub use routes::assessment_router;
