//! HTTP adapters - REST API implementations.
//!
//! Each domain module has its own HTTP adapter; `router` merges them and
//! applies tracing, request ids, timeouts, compression and CORS.

pub mod assessment;
pub mod error;
pub mod extract;
pub mod health;
pub mod router;
pub mod study_plan;

pub use assessment::{assessment_router, AssessmentAppState};
pub use error::ErrorResponse;
pub use extract::{BodyRejection, JsonOrForm};
pub use router::{api_router, ApiState, HttpSettings};
pub use study_plan::{study_plan_router, StudyPlanAppState};
