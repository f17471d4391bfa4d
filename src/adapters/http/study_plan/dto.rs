//! Data Transfer Objects for the study plan endpoint.

use serde::Deserialize;

/// Request body for `POST /api/generate-study-plan`.
///
/// `major` is optional at the wire level so a missing field produces the
/// same "Major is required" response as an empty one.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateStudyPlanRequest {
    #[serde(default)]
    pub major: Option<String>,
}
