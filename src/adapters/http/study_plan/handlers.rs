//! HTTP handlers for study plan generation.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::adapters::http::error::ErrorResponse;
use crate::adapters::http::extract::JsonOrForm;
use crate::application::handlers::study_plan::{GenerateStudyPlanCommand, GenerateStudyPlanHandler};
use crate::domain::study_plan::{StudyPlanError, SubjectMatcher};

use super::dto::GenerateStudyPlanRequest;

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct StudyPlanAppState {
    pub matcher: Arc<SubjectMatcher>,
}

impl StudyPlanAppState {
    pub fn generate_handler(&self) -> GenerateStudyPlanHandler {
        GenerateStudyPlanHandler::new(self.matcher.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Command Handlers (POST endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/generate-study-plan - Study plan for a free-text major
///
/// An unreadable or absent body is treated like a missing major.
pub async fn generate_study_plan(
    State(state): State<StudyPlanAppState>,
    payload: Option<JsonOrForm<GenerateStudyPlanRequest>>,
) -> Result<impl IntoResponse, StudyPlanApiError> {
    let major = payload
        .and_then(|JsonOrForm(request)| request.major)
        .unwrap_or_default();

    let result = state
        .generate_handler()
        .handle(GenerateStudyPlanCommand { major })
        .await?;

    Ok(Json(result.plan))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts study plan errors to HTTP responses.
#[derive(Debug)]
pub struct StudyPlanApiError(StudyPlanError);

impl From<StudyPlanError> for StudyPlanApiError {
    fn from(err: StudyPlanError) -> Self {
        Self(err)
    }
}

impl IntoResponse for StudyPlanApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_code) = match &self.0 {
            StudyPlanError::MajorRequired => {
                let body = ErrorResponse::message_only(self.0.to_string());
                return (StatusCode::BAD_REQUEST, Json(body)).into_response();
            }
            StudyPlanError::NoSubjects => (StatusCode::INTERNAL_SERVER_ERROR, "NO_SUBJECTS"),
            StudyPlanError::Embedding(inner) if inner.is_unavailable() => {
                (StatusCode::SERVICE_UNAVAILABLE, "EMBEDDING_UNAVAILABLE")
            }
            StudyPlanError::Embedding(_) => (StatusCode::BAD_GATEWAY, "EMBEDDING_FAILED"),
        };

        let body = ErrorResponse::new(error_code, self.0.to_string());
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::EmbeddingError;

    fn status_of(err: StudyPlanError) -> StatusCode {
        StudyPlanApiError::from(err).into_response().status()
    }

    #[test]
    fn maps_embedding_errors_by_retryability() {
        assert_eq!(
            status_of(EmbeddingError::timeout(30).into()),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            status_of(EmbeddingError::rate_limited(30).into()),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            status_of(EmbeddingError::AuthenticationFailed.into()),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            status_of(EmbeddingError::parse("bad json").into()),
            StatusCode::BAD_GATEWAY
        );
    }

    #[test]
    fn major_required_is_bad_request() {
        assert_eq!(status_of(StudyPlanError::MajorRequired), StatusCode::BAD_REQUEST);
        assert_eq!(status_of(StudyPlanError::NoSubjects), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
