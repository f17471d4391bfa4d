//! HTTP handlers for assessment endpoints.
//!
//! These handlers connect Axum routes to the assessment command/query handlers.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::adapters::http::error::ErrorResponse;
use crate::adapters::http::extract::JsonOrForm;
use crate::application::handlers::assessment::{
    DiscardAssessmentCommand, DiscardAssessmentHandler, GetAssessmentHandler, GetAssessmentQuery,
    StartAssessmentCommand, StartAssessmentHandler, SubmitAnswersCommand, SubmitAnswersHandler,
};
use crate::domain::assessment::{AnswerSet, AssessmentError, QuestionBank, QuestionnaireSection};
use crate::domain::foundation::AssessmentId;
use crate::domain::matching::RecommendationEngine;
use crate::ports::AssessmentRepository;

use super::dto::{AssessmentResponse, QuestionnaireResponse, ResultsResponse, StartAssessmentResponse};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared state for assessment routes.
#[derive(Clone)]
pub struct AssessmentAppState {
    pub repository: Arc<dyn AssessmentRepository>,
    pub questions: Arc<QuestionBank>,
    pub engine: Arc<RecommendationEngine>,
}

impl AssessmentAppState {
    pub fn start_handler(&self) -> StartAssessmentHandler {
        StartAssessmentHandler::new(self.repository.clone())
    }

    pub fn get_handler(&self) -> GetAssessmentHandler {
        GetAssessmentHandler::new(self.repository.clone())
    }

    pub fn discard_handler(&self) -> DiscardAssessmentHandler {
        DiscardAssessmentHandler::new(self.repository.clone())
    }

    pub fn submit_handler(&self) -> SubmitAnswersHandler {
        SubmitAnswersHandler::new(
            self.repository.clone(),
            self.questions.clone(),
            self.engine.clone(),
        )
    }
}

fn parse_id(raw: &str) -> Result<AssessmentId, AssessmentError> {
    raw.parse()
        .map_err(|_| AssessmentError::validation("assessment_id", format!("Invalid assessment id: {raw}")))
}

// ════════════════════════════════════════════════════════════════════════════════
// Query Handlers (GET endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/questions - Both questionnaire sections
pub async fn get_questions(State(state): State<AssessmentAppState>) -> impl IntoResponse {
    Json(QuestionnaireResponse::from(state.questions.as_ref()))
}

/// GET /api/assessments/:id - Assessment progress
pub async fn get_assessment(
    State(state): State<AssessmentAppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AssessmentApiError> {
    let assessment_id = parse_id(&id)?;
    let assessment = state
        .get_handler()
        .handle(GetAssessmentQuery { assessment_id })
        .await?;

    Ok(Json(AssessmentResponse::from(&assessment)))
}

/// GET /api/assessments/:id/results - Scores and recommendations
pub async fn get_results(
    State(state): State<AssessmentAppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AssessmentApiError> {
    let assessment_id = parse_id(&id)?;
    let assessment = state
        .get_handler()
        .handle(GetAssessmentQuery { assessment_id })
        .await?;
    let outcome = assessment.results()?;

    Ok(Json(ResultsResponse::new(assessment_id, outcome)))
}

// ════════════════════════════════════════════════════════════════════════════════
// Command Handlers (POST/DELETE endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/assessments - Start a new assessment
pub async fn start_assessment(
    State(state): State<AssessmentAppState>,
) -> Result<impl IntoResponse, AssessmentApiError> {
    let assessment = state.start_handler().handle(StartAssessmentCommand).await?;

    Ok((
        StatusCode::CREATED,
        Json(StartAssessmentResponse::from(&assessment)),
    ))
}

/// POST /api/assessments/:id/personality - Submit personality answers
pub async fn submit_personality(
    State(state): State<AssessmentAppState>,
    Path(id): Path<String>,
    JsonOrForm(answers): JsonOrForm<AnswerSet>,
) -> Result<impl IntoResponse, AssessmentApiError> {
    let cmd = SubmitAnswersCommand {
        assessment_id: parse_id(&id)?,
        section: QuestionnaireSection::Personality,
        answers,
    };
    let assessment = state.submit_handler().handle(cmd).await?;

    Ok(Json(AssessmentResponse::from(&assessment)))
}

/// POST /api/assessments/:id/interests - Submit interest answers and get results
pub async fn submit_interests(
    State(state): State<AssessmentAppState>,
    Path(id): Path<String>,
    JsonOrForm(answers): JsonOrForm<AnswerSet>,
) -> Result<impl IntoResponse, AssessmentApiError> {
    let assessment_id = parse_id(&id)?;
    let cmd = SubmitAnswersCommand {
        assessment_id,
        section: QuestionnaireSection::Interests,
        answers,
    };
    let assessment = state.submit_handler().handle(cmd).await?;
    let outcome = assessment.results()?;

    Ok(Json(ResultsResponse::new(assessment_id, outcome)))
}

/// DELETE /api/assessments/:id - Discard an assessment
pub async fn discard_assessment(
    State(state): State<AssessmentAppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AssessmentApiError> {
    let cmd = DiscardAssessmentCommand {
        assessment_id: parse_id(&id)?,
    };
    state.discard_handler().handle(cmd).await?;

    Ok(StatusCode::NO_CONTENT)
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts assessment errors to HTTP responses.
#[derive(Debug)]
pub struct AssessmentApiError(AssessmentError);

impl From<AssessmentError> for AssessmentApiError {
    fn from(err: AssessmentError) -> Self {
        Self(err)
    }
}

impl IntoResponse for AssessmentApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_code) = match &self.0 {
            AssessmentError::NotFound(_) => (StatusCode::NOT_FOUND, "ASSESSMENT_NOT_FOUND"),
            AssessmentError::InvalidState { .. } => {
                (StatusCode::CONFLICT, "INVALID_STATE_TRANSITION")
            }
            AssessmentError::Conflict(_) => (StatusCode::CONFLICT, "CONCURRENCY_CONFLICT"),
            AssessmentError::ValidationFailed { .. } => {
                (StatusCode::BAD_REQUEST, "VALIDATION_FAILED")
            }
            AssessmentError::Infrastructure(_) => {
                tracing::error!(error = %self.0, "Assessment storage failure");
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
            }
        };

        let body = ErrorResponse::new(error_code, self.0.message());
        (status, Json(body)).into_response()
    }
}
