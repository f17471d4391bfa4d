//! Axum router configuration for the study plan endpoint.

use axum::{routing::post, Router};

use super::handlers::{generate_study_plan, StudyPlanAppState};

/// Create the study plan router.
///
/// # Routes
/// - `POST /api/generate-study-plan` - Study plan for `{major}` (JSON or form)
pub fn study_plan_router() -> Router<StudyPlanAppState> {
    Router::new().route("/api/generate-study-plan", post(generate_study_plan))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::embedding::{HashEmbeddingProvider, MockEmbeddingProvider, MockError};
    use crate::domain::catalog::ReferenceCatalog;
    use crate::domain::study_plan::SubjectMatcher;
    use crate::ports::EmbeddingProvider;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app_with(provider: Arc<dyn EmbeddingProvider>) -> Router {
        let matcher = SubjectMatcher::new(Arc::new(ReferenceCatalog::builtin()), provider);
        study_plan_router().with_state(StudyPlanAppState {
            matcher: Arc::new(matcher),
        })
    }

    fn app() -> Router {
        app_with(Arc::new(HashEmbeddingProvider::default()))
    }

    async fn post(app: Router, content_type: &str, body: impl Into<Body>) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri("/api/generate-study-plan")
            .header(header::CONTENT_TYPE, content_type)
            .body(body.into())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn generates_plan_for_known_major() {
        let (status, body) = post(
            app(),
            "application/json",
            json!({"major": "Computer Science"}).to_string(),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["major"], "Computer Science");
        assert_eq!(body["matched_subject"], "Computer Science");
        assert_eq!(
            body["resources"]["books"],
            json!(["Introduction to Algorithms by Cormen et al."])
        );
        assert_eq!(
            body["study_timeline"]["year_1"]["focus"],
            "Fundamentals"
        );
    }

    #[tokio::test]
    async fn accepts_form_body() {
        let (status, body) = post(app(), "application/x-www-form-urlencoded", "major=Accounting").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["matched_subject"], "Accounting");
    }

    #[tokio::test]
    async fn missing_major_is_bad_request() {
        for body in [json!({}).to_string(), json!({"major": "   "}).to_string(), String::new()] {
            let (status, response) = post(app(), "application/json", body).await;

            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(response, json!({"error": "Major is required"}));
        }
    }

    #[tokio::test]
    async fn unreadable_body_reads_as_missing_major() {
        for (content_type, body) in [("text/plain", "Law"), ("application/json", "{")] {
            let (status, response) = post(app(), content_type, body).await;

            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(response, json!({"error": "Major is required"}));
        }
    }

    #[tokio::test]
    async fn unavailable_provider_is_service_unavailable() {
        let provider = MockEmbeddingProvider::failing(MockError::Unavailable {
            message: "model offline".to_string(),
        });
        let (status, body) = post(
            app_with(Arc::new(provider)),
            "application/json",
            json!({"major": "Law"}).to_string(),
        )
        .await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["code"], "EMBEDDING_UNAVAILABLE");
    }
}
