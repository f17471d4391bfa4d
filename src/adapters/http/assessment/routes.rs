//! Axum router configuration for assessment endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    discard_assessment, get_assessment, get_questions, get_results, start_assessment,
    submit_interests, submit_personality, AssessmentAppState,
};

/// Create the assessment API router, mounted under `/api`.
///
/// # Routes
/// - `GET /api/questions` - Both questionnaire sections
/// - `POST /api/assessments` - Start an assessment
/// - `GET /api/assessments/:id` - Assessment progress
/// - `DELETE /api/assessments/:id` - Discard an assessment
/// - `POST /api/assessments/:id/personality` - Submit personality answers
/// - `POST /api/assessments/:id/interests` - Submit interest answers, returns results
/// - `GET /api/assessments/:id/results` - Results of a completed assessment
pub fn assessment_router() -> Router<AssessmentAppState> {
    Router::new()
        .route("/api/questions", get(get_questions))
        .route("/api/assessments", post(start_assessment))
        .route(
            "/api/assessments/:id",
            get(get_assessment).delete(discard_assessment),
        )
        .route("/api/assessments/:id/personality", post(submit_personality))
        .route("/api/assessments/:id/interests", post(submit_interests))
        .route("/api/assessments/:id/results", get(get_results))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryAssessmentRepository;
    use crate::domain::assessment::QuestionBank;
    use crate::domain::catalog::ReferenceCatalog;
    use crate::domain::matching::{MatchingPolicy, RecommendationEngine};
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app() -> Router {
        let state = AssessmentAppState {
            repository: Arc::new(InMemoryAssessmentRepository::new(60)),
            questions: Arc::new(QuestionBank::standard()),
            engine: Arc::new(RecommendationEngine::new(
                Arc::new(ReferenceCatalog::builtin()),
                MatchingPolicy::default(),
            )),
        };
        assessment_router().with_state(state)
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn start(app: &Router) -> String {
        let (status, body) = send(
            app,
            Request::builder()
                .method("POST")
                .uri("/api/assessments")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["stage"], "awaiting_personality");
        body["assessment_id"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn lists_questions() {
        let app = app();
        let (status, body) = send(&app, get("/api/questions")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["personality"].as_array().unwrap().len(), 10);
        assert_eq!(body["interests"][0]["id"], "programming");
    }

    #[tokio::test]
    async fn completes_flow_and_returns_results() {
        let app = app();
        let id = start(&app).await;

        let (status, body) = send(
            &app,
            post_json(
                &format!("/api/assessments/{id}/personality"),
                json!({"analytical": 5, "technical": 5, "curious": 5}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["stage"], "awaiting_interests");

        let (status, body) = send(
            &app,
            post_json(
                &format!("/api/assessments/{id}/interests"),
                json!({"programming": 5, "technology": 5}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["assessment_id"], id.as_str());
        assert_eq!(body["trait_scores"]["analytical"], 5.0);
        let careers: Vec<&str> = body["career_recommendations"]
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["occupation"].as_str().unwrap())
            .collect();
        assert!(careers.contains(&"Software Developer"));

        let (status, again) = send(&app, get(&format!("/api/assessments/{id}/results"))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(again, body);
    }

    #[tokio::test]
    async fn accepts_form_encoded_answers() {
        let app = app();
        let id = start(&app).await;

        let request = Request::builder()
            .method("POST")
            .uri(format!("/api/assessments/{id}/personality"))
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from("analytical=4&creative=2"))
            .unwrap();
        let (status, body) = send(&app, request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["personality_answered"], true);
    }

    #[tokio::test]
    async fn rejects_out_of_range_answers() {
        let app = app();
        let id = start(&app).await;

        let (status, body) = send(
            &app,
            post_json(&format!("/api/assessments/{id}/personality"), json!({"analytical": 9})),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "VALIDATION_FAILED");
    }

    async fn submit_raw(app: &Router, id: &str, content_type: &str, body: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(format!("/api/assessments/{id}/personality"))
            .header(header::CONTENT_TYPE, content_type)
            .body(Body::from(body.to_string()))
            .unwrap();
        send(app, request).await
    }

    #[tokio::test]
    async fn unreadable_bodies_are_validation_errors() {
        let app = app();
        let id = start(&app).await;

        let cases = [
            ("application/x-www-form-urlencoded", "analytical=lots&creative=4"),
            ("application/json", r#"{"analytical": 4.5}"#),
            ("application/json", "{"),
            ("text/plain", "analytical=4"),
        ];

        for (content_type, raw) in cases {
            let (status, body) = submit_raw(&app, &id, content_type, raw).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{content_type}: {raw}");
            assert_eq!(body["code"], "VALIDATION_FAILED", "{content_type}: {raw}");
            assert!(body["error"].is_string());
        }

        let (status, body) = send(&app, get(&format!("/api/assessments/{id}"))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["stage"], "awaiting_personality");
    }

    #[tokio::test]
    async fn interests_before_personality_conflict() {
        let app = app();
        let id = start(&app).await;

        let (status, body) = send(
            &app,
            post_json(&format!("/api/assessments/{id}/interests"), json!({"programming": 5})),
        )
        .await;

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["code"], "INVALID_STATE_TRANSITION");
    }

    #[tokio::test]
    async fn results_before_completion_conflict() {
        let app = app();
        let id = start(&app).await;

        let (status, _) = send(&app, get(&format!("/api/assessments/{id}/results"))).await;

        assert_eq!(status, StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn malformed_id_is_bad_request() {
        let app = app();
        let (status, body) = send(&app, get("/api/assessments/not-a-uuid")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("not-a-uuid"));
    }

    #[tokio::test]
    async fn unknown_id_is_not_found() {
        let app = app();
        let uri = format!("/api/assessments/{}", uuid::Uuid::new_v4());
        let (status, body) = send(&app, get(&uri)).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "ASSESSMENT_NOT_FOUND");
    }

    #[tokio::test]
    async fn discard_removes_assessment() {
        let app = app();
        let id = start(&app).await;
        let uri = format!("/api/assessments/{id}");

        let delete = || {
            Request::builder()
                .method("DELETE")
                .uri(&uri)
                .body(Body::empty())
                .unwrap()
        };

        let (status, _) = send(&app, delete()).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, _) = send(&app, get(&uri)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(&app, delete()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
