//! Top-level router: module routers plus cross-cutting layers.

use std::time::Duration;

use axum::body::Body;
use axum::http::header::{ACCEPT, CONTENT_TYPE};
use axum::http::{HeaderName, HeaderValue, Method, Request};
use axum::Router;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use super::assessment::{assessment_router, AssessmentAppState};
use super::health::health_router;
use super::study_plan::{study_plan_router, StudyPlanAppState};
use crate::ports::EmbeddingProviderInfo;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Everything the routers need, built once in `main`.
#[derive(Clone)]
pub struct ApiState {
    pub assessment: AssessmentAppState,
    pub study_plan: StudyPlanAppState,
    pub provider_info: EmbeddingProviderInfo,
}

/// Transport-level settings applied as layers.
#[derive(Debug, Clone)]
pub struct HttpSettings {
    pub cors_origins: Vec<String>,
    pub request_timeout: Duration,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            cors_origins: Vec::new(),
            request_timeout: Duration::from_secs(30),
        }
    }
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring unparseable CORS origin");
                None
            }
        })
        .collect::<Vec<_>>();

    CorsLayer::new()
        .allow_origin(allowed)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([ACCEPT, CONTENT_TYPE])
}

/// Builds the complete application router.
pub fn api_router(state: ApiState, settings: &HttpSettings) -> Router {
    let request_id_header = HeaderName::from_static(REQUEST_ID_HEADER);
    let trace_header = request_id_header.clone();

    let trace = TraceLayer::new_for_http().make_span_with(move |request: &Request<Body>| {
        let request_id = request
            .headers()
            .get(&trace_header)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("");

        tracing::info_span!(
            "http_request",
            method = %request.method(),
            uri = %request.uri(),
            request_id = %request_id,
        )
    });

    let health: Router = health_router().with_state(state.provider_info);
    let assessment: Router = assessment_router().with_state(state.assessment);
    let study_plan: Router = study_plan_router().with_state(state.study_plan);

    Router::new()
        .merge(health)
        .merge(assessment)
        .merge(study_plan)
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(settings.request_timeout))
        .layer(trace)
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(SetRequestIdLayer::new(
            request_id_header,
            MakeRequestUuid::default(),
        ))
        .layer(cors_layer(&settings.cors_origins))
}
