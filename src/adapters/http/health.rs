//! Liveness endpoint reporting the active embedding backend.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use crate::ports::EmbeddingProviderInfo;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub embedding_provider: String,
    pub embedding_model: String,
}

/// GET /health
pub async fn health(State(info): State<EmbeddingProviderInfo>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        embedding_provider: info.name,
        embedding_model: info.model,
    })
}

pub fn health_router() -> Router<EmbeddingProviderInfo> {
    Router::new().route("/health", get(health))
}
