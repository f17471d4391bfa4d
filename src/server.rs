//! Process start-up: tracing, dependency wiring and the HTTP server loop.

use std::sync::Arc;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::adapters::catalog::load_catalog;
use crate::adapters::embedding::{
    HashEmbeddingProvider, OpenAIEmbeddingConfig, OpenAIEmbeddingProvider,
};
use crate::adapters::http::{api_router, ApiState, AssessmentAppState, HttpSettings, StudyPlanAppState};
use crate::adapters::storage::InMemoryAssessmentRepository;
use crate::config::{AppConfig, ConfigError, EmbeddingBackend, EmbeddingConfig, ServerConfig, ValidationError};
use crate::domain::assessment::QuestionBank;
use crate::domain::catalog::CatalogError;
use crate::domain::matching::RecommendationEngine;
use crate::domain::study_plan::SubjectMatcher;
use crate::ports::{EmbeddingError, EmbeddingProvider};

/// Errors that abort start-up.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to load reference catalog: {0}")]
    Catalog(#[from] CatalogError),

    #[error("failed to build embedding provider: {0}")]
    Embedding(#[from] EmbeddingError),

    #[error("server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<ValidationError> for StartupError {
    fn from(err: ValidationError) -> Self {
        StartupError::Config(ConfigError::from(err))
    }
}

/// Installs the global subscriber.
///
/// `RUST_LOG` wins over `server.log_level`. Production emits JSON lines.
pub fn init_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&server.log_level));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let result = if server.is_production() {
        builder.json().try_init()
    } else {
        builder.compact().try_init()
    };
    if let Err(err) = result {
        eprintln!("tracing subscriber already installed: {err}");
    }
}

/// Builds the configured embedding provider.
pub fn embedding_provider(
    config: &EmbeddingConfig,
) -> Result<Arc<dyn EmbeddingProvider>, StartupError> {
    match config.provider {
        EmbeddingBackend::Hash => Ok(Arc::new(HashEmbeddingProvider::new(config.dimensions))),
        EmbeddingBackend::OpenAI => {
            let api_key = config
                .openai_api_key
                .clone()
                .filter(|key| !key.is_empty())
                .ok_or(ValidationError::MissingRequired("OPENAI_API_KEY"))?;

            let mut openai = OpenAIEmbeddingConfig::new(api_key)
                .with_model(config.model.as_str())
                .with_base_url(config.base_url.as_str())
                .with_timeout(config.timeout());
            if let Some(dimensions) = config.openai_dimensions {
                openai = openai.with_dimensions(dimensions);
            }
            Ok(Arc::new(OpenAIEmbeddingProvider::new(openai)?))
        }
        EmbeddingBackend::Onnx => onnx_provider(config),
    }
}

#[cfg(feature = "onnx")]
fn onnx_provider(config: &EmbeddingConfig) -> Result<Arc<dyn EmbeddingProvider>, StartupError> {
    use crate::adapters::embedding::{OnnxEmbeddingConfig, OnnxEmbeddingProvider, Pooling};
    use crate::config::OnnxPooling;

    let model_path = config
        .onnx_model_path
        .clone()
        .ok_or(ValidationError::MissingRequired("ONNX_MODEL_PATH"))?;
    let pooling = match config.onnx_pooling {
        OnnxPooling::Cls => Pooling::Cls,
        OnnxPooling::Mean => Pooling::Mean,
    };

    let mut onnx = OnnxEmbeddingConfig::new(model_path).with_pooling(pooling);
    if let Some(vocab_path) = &config.onnx_vocab_path {
        onnx = onnx.with_vocab(vocab_path.clone());
    }
    Ok(Arc::new(OnnxEmbeddingProvider::load(onnx)?))
}

#[cfg(not(feature = "onnx"))]
fn onnx_provider(_config: &EmbeddingConfig) -> Result<Arc<dyn EmbeddingProvider>, StartupError> {
    Err(EmbeddingError::unavailable("the onnx provider needs a build with the `onnx` feature").into())
}

/// Wires catalog, matchers, storage and provider into router state.
pub async fn build_state(config: &AppConfig) -> Result<ApiState, StartupError> {
    let catalog = Arc::new(load_catalog(config.catalog.data_path()).await?);
    let provider = embedding_provider(&config.embedding)?;
    let provider_info = provider.provider_info();

    tracing::info!(
        occupations = catalog.occupations().len(),
        universities = catalog.universities().len(),
        subjects = catalog.subjects().len(),
        embedding_provider = %provider_info.name,
        embedding_model = %provider_info.model,
        "Dependencies ready"
    );

    Ok(ApiState {
        assessment: AssessmentAppState {
            repository: Arc::new(InMemoryAssessmentRepository::new(
                config.assessment.session_ttl_minutes,
            )),
            questions: Arc::new(QuestionBank::standard()),
            engine: Arc::new(RecommendationEngine::new(
                catalog.clone(),
                config.matching.to_policy(),
            )),
        },
        study_plan: StudyPlanAppState {
            matcher: Arc::new(SubjectMatcher::new(catalog, provider)),
        },
        provider_info,
    })
}

/// Serves the API until ctrl-c or SIGTERM.
pub async fn run(config: AppConfig) -> Result<(), StartupError> {
    config.validate()?;
    let addr = config.server.socket_addr()?;

    let state = build_state(&config).await?;
    let settings = HttpSettings {
        cors_origins: config.server.cors_origins_list(),
        request_timeout: config.server.request_timeout(),
    };
    let app = api_router(state, &settings);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, environment = ?config.server.environment, "career-compass listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = tokio::signal::ctrl_c().await;
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        if let Ok(mut sigterm) = signal(SignalKind::terminate()) {
            let _ = sigterm.recv().await;
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::embedding::HASH_MODEL;

    #[test]
    fn hash_provider_uses_configured_dimensions() {
        let config = EmbeddingConfig {
            dimensions: 128,
            ..Default::default()
        };
        let provider = embedding_provider(&config).unwrap();
        assert_eq!(provider.dimensions(), 128);
        assert_eq!(provider.provider_info().model, HASH_MODEL);
    }

    #[test]
    fn openai_provider_requires_key() {
        let config = EmbeddingConfig {
            provider: EmbeddingBackend::OpenAI,
            ..Default::default()
        };
        assert!(matches!(
            embedding_provider(&config),
            Err(StartupError::Config(_))
        ));
    }

    #[test]
    fn onnx_provider_with_missing_model_fails() {
        let dir = tempfile::tempdir().unwrap();
        let config = EmbeddingConfig {
            provider: EmbeddingBackend::Onnx,
            onnx_model_path: Some(dir.path().join("missing.onnx")),
            ..Default::default()
        };
        assert!(matches!(
            embedding_provider(&config),
            Err(StartupError::Embedding(_))
        ));
    }

    #[test]
    fn openai_provider_reports_model() {
        let config = EmbeddingConfig {
            provider: EmbeddingBackend::OpenAI,
            openai_api_key: Some("sk-test".to_string()),
            ..Default::default()
        };
        let provider = embedding_provider(&config).unwrap();
        assert_eq!(provider.provider_info().name, "openai");
        assert_eq!(provider.provider_info().model, "text-embedding-3-small");
    }

    #[tokio::test]
    async fn builds_state_from_defaults() {
        let state = build_state(&AppConfig::default()).await.unwrap();
        assert_eq!(state.provider_info.name, "hash");
    }
}
