//! Rotas HTTP sobre o núcleo de análise.

use std::sync::Arc;

use analise_core::{AnalysisError, AnalysisResult, TextAnalyzer, Topic, TopicClassifier, TopicPrediction};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

/// Estado compartilhado: só leitura, seguro entre tarefas.
pub struct AppState {
    pub analyzer: TextAnalyzer,
    pub topics: TopicClassifier,
}

#[derive(Deserialize)]
pub struct AnalysisRequest {
    pub texto_original: String,
}

#[derive(Serialize)]
struct TopicResponse {
    texto: String,
    topicos: Vec<TopicPrediction>,
    topico_principal: Topic,
}

/// Falhas devolvidas ao cliente como `{"detail": ...}`.
#[derive(Debug)]
pub enum ApiError {
    Analysis(AnalysisError),
    Internal(String),
}

impl From<AnalysisError> for ApiError {
    fn from(err: AnalysisError) -> Self {
        ApiError::Analysis(err)
    }
}

impl From<tokio::task::JoinError> for ApiError {
    fn from(err: tokio::task::JoinError) -> Self {
        ApiError::Internal(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            ApiError::Analysis(AnalysisError::Validation(e)) => (StatusCode::BAD_REQUEST, e.to_string()),
            ApiError::Analysis(e @ AnalysisError::Annotator(_)) => {
                error!(erro = %e, "Falha no anotador");
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
            ApiError::Internal(msg) => {
                error!(erro = %msg, "Falha interna");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };
        (status, Json(serde_json::json!({ "detail": detail }))).into_response()
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/analysis/analyze", get(analyze_info_handler))
        .route("/analysis/analysis", post(analysis_handler))
        .route("/analysis/topic", post(topic_handler))
        .with_state(state)
}

async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn analyze_info_handler() -> impl IntoResponse {
    Json(serde_json::json!({ "message": "Rota básica de análise." }))
}

/// Análise completa. O anotador é síncrono, por isso roda em `spawn_blocking`.
async fn analysis_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AnalysisRequest>,
) -> Result<Json<AnalysisResult>, ApiError> {
    let chars = req.texto_original.chars().count();
    let result = tokio::task::spawn_blocking(move || state.analyzer.analyze(&req.texto_original)).await??;
    info!(
        caracteres = chars,
        sentimento = %result.sentimento,
        entidades = result.entidades.len(),
        "Texto analisado"
    );
    Ok(Json(result))
}

/// Classificação de tópicos. A primeira chamada pode disparar o treino do modelo.
async fn topic_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AnalysisRequest>,
) -> Result<Json<TopicResponse>, ApiError> {
    let texto = req.texto_original;
    let text_for_model = texto.clone();
    let outcome = tokio::task::spawn_blocking(move || state.topics.predict(&text_for_model)).await?;
    let fallback = outcome.is_fallback();
    let topicos = outcome.into_predictions();
    let topico_principal = topicos
        .first()
        .map(|p| p.topico)
        .ok_or_else(|| ApiError::Internal("classificador não devolveu tópicos".to_string()))?;
    info!(fallback, topico = %topico_principal, "Tópicos classificados");
    Ok(Json(TopicResponse {
        texto,
        topicos,
        topico_principal,
    }))
}
