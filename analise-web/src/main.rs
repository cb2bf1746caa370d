//! Servidor HTTP (Axum) do pipeline de análise de textos.
//!
//! O modelo de tópicos é treinado em segundo plano logo na subida, para que a
//! primeira requisição não pague o custo do treino.

mod config;
mod routes;

use std::sync::Arc;

use analise_core::{Lexicon, RuleAnnotator, TextAnalyzer, TopicClassifier};
use anyhow::Context;
use axum::http::{header, HeaderValue, Method};
use tower_http::cors::CorsLayer;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::config::ServerConfig;
use crate::routes::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::from_env();

    let lexicon = match &config.lexicon_path {
        Some(path) => Lexicon::from_json_file(path)
            .with_context(|| format!("carregando léxico de {}", path.display()))?,
        None => Lexicon::portuguese(),
    };
    let analyzer = TextAnalyzer::new(Arc::new(RuleAnnotator::new()), Arc::new(lexicon));

    let mut topics = TopicClassifier::new();
    if let Some(path) = &config.model_cache {
        topics = topics.with_cache(path);
    }

    let state = Arc::new(AppState { analyzer, topics });

    let warm = Arc::clone(&state);
    tokio::task::spawn_blocking(move || {
        if !warm.topics.warm_up() {
            warn!("Modelo de tópicos indisponível, classificação usará palavras-chave");
        }
    });

    let origin: HeaderValue = config
        .frontend_url
        .parse()
        .with_context(|| format!("FRONTEND_URL inválida: {}", config.frontend_url))?;
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true);

    let app = routes::router(state).layer(cors);

    let listener = tokio::net::TcpListener::bind(&config.bind)
        .await
        .with_context(|| format!("bind em {}", config.bind))?;
    info!(endereco = %config.bind, origem = %config.frontend_url, "Servidor de análise iniciado");
    axum::serve(listener, app).await?;
    Ok(())
}
