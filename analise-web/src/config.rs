//! Configuração do servidor, lida do ambiente (com `.env` opcional).

use std::path::PathBuf;

const DEFAULT_BIND: &str = "0.0.0.0:3000";
const DEFAULT_FRONTEND_URL: &str = "http://localhost:5173";
const DEFAULT_MODEL_CACHE: &str = "topic_model.json";

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// `ANALISE_BIND`
    pub bind: String,
    /// `FRONTEND_URL`: única origem aceita pelo CORS.
    pub frontend_url: String,
    /// `ANALISE_MODEL_CACHE`: vazio desliga o cache do modelo de tópicos.
    pub model_cache: Option<PathBuf>,
    /// `ANALISE_LEXICON`: léxico de sentimento em JSON, no lugar do embutido.
    pub lexicon_path: Option<PathBuf>,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let model_cache = match lookup("ANALISE_MODEL_CACHE") {
            Some(v) if v.trim().is_empty() => None,
            Some(v) => Some(PathBuf::from(v)),
            None => Some(PathBuf::from(DEFAULT_MODEL_CACHE)),
        };
        Self {
            bind: lookup("ANALISE_BIND").unwrap_or_else(|| DEFAULT_BIND.to_string()),
            frontend_url: lookup("FRONTEND_URL").unwrap_or_else(|| DEFAULT_FRONTEND_URL.to_string()),
            model_cache,
            lexicon_path: lookup("ANALISE_LEXICON")
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
        }
    }
}
