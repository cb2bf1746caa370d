//! # Erros do Pipeline de Análise
//!
//! Cada camada tem seu próprio tipo de erro:
//!
//! - [`ValidationError`]: entrada rejeitada antes de qualquer processamento (4xx).
//! - [`AnnotatorError`]: falha do anotador linguístico (propagada sem alteração).
//! - [`ClassifierError`]: falha interna do classificador estatístico de tópicos.
//!   Nunca chega ao chamador: o classificador cai para a estratégia de palavras-chave.
//! - [`ConfigError`]: léxico ou cache do modelo ilegíveis.
//! - [`AnalysisError`]: união do que o orquestrador pode devolver.

use thiserror::Error;

/// Motivo pelo qual um texto foi rejeitado na validação de entrada.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Texto vazio.")]
    Empty,
    #[error("Texto muito curto.")]
    TooShort,
    #[error("Texto muito longo.")]
    TooLong,
}

/// Falha do anotador linguístico externo.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("falha no anotador linguístico: {0}")]
pub struct AnnotatorError(pub String);

/// Falhas do classificador estatístico de tópicos.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassifierError {
    /// O modelo ainda não foi treinado (ou foi construído vazio).
    #[error("modelo de tópicos não treinado")]
    NotTrained,
    /// O corpus de treino não produziu nenhum termo no vocabulário.
    #[error("vocabulário vazio: nenhum termo sobreviveu aos filtros de frequência")]
    EmptyVocabulary,
    /// Corpus e rótulos com tamanhos diferentes, ou rótulo fora do conjunto de tópicos.
    #[error("corpus de treino inválido: {0}")]
    InvalidCorpus(String),
    /// A distribuição calculada contém NaN ou infinito.
    #[error("probabilidade não finita para o tópico {0}")]
    NonFiniteProbability(String),
}

/// Falha ao carregar configuração externa (léxico, cache do modelo).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("erro de E/S em {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("JSON inválido em {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Erro devolvido pelo orquestrador.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Annotator(#[from] AnnotatorError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages() {
        assert_eq!(ValidationError::Empty.to_string(), "Texto vazio.");
        assert_eq!(ValidationError::TooShort.to_string(), "Texto muito curto.");
        assert_eq!(ValidationError::TooLong.to_string(), "Texto muito longo.");
    }

    #[test]
    fn test_analysis_error_is_transparent() {
        let err: AnalysisError = ValidationError::TooShort.into();
        assert_eq!(err.to_string(), "Texto muito curto.");
    }
}
