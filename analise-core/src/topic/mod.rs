//! # Classificação de Tópicos
//!
//! Atribui ao texto os dois tópicos mais prováveis entre cinco categorias
//! fixas. Duas estratégias implementam [`TopicStrategy`]:
//!
//! - [`StatisticalTopicModel`]: TF-IDF (unigramas + bigramas) seguido de
//!   Naive Bayes Multinomial, treinado sobre um corpus embutido de 50 frases.
//! - [`KeywordTopicModel`]: contagem de palavras-chave por tópico. Usada
//!   quando o modelo estatístico falha ao treinar ou ao prever.
//!
//! O [`TopicClassifier`] combina as duas: treina o modelo estatístico uma única
//! vez por processo, na primeira chamada, e cai para as palavras-chave em
//! qualquer erro. O chamador nunca vê a falha, apenas [`TopicOutcome::Fallback`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ClassifierError;

pub mod classifier;
pub mod corpus;
pub mod fallback;
pub mod naive_bayes;
pub mod statistical;
pub mod tfidf;

pub use classifier::TopicClassifier;
pub use fallback::KeywordTopicModel;
pub use statistical::StatisticalTopicModel;

/// Quantos tópicos são devolvidos por previsão.
pub const TOP_K: usize = 2;

/// Categorias de tópico, na ordem canônica usada em empates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Topic {
    #[serde(rename = "política")]
    Politica,
    #[serde(rename = "esportes")]
    Esportes,
    #[serde(rename = "tecnologia")]
    Tecnologia,
    #[serde(rename = "economia")]
    Economia,
    #[serde(rename = "entretenimento")]
    Entretenimento,
}

impl Topic {
    pub const ALL: [Topic; 5] = [
        Topic::Politica,
        Topic::Esportes,
        Topic::Tecnologia,
        Topic::Economia,
        Topic::Entretenimento,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Topic::Politica => "política",
            Topic::Esportes => "esportes",
            Topic::Tecnologia => "tecnologia",
            Topic::Economia => "economia",
            Topic::Entretenimento => "entretenimento",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Topic::ALL.into_iter().find(|t| t.label() == label)
    }

}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Um tópico e sua confiança, arredondada a 3 casas decimais.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TopicPrediction {
    pub topico: Topic,
    pub confianca: f64,
}

impl TopicPrediction {
    pub fn new(topico: Topic, confianca: f64) -> Self {
        Self {
            topico,
            confianca: round3(confianca),
        }
    }
}

/// Estratégia capaz de prever tópicos para um texto.
pub trait TopicStrategy {
    /// Até [`TOP_K`] previsões, em ordem decrescente de confiança.
    fn predict(&self, text: &str) -> Result<Vec<TopicPrediction>, ClassifierError>;
}

/// Resultado do classificador, indicando qual estratégia respondeu.
#[derive(Debug, Clone, PartialEq)]
pub enum TopicOutcome {
    Statistical(Vec<TopicPrediction>),
    Fallback {
        predictions: Vec<TopicPrediction>,
        cause: ClassifierError,
    },
}

impl TopicOutcome {
    pub fn predictions(&self) -> &[TopicPrediction] {
        match self {
            TopicOutcome::Statistical(p) => p,
            TopicOutcome::Fallback { predictions, .. } => predictions,
        }
    }

    pub fn into_predictions(self) -> Vec<TopicPrediction> {
        match self {
            TopicOutcome::Statistical(p) => p,
            TopicOutcome::Fallback { predictions, .. } => predictions,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, TopicOutcome::Fallback { .. })
    }

    /// Tópico principal: o primeiro da lista.
    pub fn principal(&self) -> Option<Topic> {
        self.predictions().first().map(|p| p.topico)
    }
}

/// Arredonda a 3 casas a partir do valor decimal exato do `f64`.
///
/// `(x * 1000.0).round()` erra perto de empates: `1.0005` é na verdade
/// `1.000499...`, mas o produto dá exatamente `1000.5`.
pub(crate) fn round3(x: f64) -> f64 {
    format!("{x:.3}").parse().unwrap_or(x)
}

/// Ordena por confiança decrescente (estável: empates seguem a ordem canônica)
/// e mantém as [`TOP_K`] primeiras.
pub(crate) fn top_k(mut scored: Vec<(Topic, f64)>) -> Vec<(Topic, f64)> {
    scored.sort_by(|a, b| b.1.total_cmp(&a.1));
    scored.truncate(TOP_K);
    scored
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_labels_roundtrip_through_serde() {
        for topic in Topic::ALL {
            let json = serde_json::to_string(&topic).unwrap();
            assert_eq!(json, format!("\"{}\"", topic.label()));
            assert_eq!(Topic::from_label(topic.label()), Some(topic));
        }
        assert_eq!(Topic::from_label("culinária"), None);
    }

    #[test]
    fn test_prediction_rounds_to_three_places() {
        let p = TopicPrediction::new(Topic::Economia, 0.626_449);
        assert_eq!(p.confianca, 0.626);
        assert_eq!(
            serde_json::to_value(p).unwrap(),
            serde_json::json!({"topico": "economia", "confianca": 0.626})
        );
    }

    #[test]
    fn test_round3_uses_exact_decimal_value() {
        assert_eq!(round3(1.0005), 1.0);
        assert_eq!(round3(0.0015), 0.002);
        assert_eq!(round3(0.19090909), 0.191);
        assert_eq!(round3(1.0), 1.0);
    }

    #[test]
    fn test_top_k_is_stable_on_ties() {
        let scored = Topic::ALL.iter().map(|t| (*t, 0.2)).collect();
        let top = top_k(scored);
        assert_eq!(top, vec![(Topic::Politica, 0.2), (Topic::Esportes, 0.2)]);
    }

    #[test]
    fn test_outcome_accessors() {
        let preds = vec![TopicPrediction::new(Topic::Esportes, 0.9)];
        let outcome = TopicOutcome::Fallback {
            predictions: preds.clone(),
            cause: ClassifierError::NotTrained,
        };
        assert!(outcome.is_fallback());
        assert_eq!(outcome.principal(), Some(Topic::Esportes));
        assert_eq!(outcome.into_predictions(), preds);
    }
}
