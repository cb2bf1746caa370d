//! Modelo estatístico de tópicos: [`TfidfVectorizer`] + [`MultinomialNb`].

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use super::corpus;
use super::naive_bayes::MultinomialNb;
use super::tfidf::TfidfVectorizer;
use super::{top_k, Topic, TopicPrediction, TopicStrategy};
use crate::error::{ClassifierError, ConfigError};

pub const MAX_FEATURES: usize = 200;
pub const MAX_DF: f64 = 0.95;
pub const ALPHA: f64 = 0.01;

/// Palavras com até este número de caracteres são descartadas antes da previsão.
const MIN_WORD_CHARS: usize = 2;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatisticalTopicModel {
    vectorizer: TfidfVectorizer,
    nb: MultinomialNb,
}

impl StatisticalTopicModel {
    /// Treina sobre documentos rotulados. Determinístico para a mesma entrada.
    pub fn train(docs: &[&str], labels: &[Topic]) -> Result<Self, ClassifierError> {
        if docs.is_empty() {
            return Err(ClassifierError::InvalidCorpus("corpus vazio".to_string()));
        }
        let mut vectorizer = TfidfVectorizer::new(MAX_FEATURES, MAX_DF);
        let rows = vectorizer.fit_transform(docs)?;
        let mut nb = MultinomialNb::new(ALPHA);
        nb.fit(&rows, labels)?;

        let model = Self { vectorizer, nb };
        let accuracy = model.accuracy(docs, labels)?;
        info!(
            documentos = docs.len(),
            vocabulario = model.vectorizer.vocabulary_len(),
            acuracia_treino = accuracy,
            "Modelo de tópicos treinado"
        );
        Ok(model)
    }

    /// Treina sobre o corpus embutido.
    pub fn train_default() -> Result<Self, ClassifierError> {
        let (docs, labels) = corpus::training_set();
        Self::train(&docs, &labels)
    }

    /// Distribuição completa sobre os tópicos conhecidos, na ordem canônica.
    pub fn probabilities(&self, text: &str) -> Result<Vec<(Topic, f64)>, ClassifierError> {
        let row = self.vectorizer.transform(&preprocess(text));
        self.nb.predict_proba(&row)
    }

    fn accuracy(&self, docs: &[&str], labels: &[Topic]) -> Result<f64, ClassifierError> {
        let mut hits = 0;
        for (doc, label) in docs.iter().zip(labels) {
            let proba = self.nb.predict_proba(&self.vectorizer.transform(doc))?;
            if top_k(proba).first().map(|(t, _)| t) == Some(label) {
                hits += 1;
            }
        }
        Ok(hits as f64 / docs.len() as f64)
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let io_err = |source: std::io::Error| ConfigError::Io {
            path: path.display().to_string(),
            source,
        };
        let file = File::create(path).map_err(io_err)?;
        serde_json::to_writer(BufWriter::new(file), self).map_err(|source| ConfigError::Json {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let file = File::open(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        serde_json::from_reader(BufReader::new(file)).map_err(|source| ConfigError::Json {
            path: path.display().to_string(),
            source,
        })
    }
}

/// Minúsculas, separação por espaço, só palavras com mais de dois caracteres.
fn preprocess(text: &str) -> String {
    text.to_lowercase()
        .split_whitespace()
        .filter(|w| w.chars().count() > MIN_WORD_CHARS)
        .collect::<Vec<_>>()
        .join(" ")
}

impl TopicStrategy for StatisticalTopicModel {
    fn predict(&self, text: &str) -> Result<Vec<TopicPrediction>, ClassifierError> {
        let ranked = top_k(self.probabilities(text)?);
        Ok(ranked
            .into_iter()
            .map(|(topic, p)| TopicPrediction::new(topic, p))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> StatisticalTopicModel {
        StatisticalTopicModel::train_default().unwrap()
    }

    fn pairs(preds: &[TopicPrediction]) -> Vec<(Topic, f64)> {
        preds.iter().map(|p| (p.topico, p.confianca)).collect()
    }

    #[test]
    fn test_preprocess_drops_short_words() {
        assert_eq!(preprocess("O Novo app de TV"), "novo app");
    }

    #[test]
    fn test_vocabulary_is_capped() {
        assert_eq!(model().vectorizer.vocabulary_len(), MAX_FEATURES);
    }

    #[test]
    fn test_clear_topics() {
        let m = model();
        let cases = [
            ("O governo anunciou uma reforma tributária no congresso", Topic::Politica),
            ("A seleção venceu o jogo de futebol no estádio", Topic::Esportes),
            ("O novo aplicativo de pagamentos digital usa inteligência artificial", Topic::Tecnologia),
            ("O banco central subiu os juros", Topic::Economia),
            ("O filme estreou no cinema com grandes atores", Topic::Entretenimento),
        ];
        for (text, expected) in cases {
            let preds = m.predict(text).unwrap();
            assert_eq!(preds[0].topico, expected, "{text}");
        }
    }

    #[test]
    fn test_known_distribution() {
        let preds = model().predict("inflação economia").unwrap();
        assert_eq!(pairs(&preds), vec![(Topic::Economia, 0.626), (Topic::Politica, 0.343)]);
    }

    #[test]
    fn test_unknown_text_falls_to_prior_with_stable_order() {
        let preds = model().predict("o a e").unwrap();
        assert_eq!(pairs(&preds), vec![(Topic::Politica, 0.2), (Topic::Esportes, 0.2)]);
    }

    #[test]
    fn test_probabilities_form_a_distribution() {
        let proba = model().probabilities("show de música no festival").unwrap();
        assert_eq!(proba.len(), Topic::ALL.len());
        let total: f64 = proba.iter().map(|(_, p)| p).sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_training_is_deterministic() {
        let text = "mercado financeiro e bolsa de valores";
        assert_eq!(model().probabilities(text), model().probabilities(text));
    }

    #[test]
    fn test_save_and_load_predict_the_same() {
        let m = model();
        let path = std::env::temp_dir().join(format!("topic-model-{}.json", std::process::id()));
        m.save(&path).unwrap();
        let loaded = StatisticalTopicModel::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        let text = "robótica e automação na indústria";
        assert_eq!(m.predict(text).unwrap(), loaded.predict(text).unwrap());
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = StatisticalTopicModel::load(Path::new("/nao/existe/modelo.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
