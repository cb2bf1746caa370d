//! # Classificador de Tópicos com Fallback
//!
//! O modelo estatístico é treinado uma única vez, na primeira chamada de
//! [`TopicClassifier::predict`] ou [`TopicClassifier::warm_up`]. Chamadas
//! concorrentes esperam o vencedor terminar e reutilizam o resultado. Um
//! treino que falhou também fica registrado: as chamadas seguintes vão direto
//! para o fallback, sem tentar treinar de novo.
//!
//! Se houver um caminho de cache, o arquivo existente é removido antes do
//! treino e o modelo novo é gravado depois. O cache nunca é lido.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

use tracing::{info, warn};

use super::{KeywordTopicModel, StatisticalTopicModel, TopicOutcome, TopicStrategy};
use crate::error::ClassifierError;

type Trainer = fn() -> Result<StatisticalTopicModel, ClassifierError>;

pub struct TopicClassifier {
    model: OnceLock<Result<StatisticalTopicModel, ClassifierError>>,
    fallback: KeywordTopicModel,
    cache_path: Option<PathBuf>,
    trainer: Trainer,
    trainings: AtomicUsize,
}

impl TopicClassifier {
    /// Classificador sobre o corpus embutido, sem cache em disco.
    pub fn new() -> Self {
        Self {
            model: OnceLock::new(),
            fallback: KeywordTopicModel::default(),
            cache_path: None,
            trainer: StatisticalTopicModel::train_default,
            trainings: AtomicUsize::new(0),
        }
    }

    /// Grava o modelo treinado em `path`.
    pub fn with_cache(mut self, path: impl Into<PathBuf>) -> Self {
        self.cache_path = Some(path.into());
        self
    }

    /// Troca a rotina de treino.
    pub fn with_trainer(mut self, trainer: Trainer) -> Self {
        self.trainer = trainer;
        self
    }

    /// Força o treino agora. Devolve `true` se o modelo estatístico está disponível.
    pub fn warm_up(&self) -> bool {
        self.model().is_ok()
    }

    /// Quantas vezes o treino foi executado (0 ou 1).
    pub fn training_runs(&self) -> usize {
        self.trainings.load(Ordering::SeqCst)
    }

    pub fn predict(&self, text: &str) -> TopicOutcome {
        let attempt = match self.model() {
            Ok(model) => model.predict(text),
            Err(err) => Err(err.clone()),
        };
        // A lista devolvida nunca é vazia: o fallback sempre responde.
        let attempt = attempt.and_then(|p| if p.is_empty() { Err(ClassifierError::NotTrained) } else { Ok(p) });
        match attempt {
            Ok(predictions) => TopicOutcome::Statistical(predictions),
            Err(cause) => {
                warn!(erro = %cause, "Classificador estatístico indisponível, usando palavras-chave");
                TopicOutcome::Fallback {
                    predictions: self.fallback.rank(text),
                    cause,
                }
            }
        }
    }

    fn model(&self) -> &Result<StatisticalTopicModel, ClassifierError> {
        self.model.get_or_init(|| self.initialize())
    }

    fn initialize(&self) -> Result<StatisticalTopicModel, ClassifierError> {
        if let Some(path) = &self.cache_path {
            match fs::remove_file(path) {
                Ok(()) => info!(caminho = %path.display(), "Cache de modelo antigo removido"),
                Err(e) if e.kind() == ErrorKind::NotFound => {}
                Err(e) => warn!(caminho = %path.display(), erro = %e, "Falha ao remover cache de modelo"),
            }
        }

        self.trainings.fetch_add(1, Ordering::SeqCst);
        let model = (self.trainer)()?;

        if let Some(path) = &self.cache_path {
            match model.save(path) {
                Ok(()) => info!(caminho = %path.display(), "Modelo de tópicos salvo"),
                Err(e) => warn!(erro = %e, "Falha ao salvar modelo de tópicos"),
            }
        }
        Ok(model)
    }
}

impl Default for TopicClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use super::*;
    use crate::topic::{Topic, TOP_K};

    fn failing_trainer() -> Result<StatisticalTopicModel, ClassifierError> {
        Err(ClassifierError::EmptyVocabulary)
    }

    #[test]
    fn test_statistical_path() {
        let classifier = TopicClassifier::new();
        let outcome = classifier.predict("O time venceu o campeonato de futebol");
        assert!(!outcome.is_fallback());
        assert_eq!(outcome.principal(), Some(Topic::Esportes));
    }

    #[test]
    fn test_training_failure_routes_to_fallback() {
        let classifier = TopicClassifier::new().with_trainer(failing_trainer);
        let outcome = classifier.predict("O banco central e a inflação");
        match &outcome {
            TopicOutcome::Fallback { cause, .. } => assert_eq!(*cause, ClassifierError::EmptyVocabulary),
            other => panic!("esperava fallback, veio {other:?}"),
        }
        assert_eq!(outcome.principal(), Some(Topic::Economia));
        assert!(!classifier.warm_up());
    }

    #[test]
    fn test_failed_training_is_not_retried() {
        let classifier = TopicClassifier::new().with_trainer(failing_trainer);
        for _ in 0..3 {
            assert!(classifier.predict("qualquer coisa").is_fallback());
        }
        assert_eq!(classifier.training_runs(), 1);
    }

    #[test]
    fn test_fallback_default_pair() {
        let classifier = TopicClassifier::new().with_trainer(failing_trainer);
        let preds = classifier.predict("Receita de bolo").into_predictions();
        assert_eq!(preds, KeywordTopicModel::default_pair());
    }

    #[test]
    fn test_concurrent_first_calls_train_once() {
        let classifier = Arc::new(TopicClassifier::new());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let c = Arc::clone(&classifier);
                thread::spawn(move || c.predict(&format!("filme cinema número {i}")))
            })
            .collect();
        for h in handles {
            let outcome = h.join().unwrap();
            assert_eq!(outcome.principal(), Some(Topic::Entretenimento));
        }
        assert_eq!(classifier.training_runs(), 1);
    }

    #[test]
    fn test_output_contract() {
        let classifier = TopicClassifier::new();
        for text in ["", "mercado", "série de TV no streaming", "presidente e jogador"] {
            let preds = classifier.predict(text).into_predictions();
            assert!(preds.len() <= TOP_K);
            assert!(preds.iter().all(|p| (0.0..=1.0).contains(&p.confianca)));
            assert!(preds.windows(2).all(|w| w[0].confianca >= w[1].confianca));
        }
    }

    #[test]
    fn test_cache_is_replaced_on_startup() {
        let path = std::env::temp_dir().join(format!("topic-cache-{}.json", std::process::id()));
        fs::write(&path, "modelo antigo").unwrap();
        let classifier = TopicClassifier::new().with_cache(&path);
        assert!(classifier.warm_up());
        let reloaded = StatisticalTopicModel::load(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(
            reloaded.predict("futebol").unwrap()[0].topico,
            Topic::Esportes
        );
    }
}
