//! # Léxico de Sentimento
//!
//! Conjuntos de palavras que o [`crate::sentiment`] consulta: polaridade positiva
//! e negativa, negações, intensificadores com multiplicador, as palavras que dão
//! o bônus de ±0.5 à palavra seguinte e as expressões de bigrama fortes.
//!
//! O léxico é um valor imutável: construído uma vez (tabelas embutidas ou um
//! arquivo JSON) e compartilhado por referência (`&Lexicon` / `Arc<Lexicon>`)
//! entre todas as análises concorrentes, sem lock.
//!
//! ## Formato JSON
//!
//! ```json
//! {
//!   "positive": ["bom", "ótimo"],
//!   "negative": ["ruim"],
//!   "negations": ["não"],
//!   "intensifiers": { "muito": 1.5 },
//!   "boosters": ["muito", "bastante"],
//!   "positive_bigrams": ["muito bom"],
//!   "negative_bigrams": ["muito ruim"]
//! }
//! ```
//!
//! Campos ausentes assumem os valores das tabelas embutidas.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const POSITIVE: &[&str] = &[
    "bom", "boa", "excelente", "ótimo", "ótima", "maravilhoso", "fantástico",
    "incrível", "rápido", "eficiente", "eficaz", "funciona", "funcionou",
    "fácil", "simples", "intuitivo", "útil", "prático", "recomendo", "gosto",
    "perfeito", "estável", "confiável", "satisfeito", "agilidade",
    "qualidade", "positivo", "sucesso", "solucionou", "resolvido", "melhor",
    "melhorou", "excepcional", "nota", "nota 10", "dez",
];

const NEGATIVE: &[&str] = &[
    "ruim", "péssimo", "horrível", "terrível", "lento", "lenta", "devagar",
    "instável", "erro", "problema", "defeito", "falha", "bug", "crasha",
    "travando", "travou", "congela", "pior", "piorou", "difícil", "complicado",
    "complexo", "confuso", "inútil", "inutil", "inúteis",
    "frustrante", "frustração", "insatisfeito", "decepcionante", "decepção",
    "negativo", "fracasso", "falhou", "não funciona", "não recomendo",
    "detesto", "odeio", "desastre", "catastrófico",
];

const INTENSIFIERS: &[(&str, f64)] = &[
    ("muito", 1.5), ("muita", 1.5), ("extremamente", 2.0), ("totalmente", 1.8),
    ("completamente", 1.8), ("absolutamente", 2.0), ("realmente", 1.3),
    ("verdadeiramente", 1.4), ("incrivelmente", 1.7), ("fantasticamente", 1.7),
    ("horrivelmente", 2.0), ("péssimamente", 2.0), ("terrivelmente", 2.0),
    ("bastante", 1.4), ("demais", 1.6), ("super", 1.5), ("ultra", 1.7),
    ("extraordinariamente", 1.9), ("excepcionalmente", 1.8),
];

const NEGATIONS: &[&str] = &["não", "nem", "nunca", "jamais", "tampouco"];

/// Palavras que, imediatamente antes de uma palavra polarizada, somam ±0.5.
const BOOSTERS: &[&str] = &["muito", "bastante"];

const POSITIVE_BIGRAMS: &[&str] = &["muito bom", "muito boa", "muito útil"];
const NEGATIVE_BIGRAMS: &[&str] = &["muito ruim", "muito lento", "não funciona"];

fn to_set(words: &[&str]) -> HashSet<String> {
    words.iter().map(|w| w.to_string()).collect()
}

fn to_vec(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

/// Léxico completo usado pelo analisador de sentimento.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Lexicon {
    /// Palavras de polaridade positiva (minúsculas).
    pub positive: HashSet<String>,
    /// Palavras de polaridade negativa (minúsculas).
    pub negative: HashSet<String>,
    /// Palavras de negação.
    pub negations: HashSet<String>,
    /// Multiplicador de intensidade por palavra. Ausente ⇒ 1.0.
    pub intensifiers: HashMap<String, f64>,
    /// Palavras que concedem o bônus fixo de ±0.5 à palavra seguinte.
    pub boosters: HashSet<String>,
    /// Expressões que, contidas num bigrama, somam +2.0.
    pub positive_bigrams: Vec<String>,
    /// Expressões que, contidas num bigrama, somam −2.0.
    pub negative_bigrams: Vec<String>,
}

impl Lexicon {
    /// Tabelas embutidas para Português Brasileiro.
    pub fn portuguese() -> Self {
        Self {
            positive: to_set(POSITIVE),
            negative: to_set(NEGATIVE),
            negations: to_set(NEGATIONS),
            intensifiers: INTENSIFIERS
                .iter()
                .map(|(w, m)| (w.to_string(), *m))
                .collect(),
            boosters: to_set(BOOSTERS),
            positive_bigrams: to_vec(POSITIVE_BIGRAMS),
            negative_bigrams: to_vec(NEGATIVE_BIGRAMS),
        }
    }

    /// Carrega um léxico de um arquivo JSON.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&raw).map_err(|source| ConfigError::Json {
            path: path.display().to_string(),
            source,
        })
    }

    /// Interpreta um léxico em JSON; campos omitidos vêm das tabelas embutidas.
    pub fn from_json_str(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn is_positive(&self, word: &str) -> bool {
        self.positive.contains(word)
    }

    pub fn is_negative(&self, word: &str) -> bool {
        self.negative.contains(word)
    }

    pub fn is_negation(&self, word: &str) -> bool {
        self.negations.contains(word)
    }

    pub fn is_booster(&self, word: &str) -> bool {
        self.boosters.contains(word)
    }

    /// Multiplicador de intensidade da própria palavra (1.0 se não for intensificador).
    pub fn intensity(&self, word: &str) -> f64 {
        self.intensifiers.get(word).copied().unwrap_or(1.0)
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::portuguese()
    }
}
