//! # Vetorização TF-IDF
//!
//! Cada documento vira um vetor denso de dimensão `|V|`:
//!
//! ```text
//! idf(t)    = ln((1 + n) / (1 + df(t))) + 1
//! x[t]      = tf(t, d) · idf(t)
//! x         = x / ‖x‖₂
//! ```
//!
//! Os termos são unigramas e bigramas de tokens com 2+ caracteres de palavra
//! (`\b\w\w+\b`), em minúsculas. O vocabulário é podado em duas etapas:
//! termos presentes em mais de `max_df · n` documentos saem; depois ficam os
//! `max_features` termos de maior frequência total no corpus (empates pela
//! ordem alfabética). Os índices finais seguem a ordem alfabética dos termos.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ClassifierError;

static TOKEN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w\w+\b").expect("padrão de token válido"));

/// Unigramas seguidos dos bigramas adjacentes, em minúsculas.
pub fn analyze(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let unigrams: Vec<&str> = TOKEN_PATTERN.find_iter(&lowered).map(|m| m.as_str()).collect();
    let mut terms: Vec<String> = unigrams.iter().map(|t| t.to_string()).collect();
    terms.extend(unigrams.windows(2).map(|w| format!("{} {}", w[0], w[1])));
    terms
}

fn term_counts(text: &str) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for term in analyze(text) {
        *counts.entry(term).or_insert(0) += 1;
    }
    counts
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TfidfVectorizer {
    max_features: usize,
    max_df: f64,
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
}

impl TfidfVectorizer {
    pub fn new(max_features: usize, max_df: f64) -> Self {
        Self {
            max_features,
            max_df,
            vocabulary: HashMap::new(),
            idf: Vec::new(),
        }
    }

    pub fn vocabulary_len(&self) -> usize {
        self.idf.len()
    }

    pub fn contains(&self, term: &str) -> bool {
        self.vocabulary.contains_key(term)
    }

    /// Aprende vocabulário e idf e devolve a matriz do próprio corpus.
    pub fn fit_transform(&mut self, docs: &[&str]) -> Result<Vec<Vec<f64>>, ClassifierError> {
        let counts: Vec<HashMap<String, usize>> = docs.iter().map(|d| term_counts(d)).collect();

        let mut doc_freq: HashMap<&str, usize> = HashMap::new();
        let mut corpus_freq: HashMap<&str, usize> = HashMap::new();
        for doc in &counts {
            for (term, &n) in doc {
                *doc_freq.entry(term.as_str()).or_insert(0) += 1;
                *corpus_freq.entry(term.as_str()).or_insert(0) += n;
            }
        }

        let max_doc_count = self.max_df * docs.len() as f64;
        let mut candidates: Vec<&str> = doc_freq
            .iter()
            .filter(|(_, &df)| df as f64 <= max_doc_count)
            .map(|(&t, _)| t)
            .collect();
        candidates.sort_by(|a, b| corpus_freq[b].cmp(&corpus_freq[a]).then_with(|| a.cmp(b)));
        candidates.truncate(self.max_features);
        candidates.sort_unstable();

        if candidates.is_empty() {
            return Err(ClassifierError::EmptyVocabulary);
        }

        let n = docs.len() as f64;
        self.idf = candidates
            .iter()
            .map(|t| ((1.0 + n) / (1.0 + doc_freq[t] as f64)).ln() + 1.0)
            .collect();
        self.vocabulary = candidates
            .iter()
            .enumerate()
            .map(|(i, t)| (t.to_string(), i))
            .collect();

        Ok(counts.iter().map(|c| self.weigh(c)).collect())
    }

    /// Vetor L2-normalizado de um texto. Texto sem termos conhecidos dá o vetor nulo.
    pub fn transform(&self, text: &str) -> Vec<f64> {
        self.weigh(&term_counts(text))
    }

    fn weigh(&self, counts: &HashMap<String, usize>) -> Vec<f64> {
        let mut row = vec![0.0; self.idf.len()];
        for (term, &n) in counts {
            if let Some(&i) = self.vocabulary.get(term) {
                row[i] = n as f64 * self.idf[i];
            }
        }
        let norm = row.iter().map(|v| v * v).sum::<f64>().sqrt();
        if norm > 0.0 {
            row.iter_mut().for_each(|v| *v /= norm);
        }
        row
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_unigrams_then_bigrams() {
        assert_eq!(
            analyze("Banco Central e juros"),
            vec!["banco", "central", "juros", "banco central", "central juros"]
        );
    }

    #[test]
    fn test_max_df_drops_ubiquitous_terms() {
        let mut v = TfidfVectorizer::new(100, 0.95);
        v.fit_transform(&["gol time", "gol jogo", "gol bola"]).unwrap();
        assert!(!v.contains("gol"));
        assert!(v.contains("time"));
    }

    #[test]
    fn test_max_features_keeps_most_frequent() {
        let mut v = TfidfVectorizer::new(2, 1.0);
        v.fit_transform(&["dólar dólar juros", "dólar bolsa", "juros câmbio"]).unwrap();
        assert_eq!(v.vocabulary_len(), 2);
        assert!(v.contains("dólar"));
        assert!(v.contains("juros"));
    }

    #[test]
    fn test_rows_are_unit_length() {
        let mut v = TfidfVectorizer::new(50, 1.0);
        let rows = v.fit_transform(&["filme cinema", "música show show"]).unwrap();
        for row in rows {
            let norm: f64 = row.iter().map(|x| x * x).sum::<f64>().sqrt();
            assert!((norm - 1.0).abs() < 1e-9);
        }
        assert!(v.transform("nada conhecido").iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_empty_vocabulary_is_an_error() {
        let mut v = TfidfVectorizer::new(10, 0.95);
        assert_eq!(v.fit_transform(&["a b", "c"]), Err(ClassifierError::EmptyVocabulary));
    }
}
