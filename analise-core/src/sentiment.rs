//! # Análise de Sentimento Baseada em Léxico
//!
//! Pontua os tokens alfabéticos do texto contra o [`Lexicon`] e normaliza pelo
//! número de tokens.
//!
//! Para cada token `t[i]` (minúsculo):
//!
//! | Condição                               | Efeito                          |
//! |----------------------------------------|---------------------------------|
//! | `t[i]` positivo                        | `+intensidade(t[i])`            |
//! | `t[i]` positivo e é negação            | `−intensidade(t[i])`            |
//! | `t[i]` positivo, `t[i-1]` ∈ boosters   | `+0.5` adicional                |
//! | `t[i]` negativo                        | `−intensidade(t[i])`            |
//! | `t[i]` negativo e é negação            | `+intensidade(t[i])`            |
//! | `t[i]` negativo, `t[i-1]` ∈ boosters   | `−0.5` adicional                |
//! | `"t[i] t[i+1]"` contém bigrama positivo| `+2.0`                          |
//! | senão, contém bigrama negativo         | `−2.0`                          |
//!
//! A negação é avaliada sobre o **próprio** token, não sobre o anterior: "não
//! gosto" não inverte "gosto". Os bigramas somam por cima das regras de léxico.
//!
//! Pontuação normalizada `> 0.1` ⇒ Positivo, `< −0.1` ⇒ Negativo, senão Neutro.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::lexicon::Lexicon;

const BOOSTER_BONUS: f64 = 0.5;
const BIGRAM_WEIGHT: f64 = 2.0;
const POLARITY_THRESHOLD: f64 = 0.1;

/// Polaridade do texto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    Positivo,
    Negativo,
    Neutro,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positivo => "Positivo",
            Sentiment::Negativo => "Negativo",
            Sentiment::Neutro => "Neutro",
        }
    }

    fn from_score(normalized: f64) -> Self {
        if normalized > POLARITY_THRESHOLD {
            Sentiment::Positivo
        } else if normalized < -POLARITY_THRESHOLD {
            Sentiment::Negativo
        } else {
            Sentiment::Neutro
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pontuador de sentimento sobre um léxico emprestado.
#[derive(Debug, Clone, Copy)]
pub struct SentimentScorer<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> SentimentScorer<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    /// Classifica uma sequência de palavras (já filtradas como alfabéticas).
    pub fn classify<'w>(&self, words: impl IntoIterator<Item = &'w str>) -> Sentiment {
        let tokens: Vec<String> = words.into_iter().map(str::to_lowercase).collect();
        if tokens.is_empty() {
            return Sentiment::Neutro;
        }
        Sentiment::from_score(self.raw_score(&tokens) / tokens.len() as f64)
    }

    /// Pontuação acumulada, antes da normalização.
    pub fn raw_score(&self, tokens: &[String]) -> f64 {
        let lex = self.lexicon;
        let mut score = 0.0;

        for (i, token) in tokens.iter().enumerate() {
            let is_negation = lex.is_negation(token);
            let intensity = lex.intensity(token);
            let after_booster = i > 0 && lex.is_booster(&tokens[i - 1]);

            if lex.is_positive(token) {
                score += if is_negation { -intensity } else { intensity };
                if after_booster {
                    score += BOOSTER_BONUS;
                }
            } else if lex.is_negative(token) {
                score += if is_negation { intensity } else { -intensity };
                if after_booster {
                    score -= BOOSTER_BONUS;
                }
            }

            if let Some(next) = tokens.get(i + 1) {
                let bigram = format!("{token} {next}");
                if contains_any(&bigram, &lex.positive_bigrams) {
                    score += BIGRAM_WEIGHT;
                } else if contains_any(&bigram, &lex.negative_bigrams) {
                    score -= BIGRAM_WEIGHT;
                }
            }
        }

        score
    }
}

fn contains_any(haystack: &str, needles: &[String]) -> bool {
    needles.iter().any(|n| haystack.contains(n.as_str()))
}
