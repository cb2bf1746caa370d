//! # Legibilidade (índice de Flesch adaptado ao português)
//!
//! ```text
//! índice = 180 − (palavras / frases) − 58.5 × (sílabas / palavras)
//! ```
//!
//! As constantes 180 e 58.5 são a calibração empírica da adaptação brasileira
//! do índice de Flesch e não devem ser alteradas.
//!
//! | Índice      | Nível                               |
//! |-------------|-------------------------------------|
//! | ≥ 80        | Muito fácil (Educação fundamental)  |
//! | [60, 80)    | Fácil (Ensino médio)                |
//! | [40, 60)    | Médio (Ensino superior)             |
//! | [20, 40)    | Difícil (Graduação)                 |
//! | < 20        | Muito difícil (Pós-graduação)       |
//!
//! Textos com menos de 10 palavras alfabéticas ou sem nenhuma frase não são
//! avaliados.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::syllable::count_syllables;

const BASE: f64 = 180.0;
const SYLLABLE_WEIGHT: f64 = 58.5;

/// Número mínimo de palavras para calcular o índice.
pub const MIN_WORDS: usize = 10;

/// Nível de legibilidade, em ordem decrescente de facilidade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ReadabilityLevel {
    MuitoFacil,
    Facil,
    Medio,
    Dificil,
    MuitoDificil,
    /// Texto curto demais para avaliar.
    TooShort,
}

impl ReadabilityLevel {
    /// As cinco faixas avaliáveis, da mais fácil para a mais difícil.
    pub const BANDS: [ReadabilityLevel; 5] = [
        ReadabilityLevel::MuitoFacil,
        ReadabilityLevel::Facil,
        ReadabilityLevel::Medio,
        ReadabilityLevel::Dificil,
        ReadabilityLevel::MuitoDificil,
    ];

    /// Faixa correspondente a um índice.
    pub fn from_index(index: f64) -> Self {
        if index >= 80.0 {
            ReadabilityLevel::MuitoFacil
        } else if index >= 60.0 {
            ReadabilityLevel::Facil
        } else if index >= 40.0 {
            ReadabilityLevel::Medio
        } else if index >= 20.0 {
            ReadabilityLevel::Dificil
        } else {
            ReadabilityLevel::MuitoDificil
        }
    }

    /// Rótulo completo, como é persistido e exibido.
    pub fn label(&self) -> &'static str {
        match self {
            ReadabilityLevel::MuitoFacil => "Muito fácil (Educação fundamental)",
            ReadabilityLevel::Facil => "Fácil (Ensino médio)",
            ReadabilityLevel::Medio => "Médio (Ensino superior)",
            ReadabilityLevel::Dificil => "Difícil (Graduação)",
            ReadabilityLevel::MuitoDificil => "Muito difícil (Pós-graduação)",
            ReadabilityLevel::TooShort => "Curto demais para avaliar.",
        }
    }

    /// Nome curto da faixa ("Fácil", "Médio", ...).
    pub fn band_name(&self) -> Option<&'static str> {
        match self {
            ReadabilityLevel::MuitoFacil => Some("Muito fácil"),
            ReadabilityLevel::Facil => Some("Fácil"),
            ReadabilityLevel::Medio => Some("Médio"),
            ReadabilityLevel::Dificil => Some("Difícil"),
            ReadabilityLevel::MuitoDificil => Some("Muito difícil"),
            ReadabilityLevel::TooShort => None,
        }
    }

    pub fn is_evaluated(&self) -> bool {
        *self != ReadabilityLevel::TooShort
    }
}

impl fmt::Display for ReadabilityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for ReadabilityLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Índice numérico, sem checar as pré-condições.
pub fn flesch_index(words: usize, sentences: usize, syllables: usize) -> f64 {
    let words_per_sentence = words as f64 / sentences as f64;
    let syllables_per_word = syllables as f64 / words as f64;
    BASE - words_per_sentence - SYLLABLE_WEIGHT * syllables_per_word
}

/// Estima o nível de legibilidade a partir das palavras alfabéticas e do número de frases.
pub fn estimate<'w>(words: impl IntoIterator<Item = &'w str>, sentence_count: usize) -> ReadabilityLevel {
    let words: Vec<&str> = words.into_iter().collect();
    if sentence_count < 1 || words.len() < MIN_WORDS {
        return ReadabilityLevel::TooShort;
    }
    let syllables: usize = words.iter().map(|w| count_syllables(w)).sum();
    ReadabilityLevel::from_index(flesch_index(words.len(), sentence_count, syllables))
}
