//! # Tokenizador e Segmentador de Sentenças para Português Brasileiro
//!
//! Divide o texto bruto em tokens (palavras, números, pontuação) preservando
//! a posição original de cada um, e agrupa os tokens em sentenças.
//!
//! A segmentação base usa as fronteiras de palavra do Unicode (UAX #29), que já
//! mantêm juntos números como `1.234,56` e contrações como `d'água`. O hífen é
//! um token próprio: `Recomendo-o` vira `Recomendo`, `-`, `o`, e o verbo
//! continua sendo uma palavra alfabética.
//!
//! Único ajuste para o português: um título abreviado seguido de nome
//! (`Dr. Silva`, `Sra. Ana`) fica num só token, e esse ponto não encerra a
//! sentença. Unidades e outras abreviações (`km.`, `etc.`) não são tratadas:
//! o ponto delas termina a frase.
//!
//! ```rust
//! use analise_core::tokenizer::{tokenize, split_sentences};
//!
//! let text = "O Dr. Silva chegou. Saiu cedo!";
//! let tokens = tokenize(text);
//! assert_eq!(tokens[1].text, "Dr.");
//! assert_eq!(split_sentences(&tokens).len(), 2);
//! ```

use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

/// Um token extraído do texto original.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Token {
    /// O texto do token (ex: "Lula", ",", "presidente").
    pub text: String,
    /// Índice de byte inicial no texto original (inclusive).
    pub start: usize,
    /// Índice de byte final no texto original (exclusivo).
    pub end: usize,
    /// Índice sequencial do token na lista (0, 1, 2...).
    pub index: usize,
}

/// Intervalo de bytes de uma sentença no texto original.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SentenceSpan {
    pub start: usize,
    pub end: usize,
}

/// Títulos abreviados que precedem nomes próprios.
const TITLE_ABBREVIATIONS: &[&str] = &[
    "Dr", "Dra", "Sr", "Sra", "Srta", "Prof", "Profa", "Gov", "Dep", "Sen",
    "Gen", "Cap", "Sgt", "Cel", "Brig", "Des", "Pres", "Eng", "Arq",
];

const SENTENCE_TERMINATORS: &[&str] = &[".", "!", "?", "…"];

/// Tokeniza um texto.
pub fn tokenize(text: &str) -> Vec<Token> {
    let pieces: Vec<(usize, &str)> = text
        .split_word_bound_indices()
        .filter(|(_, piece)| !piece.trim().is_empty())
        .collect();

    let mut tokens: Vec<Token> = Vec::with_capacity(pieces.len());
    let mut i = 0;

    while i < pieces.len() {
        let (start, piece) = pieces[i];
        let end = start + piece.len();

        // "Dr" + "." + "Silva" → "Dr." "Silva"
        if piece == "." {
            if let Some(last) = tokens.last_mut() {
                let before_name = pieces
                    .get(i + 1)
                    .map(|(_, next)| starts_uppercase(next))
                    .unwrap_or(false);
                if last.end == start && before_name && TITLE_ABBREVIATIONS.contains(&last.text.as_str()) {
                    last.text.push('.');
                    last.end = end;
                    i += 1;
                    continue;
                }
            }
        }

        tokens.push(Token {
            text: piece.to_string(),
            start,
            end,
            index: 0,
        });
        i += 1;
    }

    // Re-indexa os tokens
    for (i, token) in tokens.iter_mut().enumerate() {
        token.index = i;
    }
    tokens
}

/// Agrupa tokens em sentenças.
///
/// Uma sentença termina no último de uma sequência de terminadores (`.`, `!`,
/// `?`, `…`). Texto residual sem terminador forma a última sentença.
pub fn split_sentences(tokens: &[Token]) -> Vec<SentenceSpan> {
    let mut sentences = Vec::new();
    let mut open: Option<usize> = None;

    for (i, token) in tokens.iter().enumerate() {
        let start = *open.get_or_insert(token.start);
        let closes = is_terminator(&token.text)
            && !tokens.get(i + 1).map(|t| is_terminator(&t.text)).unwrap_or(false);
        if closes {
            sentences.push(SentenceSpan { start, end: token.end });
            open = None;
        }
    }

    if let (Some(start), Some(last)) = (open, tokens.last()) {
        sentences.push(SentenceSpan { start, end: last.end });
    }

    sentences
}

fn is_terminator(text: &str) -> bool {
    SENTENCE_TERMINATORS.contains(&text)
}

fn starts_uppercase(s: &str) -> bool {
    s.chars().next().map(char::is_uppercase).unwrap_or(false)
}
