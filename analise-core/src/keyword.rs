//! Palavra mais frequente do texto.

use std::collections::HashMap;

use crate::annotator::AnnotatedToken;

/// Valor devolvido quando nenhum token se qualifica.
pub const NO_SIGNIFICANT_WORD: &str = "Nenhuma palavra significativa encontrada.";

/// Tamanho mínimo (exclusivo, em caracteres) de uma palavra significativa.
const MIN_WORD_CHARS: usize = 2;

/// Retorna a forma de superfície mais frequente entre os tokens alfabéticos,
/// que não são stopwords e têm mais de dois caracteres.
///
/// Empates ficam com a palavra vista primeiro. Maiúsculas são preservadas:
/// "Sistema" e "sistema" são contadas separadamente.
pub fn most_frequent_word(tokens: &[AnnotatedToken]) -> String {
    let mut order: Vec<(&str, usize)> = Vec::new();
    let mut position: HashMap<&str, usize> = HashMap::new();

    for token in tokens {
        if !token.is_alpha || token.is_stop || token.text.chars().count() <= MIN_WORD_CHARS {
            continue;
        }
        match position.get(token.text.as_str()) {
            Some(&idx) => order[idx].1 += 1,
            None => {
                position.insert(token.text.as_str(), order.len());
                order.push((token.text.as_str(), 1));
            }
        }
    }

    let mut best: Option<(&str, usize)> = None;
    for &(word, count) in &order {
        if best.map(|(_, c)| count > c).unwrap_or(true) {
            best = Some((word, count));
        }
    }

    best.map(|(word, _)| word.to_string())
        .unwrap_or_else(|| NO_SIGNIFICANT_WORD.to_string())
}
