//! # Contagem de Sílabas em Português
//!
//! Heurística por varredura da esquerda para a direita:
//!
//! 1. Tritongo (`uai`, `uão`, ...) conta uma sílaba e avança 3 caracteres.
//! 2. Ditongo (`ai`, `ão`, `ue`, ...) conta uma sílaba e avança 2.
//! 3. Vogal isolada (acentuada ou não) conta uma sílaba.
//! 4. Consoantes só avançam.
//!
//! Não é uma divisão silábica gramatical: hiatos como "saúde" contam como
//! ditongo quando a combinação está na lista. O objetivo é alimentar o índice
//! de legibilidade, não hifenizar.
//!
//! Vogais acentuadas pré-compostas (`á`, `ã`, `õ`) são mantidas como estão e
//! participam dos ditongos nasais (`ão`, `õe`). Em texto decomposto (NFD), as
//! marcas combinantes não são alfabéticas e caem na limpeza inicial, restando
//! a vogal base.

const VOWELS: &str = "aeiouáéíóúâêîôûàèìòùãõ";

const DIPHTHONGS: &[&str] = &[
    "ai", "au", "ei", "eu", "oi", "ou", "ui", "ãe", "ão", "õe", "ae", "ao", "ia", "ie",
    "io", "iu", "ua", "ue", "uo", "uã", "uõ",
];

const TRIPHTHONGS: &[&str] = &["uai", "uei", "uão", "uãe", "uõe"];

fn is_vowel(c: char) -> bool {
    VOWELS.contains(c)
}

fn matches_cluster(chars: &[char], at: usize, len: usize, clusters: &[&str]) -> bool {
    if at + len > chars.len() {
        return false;
    }
    let window: String = chars[at..at + len].iter().collect();
    clusters.contains(&window.as_str())
}

/// Conta as sílabas de uma palavra.
///
/// Retorna 0 se a palavra não tiver nenhum caractere alfabético; caso
/// contrário, sempre pelo menos 1.
pub fn count_syllables(word: &str) -> usize {
    let chars: Vec<char> = word
        .chars()
        .filter(|c| c.is_alphabetic())
        .flat_map(char::to_lowercase)
        .collect();

    if chars.is_empty() {
        return 0;
    }

    let mut syllables = 0;
    let mut i = 0;
    while i < chars.len() {
        if matches_cluster(&chars, i, 3, TRIPHTHONGS) {
            syllables += 1;
            i += 3;
            continue;
        }
        if matches_cluster(&chars, i, 2, DIPHTHONGS) {
            syllables += 1;
            i += 2;
            continue;
        }
        if is_vowel(chars[i]) {
            syllables += 1;
        }
        i += 1;
    }

    syllables.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_words() {
        assert_eq!(count_syllables("casa"), 2);
        assert_eq!(count_syllables("sol"), 1);
        assert_eq!(count_syllables("paralelepípedo"), 7);
    }

    #[test]
    fn test_diphthongs() {
        assert_eq!(count_syllables("pai"), 1);
        assert_eq!(count_syllables("coração"), 3);
        assert_eq!(count_syllables("põe"), 1);
        assert_eq!(count_syllables("saudade"), 3);
    }

    #[test]
    fn test_triphthongs() {
        assert_eq!(count_syllables("Uruguai"), 3);
        assert_eq!(count_syllables("saguão"), 2);
    }

    #[test]
    fn test_strips_non_alphabetic_and_case() {
        assert_eq!(count_syllables("Casa!"), 2);
        assert_eq!(count_syllables("123"), 0);
        assert_eq!(count_syllables(""), 0);
    }

    #[test]
    fn test_no_vowel_is_one() {
        assert_eq!(count_syllables("pfff"), 1);
        assert_eq!(count_syllables("CPF"), 1);
    }

    #[test]
    fn test_decomposed_accent_keeps_base_vowel() {
        // "ã" decomposto = 'a' + U+0303
        assert_eq!(count_syllables("ma\u{303}e"), count_syllables("mae"));
    }

    #[test]
    fn test_every_alphabetic_word_has_a_syllable() {
        for word in ["a", "x", "ônibus", "rítmico", "psicólogo", "útil", "qüinqüênio"] {
            assert!(count_syllables(word) >= 1, "{word}");
        }
    }
}
