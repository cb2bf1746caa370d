//! # Orquestrador da Análise de Texto
//!
//! Valida a entrada, chama o [`Annotator`] **uma única vez** e deriva da mesma
//! anotação todos os sinais do [`AnalysisResult`]:
//!
//! 1. Sentimento ([`crate::sentiment`]) sobre os tokens alfabéticos.
//! 2. Palavra mais frequente ([`crate::keyword`]).
//! 3. Entidades PER/ORG/LOC ([`crate::entities`]).
//! 4. Nível de legibilidade ([`crate::readability`]).
//! 5. Contagens de palavras, caracteres e frases.
//!
//! A validação usa o texto sem espaços nas bordas. Texto rejeitado nunca chega
//! ao anotador.

use std::sync::{Arc, LazyLock};

use rayon::prelude::*;
use regex::Regex;
use serde::Serialize;

use crate::annotator::{Annotator, RuleAnnotator};
use crate::config::AnalyzerConfig;
use crate::entities::{filter_entities, Entity};
use crate::error::{AnalysisError, ValidationError};
use crate::keyword::most_frequent_word;
use crate::lexicon::Lexicon;
use crate::readability::{self, ReadabilityLevel};
use crate::sentiment::{Sentiment, SentimentScorer};

static WORD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w+\b").expect("padrão de palavra válido"));

/// Resultado de uma análise. Os nomes dos campos são o contrato de saída.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub texto_original: String,
    pub sentimento: Sentiment,
    pub palavra_mais_frequente: String,
    pub entidades: Vec<Entity>,
    pub lvl_legibilidade: ReadabilityLevel,
    pub cont_palavras: usize,
    pub cont_caracteres: usize,
    pub cont_frases: usize,
}

/// Orquestrador. Barato de compartilhar: anotador e léxico ficam atrás de `Arc`.
#[derive(Clone)]
pub struct TextAnalyzer {
    annotator: Arc<dyn Annotator>,
    lexicon: Arc<Lexicon>,
    config: AnalyzerConfig,
}

impl TextAnalyzer {
    pub fn new(annotator: Arc<dyn Annotator>, lexicon: Arc<Lexicon>) -> Self {
        Self {
            annotator,
            lexicon,
            config: AnalyzerConfig::default(),
        }
    }

    pub fn with_config(mut self, config: AnalyzerConfig) -> Self {
        self.config = config;
        self
    }

    /// Checa os limites de tamanho e devolve o texto aparado.
    pub fn validate<'t>(&self, text: &'t str) -> Result<&'t str, ValidationError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty);
        }
        let len = trimmed.chars().count();
        if len < self.config.min_chars {
            return Err(ValidationError::TooShort);
        }
        if len > self.config.max_chars {
            return Err(ValidationError::TooLong);
        }
        Ok(trimmed)
    }

    pub fn analyze(&self, text: &str) -> Result<AnalysisResult, AnalysisError> {
        let trimmed = self.validate(text)?;
        let annotation = self.annotator.annotate(trimmed)?;

        let sentimento = SentimentScorer::new(&self.lexicon).classify(annotation.alpha_words());
        let palavra_mais_frequente = most_frequent_word(&annotation.tokens);
        let entidades = filter_entities(&annotation.entities);
        let cont_frases = annotation.sentences.len();
        let lvl_legibilidade = readability::estimate(annotation.alpha_words(), cont_frases);

        Ok(AnalysisResult {
            texto_original: text.to_string(),
            sentimento,
            palavra_mais_frequente,
            entidades,
            lvl_legibilidade,
            cont_palavras: WORD_PATTERN.find_iter(trimmed).count(),
            cont_caracteres: trimmed.chars().count(),
            cont_frases,
        })
    }

    /// Analisa vários textos em paralelo. A saída segue a ordem da entrada.
    pub fn analyze_batch<S: AsRef<str> + Sync>(&self, texts: &[S]) -> Vec<Result<AnalysisResult, AnalysisError>> {
        texts.par_iter().map(|t| self.analyze(t.as_ref())).collect()
    }
}

impl Default for TextAnalyzer {
    fn default() -> Self {
        Self::new(Arc::new(RuleAnnotator::new()), Arc::new(Lexicon::portuguese()))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::annotator::{AnnotatedToken, Annotation, EntityMention, SentenceSpan};
    use crate::entities::EntityType;
    use crate::error::AnnotatorError;
    use crate::keyword::NO_SIGNIFICANT_WORD;

    /// Anotador roteirizado que conta as chamadas.
    struct Scripted {
        calls: AtomicUsize,
        response: Result<Annotation, AnnotatorError>,
    }

    impl Scripted {
        fn new(response: Result<Annotation, AnnotatorError>) -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                response,
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl Annotator for Scripted {
        fn annotate(&self, _text: &str) -> Result<Annotation, AnnotatorError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.response.clone()
        }
    }

    fn analyzer() -> TextAnalyzer {
        TextAnalyzer::default()
    }

    #[test]
    fn test_negative_text() {
        let result = analyzer()
            .analyze("O aplicativo está lento e trava constantemente.")
            .unwrap();
        assert_eq!(result.sentimento, Sentiment::Negativo);
        assert_eq!(result.cont_frases, 1);
        assert_eq!(result.cont_palavras, 7);
        assert_eq!(result.lvl_legibilidade, ReadabilityLevel::TooShort);
    }

    #[test]
    fn test_positive_text() {
        let result = analyzer()
            .analyze("Este software é excelente e muito fácil de usar!")
            .unwrap();
        assert_eq!(result.sentimento, Sentiment::Positivo);
        assert_eq!(result.cont_caracteres, 48);
    }

    #[test]
    fn test_hyphenated_clitic_still_scores() {
        // Recomendo, o, sem, dúvida: +1 / 4
        let result = analyzer().analyze("Recomendo-o sem dúvida.").unwrap();
        assert_eq!(result.sentimento, Sentiment::Positivo);
    }

    #[test]
    fn test_unit_abbreviation_ends_sentence() {
        let result = analyzer()
            .analyze("Corri 10 km. Depois descansei bastante em casa.")
            .unwrap();
        assert_eq!(result.cont_frases, 2);
    }

    #[test]
    fn test_length_limits() {
        let a = analyzer();
        assert_eq!(a.analyze("ab").unwrap_err(), AnalysisError::Validation(ValidationError::TooShort));
        assert_eq!(a.analyze("   \n\t ").unwrap_err(), AnalysisError::Validation(ValidationError::Empty));
        assert_eq!(a.analyze("").unwrap_err(), AnalysisError::Validation(ValidationError::Empty));
        assert!(a.analyze("abcdefghij").is_ok());
        assert!(a.analyze(&"a".repeat(20_000)).is_ok());
        assert_eq!(
            a.analyze(&"a".repeat(20_001)).unwrap_err(),
            AnalysisError::Validation(ValidationError::TooLong)
        );
    }

    #[test]
    fn test_length_counts_trimmed_chars() {
        let a = analyzer();
        // 9 caracteres úteis, bordas não contam
        assert_eq!(a.validate("   coração!!   "), Err(ValidationError::TooShort));
        assert_eq!(a.validate("  ação e reação "), Ok("ação e reação"));
    }

    #[test]
    fn test_simple_text_is_easy() {
        let text = "O gato come a ração e dorme no sol da casa com a mãe dele. \
                    O menino lê um livro e a menina faz um bolo de uva no lar.";
        let result = analyzer().analyze(text).unwrap();
        assert_eq!(result.cont_palavras, 30);
        assert_eq!(result.cont_frases, 2);
        assert!(matches!(
            result.lvl_legibilidade,
            ReadabilityLevel::MuitoFacil | ReadabilityLevel::Facil
        ));
    }

    #[test]
    fn test_entities_filtered() {
        let result = analyzer()
            .analyze("O presidente Lula da Silva visitou a Petrobras. Depois foi ao Recife!")
            .unwrap();
        let got: Vec<(&str, EntityType)> = result
            .entidades
            .iter()
            .map(|e| (e.texto.as_str(), e.tipo))
            .collect();
        assert_eq!(
            got,
            vec![
                ("Lula da Silva", EntityType::Per),
                ("Petrobras", EntityType::Org),
                ("Recife", EntityType::Loc),
            ]
        );
    }

    #[test]
    fn test_idempotent() {
        let a = analyzer();
        let text = "A Petrobras anunciou resultados ótimos. O mercado reagiu bem!";
        assert_eq!(a.analyze(text).unwrap(), a.analyze(text).unwrap());
    }

    #[test]
    fn test_annotator_called_once_per_analysis() {
        let annotation = Annotation {
            tokens: ["Brasil", "Brasil", "ganhou"]
                .into_iter()
                .map(AnnotatedToken::from_text)
                .collect(),
            sentences: vec![SentenceSpan { start: 0, end: 3 }],
            entities: vec![
                EntityMention { text: "Brasil".into(), label: "LOC".into() },
                EntityMention { text: "Pelé".into(), label: "PER".into() },
                EntityMention { text: "2022".into(), label: "DATE".into() },
            ],
        };
        let scripted = Scripted::new(Ok(annotation));
        let a = TextAnalyzer::new(scripted.clone(), Arc::new(Lexicon::portuguese()));

        let result = a.analyze("Brasil Brasil ganhou").unwrap();
        assert_eq!(scripted.calls(), 1);
        assert_eq!(result.palavra_mais_frequente, "Brasil");
        assert_eq!(result.entidades.len(), 1);
        assert_eq!(result.cont_frases, 1);

        assert!(a.analyze("curto").is_err());
        assert_eq!(scripted.calls(), 1);
    }

    #[test]
    fn test_annotator_failure_propagates() {
        let scripted = Scripted::new(Err(AnnotatorError("modelo ausente".into())));
        let a = TextAnalyzer::new(scripted.clone(), Arc::new(Lexicon::portuguese()));
        assert_eq!(
            a.analyze("um texto qualquer").unwrap_err(),
            AnalysisError::Annotator(AnnotatorError("modelo ausente".into()))
        );
    }

    #[test]
    fn test_empty_annotation_defaults() {
        let scripted = Scripted::new(Ok(Annotation::default()));
        let a = TextAnalyzer::new(scripted, Arc::new(Lexicon::portuguese()));
        let result = a.analyze("1234567890").unwrap();
        assert_eq!(result.sentimento, Sentiment::Neutro);
        assert_eq!(result.palavra_mais_frequente, NO_SIGNIFICANT_WORD);
        assert_eq!(result.lvl_legibilidade, ReadabilityLevel::TooShort);
        assert_eq!(result.cont_frases, 0);
        assert_eq!(result.cont_palavras, 1);
    }

    #[test]
    fn test_custom_limits() {
        let a = analyzer().with_config(AnalyzerConfig { min_chars: 2, max_chars: 5 });
        assert!(a.validate("ab").is_ok());
        assert_eq!(a.validate("abcdef"), Err(ValidationError::TooLong));
    }

    #[test]
    fn test_batch_keeps_order() {
        let texts = vec![
            "Este software é excelente e muito fácil de usar!",
            "ab",
            "O aplicativo está lento e trava constantemente.",
        ];
        let results = analyzer().analyze_batch(&texts);
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_ref().unwrap().sentimento, Sentiment::Positivo);
        assert!(results[1].is_err());
        assert_eq!(results[2].as_ref().unwrap().sentimento, Sentiment::Negativo);
    }

    #[test]
    fn test_serialized_field_names() {
        let result = analyzer().analyze("Ana Maria mora em Lisboa.").unwrap();
        let json = serde_json::to_value(&result).unwrap();
        for field in [
            "texto_original",
            "sentimento",
            "palavra_mais_frequente",
            "entidades",
            "lvl_legibilidade",
            "cont_palavras",
            "cont_caracteres",
            "cont_frases",
        ] {
            assert!(json.get(field).is_some(), "{field}");
        }
        assert_eq!(json["sentimento"], "Neutro");
        assert_eq!(json["lvl_legibilidade"], "Curto demais para avaliar.");
    }
}
