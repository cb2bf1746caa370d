//! # Anotador Linguístico
//!
//! O pipeline não tokeniza nem reconhece entidades por conta própria: ele consome
//! a saída de um [`Annotator`]. O contrato é mínimo:
//!
//! - tokens em ordem, cada um com a forma de superfície, se é alfabético e se é stopword;
//! - sentenças em ordem (intervalos de bytes);
//! - menções de entidade com o texto e o rótulo nativo do anotador
//!   (ex: `PER`, `ORG`, `LOC`, `MISC`). O [`crate::entities`] decide o que fica.
//!
//! [`RuleAnnotator`] é a implementação de referência embutida: tokenizador
//! Unicode, lista de stopwords e motor de regras com gazetteers. Qualquer outro
//! anotador (um modelo externo, um serviço) pode ser plugado implementando o trait.

use serde::{Deserialize, Serialize};

use crate::error::AnnotatorError;
use crate::rule_based::RuleEngine;
use crate::stopwords::is_stopword;
use crate::tagger::tokens_to_spans;
use crate::tokenizer::{split_sentences, tokenize};

pub use crate::tokenizer::SentenceSpan;

/// Um token anotado.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedToken {
    pub text: String,
    /// Todos os caracteres são alfabéticos.
    pub is_alpha: bool,
    pub is_stop: bool,
}

impl AnnotatedToken {
    /// Constrói o token calculando as flags a partir do texto.
    pub fn from_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let is_alpha = !text.is_empty() && text.chars().all(char::is_alphabetic);
        let is_stop = is_stopword(&text);
        Self { text, is_alpha, is_stop }
    }
}

/// Uma menção de entidade como o anotador a reconheceu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityMention {
    pub text: String,
    /// Rótulo nativo do anotador.
    pub label: String,
}

/// Saída completa de uma anotação.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub tokens: Vec<AnnotatedToken>,
    pub sentences: Vec<SentenceSpan>,
    pub entities: Vec<EntityMention>,
}

impl Annotation {
    /// Iterador sobre as formas de superfície dos tokens alfabéticos.
    pub fn alpha_words(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().filter(|t| t.is_alpha).map(|t| t.text.as_str())
    }
}

/// Colaborador que transforma texto bruto em uma [`Annotation`].
///
/// Implementações devem ser seguras para uso concorrente: o mesmo anotador é
/// compartilhado por todas as análises em andamento.
pub trait Annotator: Send + Sync {
    fn annotate(&self, text: &str) -> Result<Annotation, AnnotatorError>;
}

/// Anotador de referência baseado em regras.
pub struct RuleAnnotator {
    rules: RuleEngine,
}

impl RuleAnnotator {
    pub fn new() -> Self {
        Self {
            rules: RuleEngine::with_builtin_gazetteers(),
        }
    }

    /// Usa um motor de regras configurado pelo chamador.
    pub fn with_rules(rules: RuleEngine) -> Self {
        Self { rules }
    }
}

impl Default for RuleAnnotator {
    fn default() -> Self {
        Self::new()
    }
}

impl Annotator for RuleAnnotator {
    fn annotate(&self, text: &str) -> Result<Annotation, AnnotatorError> {
        let tokens = tokenize(text);
        let sentences = split_sentences(&tokens);
        let tags = self.rules.apply(&tokens);
        let entities = tokens_to_spans(&tokens, &tags, text)
            .into_iter()
            .map(|span| EntityMention {
                text: span.text,
                label: span.category.name().to_string(),
            })
            .collect();

        Ok(Annotation {
            tokens: tokens
                .into_iter()
                .map(|t| AnnotatedToken::from_text(t.text))
                .collect(),
            sentences,
            entities,
        })
    }
}
