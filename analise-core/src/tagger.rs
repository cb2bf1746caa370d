//! # Esquema de Tags BIO e Tipos de Entidade
//!
//! Define o esquema de anotação **BIO** (Beginning-Inside-Outside) usado pelo
//! anotador de referência para marcar entidades token a token, e a conversão
//! da sequência de tags em menções completas.
//!
//! Categorias: `PER` (Lula da Silva), `ORG` (Petrobras), `LOC` (Recife) e
//! `MISC` (Copa do Mundo). Tokens fora de entidade recebem `O`.

use serde::{Deserialize, Serialize};

use crate::tokenizer::Token;

/// Categorias de entidade que o anotador de referência emite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityCategory {
    Per,
    Org,
    Loc,
    /// Eventos, doenças, obras. O filtro de entidades descarta esta categoria.
    Misc,
}

impl EntityCategory {
    /// Rótulo nativo do anotador.
    pub fn name(&self) -> &'static str {
        match self {
            EntityCategory::Per => "PER",
            EntityCategory::Org => "ORG",
            EntityCategory::Loc => "LOC",
            EntityCategory::Misc => "MISC",
        }
    }
}

/// Tag BIO de um token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tag {
    Begin(EntityCategory),
    Inside(EntityCategory),
    Outside,
}

/// Uma entidade reconstruída a partir das tags BIO.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntitySpan {
    pub text: String,
    pub category: EntityCategory,
    /// Intervalo de bytes no texto, `[start, end)`.
    pub start: usize,
    pub end: usize,
}

/// Agrupa `B` seguido de `I` da mesma categoria em uma menção.
/// `I` isolado ou de outra categoria não abre menção.
pub fn tokens_to_spans(tokens: &[Token], tags: &[Tag], original_text: &str) -> Vec<EntitySpan> {
    let mut spans = Vec::new();
    let mut i = 0;

    while i < tokens.len().min(tags.len()) {
        if let Tag::Begin(cat) = tags[i] {
            let start_byte = tokens[i].start;
            let mut end_byte = tokens[i].end;

            let mut j = i + 1;
            while j < tokens.len().min(tags.len()) && tags[j] == Tag::Inside(cat) {
                end_byte = tokens[j].end;
                j += 1;
            }

            spans.push(EntitySpan {
                text: original_text[start_byte..end_byte].trim().to_string(),
                category: cat,
                start: start_byte,
                end: end_byte,
            });
            i = j;
        } else {
            i += 1;
        }
    }

    spans
}
