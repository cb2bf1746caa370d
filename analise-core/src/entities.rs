//! Filtro de entidades: só pessoas, organizações e locais chegam ao resultado.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::annotator::EntityMention;

/// Tipo de entidade aceito no resultado.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityType {
    #[serde(rename = "PER")]
    Per,
    #[serde(rename = "ORG")]
    Org,
    #[serde(rename = "LOC")]
    Loc,
}

impl EntityType {
    /// Converte o rótulo do anotador. Qualquer outro rótulo é `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "PER" => Some(EntityType::Per),
            "ORG" => Some(EntityType::Org),
            "LOC" => Some(EntityType::Loc),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityType::Per => "PER",
            EntityType::Org => "ORG",
            EntityType::Loc => "LOC",
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Entidade nomeada no resultado da análise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub texto: String,
    pub tipo: EntityType,
}

/// Mantém PER, ORG e LOC na ordem do anotador.
///
/// Pessoas com uma única palavra ("Lula", "Ana") são descartadas como ruído.
pub fn filter_entities(mentions: &[EntityMention]) -> Vec<Entity> {
    mentions
        .iter()
        .filter_map(|m| {
            let tipo = EntityType::from_label(&m.label)?;
            if tipo == EntityType::Per && m.text.split_whitespace().count() < 2 {
                return None;
            }
            Some(Entity {
                texto: m.text.clone(),
                tipo,
            })
        })
        .collect()
}
