//! Limites de entrada do orquestrador.

use serde::{Deserialize, Serialize};

/// Limites de tamanho do texto, em caracteres, após remover espaços das bordas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    pub min_chars: usize,
    pub max_chars: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            min_chars: 10,
            max_chars: 20_000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let cfg: AnalyzerConfig = serde_json::from_str(r#"{"max_chars": 500}"#).unwrap();
        assert_eq!(cfg.min_chars, 10);
        assert_eq!(cfg.max_chars, 500);
    }
}
