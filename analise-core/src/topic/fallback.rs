//! # Fallback por Palavras-Chave
//!
//! Para cada tópico, a pontuação é a fração da sua lista de palavras-chave
//! que aparece como **substring** do texto em minúsculas. Entradas repetidas
//! na lista contam a cada ocorrência. As duas melhores pontuações positivas
//! são multiplicadas por 0.7, refletindo confiança menor que a do modelo
//! estatístico. Sem nenhum acerto, devolve um par padrão fixo.

use super::{top_k, Topic, TopicPrediction, TopicStrategy};
use crate::error::ClassifierError;

const CONFIDENCE_SCALE: f64 = 0.7;

const POLITICA: &[&str] = &[
    "governo", "presidente", "ministro", "eleições", "congresso", "lei", "política", "partido",
    "senado", "prefeito", "voto",
];
const ESPORTES: &[&str] = &[
    "time", "jogo", "campeonato", "atleta", "futebol", "esporte", "jogador", "gol", "estádio",
    "torcida", "competição",
];
const TECNOLOGIA: &[&str] = &[
    "tecnologia", "smartphone", "app", "digital", "software", "computador", "internet", "dados",
    "aplicativo", "celular",
];
const ECONOMIA: &[&str] = &[
    "economia", "inflação", "dólar", "bolsa", "mercado", "finanças", "investimento", "preços",
    "dinheiro", "banco",
];
const ENTRETENIMENTO: &[&str] = &[
    "filme", "série", "música", "show", "ator", "cinema", "artista", "livro", "festival",
    "música", "espetáculo",
];

/// Estratégia determinística de sobreposição de palavras-chave.
#[derive(Debug, Clone)]
pub struct KeywordTopicModel {
    keywords: Vec<(Topic, Vec<String>)>,
}

impl KeywordTopicModel {
    /// Resposta quando nenhum tópico pontua.
    pub fn default_pair() -> Vec<TopicPrediction> {
        vec![
            TopicPrediction::new(Topic::Tecnologia, 0.2),
            TopicPrediction::new(Topic::Economia, 0.15),
        ]
    }

    pub fn with_keywords(keywords: Vec<(Topic, Vec<String>)>) -> Self {
        Self { keywords }
    }

    /// Pontuação bruta em [0, 1] de cada tópico, na ordem das listas.
    pub fn scores(&self, text: &str) -> Vec<(Topic, f64)> {
        let lowered = text.to_lowercase();
        self.keywords
            .iter()
            .filter(|(_, words)| !words.is_empty())
            .map(|(topic, words)| {
                let hits = words.iter().filter(|w| lowered.contains(w.as_str())).count();
                (*topic, hits as f64 / words.len() as f64)
            })
            .collect()
    }

    /// Versão infalível de [`TopicStrategy::predict`].
    pub fn rank(&self, text: &str) -> Vec<TopicPrediction> {
        let ranked: Vec<TopicPrediction> = top_k(self.scores(text))
            .into_iter()
            .filter(|(_, score)| *score > 0.0)
            .map(|(topic, score)| TopicPrediction::new(topic, score * CONFIDENCE_SCALE))
            .collect();
        if ranked.is_empty() {
            Self::default_pair()
        } else {
            ranked
        }
    }
}

impl Default for KeywordTopicModel {
    fn default() -> Self {
        let lists = [POLITICA, ESPORTES, TECNOLOGIA, ECONOMIA, ENTRETENIMENTO];
        Self::with_keywords(
            Topic::ALL
                .into_iter()
                .zip(lists)
                .map(|(topic, words)| (topic, words.iter().map(|w| w.to_string()).collect()))
                .collect(),
        )
    }
}

impl TopicStrategy for KeywordTopicModel {
    fn predict(&self, text: &str) -> Result<Vec<TopicPrediction>, ClassifierError> {
        Ok(self.rank(text))
    }
}
