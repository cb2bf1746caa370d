//! # Motor de Regras: Gazetteers e Padrões
//!
//! Reconhecimento de entidades do anotador de referência. Não há modelo
//! estatístico aqui: listas de entidades conhecidas (gazetteers) e alguns
//! padrões de contexto do português.
//!
//! Ordem de aplicação (uma regra nunca sobrescreve um token já marcado):
//!
//! 1. Gazetteers multi-palavra: pessoas, organizações, locais, miscelânea.
//!    A primeira palavra precisa estar capitalizada ("Vale" é ORG, "vale a pena" não).
//! 2. Título: "presidente Luiz Inácio" → sequência capitalizada após o título é PER.
//! 3. Sufixo de organização: "Vale S.A." → sequência capitalizada antes do sufixo é ORG.

use crate::tagger::{EntityCategory, Tag};
use crate::tokenizer::{tokenize, Token};

/// Uma correspondência de regra: quais tokens foram marcados, com qual categoria
#[derive(Debug, Clone, PartialEq)]
pub struct RuleMatch {
    pub start_token: usize,
    /// Exclusivo
    pub end_token: usize,
    pub category: EntityCategory,
    pub rule_name: &'static str,
}

/// Conectores que podem aparecer dentro de nomes próprios ("Lula da Silva").
const NAME_CONNECTORS: &[&str] = &["da", "de", "do", "das", "dos", "e"];

/// Motor de regras com gazetteers e padrões
pub struct RuleEngine {
    /// (partes em minúsculas, categoria), ordenado do maior para o menor
    gazetteer: Vec<(Vec<String>, EntityCategory)>,
    /// Títulos que precedem nomes de pessoas
    person_titles: Vec<String>,
    /// Sufixos que indicam organização
    org_indicators: Vec<String>,
}

impl RuleEngine {
    /// Motor sem gazetteers, apenas com os padrões de título e sufixo.
    pub fn new() -> Self {
        Self {
            gazetteer: vec![],
            person_titles: [
                "presidente", "senador", "senadora", "deputado",
                "deputada", "ministro", "ministra", "governador", "governadora",
                "prefeito", "prefeita", "general", "capitão", "dr.", "dra.", "prof.",
                "profa.", "sr.", "sra.", "vereador", "vereadora", "secretário",
                "secretária", "diretor", "diretora", "ceo", "jogador", "jogadora",
                "técnico", "técnica", "atleta", "ator", "atriz", "cantor", "cantora",
                "escritor", "escritora",
            ].iter().map(|s| s.to_string()).collect(),
            org_indicators: ["s.a", "ltda", "eireli", "inc", "corp"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }

    /// Motor com os gazetteers brasileiros embutidos.
    pub fn with_builtin_gazetteers() -> Self {
        let mut engine = Self::new();
        for name in PERSONS {
            engine.add(name, EntityCategory::Per);
        }
        for name in ORGANIZATIONS {
            engine.add(name, EntityCategory::Org);
        }
        for name in LOCATIONS {
            engine.add(name, EntityCategory::Loc);
        }
        for name in MISC {
            engine.add(name, EntityCategory::Misc);
        }
        engine
    }

    /// Adiciona uma entrada ao gazetteer. O nome é tokenizado como o texto
    /// ("Covid-19" vira três partes).
    pub fn add(&mut self, name: &str, category: EntityCategory) {
        let parts: Vec<String> = tokenize(name).into_iter().map(|t| t.text.to_lowercase()).collect();
        if parts.is_empty() {
            return;
        }
        self.gazetteer.push((parts, category));
        // Estável: entre entradas do mesmo tamanho, a ordem de inserção decide
        self.gazetteer.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
    }

    /// Aplica todas as regras à sequência de tokens, devolvendo uma tag por token.
    pub fn apply(&self, tokens: &[Token]) -> Vec<Tag> {
        let mut tags = vec![Tag::Outside; tokens.len()];
        for m in self.matches(tokens) {
            tags[m.start_token] = Tag::Begin(m.category);
            for tag in &mut tags[m.start_token + 1..m.end_token] {
                *tag = Tag::Inside(m.category);
            }
        }
        tags
    }

    /// Lista as correspondências, sem sobreposição, na ordem em que as regras as encontraram.
    pub fn matches(&self, tokens: &[Token]) -> Vec<RuleMatch> {
        let lower: Vec<String> = tokens.iter().map(|t| t.text.to_lowercase()).collect();
        let mut taken = vec![false; tokens.len()];
        let mut found = Vec::new();

        // 1. Gazetteers (n-gramas, maior primeiro)
        let mut i = 0;
        'outer: while i < tokens.len() {
            if !taken[i] && is_capitalized(&tokens[i].text) {
                for (parts, category) in &self.gazetteer {
                    let end = i + parts.len();
                    if end <= tokens.len()
                        && !taken[i..end].iter().any(|t| *t)
                        && parts.iter().zip(&lower[i..end]).all(|(p, w)| p == w)
                    {
                        taken[i..end].iter_mut().for_each(|t| *t = true);
                        found.push(RuleMatch {
                            start_token: i,
                            end_token: end,
                            category: *category,
                            rule_name: "gazetteer",
                        });
                        i = end;
                        continue 'outer;
                    }
                }
            }
            i += 1;
        }

        // 2. Título: "presidente X Y" → X Y é PER
        for i in 0..tokens.len().saturating_sub(1) {
            if !self.person_titles.contains(&lower[i]) || taken[i + 1] {
                continue;
            }
            let end = capitalized_run_end(tokens, &taken, i + 1);
            if end > i + 1 {
                taken[i + 1..end].iter_mut().for_each(|t| *t = true);
                found.push(RuleMatch {
                    start_token: i + 1,
                    end_token: end,
                    category: EntityCategory::Per,
                    rule_name: "title_pattern",
                });
            }
        }

        // 3. Sufixo: "Vale S.A." → "Vale S.A." é ORG
        for i in 1..tokens.len() {
            if !self.org_indicators.contains(&lower[i]) || taken[i] || taken[i - 1] {
                continue;
            }
            let mut start = i;
            while start > 0 && !taken[start - 1] && is_capitalized(&tokens[start - 1].text) {
                start -= 1;
            }
            if start < i {
                taken[start..=i].iter_mut().for_each(|t| *t = true);
                found.push(RuleMatch {
                    start_token: start,
                    end_token: i + 1,
                    category: EntityCategory::Org,
                    rule_name: "org_suffix_pattern",
                });
            }
        }

        found.sort_by_key(|m| m.start_token);
        found
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::with_builtin_gazetteers()
    }
}

/// Fim (exclusivo) da sequência de palavras capitalizadas começando em `from`,
/// admitindo conectores ("da", "de") entre duas palavras capitalizadas.
fn capitalized_run_end(tokens: &[Token], taken: &[bool], from: usize) -> usize {
    let mut end = from;
    while end < tokens.len() && !taken[end] {
        if is_capitalized(&tokens[end].text) {
            end += 1;
        } else if end > from
            && NAME_CONNECTORS.contains(&tokens[end].text.as_str())
            && tokens.get(end + 1).map(|t| is_capitalized(&t.text)).unwrap_or(false)
            && !taken.get(end + 1).copied().unwrap_or(true)
        {
            end += 2;
        } else {
            break;
        }
    }
    end
}

fn is_capitalized(word: &str) -> bool {
    word.chars().next().map(char::is_uppercase).unwrap_or(false)
        && word.chars().any(char::is_alphabetic)
}

const PERSONS: &[&str] = &[
    "Luiz Inácio Lula da Silva", "Lula da Silva", "Lula", "Jair Bolsonaro",
    "Dilma Rousseff", "Fernando Haddad", "Geraldo Alckmin", "Simone Tebet",
    "Neymar", "Neymar Jr", "Pelé", "Marta Silva", "Rebeca Andrade",
    "Machado de Assis", "Clarice Lispector", "Anitta", "Gilberto Gil",
    "Fernanda Montenegro", "Santos Dumont", "Oscar Niemeyer",
];

const ORGANIZATIONS: &[&str] = &[
    "Petrobras", "Banco Central", "Banco do Brasil", "Caixa Econômica Federal",
    "Vale", "Embraer", "Itaú", "Bradesco", "Nubank", "Magazine Luiza",
    "Google", "Microsoft", "Apple", "Amazon", "Netflix", "Globo", "Rede Globo",
    "Supremo Tribunal Federal", "STF", "Senado Federal", "Câmara dos Deputados",
    "Congresso Nacional", "IBGE", "Anvisa", "Fiocruz", "Instituto Butantan",
    "Flamengo", "Corinthians", "Palmeiras", "CBF", "FIFA", "ONU",
];

const LOCATIONS: &[&str] = &[
    "Brasil", "São Paulo", "Rio de Janeiro", "Brasília", "Minas Gerais",
    "Bahia", "Pernambuco", "Amazônia", "Amazonas", "Belo Horizonte",
    "Porto Alegre", "Curitiba", "Recife", "Salvador", "Fortaleza", "Manaus",
    "Florianópolis", "Portugal", "Lisboa", "Argentina", "Estados Unidos",
    "China", "Europa", "América Latina",
];

const MISC: &[&str] = &[
    "Copa do Mundo", "Olimpíadas", "Covid-19", "Carnaval", "Lei Áurea",
    "Real Digital", "Pix",
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::tokenize;

    #[test]
    fn test_gazetteer_prefers_longest_entry() {
        let engine = RuleEngine::with_builtin_gazetteers();
        let tokens = tokenize("Lula da Silva visitou o Rio de Janeiro");
        let matches = engine.matches(&tokens);
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].category, EntityCategory::Per);
        assert_eq!((matches[0].start_token, matches[0].end_token), (0, 3));
        assert_eq!(matches[1].category, EntityCategory::Loc);
    }

    #[test]
    fn test_title_pattern_captures_full_name() {
        let engine = RuleEngine::new();
        let tokens = tokenize("a ministra Marina Silva anunciou medidas");
        let tags = engine.apply(&tokens);
        assert_eq!(tags[2], Tag::Begin(EntityCategory::Per));
        assert_eq!(tags[3], Tag::Inside(EntityCategory::Per));
        assert_eq!(tags[4], Tag::Outside);
    }

    #[test]
    fn test_title_pattern_with_connector() {
        let engine = RuleEngine::new();
        let tokens = tokenize("o escritor Machado de Assis nasceu");
        let matches = engine.matches(&tokens);
        assert_eq!(matches.len(), 1);
        assert_eq!((matches[0].start_token, matches[0].end_token), (2, 5));
    }

    #[test]
    fn test_org_suffix_pattern() {
        let engine = RuleEngine::new();
        let tokens = tokenize("a Construtora Horizonte S.A. faliu");
        let matches = engine.matches(&tokens);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].category, EntityCategory::Org);
        assert_eq!(matches[0].rule_name, "org_suffix_pattern");
        assert_eq!((matches[0].start_token, matches[0].end_token), (1, 4));
    }

    #[test]
    fn test_lowercase_words_are_not_entities() {
        let engine = RuleEngine::with_builtin_gazetteers();
        let tokens = tokenize("o aplicativo está lento e trava constantemente");
        assert!(engine.matches(&tokens).is_empty());
    }

    #[test]
    fn test_hyphenated_gazetteer_entry() {
        let engine = RuleEngine::with_builtin_gazetteers();
        let tokens = tokenize("A Covid-19 mudou tudo");
        let matches = engine.matches(&tokens);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].category, EntityCategory::Misc);
        assert_eq!((matches[0].start_token, matches[0].end_token), (1, 4));
    }
}
