//! # analise-core: Análise de Textos em Português Brasileiro
//!
//! A partir de um texto livre, o crate deriva um conjunto de sinais:
//! polaridade de sentimento, palavra dominante, entidades nomeadas, nível de
//! legibilidade e os tópicos mais prováveis.
//!
//! ## Arquitetura
//!
//! 1.  **Validação** ([`pipeline`]): limites de tamanho sobre o texto aparado.
//! 2.  **Anotação** ([`annotator`]): um [`Annotator`] produz tokens, frases e
//!     menções de entidade. O crate traz o [`RuleAnnotator`], baseado em
//!     [`tokenizer`] e [`rule_based`].
//! 3.  **Sinais** derivados da mesma anotação:
//!     *   [`sentiment`]: pontuação por léxico ([`lexicon`]) com negação,
//!         intensificadores e bigramas.
//!     *   [`keyword`]: forma de superfície mais frequente.
//!     *   [`entities`]: só PER (com 2+ palavras), ORG e LOC.
//!     *   [`readability`]: índice de Flesch adaptado, sobre [`syllable`].
//! 4.  **Tópicos** ([`topic`]), independente do orquestrador: TF-IDF + Naive
//!     Bayes treinado sob demanda, com fallback por palavras-chave.
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use analise_core::{Sentiment, TextAnalyzer, TopicClassifier};
//!
//! let analyzer = TextAnalyzer::default();
//! let result = analyzer
//!     .analyze("Este software é excelente e muito fácil de usar!")
//!     .unwrap();
//! assert_eq!(result.sentimento, Sentiment::Positivo);
//!
//! let topics = TopicClassifier::new();
//! let outcome = topics.predict("O time venceu o campeonato de futebol");
//! for p in outcome.predictions() {
//!     println!("{}: {:.3}", p.topico, p.confianca);
//! }
//! ```

pub mod annotator;
pub mod config;
pub mod entities;
pub mod error;
pub mod keyword;
pub mod lexicon;
pub mod pipeline;
pub mod readability;
pub mod rule_based;
pub mod sentiment;
pub mod stopwords;
pub mod syllable;
pub mod tagger;
pub mod tokenizer;
pub mod topic;

pub use annotator::{AnnotatedToken, Annotation, Annotator, EntityMention, RuleAnnotator};
pub use config::AnalyzerConfig;
pub use entities::{Entity, EntityType};
pub use error::{AnalysisError, AnnotatorError, ClassifierError, ConfigError, ValidationError};
pub use lexicon::Lexicon;
pub use pipeline::{AnalysisResult, TextAnalyzer};
pub use readability::ReadabilityLevel;
pub use sentiment::Sentiment;
pub use topic::{Topic, TopicClassifier, TopicOutcome, TopicPrediction, TopicStrategy};
