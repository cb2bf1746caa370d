//! Lista de stopwords do Português Brasileiro.

use std::collections::HashSet;
use std::sync::LazyLock;

const STOPWORDS: &[&str] = &[
    "a", "à", "ao", "aos", "aquela", "aquelas", "aquele", "aqueles", "aquilo",
    "as", "às", "até", "bem", "boa", "bom", "cada", "com", "como", "contra",
    "da", "das", "de", "dela", "delas", "dele", "deles", "demais", "depois",
    "desde", "dessa", "dessas", "desse", "desses", "desta", "destas", "deste",
    "destes", "deve", "do", "dos", "e", "é", "ela", "elas", "ele", "eles", "em",
    "entre", "era", "eram", "essa", "essas", "esse", "esses", "esta", "está",
    "estamos", "estão", "estas", "estava", "estavam", "este", "estes", "estou",
    "eu", "foi", "foram", "há", "isso", "isto", "já", "la", "lá", "lhe",
    "lhes", "mais", "mas", "me", "mesma", "mesmas", "mesmo", "mesmos", "meu",
    "meus", "minha", "minhas", "muita", "muitas", "muito", "muitos", "na",
    "nas", "nem", "no", "nos", "nós", "nossa", "nossas", "nosso", "nossos",
    "num", "numa", "não", "nunca", "o", "os", "ou", "para", "pela", "pelas",
    "pelo", "pelos", "pode", "podem", "por", "porque", "pouco", "qual",
    "quando", "que", "quem", "se", "sem", "ser", "seu", "seus", "só", "sob",
    "sobre", "sua", "suas", "também", "tem", "têm", "tenho", "ter", "teu",
    "tua", "tudo", "um", "uma", "umas", "uns", "vai", "vão", "você", "vocês",
    "vos",
];

static STOPWORD_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| STOPWORDS.iter().copied().collect());

/// Verifica se a palavra é stopword (sem distinção de maiúsculas).
pub fn is_stopword(word: &str) -> bool {
    STOPWORD_SET.contains(word.to_lowercase().as_str())
}
