//! Corpus de treino embutido: 10 frases curtas por tópico.

use super::Topic;

/// Frases de treino, agrupadas por tópico na ordem canônica.
pub const TRAINING_DOCS: [(&str, Topic); 50] = [
    ("governo medidas econômicas inflação presidente", Topic::Politica),
    ("presidente líderes internacionais acordos comerciais", Topic::Politica),
    ("congresso lei reforma tributária impostos", Topic::Politica),
    ("ministro justiça criminalidade segurança pública", Topic::Politica),
    ("eleições municipais votos candidatos", Topic::Politica),
    ("partido oposição políticas sociais", Topic::Politica),
    ("lei ambiental meio ambiente senado", Topic::Politica),
    ("prefeitos infraestrutura obras cidade", Topic::Politica),
    ("candidatos educação escolas públicas", Topic::Politica),
    ("reforma previdência aposentadoria", Topic::Politica),
    ("time jogo campeonato futebol esporte", Topic::Esportes),
    ("atleta medalha ouro olimpíadas competição", Topic::Esportes),
    ("jogador futebol transferência contrato", Topic::Esportes),
    ("seleção copa mundo futebol nacional", Topic::Esportes),
    ("estádio torcida jogo público", Topic::Esportes),
    ("campeonato basquete equipes jogadores", Topic::Esportes),
    ("atleta recorde mundial esporte", Topic::Esportes),
    ("time vôlei feminino esporte", Topic::Esportes),
    ("jogador lesão recuperação tratamento", Topic::Esportes),
    ("clube técnico treinador esportes", Topic::Esportes),
    ("tecnologia smartphone aplicativo digital", Topic::Tecnologia),
    ("empresa inteligência artificial software", Topic::Tecnologia),
    ("startup aplicativo pagamentos digital", Topic::Tecnologia),
    ("conferência tecnologia inovações", Topic::Tecnologia),
    ("cibersegurança segurança digital hackers", Topic::Tecnologia),
    ("sistema operacional computador software", Topic::Tecnologia),
    ("robótica robôs automação indústria", Topic::Tecnologia),
    ("realidade virtual jogos simulação", Topic::Tecnologia),
    ("plataforma streaming vídeo online", Topic::Tecnologia),
    ("carros autônomos inteligentes direção", Topic::Tecnologia),
    ("bolsa valores ações mercado financeiro", Topic::Economia),
    ("banco central juros inflação", Topic::Economia),
    ("inflação preços aumento custo vida", Topic::Economia),
    ("empresas exportadoras comércio exterior", Topic::Economia),
    ("moeda dólar câmbio cambio", Topic::Economia),
    ("mercado imobiliário imóveis casas", Topic::Economia),
    ("setor industrial fábricas produção", Topic::Economia),
    ("desemprego emprego trabalho vagas", Topic::Economia),
    ("comércio eletrônico loja online", Topic::Economia),
    ("investimentos infraestrutura obras", Topic::Economia),
    ("filme cinema diretor atores", Topic::Entretenimento),
    ("série TV episódios streaming", Topic::Entretenimento),
    ("cantor música álbum show", Topic::Entretenimento),
    ("festival música bandas público", Topic::Entretenimento),
    ("ator atriz papel personagem", Topic::Entretenimento),
    ("novela televisão capítulo história", Topic::Entretenimento),
    ("youtuber vídeo internet canal", Topic::Entretenimento),
    ("show comédia humor risos", Topic::Entretenimento),
    ("livro leitura autor editora", Topic::Entretenimento),
    ("influenciadores redes sociais internet", Topic::Entretenimento),
];

/// Textos e rótulos separados, no formato esperado pelo treino.
pub fn training_set() -> (Vec<&'static str>, Vec<Topic>) {
    TRAINING_DOCS.iter().copied().unzip()
}
