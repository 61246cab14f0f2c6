//! The alias map: which source keys feed each canonical field.
//!
//! Every prompt version the generator has shipped named things a little
//! differently (`legenda` / `texto` / `copy`, `slides` / `cards`, wrapper
//! objects such as `devocional.reflexao`). This module is the single table of
//! those names. Normalizers never spell a source key themselves; they ask for
//! a canonical field and the table supplies the candidates in priority order.
//!
//! Invariants, checked by the tests below:
//!
//! - the first candidate of a field is the field's own canonical name, so a
//!   canonical record normalizes to itself
//! - no candidate names another canonical field of the same scope, nor a
//!   dotted path rooted at one
//!
//! Candidates may be dotted paths (`conteudo.legenda`) into wrapper objects.

use std::collections::HashMap;
use std::sync::LazyLock;

use kerygma_core::ContentTypeId;

/// Nested shapes shared between content types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeId {
    /// Verses, context, and timeless principle.
    FundamentoBiblico,
    /// Titled block of text.
    Secao,
    /// Carousel slide.
    Slide,
    /// Video scene.
    Cena,
    /// Single story frame.
    TelaStory,
    /// Question with its answer.
    PerguntaResposta,
    /// Multiple-choice question.
    QuestaoQuiz,
    /// One day of a weekly challenge.
    DiaDesafio,
    /// One editorial calendar slot.
    EntradaCalendario,
    /// One day of a reading plan.
    LeituraDia,
    /// Podcast segment.
    BlocoPodcast,
    /// Song in a set list.
    Musica,
}

impl ShapeId {
    /// Every shape.
    pub const ALL: [ShapeId; 12] = [
        Self::FundamentoBiblico,
        Self::Secao,
        Self::Slide,
        Self::Cena,
        Self::TelaStory,
        Self::PerguntaResposta,
        Self::QuestaoQuiz,
        Self::DiaDesafio,
        Self::EntradaCalendario,
        Self::LeituraDia,
        Self::BlocoPodcast,
        Self::Musica,
    ];
}

/// What an alias list belongs to: a content type or a shared shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Scope {
    /// Top-level fields of a content type.
    Type(ContentTypeId),
    /// Fields of a nested shape.
    Shape(ShapeId),
}

/// Ordered source-key candidates for one canonical field.
#[derive(Clone, Copy, Debug)]
pub struct FieldAliases {
    /// Canonical field name.
    pub field: &'static str,
    /// Candidates in priority order; the first is always `field`.
    pub aliases: &'static [&'static str],
}

const fn field(field: &'static str, aliases: &'static [&'static str]) -> FieldAliases {
    FieldAliases { field, aliases }
}

// ============================================================================
// Reused candidate lists
// ============================================================================

const TITULO: &[&str] = &["titulo", "title", "headline", "tema", "nome"];
const HASHTAGS: &[&str] = &["hashtags", "conteudo.hashtags", "tags", "hashtag"];
const CTA: &[&str] = &[
    "cta",
    "chamada_acao",
    "chamada_para_acao",
    "call_to_action",
    "conteudo.cta",
];
const FUNDAMENTO: &[&str] = &[
    "fundamento_biblico",
    "fundamentacao_biblica",
    "base_biblica",
    "fundamento",
    "conteudo.fundamento_biblico",
];

// ============================================================================
// Shapes
// ============================================================================

const FUNDAMENTO_BIBLICO_FIELDS: &[FieldAliases] = &[
    field(
        "versiculos",
        &[
            "versiculos",
            "versiculos_base",
            "versiculo",
            "referencias",
            "referencia",
            "versos",
            "textos_biblicos",
            "passagens",
        ],
    ),
    field(
        "contexto",
        &["contexto", "contexto_historico", "contexto_biblico", "explicacao"],
    ),
    field(
        "principio_atemporal",
        &[
            "principio_atemporal",
            "principio",
            "verdade_central",
            "licao",
            "aplicacao_atemporal",
        ],
    ),
];

const SECAO_FIELDS: &[FieldAliases] = &[
    field(
        "titulo",
        &["titulo", "title", "nome", "topico", "subtitulo", "ponto"],
    ),
    field(
        "conteudo",
        &[
            "conteudo",
            "texto",
            "descricao",
            "content",
            "text",
            "explicacao",
            "desenvolvimento",
            "resumo",
        ],
    ),
];

const SLIDE_FIELDS: &[FieldAliases] = &[
    field(
        "titulo",
        &["titulo", "title", "headline", "chamada", "cabecalho"],
    ),
    field(
        "texto",
        &[
            "texto",
            "conteudo",
            "text",
            "corpo",
            "descricao",
            "mensagem",
            "frase",
        ],
    ),
    field(
        "sugestao_visual",
        &[
            "sugestao_visual",
            "visual",
            "imagem",
            "descricao_imagem",
            "design",
        ],
    ),
];

const CENA_FIELDS: &[FieldAliases] = &[
    field(
        "tempo",
        &["tempo", "duracao", "timestamp", "momento", "segundos"],
    ),
    field(
        "visual",
        &["visual", "cena", "imagem", "descricao_visual", "enquadramento"],
    ),
    field(
        "fala",
        &["fala", "narracao", "locucao", "audio", "texto", "roteiro"],
    ),
    field(
        "texto_tela",
        &[
            "texto_tela",
            "texto_na_tela",
            "overlay",
            "legenda_tela",
            "legenda",
        ],
    ),
];

const TELA_STORY_FIELDS: &[FieldAliases] = &[
    field(
        "texto",
        &["texto", "conteudo", "mensagem", "frase", "text"],
    ),
    field(
        "interacao",
        &["interacao", "enquete", "sticker", "acao", "pergunta"],
    ),
    field(
        "sugestao_visual",
        &["sugestao_visual", "visual", "imagem", "fundo"],
    ),
];

const PERGUNTA_RESPOSTA_FIELDS: &[FieldAliases] = &[
    field("pergunta", &["pergunta", "question", "q", "titulo"]),
    field(
        "resposta",
        &["resposta", "answer", "a", "explicacao", "texto"],
    ),
    field(
        "referencia",
        &["referencia", "versiculo", "base_biblica", "referencias"],
    ),
];

const QUESTAO_QUIZ_FIELDS: &[FieldAliases] = &[
    field(
        "pergunta",
        &["pergunta", "question", "enunciado", "titulo"],
    ),
    field(
        "alternativas",
        &["alternativas", "opcoes", "options", "respostas"],
    ),
    field(
        "resposta_correta",
        &[
            "resposta_correta",
            "correta",
            "gabarito",
            "resposta",
            "answer",
        ],
    ),
    field(
        "explicacao",
        &["explicacao", "comentario", "justificativa", "referencia"],
    ),
];

const DIA_DESAFIO_FIELDS: &[FieldAliases] = &[
    field("dia", &["dia", "day", "numero", "data"]),
    field(
        "desafio",
        &[
            "desafio",
            "tarefa",
            "acao",
            "atividade",
            "descricao",
            "texto",
        ],
    ),
    field(
        "versiculo",
        &["versiculo", "referencia", "base_biblica"],
    ),
];

const ENTRADA_CALENDARIO_FIELDS: &[FieldAliases] = &[
    field("dia", &["dia", "data", "day", "dia_semana"]),
    field(
        "formato",
        &["formato", "tipo", "tipo_conteudo", "canal"],
    ),
    field("tema", &["tema", "titulo", "assunto", "title"]),
    field(
        "descricao",
        &["descricao", "objetivo", "detalhes", "legenda", "texto"],
    ),
];

const LEITURA_DIA_FIELDS: &[FieldAliases] = &[
    field("dia", &["dia", "day", "numero", "data"]),
    field(
        "leitura",
        &[
            "leitura",
            "passagem",
            "referencia",
            "texto_biblico",
            "capitulos",
        ],
    ),
    field(
        "reflexao",
        &["reflexao", "devocional", "comentario", "pergunta"],
    ),
];

const BLOCO_PODCAST_FIELDS: &[FieldAliases] = &[
    field("titulo", &["titulo", "title", "nome", "segmento"]),
    field(
        "conteudo",
        &["conteudo", "texto", "fala", "roteiro", "descricao", "pontos"],
    ),
    field("duracao", &["duracao", "tempo", "minutos"]),
];

const MUSICA_FIELDS: &[FieldAliases] = &[
    field(
        "titulo",
        &["titulo", "nome", "musica", "title", "cancao"],
    ),
    field(
        "artista",
        &["artista", "ministerio", "autor", "banda", "interprete"],
    ),
    field("momento", &["momento", "parte", "uso", "quando"]),
];

// ============================================================================
// Content types
// ============================================================================

const POST_FIELDS: &[FieldAliases] = &[
    field(
        "titulo",
        &["titulo", "title", "headline", "conteudo.titulo", "tema"],
    ),
    field(
        "legenda",
        &[
            "legenda",
            "texto",
            "copy",
            "caption",
            "conteudo.legenda",
            "conteudo.texto",
            "conteudo.copy",
            "mensagem",
            "conteudo",
        ],
    ),
    field("hashtags", HASHTAGS),
    field("cta", CTA),
    field("fundamento_biblico", FUNDAMENTO),
];

const CARROSSEL_FIELDS: &[FieldAliases] = &[
    field(
        "titulo",
        &[
            "titulo",
            "title",
            "headline",
            "carrossel.titulo",
            "conteudo.titulo",
            "tema",
        ],
    ),
    field(
        "slides",
        &[
            "slides",
            "carrossel.slides",
            "conteudo.slides",
            "carrossel",
            "cards",
            "paginas",
            "telas",
        ],
    ),
    field(
        "legenda",
        &[
            "legenda",
            "caption",
            "copy",
            "texto",
            "carrossel.legenda",
            "conteudo.legenda",
        ],
    ),
    field("hashtags", HASHTAGS),
    field("cta", CTA),
    field("fundamento_biblico", FUNDAMENTO),
];

const REEL_FIELDS: &[FieldAliases] = &[
    field(
        "titulo",
        &[
            "titulo",
            "title",
            "roteiro_video.titulo",
            "headline",
            "tema",
        ],
    ),
    field(
        "gancho",
        &[
            "gancho",
            "hook",
            "gancho_inicial",
            "roteiro_video.gancho",
            "abertura",
        ],
    ),
    field(
        "roteiro",
        &[
            "roteiro",
            "script",
            "roteiro_completo",
            "roteiro_video.roteiro",
            "narracao",
            "texto",
        ],
    ),
    field(
        "cenas",
        &[
            "cenas",
            "roteiro_video.cenas",
            "roteiro_reels",
            "conteudo.cenas",
            "takes",
            "estrutura",
            "roteiro_video",
        ],
    ),
    field(
        "legenda",
        &[
            "legenda",
            "caption",
            "roteiro_video.legenda",
            "descricao_post",
            "copy",
        ],
    ),
    field("hashtags", HASHTAGS),
    field("cta", CTA),
    field("fundamento_biblico", FUNDAMENTO),
];

const STORIES_FIELDS: &[FieldAliases] = &[
    field("titulo", TITULO),
    field(
        "telas",
        &[
            "telas",
            "stories",
            "sequencia",
            "sequencia_stories",
            "slides",
            "frames",
        ],
    ),
    field("cta", CTA),
];

const DEVOCIONAL_FIELDS: &[FieldAliases] = &[
    field(
        "titulo",
        &["titulo", "title", "devocional.titulo", "tema"],
    ),
    field(
        "versiculo",
        &[
            "versiculo",
            "versiculo_chave",
            "versiculo_do_dia",
            "devocional.versiculo",
            "referencia",
            "texto_base",
        ],
    ),
    field(
        "reflexao",
        &[
            "reflexao",
            "devocional.reflexao",
            "meditacao",
            "mensagem",
            "texto",
            "devocional.texto",
        ],
    ),
    field(
        "aplicacao",
        &[
            "aplicacao",
            "aplicacao_pratica",
            "devocional.aplicacao",
            "pratica",
        ],
    ),
    field(
        "oracao",
        &["oracao", "devocional.oracao", "oracao_final", "prayer"],
    ),
    field(
        "fundamento_biblico",
        &[
            "fundamento_biblico",
            "devocional.fundamento_biblico",
            "fundamentacao_biblica",
            "base_biblica",
            "fundamento",
        ],
    ),
];

const ESTUDO_FIELDS: &[FieldAliases] = &[
    field(
        "titulo",
        &[
            "titulo",
            "title",
            "estudo_biblico.titulo",
            "estudo.titulo",
            "tema",
        ],
    ),
    field(
        "introducao",
        &[
            "introducao",
            "estudo_biblico.introducao",
            "estudo.introducao",
            "abertura",
            "contexto_inicial",
        ],
    ),
    field(
        "topicos",
        &[
            "topicos",
            "estudo_biblico.topicos",
            "estudo.topicos",
            "pontos",
            "secoes",
            "desenvolvimento",
        ],
    ),
    field(
        "perguntas_discussao",
        &[
            "perguntas_discussao",
            "perguntas_para_discussao",
            "perguntas_reflexao",
            "estudo_biblico.perguntas",
            "estudo.perguntas",
            "perguntas",
        ],
    ),
    field(
        "conclusao",
        &[
            "conclusao",
            "estudo_biblico.conclusao",
            "estudo.conclusao",
            "encerramento",
        ],
    ),
    field(
        "fundamento_biblico",
        &[
            "fundamento_biblico",
            "estudo_biblico.fundamento_biblico",
            "estudo.fundamento_biblico",
            "fundamentacao_biblica",
            "base_biblica",
            "fundamento",
        ],
    ),
];

const ESBOCO_FIELDS: &[FieldAliases] = &[
    field("titulo", &["titulo", "title", "esboco.titulo", "tema"]),
    field(
        "introducao",
        &["introducao", "esboco.introducao", "abertura"],
    ),
    field(
        "topicos",
        &[
            "topicos",
            "esboco.topicos",
            "esboco.pontos",
            "pontos",
            "divisoes",
            "esboco",
        ],
    ),
    field("conclusao", &["conclusao", "esboco.conclusao"]),
    field(
        "apelo",
        &["apelo", "esboco.apelo", "chamado", "convite_final"],
    ),
    field(
        "fundamento_biblico",
        &[
            "fundamento_biblico",
            "esboco.fundamento_biblico",
            "fundamentacao_biblica",
            "base_biblica",
            "fundamento",
        ],
    ),
];

const RESUMO_PREGACAO_FIELDS: &[FieldAliases] = &[
    field(
        "titulo",
        &[
            "titulo",
            "title",
            "resumo_pregacao.titulo",
            "titulo_pregacao",
            "tema",
        ],
    ),
    field(
        "resumo",
        &[
            "resumo",
            "resumo_pregacao.resumo",
            "resumo_pregacao",
            "sintese",
            "resumo_geral",
        ],
    ),
    field(
        "pontos_principais",
        &[
            "pontos_principais",
            "resumo_pregacao.pontos_principais",
            "pontos_chave",
            "pontos",
            "topicos",
        ],
    ),
    field(
        "aplicacao",
        &[
            "aplicacao",
            "resumo_pregacao.aplicacao",
            "aplicacao_pratica",
        ],
    ),
    field("fundamento_biblico", FUNDAMENTO),
];

const PACK_SEMANAL_FIELDS: &[FieldAliases] = &[
    field(
        "resumo_pregacao",
        &["resumo_pregacao", "resumo", "resumo_sermao"],
    ),
    field(
        "versiculos_base",
        &["versiculos_base", "versiculos", "versiculos_chave"],
    ),
    field(
        "legendas_instagram",
        &[
            "legendas_instagram",
            "legendas",
            "posts_instagram",
            "captions",
        ],
    ),
    field(
        "frases_impacto",
        &[
            "frases_impacto",
            "frases_impactantes",
            "frases",
            "citacoes",
        ],
    ),
    field(
        "ideias_stories",
        &["ideias_stories", "sugestoes_stories", "stories"],
    ),
    field("hashtags", HASHTAGS),
    field("fundamento_biblico", FUNDAMENTO),
];

const FRASES_IMPACTO_FIELDS: &[FieldAliases] = &[
    field("titulo", TITULO),
    field(
        "frases",
        &[
            "frases",
            "frases_impacto",
            "frases_impactantes",
            "frases_de_impacto",
            "citacoes",
            "quotes",
        ],
    ),
    field("contexto", &["contexto", "origem", "pregacao", "resumo"]),
];

const CONVITE_FIELDS: &[FieldAliases] = &[
    field(
        "titulo",
        &["titulo", "title", "convite.titulo", "chamada", "headline"],
    ),
    field(
        "evento",
        &["evento", "convite.evento", "nome_evento", "event"],
    ),
    field(
        "data",
        &["data", "convite.data", "quando", "date", "dia"],
    ),
    field(
        "horario",
        &["horario", "convite.horario", "hora", "horarios", "time"],
    ),
    field(
        "local",
        &["local", "convite.local", "endereco", "onde", "location"],
    ),
    field(
        "descricao",
        &[
            "descricao",
            "convite.descricao",
            "convite.texto",
            "detalhes",
            "texto",
            "mensagem",
        ],
    ),
    field(
        "cta",
        &[
            "cta",
            "convite.cta",
            "chamada_acao",
            "chamada_para_acao",
            "call_to_action",
            "inscricao",
        ],
    ),
];

const AVISO_FIELDS: &[FieldAliases] = &[
    field(
        "titulo",
        &["titulo", "title", "aviso.titulo", "assunto"],
    ),
    field(
        "mensagem",
        &[
            "mensagem",
            "aviso.mensagem",
            "aviso.texto",
            "texto",
            "conteudo",
            "descricao",
            "aviso",
        ],
    ),
    field("data", &["data", "aviso.data", "quando", "prazo"]),
    field(
        "publico",
        &["publico", "publico_alvo", "aviso.publico", "destinatarios"],
    ),
    field("cta", CTA),
];

const GUIA_FIELDS: &[FieldAliases] = &[
    field("titulo", &["titulo", "title", "guia.titulo", "tema"]),
    field(
        "introducao",
        &["introducao", "guia.introducao", "objetivo", "resumo"],
    ),
    field(
        "passos",
        &[
            "passos",
            "guia.passos",
            "etapas",
            "passo_a_passo",
            "instrucoes",
        ],
    ),
    field(
        "dicas",
        &["dicas", "guia.dicas", "observacoes", "recomendacoes"],
    ),
    field(
        "conclusao",
        &["conclusao", "guia.conclusao", "encerramento"],
    ),
];

const CALENDARIO_FIELDS: &[FieldAliases] = &[
    field(
        "titulo",
        &[
            "titulo",
            "title",
            "calendario_editorial.titulo",
            "tema",
            "nome",
        ],
    ),
    field(
        "periodo",
        &[
            "periodo",
            "calendario_editorial.periodo",
            "mes",
            "semana",
            "intervalo",
        ],
    ),
    field(
        "entradas",
        &[
            "entradas",
            "calendario_editorial.entradas",
            "calendario_editorial.posts",
            "calendario_editorial.dias",
            "calendario_editorial.publicacoes",
            "calendario_editorial",
            "calendario",
            "publicacoes",
            "posts",
            "dias",
        ],
    ),
];

const DESAFIO_SEMANAL_FIELDS: &[FieldAliases] = &[
    field(
        "titulo",
        &[
            "titulo",
            "title",
            "desafio_semanal.titulo",
            "tema",
            "nome",
        ],
    ),
    field(
        "objetivo",
        &[
            "objetivo",
            "desafio_semanal.objetivo",
            "proposito",
            "descricao",
        ],
    ),
    field(
        "dias",
        &[
            "dias",
            "desafio_semanal.dias",
            "desafio_semanal.desafios",
            "desafios",
            "desafios_diarios",
            "cronograma",
            "desafio_semanal",
        ],
    ),
    field(
        "recompensa",
        &[
            "recompensa",
            "desafio_semanal.recompensa",
            "premio",
            "resultado",
        ],
    ),
    field(
        "hashtags",
        &["hashtags", "desafio_semanal.hashtags", "tags", "hashtag"],
    ),
    field(
        "fundamento_biblico",
        &[
            "fundamento_biblico",
            "desafio_semanal.fundamento_biblico",
            "fundamentacao_biblica",
            "base_biblica",
            "fundamento",
        ],
    ),
];

const QA_ESTRUTURADO_FIELDS: &[FieldAliases] = &[
    field(
        "titulo",
        &["titulo", "title", "qa_estruturado.titulo", "tema"],
    ),
    field(
        "perguntas",
        &[
            "perguntas",
            "perguntas_respostas",
            "perguntas_e_respostas",
            "qa_estruturado.perguntas",
            "qa_estruturado",
            "qa",
            "faq",
            "itens",
        ],
    ),
    field("fundamento_biblico", FUNDAMENTO),
];

const QUIZ_FIELDS: &[FieldAliases] = &[
    field("titulo", &["titulo", "title", "quiz.titulo", "tema"]),
    field(
        "questoes",
        &[
            "questoes",
            "quiz.questoes",
            "quiz.perguntas",
            "perguntas",
            "quiz",
        ],
    ),
];

const PLANO_LEITURA_FIELDS: &[FieldAliases] = &[
    field(
        "titulo",
        &[
            "titulo",
            "title",
            "plano_leitura.titulo",
            "tema",
            "nome",
        ],
    ),
    field(
        "duracao",
        &[
            "duracao",
            "plano_leitura.duracao",
            "periodo",
            "total_dias",
        ],
    ),
    field(
        "dias",
        &[
            "dias",
            "plano_leitura.dias",
            "plano_leitura.leituras",
            "leituras",
            "cronograma",
            "plano_leitura",
        ],
    ),
];

const ORACAO_FIELDS: &[FieldAliases] = &[
    field("titulo", TITULO),
    field(
        "intencao",
        &["intencao", "motivo", "proposito", "pedido"],
    ),
    field(
        "oracao",
        &["oracao", "prayer", "texto", "conteudo", "mensagem"],
    ),
    field(
        "versiculo",
        &[
            "versiculo",
            "referencia",
            "versiculo_base",
            "fundamento_biblico.versiculos",
        ],
    ),
];

const TESTEMUNHO_FIELDS: &[FieldAliases] = &[
    field("titulo", TITULO),
    field(
        "historia",
        &["historia", "testemunho", "relato", "texto", "conteudo"],
    ),
    field(
        "reflexao",
        &["reflexao", "licao", "aplicacao", "mensagem"],
    ),
    field(
        "versiculo",
        &["versiculo", "referencia", "versiculo_base"],
    ),
];

const ROTEIRO_PODCAST_FIELDS: &[FieldAliases] = &[
    field(
        "titulo",
        &[
            "titulo",
            "title",
            "roteiro_podcast.titulo",
            "nome_episodio",
            "tema",
        ],
    ),
    field(
        "introducao",
        &[
            "introducao",
            "roteiro_podcast.introducao",
            "abertura",
            "vinheta",
        ],
    ),
    field(
        "blocos",
        &[
            "blocos",
            "roteiro_podcast.blocos",
            "roteiro_podcast.segmentos",
            "segmentos",
            "partes",
            "topicos",
        ],
    ),
    field(
        "encerramento",
        &[
            "encerramento",
            "roteiro_podcast.encerramento",
            "conclusao",
            "fechamento",
        ],
    ),
];

const ARTIGO_BLOG_FIELDS: &[FieldAliases] = &[
    field(
        "titulo",
        &["titulo", "title", "artigo.titulo", "headline"],
    ),
    field(
        "subtitulo",
        &["subtitulo", "artigo.subtitulo", "linha_fina", "subtitle"],
    ),
    field(
        "introducao",
        &["introducao", "artigo.introducao", "lead", "abertura"],
    ),
    field(
        "secoes",
        &[
            "secoes",
            "artigo.secoes",
            "artigo.corpo",
            "corpo",
            "topicos",
            "desenvolvimento",
        ],
    ),
    field(
        "conclusao",
        &["conclusao", "artigo.conclusao", "fechamento"],
    ),
    field(
        "palavras_chave",
        &[
            "palavras_chave",
            "artigo.palavras_chave",
            "seo.palavras_chave",
            "keywords",
            "tags",
        ],
    ),
];

const EMAIL_FIELDS: &[FieldAliases] = &[
    field(
        "assunto",
        &["assunto", "subject", "linha_assunto", "titulo"],
    ),
    field("saudacao", &["saudacao", "abertura", "greeting"]),
    field(
        "corpo",
        &["corpo", "texto", "mensagem", "conteudo", "body"],
    ),
    field("cta", CTA),
    field(
        "assinatura",
        &["assinatura", "despedida", "signature"],
    ),
];

const MENSAGEM_WHATSAPP_FIELDS: &[FieldAliases] = &[
    field(
        "mensagem",
        &[
            "mensagem",
            "mensagem_whatsapp.mensagem",
            "mensagem_whatsapp",
            "texto",
            "conteudo",
        ],
    ),
    field(
        "variacoes",
        &[
            "variacoes",
            "mensagem_whatsapp.variacoes",
            "versoes",
            "alternativas",
        ],
    ),
    field("cta", CTA),
];

const DINAMICA_CELULA_FIELDS: &[FieldAliases] = &[
    field(
        "titulo",
        &["titulo", "title", "dinamica.titulo", "nome", "tema"],
    ),
    field(
        "objetivo",
        &["objetivo", "dinamica.objetivo", "proposito"],
    ),
    field(
        "materiais",
        &["materiais", "dinamica.materiais", "material", "recursos"],
    ),
    field(
        "passos",
        &[
            "passos",
            "dinamica.passos",
            "dinamica.instrucoes",
            "etapas",
            "como_fazer",
            "instrucoes",
        ],
    ),
    field(
        "reflexao",
        &[
            "reflexao",
            "dinamica.reflexao",
            "aplicacao",
            "licao",
            "fechamento",
        ],
    ),
];

const IDEIA_ESTRATEGICA_FIELDS: &[FieldAliases] = &[
    field(
        "titulo",
        &[
            "titulo",
            "title",
            "ideia_estrategica.titulo",
            "nome",
            "tema",
        ],
    ),
    field(
        "problema",
        &[
            "problema",
            "ideia_estrategica.problema",
            "desafio",
            "contexto",
        ],
    ),
    field(
        "estrategia",
        &[
            "estrategia",
            "ideia_estrategica.estrategia",
            "ideia",
            "solucao",
            "descricao",
        ],
    ),
    field(
        "acoes",
        &[
            "acoes",
            "ideia_estrategica.acoes",
            "proximos_passos",
            "passos",
            "etapas",
        ],
    ),
    field(
        "resultado_esperado",
        &[
            "resultado_esperado",
            "ideia_estrategica.resultado_esperado",
            "resultados",
            "impacto",
            "meta",
        ],
    ),
];

const TREINAMENTO_FIELDS: &[FieldAliases] = &[
    field(
        "titulo",
        &["titulo", "title", "treinamento.titulo", "tema", "nome"],
    ),
    field(
        "objetivo",
        &["objetivo", "treinamento.objetivo", "objetivos", "proposito"],
    ),
    field(
        "modulos",
        &[
            "modulos",
            "treinamento.modulos",
            "aulas",
            "sessoes",
            "topicos",
        ],
    ),
    field(
        "exercicios",
        &[
            "exercicios",
            "treinamento.exercicios",
            "atividades",
            "praticas",
            "tarefas",
        ],
    ),
];

const LOUVOR_FIELDS: &[FieldAliases] = &[
    field("titulo", &["titulo", "title", "nome", "culto"]),
    field("tema", &["tema", "tema_culto", "assunto", "mensagem"]),
    field(
        "musicas",
        &["musicas", "setlist", "repertorio", "louvores", "cancoes"],
    ),
    field(
        "observacoes",
        &["observacoes", "notas", "orientacoes", "dicas"],
    ),
];

const AULA_INFANTIL_FIELDS: &[FieldAliases] = &[
    field(
        "titulo",
        &["titulo", "title", "aula_infantil.titulo", "tema", "nome"],
    ),
    field(
        "objetivo",
        &["objetivo", "aula_infantil.objetivo", "proposito", "licao"],
    ),
    field(
        "historia",
        &[
            "historia",
            "aula_infantil.historia",
            "historia_biblica",
            "narrativa",
            "texto",
        ],
    ),
    field(
        "atividades",
        &[
            "atividades",
            "aula_infantil.atividades",
            "brincadeiras",
            "dinamicas",
            "atividade",
        ],
    ),
    field(
        "versiculo_memorizar",
        &[
            "versiculo_memorizar",
            "aula_infantil.versiculo_memorizar",
            "versiculo_chave",
            "memorizacao",
            "versiculo",
        ],
    ),
];

const GENERIC_FALLBACK_FIELDS: &[FieldAliases] = &[
    field(
        "titulo",
        &["titulo", "title", "tema", "nome", "assunto", "headline"],
    ),
    field(
        "conteudo",
        &[
            "conteudo",
            "texto",
            "content",
            "text",
            "mensagem",
            "descricao",
            "resumo",
            "corpo",
        ],
    ),
    field("secoes", &["secoes"]),
];

// ============================================================================
// The map
// ============================================================================

/// Every scope with its fields, in canonical field order.
pub static ALIAS_MAP: &[(Scope, &[FieldAliases])] = &[
    (Scope::Shape(ShapeId::FundamentoBiblico), FUNDAMENTO_BIBLICO_FIELDS),
    (Scope::Shape(ShapeId::Secao), SECAO_FIELDS),
    (Scope::Shape(ShapeId::Slide), SLIDE_FIELDS),
    (Scope::Shape(ShapeId::Cena), CENA_FIELDS),
    (Scope::Shape(ShapeId::TelaStory), TELA_STORY_FIELDS),
    (Scope::Shape(ShapeId::PerguntaResposta), PERGUNTA_RESPOSTA_FIELDS),
    (Scope::Shape(ShapeId::QuestaoQuiz), QUESTAO_QUIZ_FIELDS),
    (Scope::Shape(ShapeId::DiaDesafio), DIA_DESAFIO_FIELDS),
    (Scope::Shape(ShapeId::EntradaCalendario), ENTRADA_CALENDARIO_FIELDS),
    (Scope::Shape(ShapeId::LeituraDia), LEITURA_DIA_FIELDS),
    (Scope::Shape(ShapeId::BlocoPodcast), BLOCO_PODCAST_FIELDS),
    (Scope::Shape(ShapeId::Musica), MUSICA_FIELDS),
    (Scope::Type(ContentTypeId::Post), POST_FIELDS),
    (Scope::Type(ContentTypeId::Carrossel), CARROSSEL_FIELDS),
    (Scope::Type(ContentTypeId::Reel), REEL_FIELDS),
    (Scope::Type(ContentTypeId::Stories), STORIES_FIELDS),
    (Scope::Type(ContentTypeId::Devocional), DEVOCIONAL_FIELDS),
    (Scope::Type(ContentTypeId::Estudo), ESTUDO_FIELDS),
    (Scope::Type(ContentTypeId::Esboco), ESBOCO_FIELDS),
    (Scope::Type(ContentTypeId::ResumoPregacao), RESUMO_PREGACAO_FIELDS),
    (Scope::Type(ContentTypeId::PackSemanal), PACK_SEMANAL_FIELDS),
    (Scope::Type(ContentTypeId::FrasesImpacto), FRASES_IMPACTO_FIELDS),
    (Scope::Type(ContentTypeId::Convite), CONVITE_FIELDS),
    (Scope::Type(ContentTypeId::Aviso), AVISO_FIELDS),
    (Scope::Type(ContentTypeId::Guia), GUIA_FIELDS),
    (Scope::Type(ContentTypeId::Calendario), CALENDARIO_FIELDS),
    (Scope::Type(ContentTypeId::DesafioSemanal), DESAFIO_SEMANAL_FIELDS),
    (Scope::Type(ContentTypeId::QaEstruturado), QA_ESTRUTURADO_FIELDS),
    (Scope::Type(ContentTypeId::Quiz), QUIZ_FIELDS),
    (Scope::Type(ContentTypeId::PlanoLeitura), PLANO_LEITURA_FIELDS),
    (Scope::Type(ContentTypeId::Oracao), ORACAO_FIELDS),
    (Scope::Type(ContentTypeId::Testemunho), TESTEMUNHO_FIELDS),
    (Scope::Type(ContentTypeId::RoteiroPodcast), ROTEIRO_PODCAST_FIELDS),
    (Scope::Type(ContentTypeId::ArtigoBlog), ARTIGO_BLOG_FIELDS),
    (Scope::Type(ContentTypeId::Email), EMAIL_FIELDS),
    (Scope::Type(ContentTypeId::MensagemWhatsapp), MENSAGEM_WHATSAPP_FIELDS),
    (Scope::Type(ContentTypeId::DinamicaCelula), DINAMICA_CELULA_FIELDS),
    (Scope::Type(ContentTypeId::IdeiaEstrategica), IDEIA_ESTRATEGICA_FIELDS),
    (Scope::Type(ContentTypeId::Treinamento), TREINAMENTO_FIELDS),
    (Scope::Type(ContentTypeId::Louvor), LOUVOR_FIELDS),
    (Scope::Type(ContentTypeId::AulaInfantil), AULA_INFANTIL_FIELDS),
    (Scope::Type(ContentTypeId::GenericFallback), GENERIC_FALLBACK_FIELDS),
];

static INDEX: LazyLock<HashMap<Scope, &'static [FieldAliases]>> =
    LazyLock::new(|| ALIAS_MAP.iter().copied().collect());

/// The fields registered for a scope, in canonical order.
pub fn fields_of(scope: Scope) -> &'static [FieldAliases] {
    INDEX.get(&scope).copied().unwrap_or(&[])
}

/// The ordered candidates for one field of a scope.
///
/// Returns an empty slice when the field is not registered.
pub fn aliases_for(scope: Scope, field: &str) -> &'static [&'static str] {
    fields_of(scope)
        .iter()
        .find(|f| f.field == field)
        .map(|f| f.aliases)
        .unwrap_or(&[])
}

/// Every candidate key used anywhere in a scope.
pub fn all_aliases(scope: Scope) -> impl Iterator<Item = &'static str> {
    fields_of(scope)
        .iter()
        .flat_map(|f| f.aliases.iter().copied())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_scope_is_registered_once() {
        let mut seen = HashSet::new();
        for (scope, _) in ALIAS_MAP {
            assert!(seen.insert(*scope), "{scope:?} registered twice");
        }
        for t in ContentTypeId::ALL {
            assert!(seen.contains(&Scope::Type(t)), "{t} missing");
        }
        for s in ShapeId::ALL {
            assert!(seen.contains(&Scope::Shape(s)), "{s:?} missing");
        }
    }

    #[test]
    fn test_canonical_name_comes_first() {
        for (scope, fields) in ALIAS_MAP {
            for f in *fields {
                assert_eq!(
                    f.aliases.first(),
                    Some(&f.field),
                    "{scope:?}.{} must list itself first",
                    f.field
                );
            }
        }
    }

    #[test]
    fn test_no_alias_shadows_a_sibling_field() {
        for (scope, fields) in ALIAS_MAP {
            let names: HashSet<&str> = fields.iter().map(|f| f.field).collect();
            for f in *fields {
                for alias in f.aliases.iter().skip(1) {
                    let root = alias.split('.').next().unwrap_or(alias);
                    assert!(
                        !names.contains(root),
                        "{scope:?}.{} alias {alias} reaches sibling field {root}",
                        f.field
                    );
                }
            }
        }
    }

    #[test]
    fn test_no_duplicate_candidates_within_a_field() {
        for (scope, fields) in ALIAS_MAP {
            for f in *fields {
                let unique: HashSet<&&str> = f.aliases.iter().collect();
                assert_eq!(
                    unique.len(),
                    f.aliases.len(),
                    "{scope:?}.{} repeats a candidate",
                    f.field
                );
            }
        }
    }

    #[test]
    fn test_aliases_for_lookup() {
        let legenda = aliases_for(Scope::Type(ContentTypeId::Post), "legenda");
        assert_eq!(&legenda[..3], &["legenda", "texto", "copy"]);
        assert!(aliases_for(Scope::Type(ContentTypeId::Post), "inexistente").is_empty());
    }

    #[test]
    fn test_precedence_is_stable() {
        let first = aliases_for(Scope::Type(ContentTypeId::Reel), "cenas");
        for _ in 0..10 {
            assert_eq!(aliases_for(Scope::Type(ContentTypeId::Reel), "cenas"), first);
        }
    }
}
