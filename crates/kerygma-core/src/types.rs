//! The closed set of content types.
//!
//! Every payload resolves to exactly one [`ContentTypeId`]. Labels coming from
//! outside (stored `content_type` columns, prompt versions, embedded `tipo`
//! keys) are matched through [`ContentTypeId::from_label`], which normalizes
//! the label and consults [`LABEL_ALIASES`].
//!
//! # Example
//!
//! ```rust
//! use kerygma_core::ContentTypeId;
//!
//! assert_eq!(ContentTypeId::from_label("Roteiro_Video"), Some(ContentTypeId::Reel));
//! assert_eq!(ContentTypeId::from_label("roteiroReels"), Some(ContentTypeId::Reel));
//! assert_eq!(ContentTypeId::from_label("calendário"), Some(ContentTypeId::Calendario));
//! assert_eq!(ContentTypeId::from_label("nada-disso"), None);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::util::ids::normalize_label;

/// Minimum Jaro–Winkler similarity for a typo-tolerant label match.
pub const FUZZY_THRESHOLD: f64 = 0.93;

/// Labels shorter than this (after normalization) are never fuzzy-matched.
const FUZZY_MIN_LEN: usize = 5;

/// Canonical content type identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentTypeId {
    /// Single feed post.
    Post,
    /// Slide carousel.
    Carrossel,
    /// Video script (reels, shorts, full video).
    Reel,
    /// Story sequence.
    Stories,
    /// Daily devotional.
    Devocional,
    /// Bible study.
    Estudo,
    /// Sermon outline.
    Esboco,
    /// Sermon summary.
    ResumoPregacao,
    /// Composite weekly pack built from one sermon.
    PackSemanal,
    /// Quotable lines.
    FrasesImpacto,
    /// Event invite.
    Convite,
    /// Notice.
    Aviso,
    /// Step-by-step guide.
    Guia,
    /// Editorial calendar.
    Calendario,
    /// Weekly challenge.
    DesafioSemanal,
    /// Structured questions and answers.
    QaEstruturado,
    /// Multiple-choice quiz.
    Quiz,
    /// Bible reading plan.
    PlanoLeitura,
    /// Prayer.
    Oracao,
    /// Testimony.
    Testemunho,
    /// Podcast script.
    RoteiroPodcast,
    /// Blog article.
    ArtigoBlog,
    /// E-mail or newsletter.
    Email,
    /// WhatsApp broadcast message.
    MensagemWhatsapp,
    /// Small-group activity.
    DinamicaCelula,
    /// Strategy idea.
    IdeiaEstrategica,
    /// Leadership training.
    Treinamento,
    /// Worship set list.
    Louvor,
    /// Children's class.
    AulaInfantil,
    /// Unrecognized shape.
    GenericFallback,
}

impl ContentTypeId {
    /// Every content type, in catalog order.
    pub const ALL: [ContentTypeId; 30] = [
        Self::Post,
        Self::Carrossel,
        Self::Reel,
        Self::Stories,
        Self::Devocional,
        Self::Estudo,
        Self::Esboco,
        Self::ResumoPregacao,
        Self::PackSemanal,
        Self::FrasesImpacto,
        Self::Convite,
        Self::Aviso,
        Self::Guia,
        Self::Calendario,
        Self::DesafioSemanal,
        Self::QaEstruturado,
        Self::Quiz,
        Self::PlanoLeitura,
        Self::Oracao,
        Self::Testemunho,
        Self::RoteiroPodcast,
        Self::ArtigoBlog,
        Self::Email,
        Self::MensagemWhatsapp,
        Self::DinamicaCelula,
        Self::IdeiaEstrategica,
        Self::Treinamento,
        Self::Louvor,
        Self::AulaInfantil,
        Self::GenericFallback,
    ];

    /// The canonical snake_case identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Post => "post",
            Self::Carrossel => "carrossel",
            Self::Reel => "reel",
            Self::Stories => "stories",
            Self::Devocional => "devocional",
            Self::Estudo => "estudo",
            Self::Esboco => "esboco",
            Self::ResumoPregacao => "resumo_pregacao",
            Self::PackSemanal => "pack_semanal",
            Self::FrasesImpacto => "frases_impacto",
            Self::Convite => "convite",
            Self::Aviso => "aviso",
            Self::Guia => "guia",
            Self::Calendario => "calendario",
            Self::DesafioSemanal => "desafio_semanal",
            Self::QaEstruturado => "qa_estruturado",
            Self::Quiz => "quiz",
            Self::PlanoLeitura => "plano_leitura",
            Self::Oracao => "oracao",
            Self::Testemunho => "testemunho",
            Self::RoteiroPodcast => "roteiro_podcast",
            Self::ArtigoBlog => "artigo_blog",
            Self::Email => "email",
            Self::MensagemWhatsapp => "mensagem_whatsapp",
            Self::DinamicaCelula => "dinamica_celula",
            Self::IdeiaEstrategica => "ideia_estrategica",
            Self::Treinamento => "treinamento",
            Self::Louvor => "louvor",
            Self::AulaInfantil => "aula_infantil",
            Self::GenericFallback => "generic_fallback",
        }
    }

    /// Human-facing name shown in the content library.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Post => "Post",
            Self::Carrossel => "Carrossel",
            Self::Reel => "Roteiro de vídeo",
            Self::Stories => "Stories",
            Self::Devocional => "Devocional",
            Self::Estudo => "Estudo bíblico",
            Self::Esboco => "Esboço de pregação",
            Self::ResumoPregacao => "Resumo da pregação",
            Self::PackSemanal => "Pack semanal",
            Self::FrasesImpacto => "Frases de impacto",
            Self::Convite => "Convite",
            Self::Aviso => "Aviso",
            Self::Guia => "Guia",
            Self::Calendario => "Calendário editorial",
            Self::DesafioSemanal => "Desafio semanal",
            Self::QaEstruturado => "Perguntas e respostas",
            Self::Quiz => "Quiz",
            Self::PlanoLeitura => "Plano de leitura",
            Self::Oracao => "Oração",
            Self::Testemunho => "Testemunho",
            Self::RoteiroPodcast => "Roteiro de podcast",
            Self::ArtigoBlog => "Artigo de blog",
            Self::Email => "E-mail",
            Self::MensagemWhatsapp => "Mensagem de WhatsApp",
            Self::DinamicaCelula => "Dinâmica de célula",
            Self::IdeiaEstrategica => "Ideia estratégica",
            Self::Treinamento => "Treinamento",
            Self::Louvor => "Repertório de louvor",
            Self::AulaInfantil => "Aula infantil",
            Self::GenericFallback => "Conteúdo",
        }
    }

    /// Resolve a label to a content type.
    ///
    /// The label is normalized with [`normalize_label`] and compared against
    /// the canonical ids first, then [`LABEL_ALIASES`]. Returns `None` for
    /// blank or unknown labels.
    pub fn from_label(label: &str) -> Option<Self> {
        let key = normalize_label(label);
        if key.is_empty() {
            return None;
        }
        Self::ALL
            .iter()
            .copied()
            .find(|t| normalize_label(t.as_str()) == key)
            .or_else(|| {
                LABEL_ALIASES
                    .iter()
                    .find(|(alias, _)| *alias == key)
                    .map(|(_, t)| *t)
            })
    }

    /// Resolve a label, tolerating small typos when the exact lookup misses.
    ///
    /// Candidates are every canonical id and every alias key; the best
    /// Jaro–Winkler score at or above [`FUZZY_THRESHOLD`] wins, ties going to
    /// the earlier candidate.
    pub fn from_label_fuzzy(label: &str) -> Option<Self> {
        if let Some(exact) = Self::from_label(label) {
            return Some(exact);
        }
        let key = normalize_label(label);
        if key.chars().count() < FUZZY_MIN_LEN {
            return None;
        }

        let canonical = Self::ALL
            .iter()
            .map(|t| (normalize_label(t.as_str()), *t));
        let aliases = LABEL_ALIASES
            .iter()
            .map(|(alias, t)| ((*alias).to_string(), *t));

        let mut best: Option<(f64, Self)> = None;
        for (candidate, content_type) in canonical.chain(aliases) {
            let score = strsim::jaro_winkler(&key, &candidate);
            if score >= FUZZY_THRESHOLD && best.is_none_or(|(top, _)| score > top) {
                best = Some((score, content_type));
            }
        }

        if let Some((score, content_type)) = best {
            log::debug!("Fuzzy label match: {label:?} -> {content_type} ({score:.3})");
        }
        best.map(|(_, t)| t)
    }
}

impl fmt::Display for ContentTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentTypeId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| Error::unknown_type(s))
    }
}

/// Alternate type labels, keyed by their [`normalize_label`] form.
///
/// Covers legacy prompt names, English names, plurals, and the
/// spellings the front-end has stored over time.
pub const LABEL_ALIASES: &[(&str, ContentTypeId)] = &[
    // post
    ("postagem", ContentTypeId::Post),
    ("postsimples", ContentTypeId::Post),
    ("postfeed", ContentTypeId::Post),
    ("feed", ContentTypeId::Post),
    ("postimagem", ContentTypeId::Post),
    ("imagem", ContentTypeId::Post),
    ("legenda", ContentTypeId::Post),
    // carrossel
    ("carousel", ContentTypeId::Carrossel),
    ("carrosel", ContentTypeId::Carrossel),
    ("carrosseis", ContentTypeId::Carrossel),
    ("slides", ContentTypeId::Carrossel),
    // reel
    ("reels", ContentTypeId::Reel),
    ("short", ContentTypeId::Reel),
    ("shorts", ContentTypeId::Reel),
    ("video", ContentTypeId::Reel),
    ("videos", ContentTypeId::Reel),
    ("tiktok", ContentTypeId::Reel),
    ("roteiroreel", ContentTypeId::Reel),
    ("roteiroreels", ContentTypeId::Reel),
    ("roteirovideo", ContentTypeId::Reel),
    ("roteirovideocompleto", ContentTypeId::Reel),
    ("roteirodevideo", ContentTypeId::Reel),
    ("videoscript", ContentTypeId::Reel),
    // stories
    ("story", ContentTypeId::Stories),
    ("storys", ContentTypeId::Stories),
    ("sequenciastories", ContentTypeId::Stories),
    // devocional
    ("devotional", ContentTypeId::Devocional),
    ("devocionaldiario", ContentTypeId::Devocional),
    ("devocionais", ContentTypeId::Devocional),
    // estudo
    ("estudobiblico", ContentTypeId::Estudo),
    ("study", ContentTypeId::Estudo),
    ("biblestudy", ContentTypeId::Estudo),
    // esboco
    ("esbocosermao", ContentTypeId::Esboco),
    ("esbocopregacao", ContentTypeId::Esboco),
    ("esbocodepregacao", ContentTypeId::Esboco),
    ("outline", ContentTypeId::Esboco),
    // resumo_pregacao
    ("resumo", ContentTypeId::ResumoPregacao),
    ("resumosermao", ContentTypeId::ResumoPregacao),
    ("resumodapregacao", ContentTypeId::ResumoPregacao),
    ("sermonsummary", ContentTypeId::ResumoPregacao),
    // pack_semanal
    ("pack", ContentTypeId::PackSemanal),
    ("kitsemanal", ContentTypeId::PackSemanal),
    ("pacotesemanal", ContentTypeId::PackSemanal),
    ("conteudosemanal", ContentTypeId::PackSemanal),
    ("weeklypack", ContentTypeId::PackSemanal),
    // frases_impacto
    ("frases", ContentTypeId::FrasesImpacto),
    ("frasesimpactantes", ContentTypeId::FrasesImpacto),
    ("frasesdeimpacto", ContentTypeId::FrasesImpacto),
    ("citacoes", ContentTypeId::FrasesImpacto),
    ("quotes", ContentTypeId::FrasesImpacto),
    // convite
    ("invite", ContentTypeId::Convite),
    ("conviteevento", ContentTypeId::Convite),
    ("evento", ContentTypeId::Convite),
    // aviso
    ("notice", ContentTypeId::Aviso),
    ("comunicado", ContentTypeId::Aviso),
    ("anuncio", ContentTypeId::Aviso),
    ("avisos", ContentTypeId::Aviso),
    // guia
    ("guide", ContentTypeId::Guia),
    ("tutorial", ContentTypeId::Guia),
    ("passoapasso", ContentTypeId::Guia),
    // calendario
    ("calendarioeditorial", ContentTypeId::Calendario),
    ("calendar", ContentTypeId::Calendario),
    ("cronograma", ContentTypeId::Calendario),
    // desafio_semanal
    ("desafio", ContentTypeId::DesafioSemanal),
    ("challenge", ContentTypeId::DesafioSemanal),
    ("weeklychallenge", ContentTypeId::DesafioSemanal),
    // qa_estruturado
    ("qa", ContentTypeId::QaEstruturado),
    ("faq", ContentTypeId::QaEstruturado),
    ("perguntaserespostas", ContentTypeId::QaEstruturado),
    ("perguntasrespostas", ContentTypeId::QaEstruturado),
    // quiz
    ("questionario", ContentTypeId::Quiz),
    ("quizbiblico", ContentTypeId::Quiz),
    // plano_leitura
    ("planodeleitura", ContentTypeId::PlanoLeitura),
    ("readingplan", ContentTypeId::PlanoLeitura),
    ("trilhadeleitura", ContentTypeId::PlanoLeitura),
    // oracao
    ("prayer", ContentTypeId::Oracao),
    ("oracaododia", ContentTypeId::Oracao),
    // testemunho
    ("testimony", ContentTypeId::Testemunho),
    ("testemunhos", ContentTypeId::Testemunho),
    // roteiro_podcast
    ("podcast", ContentTypeId::RoteiroPodcast),
    ("episodiopodcast", ContentTypeId::RoteiroPodcast),
    // artigo_blog
    ("artigo", ContentTypeId::ArtigoBlog),
    ("blog", ContentTypeId::ArtigoBlog),
    ("blogpost", ContentTypeId::ArtigoBlog),
    ("article", ContentTypeId::ArtigoBlog),
    // email
    ("newsletter", ContentTypeId::Email),
    ("emailmarketing", ContentTypeId::Email),
    // mensagem_whatsapp
    ("whatsapp", ContentTypeId::MensagemWhatsapp),
    ("mensagem", ContentTypeId::MensagemWhatsapp),
    ("mensagemzap", ContentTypeId::MensagemWhatsapp),
    // dinamica_celula
    ("dinamica", ContentTypeId::DinamicaCelula),
    ("celula", ContentTypeId::DinamicaCelula),
    ("dinamicadecelula", ContentTypeId::DinamicaCelula),
    ("icebreaker", ContentTypeId::DinamicaCelula),
    // ideia_estrategica
    ("estrategia", ContentTypeId::IdeiaEstrategica),
    ("ideia", ContentTypeId::IdeiaEstrategica),
    ("strategy", ContentTypeId::IdeiaEstrategica),
    // treinamento
    ("training", ContentTypeId::Treinamento),
    ("capacitacao", ContentTypeId::Treinamento),
    ("treinamentolideranca", ContentTypeId::Treinamento),
    // louvor
    ("setlist", ContentTypeId::Louvor),
    ("repertorio", ContentTypeId::Louvor),
    ("worship", ContentTypeId::Louvor),
    ("repertoriolouvor", ContentTypeId::Louvor),
    // aula_infantil
    ("kids", ContentTypeId::AulaInfantil),
    ("infantil", ContentTypeId::AulaInfantil),
    ("ministerioinfantil", ContentTypeId::AulaInfantil),
    ("escoladominical", ContentTypeId::AulaInfantil),
    // generic_fallback
    ("generico", ContentTypeId::GenericFallback),
    ("generic", ContentTypeId::GenericFallback),
    ("fallback", ContentTypeId::GenericFallback),
    ("outro", ContentTypeId::GenericFallback),
];
