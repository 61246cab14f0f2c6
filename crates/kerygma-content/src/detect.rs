//! Content type detection.
//!
//! A payload's type comes from, in order of preference:
//!
//! 1. the declared label the caller stored alongside it
//! 2. a type tag embedded in the payload (`tipo`, `tipo_conteudo`, ...)
//! 3. an ordered battery of structural probes over its top-level keys
//!
//! A label is trusted unless a *strong* probe (a key that only one type ever
//! uses, such as `calendario_editorial`) points elsewhere and nothing in the
//! payload looks like the labelled type. Without any signal the payload is
//! [`ContentTypeId::GenericFallback`].
//!
//! # Example
//!
//! ```rust
//! use kerygma_content::detect::{detect, detect_with_source, DetectionSource};
//! use kerygma_core::ContentTypeId;
//! use serde_json::json;
//!
//! let raw = json!({"calendario_editorial": {"posts": []}});
//! assert_eq!(detect(&raw, Some("post")), ContentTypeId::Calendario);
//!
//! let detection = detect_with_source(&json!({"slides": []}), None);
//! assert_eq!(detection.content_type, ContentTypeId::Carrossel);
//! assert_eq!(detection.source, DetectionSource::Structural { probe: "carrossel_slides" });
//! ```

use serde::Serialize;
use serde_json::{Map, Value};

use kerygma_core::ContentTypeId;
use kerygma_core::util::json::{has_key, lookup, record_root};

/// Keys that may carry a payload's own type label.
pub const EMBEDDED_TAG_KEYS: &[&str] = &["tipo", "tipo_conteudo", "content_type", "conteudo.tipo"];

/// Where a detected type came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DetectionSource {
    /// The caller's declared label.
    Declared,
    /// A type tag inside the payload.
    Embedded,
    /// A structural probe, with no usable label.
    Structural { probe: &'static str },
    /// A strong probe that overrode a label.
    Override {
        probe: &'static str,
        hinted: ContentTypeId,
    },
    /// Nothing matched.
    Fallback,
}

/// A detected type and how it was reached.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Detection {
    pub content_type: ContentTypeId,
    pub source: DetectionSource,
}

/// A named structural predicate voting for one type.
#[derive(Clone, Copy)]
pub struct Probe {
    pub name: &'static str,
    pub target: ContentTypeId,
    /// Strong probes may override a label.
    pub strong: bool,
    matches: fn(&Map<String, Value>) -> bool,
}

impl Probe {
    /// Whether the probe matches a record.
    pub fn matches(&self, map: &Map<String, Value>) -> bool {
        (self.matches)(map)
    }
}

impl std::fmt::Debug for Probe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Probe")
            .field("name", &self.name)
            .field("target", &self.target)
            .field("strong", &self.strong)
            .finish()
    }
}

fn any(map: &Map<String, Value>, keys: &[&str]) -> bool {
    keys.iter().any(|k| has_key(map, k))
}

fn all(map: &Map<String, Value>, keys: &[&str]) -> bool {
    keys.iter().all(|k| has_key(map, k))
}

const fn strong(
    name: &'static str,
    target: ContentTypeId,
    matches: fn(&Map<String, Value>) -> bool,
) -> Probe {
    Probe {
        name,
        target,
        strong: true,
        matches,
    }
}

const fn weak(
    name: &'static str,
    target: ContentTypeId,
    matches: fn(&Map<String, Value>) -> bool,
) -> Probe {
    Probe {
        name,
        target,
        strong: false,
        matches,
    }
}

/// Structural probes, most specific first.
pub static PROBES: &[Probe] = &[
    // Strong: type-defining keys
    strong("pack_semanal", ContentTypeId::PackSemanal, |m| {
        has_key(m, "pack_semanal")
            || all(m, &["resumo_pregacao", "versiculos_base", "legendas_instagram"])
    }),
    strong("calendario_editorial", ContentTypeId::Calendario, |m| {
        any(m, &["calendario_editorial", "calendario"])
    }),
    strong("desafio_semanal", ContentTypeId::DesafioSemanal, |m| {
        has_key(m, "desafio_semanal")
    }),
    strong("plano_leitura", ContentTypeId::PlanoLeitura, |m| {
        has_key(m, "plano_leitura")
    }),
    strong("qa_estruturado", ContentTypeId::QaEstruturado, |m| {
        any(m, &["qa_estruturado", "perguntas_respostas", "faq"])
    }),
    strong("quiz", ContentTypeId::Quiz, |m| any(m, &["quiz", "questoes"])),
    strong("roteiro_podcast", ContentTypeId::RoteiroPodcast, |m| {
        has_key(m, "roteiro_podcast")
    }),
    strong("esboco", ContentTypeId::Esboco, |m| has_key(m, "esboco")),
    strong("estudo_biblico", ContentTypeId::Estudo, |m| {
        any(m, &["estudo_biblico", "estudo"])
    }),
    strong("devocional", ContentTypeId::Devocional, |m| {
        has_key(m, "devocional")
    }),
    strong("convite", ContentTypeId::Convite, |m| has_key(m, "convite")),
    strong("aviso", ContentTypeId::Aviso, |m| has_key(m, "aviso")),
    strong("guia", ContentTypeId::Guia, |m| has_key(m, "guia")),
    strong("dinamica", ContentTypeId::DinamicaCelula, |m| {
        any(m, &["dinamica", "dinamica_celula"])
    }),
    strong("ideia_estrategica", ContentTypeId::IdeiaEstrategica, |m| {
        has_key(m, "ideia_estrategica")
    }),
    strong("treinamento", ContentTypeId::Treinamento, |m| {
        any(m, &["treinamento", "modulos"])
    }),
    strong("louvor", ContentTypeId::Louvor, |m| {
        any(m, &["musicas", "setlist", "repertorio"])
    }),
    strong("aula_infantil", ContentTypeId::AulaInfantil, |m| {
        any(m, &["aula_infantil", "versiculo_memorizar"])
    }),
    strong("mensagem_whatsapp", ContentTypeId::MensagemWhatsapp, |m| {
        has_key(m, "mensagem_whatsapp")
    }),
    strong("roteiro_video", ContentTypeId::Reel, |m| {
        any(m, &["roteiro_video", "roteiro_reels", "cenas"])
    }),
    strong("carrossel", ContentTypeId::Carrossel, |m| {
        has_key(m, "carrossel")
    }),
    strong("stories", ContentTypeId::Stories, |m| {
        any(m, &["stories", "telas"])
    }),
    strong("artigo", ContentTypeId::ArtigoBlog, |m| {
        any(m, &["artigo", "artigo_blog"])
    }),
    // Weak: generic signatures
    weak("email", ContentTypeId::Email, |m| {
        all(m, &["assunto", "corpo"])
    }),
    weak("resumo_pregacao", ContentTypeId::ResumoPregacao, |m| {
        has_key(m, "resumo_pregacao") || all(m, &["resumo", "pontos_principais"])
    }),
    weak("frases_impacto", ContentTypeId::FrasesImpacto, |m| {
        any(m, &["frases_impacto", "frases_impactantes", "frases"])
    }),
    weak("devocional_reflexao", ContentTypeId::Devocional, |m| {
        all(m, &["reflexao", "oracao"])
    }),
    weak("oracao", ContentTypeId::Oracao, |m| has_key(m, "oracao")),
    weak("testemunho", ContentTypeId::Testemunho, |m| {
        any(m, &["testemunho", "historia"])
    }),
    weak("convite_evento", ContentTypeId::Convite, |m| {
        all(m, &["evento", "local"])
    }),
    weak("reel_gancho", ContentTypeId::Reel, |m| any(m, &["gancho", "hook"])),
    weak("carrossel_slides", ContentTypeId::Carrossel, |m| {
        has_key(m, "slides")
    }),
    weak("estudo_topicos", ContentTypeId::Estudo, |m| {
        has_key(m, "topicos") && any(m, &["perguntas_discussao", "perguntas"])
    }),
    weak("podcast_blocos", ContentTypeId::RoteiroPodcast, |m| {
        has_key(m, "blocos")
    }),
    weak("artigo_secoes", ContentTypeId::ArtigoBlog, |m| {
        has_key(m, "secoes") && any(m, &["subtitulo", "introducao", "palavras_chave"])
    }),
    weak("post_fundamento", ContentTypeId::Post, |m| {
        all(m, &["fundamento_biblico", "conteudo"])
    }),
    weak("post_legenda", ContentTypeId::Post, |m| {
        any(m, &["legenda", "caption", "copy", "hashtags"])
    }),
];

/// Detect a payload's content type.
pub fn detect(raw: &Value, declared_type: Option<&str>) -> ContentTypeId {
    detect_with_source(raw, declared_type).content_type
}

/// Detect a payload's content type, reporting which signal decided it.
pub fn detect_with_source(raw: &Value, declared_type: Option<&str>) -> Detection {
    let map = record_root(raw);

    let declared = declared_type.and_then(|label| {
        let found = ContentTypeId::from_label_fuzzy(label);
        if found.is_none() {
            log::debug!("Ignoring unknown declared type {label:?}");
        }
        found
    });

    let hint = declared
        .map(|t| (t, DetectionSource::Declared))
        .or_else(|| embedded_tag(map).map(|t| (t, DetectionSource::Embedded)));

    let detection = match hint {
        Some((hinted, source)) => check_hint(map, hinted, source),
        None => structural(map),
    };
    log::debug!(
        "Detected {} via {:?}",
        detection.content_type,
        detection.source
    );
    detection
}

/// The type named by the payload's own tag, matched exactly.
pub fn embedded_tag(map: &Map<String, Value>) -> Option<ContentTypeId> {
    EMBEDDED_TAG_KEYS.iter().find_map(|key| {
        lookup(map, key)
            .and_then(Value::as_str)
            .and_then(ContentTypeId::from_label)
    })
}

fn check_hint(
    map: &Map<String, Value>,
    hinted: ContentTypeId,
    source: DetectionSource,
) -> Detection {
    let supports_hint = PROBES
        .iter()
        .any(|p| p.target == hinted && p.matches(map));
    if !supports_hint {
        let contradiction = PROBES
            .iter()
            .find(|p| p.strong && p.target != hinted && p.matches(map));
        if let Some(probe) = contradiction {
            log::debug!(
                "Probe {} overrides hinted type {hinted} with {}",
                probe.name,
                probe.target
            );
            return Detection {
                content_type: probe.target,
                source: DetectionSource::Override {
                    probe: probe.name,
                    hinted,
                },
            };
        }
    }
    Detection {
        content_type: hinted,
        source,
    }
}

fn structural(map: &Map<String, Value>) -> Detection {
    match PROBES.iter().find(|p| p.matches(map)) {
        Some(probe) => {
            log::trace!("Probe {} matched", probe.name);
            Detection {
                content_type: probe.target,
                source: DetectionSource::Structural { probe: probe.name },
            }
        }
        None => Detection {
            content_type: ContentTypeId::GenericFallback,
            source: DetectionSource::Fallback,
        },
    }
}

// ============================================================================
// Tests
// ============================================================================
