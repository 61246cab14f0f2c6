//! View resolution: payload in, renderer id and canonical record out.
//!
//! The front-end owns one renderer per content family. [`binding`] maps every
//! [`ContentTypeId`] to its renderer, or to nothing when a type has no
//! dedicated view; those fall through a secondary label table before landing
//! on [`RendererId::DefaultView`]. The same table gives payloads that only
//! reached the generic fallback a view picked from their declared label.
//!
//! # Example
//!
//! ```rust
//! use kerygma_content::view::{resolve, RendererId};
//! use serde_json::json;
//!
//! let raw = json!({"gancho": "Você sabia?", "cenas": ["Abertura"]});
//! let resolution = resolve(&raw, Some("roteiroReels"));
//! assert_eq!(resolution.renderer, RendererId::ReelView);
//!
//! assert_eq!(resolve(&json!({}), None).renderer, RendererId::DefaultView);
//! ```

use serde::Serialize;
use serde_json::Value;

use kerygma_core::{ContentTypeId, Result, normalize_label};

use crate::detect::{DetectionSource, detect_with_source};
use crate::normalize::{CanonicalRecord, normalize};

/// Front-end renderer identifiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum RendererId {
    PostView,
    CarrosselView,
    ReelView,
    StoriesView,
    DevocionalView,
    EstudoView,
    EsbocoView,
    ResumoPregacaoView,
    PackSemanalView,
    FrasesImpactoView,
    ConviteView,
    AvisoView,
    GuiaView,
    CalendarioView,
    DesafioSemanalView,
    QaView,
    QuizView,
    PlanoLeituraView,
    PodcastView,
    ArtigoView,
    EmailView,
    WhatsappView,
    DinamicaView,
    IdeiaView,
    TreinamentoView,
    LouvorView,
    AulaInfantilView,
    GenericView,
    /// Shown when nothing else fits or the record is empty.
    DefaultView,
}

impl RendererId {
    /// The renderer's name as the front-end registers it.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PostView => "PostView",
            Self::CarrosselView => "CarrosselView",
            Self::ReelView => "ReelView",
            Self::StoriesView => "StoriesView",
            Self::DevocionalView => "DevocionalView",
            Self::EstudoView => "EstudoView",
            Self::EsbocoView => "EsbocoView",
            Self::ResumoPregacaoView => "ResumoPregacaoView",
            Self::PackSemanalView => "PackSemanalView",
            Self::FrasesImpactoView => "FrasesImpactoView",
            Self::ConviteView => "ConviteView",
            Self::AvisoView => "AvisoView",
            Self::GuiaView => "GuiaView",
            Self::CalendarioView => "CalendarioView",
            Self::DesafioSemanalView => "DesafioSemanalView",
            Self::QaView => "QaView",
            Self::QuizView => "QuizView",
            Self::PlanoLeituraView => "PlanoLeituraView",
            Self::PodcastView => "PodcastView",
            Self::ArtigoView => "ArtigoView",
            Self::EmailView => "EmailView",
            Self::WhatsappView => "WhatsappView",
            Self::DinamicaView => "DinamicaView",
            Self::IdeiaView => "IdeiaView",
            Self::TreinamentoView => "TreinamentoView",
            Self::LouvorView => "LouvorView",
            Self::AulaInfantilView => "AulaInfantilView",
            Self::GenericView => "GenericView",
            Self::DefaultView => "DefaultView",
        }
    }
}

impl std::fmt::Display for RendererId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The dedicated renderer of a content type, if it has one.
pub fn binding(content_type: ContentTypeId) -> Option<RendererId> {
    use ContentTypeId as T;
    use RendererId as R;

    match content_type {
        T::Post => Some(R::PostView),
        T::Carrossel => Some(R::CarrosselView),
        T::Reel => Some(R::ReelView),
        T::Stories => Some(R::StoriesView),
        T::Devocional => Some(R::DevocionalView),
        T::Estudo => Some(R::EstudoView),
        T::Esboco => Some(R::EsbocoView),
        T::ResumoPregacao => Some(R::ResumoPregacaoView),
        T::PackSemanal => Some(R::PackSemanalView),
        T::FrasesImpacto => Some(R::FrasesImpactoView),
        T::Convite => Some(R::ConviteView),
        T::Aviso => Some(R::AvisoView),
        T::Guia => Some(R::GuiaView),
        T::Calendario => Some(R::CalendarioView),
        T::DesafioSemanal => Some(R::DesafioSemanalView),
        T::QaEstruturado => Some(R::QaView),
        T::Quiz => Some(R::QuizView),
        T::PlanoLeitura => Some(R::PlanoLeituraView),
        T::Oracao | T::Testemunho => None,
        T::RoteiroPodcast => Some(R::PodcastView),
        T::ArtigoBlog => Some(R::ArtigoView),
        T::Email => Some(R::EmailView),
        T::MensagemWhatsapp => Some(R::WhatsappView),
        T::DinamicaCelula => Some(R::DinamicaView),
        T::IdeiaEstrategica => Some(R::IdeiaView),
        T::Treinamento => Some(R::TreinamentoView),
        T::Louvor => Some(R::LouvorView),
        T::AulaInfantil => Some(R::AulaInfantilView),
        T::GenericFallback => Some(R::GenericView),
    }
}

/// Renderers for labels without a dedicated binding, keyed by normalized label.
pub const RENDERER_ALIASES: &[(&str, RendererId)] = &[
    ("oracao", RendererId::DevocionalView),
    ("testemunho", RendererId::DevocionalView),
    ("historia", RendererId::DevocionalView),
    ("reflexao", RendererId::DevocionalView),
    ("meditacao", RendererId::DevocionalView),
    ("sermao", RendererId::EsbocoView),
    ("pregacao", RendererId::EsbocoView),
    ("enquete", RendererId::StoriesView),
];

fn renderer_alias(label: &str) -> Option<RendererId> {
    let key = normalize_label(label);
    RENDERER_ALIASES
        .iter()
        .find(|(alias, _)| *alias == key)
        .map(|(_, r)| *r)
}

/// Everything the front-end needs to show one payload.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Resolution {
    pub content_type: ContentTypeId,
    pub source: DetectionSource,
    pub renderer: RendererId,
    pub record: CanonicalRecord,
}

/// Detect, normalize, and pick a renderer for a payload.
pub fn resolve(raw: &Value, declared_type: Option<&str>) -> Resolution {
    let detection = detect_with_source(raw, declared_type);
    let record = normalize(raw, detection.content_type);
    let renderer = if record.empty {
        log::debug!("Empty {} record, using default view", detection.content_type);
        RendererId::DefaultView
    } else {
        renderer_for(detection.content_type, declared_type)
    };

    Resolution {
        content_type: detection.content_type,
        source: detection.source,
        renderer,
        record,
    }
}

/// [`resolve`] over persisted JSON text.
///
/// # Errors
///
/// Returns [`kerygma_core::Error::Json`] when the text is not valid JSON.
pub fn resolve_str(json: &str, declared_type: Option<&str>) -> Result<Resolution> {
    let raw: Value = serde_json::from_str(json)?;
    Ok(resolve(&raw, declared_type))
}

/// The renderer for a type, consulting the label table when unbound.
///
/// A generic fallback record takes the declared label's renderer when the
/// label table knows it, so `"sermao"` still opens in the outline view.
pub fn renderer_for(content_type: ContentTypeId, declared_type: Option<&str>) -> RendererId {
    if content_type == ContentTypeId::GenericFallback {
        if let Some(renderer) = declared_type.and_then(renderer_alias) {
            log::debug!("Generic record declared as {declared_type:?}, using {renderer}");
            return renderer;
        }
    }
    binding(content_type)
        .or_else(|| renderer_alias(content_type.as_str()))
        .unwrap_or_else(|| {
            log::debug!("No renderer bound for {content_type}");
            RendererId::DefaultView
        })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_every_type_reaches_a_renderer() {
        for t in ContentTypeId::ALL {
            assert_ne!(renderer_for(t, None), RendererId::DefaultView, "{t}");
        }
    }

    #[test]
    fn test_unbound_types_use_alias_table() {
        assert_eq!(binding(ContentTypeId::Oracao), None);
        assert_eq!(renderer_for(ContentTypeId::Oracao, None), RendererId::DevocionalView);
        assert_eq!(renderer_for(ContentTypeId::Testemunho, None), RendererId::DevocionalView);
    }

    #[test]
    fn test_renderer_alias_keys_are_normalized() {
        for (alias, _) in RENDERER_ALIASES {
            assert_eq!(normalize_label(alias), *alias);
        }
    }

    #[test]
    fn test_declared_label_picks_renderer_for_generic_records() {
        let raw = json!({"texto": "Três pontos sobre a graça"});
        let r = resolve(&raw, Some("sermao"));
        assert_eq!(r.content_type, ContentTypeId::GenericFallback);
        assert_eq!(r.renderer, RendererId::EsbocoView);

        assert_eq!(resolve(&raw, Some("Enquete")).renderer, RendererId::StoriesView);
        assert_eq!(resolve(&raw, Some("meditação")).renderer, RendererId::DevocionalView);
        assert_eq!(resolve(&raw, None).renderer, RendererId::GenericView);
        assert_eq!(resolve(&raw, Some("xyzzy")).renderer, RendererId::GenericView);
    }

    #[test]
    fn test_declared_label_does_not_override_bound_types() {
        assert_eq!(
            renderer_for(ContentTypeId::Post, Some("sermao")),
            RendererId::PostView
        );
    }

    #[test]
    fn test_every_renderer_alias_is_reachable() {
        let raw = json!({"texto": "Sem forma conhecida"});
        for (alias, renderer) in RENDERER_ALIASES {
            let r = resolve(&raw, Some(alias));
            assert_eq!(r.renderer, *renderer, "{alias}");
            match ContentTypeId::from_label(alias) {
                Some(t) => assert_eq!(binding(t), None, "{alias}"),
                None => assert_eq!(r.content_type, ContentTypeId::GenericFallback, "{alias}"),
            }
        }
    }

    #[test]
    fn test_video_labels_share_a_renderer() {
        let raw = json!({"roteiro": "Texto do vídeo"});
        for label in ["roteiroReels", "reel", "roteiro_video_completo"] {
            assert_eq!(resolve(&raw, Some(label)).renderer, RendererId::ReelView, "{label}");
        }
    }

    #[test]
    fn test_empty_record_forces_default_view() {
        let r = resolve(&json!({"slides": []}), None);
        assert_eq!(r.content_type, ContentTypeId::Carrossel);
        assert!(r.record.empty);
        assert_eq!(r.renderer, RendererId::DefaultView);
    }

    #[test]
    fn test_resolve_str_valid_and_invalid() {
        let r = resolve_str(r#"{"assunto": "Olá", "corpo": "Texto"}"#, None).unwrap();
        assert_eq!(r.content_type, ContentTypeId::Email);
        assert_eq!(r.renderer, RendererId::EmailView);

        let err = resolve_str("{quebrado", None).unwrap_err();
        assert!(matches!(err, kerygma_core::Error::Json(_)));
    }

    #[test]
    fn test_resolution_serializes() {
        let r = resolve(&json!({"aviso": "Culto cancelado"}), None);
        let value = serde_json::to_value(&r).unwrap();
        assert_eq!(value["content_type"], "aviso");
        assert_eq!(value["renderer"], "AvisoView");
        assert_eq!(value["source"]["kind"], "structural");
        assert_eq!(value["record"]["tipo"], "aviso");
    }

    #[test]
    fn test_renderer_display() {
        assert_eq!(RendererId::QaView.to_string(), "QaView");
    }
}
