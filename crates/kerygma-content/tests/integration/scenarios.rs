//! End-to-end scenarios from stored generator output.

use kerygma_content::export::{preview, title, to_plain_text};
use kerygma_content::{
    CanonicalContent, ContentTypeId, DetectionSource, RendererId, detect, resolve, resolve_str,
};
use serde_json::json;

use crate::common;

#[test]
fn test_ambiguous_hint_resolves_to_structure() {
    let (raw, label) = common::calendario_rotulado_como_post();
    let resolution = resolve(&raw, Some(label));

    assert_eq!(resolution.content_type, ContentTypeId::Calendario);
    assert_eq!(
        resolution.source,
        DetectionSource::Override {
            probe: "calendario_editorial",
            hinted: ContentTypeId::Post,
        }
    );
    assert_eq!(resolution.renderer, RendererId::CalendarioView);

    let CanonicalContent::Calendario(calendario) = &resolution.record.content else {
        unreachable!("expected calendar content");
    };
    assert_eq!(calendario.titulo, "Março com propósito");
    assert_eq!(calendario.entradas.len(), 3);
    assert_eq!(calendario.entradas[2].tema, "Comunhão");
}

#[test]
fn test_array_wrapper() {
    let resolution = resolve(&common::post_em_array(), None);
    assert_eq!(resolution.content_type, ContentTypeId::Post);
    assert_eq!(resolution.renderer, RendererId::PostView);

    let CanonicalContent::Post(post) = &resolution.record.content else {
        unreachable!("expected post content");
    };
    assert_eq!(post.titulo, "Deus cuida");
    assert_eq!(post.fundamento_biblico.versiculos, vec!["1Pe 5:7"]);
}

#[test]
fn test_array_wrapper_with_foundation_and_content() {
    let (wrapped, inner) = common::fundamento_em_array();
    assert_eq!(detect(&wrapped, None), detect(&inner, None));

    let resolution = resolve(&wrapped, None);
    assert_eq!(resolution.content_type, ContentTypeId::Post);
    assert_eq!(
        resolution.source,
        DetectionSource::Structural {
            probe: "post_fundamento"
        }
    );
    assert_eq!(resolution.renderer, RendererId::PostView);
    assert!(!resolution.record.empty);

    let CanonicalContent::Post(post) = &resolution.record.content else {
        unreachable!("expected post content");
    };
    assert_eq!(post.legenda, "Deus amou");
    assert_eq!(post.hashtags, vec!["#amor"]);
    assert_eq!(post.fundamento_biblico.versiculos, vec!["Jo 3:16"]);
    assert_eq!(
        post.fundamento_biblico.principio_atemporal,
        "O amor de Deus alcança todos"
    );
    assert_eq!(resolution.record, resolve(&inner, None).record);
}

#[test]
fn test_scalar_hashtags_become_list() {
    let resolution = resolve(&common::post_hashtag_escalar(), Some("post"));
    let CanonicalContent::Post(post) = &resolution.record.content else {
        unreachable!("expected post content");
    };
    assert_eq!(post.hashtags, vec!["#fe"]);
    assert_eq!(post.legenda, "Bom dia!");
}

#[test]
fn test_video_labels_resolve_to_one_renderer() {
    let raw = common::roteiro_video();
    for label in ["roteiroReels", "reel", "roteiro_video_completo", "Roteiro Vídeo"] {
        let resolution = resolve(&raw, Some(label));
        assert_eq!(resolution.content_type, ContentTypeId::Reel, "{label}");
        assert_eq!(resolution.renderer, RendererId::ReelView, "{label}");
    }

    let resolution = resolve(&raw, None);
    assert_eq!(resolution.content_type, ContentTypeId::Reel);
    let CanonicalContent::Reel(reel) = &resolution.record.content else {
        unreachable!("expected reel content");
    };
    assert_eq!(reel.titulo, "Ansiedade");
    assert_eq!(reel.cenas[1].fala, "Filipenses 4:6");
    assert_eq!(reel.hashtags, vec!["#ansiedade #paz"]);
}

#[test]
fn test_total_blank_payload() {
    let resolution = resolve(&json!({}), None);
    assert_eq!(resolution.content_type, ContentTypeId::GenericFallback);
    assert_eq!(resolution.source, DetectionSource::Fallback);
    assert!(resolution.record.empty);
    assert_eq!(resolution.renderer, RendererId::DefaultView);

    let value = resolution.record.to_value();
    assert_eq!(value["_empty"], true);
    assert_eq!(value["tipo"], "generic_fallback");
}

#[test]
fn test_blank_payload_with_label_keeps_type_but_defaults_view() {
    let resolution = resolve(&json!({"titulo": "  ", "slides": []}), Some("carrossel"));
    assert_eq!(resolution.content_type, ContentTypeId::Carrossel);
    assert_eq!(resolution.renderer, RendererId::DefaultView);
}

#[test]
fn test_unknown_shape_keeps_its_content() {
    let resolution = resolve(&common::desconhecido(), None);
    assert_eq!(resolution.content_type, ContentTypeId::GenericFallback);
    assert_eq!(resolution.renderer, RendererId::GenericView);

    let CanonicalContent::GenericFallback(generico) = &resolution.record.content else {
        unreachable!("expected generic content");
    };
    assert_eq!(generico.titulo, "Retiro de casais");
    let titulos: Vec<&str> = generico.secoes.iter().map(|s| s.titulo.as_str()).collect();
    assert_eq!(titulos, vec!["Programacao", "Investimento"]);
    assert_eq!(generico.secoes[0].conteudo, "Chegada\nPalestra\nJantar");
    assert_eq!(generico.secoes[1].conteudo, "350");
}

#[test]
fn test_resolve_str_round_trip_through_persisted_record() {
    let first = resolve(&common::roteiro_video(), Some("reels"));
    let persisted = serde_json::to_string(&first.record).unwrap();

    let second = resolve_str(&persisted, None).unwrap();
    assert_eq!(second.content_type, ContentTypeId::Reel);
    assert_eq!(second.source, DetectionSource::Embedded);
    assert_eq!(second.record, first.record);
}

#[test]
fn test_export_of_resolved_record() {
    let resolution = resolve(&common::post_em_array(), None);
    let text = to_plain_text(&resolution.record);
    assert!(text.starts_with("Titulo\nDeus cuida"));
    assert!(text.contains("Hashtags\n#fe #cuidado"));
    assert!(text.contains("Contexto: Carta a cristãos perseguidos"));

    assert_eq!(title(&resolution.record).as_deref(), Some("Deus cuida"));
    assert!(preview(&resolution.record, 30).chars().count() <= 30);
}
