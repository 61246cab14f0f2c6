//! The generic record used when no specific type fits.
//!
//! Besides `titulo` and `conteudo`, every other top-level key of the payload
//! becomes a section, so nothing the generator wrote is lost even when its
//! shape is unknown.

use serde::Serialize;

use kerygma_core::util::json::{MAX_DEPTH, flatten_text};
use kerygma_core::{ContentTypeId, humanize_key};

use super::{Blank, Canonical, Fields, Secao};
use crate::aliases::{Scope, all_aliases};

/// Keys that describe the payload rather than carry content.
const RESERVED_KEYS: &[&str] = &["tipo", "tipo_conteudo", "content_type", "_empty"];

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Generico {
    pub titulo: String,
    pub conteudo: String,
    pub secoes: Vec<Secao>,
}

impl_blank!(Generico {
    titulo,
    conteudo,
    secoes
});

impl Canonical for Generico {
    fn from_fields(f: &Fields<'_>) -> Self {
        let mut secoes: Vec<Secao> = f.items("secoes");
        if secoes.is_empty() {
            secoes = derive_sections(f);
        }
        Self {
            titulo: f.text("titulo"),
            conteudo: f.text("conteudo"),
            secoes,
        }
    }
}

/// One section per leftover top-level key, titled by the key.
fn derive_sections(f: &Fields<'_>) -> Vec<Secao> {
    let scope = Scope::Type(ContentTypeId::GenericFallback);
    let claimed: Vec<&str> = all_aliases(scope).chain(RESERVED_KEYS.iter().copied()).collect();

    let secoes: Vec<Secao> = f
        .map()
        .iter()
        .filter(|(key, _)| !claimed.contains(&key.as_str()))
        .map(|(key, value)| Secao {
            titulo: humanize_key(key),
            conteudo: flatten_text(value, MAX_DEPTH),
        })
        .filter(|secao| !secao.conteudo.is_blank())
        .collect();

    if !secoes.is_empty() {
        log::debug!("Derived {} generic sections from leftover keys", secoes.len());
    }
    secoes
}

#[cfg(test)]
mod tests {
    use crate::normalize::{CanonicalContent, normalize};
    use kerygma_core::ContentTypeId;
    use serde_json::json;

    fn generico(raw: serde_json::Value) -> super::Generico {
        let CanonicalContent::GenericFallback(g) =
            normalize(&raw, ContentTypeId::GenericFallback).content
        else {
            unreachable!()
        };
        g
    }

    #[test]
    fn test_title_and_body_from_aliases() {
        let g = generico(json!({"tema": "Gratidão", "texto": "Dê graças em tudo"}));
        assert_eq!(g.titulo, "Gratidão");
        assert_eq!(g.conteudo, "Dê graças em tudo");
        assert!(g.secoes.is_empty());
    }

    #[test]
    fn test_leftover_keys_become_sections() {
        let g = generico(json!({
            "titulo": "Receita de culto",
            "tipo": "desconhecido",
            "ordem_do_culto": ["Louvor", "Palavra", {"momento": "Ceia"}],
            "observacoes_gerais": "Chegar cedo",
            "vazio": "",
            "nulo": null
        }));
        assert_eq!(g.secoes.len(), 2);
        assert_eq!(g.secoes[0].titulo, "Ordem do culto");
        assert_eq!(g.secoes[0].conteudo, "Louvor\nPalavra\nCeia");
        assert_eq!(g.secoes[1].titulo, "Observacoes gerais");
    }

    #[test]
    fn test_explicit_sections_win() {
        let g = generico(json!({
            "secoes": [{"titulo": "Um", "conteudo": "1"}],
            "extra": "não vira seção"
        }));
        assert_eq!(g.secoes.len(), 1);
        assert_eq!(g.secoes[0].titulo, "Um");
    }

    #[test]
    fn test_alias_keys_are_not_sections() {
        let g = generico(json!({"conteudo": "principal", "descricao": "alternativa"}));
        assert_eq!(g.conteudo, "principal");
        assert!(g.secoes.is_empty());
    }
}
