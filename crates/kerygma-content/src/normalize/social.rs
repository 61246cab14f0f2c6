//! Social media content: feed posts, carousels, video scripts, stories, and
//! the weekly pack that bundles them.

use serde::Serialize;

use super::{Canonical, Cena, Fields, FundamentoBiblico, Slide, TelaStory};

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Post {
    pub titulo: String,
    pub legenda: String,
    pub hashtags: Vec<String>,
    pub cta: String,
    pub fundamento_biblico: FundamentoBiblico,
}

impl_blank!(Post {
    titulo,
    legenda,
    hashtags,
    cta,
    fundamento_biblico
});

impl Canonical for Post {
    fn from_fields(f: &Fields<'_>) -> Self {
        Self {
            titulo: f.text("titulo"),
            legenda: f.text("legenda"),
            hashtags: f.texts("hashtags"),
            cta: f.text("cta"),
            fundamento_biblico: f.nested("fundamento_biblico"),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Carrossel {
    pub titulo: String,
    pub slides: Vec<Slide>,
    pub legenda: String,
    pub hashtags: Vec<String>,
    pub cta: String,
    pub fundamento_biblico: FundamentoBiblico,
}

impl_blank!(Carrossel {
    titulo,
    slides,
    legenda,
    hashtags,
    cta,
    fundamento_biblico
});

impl Canonical for Carrossel {
    fn from_fields(f: &Fields<'_>) -> Self {
        Self {
            titulo: f.text("titulo"),
            slides: f.items("slides"),
            legenda: f.text("legenda"),
            hashtags: f.texts("hashtags"),
            cta: f.text("cta"),
            fundamento_biblico: f.nested("fundamento_biblico"),
        }
    }
}

/// Short vertical video script (reels, shorts, TikTok).
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Reel {
    pub titulo: String,
    pub gancho: String,
    pub roteiro: String,
    pub cenas: Vec<Cena>,
    pub legenda: String,
    pub hashtags: Vec<String>,
    pub cta: String,
    pub fundamento_biblico: FundamentoBiblico,
}

impl_blank!(Reel {
    titulo,
    gancho,
    roteiro,
    cenas,
    legenda,
    hashtags,
    cta,
    fundamento_biblico
});

impl Canonical for Reel {
    fn from_fields(f: &Fields<'_>) -> Self {
        Self {
            titulo: f.text("titulo"),
            gancho: f.text("gancho"),
            roteiro: f.text("roteiro"),
            cenas: f.items("cenas"),
            legenda: f.text("legenda"),
            hashtags: f.texts("hashtags"),
            cta: f.text("cta"),
            fundamento_biblico: f.nested("fundamento_biblico"),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Stories {
    pub titulo: String,
    pub telas: Vec<TelaStory>,
    pub cta: String,
}

impl_blank!(Stories { titulo, telas, cta });

impl Canonical for Stories {
    fn from_fields(f: &Fields<'_>) -> Self {
        Self {
            titulo: f.text("titulo"),
            telas: f.items("telas"),
            cta: f.text("cta"),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct FrasesImpacto {
    pub titulo: String,
    pub frases: Vec<String>,
    pub contexto: String,
}

impl_blank!(FrasesImpacto {
    titulo,
    frases,
    contexto
});

impl Canonical for FrasesImpacto {
    fn from_fields(f: &Fields<'_>) -> Self {
        Self {
            titulo: f.text("titulo"),
            frases: f.texts("frases"),
            contexto: f.text("contexto"),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct MensagemWhatsapp {
    pub mensagem: String,
    pub variacoes: Vec<String>,
    pub cta: String,
}

impl_blank!(MensagemWhatsapp {
    mensagem,
    variacoes,
    cta
});

impl Canonical for MensagemWhatsapp {
    fn from_fields(f: &Fields<'_>) -> Self {
        Self {
            mensagem: f.text("mensagem"),
            variacoes: f.texts("variacoes"),
            cta: f.text("cta"),
        }
    }
}

/// Everything generated from one sermon for the week's social channels.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct PackSemanal {
    pub resumo_pregacao: String,
    pub versiculos_base: Vec<String>,
    pub legendas_instagram: Vec<String>,
    pub frases_impacto: Vec<String>,
    pub ideias_stories: Vec<String>,
    pub hashtags: Vec<String>,
    pub fundamento_biblico: FundamentoBiblico,
}

impl_blank!(PackSemanal {
    resumo_pregacao,
    versiculos_base,
    legendas_instagram,
    frases_impacto,
    ideias_stories,
    hashtags,
    fundamento_biblico
});

impl Canonical for PackSemanal {
    fn from_fields(f: &Fields<'_>) -> Self {
        Self {
            resumo_pregacao: f.text("resumo_pregacao"),
            versiculos_base: f.texts("versiculos_base"),
            legendas_instagram: f.texts("legendas_instagram"),
            frases_impacto: f.texts("frases_impacto"),
            ideias_stories: f.texts("ideias_stories"),
            hashtags: f.texts("hashtags"),
            fundamento_biblico: f.nested("fundamento_biblico"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::normalize::{CanonicalContent, normalize};
    use kerygma_core::ContentTypeId;
    use serde_json::json;

    #[test]
    fn test_post_legacy_caption_keys() {
        let raw = json!({
            "headline": "Graça",
            "caption": "Texto do post",
            "tags": "#graca",
            "chamada_acao": "Compartilhe",
            "base_biblica": "Ef 2:8"
        });
        let CanonicalContent::Post(post) = normalize(&raw, ContentTypeId::Post).content else {
            unreachable!()
        };
        assert_eq!(post.titulo, "Graça");
        assert_eq!(post.legenda, "Texto do post");
        assert_eq!(post.hashtags, vec!["#graca"]);
        assert_eq!(post.cta, "Compartilhe");
        assert_eq!(post.fundamento_biblico.versiculos, vec!["Ef 2:8"]);
    }

    #[test]
    fn test_carrossel_wrapper_object() {
        let raw = json!({
            "carrossel": {
                "titulo": "5 verdades",
                "slides": [{"titulo": "1", "texto": "Deus é amor"}, "Deus é fiel"]
            }
        });
        let CanonicalContent::Carrossel(c) = normalize(&raw, ContentTypeId::Carrossel).content
        else {
            unreachable!()
        };
        assert_eq!(c.titulo, "5 verdades");
        assert_eq!(c.slides.len(), 2);
        assert_eq!(c.slides[1].texto, "Deus é fiel");
    }

    #[test]
    fn test_reel_from_roteiro_video_wrapper() {
        let raw = json!({
            "roteiro_video": {
                "gancho": "Você já se sentiu sozinho?",
                "cenas": [
                    {"tempo": "0-3s", "visual": "close", "narracao": "Pare tudo"},
                    {"tempo": "3-10s", "texto_na_tela": "Is 41:10"}
                ]
            },
            "hook": "Hook de fora"
        });
        let CanonicalContent::Reel(reel) = normalize(&raw, ContentTypeId::Reel).content else {
            unreachable!()
        };
        assert_eq!(reel.gancho, "Hook de fora");
        assert_eq!(reel.cenas.len(), 2);
        assert_eq!(reel.cenas[0].fala, "Pare tudo");
        assert_eq!(reel.cenas[1].texto_tela, "Is 41:10");
    }

    #[test]
    fn test_reel_gancho_from_wrapper() {
        let raw = json!({"roteiro_video": {"gancho": "de dentro"}});
        let CanonicalContent::Reel(reel) = normalize(&raw, ContentTypeId::Reel).content else {
            unreachable!()
        };
        assert_eq!(reel.gancho, "de dentro");
    }

    #[test]
    fn test_stories_sequence_alias() {
        let raw = json!({"sequencia": ["Bom dia!", {"texto": "Enquete", "enquete": "Sim/Não"}]});
        let CanonicalContent::Stories(s) = normalize(&raw, ContentTypeId::Stories).content else {
            unreachable!()
        };
        assert_eq!(s.telas.len(), 2);
        assert_eq!(s.telas[1].interacao, "Sim/Não");
    }

    #[test]
    fn test_pack_semanal_lists() {
        let raw = json!({
            "resumo": "Sermão sobre fé",
            "versiculos": ["Hb 11:1"],
            "legendas": ["Legenda 1", "Legenda 2"],
            "frases_impactantes": "A fé move",
            "hashtags": ["#fe"]
        });
        let CanonicalContent::PackSemanal(p) = normalize(&raw, ContentTypeId::PackSemanal).content
        else {
            unreachable!()
        };
        assert_eq!(p.resumo_pregacao, "Sermão sobre fé");
        assert_eq!(p.versiculos_base, vec!["Hb 11:1"]);
        assert_eq!(p.legendas_instagram.len(), 2);
        assert_eq!(p.frases_impacto, vec!["A fé move"]);
        assert!(p.ideias_stories.is_empty());
    }

    #[test]
    fn test_whatsapp_wrapper_string() {
        let raw = json!({"mensagem_whatsapp": "Bom dia, família!"});
        let CanonicalContent::MensagemWhatsapp(m) =
            normalize(&raw, ContentTypeId::MensagemWhatsapp).content
        else {
            unreachable!()
        };
        assert_eq!(m.mensagem, "Bom dia, família!");
    }
}
