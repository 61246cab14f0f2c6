//! Nested shapes shared between content types.

use serde::Serialize;
use serde_json::Value;

use kerygma_core::coerce_text_list;

use super::{Fields, Shape, label_slot};
use crate::aliases::ShapeId;

/// The biblical foundation attached to most teaching and social content.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct FundamentoBiblico {
    pub versiculos: Vec<String>,
    pub contexto: String,
    pub principio_atemporal: String,
}

impl_blank!(FundamentoBiblico {
    versiculos,
    contexto,
    principio_atemporal
});

impl Shape for FundamentoBiblico {
    const SHAPE: ShapeId = ShapeId::FundamentoBiblico;

    fn from_fields(f: &Fields<'_>) -> Self {
        Self {
            versiculos: f.texts("versiculos"),
            contexto: f.text("contexto"),
            principio_atemporal: f.text("principio_atemporal"),
        }
    }

    fn from_text(text: String) -> Self {
        Self {
            versiculos: vec![text],
            ..Self::default()
        }
    }

    // A bare string or list of references is the verse list.
    fn from_scalar(value: &Value) -> Self {
        Self {
            versiculos: coerce_text_list(value).unwrap_or_default(),
            ..Self::default()
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Secao {
    pub titulo: String,
    pub conteudo: String,
}

impl_blank!(Secao { titulo, conteudo });

impl Shape for Secao {
    const SHAPE: ShapeId = ShapeId::Secao;

    fn from_fields(f: &Fields<'_>) -> Self {
        Self {
            titulo: f.text("titulo"),
            conteudo: f.text("conteudo"),
        }
    }

    fn from_text(conteudo: String) -> Self {
        Self {
            conteudo,
            ..Self::default()
        }
    }

    fn label_with_key(&mut self, key: &str) {
        label_slot(&mut self.titulo, key);
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Slide {
    pub titulo: String,
    pub texto: String,
    pub sugestao_visual: String,
}

impl_blank!(Slide {
    titulo,
    texto,
    sugestao_visual
});

impl Shape for Slide {
    const SHAPE: ShapeId = ShapeId::Slide;

    fn from_fields(f: &Fields<'_>) -> Self {
        Self {
            titulo: f.text("titulo"),
            texto: f.text("texto"),
            sugestao_visual: f.text("sugestao_visual"),
        }
    }

    fn from_text(texto: String) -> Self {
        Self {
            texto,
            ..Self::default()
        }
    }
}

/// One scene of a video script.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Cena {
    pub tempo: String,
    pub visual: String,
    pub fala: String,
    pub texto_tela: String,
}

impl_blank!(Cena {
    tempo,
    visual,
    fala,
    texto_tela
});

impl Shape for Cena {
    const SHAPE: ShapeId = ShapeId::Cena;

    fn from_fields(f: &Fields<'_>) -> Self {
        Self {
            tempo: f.text("tempo"),
            visual: f.text("visual"),
            fala: f.text("fala"),
            texto_tela: f.text("texto_tela"),
        }
    }

    fn from_text(fala: String) -> Self {
        Self {
            fala,
            ..Self::default()
        }
    }

    fn label_with_key(&mut self, key: &str) {
        label_slot(&mut self.tempo, key);
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct TelaStory {
    pub texto: String,
    pub interacao: String,
    pub sugestao_visual: String,
}

impl_blank!(TelaStory {
    texto,
    interacao,
    sugestao_visual
});

impl Shape for TelaStory {
    const SHAPE: ShapeId = ShapeId::TelaStory;

    fn from_fields(f: &Fields<'_>) -> Self {
        Self {
            texto: f.text("texto"),
            interacao: f.text("interacao"),
            sugestao_visual: f.text("sugestao_visual"),
        }
    }

    fn from_text(texto: String) -> Self {
        Self {
            texto,
            ..Self::default()
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct PerguntaResposta {
    pub pergunta: String,
    pub resposta: String,
    pub referencia: String,
}

impl_blank!(PerguntaResposta {
    pergunta,
    resposta,
    referencia
});

impl Shape for PerguntaResposta {
    const SHAPE: ShapeId = ShapeId::PerguntaResposta;

    fn from_fields(f: &Fields<'_>) -> Self {
        Self {
            pergunta: f.text("pergunta"),
            resposta: f.text("resposta"),
            referencia: f.text("referencia"),
        }
    }

    fn from_text(pergunta: String) -> Self {
        Self {
            pergunta,
            ..Self::default()
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct QuestaoQuiz {
    pub pergunta: String,
    pub alternativas: Vec<String>,
    pub resposta_correta: String,
    pub explicacao: String,
}

impl_blank!(QuestaoQuiz {
    pergunta,
    alternativas,
    resposta_correta,
    explicacao
});

impl Shape for QuestaoQuiz {
    const SHAPE: ShapeId = ShapeId::QuestaoQuiz;

    fn from_fields(f: &Fields<'_>) -> Self {
        Self {
            pergunta: f.text("pergunta"),
            alternativas: f.texts("alternativas"),
            resposta_correta: f.text("resposta_correta"),
            explicacao: f.text("explicacao"),
        }
    }

    fn from_text(pergunta: String) -> Self {
        Self {
            pergunta,
            ..Self::default()
        }
    }
}

/// One day of a weekly challenge.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct DiaDesafio {
    pub dia: String,
    pub desafio: String,
    pub versiculo: String,
}

impl_blank!(DiaDesafio {
    dia,
    desafio,
    versiculo
});

impl Shape for DiaDesafio {
    const SHAPE: ShapeId = ShapeId::DiaDesafio;

    fn from_fields(f: &Fields<'_>) -> Self {
        Self {
            dia: f.text("dia"),
            desafio: f.text("desafio"),
            versiculo: f.text("versiculo"),
        }
    }

    fn from_text(desafio: String) -> Self {
        Self {
            desafio,
            ..Self::default()
        }
    }

    fn label_with_key(&mut self, key: &str) {
        label_slot(&mut self.dia, key);
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct EntradaCalendario {
    pub dia: String,
    pub formato: String,
    pub tema: String,
    pub descricao: String,
}

impl_blank!(EntradaCalendario {
    dia,
    formato,
    tema,
    descricao
});

impl Shape for EntradaCalendario {
    const SHAPE: ShapeId = ShapeId::EntradaCalendario;

    fn from_fields(f: &Fields<'_>) -> Self {
        Self {
            dia: f.text("dia"),
            formato: f.text("formato"),
            tema: f.text("tema"),
            descricao: f.text("descricao"),
        }
    }

    fn from_text(tema: String) -> Self {
        Self {
            tema,
            ..Self::default()
        }
    }

    fn label_with_key(&mut self, key: &str) {
        label_slot(&mut self.dia, key);
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct LeituraDia {
    pub dia: String,
    pub leitura: String,
    pub reflexao: String,
}

impl_blank!(LeituraDia {
    dia,
    leitura,
    reflexao
});

impl Shape for LeituraDia {
    const SHAPE: ShapeId = ShapeId::LeituraDia;

    fn from_fields(f: &Fields<'_>) -> Self {
        Self {
            dia: f.text("dia"),
            leitura: f.text("leitura"),
            reflexao: f.text("reflexao"),
        }
    }

    fn from_text(leitura: String) -> Self {
        Self {
            leitura,
            ..Self::default()
        }
    }

    fn label_with_key(&mut self, key: &str) {
        label_slot(&mut self.dia, key);
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct BlocoPodcast {
    pub titulo: String,
    pub conteudo: String,
    pub duracao: String,
}

impl_blank!(BlocoPodcast {
    titulo,
    conteudo,
    duracao
});

impl Shape for BlocoPodcast {
    const SHAPE: ShapeId = ShapeId::BlocoPodcast;

    fn from_fields(f: &Fields<'_>) -> Self {
        Self {
            titulo: f.text("titulo"),
            conteudo: f.text("conteudo"),
            duracao: f.text("duracao"),
        }
    }

    fn from_text(conteudo: String) -> Self {
        Self {
            conteudo,
            ..Self::default()
        }
    }

    fn label_with_key(&mut self, key: &str) {
        label_slot(&mut self.titulo, key);
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Musica {
    pub titulo: String,
    pub artista: String,
    pub momento: String,
}

impl_blank!(Musica {
    titulo,
    artista,
    momento
});

impl Shape for Musica {
    const SHAPE: ShapeId = ShapeId::Musica;

    fn from_fields(f: &Fields<'_>) -> Self {
        Self {
            titulo: f.text("titulo"),
            artista: f.text("artista"),
            momento: f.text("momento"),
        }
    }

    fn from_text(titulo: String) -> Self {
        Self {
            titulo,
            ..Self::default()
        }
    }

    fn label_with_key(&mut self, key: &str) {
        label_slot(&mut self.momento, key);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::aliases::{Scope, fields_of};
    use crate::normalize::{Blank, coerce_items, shape_from_value};
    use serde_json::json;

    fn keys<S: Serialize>(shape: &S) -> Vec<String> {
        serde_json::to_value(shape)
            .unwrap()
            .as_object()
            .unwrap()
            .keys()
            .cloned()
            .collect()
    }

    fn declared(shape: ShapeId) -> Vec<String> {
        fields_of(Scope::Shape(shape))
            .iter()
            .map(|f| f.field.to_string())
            .collect()
    }

    #[test]
    fn test_shape_fields_match_alias_table() {
        assert_eq!(keys(&FundamentoBiblico::default()), declared(ShapeId::FundamentoBiblico));
        assert_eq!(keys(&Secao::default()), declared(ShapeId::Secao));
        assert_eq!(keys(&Slide::default()), declared(ShapeId::Slide));
        assert_eq!(keys(&Cena::default()), declared(ShapeId::Cena));
        assert_eq!(keys(&TelaStory::default()), declared(ShapeId::TelaStory));
        assert_eq!(keys(&PerguntaResposta::default()), declared(ShapeId::PerguntaResposta));
        assert_eq!(keys(&QuestaoQuiz::default()), declared(ShapeId::QuestaoQuiz));
        assert_eq!(keys(&DiaDesafio::default()), declared(ShapeId::DiaDesafio));
        assert_eq!(keys(&EntradaCalendario::default()), declared(ShapeId::EntradaCalendario));
        assert_eq!(keys(&LeituraDia::default()), declared(ShapeId::LeituraDia));
        assert_eq!(keys(&BlocoPodcast::default()), declared(ShapeId::BlocoPodcast));
        assert_eq!(keys(&Musica::default()), declared(ShapeId::Musica));
    }

    // ------------------------------------------------------------------------
    // FundamentoBiblico
    // ------------------------------------------------------------------------

    #[test]
    fn test_fundamento_from_object_aliases() {
        let f: FundamentoBiblico = shape_from_value(&json!({
            "versiculo": "Jo 3:16",
            "contexto_historico": "Conversa com Nicodemos",
            "principio": "Deus ama"
        }));
        assert_eq!(f.versiculos, vec!["Jo 3:16"]);
        assert_eq!(f.contexto, "Conversa com Nicodemos");
        assert_eq!(f.principio_atemporal, "Deus ama");
    }

    #[test]
    fn test_fundamento_scalar_is_verses() {
        let f: FundamentoBiblico = shape_from_value(&json!("Sl 23"));
        assert_eq!(f.versiculos, vec!["Sl 23"]);
        let f: FundamentoBiblico = shape_from_value(&json!(["Sl 23", "", "Rm 8:28"]));
        assert_eq!(f.versiculos, vec!["Sl 23", "Rm 8:28"]);
    }

    #[test]
    fn test_fundamento_default_is_blank() {
        assert!(FundamentoBiblico::default().is_blank());
        assert!(shape_from_value::<FundamentoBiblico>(&json!(null)).is_blank());
    }

    // ------------------------------------------------------------------------
    // Item coercion
    // ------------------------------------------------------------------------

    #[test]
    fn test_scalar_items_fill_main_field() {
        let cenas: Vec<Cena> = coerce_items(&json!(["Abertura", 42]));
        assert_eq!(cenas[0].fala, "Abertura");
        assert_eq!(cenas[1].fala, "42");

        let quiz: Vec<QuestaoQuiz> = coerce_items(&json!("Quem construiu a arca?"));
        assert_eq!(quiz[0].pergunta, "Quem construiu a arca?");
    }

    #[test]
    fn test_keyed_days_take_their_key() {
        let dias: Vec<DiaDesafio> = coerce_items(&json!({
            "segunda": "Ler Salmo 1",
            "terca": {"dia": "Terça-feira", "desafio": "Orar por um amigo"}
        }));
        assert_eq!(dias.len(), 2);
        assert_eq!(dias[0].dia, "Segunda");
        assert_eq!(dias[0].desafio, "Ler Salmo 1");
        assert_eq!(dias[1].dia, "Terça-feira");
    }

    #[test]
    fn test_keyed_sections_take_humanized_title() {
        let secoes: Vec<Secao> = coerce_items(&json!({"primeiro_ponto": "Graça"}));
        assert_eq!(secoes[0].titulo, "Primeiro ponto");
        assert_eq!(secoes[0].conteudo, "Graça");
    }

    #[test]
    fn test_quiz_alternatives_coerce_to_list() {
        let q: QuestaoQuiz = shape_from_value(&json!({
            "enunciado": "Quantos discípulos?",
            "opcoes": ["10", "12", 7],
            "gabarito": "12"
        }));
        assert_eq!(q.alternativas, vec!["10", "12", "7"]);
        assert_eq!(q.resposta_correta, "12");
    }

    #[test]
    fn test_object_item_with_unknown_keys_is_dropped() {
        let slides: Vec<Slide> = coerce_items(&json!([{"cor": "azul"}, {"texto": "ok"}]));
        assert_eq!(slides.len(), 1);
    }
}
