//! Shared fixtures for the integration tests.
//!
//! Payloads mirror what different prompt versions of the generator have
//! produced over time.

#![allow(dead_code)]

use serde_json::{Value, json};

/// A calendar payload whose stored label was saved as "post".
pub fn calendario_rotulado_como_post() -> (Value, &'static str) {
    (
        json!({
            "calendario_editorial": {
                "titulo": "Março com propósito",
                "periodo": "01/03 a 07/03",
                "posts": [
                    {"dia": "Segunda", "formato": "carrossel", "tema": "Fé que age"},
                    {"dia": "Quarta", "formato": "reel", "tema": "Oração"},
                    {"dia": "Sexta", "formato": "post", "titulo": "Comunhão"}
                ]
            }
        }),
        "post",
    )
}

/// A post wrapped in a one-element array.
pub fn post_em_array() -> Value {
    json!([{
        "titulo": "Deus cuida",
        "legenda": "Lançai sobre ele toda a vossa ansiedade.",
        "hashtags": ["#fe", "#cuidado"],
        "fundamento_biblico": {
            "versiculos": ["1Pe 5:7"],
            "contexto": "Carta a cristãos perseguidos",
            "principio_atemporal": "Deus se importa"
        }
    }])
}

/// A post with only a biblical foundation and nested content, wrapped in a
/// one-element array.
pub fn fundamento_em_array() -> (Value, Value) {
    let inner = json!({
        "fundamento_biblico": {
            "versiculos": "Jo 3:16",
            "principio_atemporal": "O amor de Deus alcança todos"
        },
        "conteudo": {"texto": "Deus amou", "hashtags": ["#amor"]}
    });
    (json!([inner.clone()]), inner)
}

/// A post whose hashtags field is a bare string.
pub fn post_hashtag_escalar() -> Value {
    json!({"texto": "Bom dia!", "hashtags": "#fe"})
}

/// A video script as the older `roteiro_video` prompt produced it.
pub fn roteiro_video() -> Value {
    json!({
        "roteiro_video": {
            "titulo": "Ansiedade",
            "gancho": "Você não está sozinho.",
            "cenas": [
                {"tempo": "0-3s", "visual": "Close no rosto", "fala": "Você não está sozinho."},
                {"tempo": "3-15s", "visual": "Bíblia aberta", "narracao": "Filipenses 4:6"}
            ]
        },
        "hashtags": "#ansiedade #paz"
    })
}

/// A payload of unknown shape.
pub fn desconhecido() -> Value {
    json!({
        "nome": "Retiro de casais",
        "programacao": {"sexta": "Chegada", "sabado": ["Palestra", "Jantar"]},
        "investimento": 350
    })
}
