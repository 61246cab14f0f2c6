//! Long-form media: podcast scripts, blog articles, and e-mail.

use serde::Serialize;

use super::{BlocoPodcast, Canonical, Fields, Secao};

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct RoteiroPodcast {
    pub titulo: String,
    pub introducao: String,
    pub blocos: Vec<BlocoPodcast>,
    pub encerramento: String,
}

impl_blank!(RoteiroPodcast {
    titulo,
    introducao,
    blocos,
    encerramento
});

impl Canonical for RoteiroPodcast {
    fn from_fields(f: &Fields<'_>) -> Self {
        Self {
            titulo: f.text("titulo"),
            introducao: f.text("introducao"),
            blocos: f.items("blocos"),
            encerramento: f.text("encerramento"),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ArtigoBlog {
    pub titulo: String,
    pub subtitulo: String,
    pub introducao: String,
    pub secoes: Vec<Secao>,
    pub conclusao: String,
    pub palavras_chave: Vec<String>,
}

impl_blank!(ArtigoBlog {
    titulo,
    subtitulo,
    introducao,
    secoes,
    conclusao,
    palavras_chave
});

impl Canonical for ArtigoBlog {
    fn from_fields(f: &Fields<'_>) -> Self {
        Self {
            titulo: f.text("titulo"),
            subtitulo: f.text("subtitulo"),
            introducao: f.text("introducao"),
            secoes: f.items("secoes"),
            conclusao: f.text("conclusao"),
            palavras_chave: f.texts("palavras_chave"),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Email {
    pub assunto: String,
    pub saudacao: String,
    pub corpo: String,
    pub cta: String,
    pub assinatura: String,
}

impl_blank!(Email {
    assunto,
    saudacao,
    corpo,
    cta,
    assinatura
});

impl Canonical for Email {
    fn from_fields(f: &Fields<'_>) -> Self {
        Self {
            assunto: f.text("assunto"),
            saudacao: f.text("saudacao"),
            corpo: f.text("corpo"),
            cta: f.text("cta"),
            assinatura: f.text("assinatura"),
        }
    }
}
