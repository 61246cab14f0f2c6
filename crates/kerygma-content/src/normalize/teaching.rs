//! Teaching and devotional content.

use serde::Serialize;

use super::{
    Canonical, Fields, FundamentoBiblico, LeituraDia, PerguntaResposta, QuestaoQuiz, Secao,
};

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Devocional {
    pub titulo: String,
    pub versiculo: String,
    pub reflexao: String,
    pub aplicacao: String,
    pub oracao: String,
    pub fundamento_biblico: FundamentoBiblico,
}

impl_blank!(Devocional {
    titulo,
    versiculo,
    reflexao,
    aplicacao,
    oracao,
    fundamento_biblico
});

impl Canonical for Devocional {
    fn from_fields(f: &Fields<'_>) -> Self {
        Self {
            titulo: f.text("titulo"),
            versiculo: f.text("versiculo"),
            reflexao: f.text("reflexao"),
            aplicacao: f.text("aplicacao"),
            oracao: f.text("oracao"),
            fundamento_biblico: f.nested("fundamento_biblico"),
        }
    }
}

/// Bible study for small groups.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Estudo {
    pub titulo: String,
    pub introducao: String,
    pub topicos: Vec<Secao>,
    pub perguntas_discussao: Vec<String>,
    pub conclusao: String,
    pub fundamento_biblico: FundamentoBiblico,
}

impl_blank!(Estudo {
    titulo,
    introducao,
    topicos,
    perguntas_discussao,
    conclusao,
    fundamento_biblico
});

impl Canonical for Estudo {
    fn from_fields(f: &Fields<'_>) -> Self {
        Self {
            titulo: f.text("titulo"),
            introducao: f.text("introducao"),
            topicos: f.items("topicos"),
            perguntas_discussao: f.texts("perguntas_discussao"),
            conclusao: f.text("conclusao"),
            fundamento_biblico: f.nested("fundamento_biblico"),
        }
    }
}

/// Sermon outline.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Esboco {
    pub titulo: String,
    pub introducao: String,
    pub topicos: Vec<Secao>,
    pub conclusao: String,
    pub apelo: String,
    pub fundamento_biblico: FundamentoBiblico,
}

impl_blank!(Esboco {
    titulo,
    introducao,
    topicos,
    conclusao,
    apelo,
    fundamento_biblico
});

impl Canonical for Esboco {
    fn from_fields(f: &Fields<'_>) -> Self {
        Self {
            titulo: f.text("titulo"),
            introducao: f.text("introducao"),
            topicos: f.items("topicos"),
            conclusao: f.text("conclusao"),
            apelo: f.text("apelo"),
            fundamento_biblico: f.nested("fundamento_biblico"),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ResumoPregacao {
    pub titulo: String,
    pub resumo: String,
    pub pontos_principais: Vec<String>,
    pub aplicacao: String,
    pub fundamento_biblico: FundamentoBiblico,
}

impl_blank!(ResumoPregacao {
    titulo,
    resumo,
    pontos_principais,
    aplicacao,
    fundamento_biblico
});

impl Canonical for ResumoPregacao {
    fn from_fields(f: &Fields<'_>) -> Self {
        Self {
            titulo: f.text("titulo"),
            resumo: f.text("resumo"),
            pontos_principais: f.texts("pontos_principais"),
            aplicacao: f.text("aplicacao"),
            fundamento_biblico: f.nested("fundamento_biblico"),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct QaEstruturado {
    pub titulo: String,
    pub perguntas: Vec<PerguntaResposta>,
    pub fundamento_biblico: FundamentoBiblico,
}

impl_blank!(QaEstruturado {
    titulo,
    perguntas,
    fundamento_biblico
});

impl Canonical for QaEstruturado {
    fn from_fields(f: &Fields<'_>) -> Self {
        Self {
            titulo: f.text("titulo"),
            perguntas: f.items("perguntas"),
            fundamento_biblico: f.nested("fundamento_biblico"),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Quiz {
    pub titulo: String,
    pub questoes: Vec<QuestaoQuiz>,
}

impl_blank!(Quiz { titulo, questoes });

impl Canonical for Quiz {
    fn from_fields(f: &Fields<'_>) -> Self {
        Self {
            titulo: f.text("titulo"),
            questoes: f.items("questoes"),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct PlanoLeitura {
    pub titulo: String,
    pub duracao: String,
    pub dias: Vec<LeituraDia>,
}

impl_blank!(PlanoLeitura {
    titulo,
    duracao,
    dias
});

impl Canonical for PlanoLeitura {
    fn from_fields(f: &Fields<'_>) -> Self {
        Self {
            titulo: f.text("titulo"),
            duracao: f.text("duracao"),
            dias: f.items("dias"),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Oracao {
    pub titulo: String,
    pub intencao: String,
    pub oracao: String,
    pub versiculo: String,
}

impl_blank!(Oracao {
    titulo,
    intencao,
    oracao,
    versiculo
});

impl Canonical for Oracao {
    fn from_fields(f: &Fields<'_>) -> Self {
        Self {
            titulo: f.text("titulo"),
            intencao: f.text("intencao"),
            oracao: f.text("oracao"),
            versiculo: f.text("versiculo"),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Testemunho {
    pub titulo: String,
    pub historia: String,
    pub reflexao: String,
    pub versiculo: String,
}

impl_blank!(Testemunho {
    titulo,
    historia,
    reflexao,
    versiculo
});

impl Canonical for Testemunho {
    fn from_fields(f: &Fields<'_>) -> Self {
        Self {
            titulo: f.text("titulo"),
            historia: f.text("historia"),
            reflexao: f.text("reflexao"),
            versiculo: f.text("versiculo"),
        }
    }
}

/// Children's ministry lesson.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct AulaInfantil {
    pub titulo: String,
    pub objetivo: String,
    pub historia: String,
    pub atividades: Vec<String>,
    pub versiculo_memorizar: String,
}

impl_blank!(AulaInfantil {
    titulo,
    objetivo,
    historia,
    atividades,
    versiculo_memorizar
});

impl Canonical for AulaInfantil {
    fn from_fields(f: &Fields<'_>) -> Self {
        Self {
            titulo: f.text("titulo"),
            objetivo: f.text("objetivo"),
            historia: f.text("historia"),
            atividades: f.texts("atividades"),
            versiculo_memorizar: f.text("versiculo_memorizar"),
        }
    }
}
