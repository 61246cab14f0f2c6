//! Church life and leadership content: invitations, notices, planning,
//! training, and worship.

use serde::Serialize;

use super::{Canonical, DiaDesafio, EntradaCalendario, Fields, FundamentoBiblico, Musica, Secao};

/// Event invitation.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Convite {
    pub titulo: String,
    pub evento: String,
    pub data: String,
    pub horario: String,
    pub local: String,
    pub descricao: String,
    pub cta: String,
}

impl_blank!(Convite {
    titulo,
    evento,
    data,
    horario,
    local,
    descricao,
    cta
});

impl Canonical for Convite {
    fn from_fields(f: &Fields<'_>) -> Self {
        Self {
            titulo: f.text("titulo"),
            evento: f.text("evento"),
            data: f.text("data"),
            horario: f.text("horario"),
            local: f.text("local"),
            descricao: f.text("descricao"),
            cta: f.text("cta"),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Aviso {
    pub titulo: String,
    pub mensagem: String,
    pub data: String,
    pub publico: String,
    pub cta: String,
}

impl_blank!(Aviso {
    titulo,
    mensagem,
    data,
    publico,
    cta
});

impl Canonical for Aviso {
    fn from_fields(f: &Fields<'_>) -> Self {
        Self {
            titulo: f.text("titulo"),
            mensagem: f.text("mensagem"),
            data: f.text("data"),
            publico: f.text("publico"),
            cta: f.text("cta"),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Guia {
    pub titulo: String,
    pub introducao: String,
    pub passos: Vec<String>,
    pub dicas: Vec<String>,
    pub conclusao: String,
}

impl_blank!(Guia {
    titulo,
    introducao,
    passos,
    dicas,
    conclusao
});

impl Canonical for Guia {
    fn from_fields(f: &Fields<'_>) -> Self {
        Self {
            titulo: f.text("titulo"),
            introducao: f.text("introducao"),
            passos: f.texts("passos"),
            dicas: f.texts("dicas"),
            conclusao: f.text("conclusao"),
        }
    }
}

/// Editorial calendar for a period.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Calendario {
    pub titulo: String,
    pub periodo: String,
    pub entradas: Vec<EntradaCalendario>,
}

impl_blank!(Calendario {
    titulo,
    periodo,
    entradas
});

impl Canonical for Calendario {
    fn from_fields(f: &Fields<'_>) -> Self {
        Self {
            titulo: f.text("titulo"),
            periodo: f.text("periodo"),
            entradas: f.items("entradas"),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct DesafioSemanal {
    pub titulo: String,
    pub objetivo: String,
    pub dias: Vec<DiaDesafio>,
    pub recompensa: String,
    pub hashtags: Vec<String>,
    pub fundamento_biblico: FundamentoBiblico,
}

impl_blank!(DesafioSemanal {
    titulo,
    objetivo,
    dias,
    recompensa,
    hashtags,
    fundamento_biblico
});

impl Canonical for DesafioSemanal {
    fn from_fields(f: &Fields<'_>) -> Self {
        Self {
            titulo: f.text("titulo"),
            objetivo: f.text("objetivo"),
            dias: f.items("dias"),
            recompensa: f.text("recompensa"),
            hashtags: f.texts("hashtags"),
            fundamento_biblico: f.nested("fundamento_biblico"),
        }
    }
}

/// Small-group icebreaker or activity.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct DinamicaCelula {
    pub titulo: String,
    pub objetivo: String,
    pub materiais: Vec<String>,
    pub passos: Vec<String>,
    pub reflexao: String,
}

impl_blank!(DinamicaCelula {
    titulo,
    objetivo,
    materiais,
    passos,
    reflexao
});

impl Canonical for DinamicaCelula {
    fn from_fields(f: &Fields<'_>) -> Self {
        Self {
            titulo: f.text("titulo"),
            objetivo: f.text("objetivo"),
            materiais: f.texts("materiais"),
            passos: f.texts("passos"),
            reflexao: f.text("reflexao"),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct IdeiaEstrategica {
    pub titulo: String,
    pub problema: String,
    pub estrategia: String,
    pub acoes: Vec<String>,
    pub resultado_esperado: String,
}

impl_blank!(IdeiaEstrategica {
    titulo,
    problema,
    estrategia,
    acoes,
    resultado_esperado
});

impl Canonical for IdeiaEstrategica {
    fn from_fields(f: &Fields<'_>) -> Self {
        Self {
            titulo: f.text("titulo"),
            problema: f.text("problema"),
            estrategia: f.text("estrategia"),
            acoes: f.texts("acoes"),
            resultado_esperado: f.text("resultado_esperado"),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Treinamento {
    pub titulo: String,
    pub objetivo: String,
    pub modulos: Vec<Secao>,
    pub exercicios: Vec<String>,
}

impl_blank!(Treinamento {
    titulo,
    objetivo,
    modulos,
    exercicios
});

impl Canonical for Treinamento {
    fn from_fields(f: &Fields<'_>) -> Self {
        Self {
            titulo: f.text("titulo"),
            objetivo: f.text("objetivo"),
            modulos: f.items("modulos"),
            exercicios: f.texts("exercicios"),
        }
    }
}

/// Worship set list.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Louvor {
    pub titulo: String,
    pub tema: String,
    pub musicas: Vec<Musica>,
    pub observacoes: String,
}

impl_blank!(Louvor {
    titulo,
    tema,
    musicas,
    observacoes
});

impl Canonical for Louvor {
    fn from_fields(f: &Fields<'_>) -> Self {
        Self {
            titulo: f.text("titulo"),
            tema: f.text("tema"),
            musicas: f.items("musicas"),
            observacoes: f.text("observacoes"),
        }
    }
}
