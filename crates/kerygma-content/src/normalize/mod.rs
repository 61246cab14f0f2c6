//! Normalization of raw payloads into canonical records.
//!
//! [`normalize`] is total: whatever JSON comes in, a fully populated record of
//! the requested type comes out. Each canonical field asks the alias table for
//! its candidate source keys and takes the first one that coerces to something
//! non-blank. Missing data becomes empty strings, empty lists, and zero-valued
//! nested shapes; a record with nothing in it is flagged `_empty`.
//!
//! # Example
//!
//! ```rust
//! use kerygma_content::normalize::{normalize, CanonicalContent};
//! use kerygma_core::ContentTypeId;
//! use serde_json::json;
//!
//! let raw = json!({"texto": "Deus é fiel", "hashtags": "#fe"});
//! let record = normalize(&raw, ContentTypeId::Post);
//!
//! let CanonicalContent::Post(post) = &record.content else { unreachable!() };
//! assert_eq!(post.legenda, "Deus é fiel");
//! assert_eq!(post.hashtags, vec!["#fe"]);
//! assert!(!record.empty);
//! ```

use serde::Serialize;
use serde_json::{Map, Value};

use kerygma_core::util::json::{coerce_text, coerce_text_list, lookup, record_root};
use kerygma_core::{ContentTypeId, humanize_key};

use crate::aliases::{Scope, ShapeId, aliases_for};

/// Implements [`Blank`] for a struct as the conjunction of its fields.
macro_rules! impl_blank {
    ($ty:ty { $($field:ident),+ $(,)? }) => {
        impl $crate::normalize::Blank for $ty {
            fn is_blank(&self) -> bool {
                $($crate::normalize::Blank::is_blank(&self.$field))&&+
            }
        }
    };
}

mod fallback;
mod media;
mod ministry;
mod shapes;
mod social;
mod teaching;

pub use fallback::Generico;
pub use media::{ArtigoBlog, Email, RoteiroPodcast};
pub use ministry::{
    Aviso, Calendario, Convite, DesafioSemanal, DinamicaCelula, Guia, IdeiaEstrategica, Louvor,
    Treinamento,
};
pub use shapes::{
    BlocoPodcast, Cena, DiaDesafio, EntradaCalendario, FundamentoBiblico, LeituraDia, Musica,
    PerguntaResposta, QuestaoQuiz, Secao, Slide, TelaStory,
};
pub use social::{Carrossel, FrasesImpacto, MensagemWhatsapp, PackSemanal, Post, Reel, Stories};
pub use teaching::{
    AulaInfantil, Devocional, Esboco, Estudo, Oracao, PlanoLeitura, QaEstruturado, Quiz,
    ResumoPregacao, Testemunho,
};

// ============================================================================
// Blankness
// ============================================================================

/// Whether a value carries no meaningful content.
pub trait Blank {
    /// True when every string is blank and every list is empty.
    fn is_blank(&self) -> bool;
}

impl Blank for String {
    fn is_blank(&self) -> bool {
        self.trim().is_empty()
    }
}

impl<T> Blank for Vec<T> {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

// ============================================================================
// Field access
// ============================================================================

/// One raw object read through the alias table of a scope.
pub(crate) struct Fields<'a> {
    scope: Scope,
    map: &'a Map<String, Value>,
}

impl<'a> Fields<'a> {
    pub(crate) fn new(scope: Scope, map: &'a Map<String, Value>) -> Self {
        Self { scope, map }
    }

    /// The raw object itself.
    pub(crate) fn map(&self) -> &'a Map<String, Value> {
        self.map
    }

    /// First candidate of `field` for which `coerce` yields something.
    fn first<T>(&self, field: &str, coerce: impl Fn(&Value) -> Option<T>) -> Option<T> {
        let aliases = aliases_for(self.scope, field);
        if aliases.is_empty() {
            log::warn!("No aliases registered for {:?}.{field}", self.scope);
            return lookup(self.map, field).and_then(coerce);
        }
        aliases.iter().find_map(|alias| {
            let value = lookup(self.map, alias)?;
            let coerced = coerce(value)?;
            log::trace!("{:?}.{field} <- {alias}", self.scope);
            Some(coerced)
        })
    }

    /// A text field; blank when no candidate has text.
    pub(crate) fn text(&self, field: &str) -> String {
        self.first(field, coerce_text).unwrap_or_default()
    }

    /// A list of strings; empty when no candidate has any.
    pub(crate) fn texts(&self, field: &str) -> Vec<String> {
        self.first(field, coerce_text_list).unwrap_or_default()
    }

    /// A list of shaped items; blank items are dropped.
    pub(crate) fn items<S: Shape>(&self, field: &str) -> Vec<S> {
        self.first(field, |value| {
            let items = coerce_items::<S>(value);
            (!items.is_empty()).then_some(items)
        })
        .unwrap_or_default()
    }

    /// A nested shape; zero-valued when no candidate fills it.
    pub(crate) fn nested<S: Shape>(&self, field: &str) -> S {
        self.first(field, |value| {
            let shape = shape_from_value::<S>(value);
            (!shape.is_blank()).then_some(shape)
        })
        .unwrap_or_default()
    }
}

// ============================================================================
// Shapes and canonical types
// ============================================================================

/// A nested object shared between content types.
pub(crate) trait Shape: Default + Blank {
    const SHAPE: ShapeId;

    fn from_fields(fields: &Fields<'_>) -> Self;

    /// The shape holding only its main text.
    fn from_text(text: String) -> Self;

    /// The shape built from a non-object value.
    fn from_scalar(value: &Value) -> Self {
        coerce_text(value).map(Self::from_text).unwrap_or_default()
    }

    /// Called with the map key when items arrive as `{"key": item, ...}`.
    fn label_with_key(&mut self, _key: &str) {}
}

/// A content type's field set.
pub(crate) trait Canonical: Blank {
    fn from_fields(fields: &Fields<'_>) -> Self;
}

fn shape_from_value<S: Shape>(value: &Value) -> S {
    match value {
        Value::Object(map) => S::from_fields(&Fields::new(Scope::Shape(S::SHAPE), map)),
        other => S::from_scalar(other),
    }
}

fn coerce_items<S: Shape>(value: &Value) -> Vec<S> {
    match value {
        Value::Null => Vec::new(),
        Value::Array(items) => items
            .iter()
            .map(shape_from_value::<S>)
            .filter(|item| !item.is_blank())
            .collect(),
        Value::Object(map) => {
            let single = shape_from_value::<S>(value);
            if !single.is_blank() {
                return vec![single];
            }
            map.iter()
                .filter_map(|(key, value)| {
                    let mut item = shape_from_value::<S>(value);
                    if item.is_blank() {
                        return None;
                    }
                    item.label_with_key(key);
                    Some(item)
                })
                .collect()
        }
        scalar => {
            let item = S::from_scalar(scalar);
            if item.is_blank() { Vec::new() } else { vec![item] }
        }
    }
}

/// Fills `slot` with the humanized map key when it is still blank.
pub(crate) fn label_slot(slot: &mut String, key: &str) {
    if slot.is_blank() {
        *slot = humanize_key(key);
    }
}

// ============================================================================
// Canonical record
// ============================================================================

macro_rules! canonical_content {
    ($($variant:ident => $ty:ident),+ $(,)?) => {
        /// The canonical fields of one content type.
        ///
        /// Serialized with a `tipo` tag holding the type id.
        #[derive(Clone, Debug, PartialEq, Serialize)]
        #[serde(tag = "tipo", rename_all = "snake_case")]
        pub enum CanonicalContent {
            $(
                #[allow(missing_docs)]
                $variant($ty),
            )+
        }

        impl CanonicalContent {
            /// The content type this record belongs to.
            pub fn content_type(&self) -> ContentTypeId {
                match self {
                    $(Self::$variant(_) => ContentTypeId::$variant,)+
                }
            }

            fn build(content_type: ContentTypeId, map: &Map<String, Value>) -> Self {
                let fields = Fields::new(Scope::Type(content_type), map);
                match content_type {
                    $(ContentTypeId::$variant => Self::$variant($ty::from_fields(&fields)),)+
                }
            }
        }

        impl Blank for CanonicalContent {
            fn is_blank(&self) -> bool {
                match self {
                    $(Self::$variant(content) => content.is_blank(),)+
                }
            }
        }
    };
}

canonical_content! {
    Post => Post,
    Carrossel => Carrossel,
    Reel => Reel,
    Stories => Stories,
    Devocional => Devocional,
    Estudo => Estudo,
    Esboco => Esboco,
    ResumoPregacao => ResumoPregacao,
    PackSemanal => PackSemanal,
    FrasesImpacto => FrasesImpacto,
    Convite => Convite,
    Aviso => Aviso,
    Guia => Guia,
    Calendario => Calendario,
    DesafioSemanal => DesafioSemanal,
    QaEstruturado => QaEstruturado,
    Quiz => Quiz,
    PlanoLeitura => PlanoLeitura,
    Oracao => Oracao,
    Testemunho => Testemunho,
    RoteiroPodcast => RoteiroPodcast,
    ArtigoBlog => ArtigoBlog,
    Email => Email,
    MensagemWhatsapp => MensagemWhatsapp,
    DinamicaCelula => DinamicaCelula,
    IdeiaEstrategica => IdeiaEstrategica,
    Treinamento => Treinamento,
    Louvor => Louvor,
    AulaInfantil => AulaInfantil,
    GenericFallback => Generico,
}

/// A normalized payload: the typed fields plus the `_empty` flag.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CanonicalRecord {
    /// Type-specific fields.
    #[serde(flatten)]
    pub content: CanonicalContent,
    /// True when the record carries no meaningful content.
    #[serde(rename = "_empty")]
    pub empty: bool,
}

impl CanonicalRecord {
    /// Wraps content, computing the `_empty` flag.
    pub fn new(content: CanonicalContent) -> Self {
        let empty = content.is_blank();
        Self { content, empty }
    }

    /// The record's content type.
    pub fn content_type(&self) -> ContentTypeId {
        self.content.content_type()
    }

    /// Whether the record carries no meaningful content.
    pub fn is_empty(&self) -> bool {
        self.empty
    }

    /// The serialized form: `{"tipo": ..., <fields>, "_empty": ...}`.
    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Normalize a raw payload as the given content type.
///
/// Arrays are read through their first element; non-object payloads read as
/// an empty object. Never fails.
pub fn normalize(raw: &Value, content_type: ContentTypeId) -> CanonicalRecord {
    let record = CanonicalRecord::new(CanonicalContent::build(content_type, record_root(raw)));
    if record.empty {
        log::debug!("Normalized {content_type} record is empty");
    }
    record
}

// ============================================================================
// Tests
// ============================================================================
