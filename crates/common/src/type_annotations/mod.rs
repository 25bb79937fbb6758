//! Type annotation model for generated declarations
//!
//! A [`TypeAnnotation`] is a closed set of variants describing a target type
//! expression. Every variant can:
//! - render itself to the text used in generated code,
//! - report the [`ImportRecord`] needed to use it,
//! - collect the set of nodes reachable from it (itself included),
//! - produce a detached copy.
//!
//! Equality, ordering and hashing are defined on the rendered text, so two
//! nodes that render the same are the same type as far as collections and
//! de-duplication are concerned. Identity of shared [`TypedDict`] instances is
//! checked separately with [`TypeAnnotation::is_same_instance`].

mod external_import;
mod literal;
mod scalar;
mod subscript;
mod typed_dict;

pub use external_import::{ExternalImport, InternalImport};
pub use literal::TypeLiteral;
pub use scalar::ScalarType;
pub use subscript::{Generic, TypeSubscript};
pub use typed_dict::{SharedTypedDict, TypedDict, TypedDictField};

use crate::import_helpers::{ImportRecord, ImportString};
use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A target type expression
#[derive(Debug, Clone)]
pub enum TypeAnnotation {
    Scalar(ScalarType),
    Literal(TypeLiteral),
    Subscript(TypeSubscript),
    TypedDict(SharedTypedDict),
    External(ExternalImport),
    Internal(InternalImport),
}

impl TypeAnnotation {
    pub fn any() -> Self {
        Self::Scalar(ScalarType::Any)
    }

    pub fn none() -> Self {
        Self::Scalar(ScalarType::None)
    }

    pub fn str() -> Self {
        Self::Scalar(ScalarType::Str)
    }

    pub fn int() -> Self {
        Self::Scalar(ScalarType::Int)
    }

    pub fn bool() -> Self {
        Self::Scalar(ScalarType::Bool)
    }

    pub fn float() -> Self {
        Self::Scalar(ScalarType::Float)
    }

    pub fn bytes() -> Self {
        Self::Scalar(ScalarType::Bytes)
    }

    pub fn datetime() -> Self {
        Self::external("datetime", "datetime")
    }

    pub fn streaming_body() -> Self {
        Self::external("botocore.response", "StreamingBody")
    }

    pub fn external(source: &str, name: &str) -> Self {
        Self::External(ExternalImport::new(ImportString::new(source), name))
    }

    pub fn internal(name: &str) -> Self {
        Self::Internal(InternalImport::new(name))
    }

    pub fn literal<S: AsRef<str>>(values: &[S]) -> Self {
        Self::Literal(TypeLiteral::new(values))
    }

    pub fn subscript(parent: Generic, children: Vec<TypeAnnotation>) -> Self {
        Self::Subscript(TypeSubscript::new(parent, children))
    }

    pub fn list_of(item: TypeAnnotation) -> Self {
        Self::subscript(Generic::List, vec![item])
    }

    pub fn dict_of(key: TypeAnnotation, value: TypeAnnotation) -> Self {
        Self::subscript(Generic::Dict, vec![key, value])
    }

    /// `Dict[str, Any]`
    pub fn dict_str_any() -> Self {
        Self::dict_of(Self::str(), Self::any())
    }

    pub fn union(variants: Vec<TypeAnnotation>) -> Self {
        Self::subscript(Generic::Union, variants)
    }

    pub fn iterator(item: TypeAnnotation) -> Self {
        Self::subscript(Generic::Iterator, vec![item])
    }

    /// Text used for this type in generated code
    pub fn render(&self) -> String {
        match self {
            Self::Scalar(scalar) => scalar.render().to_string(),
            Self::Literal(literal) => literal.render(),
            Self::Subscript(subscript) => subscript.render(),
            Self::TypedDict(typed_dict) => typed_dict.name(),
            Self::External(external) => external.render(),
            Self::Internal(internal) => internal.render(),
        }
    }

    /// Import needed to use this type
    pub fn get_import_record(&self) -> ImportRecord {
        match self {
            Self::Scalar(scalar) => scalar.get_import_record(),
            Self::Literal(_) => ImportRecord::new(ImportString::typing(), "Literal"),
            Self::Subscript(subscript) => subscript.parent.get_import_record(),
            Self::TypedDict(typed_dict) => {
                ImportRecord::new(ImportString::local("type_defs"), &typed_dict.name())
            }
            Self::External(external) => external.get_import_record(),
            Self::Internal(internal) => internal.get_import_record(),
        }
    }

    /// Imports needed to write this annotation in place
    ///
    /// Walks subscript children but not TypedDict fields, which belong to
    /// the TypedDict declaration.
    pub fn get_import_records(&self) -> BTreeSet<ImportRecord> {
        let mut records = BTreeSet::new();
        self.collect_import_records(&mut records);
        records
    }

    fn collect_import_records(&self, records: &mut BTreeSet<ImportRecord>) {
        records.insert(self.get_import_record());
        if let Self::Subscript(subscript) = self {
            for child in &subscript.children {
                child.collect_import_records(records);
            }
        }
    }

    /// All nodes reachable from this one, itself included
    pub fn get_types(&self) -> BTreeSet<TypeAnnotation> {
        let mut types = BTreeSet::new();
        self.collect_types(&mut types);
        types
    }

    /// Accumulate reachable nodes into `types`
    ///
    /// A TypedDict already present is not walked again, which keeps
    /// recursive shapes finite.
    pub fn collect_types(&self, types: &mut BTreeSet<TypeAnnotation>) {
        let inserted = types.insert(self.clone());
        match self {
            Self::Subscript(subscript) => {
                for child in &subscript.children {
                    child.collect_types(types);
                }
            }
            Self::TypedDict(typed_dict) if inserted => {
                for field in typed_dict.fields() {
                    field.type_annotation.collect_types(types);
                }
            }
            _ => {}
        }
    }

    /// Independent value with the same rendering and detached children
    pub fn copy(&self) -> Self {
        match self {
            Self::TypedDict(typed_dict) => Self::TypedDict(typed_dict.detached_copy()),
            other => other.clone(),
        }
    }

    /// Whether both values point at the same shared TypedDict instance
    ///
    /// Always false for other variants.
    pub fn is_same_instance(&self, other: &TypeAnnotation) -> bool {
        match (self, other) {
            (Self::TypedDict(a), Self::TypedDict(b)) => a.ptr_eq(b),
            _ => false,
        }
    }

    pub fn as_typed_dict(&self) -> Option<&SharedTypedDict> {
        match self {
            Self::TypedDict(typed_dict) => Some(typed_dict),
            _ => None,
        }
    }

    pub fn as_subscript(&self) -> Option<&TypeSubscript> {
        match self {
            Self::Subscript(subscript) => Some(subscript),
            _ => None,
        }
    }

    pub fn as_subscript_mut(&mut self) -> Option<&mut TypeSubscript> {
        match self {
            Self::Subscript(subscript) => Some(subscript),
            _ => None,
        }
    }

    pub fn is_any(&self) -> bool {
        matches!(self, Self::Scalar(ScalarType::Any))
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Self::Scalar(ScalarType::None))
    }
}

impl PartialEq for TypeAnnotation {
    fn eq(&self, other: &Self) -> bool {
        self.render() == other.render()
    }
}

impl Eq for TypeAnnotation {}

impl PartialOrd for TypeAnnotation {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TypeAnnotation {
    fn cmp(&self, other: &Self) -> Ordering {
        self.render().cmp(&other.render())
    }
}

impl Hash for TypeAnnotation {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.render().hash(state);
    }
}

impl fmt::Display for TypeAnnotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl Serialize for TypeAnnotation {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.render())
    }
}
