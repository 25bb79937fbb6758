//! Primitive types

use crate::import_helpers::{ImportRecord, ImportString};

/// A primitive type identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarType {
    Int,
    Str,
    Bool,
    Float,
    Bytes,
    None,
    Any,
}

impl ScalarType {
    pub fn render(&self) -> &'static str {
        match self {
            ScalarType::Int => "int",
            ScalarType::Str => "str",
            ScalarType::Bool => "bool",
            ScalarType::Float => "float",
            ScalarType::Bytes => "bytes",
            ScalarType::None => "None",
            ScalarType::Any => "Any",
        }
    }

    pub fn get_import_record(&self) -> ImportRecord {
        match self {
            ScalarType::Any => ImportRecord::new(ImportString::typing(), "Any"),
            _ => ImportRecord::builtins(),
        }
    }
}
