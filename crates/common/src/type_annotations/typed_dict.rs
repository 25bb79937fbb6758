//! Named record types (`TypedDict` declarations)

use super::TypeAnnotation;
use crate::import_helpers::{ImportRecord, ImportString};
use std::cell::RefCell;
use std::collections::BTreeSet;
use std::fmt;
use std::rc::Rc;

/// Python keywords that can not be used as class-syntax field names
const PYTHON_KEYWORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
    "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global", "if",
    "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return", "try",
    "while", "with", "yield",
];

/// One field of a [`TypedDict`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypedDictField {
    pub name: String,
    pub type_annotation: TypeAnnotation,
    pub required: bool,
}

impl TypedDictField {
    /// `Name: Type` or `Name: NotRequired[Type]`
    pub fn render_type(&self) -> String {
        if self.required {
            self.type_annotation.render()
        } else {
            format!("NotRequired[{}]", self.type_annotation.render())
        }
    }

    fn is_identifier(&self) -> bool {
        let mut chars = self.name.chars();
        let starts_ok = chars
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
        starts_ok
            && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
            && !PYTHON_KEYWORDS.contains(&self.name.as_str())
    }
}

/// A record type with named, possibly optional fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypedDict {
    pub name: String,
    pub fields: Vec<TypedDictField>,
    pub docstring: Option<String>,
}

impl TypedDict {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            fields: Vec::new(),
            docstring: None,
        }
    }

    pub fn has_optional_fields(&self) -> bool {
        self.fields.iter().any(|field| !field.required)
    }

    /// Declaration text for a `type_defs` module
    ///
    /// Uses class syntax when every field name is a usable identifier and
    /// the functional form otherwise.
    pub fn render_definition(&self) -> String {
        if self.fields.iter().all(TypedDictField::is_identifier) {
            let mut lines = vec![format!("class {}(TypedDict):", self.name)];
            if self.fields.is_empty() {
                lines.push("    pass".to_string());
            }
            for field in &self.fields {
                lines.push(format!("    {}: {}", field.name, field.render_type()));
            }
            return lines.join("\n");
        }

        let mut lines = vec![
            format!("{} = TypedDict(", self.name),
            format!("    \"{}\",", self.name),
            "    {".to_string(),
        ];
        for field in &self.fields {
            lines.push(format!("        \"{}\": {},", field.name, field.render_type()));
        }
        lines.push("    },".to_string());
        lines.push(")".to_string());
        lines.join("\n")
    }

    /// Imports the declaration itself needs, field types excluded
    pub fn get_definition_import_records(&self) -> BTreeSet<ImportRecord> {
        let mut records = BTreeSet::new();
        records.insert(ImportRecord::new(
            ImportString::typing_extensions(),
            "TypedDict",
        ));
        if self.has_optional_fields() {
            records.insert(ImportRecord::new(
                ImportString::typing_extensions(),
                "NotRequired",
            ));
        }
        records
    }
}

/// Shared handle to a [`TypedDict`]
///
/// Cloning the handle shares the instance; every holder sees fields added
/// later. Use [`SharedTypedDict::detached_copy`] for an independent value.
#[derive(Clone)]
pub struct SharedTypedDict(Rc<RefCell<TypedDict>>);

// Name only: fields may refer back to this instance
impl fmt::Debug for SharedTypedDict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.try_borrow() {
            Ok(typed_dict) => f.debug_tuple("SharedTypedDict").field(&typed_dict.name).finish(),
            Err(_) => f.write_str("SharedTypedDict(<borrowed>)"),
        }
    }
}

impl SharedTypedDict {
    pub fn new(name: &str) -> Self {
        Self::from_typed_dict(TypedDict::new(name))
    }

    pub fn from_typed_dict(typed_dict: TypedDict) -> Self {
        Self(Rc::new(RefCell::new(typed_dict)))
    }

    pub fn name(&self) -> String {
        self.0.borrow().name.clone()
    }

    pub fn fields(&self) -> Vec<TypedDictField> {
        self.0.borrow().fields.clone()
    }

    pub fn get_field(&self, name: &str) -> Option<TypedDictField> {
        self.0
            .borrow()
            .fields
            .iter()
            .find(|field| field.name == name)
            .cloned()
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.0.borrow().fields.iter().any(|field| field.name == name)
    }

    pub fn add_field(&self, name: &str, type_annotation: TypeAnnotation, required: bool) {
        self.0.borrow_mut().fields.push(TypedDictField {
            name: name.to_string(),
            type_annotation,
            required,
        });
    }

    pub fn set_docstring(&self, docstring: &str) {
        self.0.borrow_mut().docstring = Some(docstring.to_string());
    }

    /// Snapshot of the current state
    pub fn snapshot(&self) -> TypedDict {
        self.0.borrow().clone()
    }

    pub fn detached_copy(&self) -> Self {
        Self::from_typed_dict(self.snapshot())
    }

    pub fn ptr_eq(&self, other: &SharedTypedDict) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}
