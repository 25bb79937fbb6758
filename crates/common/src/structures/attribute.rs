//! Class attributes

use crate::type_annotations::TypeAnnotation;

/// `name: Type` declared on a generated class
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub type_annotation: TypeAnnotation,
}

impl Attribute {
    pub fn new(name: &str, type_annotation: TypeAnnotation) -> Self {
        Self {
            name: name.to_string(),
            type_annotation,
        }
    }

    pub fn render(&self) -> String {
        format!("{}: {}", self.name, self.type_annotation.render())
    }
}
