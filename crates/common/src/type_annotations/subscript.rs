//! Parameterized generic types

use crate::import_helpers::{ImportRecord, ImportString};
use super::TypeAnnotation;

/// Generic parent of a [`TypeSubscript`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Generic {
    List,
    Dict,
    Union,
    Optional,
    Iterator,
    Sequence,
    IO,
}

impl Generic {
    pub fn name(&self) -> &'static str {
        match self {
            Generic::List => "List",
            Generic::Dict => "Dict",
            Generic::Union => "Union",
            Generic::Optional => "Optional",
            Generic::Iterator => "Iterator",
            Generic::Sequence => "Sequence",
            Generic::IO => "IO",
        }
    }

    pub fn get_import_record(&self) -> ImportRecord {
        ImportRecord::new(ImportString::typing(), self.name())
    }
}

/// `Parent[child, ...]`
///
/// The only variant whose children can be changed after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeSubscript {
    pub parent: Generic,
    pub children: Vec<TypeAnnotation>,
}

impl TypeSubscript {
    pub fn new(parent: Generic, children: Vec<TypeAnnotation>) -> Self {
        Self { parent, children }
    }

    pub fn render(&self) -> String {
        if self.children.is_empty() {
            return self.parent.name().to_string();
        }
        let children: Vec<String> = self.children.iter().map(TypeAnnotation::render).collect();
        format!("{}[{}]", self.parent.name(), children.join(", "))
    }

    pub fn add_child(&mut self, child: TypeAnnotation) {
        self.children.push(child);
    }

    /// Remove every child that renders the same as one of `children`
    pub fn remove_children(&mut self, children: &[TypeAnnotation]) {
        self.children.retain(|child| !children.contains(child));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_without_children() {
        assert_eq!(TypeSubscript::new(Generic::IO, vec![]).render(), "IO");
    }

    #[test]
    fn test_remove_children() {
        let mut union = TypeSubscript::new(
            Generic::Union,
            vec![
                TypeAnnotation::str(),
                TypeAnnotation::bytes(),
                TypeAnnotation::str(),
            ],
        );
        union.remove_children(&[TypeAnnotation::str()]);
        assert_eq!(union.render(), "Union[bytes]");
    }
}
