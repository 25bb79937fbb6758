//! Common shape of every generated class

use super::{Attribute, Function, TypeSource};
use crate::type_annotations::TypeAnnotation;

/// Name, bases, attributes and methods of a generated class
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassRecord {
    pub name: String,
    pub docstring: String,
    pub bases: Vec<TypeAnnotation>,
    pub attributes: Vec<Attribute>,
    pub methods: Vec<Function>,
}

impl ClassRecord {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            docstring: String::new(),
            bases: Vec::new(),
            attributes: Vec::new(),
            methods: Vec::new(),
        }
    }

    pub fn with_base(mut self, base: TypeAnnotation) -> Self {
        self.bases.push(base);
        self
    }

    pub fn with_docstring(mut self, docstring: &str) -> Self {
        self.docstring = docstring.to_string();
        self
    }

    pub fn get_method(&self, name: &str) -> Option<&Function> {
        self.methods.iter().find(|method| method.name == name)
    }

    pub fn get_attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes
            .iter()
            .find(|attribute| attribute.name == name)
    }

    /// `class Name(Base1, Base2):`
    pub fn render_header(&self) -> String {
        if self.bases.is_empty() {
            return format!("class {}:", self.name);
        }
        let bases: Vec<String> = self.bases.iter().map(TypeAnnotation::render).collect();
        format!("class {}({}):", self.name, bases.join(", "))
    }

    /// Annotation for referring to this class from other generated modules
    pub fn internal_type(&self) -> TypeAnnotation {
        TypeAnnotation::internal(&self.name)
    }
}

impl TypeSource for ClassRecord {
    fn type_annotations(&self) -> Vec<&TypeAnnotation> {
        let mut types: Vec<&TypeAnnotation> = self.bases.iter().collect();
        types.extend(
            self.attributes
                .iter()
                .map(|attribute| &attribute.type_annotation),
        );
        for method in &self.methods {
            types.extend(method.type_annotations());
        }
        types
    }
}
