//! Functions and methods of generated declarations

use super::{Argument, TypeSource};
use crate::type_annotations::TypeAnnotation;

/// A function or method signature, with an optional body for runtime helpers
///
/// A method is a function whose first argument is an untyped `self`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Function {
    pub name: String,
    pub arguments: Vec<Argument>,
    pub return_type: TypeAnnotation,
    pub docstring: String,
    pub decorators: Vec<TypeAnnotation>,
    pub body: Option<String>,
}

impl Function {
    pub fn new(name: &str, arguments: Vec<Argument>, return_type: TypeAnnotation) -> Self {
        Self {
            name: name.to_string(),
            arguments,
            return_type,
            docstring: String::new(),
            decorators: Vec::new(),
            body: None,
        }
    }

    /// Method with `self` prepended to `arguments`
    pub fn method(name: &str, arguments: Vec<Argument>, return_type: TypeAnnotation) -> Self {
        let mut all = Vec::with_capacity(arguments.len() + 1);
        all.push(Argument::self_arg());
        all.extend(arguments);
        Self::new(name, all, return_type)
    }

    pub fn with_docstring(mut self, docstring: &str) -> Self {
        self.docstring = docstring.to_string();
        self
    }

    pub fn with_decorator(mut self, decorator: TypeAnnotation) -> Self {
        self.decorators.push(decorator);
        self
    }

    pub fn with_body(mut self, body: &str) -> Self {
        self.body = Some(body.to_string());
        self
    }

    pub fn is_method(&self) -> bool {
        self.arguments
            .first()
            .is_some_and(|argument| argument.name == "self" && argument.type_annotation.is_none())
    }

    pub fn argument(&self, name: &str) -> Option<&Argument> {
        self.arguments.iter().find(|argument| argument.name == name)
    }

    /// Argument names in signature order, `self` and `*` excluded
    pub fn argument_names(&self) -> Vec<&str> {
        self.arguments
            .iter()
            .filter(|argument| !argument.is_kwflag() && argument.name != "self")
            .map(|argument| argument.name.as_str())
            .collect()
    }

    pub fn render_arguments(&self) -> String {
        self.arguments
            .iter()
            .map(Argument::render)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// `def name(args) -> Return`, without trailing colon
    pub fn render_signature(&self) -> String {
        format!(
            "def {}({}) -> {}",
            self.name,
            self.render_arguments(),
            self.return_type.render()
        )
    }

    pub fn render_decorators(&self) -> Vec<String> {
        self.decorators
            .iter()
            .map(|decorator| format!("@{}", decorator.render()))
            .collect()
    }
}

impl TypeSource for Function {
    fn type_annotations(&self) -> Vec<&TypeAnnotation> {
        let mut types: Vec<&TypeAnnotation> = self
            .arguments
            .iter()
            .filter_map(|argument| argument.type_annotation.as_ref())
            .collect();
        types.push(&self.return_type);
        types.extend(self.decorators.iter());
        types
    }
}
