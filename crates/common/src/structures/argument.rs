//! Method and function arguments

use crate::type_annotations::TypeAnnotation;

/// Star prefix of an argument
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgumentPrefix {
    None,
    /// `*args`, or the bare `*` keyword-only marker
    Star,
    /// `**kwargs`
    DoubleStar,
}

impl ArgumentPrefix {
    fn as_str(&self) -> &'static str {
        match self {
            ArgumentPrefix::None => "",
            ArgumentPrefix::Star => "*",
            ArgumentPrefix::DoubleStar => "**",
        }
    }
}

/// A single argument of a generated signature
///
/// An argument is required exactly when it has no default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument {
    pub name: String,
    pub type_annotation: Option<TypeAnnotation>,
    pub default: Option<String>,
    pub prefix: ArgumentPrefix,
}

impl Argument {
    pub fn new(name: &str, type_annotation: TypeAnnotation) -> Self {
        Self {
            name: name.to_string(),
            type_annotation: Some(type_annotation),
            default: None,
            prefix: ArgumentPrefix::None,
        }
    }

    /// Argument defaulting to `None`
    pub fn optional(name: &str, type_annotation: TypeAnnotation) -> Self {
        Self::with_default(name, type_annotation, "None")
    }

    pub fn with_default(name: &str, type_annotation: TypeAnnotation, default: &str) -> Self {
        Self {
            default: Some(default.to_string()),
            ..Self::new(name, type_annotation)
        }
    }

    /// Untyped `self`
    pub fn self_arg() -> Self {
        Self {
            name: "self".to_string(),
            type_annotation: None,
            default: None,
            prefix: ArgumentPrefix::None,
        }
    }

    /// Bare `*` that makes the following arguments keyword-only
    pub fn kwflag() -> Self {
        Self {
            name: String::new(),
            type_annotation: None,
            default: None,
            prefix: ArgumentPrefix::Star,
        }
    }

    pub fn varargs(type_annotation: TypeAnnotation) -> Self {
        Self {
            prefix: ArgumentPrefix::Star,
            ..Self::new("args", type_annotation)
        }
    }

    pub fn kwargs(type_annotation: TypeAnnotation) -> Self {
        Self {
            prefix: ArgumentPrefix::DoubleStar,
            ..Self::new("kwargs", type_annotation)
        }
    }

    pub fn required(&self) -> bool {
        self.default.is_none()
    }

    pub fn is_kwflag(&self) -> bool {
        self.name.is_empty() && self.prefix == ArgumentPrefix::Star
    }

    pub fn render(&self) -> String {
        let mut rendered = format!("{}{}", self.prefix.as_str(), self.name);
        match (&self.type_annotation, &self.default) {
            (Some(type_annotation), Some(default)) => {
                rendered.push_str(&format!(": {} = {}", type_annotation.render(), default));
            }
            (Some(type_annotation), None) => {
                rendered.push_str(&format!(": {}", type_annotation.render()));
            }
            (None, Some(default)) => rendered.push_str(&format!("={}", default)),
            (None, None) => {}
        }
        rendered
    }
}

/// Move optional arguments after required ones
///
/// Stable within each group.
pub fn sort_arguments(arguments: Vec<Argument>) -> Vec<Argument> {
    let (mut required, optional): (Vec<Argument>, Vec<Argument>) =
        arguments.into_iter().partition(Argument::required);
    required.extend(optional);
    required
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render() {
        assert_eq!(Argument::new("Bucket", TypeAnnotation::str()).render(), "Bucket: str");
        assert_eq!(
            Argument::optional("MaxKeys", TypeAnnotation::int()).render(),
            "MaxKeys: int = None"
        );
        assert_eq!(Argument::self_arg().render(), "self");
        assert_eq!(Argument::kwflag().render(), "*");
        assert_eq!(
            Argument::kwargs(TypeAnnotation::any()).render(),
            "**kwargs: Any"
        );
    }

    #[test]
    fn test_sort_is_stable_partition() {
        let arguments = vec![
            Argument::optional("A", TypeAnnotation::str()),
            Argument::new("B", TypeAnnotation::str()),
            Argument::optional("C", TypeAnnotation::str()),
            Argument::new("D", TypeAnnotation::str()),
        ];
        let names: Vec<String> = sort_arguments(arguments)
            .into_iter()
            .map(|argument| argument.name)
            .collect();
        assert_eq!(names, vec!["B", "D", "A", "C"]);
    }
}
