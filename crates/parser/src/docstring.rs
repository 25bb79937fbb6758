//! Method documentation parsing
//!
//! Extracts argument names, argument type hints and the return type hint
//! from reStructuredText-style method documentation:
//!
//! ```text
//! Copies an object.
//!
//! :type Bucket: string
//! :param Bucket: **[REQUIRED]** Target bucket.
//!
//! :rtype: dict
//! ```
//!
//! Methods with no documentation at all can fall back to a fixed table of
//! hints keyed by method name.

use crate::shape_parser::{blob_input_type, resource_reference};
use regex::Regex;
use sdk_stubgen_common::structures::{sort_arguments, Argument, Function};
use sdk_stubgen_common::type_annotations::{Generic, TypeAnnotation};
use std::sync::LazyLock;
use thiserror::Error;

/// Documentation that can not be used for signature extraction
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DocstringError {
    #[error("`:{directive}:` directive without an argument name")]
    MissingName { directive: String },

    #[error("empty type hint for argument {name}")]
    EmptyType { name: String },

    #[error("type hint for undocumented argument {name}")]
    OrphanType { name: String },
}

/// One documented argument
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocArgument {
    pub name: String,
    pub type_annotation: TypeAnnotation,
    pub required: bool,
}

impl DocArgument {
    fn to_argument(&self) -> Argument {
        if self.required {
            Argument::new(&self.name, self.type_annotation.clone())
        } else {
            Argument::optional(&self.name, self.type_annotation.clone())
        }
    }
}

/// Everything extracted from one method's documentation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocstringInfo {
    pub description: String,
    pub arguments: Vec<DocArgument>,
    pub return_type: Option<TypeAnnotation>,
}

/// Fallback hints for methods that have no documentation
///
/// `(method, [(argument, type hint, required)], return type hint)`
type DoclessEntry = (&'static str, &'static [(&'static str, &'static str, bool)], &'static str);

const DOCLESS_METHODS: &[DoclessEntry] = &[
    ("load", &[], "None"),
    ("reload", &[], "None"),
    ("get_available_subresources", &[], "sequence(string)"),
    ("can_paginate", &[("operation_name", "string", true)], "boolean"),
    ("close", &[], "None"),
    (
        "generate_presigned_url",
        &[
            ("ClientMethod", "string", true),
            ("Params", "dict", false),
            ("ExpiresIn", "integer", false),
            ("HttpMethod", "string", false),
        ],
        "string",
    ),
];

// Patterns compiled once via LazyLock
static DIRECTIVE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^:(param|type|rtype|returns?|raises?)(?:\s+([^:\s]+))?\s*:\s*(.*)$")
        .expect("valid directive pattern")
});

static HTML_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid tag pattern"));

static PY_CLASS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^:py:class:`([^`]+)`$").expect("valid class pattern"));

/// Remove HTML tags and entities and collapse whitespace
pub fn strip_html(text: &str) -> String {
    let without_tags = HTML_TAG_RE.replace_all(text, " ");
    let decoded = without_tags
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&");
    decoded.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Docstring parser aware of the service's resource names
pub struct DocstringParser<'a> {
    resource_names: &'a [String],
}

impl<'a> DocstringParser<'a> {
    pub fn new(resource_names: &'a [String]) -> Self {
        Self { resource_names }
    }

    /// Extract description, arguments and return hint
    pub fn parse(&self, text: &str) -> Result<DocstringInfo, DocstringError> {
        let mut info = DocstringInfo::default();
        let mut description = Vec::new();
        let mut hints: Vec<(String, String)> = Vec::new();
        let mut in_directives = false;

        for line in text.lines().map(str::trim) {
            let Some(captures) = DIRECTIVE_RE.captures(line) else {
                if !in_directives && !line.is_empty() {
                    description.push(line);
                }
                continue;
            };
            in_directives = true;
            let directive = &captures[1];
            let name = captures.get(2).map(|m| m.as_str());
            let rest = captures.get(3).map_or("", |m| m.as_str()).trim();

            match directive {
                "param" => {
                    let name = name.ok_or_else(|| DocstringError::MissingName {
                        directive: directive.to_string(),
                    })?;
                    if info.arguments.iter().all(|argument| argument.name != name) {
                        info.arguments.push(DocArgument {
                            name: name.to_string(),
                            type_annotation: TypeAnnotation::any(),
                            required: rest.contains("[REQUIRED]"),
                        });
                    }
                }
                "type" => {
                    let name = name.ok_or_else(|| DocstringError::MissingName {
                        directive: directive.to_string(),
                    })?;
                    if rest.is_empty() {
                        return Err(DocstringError::EmptyType {
                            name: name.to_string(),
                        });
                    }
                    hints.push((name.to_string(), rest.to_string()));
                }
                "rtype" => {
                    if !rest.is_empty() {
                        info.return_type = Some(self.parse_type_hint(rest));
                    }
                }
                _ => {}
            }
        }

        for (name, hint) in hints {
            let argument = info
                .arguments
                .iter_mut()
                .find(|argument| argument.name == name)
                .ok_or(DocstringError::OrphanType { name })?;
            argument.type_annotation = self.parse_type_hint(&hint);
        }

        info.description = strip_html(&description.join(" "));
        Ok(info)
    }

    /// Annotation for a documentation type hint
    ///
    /// Unrecognized hints map to `Any`.
    pub fn parse_type_hint(&self, hint: &str) -> TypeAnnotation {
        let hint = hint.trim();
        if let Some(inner) = hint
            .strip_prefix("list(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            return TypeAnnotation::list_of(self.parse_type_hint(inner));
        }
        if let Some(inner) = hint
            .strip_prefix("sequence(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            return TypeAnnotation::subscript(
                Generic::Sequence,
                vec![self.parse_type_hint(inner)],
            );
        }
        if let Some(captures) = PY_CLASS_RE.captures(hint) {
            let class_name = captures[1].rsplit('.').next().unwrap_or_default();
            if self.resource_names.iter().any(|name| name == class_name) {
                return resource_reference(class_name);
            }
            return TypeAnnotation::any();
        }

        match hint.to_lowercase().as_str() {
            "string" | "str" => TypeAnnotation::str(),
            "integer" | "int" | "long" => TypeAnnotation::int(),
            "boolean" | "bool" => TypeAnnotation::bool(),
            "float" | "double" => TypeAnnotation::float(),
            "dict" => TypeAnnotation::dict_str_any(),
            "list" => TypeAnnotation::list_of(TypeAnnotation::any()),
            "datetime" => TypeAnnotation::datetime(),
            "bytes" => TypeAnnotation::bytes(),
            "blob" | "bytes or seekable file-like object" => blob_input_type(),
            "file-like object" | "file" => {
                TypeAnnotation::subscript(Generic::IO, vec![TypeAnnotation::any()])
            }
            "none" => TypeAnnotation::none(),
            _ => self.parse_dotted_hint(hint),
        }
    }

    /// `module.path.Name` as an external import
    fn parse_dotted_hint(&self, hint: &str) -> TypeAnnotation {
        let is_path = !hint.is_empty()
            && hint
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.');
        match hint.rsplit_once('.') {
            Some((module, name)) if is_path && !module.is_empty() && !name.is_empty() => {
                TypeAnnotation::external(module, name)
            }
            _ => TypeAnnotation::any(),
        }
    }

    /// Fallback entry for a method without documentation
    pub fn docless_method(&self, method_name: &str) -> Option<DocstringInfo> {
        let (_, arguments, return_hint) = DOCLESS_METHODS
            .iter()
            .find(|(name, _, _)| *name == method_name)?;
        Some(DocstringInfo {
            description: String::new(),
            arguments: arguments
                .iter()
                .map(|(name, hint, required)| DocArgument {
                    name: name.to_string(),
                    type_annotation: self.parse_type_hint(hint),
                    required: *required,
                })
                .collect(),
            return_type: Some(self.parse_type_hint(return_hint)),
        })
    }
}

/// Method built only from documentation (or fallback) hints
pub fn method_from_docstring(name: &str, info: &DocstringInfo) -> Function {
    let arguments = sort_arguments(info.arguments.iter().map(DocArgument::to_argument).collect());
    Function::method(
        name,
        arguments,
        info.return_type.clone().unwrap_or_else(TypeAnnotation::any),
    )
    .with_docstring(&info.description)
}

/// Catch-all signature for a method whose documentation is unusable
pub fn undocumented_method(name: &str) -> Function {
    Function::method(
        name,
        vec![
            Argument::varargs(TypeAnnotation::any()),
            Argument::kwargs(TypeAnnotation::any()),
        ],
        TypeAnnotation::any(),
    )
}

/// Combine a schema-derived method with its documentation
///
/// Schema arguments and a concrete schema return type are kept; documented
/// arguments the schema does not declare are added, and the documented
/// return type replaces an `Any` return.
pub fn merge_documentation(mut method: Function, info: &DocstringInfo) -> Function {
    if !info.description.is_empty() {
        method.docstring = info.description.clone();
    }
    if method.return_type.is_any() {
        if let Some(return_type) = &info.return_type {
            method.return_type = return_type.clone();
        }
    }

    let known: Vec<String> = method
        .argument_names()
        .into_iter()
        .map(str::to_string)
        .collect();
    let extra: Vec<Argument> = info
        .arguments
        .iter()
        .filter(|argument| !known.contains(&argument.name))
        .map(DocArgument::to_argument)
        .collect();
    if extra.is_empty() {
        return method;
    }

    // schema methods without arguments get the `*` marker like every other one
    if method.arguments.iter().all(|argument| argument.name == "self") {
        method.arguments.push(Argument::kwflag());
    }

    // keep `self` and `*` in front, re-sort the rest
    let split = method
        .arguments
        .iter()
        .position(|argument| argument.name != "self" && !argument.is_kwflag())
        .unwrap_or(method.arguments.len());
    let mut rest = method.arguments.split_off(split);
    rest.extend(extra);
    method.arguments.extend(sort_arguments(rest));
    method
}

#[cfg(test)]
mod tests {
    use super::*;

    const COPY_DOC: &str = "Copies an object.\n\n\
        :type CopySource: dict\n\
        :param CopySource: **[REQUIRED]** Source object.\n\n\
        :type ExtraArgs: dict\n\
        :param ExtraArgs: Extra arguments.\n\n\
        :type Callback: function\n\
        :param Callback: Progress callback.\n\n\
        :rtype: None\n";

    fn resources() -> Vec<String> {
        vec!["Bucket".to_string(), "Object".to_string()]
    }

    #[test]
    fn test_parse_arguments_and_return() {
        let names = resources();
        let info = DocstringParser::new(&names).parse(COPY_DOC).unwrap();

        assert_eq!(info.description, "Copies an object.");
        let rendered: Vec<String> = info
            .arguments
            .iter()
            .map(|argument| format!("{}:{}:{}", argument.name, argument.type_annotation, argument.required))
            .collect();
        assert_eq!(
            rendered,
            vec![
                "CopySource:Dict[str, Any]:true",
                "ExtraArgs:Dict[str, Any]:false",
                "Callback:Any:false",
            ]
        );
        assert!(info.return_type.unwrap().is_none());
    }

    #[test]
    fn test_type_hints() {
        let names = resources();
        let parser = DocstringParser::new(&names);

        assert_eq!(parser.parse_type_hint("list(string)").render(), "List[str]");
        assert_eq!(
            parser
                .parse_type_hint("sequence(string)")
                .get_import_record()
                .render(),
            "from typing import Sequence"
        );
        assert_eq!(parser.parse_type_hint(":py:class:`S3.Bucket`").render(), "Bucket");
        assert!(parser.parse_type_hint(":py:class:`S3.Unknown`").is_any());
        assert_eq!(
            parser
                .parse_type_hint("boto3.s3.transfer.TransferConfig")
                .get_import_record()
                .render(),
            "from boto3.s3.transfer import TransferConfig"
        );
        assert!(parser.parse_type_hint("something odd").is_any());
    }

    #[test]
    fn test_malformed_documentation() {
        let names = resources();
        let parser = DocstringParser::new(&names);

        assert_eq!(
            parser.parse(":param: nameless"),
            Err(DocstringError::MissingName {
                directive: "param".to_string()
            })
        );
        assert_eq!(
            parser.parse(":type Key: string\n"),
            Err(DocstringError::OrphanType {
                name: "Key".to_string()
            })
        );
    }

    #[test]
    fn test_docless_table() {
        let names = resources();
        let parser = DocstringParser::new(&names);

        let info = parser.docless_method("generate_presigned_url").unwrap();
        let method = method_from_docstring("generate_presigned_url", &info);
        assert_eq!(
            method.render_signature(),
            "def generate_presigned_url(self, ClientMethod: str, Params: Dict[str, Any] = None, \
             ExpiresIn: int = None, HttpMethod: str = None) -> str"
        );
        assert!(parser.docless_method("upload_file").is_none());
    }

    #[test]
    fn test_merge_keeps_schema_signature() {
        let names = resources();
        let parser = DocstringParser::new(&names);
        let method = Function::method(
            "copy_object",
            vec![
                Argument::kwflag(),
                Argument::new("Bucket", TypeAnnotation::str()),
                Argument::optional("ACL", TypeAnnotation::str()),
            ],
            TypeAnnotation::dict_str_any(),
        );
        let info = parser
            .parse(":type Bucket: integer\n:param Bucket: [REQUIRED]\n:type Token: string\n:param Token: [REQUIRED] extra\n:rtype: string")
            .unwrap();

        let merged = merge_documentation(method, &info);
        assert_eq!(
            merged.render_signature(),
            "def copy_object(self, *, Bucket: str, Token: str, ACL: str = None) -> Dict[str, Any]"
        );
    }

    #[test]
    fn test_merge_into_method_without_arguments() {
        let names = resources();
        let parser = DocstringParser::new(&names);
        let method = Function::method("reset", Vec::new(), TypeAnnotation::none());
        let info = parser
            .parse(":type Force: boolean\n:param Force: Skip checks.\n:type Reason: string\n:param Reason: [REQUIRED]")
            .unwrap();

        let merged = merge_documentation(method, &info);
        assert_eq!(
            merged.render_signature(),
            "def reset(self, *, Reason: str, Force: bool = None) -> None"
        );
    }

    #[test]
    fn test_strip_html() {
        assert_eq!(
            strip_html("<p>Returns   the <b>ACL</b> &amp; owner.</p>"),
            "Returns the ACL & owner."
        );
    }
}
