//! Template view models
//!
//! Records are rendered to plain strings here so templates only lay out
//! text. Imports are grouped and built-ins are dropped before they reach a
//! template.

use sdk_stubgen_common::import_helpers::{group_import_records, ImportRecord, ImportString};
use sdk_stubgen_common::structures::{ClassRecord, Function, TypeSource};
use sdk_stubgen_common::type_annotations::TypedDict;
use serde::Serialize;
use std::collections::BTreeSet;

/// One function or method, ready to print
#[derive(Debug, Clone, Serialize)]
pub struct FunctionView {
    pub decorators: Vec<String>,
    pub signature: String,
    pub docstring: String,
    pub body: Option<String>,
}

impl From<&Function> for FunctionView {
    fn from(function: &Function) -> Self {
        Self {
            decorators: function.render_decorators(),
            signature: function.render_signature(),
            docstring: function.docstring.clone(),
            body: function.body.clone(),
        }
    }
}

/// One class declaration, ready to print
#[derive(Debug, Clone, Serialize)]
pub struct ClassView {
    pub name: String,
    pub header: String,
    pub docstring: String,
    pub attributes: Vec<String>,
    pub methods: Vec<FunctionView>,
}

impl From<&ClassRecord> for ClassView {
    fn from(class: &ClassRecord) -> Self {
        Self {
            name: class.name.clone(),
            header: class.render_header(),
            docstring: class.docstring.clone(),
            attributes: class.attributes.iter().map(|a| a.render()).collect(),
            methods: class.methods.iter().map(FunctionView::from).collect(),
        }
    }
}

/// One TypedDict declaration
#[derive(Debug, Clone, Serialize)]
pub struct TypeDefView {
    pub name: String,
    pub definition: String,
}

impl From<&TypedDict> for TypeDefView {
    fn from(typed_dict: &TypedDict) -> Self {
        Self {
            name: typed_dict.name.clone(),
            definition: typed_dict.render_definition(),
        }
    }
}

/// Import lines for a generated module
///
/// Built-ins and imports of the module itself are dropped; the rest is
/// grouped by source.
pub fn import_lines<I>(records: I, module: &str) -> Vec<String>
where
    I: IntoIterator<Item = ImportRecord>,
{
    let filtered = records
        .into_iter()
        .filter(|record| !record.is_builtins() && !record.source.is_local_module(module));
    group_import_records(filtered)
        .iter()
        .map(|group| group.render())
        .collect()
}

/// Union of the required imports of several records
pub fn collect_import_records<'a, T, I>(sources: I) -> BTreeSet<ImportRecord>
where
    T: TypeSource + 'a,
    I: IntoIterator<Item = &'a T>,
{
    sources
        .into_iter()
        .flat_map(TypeSource::get_required_import_records)
        .collect()
}

/// Split helper imports into those needed at runtime and type-only ones
///
/// Only the SDK module itself is imported at runtime; everything else sits
/// behind `TYPE_CHECKING`.
pub fn split_runtime_imports(
    records: BTreeSet<ImportRecord>,
    module: &str,
) -> (Vec<String>, Vec<String>) {
    let runtime = vec![
        ImportRecord::module(ImportString::new("boto3")),
        ImportRecord::new(ImportString::typing(), "TYPE_CHECKING"),
    ];
    (import_lines(runtime, module), import_lines(records, module))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sdk_stubgen_common::structures::Argument;
    use sdk_stubgen_common::type_annotations::TypeAnnotation;

    #[test]
    fn test_import_lines_drop_builtins_and_self() {
        let records = vec![
            ImportRecord::builtins(),
            ImportRecord::new(ImportString::typing(), "List"),
            ImportRecord::new(ImportString::typing(), "Any"),
            ImportRecord::new(ImportString::local("paginator"), "ListObjectsPaginator"),
            ImportRecord::new(ImportString::local("type_defs"), "BucketTypeDef"),
        ];

        let lines = import_lines(records, "paginator");
        assert_eq!(
            lines,
            vec![
                "from .type_defs import BucketTypeDef",
                "from typing import Any, List",
            ]
        );
    }

    #[test]
    fn test_function_view() {
        let function = Function::method(
            "close",
            vec![Argument::kwflag(), Argument::new("Force", TypeAnnotation::bool())],
            TypeAnnotation::none(),
        )
        .with_docstring("Close the connection.");

        let view = FunctionView::from(&function);
        assert_eq!(view.signature, "def close(self, *, Force: bool) -> None");
        assert_eq!(view.docstring, "Close the connection.");
        assert!(view.decorators.is_empty());
        assert!(view.body.is_none());
    }

    #[test]
    fn test_runtime_imports() {
        let mut records = BTreeSet::new();
        records.insert(ImportRecord::new(ImportString::new("boto3.session"), "Session"));

        let (runtime, type_only) = split_runtime_imports(records, "helpers");
        assert_eq!(runtime, vec!["import boto3", "from typing import TYPE_CHECKING"]);
        assert_eq!(type_only, vec!["from boto3.session import Session"]);
    }
}
