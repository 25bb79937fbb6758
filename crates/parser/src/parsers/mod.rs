//! Entity parsers
//!
//! Each parser combines the schema-derived methods built by
//! [`ShapeParser`](crate::shape_parser::ShapeParser) with method
//! documentation into one entity record.

mod client;
mod collection;
mod helpers;
mod paginator;
mod resource;
mod service_package;
mod service_resource;
mod waiter;

pub use client::parse_client;
pub use collection::{parse_collection, parse_collections};
pub use helpers::parse_helpers;
pub use paginator::parse_paginators;
pub use resource::parse_resource;
pub use service_package::ServicePackageParser;
pub use service_resource::parse_service_resource;
pub use waiter::parse_waiters;

use crate::docstring::{
    merge_documentation, method_from_docstring, undocumented_method, DocstringParser,
};
use crate::schema::ServiceSchema;
use sdk_stubgen_common::structures::Function;
use tracing::debug;

/// Documentation lookup for the methods of one entity
pub(crate) struct MethodDocs<'a> {
    schema: &'a ServiceSchema,
    parser: DocstringParser<'a>,
    entity: String,
}

impl<'a> MethodDocs<'a> {
    pub(crate) fn new(schema: &'a ServiceSchema, resource_names: &'a [String], entity: &str) -> Self {
        Self {
            schema,
            parser: DocstringParser::new(resource_names),
            entity: entity.to_string(),
        }
    }

    /// Apply documentation to a schema-derived method
    ///
    /// Malformed documentation leaves the schema signature untouched.
    pub(crate) fn document(&self, method: Function) -> Function {
        let Some(text) = self.schema.get_documentation(&self.entity, &method.name) else {
            return method;
        };
        match self.parser.parse(text) {
            Ok(info) => merge_documentation(method, &info),
            Err(e) => {
                debug!(
                    "Ignoring documentation of {}.{}: {}",
                    self.entity, method.name, e
                );
                method
            }
        }
    }

    /// Method that exists only through documentation or the fallback table
    ///
    /// The fallback table is consulted only when the method has no
    /// documentation at all.
    pub(crate) fn docless(&self, name: &str) -> Option<Function> {
        if let Some(text) = self.schema.get_documentation(&self.entity, name) {
            return Some(self.from_text(name, text));
        }
        let info = self.parser.docless_method(name)?;
        debug!("Using fallback signature for {}.{}", self.entity, name);
        Some(method_from_docstring(name, &info))
    }

    /// Documented methods of this entity that `existing` does not cover
    pub(crate) fn extra_methods(&self, existing: &[Function]) -> Vec<Function> {
        let prefix = format!("{}.", self.entity);
        self.schema
            .documentation
            .iter()
            .filter_map(|(key, text)| Some((key.strip_prefix(&prefix)?, text)))
            .filter(|(name, _)| existing.iter().all(|method| method.name != *name))
            .map(|(name, text)| self.from_text(name, text))
            .collect()
    }

    fn from_text(&self, name: &str, text: &str) -> Function {
        match self.parser.parse(text) {
            Ok(info) => method_from_docstring(name, &info),
            Err(e) => {
                debug!("Ignoring documentation of {}.{}: {}", self.entity, name, e);
                undocumented_method(name)
            }
        }
    }
}
