//! Paginator parser

use super::MethodDocs;
use crate::shape_parser::ShapeParser;
use sdk_stubgen_common::structures::Paginator;
use sdk_stubgen_common::Result;

/// Build one paginator per declared paginator config
///
/// Fails when a paginator's operation is not declared.
pub fn parse_paginators(shape_parser: &ShapeParser) -> Result<Vec<Paginator>> {
    let schema = shape_parser.schema();
    let service_name = schema.service_name();

    schema
        .paginators
        .keys()
        .map(|paginator_name| {
            let mut paginator = Paginator::new(&service_name, paginator_name, paginator_name);
            let docs = MethodDocs::new(schema, shape_parser.resource_names(), paginator.name());
            let paginate = shape_parser.get_paginate_method(paginator_name)?;
            paginator.class.methods.push(docs.document(paginate));
            Ok(paginator)
        })
        .collect()
}
