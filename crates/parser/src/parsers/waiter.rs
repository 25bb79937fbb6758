//! Waiter parser

use super::MethodDocs;
use crate::shape_parser::ShapeParser;
use sdk_stubgen_common::structures::Waiter;
use sdk_stubgen_common::Result;

/// Build one waiter per declared waiter config
pub fn parse_waiters(shape_parser: &ShapeParser) -> Result<Vec<Waiter>> {
    let schema = shape_parser.schema();
    let service_name = schema.service_name();

    schema
        .waiters
        .iter()
        .map(|(waiter_name, model)| {
            let mut waiter = Waiter::new(&service_name, waiter_name, &model.operation);
            let docs = MethodDocs::new(schema, shape_parser.resource_names(), waiter.name());
            let wait = shape_parser.get_wait_method(waiter_name)?;
            waiter.class.methods.push(docs.document(wait));
            Ok(waiter)
        })
        .collect()
}
