//! Client parser

use super::MethodDocs;
use crate::shape_parser::{xform_name, ShapeParser};
use sdk_stubgen_common::structures::{Argument, Attribute, Client, Function};
use sdk_stubgen_common::type_annotations::{InternalImport, TypeAnnotation};
use sdk_stubgen_common::Result;

/// Methods every client has besides its operations
const CLIENT_BASE_METHODS: &[&str] = &["can_paginate", "close", "generate_presigned_url"];

fn overload() -> TypeAnnotation {
    TypeAnnotation::external("typing", "overload")
}

/// `get_paginator` / `get_waiter` overload for one named entity
fn accessor_overload(method_name: &str, literal: &str, class_name: &str, module: &str) -> Function {
    Function::method(
        method_name,
        vec![Argument::new(
            "operation_name",
            TypeAnnotation::literal(&[literal]),
        )],
        TypeAnnotation::Internal(InternalImport::from_module(class_name, module)),
    )
    .with_decorator(overload())
}

/// Build the low-level client of a service
pub fn parse_client(shape_parser: &ShapeParser) -> Result<Client> {
    let schema = shape_parser.schema();
    let mut client = Client::new(&schema.service_name());
    let docs = MethodDocs::new(schema, shape_parser.resource_names(), client.name());

    client.class.attributes.push(Attribute::new(
        "meta",
        TypeAnnotation::external("botocore.client", "ClientMeta"),
    ));
    client.class.attributes.push(Attribute::new(
        "exceptions",
        TypeAnnotation::external("botocore.errorfactory", "BaseClientExceptions"),
    ));

    let mut methods: Vec<Function> = shape_parser
        .get_client_method_map()?
        .into_iter()
        .map(|method| docs.document(method))
        .collect();
    methods.extend(
        CLIENT_BASE_METHODS
            .iter()
            .filter_map(|name| docs.docless(name)),
    );

    for paginator_name in schema.paginators.keys() {
        shape_parser.get_operation(paginator_name)?;
        methods.push(accessor_overload(
            "get_paginator",
            &xform_name(paginator_name),
            &format!("{}Paginator", paginator_name),
            "paginator",
        ));
    }
    for (waiter_name, waiter) in &schema.waiters {
        shape_parser.get_operation(&waiter.operation)?;
        methods.push(accessor_overload(
            "get_waiter",
            &xform_name(waiter_name),
            &format!("{}Waiter", waiter_name),
            "waiter",
        ));
    }

    let extra = docs.extra_methods(&methods);
    methods.extend(extra);
    client.class.methods = methods;
    Ok(client)
}
