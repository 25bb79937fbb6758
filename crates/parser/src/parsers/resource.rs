//! Sub-resource parser

use super::{parse_collections, MethodDocs};
use crate::schema::ResourceModel;
use crate::shape_parser::ShapeParser;
use sdk_stubgen_common::structures::{Attribute, Function, Resource};
use sdk_stubgen_common::type_annotations::TypeAnnotation;
use sdk_stubgen_common::Result;

/// `meta` attribute of every resource
pub(super) fn resource_meta() -> Attribute {
    Attribute::new(
        "meta",
        TypeAnnotation::external("boto3.resources.base", "ResourceMeta"),
    )
}

/// Actions and sub-resource getters shared by resources and the service resource
pub(super) fn parse_resource_actions(
    shape_parser: &ShapeParser,
    model: &ResourceModel,
) -> Result<Vec<Function>> {
    let mut methods = Vec::new();
    for action_name in model.actions.keys() {
        methods.push(shape_parser.get_resource_action_method(model, action_name)?);
    }
    for (relation_name, relation) in &model.has {
        methods.push(shape_parser.parse_sub_resource_getter(relation_name, &relation.resource)?);
    }
    Ok(methods)
}

/// Build the sub-resource named `name`
pub fn parse_resource(shape_parser: &ShapeParser, name: &str) -> Result<Resource> {
    let schema = shape_parser.schema();
    let model = schema.get_resource(name)?;
    let mut resource = Resource::new(name, &schema.class_name);
    let docs = MethodDocs::new(schema, shape_parser.resource_names(), name);

    resource.class.attributes = shape_parser.get_resource_attributes(model);
    resource.class.attributes.push(resource_meta());

    let mut methods: Vec<Function> = parse_resource_actions(shape_parser, model)?
        .into_iter()
        .map(|method| docs.document(method))
        .collect();
    for (waiter_name, waiter) in &model.waiters {
        let method = shape_parser.get_resource_wait_method(waiter_name, waiter)?;
        methods.push(docs.document(method));
    }
    methods.extend(docs.docless("get_available_subresources"));
    if model.load.is_some() {
        methods.extend(docs.docless("load"));
        methods.extend(docs.docless("reload"));
    }
    let extra = docs.extra_methods(&methods);
    methods.extend(extra);
    resource.class.methods = methods;

    resource.collections = parse_collections(shape_parser, name, model)?;
    for collection in &resource.collections {
        resource.class.attributes.push(Attribute::new(
            &collection.attribute_name,
            collection.attribute_type(),
        ));
    }

    Ok(resource)
}
