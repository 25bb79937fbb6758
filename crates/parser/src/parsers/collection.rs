//! Collection parser

use super::MethodDocs;
use crate::schema::ResourceModel;
use crate::shape_parser::{resource_reference, xform_name, ShapeParser};
use sdk_stubgen_common::structures::{Argument, Collection, Function};
use sdk_stubgen_common::type_annotations::TypeAnnotation;
use sdk_stubgen_common::{GeneratorError, LookupKind, Result};

/// Build one collection per `hasMany` relation of `owner`
///
/// `parent_name` prefixes the collection class names.
pub fn parse_collections(
    shape_parser: &ShapeParser,
    parent_name: &str,
    owner: &ResourceModel,
) -> Result<Vec<Collection>> {
    owner
        .has_many
        .keys()
        .map(|relation_name| parse_collection(shape_parser, parent_name, owner, relation_name))
        .collect()
}

/// Build the collection for the `hasMany` relation named `relation_name`
///
/// An unknown relation, a relation without a declared target resource, or
/// one with an undeclared target is fatal.
pub fn parse_collection(
    shape_parser: &ShapeParser,
    parent_name: &str,
    owner: &ResourceModel,
    relation_name: &str,
) -> Result<Collection> {
    let schema = shape_parser.schema();
    let relation = owner.get_collection(&schema.service_name, relation_name)?;
    let target = relation.resource.as_ref().ok_or_else(|| {
        GeneratorError::lookup(&schema.service_name, LookupKind::Collection, relation_name)
    })?;
    let item_model = schema.get_resource(&target.type_name)?;
    let item_type = resource_reference(&target.type_name);

    let mut collection = Collection::new(
        parent_name,
        relation_name,
        &xform_name(relation_name),
        item_type.clone(),
    );
    let self_type = collection.class.internal_type();
    let docs = MethodDocs::new(schema, shape_parser.resource_names(), collection.name());

    let mut methods = vec![
        Function::method("all", Vec::new(), self_type.clone()),
        shape_parser.get_collection_filter_method(relation, &self_type)?,
        Function::method(
            "limit",
            vec![Argument::new("count", TypeAnnotation::int())],
            self_type.clone(),
        ),
        Function::method(
            "page_size",
            vec![Argument::new("count", TypeAnnotation::int())],
            self_type.clone(),
        ),
        Function::method(
            "pages",
            Vec::new(),
            TypeAnnotation::iterator(TypeAnnotation::list_of(item_type.clone())),
        ),
        Function::method("__iter__", Vec::new(), TypeAnnotation::iterator(item_type)),
    ];
    for (action_name, action) in &item_model.batch_actions {
        methods.push(shape_parser.parse_batch_action(action_name, action)?);
    }

    collection.class.methods = methods
        .into_iter()
        .map(|method| docs.document(method))
        .collect();
    Ok(collection)
}
