//! Service resource parser

use super::resource::{parse_resource_actions, resource_meta};
use super::{parse_collections, parse_resource, MethodDocs};
use crate::shape_parser::ShapeParser;
use sdk_stubgen_common::structures::{Attribute, Function, ServiceResource};
use sdk_stubgen_common::Result;

/// Collection class prefix for service-level relations
const SERVICE_COLLECTION_PREFIX: &str = "ServiceResource";

/// Build the service resource and every sub-resource
///
/// Returns `None` for services without a resource model.
pub fn parse_service_resource(shape_parser: &ShapeParser) -> Result<Option<ServiceResource>> {
    let schema = shape_parser.schema();
    let Some(resources) = &schema.resources else {
        return Ok(None);
    };

    let mut service_resource = ServiceResource::new(&schema.service_name());
    let docs = MethodDocs::new(
        schema,
        shape_parser.resource_names(),
        service_resource.name(),
    );
    service_resource.class.attributes.push(resource_meta());

    let mut methods: Vec<Function> = parse_resource_actions(shape_parser, &resources.service)?
        .into_iter()
        .map(|method| docs.document(method))
        .collect();
    methods.extend(docs.docless("get_available_subresources"));
    let extra = docs.extra_methods(&methods);
    methods.extend(extra);
    service_resource.class.methods = methods;

    service_resource.collections =
        parse_collections(shape_parser, SERVICE_COLLECTION_PREFIX, &resources.service)?;
    for collection in &service_resource.collections {
        service_resource.class.attributes.push(Attribute::new(
            &collection.attribute_name,
            collection.attribute_type(),
        ));
    }

    for name in shape_parser.resource_names() {
        service_resource
            .sub_resources
            .push(parse_resource(shape_parser, name)?);
    }

    Ok(Some(service_resource))
}
