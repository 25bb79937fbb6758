//! Service-level resource entry point

use super::{ClassRecord, Collection, Resource, TypeSource};
use crate::type_annotations::TypeAnnotation;
use crate::ServiceName;

/// `{Service}ServiceResource` plus every sub-resource it can reach
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceResource {
    pub class: ClassRecord,
    pub service_name: ServiceName,
    pub sub_resources: Vec<Resource>,
    pub collections: Vec<Collection>,
}

impl ServiceResource {
    pub fn new(service_name: &ServiceName) -> Self {
        let class = ClassRecord::new(&service_name.service_resource_name())
            .with_base(TypeAnnotation::external(
                "boto3.resources.base",
                "ServiceResource",
            ))
            .with_docstring(&format!("{} resource", service_name.class_name));
        Self {
            class,
            service_name: service_name.clone(),
            sub_resources: Vec::new(),
            collections: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.class.name
    }

    pub fn get_sub_resource(&self, name: &str) -> Option<&Resource> {
        self.sub_resources
            .iter()
            .find(|resource| resource.name() == name)
    }

    /// Every collection class, service-level ones first
    pub fn all_collections(&self) -> Vec<&Collection> {
        self.collections
            .iter()
            .chain(
                self.sub_resources
                    .iter()
                    .flat_map(|resource| resource.collections.iter()),
            )
            .collect()
    }
}

impl TypeSource for ServiceResource {
    fn type_annotations(&self) -> Vec<&TypeAnnotation> {
        let mut types = self.class.type_annotations();
        for collection in &self.collections {
            types.extend(collection.type_annotations());
        }
        for resource in &self.sub_resources {
            types.extend(resource.type_annotations());
        }
        types
    }
}
