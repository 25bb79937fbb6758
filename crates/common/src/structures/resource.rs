//! Sub-resources

use super::{ClassRecord, Collection, TypeSource};
use crate::type_annotations::TypeAnnotation;

/// A resource bound to identifiers, with actions and collections
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    pub class: ClassRecord,
    pub collections: Vec<Collection>,
}

impl Resource {
    pub fn new(name: &str, service_class_name: &str) -> Self {
        let class = ClassRecord::new(name)
            .with_base(TypeAnnotation::external(
                "boto3.resources.base",
                "ServiceResource",
            ))
            .with_docstring(&format!("{} {} resource", service_class_name, name));
        Self {
            class,
            collections: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.class.name
    }
}

impl TypeSource for Resource {
    fn type_annotations(&self) -> Vec<&TypeAnnotation> {
        let mut types = self.class.type_annotations();
        for collection in &self.collections {
            types.extend(collection.type_annotations());
        }
        types
    }
}
