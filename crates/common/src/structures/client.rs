//! Low-level service client

use super::{ClassRecord, TypeSource};
use crate::type_annotations::TypeAnnotation;
use crate::ServiceName;

/// `{Service}Client` with one method per operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Client {
    pub class: ClassRecord,
    pub service_name: ServiceName,
}

impl Client {
    pub fn new(service_name: &ServiceName) -> Self {
        let class = ClassRecord::new(&service_name.client_name())
            .with_base(TypeAnnotation::external("botocore.client", "BaseClient"))
            .with_docstring(&format!("{} client", service_name.class_name));
        Self {
            class,
            service_name: service_name.clone(),
        }
    }

    pub fn name(&self) -> &str {
        &self.class.name
    }
}

impl TypeSource for Client {
    fn type_annotations(&self) -> Vec<&TypeAnnotation> {
        self.class.type_annotations()
    }
}
