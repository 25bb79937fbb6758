//! Paginators

use super::{ClassRecord, TypeSource};
use crate::type_annotations::TypeAnnotation;
use crate::ServiceName;

/// `{Operation}Paginator` exposing `paginate`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paginator {
    pub class: ClassRecord,
    pub paginator_name: String,
    pub operation_name: String,
    pub service_name: ServiceName,
}

impl Paginator {
    pub fn new(service_name: &ServiceName, paginator_name: &str, operation_name: &str) -> Self {
        let class = ClassRecord::new(&format!("{}Paginator", paginator_name))
            .with_base(TypeAnnotation::external("botocore.paginate", "Paginator"))
            .with_docstring(&format!(
                "Paginator for {} {}",
                service_name.class_name, operation_name
            ));
        Self {
            class,
            paginator_name: paginator_name.to_string(),
            operation_name: operation_name.to_string(),
            service_name: service_name.clone(),
        }
    }

    pub fn name(&self) -> &str {
        &self.class.name
    }
}

impl TypeSource for Paginator {
    fn type_annotations(&self) -> Vec<&TypeAnnotation> {
        self.class.type_annotations()
    }
}
