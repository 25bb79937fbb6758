//! Waiters

use super::{ClassRecord, TypeSource};
use crate::type_annotations::TypeAnnotation;
use crate::ServiceName;

/// `{Name}Waiter` exposing `wait`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Waiter {
    pub class: ClassRecord,
    pub waiter_name: String,
    pub operation_name: String,
    pub service_name: ServiceName,
}

impl Waiter {
    pub fn new(service_name: &ServiceName, waiter_name: &str, operation_name: &str) -> Self {
        let class = ClassRecord::new(&format!("{}Waiter", waiter_name))
            .with_base(TypeAnnotation::external("botocore.waiter", "Waiter"))
            .with_docstring(&format!(
                "Waiter for {} {}",
                service_name.class_name, waiter_name
            ));
        Self {
            class,
            waiter_name: waiter_name.to_string(),
            operation_name: operation_name.to_string(),
            service_name: service_name.clone(),
        }
    }

    pub fn name(&self) -> &str {
        &self.class.name
    }
}

impl TypeSource for Waiter {
    fn type_annotations(&self) -> Vec<&TypeAnnotation> {
        self.class.type_annotations()
    }
}
