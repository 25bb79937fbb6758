//! Structured records produced by the parser and consumed by the writers

mod argument;
mod attribute;
mod class_record;
mod client;
mod collection;
mod function;
mod paginator;
mod resource;
mod service_package;
mod service_resource;
mod waiter;

pub use argument::{sort_arguments, Argument, ArgumentPrefix};
pub use attribute::Attribute;
pub use class_record::ClassRecord;
pub use client::Client;
pub use collection::Collection;
pub use function::Function;
pub use paginator::Paginator;
pub use resource::Resource;
pub use service_package::{ServicePackage, SERVICE_RESOURCE_MODULE, TYPE_DEFS_MODULE};
pub use service_resource::ServiceResource;
pub use waiter::Waiter;

use crate::import_helpers::ImportRecord;
use crate::type_annotations::TypeAnnotation;
use std::collections::BTreeSet;

/// A record that uses type annotations
pub trait TypeSource {
    /// Annotations used directly by this record
    fn type_annotations(&self) -> Vec<&TypeAnnotation>;

    /// Transitive closure of every annotation reachable from this record
    fn get_types(&self) -> BTreeSet<TypeAnnotation> {
        let mut types = BTreeSet::new();
        for annotation in self.type_annotations() {
            annotation.collect_types(&mut types);
        }
        types
    }

    /// Imports a module declaring this record needs, built-ins excluded
    fn get_required_import_records(&self) -> BTreeSet<ImportRecord> {
        self.type_annotations()
            .into_iter()
            .flat_map(TypeAnnotation::get_import_records)
            .filter(|record| !record.is_builtins())
            .collect()
    }
}
