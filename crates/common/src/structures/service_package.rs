//! Everything generated for one service

use super::{Client, Function, Paginator, ServiceResource, TypeSource, Waiter};
use crate::import_helpers::{ImportRecord, ImportString};
use crate::type_annotations::{TypeAnnotation, TypedDict};
use crate::ServiceName;
use std::collections::BTreeSet;

/// Module that holds the TypedDict declarations of a package
pub const TYPE_DEFS_MODULE: &str = "type_defs";

/// Module that holds the service resource, resource and collection classes
pub const SERVICE_RESOURCE_MODULE: &str = "service_resource";

/// Client, resources, paginators, waiters and runtime helpers of one service
#[derive(Debug, Clone)]
pub struct ServicePackage {
    pub service_name: ServiceName,
    pub client: Client,
    pub service_resource: Option<ServiceResource>,
    pub paginators: Vec<Paginator>,
    pub waiters: Vec<Waiter>,
    pub helpers: Vec<Function>,
}

impl ServicePackage {
    pub fn new(service_name: &ServiceName, client: Client) -> Self {
        Self {
            service_name: service_name.clone(),
            client,
            service_resource: None,
            paginators: Vec::new(),
            waiters: Vec::new(),
            helpers: Vec::new(),
        }
    }

    /// Every annotation reachable from any entity of the package
    pub fn get_types(&self) -> BTreeSet<TypeAnnotation> {
        let mut types = self.client.get_types();
        if let Some(service_resource) = &self.service_resource {
            types.extend(service_resource.get_types());
        }
        for paginator in &self.paginators {
            types.extend(paginator.get_types());
        }
        for waiter in &self.waiters {
            types.extend(waiter.get_types());
        }
        for helper in &self.helpers {
            types.extend(helper.get_types());
        }
        types
    }

    /// Snapshots of every TypedDict the package uses, sorted by name
    pub fn extract_type_defs(&self) -> Vec<TypedDict> {
        // types are keyed by rendered name, so each TypedDict appears once
        self.get_types()
            .iter()
            .filter_map(TypeAnnotation::as_typed_dict)
            .map(|typed_dict| typed_dict.snapshot())
            .collect()
    }

    /// Imports needed by the `type_defs` module
    pub fn get_type_defs_import_records(&self) -> BTreeSet<ImportRecord> {
        let local = ImportString::local(TYPE_DEFS_MODULE);
        let mut records = BTreeSet::new();
        for typed_dict in self.extract_type_defs() {
            records.extend(typed_dict.get_definition_import_records());
            for field in &typed_dict.fields {
                records.extend(field.type_annotation.get_import_records());
            }
        }
        records.retain(|record| !record.is_builtins() && record.source != local);
        records
    }

    pub fn get_paginator(&self, paginator_name: &str) -> Option<&Paginator> {
        self.paginators
            .iter()
            .find(|paginator| paginator.paginator_name == paginator_name)
    }

    pub fn get_waiter(&self, waiter_name: &str) -> Option<&Waiter> {
        self.waiters
            .iter()
            .find(|waiter| waiter.waiter_name == waiter_name)
    }
}
