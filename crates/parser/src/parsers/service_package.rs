//! Service package parser

use super::{parse_client, parse_helpers, parse_paginators, parse_service_resource, parse_waiters};
use crate::schema::ServiceSchema;
use crate::shape_parser::ShapeParser;
use sdk_stubgen_common::structures::ServicePackage;
use sdk_stubgen_common::Result;
use tracing::{debug, info};

/// Parses every entity of one service
///
/// Owns the service's [`ShapeParser`], so TypedDict instances are shared
/// across all entities of the package and never across services.
pub struct ServicePackageParser<'a> {
    shape_parser: ShapeParser<'a>,
}

impl<'a> ServicePackageParser<'a> {
    pub fn new(schema: &'a ServiceSchema) -> Self {
        Self {
            shape_parser: ShapeParser::new(schema),
        }
    }

    /// Build the package
    ///
    /// The first unresolvable paginator, waiter, resource, collection or
    /// action aborts the service with a `SchemaLookup` error.
    pub fn parse(&self) -> Result<ServicePackage> {
        let schema = self.shape_parser.schema();
        let service_name = schema.service_name();
        info!("Parsing service {}", service_name);

        let client = parse_client(&self.shape_parser)?;
        let mut package = ServicePackage::new(&service_name, client);
        package.service_resource = parse_service_resource(&self.shape_parser)?;
        package.paginators = parse_paginators(&self.shape_parser)?;
        package.waiters = parse_waiters(&self.shape_parser)?;
        package.helpers = parse_helpers(&service_name, package.service_resource.is_some());

        debug!(
            "Service {}: {} paginators, {} waiters, {} TypedDicts",
            service_name,
            package.paginators.len(),
            package.waiters.len(),
            self.shape_parser.cache().len()
        );
        Ok(package)
    }

    pub fn shape_parser(&self) -> &ShapeParser<'a> {
        &self.shape_parser
    }
}
