//! Schema parsing for sdk-stubgen
//!
//! This crate turns a service schema bundle into a
//! [`ServicePackage`](sdk_stubgen_common::structures::ServicePackage).
//!
//! ## Parsing Strategy
//!
//! - [`schema`] loads the bundle (service model, paginators, waiters,
//!   resources, documentation)
//! - [`shape_patches`] corrects known service quirks on a copy of the model
//! - [`ShapeParser`] translates shapes to type annotations, interning every
//!   TypedDict by name in a per-service cache
//! - [`parsers`] assemble client, service resource, resource, collection,
//!   paginator and waiter records, enriched from method documentation

pub mod docstring;
pub mod fixed_types;
pub mod parsers;
pub mod schema;
pub mod shape_parser;
pub mod shape_patches;
pub mod type_def_cache;
pub mod type_maps;

pub use parsers::ServicePackageParser;
pub use schema::{SchemaParser, ServiceSchema};
pub use shape_parser::ShapeParser;

use sdk_stubgen_common::structures::ServicePackage;
use sdk_stubgen_common::Result;
use std::path::Path;

/// Parse a schema bundle file into a service package
///
/// # Arguments
/// * `path` - Path to the JSON schema bundle
///
/// # Returns
/// * `ServicePackage` - every entity of the service
pub fn parse_service_package<P: AsRef<Path>>(path: P) -> Result<ServicePackage> {
    let schema = SchemaParser::from_file(path)?.parse()?;
    ServicePackageParser::new(&schema).parse()
}
