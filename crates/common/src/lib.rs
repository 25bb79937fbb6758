//! Common types and utilities for sdk-stubgen
//!
//! This crate contains the type annotation model, import records, the
//! structured records produced by the parser (methods, entities, service
//! packages), the shared error type and the generator configuration.

pub mod config;
pub mod import_helpers;
pub mod structures;
pub mod type_annotations;

pub use config::StubConfig;

use std::fmt;
use thiserror::Error;

/// Errors that can occur during stub generation
#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Generation error: {0}")]
    Generation(String),

    /// A name referenced by the schema is not declared in it.
    ///
    /// Fatal for the service being processed.
    #[error("{kind} '{name}' not found in {service} schema")]
    SchemaLookup {
        service: String,
        kind: LookupKind,
        name: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl GeneratorError {
    /// Build a [`GeneratorError::SchemaLookup`] error
    pub fn lookup(service: &str, kind: LookupKind, name: &str) -> Self {
        Self::SchemaLookup {
            service: service.to_string(),
            kind,
            name: name.to_string(),
        }
    }
}

/// Result type for generator operations
pub type Result<T> = std::result::Result<T, GeneratorError>;

/// Kind of schema entry a lookup was looking for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupKind {
    Operation,
    Shape,
    Resource,
    Collection,
    Action,
    Paginator,
    Waiter,
}

impl fmt::Display for LookupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LookupKind::Operation => "Operation",
            LookupKind::Shape => "Shape",
            LookupKind::Resource => "Resource",
            LookupKind::Collection => "Resource collection",
            LookupKind::Action => "Resource action",
            LookupKind::Paginator => "Paginator",
            LookupKind::Waiter => "Waiter",
        };
        f.write_str(name)
    }
}

/// Service identity used for naming generated classes and modules
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ServiceName {
    /// SDK service name (e.g., "s3", "ec2", "iot-data")
    pub name: String,

    /// Class name prefix (e.g., "S3", "EC2", "IoTDataPlane")
    pub class_name: String,
}

impl ServiceName {
    pub fn new(name: &str, class_name: &str) -> Self {
        Self {
            name: name.to_string(),
            class_name: class_name.to_string(),
        }
    }

    /// Service name usable as a Python identifier
    /// e.g., "iot-data" -> "iot_data"
    pub fn import_name(&self) -> String {
        self.name.replace('-', "_")
    }

    /// Name of the generated stub module
    /// e.g., "mypy_boto3_" + "s3" -> "mypy_boto3_s3"
    pub fn module_name(&self, prefix: &str) -> String {
        format!("{}{}", prefix, self.import_name())
    }

    /// Distribution name of the generated package
    /// e.g., "mypy-boto3-" + "iot-data" -> "mypy-boto3-iot-data"
    pub fn package_name(&self, prefix: &str) -> String {
        format!("{}{}", prefix, self.name)
    }

    pub fn client_name(&self) -> String {
        format!("{}Client", self.class_name)
    }

    pub fn service_resource_name(&self) -> String {
        format!("{}ServiceResource", self.class_name)
    }
}

impl fmt::Display for ServiceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
