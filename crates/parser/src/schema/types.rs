//! Schema bundle type definitions
//!
//! These types mirror the JSON layout of a service bundle. Maps use
//! [`IndexMap`] so declared member order survives deserialization.

use indexmap::IndexMap;
use sdk_stubgen_common::{GeneratorError, LookupKind, Result, ServiceName};
use serde::{Deserialize, Serialize};

/// Root document for one service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceSchema {
    /// SDK service name (e.g., "s3")
    pub service_name: String,

    /// Class name prefix (e.g., "S3")
    pub class_name: String,

    /// Operations and shapes
    pub model: ServiceModel,

    #[serde(default)]
    pub paginators: IndexMap<String, PaginatorModel>,

    #[serde(default)]
    pub waiters: IndexMap<String, WaiterModel>,

    /// Resource model, for services that have one
    #[serde(default)]
    pub resources: Option<ResourcesModel>,

    /// Method documentation keyed by `Entity.method`
    #[serde(default)]
    pub documentation: IndexMap<String, String>,
}

/// Low-level service model
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceModel {
    #[serde(default)]
    pub operations: IndexMap<String, Operation>,

    #[serde(default)]
    pub shapes: IndexMap<String, Shape>,
}

/// One API operation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    #[serde(default)]
    pub input: Option<ShapeRef>,

    #[serde(default)]
    pub output: Option<ShapeRef>,

    #[serde(default)]
    pub documentation: Option<String>,
}

/// Reference to a named shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeRef {
    pub shape: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
}

impl ShapeRef {
    pub fn new(shape: &str) -> Self {
        Self {
            shape: shape.to_string(),
            documentation: None,
        }
    }
}

/// A schema node describing one data type
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    /// Kind tag (structure, list, map, string, integer, ...)
    #[serde(rename = "type")]
    pub type_name: String,

    /// Structure members in declared order
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub members: IndexMap<String, ShapeRef>,

    /// Names of required structure members
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,

    /// Enumerated values of a string shape
    #[serde(rename = "enum", default, skip_serializing_if = "Vec::is_empty")]
    pub enum_values: Vec<String>,

    /// Map key shape
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<ShapeRef>,

    /// Map value shape
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<ShapeRef>,

    /// List member shape
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member: Option<ShapeRef>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,

    /// Streaming blob payload
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub streaming: bool,
}

impl Shape {
    pub fn is_required(&self, member: &str) -> bool {
        self.required.iter().any(|name| name == member)
    }
}

/// Continuation token field(s) of a paginated operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InputToken {
    Single(String),
    Multiple(Vec<String>),
}

impl InputToken {
    pub fn names(&self) -> Vec<&str> {
        match self {
            InputToken::Single(name) => vec![name.as_str()],
            InputToken::Multiple(names) => names.iter().map(String::as_str).collect(),
        }
    }
}

/// Paginator configuration, keyed by operation name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginatorModel {
    pub input_token: InputToken,

    #[serde(default)]
    pub limit_key: Option<String>,

    #[serde(default)]
    pub output_token: Option<serde_json::Value>,

    #[serde(default)]
    pub result_key: Option<serde_json::Value>,
}

/// Waiter configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaiterModel {
    /// Polled operation
    pub operation: String,

    #[serde(default)]
    pub delay: Option<u32>,

    #[serde(default)]
    pub max_attempts: Option<u32>,
}

/// Resource model of a service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourcesModel {
    /// The service resource entry point
    #[serde(default)]
    pub service: ResourceModel,

    /// Sub-resources by name
    #[serde(default)]
    pub resources: IndexMap<String, ResourceModel>,
}

/// One resource (or the service resource)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceModel {
    #[serde(default)]
    pub identifiers: Vec<Identifier>,

    /// Shape whose members become resource attributes
    #[serde(default)]
    pub shape: Option<String>,

    /// Action used by `load`
    #[serde(default)]
    pub load: Option<Action>,

    #[serde(default)]
    pub actions: IndexMap<String, Action>,

    #[serde(default)]
    pub batch_actions: IndexMap<String, Action>,

    /// One-to-one relations (sub-resource getters)
    #[serde(default)]
    pub has: IndexMap<String, Relation>,

    /// One-to-many relations (collections)
    #[serde(default)]
    pub has_many: IndexMap<String, Action>,

    #[serde(default)]
    pub waiters: IndexMap<String, ResourceWaiter>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identifier {
    pub name: String,
}

/// A resource action, or a `hasMany` relation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Action {
    #[serde(default)]
    pub request: Option<Request>,

    #[serde(default)]
    pub resource: Option<ResourceTarget>,

    #[serde(default)]
    pub path: Option<String>,
}

/// Underlying operation call of an action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request {
    pub operation: String,

    #[serde(default)]
    pub params: Vec<Param>,
}

impl Request {
    /// Operation arguments filled from the parent resource's identity
    pub fn identifier_targets(&self) -> Vec<&str> {
        self.params
            .iter()
            .filter(|param| param.source == ParamSource::Identifier)
            .map(|param| param.target.as_str())
            .collect()
    }
}

/// Binding of one request argument or resource identifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Param {
    pub target: String,
    pub source: ParamSource,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub path: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ParamSource {
    Identifier,
    Input,
    Data,
    RequestParameter,
    Response,
    ResponsePath,
    String,
    Integer,
    Boolean,
    #[serde(other)]
    Other,
}

/// Resource produced by an action or relation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceTarget {
    #[serde(rename = "type")]
    pub type_name: String,

    #[serde(default)]
    pub identifiers: Vec<Param>,

    #[serde(default)]
    pub path: Option<String>,
}

impl ResourceTarget {
    /// Whether the action yields several resources (`Path[]`)
    pub fn is_list(&self) -> bool {
        self.path.as_deref().is_some_and(|path| path.ends_with("[]"))
    }
}

/// One-to-one relation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Relation {
    pub resource: ResourceTarget,
}

/// Resource waiter mapped onto a client waiter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceWaiter {
    pub waiter_name: String,

    #[serde(default)]
    pub params: Vec<Param>,
}

impl ServiceSchema {
    pub fn service_name(&self) -> ServiceName {
        ServiceName::new(&self.service_name, &self.class_name)
    }

    pub fn get_operation(&self, name: &str) -> Result<&Operation> {
        self.model
            .operations
            .get(name)
            .ok_or_else(|| self.lookup_error(LookupKind::Operation, name))
    }

    pub fn get_shape(&self, name: &str) -> Result<&Shape> {
        self.model
            .shapes
            .get(name)
            .ok_or_else(|| self.lookup_error(LookupKind::Shape, name))
    }

    pub fn get_paginator(&self, name: &str) -> Result<&PaginatorModel> {
        self.paginators
            .get(name)
            .ok_or_else(|| self.lookup_error(LookupKind::Paginator, name))
    }

    pub fn get_waiter(&self, name: &str) -> Result<&WaiterModel> {
        self.waiters
            .get(name)
            .ok_or_else(|| self.lookup_error(LookupKind::Waiter, name))
    }

    /// Sub-resource model by name
    pub fn get_resource(&self, name: &str) -> Result<&ResourceModel> {
        self.resources
            .as_ref()
            .and_then(|resources| resources.resources.get(name))
            .ok_or_else(|| self.lookup_error(LookupKind::Resource, name))
    }

    /// Names of every declared sub-resource
    pub fn resource_names(&self) -> Vec<String> {
        self.resources
            .as_ref()
            .map(|resources| resources.resources.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Documentation for `Entity.method`, if any
    pub fn get_documentation(&self, entity: &str, method: &str) -> Option<&str> {
        self.documentation
            .get(&format!("{}.{}", entity, method))
            .map(String::as_str)
    }

    pub fn lookup_error(&self, kind: LookupKind, name: &str) -> GeneratorError {
        GeneratorError::lookup(&self.service_name, kind, name)
    }
}

impl ResourceModel {
    pub fn get_action(&self, service: &str, name: &str) -> Result<&Action> {
        self.actions
            .get(name)
            .ok_or_else(|| GeneratorError::lookup(service, LookupKind::Action, name))
    }

    pub fn get_collection(&self, service: &str, name: &str) -> Result<&Action> {
        self.has_many
            .get(name)
            .ok_or_else(|| GeneratorError::lookup(service, LookupKind::Collection, name))
    }
}
