//! Shape translator
//!
//! Maps service model shapes to [`TypeAnnotation`] trees and assembles the
//! schema-derived methods of every entity kind. One [`ShapeParser`] owns the
//! TypedDict cache of one service.

use crate::fixed_types;
use crate::schema::{
    Action, Operation, ParamSource, ResourceModel, ResourceTarget, ResourceWaiter,
    ServiceModel, ServiceSchema, Shape, ShapeRef,
};
use crate::shape_patches::apply_patches;
use crate::type_def_cache::TypeDefCache;
use crate::type_maps::get_argument_override;
use heck::ToSnakeCase;
use sdk_stubgen_common::structures::{
    sort_arguments, Argument, Attribute, Function, SERVICE_RESOURCE_MODULE,
};
use sdk_stubgen_common::type_annotations::{
    Generic, InternalImport, SharedTypedDict, TypeAnnotation,
};
use sdk_stubgen_common::{GeneratorError, LookupKind, Result};
use tracing::{debug, warn};

/// Suffix of every TypedDict derived from a structure shape
const TYPE_DEF_SUFFIX: &str = "TypeDef";

/// `Union[bytes, IO[bytes], StreamingBody]`
pub fn blob_input_type() -> TypeAnnotation {
    TypeAnnotation::union(vec![
        TypeAnnotation::bytes(),
        TypeAnnotation::subscript(Generic::IO, vec![TypeAnnotation::bytes()]),
        TypeAnnotation::streaming_body(),
    ])
}

/// Reference to a resource class of the generated `service_resource` module
pub fn resource_reference(name: &str) -> TypeAnnotation {
    TypeAnnotation::Internal(InternalImport::from_module(name, SERVICE_RESOURCE_MODULE))
}

/// Python method name for a model name (e.g., "ListObjectsV2" -> "list_objects_v2")
pub fn xform_name(name: &str) -> String {
    name.to_snake_case()
}

/// Shape translator for one service
pub struct ShapeParser<'a> {
    schema: &'a ServiceSchema,
    /// Service model with patches applied
    model: ServiceModel,
    resource_names: Vec<String>,
    cache: TypeDefCache,
    /// PaginatorConfig, WaiterConfig, ResponseMetadata and CopySource
    fixed: TypeDefCache,
}

impl<'a> ShapeParser<'a> {
    pub fn new(schema: &'a ServiceSchema) -> Self {
        Self {
            schema,
            model: apply_patches(&schema.service_name, &schema.model),
            resource_names: schema.resource_names(),
            cache: TypeDefCache::new(),
            fixed: TypeDefCache::new(),
        }
    }

    pub fn schema(&self) -> &ServiceSchema {
        self.schema
    }

    pub fn cache(&self) -> &TypeDefCache {
        &self.cache
    }

    pub fn resource_names(&self) -> &[String] {
        &self.resource_names
    }

    /// Operation from the patched model
    pub fn get_operation(&self, name: &str) -> Result<&Operation> {
        self.model
            .operations
            .get(name)
            .ok_or_else(|| self.schema.lookup_error(LookupKind::Operation, name))
    }

    /// Translate the shape named `shape_name`
    ///
    /// `output` selects the output-position rendering of blobs.
    pub fn parse_shape(&self, shape_name: &str, output: bool) -> TypeAnnotation {
        match self.model.shapes.get(shape_name) {
            Some(shape) => self.parse_named_shape(shape_name, shape, output),
            None => self.parse_unknown(shape_name),
        }
    }

    fn parse_named_shape(&self, shape_name: &str, shape: &Shape, output: bool) -> TypeAnnotation {
        if let Some(scalar) = self.parse_scalar(shape, output) {
            return scalar;
        }
        match shape.type_name.as_str() {
            "string" => {
                if shape.enum_values.is_empty() {
                    TypeAnnotation::str()
                } else {
                    TypeAnnotation::literal(&shape.enum_values)
                }
            }
            "map" => TypeAnnotation::dict_of(
                self.parse_member(shape.key.as_ref(), output, TypeAnnotation::str),
                self.parse_member(shape.value.as_ref(), output, TypeAnnotation::any),
            ),
            "structure" => self.parse_structure(shape_name, shape, output),
            "list" => TypeAnnotation::list_of(self.parse_member(
                shape.member.as_ref(),
                output,
                TypeAnnotation::any,
            )),
            other => self.parse_unknown(other),
        }
    }

    fn parse_scalar(&self, shape: &Shape, output: bool) -> Option<TypeAnnotation> {
        let scalar = match shape.type_name.as_str() {
            "integer" | "long" => TypeAnnotation::int(),
            "boolean" => TypeAnnotation::bool(),
            "double" | "float" => TypeAnnotation::float(),
            "timestamp" => TypeAnnotation::datetime(),
            "blob" if !output => blob_input_type(),
            "blob" if shape.streaming => TypeAnnotation::streaming_body(),
            "blob" => TypeAnnotation::bytes(),
            _ => return None,
        };
        Some(scalar)
    }

    /// Sub-shape reference, or `default` when absent or dangling
    fn parse_member(
        &self,
        shape_ref: Option<&ShapeRef>,
        output: bool,
        default: fn() -> TypeAnnotation,
    ) -> TypeAnnotation {
        match shape_ref {
            Some(shape_ref) if self.model.shapes.contains_key(&shape_ref.shape) => {
                self.parse_shape(&shape_ref.shape, output)
            }
            _ => default(),
        }
    }

    fn parse_structure(&self, shape_name: &str, shape: &Shape, output: bool) -> TypeAnnotation {
        if shape.members.is_empty() {
            return TypeAnnotation::dict_str_any();
        }

        let mut name = format!("{}{}", shape_name, TYPE_DEF_SUFFIX);
        if fixed_types::is_fixed_name(&name) {
            name = format!("{}Shape{}", shape_name, TYPE_DEF_SUFFIX);
            debug!(
                "Shape {} of {} schema collides with a fixed TypedDict, using {}",
                shape_name, self.schema.service_name, name
            );
        }
        if let Some(cached) = self.cache.get(&name) {
            return TypeAnnotation::TypedDict(cached);
        }

        // cached before members are parsed so recursive shapes resolve to it
        let typed_dict = self.cache.insert(SharedTypedDict::new(&name));
        if let Some(documentation) = &shape.documentation {
            typed_dict.set_docstring(&clean_documentation(documentation));
        }
        for (member_name, member) in &shape.members {
            let member_type = self.parse_member(Some(member), output, TypeAnnotation::any);
            typed_dict.add_field(member_name, member_type, shape.is_required(member_name));
        }
        TypeAnnotation::TypedDict(typed_dict)
    }

    fn parse_unknown(&self, type_name: &str) -> TypeAnnotation {
        if self.resource_names.iter().any(|name| name == type_name) {
            return resource_reference(type_name);
        }
        warn!(
            "Unknown shape kind '{}' in {} schema, using Any",
            type_name, self.schema.service_name
        );
        TypeAnnotation::any()
    }

    /// Arguments for the members of an operation's input structure
    ///
    /// Members named in `exclude` are skipped. Optional members default to
    /// `None` and follow every required member.
    pub fn parse_arguments(
        &self,
        operation_name: &str,
        input: &ShapeRef,
        exclude: &[&str],
    ) -> Vec<Argument> {
        let Some(shape) = self.model.shapes.get(&input.shape) else {
            return Vec::new();
        };

        let arguments = shape
            .members
            .iter()
            .filter(|(name, _)| !exclude.contains(&name.as_str()))
            .map(|(name, member)| {
                let type_annotation = get_argument_override(
                    &self.schema.service_name,
                    operation_name,
                    name,
                    &self.fixed,
                )
                .unwrap_or_else(|| self.parse_member(Some(member), false, TypeAnnotation::any));
                if shape.is_required(name) {
                    Argument::new(name, type_annotation)
                } else {
                    Argument::optional(name, type_annotation)
                }
            })
            .collect();

        sort_arguments(arguments)
    }

    /// Keyword-only operation arguments, preceded by `*`
    fn parse_keyword_arguments(
        &self,
        operation_name: &str,
        operation: &Operation,
        exclude: &[&str],
    ) -> Vec<Argument> {
        let arguments = operation
            .input
            .as_ref()
            .map(|input| self.parse_arguments(operation_name, input, exclude))
            .unwrap_or_default();
        with_kwflag(arguments)
    }

    /// Return type of an operation
    ///
    /// Output structures gain a required `ResponseMetadata` field; operations
    /// without output return `Dict[str, Any]`.
    pub fn parse_return_type(&self, operation: &Operation) -> TypeAnnotation {
        let Some(output) = &operation.output else {
            return TypeAnnotation::dict_str_any();
        };
        let return_type = self.parse_shape(&output.shape, true);
        if let Some(typed_dict) = return_type.as_typed_dict() {
            if !typed_dict.has_field("ResponseMetadata") {
                typed_dict.add_field(
                    "ResponseMetadata",
                    fixed_types::response_metadata(&self.fixed),
                    true,
                );
            }
        }
        return_type
    }

    /// Client method for one operation
    pub fn get_client_method(&self, operation_name: &str) -> Result<Function> {
        let operation = self.get_operation(operation_name)?;
        let arguments = self.parse_keyword_arguments(operation_name, operation, &[]);
        let mut method = Function::method(
            &xform_name(operation_name),
            arguments,
            self.parse_return_type(operation),
        );
        if let Some(documentation) = &operation.documentation {
            method.docstring = clean_documentation(documentation);
        }
        Ok(method)
    }

    /// Client methods for every operation, in declared order
    pub fn get_client_method_map(&self) -> Result<Vec<Function>> {
        self.model
            .operations
            .keys()
            .map(|name| self.get_client_method(name))
            .collect()
    }

    /// `paginate` method of the paginator for `paginator_name`
    ///
    /// Input token and limit fields are dropped and an optional
    /// `PaginationConfig` is appended.
    pub fn get_paginate_method(&self, paginator_name: &str) -> Result<Function> {
        let paginator = self.schema.get_paginator(paginator_name)?;
        let operation = self.get_operation(paginator_name)?;

        let mut exclude = paginator.input_token.names();
        if let Some(limit_key) = &paginator.limit_key {
            exclude.push(limit_key);
        }
        let mut arguments = self.parse_keyword_arguments(paginator_name, operation, &exclude);
        push_keyword_argument(
            &mut arguments,
            Argument::optional(
                "PaginationConfig",
                fixed_types::paginator_config(&self.fixed),
            ),
        );

        Ok(Function::method(
            "paginate",
            arguments,
            TypeAnnotation::iterator(self.parse_return_type(operation)),
        ))
    }

    /// `wait` method of the waiter for `waiter_name`
    pub fn get_wait_method(&self, waiter_name: &str) -> Result<Function> {
        let waiter = self.schema.get_waiter(waiter_name)?;
        let operation = self.get_operation(&waiter.operation)?;
        let mut arguments = self.parse_keyword_arguments(&waiter.operation, operation, &[]);
        push_keyword_argument(
            &mut arguments,
            Argument::optional("WaiterConfig", fixed_types::waiter_config(&self.fixed)),
        );
        Ok(Function::method("wait", arguments, TypeAnnotation::none()))
    }

    /// Annotation for a declared resource, failing for undeclared names
    pub fn resource_type(&self, target: &ResourceTarget) -> Result<TypeAnnotation> {
        self.schema.get_resource(&target.type_name)?;
        let resource = resource_reference(&target.type_name);
        if target.is_list() {
            return Ok(TypeAnnotation::list_of(resource));
        }
        Ok(resource)
    }

    /// Method for a resource or service resource action
    ///
    /// Arguments bound from the parent's identifiers are not exposed. The
    /// operation output, when the operation has one, takes precedence over
    /// the declared resource as return type.
    pub fn parse_action(&self, action_name: &str, action: &Action) -> Result<Function> {
        let mut return_type = match &action.resource {
            Some(target) => Some(self.resource_type(target)?),
            None => None,
        };
        let mut arguments = Vec::new();

        if let Some(request) = &action.request {
            let operation = self.get_operation(&request.operation)?;
            let exclude = request.identifier_targets();
            arguments = self.parse_keyword_arguments(&request.operation, operation, &exclude);
            if operation.output.is_some() || return_type.is_none() {
                return_type = Some(self.parse_return_type(operation));
            }
        }

        Ok(Function::method(
            &xform_name(action_name),
            arguments,
            return_type.unwrap_or_else(TypeAnnotation::none),
        ))
    }

    /// Method for the action named `action_name` of `owner`
    pub fn get_resource_action_method(
        &self,
        owner: &ResourceModel,
        action_name: &str,
    ) -> Result<Function> {
        let action = owner.get_action(&self.schema.service_name, action_name)?;
        self.parse_action(action_name, action)
    }

    /// Batch action exposed on a collection
    ///
    /// Returns one response per batch, so the return type is a list.
    pub fn parse_batch_action(&self, action_name: &str, action: &Action) -> Result<Function> {
        let request = action.request.as_ref().ok_or_else(|| {
            GeneratorError::Parse(format!(
                "Batch action {} of {} schema has no request",
                action_name, self.schema.service_name
            ))
        })?;
        let operation = self.get_operation(&request.operation)?;
        let exclude = request.identifier_targets();
        Ok(Function::method(
            &xform_name(action_name),
            self.parse_keyword_arguments(&request.operation, operation, &exclude),
            TypeAnnotation::list_of(self.parse_return_type(operation)),
        ))
    }

    /// Getter returning a related resource, with `str` identifier arguments
    pub fn parse_sub_resource_getter(
        &self,
        relation_name: &str,
        target: &ResourceTarget,
    ) -> Result<Function> {
        let arguments = target
            .identifiers
            .iter()
            .filter(|param| param.source == ParamSource::Input)
            .map(|param| Argument::new(&xform_name(&param.target), TypeAnnotation::str()))
            .collect();
        Ok(Function::method(
            relation_name,
            arguments,
            self.resource_type(target)?,
        ))
    }

    /// `filter` method of a collection
    pub fn get_collection_filter_method(
        &self,
        relation: &Action,
        self_type: &TypeAnnotation,
    ) -> Result<Function> {
        let arguments = match &relation.request {
            Some(request) => {
                let operation = self.get_operation(&request.operation)?;
                let exclude = request.identifier_targets();
                self.parse_keyword_arguments(&request.operation, operation, &exclude)
            }
            None => Vec::new(),
        };
        Ok(Function::method("filter", arguments, self_type.clone()))
    }

    /// `wait_until_*` method of a resource
    pub fn get_resource_wait_method(
        &self,
        name: &str,
        resource_waiter: &ResourceWaiter,
    ) -> Result<Function> {
        let waiter = self.schema.get_waiter(&resource_waiter.waiter_name)?;
        let operation = self.get_operation(&waiter.operation)?;
        let exclude: Vec<&str> = resource_waiter
            .params
            .iter()
            .map(|param| param.target.as_str())
            .collect();
        let mut arguments = self.parse_keyword_arguments(&waiter.operation, operation, &exclude);
        push_keyword_argument(
            &mut arguments,
            Argument::optional("WaiterConfig", fixed_types::waiter_config(&self.fixed)),
        );
        Ok(Function::method(
            &format!("wait_until_{}", xform_name(name)),
            arguments,
            TypeAnnotation::none(),
        ))
    }

    /// Identifier and shape-member attributes of a resource
    pub fn get_resource_attributes(&self, resource: &ResourceModel) -> Vec<Attribute> {
        let mut attributes: Vec<Attribute> = resource
            .identifiers
            .iter()
            .map(|identifier| Attribute::new(&xform_name(&identifier.name), TypeAnnotation::str()))
            .collect();

        let Some(shape) = resource
            .shape
            .as_ref()
            .and_then(|name| self.model.shapes.get(name))
        else {
            return attributes;
        };
        for (member_name, member) in &shape.members {
            let name = xform_name(member_name);
            if attributes.iter().any(|attribute| attribute.name == name) {
                continue;
            }
            let member_type = self.parse_member(Some(member), true, TypeAnnotation::any);
            attributes.push(Attribute::new(&name, member_type));
        }
        attributes
    }
}

/// Prefix non-empty keyword arguments with the `*` marker
fn with_kwflag(arguments: Vec<Argument>) -> Vec<Argument> {
    if arguments.is_empty() {
        return arguments;
    }
    let mut all = Vec::with_capacity(arguments.len() + 1);
    all.push(Argument::kwflag());
    all.extend(arguments);
    all
}

fn push_keyword_argument(arguments: &mut Vec<Argument>, argument: Argument) {
    if arguments.is_empty() {
        arguments.push(Argument::kwflag());
    }
    arguments.push(argument);
}

/// Strip markup from model documentation and collapse whitespace
pub fn clean_documentation(documentation: &str) -> String {
    crate::docstring::strip_html(documentation)
}
