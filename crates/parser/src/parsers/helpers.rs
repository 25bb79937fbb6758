//! Runtime helper functions (`get_client`, `get_resource`)

use sdk_stubgen_common::structures::{Argument, Function, SERVICE_RESOURCE_MODULE};
use sdk_stubgen_common::type_annotations::{Generic, InternalImport, TypeAnnotation};
use sdk_stubgen_common::ServiceName;

/// Keyword arguments forwarded to the SDK factory, with their value types
fn forwarded_arguments() -> Vec<(&'static str, TypeAnnotation)> {
    vec![
        ("region_name", TypeAnnotation::str()),
        ("api_version", TypeAnnotation::str()),
        ("use_ssl", TypeAnnotation::bool()),
        (
            "verify",
            TypeAnnotation::union(vec![TypeAnnotation::bool(), TypeAnnotation::str()]),
        ),
        ("endpoint_url", TypeAnnotation::str()),
        ("aws_access_key_id", TypeAnnotation::str()),
        ("aws_secret_access_key", TypeAnnotation::str()),
        ("aws_session_token", TypeAnnotation::str()),
        (
            "config",
            TypeAnnotation::external("botocore.config", "Config"),
        ),
    ]
}

fn optional(type_annotation: TypeAnnotation) -> TypeAnnotation {
    TypeAnnotation::subscript(Generic::Optional, vec![type_annotation])
}

/// Body that collects the set keyword arguments, then delegates to the
/// session (when given) or to the module-level factory
fn build_body(factory: &str, service: &str, forwarded: &[(&str, TypeAnnotation)]) -> String {
    let mut lines = vec!["kwargs = {}".to_string()];
    for (name, _) in forwarded {
        lines.push(format!("if {} is not None:", name));
        lines.push(format!("    kwargs[\"{}\"] = {}", name, name));
    }
    lines.push("if session is not None:".to_string());
    lines.push(format!(
        "    return session.{}(\"{}\", **kwargs)",
        factory, service
    ));
    lines.push(format!("return boto3.{}(\"{}\", **kwargs)", factory, service));
    lines.join("\n")
}

fn build_helper(
    name: &str,
    factory: &str,
    service_name: &ServiceName,
    return_type: TypeAnnotation,
) -> Function {
    let forwarded = forwarded_arguments();
    let mut arguments = vec![Argument::optional(
        "session",
        optional(TypeAnnotation::external("boto3.session", "Session")),
    )];
    arguments.extend(
        forwarded
            .iter()
            .map(|(argument, type_annotation)| Argument::optional(argument, optional(type_annotation.clone()))),
    );

    Function::new(name, arguments, return_type)
        .with_docstring(&format!(
            "Create {} {} with optional session and settings.",
            service_name.class_name, factory
        ))
        .with_body(&build_body(factory, &service_name.name, &forwarded))
}

/// Helper function descriptors for a service
///
/// `get_resource` exists only for services with a service resource.
pub fn parse_helpers(service_name: &ServiceName, has_service_resource: bool) -> Vec<Function> {
    let mut helpers = vec![build_helper(
        "get_client",
        "client",
        service_name,
        TypeAnnotation::Internal(InternalImport::from_module(
            &service_name.client_name(),
            "client",
        )),
    )];
    if has_service_resource {
        helpers.push(build_helper(
            "get_resource",
            "resource",
            service_name,
            TypeAnnotation::Internal(InternalImport::from_module(
                &service_name.service_resource_name(),
                SERVICE_RESOURCE_MODULE,
            )),
        ));
    }
    helpers
}
