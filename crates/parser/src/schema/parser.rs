//! Schema bundle file parser

use super::types::ServiceSchema;
use sdk_stubgen_common::{GeneratorError, Result};
use std::fs;
use std::path::Path;

/// Schema bundle parser
///
/// Reads a service bundle from disk or from a JSON string
pub struct SchemaParser {
    schema: ServiceSchema,
}

impl SchemaParser {
    /// Load a bundle from a file path
    ///
    /// # Example
    /// ```rust,ignore
    /// let parser = SchemaParser::from_file("schemas/s3.json")?;
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            GeneratorError::Parse(format!(
                "Failed to read schema file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        Self::from_json(&content)
    }

    /// Parse a bundle from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let schema: ServiceSchema = serde_json::from_str(json)
            .map_err(|e| GeneratorError::Parse(format!("Failed to parse schema JSON: {}", e)))?;

        if schema.service_name.is_empty() {
            return Err(GeneratorError::Parse(
                "Schema bundle has an empty service_name".to_string(),
            ));
        }

        Ok(Self { schema })
    }

    /// Validated schema
    ///
    /// Every member reference must name a declared shape and every
    /// operation, paginator and waiter reference must resolve.
    pub fn parse(self) -> Result<ServiceSchema> {
        self.validate()?;
        Ok(self.schema)
    }

    pub fn schema(&self) -> &ServiceSchema {
        &self.schema
    }

    fn validate(&self) -> Result<()> {
        let schema = &self.schema;
        for operation in schema.model.operations.values() {
            for shape_ref in operation.input.iter().chain(operation.output.iter()) {
                schema.get_shape(&shape_ref.shape)?;
            }
        }
        for name in schema.paginators.keys() {
            schema.get_operation(name)?;
        }
        for waiter in schema.waiters.values() {
            schema.get_operation(&waiter.operation)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::InputToken;

    #[test]
    fn test_parse_minimal_bundle() {
        let json = r#"{
            "service_name": "example",
            "class_name": "Example",
            "model": {
                "operations": {
                    "GetThing": { "input": { "shape": "GetThingRequest" } }
                },
                "shapes": {
                    "GetThingRequest": {
                        "type": "structure",
                        "members": {
                            "Zeta": { "shape": "String" },
                            "Alpha": { "shape": "String" }
                        },
                        "required": ["Zeta"]
                    },
                    "String": { "type": "string" }
                }
            },
            "paginators": {
                "GetThing": { "input_token": ["A", "B"] }
            }
        }"#;

        let schema = SchemaParser::from_json(json).unwrap().parse().unwrap();
        assert_eq!(schema.service_name, "example");

        let shape = schema.get_shape("GetThingRequest").unwrap();
        let members: Vec<&String> = shape.members.keys().collect();
        assert_eq!(members, vec!["Zeta", "Alpha"]);
        assert!(shape.is_required("Zeta"));
        assert!(!shape.is_required("Alpha"));

        let paginator = schema.get_paginator("GetThing").unwrap();
        assert_eq!(
            paginator.input_token,
            InputToken::Multiple(vec!["A".to_string(), "B".to_string()])
        );
    }

    #[test]
    fn test_dangling_reference_is_rejected() {
        let json = r#"{
            "service_name": "example",
            "class_name": "Example",
            "model": {
                "operations": { "GetThing": { "output": { "shape": "Missing" } } }
            }
        }"#;

        let err = SchemaParser::from_json(json).unwrap().parse().unwrap_err();
        assert_eq!(err.to_string(), "Shape 'Missing' not found in example schema");
    }

    #[test]
    fn test_invalid_json() {
        let result = SchemaParser::from_json("{ not json");
        assert!(matches!(result, Err(GeneratorError::Parse(_))));
    }

    #[test]
    fn test_lookup_failures() {
        let json = r#"{
            "service_name": "example",
            "class_name": "Example",
            "model": {}
        }"#;
        let schema = SchemaParser::from_json(json).unwrap().parse().unwrap();
        assert!(matches!(
            schema.get_paginator("ListThings"),
            Err(GeneratorError::SchemaLookup { .. })
        ));
        assert!(schema.get_resource("Thing").is_err());
        assert!(schema.resource_names().is_empty());
    }
}
