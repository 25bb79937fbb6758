//! Integration tests for shape translation

use sdk_stubgen_common::type_annotations::TypeAnnotation;
use sdk_stubgen_common::{GeneratorError, LookupKind};
use sdk_stubgen_parser::{SchemaParser, ServiceSchema, ShapeParser};

fn widget_schema() -> ServiceSchema {
    let json = r#"{
        "service_name": "widgets",
        "class_name": "Widgets",
        "model": {
            "operations": {
                "PutWidget": {
                    "input": { "shape": "WidgetRequest" },
                    "output": { "shape": "Empty" }
                },
                "ListWidgets": {
                    "input": { "shape": "ListWidgetsRequest" },
                    "output": { "shape": "ListWidgetsResponse" }
                }
            },
            "shapes": {
                "WidgetRequest": {
                    "type": "structure",
                    "members": {
                        "Id": { "shape": "String" },
                        "Count": { "shape": "Integer" }
                    },
                    "required": ["Id"]
                },
                "ListWidgetsRequest": {
                    "type": "structure",
                    "members": {
                        "Filter": { "shape": "WidgetRequest" },
                        "Status": { "shape": "Status" },
                        "NextToken": { "shape": "String" },
                        "Region": { "shape": "String" }
                    },
                    "required": ["Region"]
                },
                "ListWidgetsResponse": {
                    "type": "structure",
                    "members": {
                        "Widgets": { "shape": "WidgetList" }
                    }
                },
                "WidgetList": { "type": "list", "member": { "shape": "WidgetRequest" } },
                "Empty": { "type": "structure" },
                "Status": { "type": "string", "enum": ["A", "B"] },
                "String": { "type": "string" },
                "Integer": { "type": "integer" }
            }
        },
        "paginators": {
            "ListWidgets": { "input_token": "NextToken" }
        }
    }"#;

    SchemaParser::from_json(json).unwrap().parse().unwrap()
}

#[test]
fn test_structure_becomes_typed_dict() {
    let schema = widget_schema();
    let parser = ShapeParser::new(&schema);

    let widget = parser.parse_shape("WidgetRequest", false);
    let typed_dict = widget.as_typed_dict().unwrap().snapshot();

    assert_eq!(typed_dict.name, "WidgetRequestTypeDef");
    assert_eq!(typed_dict.fields.len(), 2);
    assert_eq!(typed_dict.fields[0].name, "Id");
    assert_eq!(typed_dict.fields[0].type_annotation, TypeAnnotation::str());
    assert!(typed_dict.fields[0].required);
    assert_eq!(typed_dict.fields[1].name, "Count");
    assert_eq!(typed_dict.fields[1].type_annotation, TypeAnnotation::int());
    assert!(!typed_dict.fields[1].required);
}

#[test]
fn test_same_name_is_same_instance() {
    let schema = widget_schema();
    let parser = ShapeParser::new(&schema);

    let first = parser.parse_shape("WidgetRequest", false);
    let second = parser.parse_shape("WidgetRequest", false);
    assert!(first.is_same_instance(&second));

    // reached through a list and a nested member
    let list = parser.parse_shape("WidgetList", true);
    let item = &list.as_subscript().unwrap().children[0];
    assert!(item.is_same_instance(&first));

    // a second session has its own cache
    let other = ShapeParser::new(&schema);
    let foreign = other.parse_shape("WidgetRequest", false);
    assert_eq!(foreign, first);
    assert!(!foreign.is_same_instance(&first));
}

#[test]
fn test_empty_structure_is_plain_mapping() {
    let schema = widget_schema();
    let parser = ShapeParser::new(&schema);

    let empty = parser.parse_shape("Empty", true);
    assert!(empty.as_typed_dict().is_none());
    assert_eq!(empty.render(), "Dict[str, Any]");
    assert!(parser.cache().is_empty());
}

#[test]
fn test_enum_and_plain_string() {
    let schema = widget_schema();
    let parser = ShapeParser::new(&schema);

    assert_eq!(parser.parse_shape("Status", false).render(), "Literal[\"A\", \"B\"]");
    assert_eq!(parser.parse_shape("String", false).render(), "str");
}

#[test]
fn test_arguments_are_stable_partition() {
    let schema = widget_schema();
    let parser = ShapeParser::new(&schema);
    let input = schema.get_operation("ListWidgets").unwrap().input.clone().unwrap();

    let arguments = parser.parse_arguments("ListWidgets", &input, &[]);
    let names: Vec<&str> = arguments.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["Region", "Filter", "Status", "NextToken"]);
    assert!(arguments[0].required());
    assert!(arguments[1..].iter().all(|a| a.default.as_deref() == Some("None")));
}

#[test]
fn test_paginate_drops_input_token() {
    let schema = widget_schema();
    let parser = ShapeParser::new(&schema);

    let paginate = parser.get_paginate_method("ListWidgets").unwrap();
    assert_eq!(
        paginate.render_signature(),
        "def paginate(self, *, Region: str, Filter: WidgetRequestTypeDef = None, \
         Status: Literal[\"A\", \"B\"] = None, \
         PaginationConfig: PaginatorConfigTypeDef = None) -> Iterator[ListWidgetsResponseTypeDef]"
    );
}

#[test]
fn test_unknown_paginator_is_fatal() {
    let schema = widget_schema();
    let parser = ShapeParser::new(&schema);

    match parser.get_paginate_method("DescribeWidgets") {
        Err(GeneratorError::SchemaLookup { service, kind, name }) => {
            assert_eq!(service, "widgets");
            assert_eq!(kind, LookupKind::Paginator);
            assert_eq!(name, "DescribeWidgets");
        }
        other => panic!("expected lookup error, got {:?}", other.map(|f| f.name)),
    }
    assert!(parser.get_wait_method("WidgetExists").is_err());
}

#[test]
fn test_shape_named_like_fixed_type_is_renamed() {
    let json = r#"{
        "service_name": "things",
        "class_name": "Things",
        "model": {
            "operations": {
                "ListThings": { "input": { "shape": "ListThingsRequest" } }
            },
            "shapes": {
                "ListThingsRequest": {
                    "type": "structure",
                    "members": {
                        "Config": { "shape": "PaginatorConfig" },
                        "NextToken": { "shape": "String" }
                    }
                },
                "PaginatorConfig": {
                    "type": "structure",
                    "members": { "Foo": { "shape": "String" } }
                },
                "String": { "type": "string" }
            }
        },
        "paginators": {
            "ListThings": { "input_token": "NextToken" }
        }
    }"#;
    let schema = SchemaParser::from_json(json).unwrap().parse().unwrap();
    let parser = ShapeParser::new(&schema);

    let client_method = parser.get_client_method("ListThings").unwrap();
    let config = client_method.argument("Config").unwrap();
    assert_eq!(
        config.type_annotation.as_ref().unwrap().render(),
        "PaginatorConfigShapeTypeDef"
    );

    let paginate = parser.get_paginate_method("ListThings").unwrap();
    let pagination_config = paginate
        .argument("PaginationConfig")
        .and_then(|argument| argument.type_annotation.as_ref())
        .and_then(TypeAnnotation::as_typed_dict)
        .unwrap()
        .snapshot();
    let names: Vec<&str> = pagination_config
        .fields
        .iter()
        .map(|field| field.name.as_str())
        .collect();
    assert_eq!(pagination_config.name, "PaginatorConfigTypeDef");
    assert_eq!(names, vec!["MaxItems", "PageSize", "StartingToken"]);
}
