//! Integration tests for service package parsing against an S3-like bundle

use sdk_stubgen_common::structures::{Function, ServicePackage, TypeSource};
use sdk_stubgen_common::{GeneratorError, LookupKind};
use sdk_stubgen_parser::parsers::parse_collection;
use sdk_stubgen_parser::{SchemaParser, ServicePackageParser, ServiceSchema, ShapeParser};
use std::path::PathBuf;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/s3_schema.json")
}

fn s3_schema() -> ServiceSchema {
    SchemaParser::from_file(fixture_path()).unwrap().parse().unwrap()
}

fn s3_package() -> ServicePackage {
    ServicePackageParser::new(&s3_schema()).parse().unwrap()
}

fn signature(methods: &[Function], name: &str) -> String {
    methods
        .iter()
        .find(|method| method.name == name)
        .unwrap_or_else(|| panic!("method {} not found", name))
        .render_signature()
}

const ACL: &str = "Literal[\"private\", \"public-read\"]";

#[test]
fn test_client_methods() {
    let package = s3_package();
    let methods = &package.client.class.methods;

    assert_eq!(package.client.name(), "S3Client");
    assert_eq!(
        signature(methods, "list_buckets"),
        "def list_buckets(self) -> ListBucketsOutputTypeDef"
    );
    assert_eq!(
        signature(methods, "create_bucket"),
        format!(
            "def create_bucket(self, *, Bucket: str, ACL: {} = None) -> CreateBucketOutputTypeDef",
            ACL
        )
    );
    assert_eq!(
        signature(methods, "delete_bucket"),
        "def delete_bucket(self, *, Bucket: str) -> Dict[str, Any]"
    );
    assert_eq!(
        signature(methods, "copy_object"),
        "def copy_object(self, *, Bucket: str, CopySource: Union[str, CopySourceTypeDef], Key: str) -> CopyObjectOutputTypeDef"
    );
    assert_eq!(
        signature(methods, "can_paginate"),
        "def can_paginate(self, operation_name: str) -> bool"
    );
    assert_eq!(signature(methods, "close"), "def close(self) -> None");

    let get_paginator = methods.iter().find(|m| m.name == "get_paginator").unwrap();
    assert_eq!(get_paginator.render_decorators(), vec!["@overload"]);
    assert_eq!(
        get_paginator.render_signature(),
        "def get_paginator(self, operation_name: Literal[\"list_objects_v2\"]) -> ListObjectsV2Paginator"
    );
    assert_eq!(
        signature(methods, "get_waiter"),
        "def get_waiter(self, operation_name: Literal[\"bucket_exists\"]) -> BucketExistsWaiter"
    );
}

#[test]
fn test_client_documentation() {
    let package = s3_package();
    let methods = &package.client.class.methods;
    let doc = |name: &str| {
        methods
            .iter()
            .find(|m| m.name == name)
            .map(|m| m.docstring.clone())
            .unwrap()
    };

    assert_eq!(doc("list_buckets"), "Returns a list of all buckets owned by the sender.");
    assert_eq!(doc("create_bucket"), "Creates a new S3 bucket.");
}

#[test]
fn test_checksum_patch_is_service_specific() {
    let package = s3_package();
    assert_eq!(
        signature(&package.client.class.methods, "put_bucket_acl"),
        format!("def put_bucket_acl(self, *, Bucket: str, ACL: {} = None) -> Dict[str, Any]", ACL)
    );

    let mut other = s3_schema();
    other.service_name = "s3control".to_string();
    let package = ServicePackageParser::new(&other).parse().unwrap();
    assert_eq!(
        signature(&package.client.class.methods, "put_bucket_acl"),
        format!(
            "def put_bucket_acl(self, *, Bucket: str, ACL: {} = None, ContentMD5: str = None) -> Dict[str, Any]",
            ACL
        )
    );
}

#[test]
fn test_output_member_rename() {
    let package = s3_package();
    let get_object = package
        .client
        .class
        .get_method("get_object")
        .unwrap();
    let output = get_object.return_type.as_typed_dict().unwrap();

    assert!(output.has_field("ExpiresString"));
    assert!(!output.has_field("Expires"));
    let names: Vec<String> = output.fields().into_iter().map(|f| f.name).collect();
    assert_eq!(
        names,
        vec!["Body", "ContentLength", "ExpiresString", "ResponseMetadata"]
    );
    assert_eq!(
        output.get_field("Body").unwrap().type_annotation.render(),
        "StreamingBody"
    );
}

#[test]
fn test_paginator_and_waiter() {
    let package = s3_package();

    let paginator = package.get_paginator("ListObjectsV2").unwrap();
    assert_eq!(paginator.name(), "ListObjectsV2Paginator");
    let paginate = paginator.class.get_method("paginate").unwrap();
    assert_eq!(
        paginate.render_signature(),
        "def paginate(self, *, Bucket: str, MaxKeys: int = None, \
         PaginationConfig: PaginatorConfigTypeDef = None) -> Iterator[ListObjectsV2OutputTypeDef]"
    );

    // the page type is the client's return type instance
    let client_return = &package
        .client
        .class
        .get_method("list_objects_v2")
        .unwrap()
        .return_type;
    let page = &paginate.return_type.as_subscript().unwrap().children[0];
    assert!(page.is_same_instance(client_return));

    let waiter = package.get_waiter("BucketExists").unwrap();
    assert_eq!(waiter.name(), "BucketExistsWaiter");
    assert_eq!(
        waiter.class.get_method("wait").unwrap().render_signature(),
        "def wait(self, *, Bucket: str, WaiterConfig: WaiterConfigTypeDef = None) -> None"
    );
}

#[test]
fn test_service_resource() {
    let package = s3_package();
    let service_resource = package.service_resource.as_ref().unwrap();
    let methods = &service_resource.class.methods;

    assert_eq!(service_resource.name(), "S3ServiceResource");
    assert_eq!(
        signature(methods, "create_bucket"),
        format!(
            "def create_bucket(self, *, Bucket: str, ACL: {} = None) -> CreateBucketOutputTypeDef",
            ACL
        )
    );
    assert_eq!(signature(methods, "Bucket"), "def Bucket(self, name: str) -> Bucket");
    assert_eq!(
        signature(methods, "get_available_subresources"),
        "def get_available_subresources(self) -> Sequence[str]"
    );

    let buckets = service_resource.class.get_attribute("buckets").unwrap();
    assert_eq!(buckets.render(), "buckets: ServiceResourceBucketsCollection");

    let collection = &service_resource.collections[0];
    assert_eq!(
        signature(&collection.class.methods, "filter"),
        "def filter(self) -> ServiceResourceBucketsCollection"
    );
    assert_eq!(
        signature(&collection.class.methods, "pages"),
        "def pages(self) -> Iterator[List[Bucket]]"
    );
}

#[test]
fn test_bucket_resource() {
    let package = s3_package();
    let service_resource = package.service_resource.as_ref().unwrap();
    let bucket = service_resource.get_sub_resource("Bucket").unwrap();
    let methods = &bucket.class.methods;

    let attributes: Vec<String> = bucket.class.attributes.iter().map(|a| a.render()).collect();
    assert_eq!(
        attributes,
        vec![
            "name: str",
            "creation_date: datetime",
            "meta: ResourceMeta",
            "objects: BucketObjectsCollection",
        ]
    );

    assert_eq!(
        signature(methods, "create"),
        format!("def create(self, *, ACL: {} = None) -> CreateBucketOutputTypeDef", ACL)
    );
    assert_eq!(signature(methods, "delete"), "def delete(self) -> Dict[str, Any]");
    assert_eq!(signature(methods, "Object"), "def Object(self, key: str) -> Object");
    assert_eq!(
        signature(methods, "wait_until_exists"),
        "def wait_until_exists(self, *, WaiterConfig: WaiterConfigTypeDef = None) -> None"
    );
    assert_eq!(
        signature(methods, "upload_file"),
        "def upload_file(self, Filename: str, Key: str, Config: TransferConfig = None) -> None"
    );
    assert!(bucket.class.get_method("load").is_none());

    let objects = &bucket.collections[0];
    assert_eq!(objects.name(), "BucketObjectsCollection");
    assert_eq!(
        signature(&objects.class.methods, "filter"),
        "def filter(self, *, NextToken: str = None, MaxKeys: int = None) -> BucketObjectsCollection"
    );
    assert_eq!(
        signature(&objects.class.methods, "delete"),
        "def delete(self, *, Delete: DeleteTypeDef) -> List[DeleteObjectsOutputTypeDef]"
    );
    assert_eq!(
        signature(&objects.class.methods, "__iter__"),
        "def __iter__(self) -> Iterator[Object]"
    );
}

#[test]
fn test_object_resource_documentation_fallbacks() {
    let package = s3_package();
    let object = package
        .service_resource
        .as_ref()
        .unwrap()
        .get_sub_resource("Object")
        .unwrap();
    let methods = &object.class.methods;

    assert_eq!(signature(methods, "load"), "def load(self) -> None");
    // malformed documentation degrades to a catch-all signature
    assert_eq!(
        signature(methods, "reload"),
        "def reload(self, *args: Any, **kwargs: Any) -> Any"
    );
    assert_eq!(signature(methods, "get"), "def get(self) -> GetObjectOutputTypeDef");
    assert_eq!(
        signature(methods, "copy_from"),
        "def copy_from(self, *, CopySource: Union[str, CopySourceTypeDef]) -> CopyObjectOutputTypeDef"
    );

    let attributes: Vec<String> = object.class.attributes.iter().map(|a| a.render()).collect();
    assert_eq!(
        attributes,
        vec![
            "bucket_name: str",
            "key: str",
            "last_modified: datetime",
            "size: int",
            "meta: ResourceMeta",
        ]
    );
}

#[test]
fn test_type_defs_and_imports() {
    let package = s3_package();
    let names: Vec<String> = package
        .extract_type_defs()
        .into_iter()
        .map(|typed_dict| typed_dict.name)
        .collect();

    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted);
    for expected in [
        "BucketTypeDef",
        "CopySourceTypeDef",
        "DeleteTypeDef",
        "ObjectTypeDef",
        "PaginatorConfigTypeDef",
        "ResponseMetadataTypeDef",
        "WaiterConfigTypeDef",
    ] {
        assert!(names.iter().any(|name| name == expected), "{} missing", expected);
    }

    let client_imports: Vec<String> = package
        .client
        .get_required_import_records()
        .iter()
        .map(|record| record.render())
        .collect();
    assert!(client_imports.contains(&"from .paginator import ListObjectsV2Paginator".to_string()));
    assert!(client_imports.contains(&"from typing import overload".to_string()));
    assert!(client_imports.iter().all(|line| !line.contains("builtins")));
}

#[test]
fn test_helpers() {
    let package = s3_package();
    let names: Vec<&str> = package.helpers.iter().map(|h| h.name.as_str()).collect();
    assert_eq!(names, vec!["get_client", "get_resource"]);
}

#[test]
fn test_undeclared_collection_resource_is_fatal() {
    let json = r#"{
        "service_name": "things",
        "class_name": "Things",
        "model": {
            "operations": { "ListThings": {} }
        },
        "resources": {
            "service": {
                "hasMany": {
                    "Things": {
                        "request": { "operation": "ListThings" },
                        "resource": { "type": "Thing", "path": "Things[]" }
                    }
                }
            },
            "resources": {}
        }
    }"#;
    let schema = SchemaParser::from_json(json).unwrap().parse().unwrap();

    match ServicePackageParser::new(&schema).parse() {
        Err(GeneratorError::SchemaLookup { kind, name, .. }) => {
            assert_eq!(kind, LookupKind::Resource);
            assert_eq!(name, "Thing");
        }
        Err(other) => panic!("unexpected error: {}", other),
        Ok(_) => panic!("expected lookup error"),
    }
}

#[test]
fn test_resource_references_are_imported_into_type_defs() {
    let json = r#"{
        "service_name": "things",
        "class_name": "Things",
        "model": {
            "shapes": {
                "GetThingOutput": {
                    "type": "structure",
                    "members": { "Item": { "shape": "ThingRef" } }
                },
                "ThingRef": { "type": "Thing" }
            },
            "operations": {
                "GetThing": { "output": { "shape": "GetThingOutput" } }
            }
        },
        "resources": {
            "service": {},
            "resources": { "Thing": {} }
        }
    }"#;
    let schema = SchemaParser::from_json(json).unwrap().parse().unwrap();
    let package = ServicePackageParser::new(&schema).parse().unwrap();

    let output = package
        .extract_type_defs()
        .into_iter()
        .find(|typed_dict| typed_dict.name == "GetThingOutputTypeDef")
        .unwrap();
    assert_eq!(output.fields[0].type_annotation.render(), "Thing");

    let imports: Vec<String> = package
        .get_type_defs_import_records()
        .iter()
        .map(|record| record.render())
        .collect();
    assert!(
        imports.contains(&"from .service_resource import Thing".to_string()),
        "{:?}",
        imports
    );
}

#[test]
fn test_resource_action_and_collection_by_name() {
    let schema = s3_schema();
    let parser = ShapeParser::new(&schema);
    let bucket = schema.get_resource("Bucket").unwrap();

    let delete = parser.get_resource_action_method(bucket, "Delete").unwrap();
    assert_eq!(delete.render_signature(), "def delete(self) -> Dict[str, Any]");
    let objects = parse_collection(&parser, "Bucket", bucket, "Objects").unwrap();
    assert_eq!(objects.name(), "BucketObjectsCollection");

    match parser.get_resource_action_method(bucket, "Rename") {
        Err(GeneratorError::SchemaLookup { kind, name, .. }) => {
            assert_eq!(kind, LookupKind::Action);
            assert_eq!(name, "Rename");
        }
        other => panic!("expected lookup error, got {:?}", other.map(|f| f.name)),
    }
    match parse_collection(&parser, "Bucket", bucket, "Versions") {
        Err(GeneratorError::SchemaLookup { kind, name, .. }) => {
            assert_eq!(kind, LookupKind::Collection);
            assert_eq!(name, "Versions");
        }
        Err(other) => panic!("unexpected error: {}", other),
        Ok(_) => panic!("expected lookup error"),
    }
}
