//! TypedDicts that are not derived from the service model
//!
//! They live in their own [`TypeDefCache`], apart from the shape-derived
//! TypedDicts, and their names are reserved.

use crate::type_def_cache::TypeDefCache;
use sdk_stubgen_common::type_annotations::{TypeAnnotation, TypedDict, TypedDictField};

const PAGINATOR_CONFIG: &str = "PaginatorConfigTypeDef";
const WAITER_CONFIG: &str = "WaiterConfigTypeDef";
const RESPONSE_METADATA: &str = "ResponseMetadataTypeDef";
const COPY_SOURCE: &str = "CopySourceTypeDef";

/// Names shape-derived TypedDicts must not take
pub const FIXED_TYPE_NAMES: &[&str] = &[
    PAGINATOR_CONFIG,
    WAITER_CONFIG,
    RESPONSE_METADATA,
    COPY_SOURCE,
];

pub fn is_fixed_name(name: &str) -> bool {
    FIXED_TYPE_NAMES.contains(&name)
}

fn field(name: &str, type_annotation: TypeAnnotation, required: bool) -> TypedDictField {
    TypedDictField {
        name: name.to_string(),
        type_annotation,
        required,
    }
}

fn fixed(cache: &TypeDefCache, name: &str, fields: Vec<TypedDictField>) -> TypeAnnotation {
    let shared = cache.get_or_insert_with(name, || TypedDict {
        name: name.to_string(),
        fields,
        docstring: None,
    });
    TypeAnnotation::TypedDict(shared)
}

/// `PaginationConfig` argument of every `paginate` method
pub fn paginator_config(cache: &TypeDefCache) -> TypeAnnotation {
    fixed(
        cache,
        PAGINATOR_CONFIG,
        vec![
            field("MaxItems", TypeAnnotation::int(), false),
            field("PageSize", TypeAnnotation::int(), false),
            field("StartingToken", TypeAnnotation::str(), false),
        ],
    )
}

/// `WaiterConfig` argument of every `wait` method
pub fn waiter_config(cache: &TypeDefCache) -> TypeAnnotation {
    fixed(
        cache,
        WAITER_CONFIG,
        vec![
            field("Delay", TypeAnnotation::int(), false),
            field("MaxAttempts", TypeAnnotation::int(), false),
        ],
    )
}

/// `ResponseMetadata` field added to operation outputs
pub fn response_metadata(cache: &TypeDefCache) -> TypeAnnotation {
    fixed(
        cache,
        RESPONSE_METADATA,
        vec![
            field("RequestId", TypeAnnotation::str(), true),
            field("HostId", TypeAnnotation::str(), true),
            field("HTTPStatusCode", TypeAnnotation::int(), true),
            field("HTTPHeaders", TypeAnnotation::dict_of(TypeAnnotation::str(), TypeAnnotation::str()), true),
            field("RetryAttempts", TypeAnnotation::int(), true),
        ],
    )
}

/// Structured `CopySource` argument of S3 copy operations
pub fn copy_source(cache: &TypeDefCache) -> TypeAnnotation {
    fixed(
        cache,
        COPY_SOURCE,
        vec![
            field("Bucket", TypeAnnotation::str(), true),
            field("Key", TypeAnnotation::str(), true),
            field("VersionId", TypeAnnotation::str(), false),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_types_are_shared() {
        let cache = TypeDefCache::new();
        let a = paginator_config(&cache);
        let b = paginator_config(&cache);
        assert!(a.is_same_instance(&b));
        assert_eq!(a.render(), "PaginatorConfigTypeDef");
    }

    #[test]
    fn test_reserved_names() {
        assert!(is_fixed_name("WaiterConfigTypeDef"));
        assert!(is_fixed_name("CopySourceTypeDef"));
        assert!(!is_fixed_name("WaiterConfig"));
        assert!(!is_fixed_name("BucketTypeDef"));
    }

    #[test]
    fn test_config_fields_are_optional() {
        let cache = TypeDefCache::new();
        for config in [paginator_config(&cache), waiter_config(&cache)] {
            let typed_dict = config.as_typed_dict().unwrap().snapshot();
            assert!(typed_dict.fields.iter().all(|field| !field.required));
        }
    }
}
