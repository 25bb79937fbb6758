//! Manual argument type overrides
//!
//! Consulted before shape-driven translation for the listed
//! `(service, operation, argument)` triples.

use crate::fixed_types;
use crate::type_def_cache::TypeDefCache;
use sdk_stubgen_common::type_annotations::TypeAnnotation;

/// Kind of replacement type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Override {
    /// `Union[str, CopySourceTypeDef]`
    CopySource,
    /// `Union[bytes, IO[bytes], StreamingBody]` for string-modelled bodies
    Body,
}

const ARGUMENT_OVERRIDES: &[(&str, &str, &str, Override)] = &[
    ("s3", "CopyObject", "CopySource", Override::CopySource),
    ("s3", "UploadPartCopy", "CopySource", Override::CopySource),
    ("glacier", "UploadArchive", "body", Override::Body),
    ("glacier", "UploadMultipartPart", "body", Override::Body),
];

/// Replacement type for an input argument, if one is listed
pub fn get_argument_override(
    service: &str,
    operation: &str,
    argument: &str,
    cache: &TypeDefCache,
) -> Option<TypeAnnotation> {
    let (_, _, _, kind) = ARGUMENT_OVERRIDES
        .iter()
        .find(|(s, o, a, _)| *s == service && *o == operation && *a == argument)?;
    let type_annotation = match kind {
        Override::CopySource => TypeAnnotation::union(vec![
            TypeAnnotation::str(),
            fixed_types::copy_source(cache),
        ]),
        Override::Body => crate::shape_parser::blob_input_type(),
    };
    Some(type_annotation)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_source_override() {
        let cache = TypeDefCache::new();
        let ty = get_argument_override("s3", "CopyObject", "CopySource", &cache).unwrap();
        assert_eq!(ty.render(), "Union[str, CopySourceTypeDef]");
        assert!(get_argument_override("s3", "CopyObject", "Bucket", &cache).is_none());
        assert!(get_argument_override("s3control", "CopyObject", "CopySource", &cache).is_none());
    }
}
