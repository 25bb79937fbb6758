//! Service-specific corrections to raw service models
//!
//! Patches are a declarative table applied to a copy of the model before any
//! shape is translated. Only the listed `(service, operation)` pairs are
//! touched, and applying the table twice gives the same model as applying it
//! once.

use crate::schema::{ServiceModel, Shape};
use tracing::debug;

/// Which shape of an operation a patch edits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchTarget {
    Input,
    Output,
}

/// Structural edit of one structure shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeEdit {
    RenameMember {
        old: &'static str,
        new: &'static str,
    },
    RemoveMember {
        name: &'static str,
    },
}

/// One entry of the patch table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapePatch {
    pub service: &'static str,
    pub operation: &'static str,
    pub target: PatchTarget,
    pub edit: ShapeEdit,
}

const fn remove_input(service: &'static str, operation: &'static str, name: &'static str) -> ShapePatch {
    ShapePatch {
        service,
        operation,
        target: PatchTarget::Input,
        edit: ShapeEdit::RemoveMember { name },
    }
}

const fn rename(
    service: &'static str,
    operation: &'static str,
    target: PatchTarget,
    old: &'static str,
    new: &'static str,
) -> ShapePatch {
    ShapePatch {
        service,
        operation,
        target,
        edit: ShapeEdit::RenameMember { old, new },
    }
}

/// Patches shipped with the generator
pub const SHAPE_PATCHES: &[ShapePatch] = &[
    // checksum is computed by the client
    remove_input("s3", "PutBucketAcl", "ContentMD5"),
    remove_input("s3", "PutBucketCors", "ContentMD5"),
    remove_input("s3", "PutBucketLifecycle", "ContentMD5"),
    remove_input("s3", "PutBucketLogging", "ContentMD5"),
    remove_input("s3", "PutBucketNotification", "ContentMD5"),
    remove_input("s3", "PutBucketPolicy", "ContentMD5"),
    remove_input("s3", "PutBucketReplication", "ContentMD5"),
    remove_input("s3", "PutBucketRequestPayment", "ContentMD5"),
    remove_input("s3", "PutBucketTagging", "ContentMD5"),
    remove_input("s3", "PutBucketVersioning", "ContentMD5"),
    remove_input("s3", "PutBucketWebsite", "ContentMD5"),
    remove_input("s3", "PutObjectAcl", "ContentMD5"),
    // raw header value, the parsed datetime is returned separately
    rename("s3", "GetObject", PatchTarget::Output, "Expires", "ExpiresString"),
    rename("s3", "HeadObject", PatchTarget::Output, "Expires", "ExpiresString"),
    // `return` is a keyword
    rename("cloudsearchdomain", "Search", PatchTarget::Input, "return", "return_"),
];

/// Apply [`SHAPE_PATCHES`] for `service` to a copy of `model`
pub fn apply_patches(service: &str, model: &ServiceModel) -> ServiceModel {
    apply_patch_table(service, model, SHAPE_PATCHES)
}

/// Apply the entries of `patches` that belong to `service`
pub fn apply_patch_table(service: &str, model: &ServiceModel, patches: &[ShapePatch]) -> ServiceModel {
    let mut patched = model.clone();
    for patch in patches.iter().filter(|patch| patch.service == service) {
        let Some(operation) = patched.operations.get(patch.operation) else {
            continue;
        };
        let shape_ref = match patch.target {
            PatchTarget::Input => operation.input.as_ref(),
            PatchTarget::Output => operation.output.as_ref(),
        };
        let Some(shape_name) = shape_ref.map(|shape_ref| shape_ref.shape.clone()) else {
            continue;
        };
        let Some(shape) = patched.shapes.get_mut(&shape_name) else {
            continue;
        };
        if apply_edit(shape, patch.edit) {
            debug!(
                "Patched {} {} shape {}: {:?}",
                service, patch.operation, shape_name, patch.edit
            );
        }
    }
    patched
}

/// Returns whether the shape changed
fn apply_edit(shape: &mut Shape, edit: ShapeEdit) -> bool {
    match edit {
        ShapeEdit::RemoveMember { name } => {
            if shape.members.shift_remove(name).is_none() {
                return false;
            }
            shape.required.retain(|member| member != name);
            true
        }
        ShapeEdit::RenameMember { old, new } => {
            if shape.members.contains_key(new) {
                return false;
            }
            let Some(index) = shape.members.get_index_of(old) else {
                return false;
            };
            let Some(member) = shape.members.shift_remove(old) else {
                return false;
            };
            shape.members.shift_insert(index, new.to_string(), member);
            for required in shape.required.iter_mut().filter(|member| member.as_str() == old) {
                *required = new.to_string();
            }
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{Operation, ShapeRef};

    fn model_with_acl() -> ServiceModel {
        let mut model = ServiceModel::default();
        model.operations.insert(
            "PutBucketAcl".to_string(),
            Operation {
                input: Some(ShapeRef::new("PutBucketAclRequest")),
                ..Default::default()
            },
        );
        let mut shape = Shape {
            type_name: "structure".to_string(),
            ..Default::default()
        };
        for member in ["Bucket", "ContentMD5", "ACL"] {
            shape
                .members
                .insert(member.to_string(), ShapeRef::new("String"));
        }
        shape.required = vec!["Bucket".to_string(), "ContentMD5".to_string()];
        model
            .shapes
            .insert("PutBucketAclRequest".to_string(), shape);
        model
    }

    fn member_names(model: &ServiceModel, shape: &str) -> Vec<String> {
        model.shapes[shape].members.keys().cloned().collect()
    }

    #[test]
    fn test_remove_member_for_listed_service_only() {
        let model = model_with_acl();

        let patched = apply_patches("s3", &model);
        assert_eq!(member_names(&patched, "PutBucketAclRequest"), vec!["Bucket", "ACL"]);
        assert_eq!(patched.shapes["PutBucketAclRequest"].required, vec!["Bucket"]);

        let untouched = apply_patches("s3control", &model);
        assert_eq!(untouched, model);
        // source model is never mutated
        assert_eq!(
            member_names(&model, "PutBucketAclRequest"),
            vec!["Bucket", "ContentMD5", "ACL"]
        );
    }

    #[test]
    fn test_patches_are_idempotent() {
        let once = apply_patches("s3", &model_with_acl());
        let twice = apply_patches("s3", &once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_rename_keeps_position_and_required() {
        let table = [rename(
            "s3",
            "PutBucketAcl",
            PatchTarget::Input,
            "ContentMD5",
            "Checksum",
        )];
        let patched = apply_patch_table("s3", &model_with_acl(), &table);
        assert_eq!(
            member_names(&patched, "PutBucketAclRequest"),
            vec!["Bucket", "Checksum", "ACL"]
        );
        assert_eq!(
            patched.shapes["PutBucketAclRequest"].required,
            vec!["Bucket", "Checksum"]
        );

        let again = apply_patch_table("s3", &patched, &table);
        assert_eq!(again, patched);
    }

    #[test]
    fn test_rename_skipped_when_target_exists() {
        let table = [rename("s3", "PutBucketAcl", PatchTarget::Input, "ContentMD5", "ACL")];
        let model = model_with_acl();
        assert_eq!(apply_patch_table("s3", &model, &table), model);
    }

    #[test]
    fn test_missing_operation_is_ignored() {
        let model = ServiceModel::default();
        assert_eq!(apply_patches("s3", &model), model);
    }
}
