//! Resource collections (`hasMany` relations)

use super::{ClassRecord, TypeSource};
use crate::type_annotations::TypeAnnotation;

/// Iterable, filterable set of resources reachable from a parent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collection {
    pub class: ClassRecord,
    /// Class that exposes the collection
    pub parent_name: String,
    /// Attribute name on the parent, e.g. `objects`
    pub attribute_name: String,
    /// Resource produced when iterating
    pub item_type: TypeAnnotation,
}

impl Collection {
    pub fn new(
        parent_name: &str,
        relation_name: &str,
        attribute_name: &str,
        item_type: TypeAnnotation,
    ) -> Self {
        let class = ClassRecord::new(&format!("{}{}Collection", parent_name, relation_name))
            .with_base(TypeAnnotation::external(
                "boto3.resources.collection",
                "ResourceCollection",
            ))
            .with_docstring(&format!("{}.{} collection", parent_name, attribute_name));
        Self {
            class,
            parent_name: parent_name.to_string(),
            attribute_name: attribute_name.to_string(),
            item_type,
        }
    }

    pub fn name(&self) -> &str {
        &self.class.name
    }

    /// Annotation of the parent attribute that exposes this collection
    pub fn attribute_type(&self) -> TypeAnnotation {
        self.class.internal_type()
    }
}

impl TypeSource for Collection {
    fn type_annotations(&self) -> Vec<&TypeAnnotation> {
        let mut types = self.class.type_annotations();
        types.push(&self.item_type);
        types
    }
}
