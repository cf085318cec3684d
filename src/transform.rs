//! Folds the parsed value tree into a parallel tree of inferred types.
//!
//! Scalars collapse to their [`TypeTag`]; objects keep their field
//! order; arrays keep their element order. Comments contribute
//! nothing. The result is an owned tree, the AST is left untouched.

use crate::ast::{AstNode, AstValue, Root, TypeTag};

/// Inferred structural type of a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeShape {
    Scalar(TypeTag),
    /// Field name to shape, in first-insertion order. A repeated key
    /// overwrites its shape in place, mapping-style.
    Object(Vec<(String, TypeShape)>),
    Array(Vec<TypeShape>),
}

/// Fold an AST into its type tree. The root is always
/// [`TypeShape::Object`].
#[must_use]
pub fn transform(root: &Root) -> TypeShape {
    TypeShape::Object(object_fields(&root.children))
}

fn shape_of(value: &AstValue) -> TypeShape {
    match value {
        AstValue::Object(children) => TypeShape::Object(object_fields(children)),
        AstValue::Array(children) => TypeShape::Array(array_items(children)),
        scalar => TypeShape::Scalar(scalar.tag()),
    }
}

fn object_fields(children: &[AstNode]) -> Vec<(String, TypeShape)> {
    let mut fields: Vec<(String, TypeShape)> = Vec::new();
    for node in children {
        match node {
            AstNode::Field { key, value, .. } => {
                let shape = shape_of(value);
                if let Some(slot) = fields.iter_mut().find(|(name, _)| name == key) {
                    slot.1 = shape;
                } else {
                    fields.push((key.clone(), shape));
                }
            }
            // stray elements cannot occur at object level
            AstNode::Element { .. } | AstNode::Comment { .. } => {}
        }
    }
    fields
}

fn array_items(children: &[AstNode]) -> Vec<TypeShape> {
    children
        .iter()
        .filter_map(|node| match node {
            AstNode::Element { value, .. } | AstNode::Field { value, .. } => Some(shape_of(value)),
            AstNode::Comment { .. } => None,
        })
        .collect()
}
