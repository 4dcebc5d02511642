//! Projection of structural types onto the sample vocabulary
//! (`Number`, `Boolean`, `String`, `Array of ...`, `... Object`).

use crate::metadata::{PrimitiveKind, TypeShape};

/// Vocabulary name for `shape`, or `None` when it has no equivalent.
///
/// A sequence whose element type is unmapped is itself unmapped.
pub fn map(shape: &TypeShape) -> Option<String> {
    match shape {
        TypeShape::Primitive(kind) if kind.is_numeric() => Some("Number".to_string()),
        TypeShape::Primitive(PrimitiveKind::Boolean) => Some("Boolean".to_string()),
        TypeShape::Primitive(_) => None,
        TypeShape::Text => Some("String".to_string()),
        TypeShape::Sequence(Some(element)) => map(element).map(|e| format!("Array of {}", e)),
        TypeShape::Sequence(None) => Some("Array".to_string()),
        TypeShape::Enum => Some("Number".to_string()),
        TypeShape::Reference(name) => Some(format!("{} Object", name.replace('+', "."))),
        TypeShape::Opaque => None,
    }
}
