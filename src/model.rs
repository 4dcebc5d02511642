//! Data model for parsed doc-comment records — format-agnostic.

use serde::Serialize;
use std::fmt;

/// What a doc-comment identifier refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberKind {
    Type,
    Field,
    Property,
    Method,
}

/// One `<member>` of the XML doc file that carried a `<summary>`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemberRecord {
    pub name: String,
    /// Namespace plus enclosing type names, nested types joined with `.`
    pub namespace_path: String,
    /// Trimmed `<summary>` text (may be empty)
    pub description: String,
    pub kind: MemberKind,
    /// `<param>` entries in document order (methods only)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<ParameterRecord>,
}

impl MemberRecord {
    /// `namespace_path.name`, or just `name` for the global namespace.
    pub fn full_path(&self) -> String {
        join_path(&self.namespace_path, &self.name)
    }
}

/// A documented method parameter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParameterRecord {
    pub name: String,
    pub description: String,
    /// Signature type at the same position, when the signature has one
    pub type_name: Option<String>,
}

impl fmt::Display for ParameterRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.type_name {
            Some(ty) => write!(f, "{} {}", ty, self.name),
            None => f.write_str(&self.name),
        }
    }
}

impl fmt::Display for MemberRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_path())?;
        if self.kind == MemberKind::Method {
            f.write_str("(")?;
            for (i, param) in self.parameters.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{}", param)?;
            }
            f.write_str(")")?;
        }
        Ok(())
    }
}

pub fn join_path(namespace_path: &str, name: &str) -> String {
    if namespace_path.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", namespace_path, name)
    }
}
