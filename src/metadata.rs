//! Module metadata — the structural view of types and their members.
//!
//! Reflection over the compiled module happens outside this tool. An
//! exporter writes a JSON manifest, and [`Manifest`] serves it through the
//! [`MetadataSource`] trait the assembler depends on.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fs;
use std::path::Path;

/// Read-only provider of module types and their public members.
pub trait MetadataSource {
    /// Every type of the module, in module order.
    fn types(&self) -> &[TypeInfo];

    /// Public instance and static fields, then properties, of `ty`
    /// (inherited ones included).
    fn members_of<'a>(&'a self, ty: &'a TypeInfo) -> Cow<'a, [ReflectedMember]>;

    fn find_type(&self, full_name: &str) -> Option<&TypeInfo> {
        self.types().iter().find(|t| t.full_name == full_name)
    }

    /// True when `ancestor` appears in the base chain of `ty`.
    fn is_strict_subtype(&self, ty: &TypeInfo, ancestor: &TypeInfo) -> bool {
        ty.full_name != ancestor.full_name && ty.bases.iter().any(|b| *b == ancestor.full_name)
    }
}

/// Built-in primitive kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveKind {
    SByte,
    Byte,
    #[serde(alias = "short")]
    Int16,
    #[serde(alias = "ushort")]
    UInt16,
    #[serde(alias = "int")]
    Int32,
    #[serde(alias = "uint")]
    UInt32,
    #[serde(alias = "long")]
    Int64,
    #[serde(alias = "ulong")]
    UInt64,
    #[serde(alias = "float")]
    Single,
    Double,
    Decimal,
    #[serde(alias = "bool")]
    Boolean,
    IntPtr,
    UIntPtr,
}

impl PrimitiveKind {
    pub fn is_numeric(self) -> bool {
        !matches!(
            self,
            PrimitiveKind::Boolean | PrimitiveKind::IntPtr | PrimitiveKind::UIntPtr
        )
    }
}

/// Structural description of a member's declared type, decided once when
/// the metadata is exported.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeShape {
    Primitive(PrimitiveKind),
    /// `string` or a single character
    Text,
    /// Homogeneous ordered collection or fixed array; `None` when the
    /// element type is unknown
    Sequence(Option<Box<TypeShape>>),
    Enum,
    /// Class type by namespace-relative name. Nested types use `+`
    /// between enclosing and nested names (`Shape+Outline`).
    Reference(String),
    /// Value types, interfaces, pointers
    Opaque,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeKind {
    #[default]
    Class,
    Struct,
    Enum,
    Interface,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberSort {
    #[default]
    Field,
    Property,
}

/// Compile-time constant value of a field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Literal {
    Bool(bool),
    Number(serde_json::Number),
    Text(String),
}

/// A public field or property as reported by the metadata source.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReflectedMember {
    pub name: String,
    #[serde(default)]
    pub member: MemberSort,
    #[serde(rename = "type")]
    pub shape: TypeShape,
    /// Literal value of a constant field
    #[serde(default)]
    pub constant: Option<Literal>,
    /// Full name of the declaring type when it is not the listing type
    #[serde(default)]
    pub declaring_type: Option<String>,
}

impl ReflectedMember {
    /// The literal value, if this is a constant field.
    pub fn constant_value(&self) -> Option<&Literal> {
        match self.member {
            MemberSort::Field => self.constant.as_ref(),
            MemberSort::Property => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EnumValue {
    pub name: String,
    pub value: serde_json::Number,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TypeInfo {
    /// Namespace-qualified name; nested types use `+` (`Geo.Model.Shape+Outline`)
    pub full_name: String,
    #[serde(default)]
    pub namespace: String,
    #[serde(default)]
    pub kind: TypeKind,
    /// Ancestor chain, nearest first
    #[serde(default)]
    pub bases: Vec<String>,
    #[serde(default)]
    pub members: Vec<ReflectedMember>,
    #[serde(default)]
    pub enum_values: Vec<EnumValue>,
}

impl TypeInfo {
    /// Last segment of the full name: `Geo.Model.Shape+Outline` → `Outline`.
    pub fn simple_name(&self) -> &str {
        self.full_name
            .rsplit(|c: char| c == '.' || c == '+')
            .next()
            .unwrap_or(&self.full_name)
    }

    /// Full name with nesting flattened to dots, the form doc-comment
    /// namespace paths use.
    pub fn doc_path(&self) -> String {
        self.full_name.replace('+', ".")
    }

    pub fn is_enum(&self) -> bool {
        self.kind == TypeKind::Enum
    }

    pub fn enum_value(&self, name: &str) -> Option<&serde_json::Number> {
        self.enum_values
            .iter()
            .find(|v| v.name == name)
            .map(|v| &v.value)
    }
}

/// JSON manifest written by a reflection exporter.
#[derive(Debug, Default, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub types: Vec<TypeInfo>,
}

impl Manifest {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let manifest = Self::from_json(&content)?;
        tracing::debug!(
            "loaded {} types from {}",
            manifest.types.len(),
            path.display()
        );
        Ok(manifest)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl MetadataSource for Manifest {
    fn types(&self) -> &[TypeInfo] {
        &self.types
    }

    fn members_of<'a>(&'a self, ty: &'a TypeInfo) -> Cow<'a, [ReflectedMember]> {
        if ty.is_enum() && ty.members.is_empty() {
            // Enum values are static constant fields of the enum itself.
            return Cow::Owned(
                ty.enum_values
                    .iter()
                    .map(|v| ReflectedMember {
                        name: v.name.clone(),
                        member: MemberSort::Field,
                        shape: TypeShape::Enum,
                        constant: Some(Literal::Number(v.value.clone())),
                        declaring_type: None,
                    })
                    .collect(),
            );
        }
        Cow::Borrowed(&ty.members)
    }
}
