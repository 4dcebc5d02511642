//! Documentation assembler — the only place reflected members and doc
//! records meet.
//!
//! For each qualifying type this produces a [`TypeDoc`]: the type summary,
//! one JSON sample entry per mappable member, and one table row per member.
//! Placeholders are left to the renderers; a missing description or type is
//! `None` here.

pub mod lookup;

use crate::metadata::{Literal, MetadataSource, ReflectedMember, TypeInfo};
use crate::model::{MemberKind, MemberRecord};
use crate::vocabulary;
use serde::Serialize;

/// Substring of compiler-synthesized closure type names.
const SYNTHESIZED_MARKER: &str = "<>c";

/// Backing field every enum carries; never documented.
const ENUM_BACKING_FIELD: &str = "value__";

/// Assembled documentation for one type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeDoc {
    pub name: String,
    pub full_name: String,
    pub description: Option<String>,
    pub sample: Vec<SampleEntry>,
    pub table: Vec<TableRow>,
}

/// One line of the JSON sample.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SampleEntry {
    pub name: String,
    pub value: SampleValue,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum SampleValue {
    /// Underlying numeric value of an enum member
    EnumValue(serde_json::Number),
    /// Literal value of a constant field
    Constant(Literal),
    /// Vocabulary type name, rendered as `<Name>`
    Placeholder(String),
}

/// One line of the documentation table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    pub name: String,
    pub type_name: Option<String>,
    pub description: Option<String>,
}

/// Which module types get documented.
#[derive(Debug, Clone, Default)]
pub struct TypeFilter {
    /// When non-empty, only types in one of these namespaces qualify.
    pub namespaces: Vec<String>,
}

impl TypeFilter {
    pub fn includes(&self, ty: &TypeInfo) -> bool {
        if ty.full_name.contains(SYNTHESIZED_MARKER) {
            return false;
        }
        self.namespaces.is_empty() || self.namespaces.iter().any(|ns| *ns == ty.namespace)
    }
}

pub struct Assembler<'a, M: MetadataSource + ?Sized> {
    source: &'a M,
    records: &'a [MemberRecord],
    qualifying: Vec<&'a TypeInfo>,
}

impl<'a, M: MetadataSource + ?Sized> Assembler<'a, M> {
    pub fn new(source: &'a M, records: &'a [MemberRecord], filter: &TypeFilter) -> Self {
        let qualifying: Vec<&TypeInfo> = source
            .types()
            .iter()
            .filter(|t| filter.includes(t))
            .collect();
        tracing::debug!(
            "{} of {} types qualify for documentation",
            qualifying.len(),
            source.types().len()
        );
        Self {
            source,
            records,
            qualifying,
        }
    }

    pub fn qualifying(&self) -> &[&'a TypeInfo] {
        &self.qualifying
    }

    /// Documentation for every qualifying type, in module order.
    pub fn assemble(&self) -> Vec<TypeDoc> {
        self.qualifying
            .iter()
            .filter_map(|ty| self.assemble_type(ty))
            .collect()
    }

    /// `None` when the type has neither members nor doc records.
    pub fn assemble_type(&self, ty: &TypeInfo) -> Option<TypeDoc> {
        let matches = lookup::records_for(self.source, &self.qualifying, ty, self.records);
        let members = self.source.members_of(ty);
        if matches.is_empty() && members.is_empty() {
            tracing::debug!("{}: nothing to document", ty.full_name);
            return None;
        }

        let path = ty.doc_path();
        let description = matches
            .iter()
            .find(|r| r.kind == MemberKind::Type && r.full_path() == path)
            .map(|r| r.description.clone());

        let mut sample = Vec::new();
        let mut table = Vec::new();
        for member in members.iter() {
            let declaring = self.declaring_type(ty, member);
            if !include_member(declaring, member) {
                continue;
            }

            let type_name = vocabulary::map(&member.shape);
            match &type_name {
                Some(name) => sample.push(SampleEntry {
                    name: member.name.clone(),
                    value: sample_value(declaring, member, name),
                }),
                None => tracing::debug!(
                    "{}.{}: no vocabulary type, left out of the sample",
                    ty.full_name,
                    member.name
                ),
            }

            // Name-only match, first hit wins.
            let description = matches
                .iter()
                .find(|r| r.name == member.name)
                .map(|r| r.description.clone());
            table.push(TableRow {
                name: member.name.clone(),
                type_name,
                description,
            });
        }

        Some(TypeDoc {
            name: ty.simple_name().to_string(),
            full_name: ty.full_name.clone(),
            description,
            sample,
            table,
        })
    }

    fn declaring_type<'t>(&'t self, ty: &'t TypeInfo, member: &ReflectedMember) -> &'t TypeInfo {
        member
            .declaring_type
            .as_deref()
            .and_then(|name| self.source.find_type(name))
            .unwrap_or(ty)
    }
}

fn include_member(declaring: &TypeInfo, member: &ReflectedMember) -> bool {
    !(declaring.is_enum() && member.name == ENUM_BACKING_FIELD)
}

fn sample_value(declaring: &TypeInfo, member: &ReflectedMember, type_name: &str) -> SampleValue {
    if declaring.is_enum() {
        if let Some(value) = declaring.enum_value(&member.name) {
            return SampleValue::EnumValue(value.clone());
        }
    }
    match member.constant_value() {
        Some(literal) => SampleValue::Constant(literal.clone()),
        None => SampleValue::Placeholder(type_name.to_string()),
    }
}
