//! Plain-text renderer — header, JSON sample, documentation table.
//!
//! ```text
//! Point - A 2D point.
//!
//! {
//!     "x":<Number>,
//!     "y":<Number>
//! }
//!
//! x <Number>: Horizontal coordinate.
//! y <Number>: ??
//! -------------------------------------------------------------------------------------------
//! ```

use crate::assemble::{SampleEntry, SampleValue, TableRow, TypeDoc};
use crate::metadata::Literal;
use crate::render::Renderer;
use anyhow::Result;

/// Stands in for a missing description or vocabulary type.
pub const PLACEHOLDER: &str = "??";

pub const SEPARATOR_WIDTH: usize = 91;

pub struct TextRenderer;

impl Renderer for TextRenderer {
    fn render(&self, docs: &[TypeDoc]) -> Result<String> {
        Ok(docs.iter().map(render_type).collect())
    }
}

fn render_type(doc: &TypeDoc) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!(
        "{} - {}",
        doc.name,
        doc.description.as_deref().unwrap_or(PLACEHOLDER)
    ));
    lines.push(String::new());

    lines.push("{".to_string());
    let last = doc.sample.len().saturating_sub(1);
    for (i, entry) in doc.sample.iter().enumerate() {
        let comma = if i < last { "," } else { "" };
        lines.push(format!("{}{}", sample_line(entry), comma));
    }
    lines.push("}".to_string());
    lines.push(String::new());

    for row in &doc.table {
        lines.push(table_line(row));
    }
    lines.push("-".repeat(SEPARATOR_WIDTH));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn sample_line(entry: &SampleEntry) -> String {
    let value = match &entry.value {
        SampleValue::EnumValue(n) => n.to_string(),
        SampleValue::Constant(Literal::Text(s)) => format!("\"{}\"", s),
        SampleValue::Constant(Literal::Number(n)) => n.to_string(),
        SampleValue::Constant(Literal::Bool(b)) => b.to_string(),
        SampleValue::Placeholder(type_name) => format!("<{}>", type_name),
    };
    format!("\t\"{}\":{}", entry.name, value)
}

fn table_line(row: &TableRow) -> String {
    format!(
        "{} <{}>: {}",
        row.name,
        row.type_name.as_deref().unwrap_or(PLACEHOLDER),
        row.description.as_deref().unwrap_or(PLACEHOLDER)
    )
}
