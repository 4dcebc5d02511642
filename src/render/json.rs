//! JSON renderer — the assembled documentation as structured output.
//!
//! Placeholders are not applied: a missing description or vocabulary type
//! is `null`, so tooling can tell "undocumented" from a literal `??`.

use crate::assemble::TypeDoc;
use crate::render::Renderer;
use anyhow::{Context, Result};

pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, docs: &[TypeDoc]) -> Result<String> {
        let mut out = serde_json::to_string_pretty(docs).context("failed to serialize documentation")?;
        out.push('\n');
        Ok(out)
    }
}
