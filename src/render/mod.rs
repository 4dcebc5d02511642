//! Renderer module — trait-based format dispatch.

pub mod json;
pub mod text;

use crate::assemble::TypeDoc;
use anyhow::{anyhow, Result};

/// Trait for rendering assembled type documentation into an output format.
pub trait Renderer {
    fn render(&self, docs: &[TypeDoc]) -> Result<String>;
}

/// Create a renderer for the given format name.
pub fn create_renderer(format: &str) -> Result<Box<dyn Renderer>> {
    match format {
        "text" | "txt" => Ok(Box::new(text::TextRenderer)),
        "json" => Ok(Box::new(json::JsonRenderer)),
        _ => Err(anyhow!("unknown format: {}. Use text or json", format)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_formats() {
        assert!(create_renderer("text").is_ok());
        assert!(create_renderer("txt").is_ok());
        assert!(create_renderer("json").is_ok());
    }

    #[test]
    fn unknown_format() {
        let err = create_renderer("html").err().unwrap();
        assert!(err.to_string().contains("unknown format: html"));
    }
}
