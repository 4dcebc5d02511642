//! Parser module — doc-comment identifiers and the XML doc file.

pub mod identifier;
pub mod xmldoc;
