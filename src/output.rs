//! Encoding and writing of the finished dump.

use crate::error::Result;
use clap::ValueEnum;
use std::fs;
use std::path::Path;

/// Byte-order mark written ahead of UTF-16LE output.
const UTF16LE_BOM: [u8; 2] = [0xFF, 0xFE];

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Encoding {
    /// UTF-16 little-endian with a byte-order mark
    Utf16,
    Utf8,
}

pub fn encode(text: &str, encoding: Encoding) -> Vec<u8> {
    match encoding {
        Encoding::Utf8 => text.as_bytes().to_vec(),
        Encoding::Utf16 => {
            let mut bytes = Vec::with_capacity(2 + text.len() * 2);
            bytes.extend_from_slice(&UTF16LE_BOM);
            for unit in text.encode_utf16() {
                bytes.extend_from_slice(&unit.to_le_bytes());
            }
            bytes
        }
    }
}

/// Write the whole dump in one go; nothing is written if encoding fails.
pub fn write(path: &Path, text: &str, encoding: Encoding) -> Result<()> {
    fs::write(path, encode(text, encoding))?;
    tracing::debug!("wrote {} ({:?})", path.display(), encoding);
    Ok(())
}
