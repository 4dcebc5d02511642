//! XML doc-comment reader — a single forward pass over the token stream.
//!
//! Only `<summary>` and `<param>` are consumed. Everything else inside a
//! `<member>` (`<remarks>`, `<returns>`, `<exception>`, ...) is skipped.

use crate::error::{Error, Result};
use crate::model::{MemberKind, MemberRecord, ParameterRecord};
use crate::parser::identifier;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::fs;
use std::path::Path;

/// Read and parse the doc-comment file at `path`.
pub fn read_file(path: &Path) -> Result<Vec<MemberRecord>> {
    if !path.is_file() {
        return Err(Error::DocFileNotFound(path.to_path_buf()));
    }
    let content = fs::read_to_string(path)?;
    let records = parse(&content)?;
    tracing::debug!(
        "read {} documented members from {}",
        records.len(),
        path.display()
    );
    Ok(records)
}

/// Parse doc-comment XML into records, in document order.
///
/// A `<member>` without a `<summary>`, or whose identifier has an unknown
/// kind, produces no record. Duplicates are kept.
pub fn parse(xml: &str) -> Result<Vec<MemberRecord>> {
    let mut reader = Reader::from_str(xml);
    let mut records = Vec::new();

    loop {
        match reader.read_event()? {
            Event::Start(e) if e.name().as_ref() == b"member" => {
                let id = attribute(&e, b"name")?;
                let entry = read_member(&mut reader)?;
                if let Some(record) = id.and_then(|id| build_record(&id, entry)) {
                    records.push(record);
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(records)
}

/// Raw contents of one `<member>` subtree.
#[derive(Default)]
struct MemberEntry {
    summary: Option<String>,
    /// (name, description) in document order
    params: Vec<(String, String)>,
}

/// Consume a `<member>` subtree up to and including its closing tag.
fn read_member(reader: &mut Reader<&[u8]>) -> Result<MemberEntry> {
    let mut entry = MemberEntry::default();

    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.name().as_ref() {
                b"summary" => {
                    let text = read_text(reader)?;
                    entry.summary.get_or_insert(text);
                }
                b"param" => {
                    let name = attribute(&e, b"name")?;
                    let text = read_text(reader)?;
                    push_param(&mut entry, name, text);
                }
                _ => {}
            },
            Event::Empty(e) => match e.name().as_ref() {
                b"summary" => {
                    entry.summary.get_or_insert_with(String::new);
                }
                b"param" => {
                    let name = attribute(&e, b"name")?;
                    push_param(&mut entry, name, String::new());
                }
                _ => {}
            },
            Event::End(e) if e.name().as_ref() == b"member" => break,
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(entry)
}

fn push_param(entry: &mut MemberEntry, name: Option<String>, description: String) {
    match name {
        Some(name) if !name.is_empty() => entry.params.push((name, description)),
        _ => {}
    }
}

/// Collect the text of the element just opened, up to its closing tag.
///
/// Nested inline tags (`<see cref="..."/>`, `<c>`) contribute their text
/// nodes only.
fn read_text(reader: &mut Reader<&[u8]>) -> Result<String> {
    let mut text = String::new();
    let mut depth = 0usize;

    loop {
        match reader.read_event()? {
            Event::Text(t) => text.push_str(&t.unescape()?),
            Event::CData(c) => text.push_str(&String::from_utf8_lossy(&c)),
            Event::Start(_) => depth += 1,
            Event::End(_) if depth == 0 => break,
            Event::End(_) => depth -= 1,
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(text.trim().to_string())
}

fn attribute(e: &BytesStart<'_>, key: &[u8]) -> Result<Option<String>> {
    match e.try_get_attribute(key).map_err(quick_xml::Error::from)? {
        Some(attr) => Ok(Some(attr.unescape_value()?.into_owned())),
        None => Ok(None),
    }
}

fn build_record(id: &str, entry: MemberEntry) -> Option<MemberRecord> {
    let description = entry.summary?;
    let identifier::Identifier {
        kind,
        namespace_path,
        name,
        parameter_types,
    } = identifier::decode(id)?;

    // Types pair with <param> tags by position only; a drifted doc file
    // pairs them wrongly without complaint.
    let parameters = if kind == MemberKind::Method {
        let types = parameter_types.unwrap_or_default();
        entry
            .params
            .into_iter()
            .enumerate()
            .map(|(i, (name, description))| ParameterRecord {
                name,
                description,
                type_name: types.get(i).cloned(),
            })
            .collect()
    } else {
        Vec::new()
    };

    Some(MemberRecord {
        name,
        namespace_path,
        description,
        kind,
        parameters,
    })
}
