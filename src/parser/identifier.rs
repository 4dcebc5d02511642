//! Decoder for compiler-generated doc-comment identifiers.
//!
//! The grammar is `<kind>:<dotted.path>`, with methods optionally followed by
//! a parenthesized, comma-separated list of parameter type names:
//!
//! - `T:Geo.Model.Point`
//! - `F:Geo.Model.Point.x`
//! - `M:Geo.Model.Point.#ctor(System.Int32,System.Int32)`
//!
//! Identifiers come from the compiler toolchain, so nothing here validates
//! that the pieces are well-formed names.

use crate::model::MemberKind;

/// Member name the toolchain emits for instance constructors.
const CONSTRUCTOR_MARKER: &str = "#ctor";

/// Nesting separator some toolchains emit between enclosing and nested types.
const NESTING_SEPARATOR: char = '+';

/// A decoded doc-comment identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    pub kind: MemberKind,
    pub namespace_path: String,
    pub name: String,
    /// Raw parameter type names of a method signature, in declaration order.
    /// `None` when the identifier has no parenthesized list.
    pub parameter_types: Option<Vec<String>>,
}

/// Decode an identifier. Unknown kind characters (`N:`, `E:`, `!:`) yield `None`.
pub fn decode(id: &str) -> Option<Identifier> {
    let mut chars = id.chars();
    let kind = match chars.next()?.to_ascii_lowercase() {
        'p' => MemberKind::Property,
        't' => MemberKind::Type,
        'f' => MemberKind::Field,
        'm' => MemberKind::Method,
        _ => return None,
    };
    let path = chars.as_str().strip_prefix(':')?;

    // The parameter list goes first so dots inside parameter type names
    // never move the namespace/name split.
    let (path, parameter_types) = match kind {
        MemberKind::Method => split_signature(path),
        _ => (path, None),
    };

    let path = path.replace(NESTING_SEPARATOR, ".");
    let (namespace_path, mut name) = match path.rsplit_once('.') {
        Some((ns, name)) => (ns.to_string(), name.to_string()),
        None => (String::new(), path),
    };

    if kind == MemberKind::Method && name.contains(CONSTRUCTOR_MARKER) {
        if let Some(type_name) = namespace_path.rsplit('.').next().filter(|s| !s.is_empty()) {
            name = type_name.to_string();
        }
    }

    Some(Identifier {
        kind,
        namespace_path,
        name,
        parameter_types,
    })
}

/// Split `Ns.Type.Method(A,B)` into `Ns.Type.Method` and `[A, B]`.
fn split_signature(path: &str) -> (&str, Option<Vec<String>>) {
    let Some(open) = path.find('(') else {
        return (path, None);
    };
    let params = &path[open + 1..];
    let params = params.strip_suffix(')').unwrap_or(params);
    (&path[..open], Some(split_parameter_types(params)))
}

/// Split a parameter list on its top-level commas.
///
/// Commas nested in generic arguments (`{A,B}`) or array shapes (`[0:,0:]`)
/// belong to a single parameter type.
fn split_parameter_types(list: &str) -> Vec<String> {
    if list.is_empty() {
        return Vec::new();
    }

    let mut types = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, c) in list.char_indices() {
        match c {
            '{' | '[' | '(' => depth += 1,
            '}' | ']' | ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                types.push(list[start..i].to_string());
                start = i + 1;
            }
            _ => {}
        }
    }
    types.push(list[start..].to_string());
    types
}
