//! JSON serialization and single-line rendering for preference values

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::Value;

/// Serialize with a one-space indent, keeping non-ASCII text as raw UTF-8
pub fn to_pretty_json<T: Serialize>(value: &T) -> serde_json::Result<Vec<u8>> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b" "));
    value.serialize(&mut ser)?;
    Ok(buf)
}

/// Render a value so it occupies exactly one line of output
///
/// Strings are printed raw with trailing whitespace removed and embedded
/// newlines escaped as `\n`, so the next workflow action sees a single
/// argument. Anything else is printed as compact JSON.
pub fn single_line(value: &Value) -> String {
    match value {
        Value::String(s) => escape_newlines(s.trim_end()),
        other => other.to_string(),
    }
}

/// Escape line feeds as the two characters `\n`
pub fn escape_newlines(s: &str) -> String {
    s.replace('\n', "\\n")
}
