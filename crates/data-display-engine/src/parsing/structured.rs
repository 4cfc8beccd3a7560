use serde::Deserialize;
use serde_json::Value;

use crate::models::Section;

pub const SCALAR_TITLE: &str = "Data";

/// Documents nested deeper than this are read as text. Parsing, formatting
/// and dropping a `Value` all recurse once per level.
pub const MAX_JSON_DEPTH: usize = 512;

/// Attempt to read `raw` as a JSON document.
///
/// Returns `None` for anything that is not well-formed JSON, or that nests
/// deeper than [`MAX_JSON_DEPTH`]; the caller decides what to fall back to.
/// Numbers keep their source spelling, so big integers survive unchanged.
pub fn try_parse_json(raw: &str) -> Option<Value> {
    let depth = nesting_depth(raw);
    if depth > MAX_JSON_DEPTH {
        log::debug!("input nests {depth} levels deep, not parsing as JSON");
        return None;
    }

    let mut deserializer = serde_json::Deserializer::from_str(raw);
    deserializer.disable_recursion_limit();
    let value = Value::deserialize(&mut deserializer).ok()?;
    deserializer.end().ok()?;
    Some(value)
}

/// Deepest `[`/`{` nesting outside string literals.
fn nesting_depth(raw: &str) -> usize {
    let mut depth = 0usize;
    let mut deepest = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for byte in raw.bytes() {
        if in_string {
            match byte {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match byte {
            b'"' => in_string = true,
            b'[' | b'{' => {
                depth += 1;
                deepest = deepest.max(depth);
            }
            b']' | b'}' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }

    deepest
}

/// Turn a parsed JSON document into sections.
///
/// Objects give one section per key in document order, arrays one per
/// element, and any scalar a single `Data` section. Empty objects and
/// arrays give no sections at all.
pub fn sections_from_value(value: Value) -> Vec<Section> {
    match value {
        Value::Object(map) => map
            .iter()
            .map(|(key, value)| Section::new(title_case_key(key), format_value(value)))
            .collect(),
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(idx, item)| Section::new(format!("Item {}", idx + 1), format_value(item)))
            .collect(),
        scalar => vec![Section::new(SCALAR_TITLE, format_value(&scalar))],
    }
}

/// Display text for a JSON value.
///
/// Composites are pretty-printed with two-space indentation, strings are
/// shown without quotes, and other scalars use their JSON spelling.
pub fn format_value(value: &Value) -> String {
    match value {
        Value::Object(_) | Value::Array(_) => {
            serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
        }
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Convert an object key such as `key_findings` into `Key Findings`.
///
/// Underscores become spaces. An ASCII letter is upper-cased when it starts
/// a word (nothing alphabetic before it) and lower-cased otherwise. Other
/// characters pass through untouched.
pub fn title_case_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut prev_is_letter = false;

    for ch in key.chars() {
        let ch = if ch == '_' { ' ' } else { ch };
        if ch.is_ascii_alphabetic() {
            out.push(if prev_is_letter {
                ch.to_ascii_lowercase()
            } else {
                ch.to_ascii_uppercase()
            });
        } else {
            out.push(ch);
        }
        prev_is_letter = ch.is_alphabetic();
    }

    out
}
