//! Text rendering for the structured encoding
//!
//! One `key: value` entry per line, two-space indentation per nesting level.
//! Lists of scalars stay on one line; lists of messages put one message per
//! element, comma-separated.

use super::TextValue;

const INDENT: &str = "  ";

/// Render top-level entries
pub(super) fn render(entries: &[(String, TextValue)]) -> String {
    let mut out = String::new();
    write_entries(&mut out, entries, 0);
    out
}

fn write_entries(out: &mut String, entries: &[(String, TextValue)], depth: usize) {
    for (key, value) in entries {
        indent(out, depth);
        out.push_str(key);
        out.push_str(": ");
        write_value(out, value, depth);
        out.push('\n');
    }
}

fn write_value(out: &mut String, value: &TextValue, depth: usize) {
    match value {
        TextValue::Int(n) => out.push_str(&n.to_string()),
        TextValue::Str(s) => write_quoted(out, s),
        TextValue::Enum(name) => out.push_str(name),
        TextValue::Message(entries) if entries.is_empty() => out.push_str("{}"),
        TextValue::Message(entries) => {
            out.push_str("{\n");
            write_entries(out, entries, depth + 1);
            indent(out, depth);
            out.push('}');
        }
        TextValue::List(items) if items.is_empty() => out.push_str("[]"),
        TextValue::List(items) if items.iter().all(is_scalar) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_value(out, item, depth);
            }
            out.push(']');
        }
        TextValue::List(items) => {
            out.push_str("[\n");
            for (i, item) in items.iter().enumerate() {
                indent(out, depth + 1);
                write_value(out, item, depth + 1);
                if i + 1 < items.len() {
                    out.push(',');
                }
                out.push('\n');
            }
            indent(out, depth);
            out.push(']');
        }
    }
}

fn is_scalar(value: &TextValue) -> bool {
    matches!(
        value,
        TextValue::Int(_) | TextValue::Str(_) | TextValue::Enum(_)
    )
}

fn indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
}

/// Quote a string, escaping quotes, backslashes and control bytes
fn write_quoted(out: &mut String, s: &str) {
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 || c as u32 == 0x7f => {
                out.push_str(&format!("\\{:03o}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push('"');
}
