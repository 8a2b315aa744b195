//! Conversion of parsed JSON values into Dart literal expressions.
//!
//! Strings are emitted as raw triple-quoted literals so that backslashes and
//! `$` interpolation markers survive verbatim. Map key order is taken from the
//! parsed document (`serde_json` is built with `preserve_order`).

use serde_json::Value;

use crate::error::{GenerateError, Result};

/// Encode a JSON value as a Dart constant expression.
///
/// # Examples
///
/// ```
/// use intl_datagen::core::encode::encode;
/// use serde_json::json;
///
/// assert_eq!(encode(&json!(null)).unwrap(), "null");
/// assert_eq!(encode(&json!(42)).unwrap(), "42");
/// assert_eq!(encode(&json!("hello")).unwrap(), "r'''hello'''");
/// assert_eq!(encode(&json!("it's")).unwrap(), r#"r"""it's""""#);
/// ```
pub fn encode(value: &Value) -> Result<String> {
    match value {
        Value::Null => Ok("null".to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Number(n) => Ok(n.to_string()),
        Value::String(s) => encode_string(s),
        Value::Array(items) => {
            let items = items.iter().map(encode).collect::<Result<Vec<_>>>()?;
            Ok(format!("<dynamic>[{}]", items.join(", ")))
        }
        Value::Object(map) => {
            let mut buffer = String::from("<String, Object>{\n");
            for (key, value) in map {
                buffer.push_str(&encode_entry(key, value)?);
                buffer.push('\n');
            }
            buffer.push('}');
            Ok(buffer)
        }
    }
}

/// Encode one `key: value,` map entry, the key going through the string rule.
pub fn encode_entry(key: &str, value: &Value) -> Result<String> {
    Ok(format!("{}: {},", encode_string(key)?, encode(value)?))
}

/// Raw string literal, switching to `"""` delimiters when the text holds a `'`.
///
/// Two kinds of text have no faithful raw form and are rejected:
/// - text that needs `"""` but itself contains `"""` (or ends in `"`)
/// - text whose first line is blank, since Dart drops that line from a
///   triple-quoted literal
pub fn encode_string(s: &str) -> Result<String> {
    if has_blank_first_line(s) {
        return Err(GenerateError::BlankFirstLine {
            value: s.to_string(),
        });
    }
    if !s.contains('\'') {
        return Ok(format!("r'''{s}'''"));
    }
    if s.contains("\"\"\"") || s.ends_with('"') {
        return Err(GenerateError::DelimiterCollision {
            value: s.to_string(),
        });
    }
    Ok(format!("r\"\"\"{s}\"\"\""))
}

/// True when everything before the first line break is spaces, tabs or `\`.
fn has_blank_first_line(s: &str) -> bool {
    match s.find(['\n', '\r']) {
        Some(end) => s[..end].chars().all(|c| matches!(c, ' ' | '\t' | '\\')),
        None => false,
    }
}

/// Short human-readable description of a value, used in diagnostics.
pub fn describe(value: &Value) -> String {
    let kind = match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    };
    let mut text = value.to_string();
    if text.len() > 60 {
        let cut = (0..=60).rev().find(|i| text.is_char_boundary(*i)).unwrap_or(0);
        text.truncate(cut);
        text.push_str("...");
    }
    format!("{kind} {text}")
}
