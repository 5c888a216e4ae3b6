//! Positional message parameters and placeholder substitution
//!
//! Messages may carry `{}` placeholders which are filled left-to-right from
//! the supplied [`LogParam`] values. Rendering is type-directed: composites
//! serialize as JSON, named callables render as their name, and primitives
//! render as plain text.

use super::error::Result;

/// Literal placeholder token scanned for in messages.
const PLACEHOLDER: &str = "{}";

/// A positional argument value for placeholder substitution.
#[derive(Debug, Clone, PartialEq)]
pub enum LogParam {
    /// Plain text, rendered as-is.
    Str(String),
    /// Integer, rendered in decimal.
    Int(i64),
    /// Floating point number.
    Float(f64),
    /// Boolean, rendered as `true` or `false`.
    Bool(bool),
    /// An explicit null value, rendered as `null`.
    Null,
    /// An explicitly supplied absent value, rendered as `undefined`.
    ///
    /// Distinct from *not supplying* a value at all: a placeholder with no
    /// corresponding parameter is left in the message verbatim.
    Undefined,
    /// A named callable reference, rendered as its name.
    Fn(String),
    /// A composite value (array, map, record), rendered as its canonical
    /// JSON serialization.
    Value(serde_json::Value),
}

impl LogParam {
    /// A parameter standing for a named function, e.g.
    /// `LogParam::function("init_db")` renders as `init_db`.
    pub fn function(name: impl Into<String>) -> Self {
        LogParam::Fn(name.into())
    }

    fn render(&self) -> Result<String> {
        Ok(match self {
            LogParam::Str(s) => s.clone(),
            LogParam::Int(i) => i.to_string(),
            LogParam::Float(f) => f.to_string(),
            LogParam::Bool(b) => b.to_string(),
            LogParam::Null => "null".to_string(),
            LogParam::Undefined => "undefined".to_string(),
            LogParam::Fn(name) => name.clone(),
            LogParam::Value(value) => serde_json::to_string(value)?,
        })
    }
}

impl From<&str> for LogParam {
    fn from(s: &str) -> Self {
        LogParam::Str(s.to_string())
    }
}

impl From<String> for LogParam {
    fn from(s: String) -> Self {
        LogParam::Str(s)
    }
}

impl From<i64> for LogParam {
    fn from(i: i64) -> Self {
        LogParam::Int(i)
    }
}

impl From<i32> for LogParam {
    fn from(i: i32) -> Self {
        LogParam::Int(i as i64)
    }
}

impl From<f64> for LogParam {
    fn from(f: f64) -> Self {
        LogParam::Float(f)
    }
}

impl From<bool> for LogParam {
    fn from(b: bool) -> Self {
        LogParam::Bool(b)
    }
}

impl From<serde_json::Value> for LogParam {
    fn from(value: serde_json::Value) -> Self {
        LogParam::Value(value)
    }
}

/// Substitute `{}` placeholders in `message` with the rendered `params`.
///
/// Placeholders are filled left-to-right. A placeholder beyond the last
/// supplied parameter stays literal; parameters beyond the last placeholder
/// are ignored. With no parameters at all the message is returned unchanged
/// without being scanned.
///
/// Substitution is best-effort: if rendering any parameter fails, the
/// original message is returned unmodified rather than an error. A malformed
/// call never prevents the line from being logged.
pub fn fill(message: &str, params: &[LogParam]) -> String {
    if params.is_empty() {
        return message.to_string();
    }

    try_fill(message, params).unwrap_or_else(|_| message.to_string())
}

fn try_fill(message: &str, params: &[LogParam]) -> Result<String> {
    let segments: Vec<&str> = message.split(PLACEHOLDER).collect();
    let mut filled = String::with_capacity(message.len());

    for (i, segment) in segments.iter().enumerate() {
        filled.push_str(segment);
        if i + 1 == segments.len() {
            break;
        }
        match params.get(i) {
            Some(param) => filled.push_str(&param.render()?),
            None => filled.push_str(PLACEHOLDER),
        }
    }

    Ok(filled)
}
