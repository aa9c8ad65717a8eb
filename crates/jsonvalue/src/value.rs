//! The `JsonValue` model: a closed tagged union over every valid JSON shape.
//!
//! Every node of a `JsonValue` tree is itself a `JsonValue`, and the tree owns
//! its children outright. Nothing in this module can fail; all partiality lives
//! in the conversion layer ([`crate::representable`]).

use std::collections::BTreeMap;
use std::fmt;

/// A JSON object. Keys are kept sorted, so equality ignores insertion order.
pub type JsonObject = BTreeMap<String, JsonValue>;

/// A JSON array. Element order is significant.
pub type JsonArray = Vec<JsonValue>;

/// A typesafe model of a JSON value.
///
/// Integers and floating-point numbers are distinct variants: `Int(5)` and
/// `Double(5.0)` are never equal and never converted into one another.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum JsonValue {
    Bool(bool),
    Int(i64),
    Double(f64),
    String(String),
    Object(JsonObject),
    Array(JsonArray),
    #[default]
    Null,
}

impl JsonValue {
    /// Build a value from anything with a direct JSON representation.
    pub fn from_representation<T>(representation: &T) -> Self
    where
        T: crate::JsonRepresentable,
    {
        representation.to_json()
    }

    /// Returns true for `JsonValue::Null`.
    pub fn is_null(&self) -> bool {
        matches!(self, JsonValue::Null)
    }

    /// Short lowercase name of the variant, used in log fields.
    pub fn type_name(&self) -> &'static str {
        match self {
            JsonValue::Bool(_) => "bool",
            JsonValue::Int(_) => "int",
            JsonValue::Double(_) => "double",
            JsonValue::String(_) => "string",
            JsonValue::Object(_) => "object",
            JsonValue::Array(_) => "array",
            JsonValue::Null => "null",
        }
    }
}

// ============================================================================
// Rendering
// ============================================================================

/// Human-readable rendering.
///
/// A top-level string renders as its raw text. Inside objects and arrays,
/// strings are quoted so the structure stays readable:
/// `{"name": "Alice", "tags": ["a", "b"]}`.
impl fmt::Display for JsonValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JsonValue::String(s) => f.write_str(s),
            other => write_nested(other, f),
        }
    }
}

fn write_nested(value: &JsonValue, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match value {
        JsonValue::Bool(b) => write!(f, "{b}"),
        JsonValue::Int(n) => write!(f, "{n}"),
        JsonValue::Double(d) => write_double(*d, f),
        JsonValue::String(s) => write_quoted(s, f),
        JsonValue::Object(map) => {
            f.write_str("{")?;
            for (i, (key, child)) in map.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write_quoted(key, f)?;
                f.write_str(": ")?;
                write_nested(child, f)?;
            }
            f.write_str("}")
        }
        JsonValue::Array(items) => {
            f.write_str("[")?;
            for (i, child) in items.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write_nested(child, f)?;
            }
            f.write_str("]")
        }
        JsonValue::Null => f.write_str("null"),
    }
}

/// Doubles always carry a fractional part or an exponent so they never read
/// as integers.
fn write_double(d: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if !d.is_finite() || d.fract() != 0.0 {
        write!(f, "{d}")
    } else if d.abs() < 1e16 {
        write!(f, "{d:.1}")
    } else {
        write!(f, "{d:e}")
    }
}

fn write_quoted(s: &str, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("\"")?;
    for ch in s.chars() {
        match ch {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            c if (c as u32) < 0x20 => write!(f, "\\u{:04x}", c as u32)?,
            c => write!(f, "{c}")?,
        }
    }
    f.write_str("\"")
}

// ============================================================================
// Literal construction
// ============================================================================

impl From<bool> for JsonValue {
    fn from(value: bool) -> Self {
        JsonValue::Bool(value)
    }
}

impl From<i64> for JsonValue {
    fn from(value: i64) -> Self {
        JsonValue::Int(value)
    }
}

impl From<i32> for JsonValue {
    fn from(value: i32) -> Self {
        JsonValue::Int(i64::from(value))
    }
}

impl From<u32> for JsonValue {
    fn from(value: u32) -> Self {
        JsonValue::Int(i64::from(value))
    }
}

impl From<f64> for JsonValue {
    fn from(value: f64) -> Self {
        JsonValue::Double(value)
    }
}

impl From<&str> for JsonValue {
    fn from(value: &str) -> Self {
        JsonValue::String(value.to_owned())
    }
}

impl From<String> for JsonValue {
    fn from(value: String) -> Self {
        JsonValue::String(value)
    }
}

impl From<JsonObject> for JsonValue {
    fn from(value: JsonObject) -> Self {
        JsonValue::Object(value)
    }
}

impl From<JsonArray> for JsonValue {
    fn from(value: JsonArray) -> Self {
        JsonValue::Array(value)
    }
}

impl<T> From<Option<T>> for JsonValue
where
    T: Into<JsonValue>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(JsonValue::Null, Into::into)
    }
}

/// Collect key/value pairs into an object. A repeated key keeps the last value.
impl<K, V> FromIterator<(K, V)> for JsonValue
where
    K: Into<String>,
    V: Into<JsonValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        JsonValue::Object(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Collect values into an array, preserving order.
impl<V> FromIterator<V> for JsonValue
where
    V: Into<JsonValue>,
{
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        JsonValue::Array(iter.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn double_rendering_keeps_fraction() {
        assert_eq!(JsonValue::Double(1.0).to_string(), "1.0");
        assert_eq!(JsonValue::Double(2.5).to_string(), "2.5");
        assert_eq!(JsonValue::Double(f64::NAN).to_string(), "NaN");
        assert_eq!(JsonValue::Double(1e16).to_string(), "1e16");
        assert_eq!(JsonValue::Double(-2.5e20).to_string(), "-2.5e20");
    }

    #[test]
    fn quoted_strings_escape_controls() {
        let v = JsonValue::Array(vec!["a\"b\n\u{1}".into()]);
        assert_eq!(v.to_string(), r#"["a\"b\n\u0001"]"#);
    }
}
