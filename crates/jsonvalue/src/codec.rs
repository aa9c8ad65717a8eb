//! Encode/decode boundary between JSON text and [`JsonValue`].
//!
//! `JsonValue` implements serde's `Serialize` and `Deserialize` directly, so
//! it plugs into any self-describing serde format. The functions here are
//! thin `serde_json` wrappers that map failures into [`JsonValueError`].
//!
//! # Variant precedence
//!
//! Decoding recognizes variants in a fixed order: null, bool, int, double,
//! string, object, array. Integral numbers become `Int`; numbers written with
//! a fraction or exponent become `Double`; integers too large for `i64` fall
//! through to `Double`. Encoding emits each variant's native JSON form with no
//! tag or wrapper.
//!
//! ```
//! use jsonvalue::{codec, JsonValue};
//!
//! assert_eq!(codec::from_str("true").unwrap(), JsonValue::Bool(true));
//! assert_eq!(codec::from_str("5").unwrap(), JsonValue::Int(5));
//! assert_eq!(codec::from_str("5.5").unwrap(), JsonValue::Double(5.5));
//! ```
//!
//! [`JsonValueError`]: crate::JsonValueError

use std::fmt;
use std::io;

use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{self, Serialize, Serializer};

use crate::error::Result;
use crate::value::{JsonArray, JsonObject, JsonValue};

/// Decode a `JsonValue` from JSON text.
pub fn from_str(json: &str) -> Result<JsonValue> {
    serde_json::from_str(json).map_err(decode_failed)
}

/// Decode a `JsonValue` from JSON bytes.
pub fn from_slice(json: &[u8]) -> Result<JsonValue> {
    serde_json::from_slice(json).map_err(decode_failed)
}

/// Decode a `JsonValue` from a reader.
pub fn from_reader<R: io::Read>(reader: R) -> Result<JsonValue> {
    serde_json::from_reader(reader).map_err(decode_failed)
}

/// Encode compact JSON text.
pub fn to_string(value: &JsonValue) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}

/// Encode indented JSON text.
pub fn to_string_pretty(value: &JsonValue) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Encode compact JSON into a writer.
pub fn to_writer<W: io::Write>(writer: W, value: &JsonValue) -> Result<()> {
    Ok(serde_json::to_writer(writer, value)?)
}

fn decode_failed(err: serde_json::Error) -> crate::JsonValueError {
    tracing::debug!(error = %err, line = err.line(), column = err.column(), "JSON decode failed");
    err.into()
}

// ============================================================================
// serde
// ============================================================================

impl Serialize for JsonValue {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            JsonValue::Null => serializer.serialize_unit(),
            JsonValue::Bool(b) => serializer.serialize_bool(*b),
            JsonValue::Int(n) => serializer.serialize_i64(*n),
            JsonValue::Double(d) if d.is_finite() => serializer.serialize_f64(*d),
            JsonValue::Double(d) => Err(ser::Error::custom(format!(
                "cannot encode non-finite double {d}"
            ))),
            JsonValue::String(s) => serializer.serialize_str(s),
            JsonValue::Object(map) => map.serialize(serializer),
            JsonValue::Array(items) => items.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for JsonValue {
    fn deserialize<D>(deserializer: D) -> std::result::Result<JsonValue, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(JsonValueVisitor)
    }
}

struct JsonValueVisitor;

impl<'de> Visitor<'de> for JsonValueVisitor {
    type Value = JsonValue;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a JSON value (data could not be decoded from an unsupported type)")
    }

    fn visit_unit<E: de::Error>(self) -> std::result::Result<JsonValue, E> {
        Ok(JsonValue::Null)
    }

    fn visit_none<E: de::Error>(self) -> std::result::Result<JsonValue, E> {
        Ok(JsonValue::Null)
    }

    fn visit_some<D>(self, deserializer: D) -> std::result::Result<JsonValue, D::Error>
    where
        D: Deserializer<'de>,
    {
        Deserialize::deserialize(deserializer)
    }

    fn visit_bool<E: de::Error>(self, value: bool) -> std::result::Result<JsonValue, E> {
        Ok(JsonValue::Bool(value))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> std::result::Result<JsonValue, E> {
        Ok(JsonValue::Int(value))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> std::result::Result<JsonValue, E> {
        // Too large for Int: the next variant in line is Double.
        Ok(i64::try_from(value).map_or(JsonValue::Double(value as f64), JsonValue::Int))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> std::result::Result<JsonValue, E> {
        Ok(JsonValue::Double(value))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> std::result::Result<JsonValue, E> {
        Ok(JsonValue::String(value.to_owned()))
    }

    fn visit_string<E: de::Error>(self, value: String) -> std::result::Result<JsonValue, E> {
        Ok(JsonValue::String(value))
    }

    fn visit_map<A>(self, mut access: A) -> std::result::Result<JsonValue, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut map = JsonObject::new();
        while let Some((key, value)) = access.next_entry::<String, JsonValue>()? {
            map.insert(key, value);
        }
        Ok(JsonValue::Object(map))
    }

    fn visit_seq<A>(self, mut access: A) -> std::result::Result<JsonValue, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut items = JsonArray::with_capacity(access.size_hint().unwrap_or(0));
        while let Some(item) = access.next_element::<JsonValue>()? {
            items.push(item);
        }
        Ok(JsonValue::Array(items))
    }
}

// ============================================================================
// serde_json interop
// ============================================================================

impl From<serde_json::Value> for JsonValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => JsonValue::Null,
            serde_json::Value::Bool(b) => JsonValue::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    JsonValue::Int(i)
                } else {
                    // u64 beyond i64 and all fractional numbers.
                    JsonValue::Double(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(s) => JsonValue::String(s),
            serde_json::Value::Array(items) => {
                JsonValue::Array(items.into_iter().map(JsonValue::from).collect())
            }
            serde_json::Value::Object(map) => JsonValue::Object(
                map.into_iter()
                    .map(|(k, v)| (k, JsonValue::from(v)))
                    .collect(),
            ),
        }
    }
}

/// Non-finite doubles have no JSON form and become `null`.
impl From<JsonValue> for serde_json::Value {
    fn from(value: JsonValue) -> Self {
        match value {
            JsonValue::Null => serde_json::Value::Null,
            JsonValue::Bool(b) => serde_json::Value::Bool(b),
            JsonValue::Int(n) => serde_json::Value::Number(n.into()),
            JsonValue::Double(d) => serde_json::Number::from_f64(d)
                .map_or(serde_json::Value::Null, serde_json::Value::Number),
            JsonValue::String(s) => serde_json::Value::String(s),
            JsonValue::Array(items) => {
                serde_json::Value::Array(items.into_iter().map(serde_json::Value::from).collect())
            }
            JsonValue::Object(map) => serde_json::Value::Object(
                map.into_iter()
                    .map(|(k, v)| (k, serde_json::Value::from(v)))
                    .collect(),
            ),
        }
    }
}
