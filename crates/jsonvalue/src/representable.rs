//! Direct conversion between native types and [`JsonValue`].
//!
//! A type is `JsonRepresentable` when it can be written as a `JsonValue` and
//! read back from one. Reading is partial: asking for an `i64` from a
//! `JsonValue::String` yields `None`. There is no coercion between JSON types,
//! so `"5"` is never an integer and `Int(5)` is never a double.

use std::collections::{BTreeMap, HashMap};

use crate::value::{JsonArray, JsonObject, JsonValue};

/// A value interchangeable with [`JsonValue`].
///
/// Implementations must round-trip: `T::from_json(&v.to_json()) == Some(v)`.
pub trait JsonRepresentable: Sized {
    /// Reconstruct `Self` from a value, or `None` if the shape does not match.
    fn from_json(json: &JsonValue) -> Option<Self>;

    /// Represent `self` as a value.
    fn to_json(&self) -> JsonValue;
}

impl JsonRepresentable for JsonValue {
    fn from_json(json: &JsonValue) -> Option<Self> {
        Some(json.clone())
    }

    fn to_json(&self) -> JsonValue {
        self.clone()
    }
}

impl JsonRepresentable for bool {
    fn from_json(json: &JsonValue) -> Option<Self> {
        match json {
            JsonValue::Bool(value) => Some(*value),
            _ => None,
        }
    }

    fn to_json(&self) -> JsonValue {
        JsonValue::Bool(*self)
    }
}

impl JsonRepresentable for i64 {
    fn from_json(json: &JsonValue) -> Option<Self> {
        match json {
            JsonValue::Int(value) => Some(*value),
            _ => None,
        }
    }

    fn to_json(&self) -> JsonValue {
        JsonValue::Int(*self)
    }
}

/// Narrower integers ride on `Int` and fail to read when out of range.
macro_rules! narrow_int_representable {
    ($($ty:ty),*) => {
        $(
            impl JsonRepresentable for $ty {
                fn from_json(json: &JsonValue) -> Option<Self> {
                    match json {
                        JsonValue::Int(value) => <$ty>::try_from(*value).ok(),
                        _ => None,
                    }
                }

                fn to_json(&self) -> JsonValue {
                    JsonValue::Int(i64::from(*self))
                }
            }
        )*
    };
}

narrow_int_representable!(i8, i16, i32, u8, u16, u32);

impl JsonRepresentable for f64 {
    fn from_json(json: &JsonValue) -> Option<Self> {
        match json {
            JsonValue::Double(value) => Some(*value),
            _ => None,
        }
    }

    fn to_json(&self) -> JsonValue {
        JsonValue::Double(*self)
    }
}

impl JsonRepresentable for String {
    fn from_json(json: &JsonValue) -> Option<Self> {
        match json {
            JsonValue::String(value) => Some(value.clone()),
            _ => None,
        }
    }

    fn to_json(&self) -> JsonValue {
        JsonValue::String(self.clone())
    }
}

/// `Null` reads as `Some(None)`; anything else must convert as `T`.
///
/// This is where JSON `null` and Rust absence meet: `None.to_json()` is `Null`.
impl<T> JsonRepresentable for Option<T>
where
    T: JsonRepresentable,
{
    fn from_json(json: &JsonValue) -> Option<Self> {
        match json {
            JsonValue::Null => Some(None),
            other => T::from_json(other).map(Some),
        }
    }

    fn to_json(&self) -> JsonValue {
        match self {
            Some(value) => value.to_json(),
            None => JsonValue::Null,
        }
    }
}

/// Arrays convert element-wise; one bad element fails the whole array.
impl<T> JsonRepresentable for Vec<T>
where
    T: JsonRepresentable,
{
    fn from_json(json: &JsonValue) -> Option<Self> {
        match json {
            JsonValue::Array(items) => items.iter().map(T::from_json).collect(),
            _ => None,
        }
    }

    fn to_json(&self) -> JsonValue {
        JsonValue::Array(self.iter().map(T::to_json).collect::<JsonArray>())
    }
}

/// Objects convert value-wise; one bad value fails the whole object.
impl<T> JsonRepresentable for BTreeMap<String, T>
where
    T: JsonRepresentable,
{
    fn from_json(json: &JsonValue) -> Option<Self> {
        match json {
            JsonValue::Object(map) => map
                .iter()
                .map(|(k, v)| T::from_json(v).map(|v| (k.clone(), v)))
                .collect(),
            _ => None,
        }
    }

    fn to_json(&self) -> JsonValue {
        JsonValue::Object(
            self.iter()
                .map(|(k, v)| (k.clone(), v.to_json()))
                .collect::<JsonObject>(),
        )
    }
}

impl<T> JsonRepresentable for HashMap<String, T>
where
    T: JsonRepresentable,
{
    fn from_json(json: &JsonValue) -> Option<Self> {
        match json {
            JsonValue::Object(map) => map
                .iter()
                .map(|(k, v)| T::from_json(v).map(|v| (k.clone(), v)))
                .collect(),
            _ => None,
        }
    }

    fn to_json(&self) -> JsonValue {
        JsonValue::Object(
            self.iter()
                .map(|(k, v)| (k.clone(), v.to_json()))
                .collect::<JsonObject>(),
        )
    }
}
