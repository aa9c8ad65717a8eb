//! Named conversion strategies layered over [`JsonStorage`].
//!
//! Some domain types have no single JSON shape: a date may travel as a number
//! of seconds or as formatted text. Rather than picking one through
//! [`JsonRepresentable`], each wire form gets its own zero-sized strategy type
//! implementing [`JsonValueKey`]. Strategies name an intermediate raw type
//! (which is itself `JsonRepresentable`) and the two functions between it and
//! the domain type. Several strategies may target the same domain type and
//! the same underlying field.
//!
//! ```
//! use jsonvalue::{JsonValue, JsonValueKey, KeyedStorage};
//!
//! /// Percentages stored on the wire as whole-number basis points.
//! struct BasisPoints;
//!
//! impl JsonValueKey for BasisPoints {
//!     type Raw = i64;
//!     type Value = f64;
//!
//!     fn value_from(raw: i64) -> Option<f64> {
//!         Some(raw as f64 / 100.0)
//!     }
//!
//!     fn raw_value_for(value: &f64) -> i64 {
//!         (value * 100.0).round() as i64
//!     }
//! }
//!
//! let mut rate = JsonValue::Int(250);
//! assert_eq!(rate.value_for::<BasisPoints>(), Some(2.5));
//!
//! rate.set_value_for::<BasisPoints>(Some(1.25));
//! assert_eq!(rate, JsonValue::Int(125));
//! ```

use std::any::type_name;
use std::marker::PhantomData;

use crate::representable::JsonRepresentable;
use crate::storage::JsonStorage;
use crate::value::JsonValue;

/// A named conversion between a domain type and a raw JSON representation.
pub trait JsonValueKey {
    /// The intermediate raw JSON type.
    type Raw: JsonRepresentable;

    /// The type made accessible by the strategy.
    type Value;

    /// Build the domain value from its raw form. Malformed input yields `None`.
    fn value_from(raw: Self::Raw) -> Option<Self::Value>;

    /// The raw form of a domain value.
    fn raw_value_for(value: &Self::Value) -> Self::Raw;
}

/// Adapter giving a strategy's domain value a direct JSON representation.
struct KeyedRepresentation<K: JsonValueKey> {
    value: K::Value,
    _key: PhantomData<K>,
}

impl<K: JsonValueKey> KeyedRepresentation<K> {
    fn new(value: K::Value) -> Self {
        Self {
            value,
            _key: PhantomData,
        }
    }
}

impl<K: JsonValueKey> JsonRepresentable for KeyedRepresentation<K> {
    fn from_json(json: &JsonValue) -> Option<Self> {
        let raw = K::Raw::from_json(json)?;
        match K::value_from(raw) {
            Some(value) => Some(Self::new(value)),
            None => {
                tracing::trace!(strategy = type_name::<K>(), "raw value rejected by strategy");
                None
            }
        }
    }

    fn to_json(&self) -> JsonValue {
        K::raw_value_for(&self.value).to_json()
    }
}

/// Strategy-typed accessors, available on every [`JsonStorage`].
pub trait KeyedStorage: JsonStorage {
    /// Read the whole stored value through strategy `K`.
    fn value_for<K>(&self) -> Option<K::Value>
    where
        K: JsonValueKey,
    {
        self.value::<KeyedRepresentation<K>>().map(|r| r.value)
    }

    /// Write the whole stored value through strategy `K`. `None` is a no-op.
    fn set_value_for<K>(&mut self, new_value: Option<K::Value>)
    where
        K: JsonValueKey,
    {
        self.set_value(new_value.map(KeyedRepresentation::<K>::new));
    }

    /// Read the child at `key` through strategy `K`.
    fn value_for_key<K>(&self, key: &str) -> Option<K::Value>
    where
        K: JsonValueKey,
    {
        self.get_as::<KeyedRepresentation<K>>(key).map(|r| r.value)
    }

    /// Write the child at `key` through strategy `K`. `None` removes the key,
    /// as with [`JsonStorage::set_as`].
    fn set_value_for_key<K>(&mut self, key: &str, new_value: Option<K::Value>) -> bool
    where
        K: JsonValueKey,
    {
        self.set_as(key, new_value.map(KeyedRepresentation::<K>::new))
    }
}

impl<S> KeyedStorage for S where S: JsonStorage + ?Sized {}
