//! Generic typed accessors over anything that holds a [`JsonValue`].
//!
//! A type opts in by implementing the two required methods of
//! [`JsonStorage`]; every accessor below is then available on it. Accessors
//! work by copy-in/copy-out: a write reads the current value, builds the new
//! whole value and hands it back through [`JsonStorage::set_json_value`].
//!
//! Reads never fail loudly. A shape mismatch, a missing key or an
//! out-of-range index all read as `None`. Writes preserve the existing value
//! when they cannot be applied.

use std::borrow::Cow;

use crate::path::{self, JsonPath, Seg};
use crate::representable::JsonRepresentable;
use crate::value::{JsonArray, JsonObject, JsonValue};

/// A type capable of storing a [`JsonValue`].
///
/// # Examples
///
/// A proxy storage forwarding to an inner document:
///
/// ```
/// use std::borrow::Cow;
/// use jsonvalue::{JsonStorage, JsonValue};
///
/// struct Profile {
///     json: JsonValue,
/// }
///
/// impl JsonStorage for Profile {
///     fn json_value(&self) -> Cow<'_, JsonValue> {
///         Cow::Borrowed(&self.json)
///     }
///
///     fn set_json_value(&mut self, value: JsonValue) {
///         self.json = value;
///     }
/// }
///
/// let mut profile = Profile { json: [("name", "Ada")].into_iter().collect() };
/// assert_eq!(profile.get_as::<String>("name").as_deref(), Some("Ada"));
///
/// profile.set_as("age", Some(36_i64));
/// assert_eq!(profile.get_as::<i64>("age"), Some(36));
/// ```
pub trait JsonStorage {
    /// The value represented by the receiver.
    fn json_value(&self) -> Cow<'_, JsonValue>;

    /// Replace the value represented by the receiver.
    ///
    /// Implementations may ignore values they cannot hold (a `JsonObject`
    /// ignores anything but an object).
    fn set_json_value(&mut self, value: JsonValue);

    // ------------------------------------------------------------------
    // Whole-value access
    // ------------------------------------------------------------------

    /// Convert the whole stored value to `T`.
    fn value<T>(&self) -> Option<T>
    where
        T: JsonRepresentable,
    {
        T::from_json(&self.json_value())
    }

    /// Replace the whole stored value. `None` is a no-op, never a clear.
    fn set_value<T>(&mut self, new_value: Option<T>)
    where
        T: JsonRepresentable,
    {
        if let Some(new_value) = new_value {
            self.set_json_value(new_value.to_json());
        }
    }

    fn bool_value(&self) -> Option<bool> {
        self.value()
    }

    fn set_bool_value(&mut self, new_value: Option<bool>) {
        self.set_value(new_value);
    }

    fn int_value(&self) -> Option<i64> {
        self.value()
    }

    fn set_int_value(&mut self, new_value: Option<i64>) {
        self.set_value(new_value);
    }

    fn double_value(&self) -> Option<f64> {
        self.value()
    }

    fn set_double_value(&mut self, new_value: Option<f64>) {
        self.set_value(new_value);
    }

    fn string_value(&self) -> Option<String> {
        self.value()
    }

    fn set_string_value(&mut self, new_value: Option<String>) {
        self.set_value(new_value);
    }

    fn object_value(&self) -> Option<JsonObject> {
        self.value()
    }

    fn set_object_value(&mut self, new_value: Option<JsonObject>) {
        self.set_value(new_value);
    }

    fn array_value(&self) -> Option<JsonArray> {
        self.value()
    }

    fn set_array_value(&mut self, new_value: Option<JsonArray>) {
        self.set_value(new_value);
    }

    // ------------------------------------------------------------------
    // Keyed access
    // ------------------------------------------------------------------

    /// The child at `key`, if the stored value is an object holding it.
    fn get(&self, key: &str) -> Option<JsonValue> {
        match self.json_value().as_ref() {
            JsonValue::Object(map) => map.get(key).cloned(),
            _ => None,
        }
    }

    /// Insert or overwrite `key`, or remove it when `new_value` is `None`.
    ///
    /// Returns `false`, leaving the value untouched, when the stored value is
    /// not an object.
    fn set(&mut self, key: &str, new_value: Option<JsonValue>) -> bool {
        write_through(self, &[Seg::Key(key.to_owned())], new_value)
    }

    /// Remove `key`, returning the value it held.
    fn remove(&mut self, key: &str) -> Option<JsonValue> {
        let removed = self.get(key)?;
        self.set(key, None);
        Some(removed)
    }

    fn contains_key(&self, key: &str) -> bool {
        matches!(self.json_value().as_ref(), JsonValue::Object(map) if map.contains_key(key))
    }

    /// Object keys in sorted order; empty for anything but an object.
    fn keys(&self) -> Vec<String> {
        match self.json_value().as_ref() {
            JsonValue::Object(map) => map.keys().cloned().collect(),
            _ => Vec::new(),
        }
    }

    /// Entry count of an object or element count of an array.
    fn len(&self) -> Option<usize> {
        match self.json_value().as_ref() {
            JsonValue::Object(map) => Some(map.len()),
            JsonValue::Array(items) => Some(items.len()),
            _ => None,
        }
    }

    /// The child at `key` converted to `T`.
    ///
    /// A missing key reads like `null`, so `Option<U>` targets see `Some(None)`.
    fn get_as<T>(&self, key: &str) -> Option<T>
    where
        T: JsonRepresentable,
    {
        self.get(key).value()
    }

    /// Convert `new_value` and write it at `key`. `None` removes the key.
    fn set_as<T>(&mut self, key: &str, new_value: Option<T>) -> bool
    where
        T: JsonRepresentable,
    {
        self.set(key, new_value.map(|v| v.to_json()))
    }

    // ------------------------------------------------------------------
    // Indexed access
    // ------------------------------------------------------------------

    /// The element at `index`, if the stored value is an array long enough.
    fn get_index(&self, index: usize) -> Option<JsonValue> {
        match self.json_value().as_ref() {
            // Slice lookup; `Vec` is itself a storage with a keyed `get`.
            JsonValue::Array(items) => items.as_slice().get(index).cloned(),
            _ => None,
        }
    }

    /// Replace the element at `index`, or remove it when `new_value` is `None`.
    ///
    /// The index must already exist; there is no append-by-index. An
    /// out-of-range index or a non-array value makes this a no-op returning
    /// `false`.
    fn set_index(&mut self, index: usize, new_value: Option<JsonValue>) -> bool {
        write_through(self, &[Seg::Index(index)], new_value)
    }

    fn get_index_as<T>(&self, index: usize) -> Option<T>
    where
        T: JsonRepresentable,
    {
        self.get_index(index).value()
    }

    fn set_index_as<T>(&mut self, index: usize, new_value: Option<T>) -> bool
    where
        T: JsonRepresentable,
    {
        self.set_index(index, new_value.map(|v| v.to_json()))
    }

    // ------------------------------------------------------------------
    // Path access
    // ------------------------------------------------------------------

    /// The value at `path`. The empty path yields the whole value.
    fn get_path(&self, path: &JsonPath) -> Option<JsonValue> {
        path::lookup(self.json_value().as_ref(), path.segments()).cloned()
    }

    fn get_path_as<T>(&self, path: &JsonPath) -> Option<T>
    where
        T: JsonRepresentable,
    {
        self.get_path(path).value()
    }

    /// Write at `path`, with the keyed/indexed semantics of its last segment.
    ///
    /// Intermediate containers are never created. The empty path behaves like
    /// a whole-value setter: `None` is a no-op. A root write reports `true`
    /// only when the storage holds the written value afterwards, so a
    /// `JsonObject` handed an `Int` returns `false`.
    fn set_path(&mut self, path: &JsonPath, new_value: Option<JsonValue>) -> bool {
        if path.is_empty() {
            let Some(value) = new_value else {
                return false;
            };
            self.set_json_value(value.clone());
            let applied = *self.json_value() == value;
            if !applied {
                tracing::trace!(found = value.type_name(), "root write not held by storage");
            }
            return applied;
        }
        write_through(self, path.segments(), new_value)
    }
}

/// Copy the stored value, apply the write, and store the result back.
fn write_through<S>(storage: &mut S, segments: &[Seg], new_value: Option<JsonValue>) -> bool
where
    S: JsonStorage + ?Sized,
{
    let mut value = storage.json_value().into_owned();
    if path::write(&mut value, segments, new_value) {
        storage.set_json_value(value);
        true
    } else {
        tracing::trace!(
            path = %JsonPath::from_segments(segments.to_vec()),
            found = value.type_name(),
            "write ignored: path not writable"
        );
        false
    }
}

// ============================================================================
// Storage implementations
// ============================================================================

impl JsonStorage for JsonValue {
    fn json_value(&self) -> Cow<'_, JsonValue> {
        Cow::Borrowed(self)
    }

    fn set_json_value(&mut self, value: JsonValue) {
        *self = value;
    }
}

impl JsonStorage for JsonObject {
    fn json_value(&self) -> Cow<'_, JsonValue> {
        Cow::Owned(JsonValue::Object(self.clone()))
    }

    fn set_json_value(&mut self, value: JsonValue) {
        match value {
            JsonValue::Object(map) => *self = map,
            other => tracing::trace!(found = other.type_name(), "object storage ignored write"),
        }
    }
}

impl JsonStorage for JsonArray {
    fn json_value(&self) -> Cow<'_, JsonValue> {
        Cow::Owned(JsonValue::Array(self.clone()))
    }

    fn set_json_value(&mut self, value: JsonValue) {
        match value {
            JsonValue::Array(items) => *self = items,
            other => tracing::trace!(found = other.type_name(), "array storage ignored write"),
        }
    }
}

/// An optional storage is itself a storage.
///
/// `None` reads as `JsonValue::Null`, and writes to `None` are dropped since
/// there is nothing to write into. This is what makes chained lookups such as
/// `doc.get("a").get("b").get_index(0)` safe.
impl<S> JsonStorage for Option<S>
where
    S: JsonStorage,
{
    fn json_value(&self) -> Cow<'_, JsonValue> {
        match self {
            Some(wrapped) => wrapped.json_value(),
            None => Cow::Owned(JsonValue::Null),
        }
    }

    fn set_json_value(&mut self, value: JsonValue) {
        match self {
            Some(wrapped) => wrapped.set_json_value(value),
            None => tracing::trace!(found = value.type_name(), "write to absent storage dropped"),
        }
    }
}
