//! # jsonvalue
//!
//! A typesafe in-memory model of JSON with generic typed accessors.
//!
//! [`JsonValue`] is a closed enum over every JSON shape. Native types plug
//! into it through [`JsonRepresentable`], and anything holding a value
//! (the value itself, an object, an array, an `Option` of a storage, or your
//! own wrapper struct) gets the full accessor surface by implementing
//! [`JsonStorage`]. Domain types with more than one wire form, such as dates,
//! go through named strategies implementing [`JsonValueKey`].
//!
//! ## Quick start
//!
//! ```rust
//! use jsonvalue::prelude::*;
//!
//! let mut doc = codec::from_str(r#"{"name":"Alice","scores":[95,87,92]}"#).unwrap();
//!
//! assert_eq!(doc.get_as::<String>("name").as_deref(), Some("Alice"));
//! assert_eq!(doc.get("scores").get_index_as::<i64>(1), Some(87));
//! assert_eq!(doc.get("missing").get("deeper").get_index(0), None);
//!
//! doc.set_as("active", Some(true));
//! doc.set("name", None);
//! assert_eq!(codec::to_string(&doc).unwrap(), r#"{"active":true,"scores":[95,87,92]}"#);
//! ```
//!
//! ## Modules
//!
//! - [`value`] — the `JsonValue` enum, rendering, literal construction
//! - [`representable`] — direct native ↔ `JsonValue` conversion
//! - [`storage`] — the generic accessor surface
//! - [`path`] — dotted paths for nested reads and writes
//! - [`key`] — named conversion strategies and their accessors
//! - [`keys`] — date and URL strategies
//! - [`codec`] — JSON text encode/decode via serde
//! - [`error`] — error types for the codec boundary

pub mod codec;
pub mod error;
pub mod key;
#[cfg(any(feature = "chrono", feature = "url"))]
pub mod keys;
pub mod path;
pub mod representable;
pub mod storage;
pub mod value;

pub use error::{JsonValueError, Result};
pub use key::{JsonValueKey, KeyedStorage};
#[cfg(feature = "chrono")]
pub use keys::{DateKey, Iso8601DateKey};
#[cfg(any(feature = "chrono", feature = "url"))]
pub use keys::StandardAccessors;
#[cfg(feature = "url")]
pub use keys::UrlKey;
pub use path::{JsonPath, Seg};
pub use representable::JsonRepresentable;
pub use storage::JsonStorage;
pub use value::{JsonArray, JsonObject, JsonValue};

/// Everything needed to use the accessor surface.
pub mod prelude {
    pub use crate::codec;
    #[cfg(any(feature = "chrono", feature = "url"))]
    pub use crate::keys::StandardAccessors;
    pub use crate::{
        JsonArray, JsonObject, JsonPath, JsonRepresentable, JsonStorage, JsonValue, JsonValueKey,
        KeyedStorage,
    };
}
