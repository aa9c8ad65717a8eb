//! Paths into a `JsonValue` tree.
//!
//! A path is a sequence of segments, each either an object key or an array
//! index. Paths parse from dotted text where purely numeric segments are
//! indices: `"items.0.name"` is `[Key("items"), Index(0), Key("name")]`.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::value::JsonValue;

/// A single segment in a [`JsonPath`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Seg {
    /// Object key access.
    Key(String),
    /// Array index access.
    Index(usize),
}

impl fmt::Display for Seg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Seg::Key(k) => write!(f, ".{k}"),
            Seg::Index(i) => write!(f, "[{i}]"),
        }
    }
}

impl From<&str> for Seg {
    fn from(s: &str) -> Self {
        Seg::Key(s.to_owned())
    }
}

impl From<String> for Seg {
    fn from(s: String) -> Self {
        Seg::Key(s)
    }
}

impl From<usize> for Seg {
    fn from(i: usize) -> Self {
        Seg::Index(i)
    }
}

/// A location inside a JSON document. The empty path is the whole document.
///
/// ```
/// use jsonvalue::JsonPath;
///
/// let path = JsonPath::root().key("users").index(0).key("name");
/// assert_eq!(path.len(), 3);
/// assert_eq!(path, "users.0.name".parse::<JsonPath>().unwrap());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct JsonPath(Vec<Seg>);

impl JsonPath {
    /// The empty path.
    pub fn root() -> Self {
        Self(Vec::new())
    }

    pub fn from_segments(segments: Vec<Seg>) -> Self {
        Self(segments)
    }

    /// Append a key segment (builder).
    pub fn key(mut self, k: impl Into<String>) -> Self {
        self.0.push(Seg::Key(k.into()));
        self
    }

    /// Append an index segment (builder).
    pub fn index(mut self, i: usize) -> Self {
        self.0.push(Seg::Index(i));
        self
    }

    pub fn segments(&self) -> &[Seg] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for JsonPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("$")?;
        for seg in &self.0 {
            write!(f, "{seg}")?;
        }
        Ok(())
    }
}

/// Parsing never fails: the empty string is the root, numeric segments are
/// indices and everything else is a key.
impl FromStr for JsonPath {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Ok(Self::root());
        }
        Ok(Self(
            s.split('.')
                .map(|part| match part.parse::<usize>() {
                    Ok(i) if !part.starts_with('+') => Seg::Index(i),
                    _ => Seg::Key(part.to_owned()),
                })
                .collect(),
        ))
    }
}

impl From<Vec<Seg>> for JsonPath {
    fn from(segments: Vec<Seg>) -> Self {
        Self(segments)
    }
}

// ============================================================================
// Traversal
// ============================================================================

/// Follow `segments` from `value`. Any mismatch along the way yields `None`.
pub(crate) fn lookup<'a>(value: &'a JsonValue, segments: &[Seg]) -> Option<&'a JsonValue> {
    segments.iter().try_fold(value, |current, seg| match (current, seg) {
        (JsonValue::Object(map), Seg::Key(k)) => map.get(k),
        (JsonValue::Array(items), Seg::Index(i)) => items.get(*i),
        _ => None,
    })
}

/// Write `new_value` at the non-empty path `segments` below `value`.
///
/// The final segment decides the operation: a key inserts, overwrites or
/// (for `None`) removes; an index replaces or (for `None`) removes an existing
/// element. Intermediate containers must already exist. Returns `false` and
/// leaves `value` untouched when the write cannot be applied.
pub(crate) fn write(value: &mut JsonValue, segments: &[Seg], new_value: Option<JsonValue>) -> bool {
    let Some((last, parents)) = segments.split_last() else {
        return false;
    };
    let mut current = value;
    for seg in parents {
        let next = match (current, seg) {
            (JsonValue::Object(map), Seg::Key(k)) => map.get_mut(k),
            (JsonValue::Array(items), Seg::Index(i)) => items.get_mut(*i),
            _ => None,
        };
        match next {
            Some(child) => current = child,
            None => return false,
        }
    }

    match (current, last) {
        (JsonValue::Object(map), Seg::Key(k)) => {
            match new_value {
                Some(v) => {
                    map.insert(k.clone(), v);
                }
                None => {
                    map.remove(k);
                }
            }
            true
        }
        (JsonValue::Array(items), Seg::Index(i)) if *i < items.len() => {
            match new_value {
                Some(v) => items[*i] = v,
                None => {
                    items.remove(*i);
                }
            }
            true
        }
        _ => false,
    }
}
