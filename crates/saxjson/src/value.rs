//! JSON value types and the canonical text writer.
//!
//! This module defines the [`Value`] enum, which represents any valid JSON
//! value, the insertion-ordered [`Map`] used for objects, and the
//! [`Display`](core::fmt::Display) implementation that renders a tree back to
//! JSON text.
use alloc::{string::String, vec::Vec};
use core::fmt::{self, Write as _};

/// The element storage of [`Value::Array`].
pub type Array = Vec<Value>;

/// A JSON value as defined by [RFC 8259].
///
/// Numbers keep the integer/float distinction of their source literal:
/// `1` is an [`Integer`](Value::Integer) while `1.0` and `1e0` are
/// [`Float`](Value::Float)s.
///
/// # Examples
///
/// ```
/// use saxjson::{Map, Value};
///
/// let mut map = Map::new();
/// map.insert("key".into(), Value::String("value".into()));
/// map.insert("n".into(), Value::Integer(3));
/// let v = Value::Object(map);
/// assert_eq!(v.to_string(), r#"{"key": "value", "n": 3}"#);
/// ```
///
/// [RFC 8259]: https://datatracker.ietf.org/doc/html/rfc8259
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(any(test, feature = "serde"), serde(untagged))]
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    /// The literal `null`.
    #[default]
    Null,
    /// `true` or `false`.
    Boolean(bool),
    /// A number literal with no fraction or exponent.
    Integer(i64),
    /// A number literal with a fraction or an exponent.
    Float(f64),
    /// A string, decoded to UTF-8.
    String(String),
    /// An ordered sequence of values.
    Array(Array),
    /// String keys mapped to values, in insertion order.
    Object(Map),
}

/// The tag of a [`Value`], without its payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// [`Value::Null`]
    Null,
    /// [`Value::Boolean`]
    Boolean,
    /// [`Value::Integer`]
    Integer,
    /// [`Value::Float`]
    Float,
    /// [`Value::String`]
    String,
    /// [`Value::Array`]
    Array,
    /// [`Value::Object`]
    Object,
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.into())
    }
}

impl From<Array> for Value {
    fn from(v: Array) -> Self {
        Self::Array(v)
    }
}

impl From<Map> for Value {
    fn from(v: Map) -> Self {
        Self::Object(v)
    }
}

impl core::str::FromStr for Value {
    type Err = crate::ParserError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse(s)
    }
}

impl Value {
    /// Returns the tag of this value.
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::Boolean(_) => ValueKind::Boolean,
            Self::Integer(_) => ValueKind::Integer,
            Self::Float(_) => ValueKind::Float,
            Self::String(_) => ValueKind::String,
            Self::Array(_) => ValueKind::Array,
            Self::Object(_) => ValueKind::Object,
        }
    }

    /// Returns `true` if the value is [`Null`].
    ///
    /// [`Null`]: Value::Null
    ///
    /// # Examples
    ///
    /// ```
    /// use saxjson::Value;
    ///
    /// assert!(Value::Null.is_null());
    /// assert!(!Value::Boolean(false).is_null());
    /// ```
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` if the value is [`Boolean`].
    ///
    /// [`Boolean`]: Value::Boolean
    #[must_use]
    pub fn is_bool(&self) -> bool {
        matches!(self, Self::Boolean(..))
    }

    /// Returns `true` if the value is an [`Integer`] or a [`Float`].
    ///
    /// [`Integer`]: Value::Integer
    /// [`Float`]: Value::Float
    #[must_use]
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Integer(..) | Self::Float(..))
    }

    /// Returns `true` if the value is [`String`].
    ///
    /// [`String`]: Value::String
    #[must_use]
    pub fn is_string(&self) -> bool {
        matches!(self, Self::String(..))
    }

    /// Returns `true` if the value is [`Array`].
    ///
    /// [`Array`]: Value::Array
    #[must_use]
    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(..))
    }

    /// Returns `true` if the value is [`Object`].
    ///
    /// [`Object`]: Value::Object
    #[must_use]
    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(..))
    }

    /// Returns the boolean payload, or `None` for any other tag.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        if let Self::Boolean(b) = self {
            Some(*b)
        } else {
            None
        }
    }

    /// Returns the integer payload, or `None` for any other tag.
    ///
    /// Floats are not converted, even when they hold a whole number.
    ///
    /// # Examples
    ///
    /// ```
    /// use saxjson::Value;
    ///
    /// assert_eq!(Value::Integer(7).as_i64(), Some(7));
    /// assert_eq!(Value::Float(7.0).as_i64(), None);
    /// ```
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        if let Self::Integer(n) = self {
            Some(*n)
        } else {
            None
        }
    }

    /// Returns the float payload, or `None` for any other tag.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        if let Self::Float(n) = self {
            Some(*n)
        } else {
            None
        }
    }

    /// Returns the string payload, or `None` for any other tag.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        if let Self::String(s) = self {
            Some(s)
        } else {
            None
        }
    }

    /// Returns the elements of an array, or `None` for any other tag.
    #[must_use]
    pub fn as_array(&self) -> Option<&Array> {
        if let Self::Array(a) = self {
            Some(a)
        } else {
            None
        }
    }

    /// Mutable variant of [`Value::as_array`].
    pub fn as_array_mut(&mut self) -> Option<&mut Array> {
        if let Self::Array(a) = self {
            Some(a)
        } else {
            None
        }
    }

    /// Returns the members of an object, or `None` for any other tag.
    #[must_use]
    pub fn as_object(&self) -> Option<&Map> {
        if let Self::Object(m) = self {
            Some(m)
        } else {
            None
        }
    }

    /// Mutable variant of [`Value::as_object`].
    pub fn as_object_mut(&mut self) -> Option<&mut Map> {
        if let Self::Object(m) = self {
            Some(m)
        } else {
            None
        }
    }

    /// Looks up `key` when this value is an object.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object().and_then(|m| m.get(key))
    }

    /// Looks up element `index` when this value is an array.
    #[must_use]
    pub fn get_index(&self, index: usize) -> Option<&Value> {
        self.as_array().and_then(|a| a.get(index))
    }
}

/// An insertion-ordered map from string keys to [`Value`]s.
///
/// Lookups are linear; JSON objects are usually small and the order of
/// members is part of what a round trip must preserve. Inserting an existing
/// key replaces its value in place.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Map {
    entries: Vec<(String, Value)>,
}

impl Map {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty map with room for `capacity` members.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Inserts a member, returning the value it replaced.
    ///
    /// A replaced member keeps its original position.
    pub fn insert(&mut self, key: String, value: Value) -> Option<Value> {
        if let Some(slot) = self.get_mut(&key) {
            return Some(core::mem::replace(slot, value));
        }
        self.entries.push((key, value));
        None
    }

    /// Returns the value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find_map(|(k, v)| (k == key).then_some(v))
    }

    /// Returns a mutable reference to the value stored under `key`.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.entries
            .iter_mut()
            .find_map(|(k, v)| (k == key).then_some(v))
    }

    /// Returns `true` if the map holds `key`.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Removes `key`, preserving the order of the remaining members.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        let index = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(index).1)
    }

    /// Number of members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the map has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over members in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterates over keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Map {
    fn from_iter<T: IntoIterator<Item = (K, Value)>>(iter: T) -> Self {
        let mut map = Map::new();
        for (k, v) in iter {
            map.insert(k.into(), v);
        }
        map
    }
}

impl<K: Into<String>, const N: usize> From<[(K, Value); N]> for Map {
    fn from(entries: [(K, Value); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl IntoIterator for Map {
    type Item = (String, Value);
    type IntoIter = alloc::vec::IntoIter<(String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

// A `Map` serializes as a JSON object rather than as its entry list.
#[cfg(any(test, feature = "serde"))]
mod serde_impls {
    use alloc::string::String;
    use core::fmt;

    use serde::{
        Deserialize, Deserializer, Serialize, Serializer,
        de::{MapAccess, Visitor},
        ser::SerializeMap,
    };

    use super::{Map, Value};

    impl Serialize for Map {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            let mut map = serializer.serialize_map(Some(self.len()))?;
            for (k, v) in self.iter() {
                map.serialize_entry(k, v)?;
            }
            map.end()
        }
    }

    struct MapVisitor;

    impl<'de> Visitor<'de> for MapVisitor {
        type Value = Map;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a JSON object")
        }

        fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut map = Map::with_capacity(access.size_hint().unwrap_or(0));
            while let Some((k, v)) = access.next_entry::<String, Value>()? {
                map.insert(k, v);
            }
            Ok(map)
        }
    }

    impl<'de> Deserialize<'de> for Map {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            deserializer.deserialize_map(MapVisitor)
        }
    }
}

/// Escapes a string for inclusion in a JSON string literal.
///
/// Quotes, backslashes, control characters (<= U+001F and other BMP control
/// characters) and the Unicode line separators are written as escapes so that
/// the output re-parses to the same string.
pub(crate) fn write_escaped_string<W: fmt::Write>(src: &str, f: &mut W) -> fmt::Result {
    for c in src.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            // Escape Unicode line separators which pre-2019 JSON parsers may not handle correctly
            '\u{2028}' | '\u{2029}' => {
                write!(f, "\\u{:04X}", c as u32)?;
            }
            c if c.is_ascii_control() || c.is_control() && c as u32 <= 0xFFFF => {
                write!(f, "\\u{:04X}", c as u32)?;
            }
            _ => f.write_char(c)?,
        }
    }
    Ok(())
}

fn write_float<W: fmt::Write>(n: f64, f: &mut W) -> fmt::Result {
    if !n.is_finite() {
        // JSON has no spelling for NaN or the infinities.
        return f.write_str("null");
    }
    // `Debug` always keeps a `.0` or an exponent, so the text re-parses as a
    // float, and it prints the shortest representation that round-trips.
    write!(f, "{n:?}")
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Boolean(b) => f.write_str(if *b { "true" } else { "false" }),
            Value::Integer(n) => write!(f, "{n}"),
            Value::Float(n) => write_float(*n, f),
            Value::String(s) => {
                f.write_char('"')?;
                write_escaped_string(s, f)?;
                f.write_char('"')
            }
            Value::Array(arr) => {
                f.write_char('[')?;
                let mut separator = "";
                for v in arr {
                    f.write_str(separator)?;
                    write!(f, "{v}")?;
                    separator = ", ";
                }
                f.write_char(']')
            }
            Value::Object(map) => {
                f.write_char('{')?;
                let mut separator = "";
                for (k, v) in map.iter() {
                    f.write_str(separator)?;
                    f.write_char('"')?;
                    write_escaped_string(k, f)?;
                    write!(f, "\": {v}")?;
                    separator = ", ";
                }
                f.write_char('}')
            }
        }
    }
}
