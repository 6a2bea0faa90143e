//! Loosely-typed theme values
//!
//! A theme document is a nested mapping of string keys to strings, numbers,
//! booleans, lists, and further mappings. [`Value`] models exactly that, and
//! [`lookup_path`] walks it with dotted key paths such as `"screen.title.color"`.

use rustc_hash::FxHashMap;
use serde::Deserialize;
use smallvec::SmallVec;

/// A theme dictionary
pub type Map = FxHashMap<String, Value>;

/// Separator between key path segments
pub const KEY_PATH_SEPARATOR: char = '.';

/// A raw value read from a theme document
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    List(Vec<Value>),
    Map(Map),
}

impl Value {
    /// Short name of the variant, for log messages
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Bool(_) => "bool",
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::List(_) => "list",
            Value::Map(_) => "map",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&Map> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn into_map(self) -> Option<Map> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(list) => Some(list),
            _ => None,
        }
    }

    /// Numeric view of the value. Booleans count as `1` and `0`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            Value::Integer(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn is_map(&self) -> bool {
        matches!(self, Value::Map(_))
    }

    /// Walk a dotted key path below this value
    pub fn lookup(&self, path: &str) -> Option<&Value> {
        lookup_path(self.as_map()?, path)
    }
}

/// Split a key path into its segments
pub fn key_path_segments(path: &str) -> SmallVec<[&str; 8]> {
    path.split(KEY_PATH_SEPARATOR).collect()
}

/// Whether a string reads as a multi-segment key path
pub fn is_key_path(s: &str) -> bool {
    s.contains(KEY_PATH_SEPARATOR)
}

/// Look a dotted key path up in a dictionary.
///
/// Each segment descends one mapping level. A segment that lands on anything
/// other than a mapping before the path is exhausted yields `None`.
pub fn lookup_path<'a>(map: &'a Map, path: &str) -> Option<&'a Value> {
    let segments = key_path_segments(path);
    let (last, parents) = segments.split_last()?;

    let mut current = map;
    for segment in parents {
        current = current.get(*segment)?.as_map()?;
    }
    current.get(*last)
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Integer(value as i64)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(value as f64)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::List(value)
    }
}

impl From<Map> for Value {
    fn from(value: Map) -> Self {
        Value::Map(value)
    }
}
