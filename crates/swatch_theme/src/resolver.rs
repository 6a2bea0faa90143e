//! Key-path resolution and primitive accessors
//!
//! Lookup order for a dotted key:
//! 1. the theme's own dictionary,
//! 2. otherwise the parent theme, recursively; the first theme that defines
//!    the path wins outright,
//! 3. a mapping result then has its keys overridden by same-named keys of the
//!    mapping at the theme's optional key path.
//!
//! A string value may name another key path. Dictionary, string, float and
//! color lookups follow such chains up to the theme's indirection bound.

use crate::coerce;
use crate::theme::Theme;
use crate::value::{is_key_path, lookup_path, Map, Value};

impl Theme {
    // ========== Raw Lookup ==========

    /// Raw value at a dotted key path, searching the parent chain
    pub fn object(&self, key: &str) -> Option<Value> {
        let value = self.inherited_object(key)?;
        Some(self.apply_optional_key_path(value))
    }

    fn inherited_object(&self, key: &str) -> Option<Value> {
        if let Some(value) = lookup_path(self.raw_dictionary(), key) {
            return Some(value.clone());
        }
        let parent = self.parent()?;
        tracing::trace!(theme = %self.name(), parent = %parent.name(), key, "falling back to parent");
        parent.object(key)
    }

    fn apply_optional_key_path(&self, value: Value) -> Value {
        let mut map = match value {
            Value::Map(map) => map,
            other => return other,
        };
        let Some(path) = self.optional_key_path() else {
            return Value::Map(map);
        };
        // Read the override without applying it to itself.
        if let Some(Value::Map(overrides)) = self.inherited_object(path) {
            for (key, value) in overrides {
                if let Some(slot) = map.get_mut(&key) {
                    *slot = value;
                }
            }
        }
        Value::Map(map)
    }

    /// Mapping at a key path. A string found there is treated as the path of
    /// the mapping to use instead.
    pub fn dictionary(&self, key: &str) -> Option<Map> {
        self.dictionary_at_depth(key, 0)
    }

    /// Mapping for a nested raw value: mappings as-is, strings as key paths
    pub fn dictionary_from_value(&self, value: Option<&Value>) -> Option<Map> {
        match value? {
            Value::Map(map) => Some(map.clone()),
            Value::String(path) => self.dictionary_at_depth(path, 1),
            _ => None,
        }
    }

    fn dictionary_at_depth(&self, key: &str, depth: usize) -> Option<Map> {
        match self.object(key)? {
            Value::Map(map) => Some(map),
            Value::String(path) if self.may_follow(&path, depth) => {
                self.dictionary_at_depth(&path, depth + 1)
            }
            _ => None,
        }
    }

    /// Whether another indirection hop is allowed at `depth`
    pub(crate) fn may_follow(&self, path: &str, depth: usize) -> bool {
        if depth < self.max_indirection_depth() {
            return true;
        }
        tracing::warn!(
            theme = %self.name(),
            path,
            max_depth = self.max_indirection_depth(),
            "key path indirection too deep, giving up"
        );
        false
    }

    // ========== Membership ==========

    /// Whether the theme's own top-level dictionary has `key`
    pub fn contains_key(&self, key: &str) -> bool {
        self.raw_dictionary().contains_key(key)
    }

    /// Whether `key` resolves here or anywhere up the parent chain
    pub fn contains_or_inherits_key(&self, key: &str) -> bool {
        self.inherited_object(key).is_some()
    }

    // ========== Primitive Types ==========

    pub fn bool(&self, key: &str) -> bool {
        coerce::to_bool(self.object(key).as_ref())
    }

    pub fn bool_from_value(&self, value: Option<&Value>) -> bool {
        coerce::to_bool(value)
    }

    pub fn string(&self, key: &str) -> Option<String> {
        self.string_from_value(self.object(key).as_ref())
    }

    /// Strings and numbers as text. A string that names an existing key path
    /// resolves to the string found there.
    pub fn string_from_value(&self, value: Option<&Value>) -> Option<String> {
        self.string_at_depth(value, 0)
    }

    fn string_at_depth(&self, value: Option<&Value>, depth: usize) -> Option<String> {
        if let Some(Value::String(path)) = value {
            if is_key_path(path) && self.may_follow(path, depth) {
                let target = self.object(path);
                if let Some(nested) = self.string_at_depth(target.as_ref(), depth + 1) {
                    return Some(nested);
                }
            }
        }
        coerce::to_string_literal(value)
    }

    pub fn integer(&self, key: &str) -> i64 {
        coerce::to_integer(self.object(key).as_ref())
    }

    pub fn integer_from_value(&self, value: Option<&Value>) -> i64 {
        coerce::to_integer(value)
    }

    pub fn float(&self, key: &str) -> f32 {
        self.float_from_value(self.object(key).as_ref())
    }

    /// Numbers as `f32`. A string key path resolves to the number found there;
    /// anything else is `0`.
    pub fn float_from_value(&self, value: Option<&Value>) -> f32 {
        self.number_at_depth(value, 0) as f32
    }

    /// Seconds
    pub fn time_interval(&self, key: &str) -> f64 {
        self.time_interval_from_value(self.object(key).as_ref())
    }

    pub fn time_interval_from_value(&self, value: Option<&Value>) -> f64 {
        self.number_at_depth(value, 0)
    }

    fn number_at_depth(&self, value: Option<&Value>, depth: usize) -> f64 {
        match value {
            Some(Value::String(path)) if is_key_path(path) && self.may_follow(path, depth) => {
                let target = self.object(path);
                self.number_at_depth(target.as_ref(), depth + 1)
            }
            other => coerce::to_number(other).unwrap_or(0.0),
        }
    }

    /// Image name at `key`; empty strings count as absent
    pub fn image_name(&self, key: &str) -> Option<String> {
        self.string(key).filter(|name| !name.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Map;
    use std::sync::Arc;

    fn map(entries: Vec<(&str, Value)>) -> Map {
        entries.into_iter().map(|(k, v)| (k.to_string(), v)).collect()
    }

    #[test]
    fn override_cannot_introduce_keys() {
        let theme = Theme::new(
            "t",
            map(vec![
                ("base", Value::Map(map(vec![("color", "red".into()), ("size", 10.into())]))),
                (
                    "compact",
                    Value::Map(map(vec![("color", "blue".into()), ("weight", "bold".into())])),
                ),
            ]),
        )
        .with_optional_key_path("compact");

        let base = theme.dictionary("base").unwrap();
        assert_eq!(base.get("color"), Some(&Value::from("blue")));
        assert_eq!(base.get("size"), Some(&Value::Integer(10)));
        assert!(!base.contains_key("weight"));
    }

    #[test]
    fn dropped_parent_ends_the_chain() {
        let parent = Arc::new(Theme::new("p", map(vec![("a", 1.into())])));
        let child = Theme::new("c", Map::default()).with_parent(&parent);
        assert_eq!(child.integer("a"), 1);
        drop(parent);
        assert_eq!(child.object("a"), None);
    }

    #[test]
    fn cyclic_string_indirection_terminates() {
        let theme = Theme::new(
            "t",
            map(vec![
                ("a", Value::Map(map(vec![("x", "b.y".into())]))),
                ("b", Value::Map(map(vec![("y", "a.x".into())]))),
            ]),
        )
        .with_max_indirection_depth(4);

        assert_eq!(theme.dictionary("a.x"), None);
        assert_eq!(theme.float("a.x"), 0.0);
        // The literal at the last hop is returned once the bound is hit.
        assert!(theme.string("a.x").is_some());
    }
}
