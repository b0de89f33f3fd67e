//! Property values
//!
//! Ordered property mapping used for normalized element attributes and
//! merged widget props. Insertion order is preserved; overwriting a key
//! keeps its original position.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;

/// A single property value
#[derive(Debug, Clone, PartialEq)]
pub enum PropValue {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    List(Vec<PropValue>),
    /// Nested mapping (inline style object, keyed arguments)
    Map(PropertyMap),
}

impl PropValue {
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, PropValue::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PropValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            PropValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[PropValue]> {
        match self {
            PropValue::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&PropertyMap> {
        match self {
            PropValue::Map(map) => Some(map),
            _ => None,
        }
    }
}

impl From<&str> for PropValue {
    fn from(s: &str) -> Self {
        PropValue::String(s.to_string())
    }
}

impl From<String> for PropValue {
    fn from(s: String) -> Self {
        PropValue::String(s)
    }
}

impl From<bool> for PropValue {
    fn from(b: bool) -> Self {
        PropValue::Bool(b)
    }
}

impl From<f64> for PropValue {
    fn from(n: f64) -> Self {
        PropValue::Number(n)
    }
}

impl From<i32> for PropValue {
    fn from(n: i32) -> Self {
        PropValue::Number(f64::from(n))
    }
}

impl From<Vec<PropValue>> for PropValue {
    fn from(items: Vec<PropValue>) -> Self {
        PropValue::List(items)
    }
}

impl From<PropertyMap> for PropValue {
    fn from(map: PropertyMap) -> Self {
        PropValue::Map(map)
    }
}

impl From<serde_json::Value> for PropValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => PropValue::Null,
            Value::Bool(b) => PropValue::Bool(b),
            Value::Number(n) => n.as_f64().map_or(PropValue::Null, PropValue::Number),
            Value::String(s) => PropValue::String(s),
            Value::Array(items) => PropValue::List(items.into_iter().map(PropValue::from).collect()),
            Value::Object(fields) => PropValue::Map(
                fields
                    .into_iter()
                    .map(|(k, v)| (k, PropValue::from(v)))
                    .collect(),
            ),
        }
    }
}

/// Largest magnitude below which every integer is exact in an `f64`
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

impl Serialize for PropValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PropValue::Null => serializer.serialize_unit(),
            PropValue::Bool(b) => serializer.serialize_bool(*b),
            // Integral values go out as integers (`2024`, not `2024.0`)
            PropValue::Number(n) if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER => {
                serializer.serialize_i64(*n as i64)
            }
            PropValue::Number(n) => serializer.serialize_f64(*n),
            PropValue::String(s) => serializer.serialize_str(s),
            PropValue::List(items) => items.serialize(serializer),
            PropValue::Map(map) => map.serialize(serializer),
        }
    }
}

/// Ordered property mapping
#[derive(Debug, Clone, Default)]
pub struct PropertyMap {
    entries: Vec<(String, PropValue)>,
    by_name: HashMap<String, usize>,
}

impl PropertyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of properties
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get a property value
    pub fn get(&self, name: &str) -> Option<&PropValue> {
        self.by_name.get(name).map(|&i| &self.entries[i].1)
    }

    /// Get a mutable property value
    pub fn get_mut(&mut self, name: &str) -> Option<&mut PropValue> {
        let index = *self.by_name.get(name)?;
        Some(&mut self.entries[index].1)
    }

    /// Get a string property
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(PropValue::as_str)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Set a property, returning the previous value
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<PropValue>) -> Option<PropValue> {
        let name = name.into();
        let value = value.into();
        if let Some(&index) = self.by_name.get(&name) {
            Some(std::mem::replace(&mut self.entries[index].1, value))
        } else {
            self.by_name.insert(name.clone(), self.entries.len());
            self.entries.push((name, value));
            None
        }
    }

    /// Remove a property
    pub fn remove(&mut self, name: &str) -> Option<PropValue> {
        let index = self.by_name.remove(name)?;
        // Update indices for items after removed
        for idx in self.by_name.values_mut() {
            if *idx > index {
                *idx -= 1;
            }
        }
        Some(self.entries.remove(index).1)
    }

    /// Copy every property of `other` over this map
    pub fn merge(&mut self, other: PropertyMap) {
        for (name, value) in other.entries {
            self.insert(name, value);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }
}

impl PartialEq for PropertyMap {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<K: Into<String>, V: Into<PropValue>> FromIterator<(K, V)> for PropertyMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = PropertyMap::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

impl IntoIterator for PropertyMap {
    type Item = (String, PropValue);
    type IntoIter = std::vec::IntoIter<(String, PropValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl Serialize for PropertyMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}
