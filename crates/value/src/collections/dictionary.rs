//! Ordered dictionary of key/value pairs
//!
//! The wire format is a JSON array of `{"key": .., "value": ..}` objects, so
//! this is a sequence, not a map: insertion order is kept and duplicate keys
//! are preserved. An *absent* dictionary (JSON `null` payload) is distinct
//! from an empty one.

use crate::core::value::Value;

/// A single dictionary entry
#[derive(Debug, Clone, PartialEq)]
pub struct KeyValuePair {
    pub key: Value,
    pub value: Value,
}

impl KeyValuePair {
    pub fn new(key: impl Into<Value>, value: impl Into<Value>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl From<(Value, Value)> for KeyValuePair {
    fn from((key, value): (Value, Value)) -> Self {
        Self { key, value }
    }
}

/// Dictionary payload. `Default` is the absent state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dictionary {
    entries: Option<Vec<KeyValuePair>>,
}

impl Dictionary {
    pub fn new(entries: Vec<KeyValuePair>) -> Self {
        Self {
            entries: Some(entries),
        }
    }

    /// Present but with no entries; encodes as `[]`
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// No entry sequence at all; encodes as `null`
    pub const fn absent() -> Self {
        Self { entries: None }
    }

    #[inline]
    pub fn is_absent(&self) -> bool {
        self.entries.is_none()
    }

    pub fn entries(&self) -> Option<&[KeyValuePair]> {
        self.entries.as_deref()
    }

    /// Iterate entries in insertion order; yields nothing when absent
    pub fn iter(&self) -> impl Iterator<Item = &KeyValuePair> {
        self.entries.iter().flatten()
    }

    pub fn len(&self) -> usize {
        self.entries.as_ref().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// First value stored under `key`
    pub fn get(&self, key: &Value) -> Option<&Value> {
        self.iter().find(|pair| &pair.key == key).map(|pair| &pair.value)
    }

    pub fn into_entries(self) -> Option<Vec<KeyValuePair>> {
        self.entries
    }
}

impl FromIterator<KeyValuePair> for Dictionary {
    fn from_iter<I: IntoIterator<Item = KeyValuePair>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl FromIterator<(Value, Value)> for Dictionary {
    fn from_iter<I: IntoIterator<Item = (Value, Value)>>(iter: I) -> Self {
        iter.into_iter().map(KeyValuePair::from).collect()
    }
}
