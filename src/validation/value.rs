//! Field value objects

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Bool(bool),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

impl FieldValue {
    /// Get the text value (None for boolean values)
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            FieldValue::Bool(_) => None,
        }
    }

    /// Get the boolean value (None for text values)
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Bool(b) => Some(*b),
            FieldValue::Text(_) => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

/// Declared type of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Boolean,
}

impl FieldKind {
    /// Coerce a raw input value (possibly missing) to this kind.
    ///
    /// Missing text is `""` and a missing flag is `false`, which is what an
    /// untouched input or checkbox holds.
    pub fn coerce(self, raw: Option<&FieldValue>) -> FieldValue {
        match (self, raw) {
            (FieldKind::Text, None) => FieldValue::Text(String::new()),
            (FieldKind::Text, Some(FieldValue::Text(s))) => FieldValue::Text(s.clone()),
            (FieldKind::Text, Some(FieldValue::Bool(b))) => FieldValue::Text(b.to_string()),
            (FieldKind::Boolean, None) => FieldValue::Bool(false),
            (FieldKind::Boolean, Some(FieldValue::Bool(b))) => FieldValue::Bool(*b),
            (FieldKind::Boolean, Some(FieldValue::Text(s))) => {
                FieldValue::Bool(matches!(s.as_str(), "true" | "on"))
            }
        }
    }
}

/// Raw input values keyed by field name, as edited by the user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldValues(BTreeMap<String, FieldValue>);

impl FieldValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.0.get(name)
    }

    /// Get a text value, empty for missing or boolean fields
    pub fn text(&self, name: &str) -> &str {
        self.0.get(name).and_then(FieldValue::as_text).unwrap_or("")
    }

    /// Get a flag value, false for missing or text fields
    pub fn flag(&self, name: &str) -> bool {
        self.0.get(name).and_then(FieldValue::as_bool).unwrap_or(false)
    }

    pub fn set(&mut self, name: &str, value: impl Into<FieldValue>) {
        self.0.insert(name.to_string(), value.into());
    }

    /// Builder-style `set`
    pub fn with(mut self, name: &str, value: impl Into<FieldValue>) -> Self {
        self.set(name, value);
        self
    }

    /// Append a character to a text field, creating it if missing
    pub fn push_char(&mut self, name: &str, c: char) {
        match self.0.entry(name.to_string()).or_default() {
            FieldValue::Text(s) => s.push(c),
            v @ FieldValue::Bool(_) => *v = FieldValue::Text(c.to_string()),
        }
    }

    /// Remove the last character of a text field
    pub fn pop_char(&mut self, name: &str) {
        if let Some(FieldValue::Text(s)) = self.0.get_mut(name) {
            s.pop();
        }
    }

    /// Flip a flag field; a missing or text field becomes `true`
    pub fn toggle(&mut self, name: &str) {
        let next = !self.flag(name);
        self.0.insert(name.to_string(), FieldValue::Bool(next));
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Validated values, one entry per schema field, coerced to declared kinds
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Record(BTreeMap<String, FieldValue>);

impl Record {
    pub(crate) fn insert(&mut self, name: &str, value: FieldValue) {
        self.0.insert(name.to_string(), value);
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.0.get(name)
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        self.0.get(name).and_then(FieldValue::as_text)
    }

    pub fn flag(&self, name: &str) -> Option<bool> {
        self.0.get(name).and_then(FieldValue::as_bool)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Convert into a typed struct through its serde representation
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::to_value(self).and_then(serde_json::from_value)
    }
}

/// Error message per field name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    /// Record an error unless the field already has one
    pub(crate) fn insert_first(&mut self, name: &str, message: &str) {
        self.0
            .entry(name.to_string())
            .or_insert_with(|| message.to_string());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}
