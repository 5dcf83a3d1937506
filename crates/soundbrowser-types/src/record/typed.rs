use serde::Serialize;
use std::collections::BTreeMap;

use super::value::{TypeTag, TypedValue};

/// Ordered field-name → value map.
///
/// Backed by a `BTreeMap`, so field names are unique and always iterate in
/// ascending order no matter how the record was assembled. Two equal records
/// therefore encode to identical key listings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TypedRecord {
    fields: BTreeMap<String, TypedValue>,
}

impl TypedRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<TypedValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Insert a field, returning the previous value if the name was taken.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        value: impl Into<TypedValue>,
    ) -> Option<TypedValue> {
        self.fields.insert(name.into(), value.into())
    }

    pub fn get(&self, name: &str) -> Option<&TypedValue> {
        self.fields.get(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<TypedValue> {
        self.fields.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TypedValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// `(fieldName, typeTag)` pairs in ascending field order.
    pub fn key_listing(&self) -> Vec<(String, TypeTag)> {
        self.fields
            .iter()
            .map(|(k, v)| (k.clone(), v.tag()))
            .collect()
    }

    pub fn get_bool(&self, name: &str) -> Option<bool> {
        self.get(name).and_then(TypedValue::as_bool)
    }

    pub fn get_i64(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(TypedValue::as_i64)
    }

    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(TypedValue::as_str)
    }
}

impl<K, V> FromIterator<(K, V)> for TypedRecord
where
    K: Into<String>,
    V: Into<TypedValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = TypedRecord::new();
        for (k, v) in iter {
            record.insert(k, v);
        }
        record
    }
}
