//! Decoded DataVals.

use std::collections::BTreeMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::vocabulary::FieldName;

/// One decoded field value.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(untagged)]
pub enum DataVal {
    /// A single integer.
    Int(i64),
    /// A `/`-delimited integer list.
    List(Vec<i64>),
    /// A nested mapping (dependent function values).
    Nested(DataVals),
}

impl DataVal {
    /// Returns the integer, if this is a scalar.
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the list, if this is a list.
    #[must_use]
    pub fn as_list(&self) -> Option<&[i64]> {
        match self {
            Self::List(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the nested mapping, if this is one.
    #[must_use]
    pub fn as_nested(&self) -> Option<&DataVals> {
        match self {
            Self::Nested(v) => Some(v),
            _ => None,
        }
    }
}

/// A decoded DataVals mapping, ordered by field declaration order.
///
/// Positional values the context's schema gives no name (reserved slots
/// and positions past the end of the schema) are kept by position and
/// serialize after the named fields as `aa<position>`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataVals {
    fields: BTreeMap<FieldName, DataVal>,
    unmapped: BTreeMap<usize, DataVal>,
}

impl DataVals {
    /// Creates an empty mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a field, returning false if it was already present.
    pub(crate) fn insert(&mut self, field: FieldName, value: DataVal) -> bool {
        if self.fields.contains_key(&field) {
            return false;
        }
        self.fields.insert(field, value);
        true
    }

    /// Keeps a positional value that has no field name.
    pub(crate) fn insert_unmapped(&mut self, position: usize, value: DataVal) {
        self.unmapped.insert(position, value);
    }

    /// Returns a field's value.
    #[must_use]
    pub fn get(&self, field: FieldName) -> Option<&DataVal> {
        self.fields.get(&field)
    }

    /// Returns a scalar field.
    #[must_use]
    pub fn int(&self, field: FieldName) -> Option<i64> {
        self.get(field).and_then(DataVal::as_int)
    }

    /// Returns a list field.
    #[must_use]
    pub fn list(&self, field: FieldName) -> Option<&[i64]> {
        self.get(field).and_then(DataVal::as_list)
    }

    /// Returns a nested field.
    #[must_use]
    pub fn nested(&self, field: FieldName) -> Option<&DataVals> {
        self.get(field).and_then(DataVal::as_nested)
    }

    /// Returns true if the field is present.
    #[must_use]
    pub fn contains(&self, field: FieldName) -> bool {
        self.fields.contains_key(&field)
    }

    /// Returns the unnamed value decoded at `position`.
    #[must_use]
    pub fn unmapped(&self, position: usize) -> Option<&DataVal> {
        self.unmapped.get(&position)
    }

    /// Iterates unnamed values by position.
    pub fn iter_unmapped(&self) -> impl Iterator<Item = (usize, &DataVal)> {
        self.unmapped.iter().map(|(k, v)| (*k, v))
    }

    /// Number of named fields. Unnamed positional values are not counted.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if nothing was decoded, named or not.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.unmapped.is_empty()
    }

    /// Iterates fields in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &DataVal)> {
        self.fields.iter().map(|(k, v)| (*k, v))
    }
}

impl Serialize for DataVals {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len() + self.unmapped.len()))?;
        for (field, value) in &self.fields {
            map.serialize_entry(field, value)?;
        }
        for (position, value) in &self.unmapped {
            map.serialize_entry(&format!("aa{position}"), value)?;
        }
        map.end()
    }
}

impl<'a> IntoIterator for &'a DataVals {
    type Item = (&'a FieldName, &'a DataVal);
    type IntoIter = std::collections::btree_map::Iter<'a, FieldName, DataVal>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}
