//! Row structure for rowset.
//!
//! This module defines the `Row` struct which represents a single materialized
//! record: an ordered sequence of named values.

use crate::value::Value;
use alloc::string::String;
use alloc::vec::Vec;

/// A single record: ordered `(name, value)` fields.
///
/// Equality and hashing are structural over the full ordered field list, so
/// two rows built from different sources compare equal when they carry the
/// same names and values in the same order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Row {
    /// Field names, indexed by position.
    names: Vec<String>,
    /// Field values, indexed by position.
    values: Vec<Value>,
}

impl Row {
    /// Creates a new row from `(name, value)` pairs.
    pub fn new(fields: Vec<(String, Value)>) -> Self {
        fields.into_iter().collect()
    }

    /// Creates an empty row with room for `capacity` fields.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            names: Vec::with_capacity(capacity),
            values: Vec::with_capacity(capacity),
        }
    }

    /// Appends a field and returns the row, for chained construction.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.push(name, value);
        self
    }

    /// Appends a field.
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.names.push(name.into());
        self.values.push(value.into());
    }

    /// Returns the field names in order.
    #[inline]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Returns the field values in order.
    #[inline]
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Iterates over `(name, value)` pairs in order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> + '_ {
        self.names
            .iter()
            .map(String::as_str)
            .zip(self.values.iter())
    }

    /// Gets the value at the given field position.
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    /// Gets the name of the field at the given position.
    pub fn name(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    /// Gets a value by field name. Names match case-insensitively.
    pub fn get_by_name(&self, name: &str) -> Option<&Value> {
        self.position(name).and_then(|i| self.values.get(i))
    }

    /// Returns the position of the named field, matched case-insensitively.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| eq_folded(n, name))
    }

    /// Sets the value at the given field position.
    pub fn set(&mut self, index: usize, value: Value) -> bool {
        match self.values.get_mut(index) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    /// Returns the number of fields in this row.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if this row has no fields.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Lowercases `name` one char at a time, without context-sensitive rules.
pub(crate) fn fold_case(name: &str) -> impl Iterator<Item = char> + '_ {
    name.chars().flat_map(char::to_lowercase)
}

/// Unicode-aware case-insensitive comparison.
pub(crate) fn eq_folded(a: &str, b: &str) -> bool {
    fold_case(a).eq(fold_case(b))
}

impl<K, V> FromIterator<(K, V)> for Row
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut row = Row::with_capacity(iter.size_hint().0);
        for (name, value) in iter {
            row.push(name, value);
        }
        row
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn alice() -> Row {
        Row::default().with("id", 1i64).with("name", "Alice")
    }

    #[test]
    fn test_row_new() {
        let row = Row::new(vec![
            ("id".into(), Value::Integer(42)),
            ("name".into(), Value::String("Alice".into())),
        ]);
        assert_eq!(row.len(), 2);
        assert_eq!(row.name(0), Some("id"));
        assert_eq!(row.get(0), Some(&Value::Integer(42)));
    }

    #[test]
    fn test_row_get_value() {
        let row = alice();
        assert_eq!(row.get(1), Some(&Value::String("Alice".into())));
        assert_eq!(row.get(2), None);
        assert_eq!(row.name(2), None);
    }

    #[test]
    fn test_row_get_by_name_ignores_case() {
        let row = alice();
        assert_eq!(row.get_by_name("NAME"), Some(&Value::String("Alice".into())));
        assert_eq!(row.position("Id"), Some(0));
        assert_eq!(row.get_by_name("missing"), None);
    }

    #[test]
    fn test_row_set_value() {
        let mut row = alice();
        assert!(row.set(0, Value::Integer(100)));
        assert_eq!(row.get(0), Some(&Value::Integer(100)));
        assert!(!row.set(10, Value::Integer(999)));
    }

    #[test]
    fn test_row_fields_in_order() {
        let row = alice();
        let fields: Vec<_> = row.fields().collect();
        assert_eq!(fields[0], ("id", &Value::Integer(1)));
        assert_eq!(fields[1], ("name", &Value::String("Alice".into())));
    }

    #[test]
    fn test_row_equality_is_structural() {
        assert_eq!(alice(), alice());
        assert_ne!(alice(), Row::default().with("id", 2i64).with("name", "Alice"));
        assert_ne!(alice(), Row::default().with("name", "Alice").with("id", 1i64));
    }

    #[test]
    fn test_row_from_iter() {
        let row: Row = vec![("a", 1i64), ("b", 2i64)].into_iter().collect();
        assert_eq!(row.names(), &["a", "b"]);
        assert!(!row.is_empty());
    }

    #[test]
    fn test_eq_folded() {
        assert!(!eq_folded("Straße", "STRASSE"));
        assert!(eq_folded("ÉCOLE", "école"));
    }
}
