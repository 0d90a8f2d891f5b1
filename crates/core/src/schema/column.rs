//! Column definition for rowset schemas.

use crate::types::DataType;
use alloc::string::String;

/// A column definition captured from a result source.
#[derive(Clone, Debug)]
pub struct Column {
    /// Column name.
    name: String,
    /// Data type of the column.
    data_type: DataType,
    /// Column position in the schema (0-based).
    index: usize,
}

impl Column {
    /// Creates a new column definition.
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
            index: 0,
        }
    }

    /// Sets the column position.
    pub(crate) fn with_index(mut self, index: usize) -> Self {
        self.index = index;
        self
    }

    /// Returns the column name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the data type.
    #[inline]
    pub fn data_type(&self) -> DataType {
        self.data_type
    }

    /// Returns the column position.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }
}

impl PartialEq for Column {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.data_type == other.data_type
    }
}

impl Eq for Column {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_new() {
        let col = Column::new("r_object_id", DataType::Id);
        assert_eq!(col.name(), "r_object_id");
        assert_eq!(col.data_type(), DataType::Id);
        assert_eq!(col.index(), 0);
    }

    #[test]
    fn test_column_equality_ignores_position() {
        let a = Column::new("id", DataType::Integer).with_index(0);
        let b = Column::new("id", DataType::Integer).with_index(3);
        assert_eq!(a, b);
        assert_ne!(a, Column::new("id", DataType::String));
    }
}
