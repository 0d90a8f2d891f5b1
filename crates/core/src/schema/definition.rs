//! Ordered column definitions of a record set.

use super::column::Column;
use super::fingerprint::SchemaFingerprint;
use crate::error::{Error, Result};
use crate::row::{eq_folded, Row};
use crate::types::DataType;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

/// The ordered column definitions of a record set.
#[derive(Clone, Debug, Default)]
pub struct Schema {
    /// Column definitions in source order.
    columns: Vec<Column>,
    /// Fingerprint of the column names.
    fingerprint: SchemaFingerprint,
}

impl Schema {
    /// Creates a schema from columns in source order.
    ///
    /// Column positions are reassigned from the order given.
    pub fn new(columns: Vec<Column>) -> Self {
        let columns: Vec<Column> = columns
            .into_iter()
            .enumerate()
            .map(|(i, c)| c.with_index(i))
            .collect();
        let fingerprint = SchemaFingerprint::of(columns.iter().map(Column::name));
        Self {
            columns,
            fingerprint,
        }
    }

    /// Returns the columns.
    #[inline]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Returns the number of columns.
    #[inline]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns true if the schema has no columns.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Returns the schema fingerprint.
    #[inline]
    pub fn fingerprint(&self) -> &SchemaFingerprint {
        &self.fingerprint
    }

    /// Gets a column by name, matched case-insensitively.
    pub fn get_column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| eq_folded(c.name(), name))
    }

    /// Gets a column position by name, matched case-insensitively.
    pub fn get_column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| eq_folded(c.name(), name))
    }

    /// Checks that a row's field names match this schema.
    ///
    /// Field values are not inspected.
    pub fn check_row(&self, row: &Row) -> Result<()> {
        let found = SchemaFingerprint::of(row.names());
        if found == self.fingerprint {
            Ok(())
        } else {
            Err(Error::schema_mismatch(
                format!("{}", self.fingerprint),
                format!("{}", found),
            ))
        }
    }
}

/// Builder for schemas assembled by hand rather than captured from a source.
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    columns: Vec<Column>,
}

impl SchemaBuilder {
    /// Creates an empty schema builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a column to the schema.
    ///
    /// Names must be non-empty and unique, compared case-insensitively.
    pub fn add_column(mut self, name: impl Into<String>, data_type: DataType) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(Error::invalid_schema("Column name cannot be empty"));
        }
        if self.columns.iter().any(|c| eq_folded(c.name(), &name)) {
            return Err(Error::invalid_schema(format!(
                "Column already exists: {}",
                name
            )));
        }
        self.columns.push(Column::new(name, data_type));
        Ok(self)
    }

    /// Builds the schema.
    pub fn build(self) -> Schema {
        Schema::new(self.columns)
    }
}
