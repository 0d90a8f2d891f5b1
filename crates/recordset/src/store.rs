//! Row storage for record sets.
//!
//! This module provides the `RowStore` struct which holds the materialized
//! rows of one record set in their source order. Rows enter either unchecked,
//! while the source is drained, or through `insert`, which checks them against
//! the schema first.

use alloc::vec::Vec;
use rowset_core::schema::Schema;
use rowset_core::{Error, Result, Row};

/// Ordered, append-only row storage for a single record set.
#[derive(Clone, Debug, Default)]
pub struct RowStore {
    schema: Schema,
    rows: Vec<Row>,
}

impl RowStore {
    /// Creates an empty row store for the given schema.
    pub fn new(schema: Schema) -> Self {
        Self::with_capacity(schema, 0)
    }

    /// Creates an empty row store with room for `capacity` rows.
    pub fn with_capacity(schema: Schema, capacity: usize) -> Self {
        Self {
            schema,
            rows: Vec::with_capacity(capacity),
        }
    }

    /// Returns the schema of this store.
    #[inline]
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Returns the number of rows.
    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the store holds no rows.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Appends a row drained from the result source, without schema checks.
    pub(crate) fn load(&mut self, row: Row) {
        self.rows.push(row);
    }

    /// Inserts a row after the last row, returning its position.
    ///
    /// Fails with `SchemaMismatch` and leaves the store unchanged when the
    /// row's field names do not match the schema.
    pub fn insert(&mut self, row: Row) -> Result<usize> {
        self.schema.check_row(&row)?;
        self.rows.push(row);
        Ok(self.rows.len() - 1)
    }

    /// Inserts rows in order, stopping at the first one that fails.
    ///
    /// Rows inserted before the failure stay in the store. The error reports
    /// how many rows went in.
    pub fn insert_batch(&mut self, rows: impl IntoIterator<Item = Row>) -> Result<usize> {
        let mut appended = 0;
        for row in rows {
            if let Err(e) = self.insert(row) {
                return Err(Error::bulk_append(appended, e));
            }
            appended += 1;
        }
        Ok(appended)
    }

    /// Inserts rows only if every one of them matches the schema.
    pub fn insert_batch_atomic(&mut self, rows: Vec<Row>) -> Result<usize> {
        for row in &rows {
            if let Err(e) = self.schema.check_row(row) {
                return Err(Error::bulk_append(0, e));
            }
        }
        let appended = rows.len();
        self.rows.extend(rows);
        Ok(appended)
    }

    /// Gets the row at the given position.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    /// Returns the rows in stored order.
    #[inline]
    pub fn as_slice(&self) -> &[Row] {
        &self.rows
    }

    /// Scans all rows in stored order.
    pub fn scan(&self) -> core::slice::Iter<'_, Row> {
        self.rows.iter()
    }
}
