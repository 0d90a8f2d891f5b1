//! Result sources a record set is built from.
//!
//! A result source is a single-pass, forward-only producer of rows: the query
//! layer's result cursor. The record set reads its columns, drains it once and
//! closes it; nothing references the source afterwards.

use alloc::format;
use alloc::vec::Vec;
use rowset_core::schema::{Column, Schema};
use rowset_core::{Error, Result, Row};

/// A forward-only producer of rows sharing one set of columns.
pub trait ResultSource {
    /// Returns the number of columns.
    fn column_count(&self) -> usize;

    /// Returns the definition of the column at `index`.
    fn column_at(&self, index: usize) -> Result<Column>;

    /// Moves to the next row. Returns false once the source is exhausted.
    fn advance(&mut self) -> Result<bool>;

    /// Returns the row the last successful `advance` moved to.
    fn current_row(&self) -> Result<Row>;

    /// Releases the source. Calling it more than once has no further effect.
    fn close(&mut self);

    /// Returns true if the source has been closed.
    fn is_closed(&self) -> bool {
        false
    }
}

impl<S: ResultSource + ?Sized> ResultSource for &mut S {
    fn column_count(&self) -> usize {
        (**self).column_count()
    }

    fn column_at(&self, index: usize) -> Result<Column> {
        (**self).column_at(index)
    }

    fn advance(&mut self) -> Result<bool> {
        (**self).advance()
    }

    fn current_row(&self) -> Result<Row> {
        (**self).current_row()
    }

    fn close(&mut self) {
        (**self).close()
    }

    fn is_closed(&self) -> bool {
        (**self).is_closed()
    }
}

/// Closes the wrapped source when dropped, on every exit path.
pub(crate) struct CloseGuard<'a, S: ResultSource> {
    source: &'a mut S,
}

impl<'a, S: ResultSource> CloseGuard<'a, S> {
    pub(crate) fn new(source: &'a mut S) -> Self {
        Self { source }
    }

    pub(crate) fn source(&mut self) -> &mut S {
        self.source
    }
}

impl<S: ResultSource> Drop for CloseGuard<'_, S> {
    fn drop(&mut self) {
        self.source.close();
    }
}

/// An in-memory result source over rows that are already materialized.
#[derive(Clone, Debug)]
pub struct MemorySource {
    schema: Schema,
    rows: Vec<Row>,
    /// Index of the current row; `None` before the first `advance`.
    cursor: Option<usize>,
    closed: bool,
    close_calls: usize,
}

impl MemorySource {
    /// Creates a source yielding `rows` under `schema`.
    pub fn new(schema: Schema, rows: Vec<Row>) -> Self {
        Self {
            schema,
            rows,
            cursor: None,
            closed: false,
            close_calls: 0,
        }
    }

    /// Creates a source that is already closed.
    pub fn closed(schema: Schema) -> Self {
        let mut source = Self::new(schema, Vec::new());
        source.closed = true;
        source
    }

    /// Returns how many times `close` was called.
    pub fn close_calls(&self) -> usize {
        self.close_calls
    }

    /// Returns the number of rows not yet consumed.
    pub fn remaining(&self) -> usize {
        match self.cursor {
            None => self.rows.len(),
            Some(i) => self.rows.len().saturating_sub(i + 1),
        }
    }
}

impl ResultSource for MemorySource {
    fn column_count(&self) -> usize {
        self.schema.len()
    }

    fn column_at(&self, index: usize) -> Result<Column> {
        self.schema
            .columns()
            .get(index)
            .cloned()
            .ok_or_else(|| Error::source_failure(format!("no column at index {}", index)))
    }

    fn advance(&mut self) -> Result<bool> {
        if self.closed {
            return Err(Error::source_failure("source is closed"));
        }
        let next = self.cursor.map_or(0, |i| i + 1);
        if next < self.rows.len() {
            self.cursor = Some(next);
            Ok(true)
        } else {
            self.cursor = Some(self.rows.len());
            Ok(false)
        }
    }

    fn current_row(&self) -> Result<Row> {
        self.cursor
            .and_then(|i| self.rows.get(i))
            .cloned()
            .ok_or_else(|| Error::source_failure("no current row"))
    }

    fn close(&mut self) {
        self.close_calls += 1;
        self.closed = true;
    }

    fn is_closed(&self) -> bool {
        self.closed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use rowset_core::schema::SchemaBuilder;
    use rowset_core::DataType;

    fn source() -> MemorySource {
        let schema = SchemaBuilder::new()
            .add_column("id", DataType::Integer)
            .unwrap()
            .build();
        MemorySource::new(
            schema,
            vec![Row::default().with("id", 1i64), Row::default().with("id", 2i64)],
        )
    }

    #[test]
    fn test_memory_source_drains_in_order() {
        let mut src = source();
        assert!(src.current_row().is_err());
        assert!(src.advance().unwrap());
        assert_eq!(src.current_row().unwrap(), Row::default().with("id", 1i64));
        assert_eq!(src.remaining(), 1);
        assert!(src.advance().unwrap());
        assert!(!src.advance().unwrap());
        assert!(!src.advance().unwrap());
        assert_eq!(src.remaining(), 0);
    }

    #[test]
    fn test_memory_source_columns() {
        let src = source();
        assert_eq!(src.column_count(), 1);
        assert_eq!(src.column_at(0).unwrap().name(), "id");
        assert!(src.column_at(1).is_err());
    }

    #[test]
    fn test_close_guard_closes_once() {
        let mut src = source();
        {
            let mut guard = CloseGuard::new(&mut src);
            assert!(guard.source().advance().unwrap());
        }
        assert!(src.is_closed());
        assert_eq!(src.close_calls(), 1);
        assert!(src.advance().is_err());
    }

    #[test]
    fn test_closed_source() {
        let src = MemorySource::closed(Schema::default());
        assert!(src.is_closed());
        assert_eq!(src.close_calls(), 0);
    }
}
