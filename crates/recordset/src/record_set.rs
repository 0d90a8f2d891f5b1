//! The record set: schema, row store and cursor over one drained result.

use crate::cursor::{Cursor, Outcome};
use crate::options::{BulkAppend, RecordSetOptions};
use crate::source::{CloseGuard, ResultSource};
use crate::store::RowStore;
use alloc::format;
use alloc::vec::Vec;
use hashbrown::HashSet;
use rowset_core::schema::{Column, Schema};
use rowset_core::{Direction, Error, Result, Row};
use tracing::{debug, info, warn};

/// A row returned by [`RecordSet::seek`], with how the index was resolved.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Seek<'a> {
    /// The row the cursor now sits on.
    pub row: &'a Row,
    /// Whether the requested index had to be clamped.
    pub outcome: Outcome,
}

impl<'a> Seek<'a> {
    /// Converts a clamped seek of `index` into a boundary error.
    pub fn into_result(self, index: isize) -> Result<&'a Row> {
        match self.outcome {
            Outcome::Exact => Ok(self.row),
            Outcome::ClampedBefore => Err(Error::boundary(index, Direction::BeforeFirst)),
            Outcome::ClampedAfter => Err(Error::boundary(index, Direction::PastLast)),
        }
    }
}

/// A fully materialized result with a bidirectional cursor.
///
/// The record set is built in one pass from a [`ResultSource`], which is
/// closed before construction returns. Afterwards every operation works in
/// memory: navigation only moves the cursor, and rows can only be appended.
///
/// There is no internal locking; wrap the record set in a lock to share it.
#[derive(Clone, Debug)]
pub struct RecordSet {
    store: RowStore,
    cursor: Cursor,
    options: RecordSetOptions,
}

impl RecordSet {
    /// Builds a record set by draining `source` with default options.
    pub fn new<S: ResultSource>(source: S) -> Result<Self> {
        Self::with_options(Some(source), RecordSetOptions::default())
    }

    /// Builds a record set from a source that may be absent.
    pub fn from_source<S: ResultSource>(source: Option<S>) -> Result<Self> {
        Self::with_options(source, RecordSetOptions::default())
    }

    /// Builds a record set with the given options.
    ///
    /// Fails with `Construction` when the source is absent or already closed,
    /// or when the source fails while its columns or rows are read. The source
    /// is closed exactly once whatever the outcome.
    pub fn with_options<S: ResultSource>(
        source: Option<S>,
        options: RecordSetOptions,
    ) -> Result<Self> {
        let mut source = match source {
            Some(source) => source,
            None => return Err(Error::construction("result source is absent")),
        };
        let mut guard = CloseGuard::new(&mut source);
        let src = guard.source();
        if src.is_closed() {
            return Err(Error::construction("result source is already closed"));
        }

        // Columns are captured before the first row is read
        let column_count = src.column_count();
        let mut columns = Vec::with_capacity(column_count);
        for i in 0..column_count {
            columns.push(src.column_at(i).map_err(drain_failed)?);
        }

        let mut store = RowStore::with_capacity(Schema::new(columns), options.rows_hint());
        while src.advance().map_err(drain_failed)? {
            store.load(src.current_row().map_err(drain_failed)?);
        }
        drop(guard);

        info!(
            rows = store.len(),
            columns = column_count,
            version = crate::VERSION,
            "record set loaded"
        );

        Ok(Self {
            cursor: Cursor::new(store.len()),
            store,
            options,
        })
    }

    /// Returns the version string of this library.
    pub fn version() -> &'static str {
        crate::VERSION
    }

    /// Returns the number of rows.
    #[inline]
    pub fn row_count(&self) -> usize {
        self.store.len()
    }

    /// Returns the number of columns.
    #[inline]
    pub fn column_count(&self) -> usize {
        self.store.schema().len()
    }

    /// Returns the column definitions in source order.
    #[inline]
    pub fn column_defs(&self) -> &[Column] {
        self.store.schema().columns()
    }

    /// Returns the schema.
    #[inline]
    pub fn schema(&self) -> &Schema {
        self.store.schema()
    }

    /// Gets a column by name, matched case-insensitively.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.store.schema().get_column(name)
    }

    /// Gets a column position by name, matched case-insensitively.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.store.schema().get_column_index(name)
    }

    /// Returns the options this record set was built with.
    pub fn options(&self) -> &RecordSetOptions {
        &self.options
    }

    /// Beginning-of-set indicator.
    #[inline]
    pub fn is_bof(&self) -> bool {
        self.cursor.is_bof()
    }

    /// End-of-set indicator.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.cursor.is_eof()
    }

    /// Returns true if the record set holds no rows.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Returns true if a row follows the current position.
    pub fn has_next(&self) -> bool {
        self.cursor.has_next(self.row_count())
    }

    /// Returns true if a row precedes the current position.
    pub fn has_previous(&self) -> bool {
        self.cursor.has_previous(self.row_count())
    }

    /// Moves to the row after the current position.
    pub fn next_row(&mut self) -> Result<&Row> {
        let index = self.cursor.position() + 1;
        self.row(index)
    }

    /// Moves to the row before the current position.
    pub fn previous_row(&mut self) -> Result<&Row> {
        let index = self.cursor.position() - 1;
        self.row(index)
    }

    /// Moves to the first row and raises BOF.
    pub fn first_row(&mut self) -> Result<&Row> {
        let index = self.cursor.first(self.store.len())?;
        self.row_at(index)
    }

    /// Moves to the last row and raises EOF.
    pub fn last_row(&mut self) -> Result<&Row> {
        let index = self.cursor.last(self.store.len())?;
        self.row_at(index)
    }

    /// Moves to row `index`.
    ///
    /// An index before the first row parks the cursor on the first row with
    /// BOF raised, then fails with a `Boundary` error; an index beyond the
    /// last row does the same at the last row with EOF raised. Landing on the
    /// first or last index in range raises neither flag.
    pub fn row(&mut self, index: isize) -> Result<&Row> {
        self.seek(index)?.into_result(index)
    }

    /// Moves to row `index`, reporting a clamp in the result instead of as an
    /// error.
    ///
    /// Fails only on an empty record set.
    pub fn seek(&mut self, index: isize) -> Result<Seek<'_>> {
        let (resolved, outcome) = self.cursor.seek(index, self.store.len())?;
        match outcome {
            Outcome::Exact => {}
            Outcome::ClampedBefore => {
                warn!(row = index, "row precedes first row, record set reset to BOF");
            }
            Outcome::ClampedAfter => {
                warn!(row = index, "row is beyond last row, record set set to EOF");
            }
        }
        let row = self.row_at(resolved)?;
        Ok(Seek { row, outcome })
    }

    /// Returns the current row, if the cursor is on one.
    pub fn current_row(&self) -> Option<&Row> {
        self.cursor.current().and_then(|i| self.store.get(i))
    }

    /// Returns the current position: `-1` before the first row, the row count
    /// past the last one.
    #[inline]
    pub fn current_row_number(&self) -> isize {
        self.cursor.position()
    }

    /// Moves the cursor just before the first row.
    pub fn reset_to_beginning(&mut self) {
        self.cursor.reset_to_beginning(self.store.len());
        debug!("record set reset to beginning");
    }

    /// Moves the cursor just past the last row.
    pub fn reset_to_end(&mut self) {
        self.cursor.reset_to_end(self.store.len());
        debug!("record set reset to end");
    }

    /// Appends a row after the last row.
    ///
    /// The row's field names must match the columns, compared in order and
    /// case-insensitively. On mismatch nothing changes.
    pub fn add_row(&mut self, row: Row) -> Result<()> {
        let old_count = self.store.len();
        match self.store.insert(row) {
            Ok(index) => {
                self.cursor.grown(old_count, self.store.len());
                debug!(row = index, "row added to record set");
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "columns for row do not match record set");
                Err(e)
            }
        }
    }

    /// Appends rows after the last row, following the configured
    /// [`BulkAppend`] policy.
    ///
    /// With the default `FailFast` policy, rows appended before a failing row
    /// stay in the record set.
    pub fn add_rows(&mut self, rows: Vec<Row>) -> Result<()> {
        let old_count = self.store.len();
        let result = match self.options.bulk_append_policy() {
            BulkAppend::FailFast => self.store.insert_batch(rows),
            BulkAppend::Atomic => self.store.insert_batch_atomic(rows),
        };
        self.cursor.grown(old_count, self.store.len());
        match result {
            Ok(appended) => {
                debug!(rows = appended, "rows added to record set");
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "bulk append stopped");
                Err(e)
            }
        }
    }

    /// Returns the rows in stored order, without moving the cursor.
    #[inline]
    pub fn as_list(&self) -> &[Row] {
        self.store.as_slice()
    }

    /// Returns the distinct rows.
    ///
    /// Rows are distinct by value: two rows with the same field names and
    /// values in the same order count once.
    pub fn as_set(&self) -> HashSet<&Row> {
        self.store.scan().collect()
    }

    /// Iterates over the rows in stored order, without moving the cursor.
    pub fn iter(&self) -> core::slice::Iter<'_, Row> {
        self.store.scan()
    }

    /// Returns a multi-line summary of the record set.
    pub fn record_set_info(&self) -> alloc::string::String {
        format!("{}", self)
    }

    fn row_at(&self, index: usize) -> Result<&Row> {
        debug_assert!(
            index < self.store.len(),
            "cursor resolved row {} of {}",
            index,
            self.store.len()
        );
        // A miss means the cursor and the store disagree on the row count
        self.store
            .get(index)
            .ok_or_else(|| Error::boundary(index as isize, Direction::PastLast))
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = &'a Row;
    type IntoIter = core::slice::Iter<'a, Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn drain_failed(e: Error) -> Error {
    Error::construction(format!("{}", e))
}
