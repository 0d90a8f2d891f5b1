//! Record set configuration.

/// Policy for `RecordSet::add_rows` when one of the rows does not match.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BulkAppend {
    /// Append in order and stop at the first failing row. Rows appended before
    /// it are kept.
    #[default]
    FailFast,
    /// Check every row first and append none of them if any fails.
    Atomic,
}

/// Options applied when a record set is built.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecordSetOptions {
    bulk_append: BulkAppend,
    capacity_hint: usize,
}

impl RecordSetOptions {
    /// Creates the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the bulk append policy.
    pub fn bulk_append(mut self, policy: BulkAppend) -> Self {
        self.bulk_append = policy;
        self
    }

    /// Sets the number of rows to reserve room for before draining the source.
    pub fn capacity_hint(mut self, rows: usize) -> Self {
        self.capacity_hint = rows;
        self
    }

    /// Returns the bulk append policy.
    #[inline]
    pub fn bulk_append_policy(&self) -> BulkAppend {
        self.bulk_append
    }

    /// Returns the capacity hint.
    #[inline]
    pub fn rows_hint(&self) -> usize {
        self.capacity_hint
    }
}
