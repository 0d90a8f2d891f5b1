//! Cursor state for record set navigation.
//!
//! For a non-empty set of `n` rows the cursor is in one of three kinds of
//! state:
//!
//! ```text
//!   PRE  (position = -1, BOF)           initial state, reset_to_beginning
//!   AT(i) for i in 0..n                 after any successful row access
//!   POST (position = n, EOF)            reset_to_end
//! ```
//!
//! `first`/`last` jump to `AT(0)`/`AT(n - 1)` and force the flags. `seek`
//! moves to `AT(i)` with both flags cleared, or parks at the nearest boundary
//! row when the index falls outside the range. An empty set has a single state
//! in which BOF and EOF are both set and no row is reachable.
//!
//! The cursor holds no rows; every transition takes the current row count.

use rowset_core::{Error, Result};

/// How a seek resolved its target index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The requested index was in range.
    Exact,
    /// The index preceded the first row; the cursor is parked at the first row.
    ClampedBefore,
    /// The index was beyond the last row; the cursor is parked at the last row.
    ClampedAfter,
}

impl Outcome {
    /// Returns true if the requested index was out of range.
    #[inline]
    pub fn is_clamped(&self) -> bool {
        !matches!(self, Outcome::Exact)
    }
}

/// Navigation state over a row store.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cursor {
    position: isize,
    current: Option<usize>,
    bof: bool,
    eof: bool,
}

impl Cursor {
    /// Creates a cursor in the initial state for `row_count` rows.
    pub fn new(row_count: usize) -> Self {
        Self {
            position: -1,
            current: None,
            bof: true,
            eof: row_count == 0,
        }
    }

    /// Returns the current position. May be `-1` or the row count when idle.
    #[inline]
    pub fn position(&self) -> isize {
        self.position
    }

    /// Returns the index of the current row, if the cursor is on one.
    #[inline]
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    /// Returns the beginning-of-set flag.
    #[inline]
    pub fn is_bof(&self) -> bool {
        self.bof
    }

    /// Returns the end-of-set flag.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.eof
    }

    /// Returns true if a row follows the current position.
    pub fn has_next(&self, row_count: usize) -> bool {
        row_count > 0 && self.position + 1 <= last_index(row_count)
    }

    /// Returns true if a row precedes the current position.
    pub fn has_previous(&self, row_count: usize) -> bool {
        row_count > 0 && self.position - 1 >= 0
    }

    /// Moves to the first row and raises BOF.
    pub fn first(&mut self, row_count: usize) -> Result<usize> {
        if row_count == 0 {
            return Err(Error::EmptySet);
        }
        self.park(0, true, false);
        Ok(0)
    }

    /// Moves to the last row and raises EOF.
    pub fn last(&mut self, row_count: usize) -> Result<usize> {
        if row_count == 0 {
            return Err(Error::EmptySet);
        }
        let last = row_count - 1;
        self.park(last, false, true);
        Ok(last)
    }

    /// Moves to row `index`, clamping to the row range.
    ///
    /// In range, both flags are cleared, including on the first and last
    /// index. Out of range, the cursor is parked at the nearest boundary row
    /// with the matching flag raised, and the outcome reports the clamp.
    pub fn seek(&mut self, index: isize, row_count: usize) -> Result<(usize, Outcome)> {
        if row_count == 0 {
            return Err(Error::EmptySet);
        }
        let last = row_count - 1;
        if index < 0 {
            self.park(0, true, false);
            Ok((0, Outcome::ClampedBefore))
        } else if index as usize > last {
            self.park(last, false, true);
            Ok((last, Outcome::ClampedAfter))
        } else {
            let index = index as usize;
            self.park(index, false, false);
            Ok((index, Outcome::Exact))
        }
    }

    /// Moves just before the first row.
    ///
    /// On an empty set both flags stay raised.
    pub fn reset_to_beginning(&mut self, row_count: usize) {
        self.position = -1;
        self.current = None;
        self.bof = true;
        self.eof = row_count == 0;
    }

    /// Moves just past the last row.
    ///
    /// On an empty set both flags stay raised.
    pub fn reset_to_end(&mut self, row_count: usize) {
        self.position = row_count as isize;
        self.current = None;
        self.bof = row_count == 0;
        self.eof = true;
    }

    /// Adjusts the cursor after rows were appended.
    ///
    /// A set that was empty enters the initial state; otherwise the cursor is
    /// left where it was.
    pub fn grown(&mut self, old_count: usize, new_count: usize) {
        if old_count == 0 && new_count > 0 {
            *self = Self::new(new_count);
        }
    }

    fn park(&mut self, index: usize, bof: bool, eof: bool) {
        self.position = index as isize;
        self.current = Some(index);
        self.bof = bof;
        self.eof = eof;
    }
}

#[inline]
fn last_index(row_count: usize) -> isize {
    row_count as isize - 1
}
