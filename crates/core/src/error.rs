//! Error types for rowset.

use alloc::boxed::Box;
use alloc::string::String;
use core::fmt;

/// Result type alias for rowset operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Side of the row range a navigation request fell off.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Requested index precedes the first row.
    BeforeFirst,
    /// Requested index is beyond the last row.
    PastLast,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::BeforeFirst => f.write_str("before first row"),
            Direction::PastLast => f.write_str("past last row"),
        }
    }
}

/// Error types for rowset operations.
#[derive(Debug)]
pub enum Error {
    /// The result source was absent, already closed, or failed while it was
    /// being drained. No record set was produced.
    Construction {
        message: String,
    },
    /// Navigation requested a row outside the row range. The cursor has been
    /// parked at the nearest boundary row.
    Boundary {
        index: isize,
        direction: Direction,
    },
    /// A row's field names do not match the record set's columns.
    SchemaMismatch {
        expected: String,
        found: String,
    },
    /// Row access was attempted on a record set with no rows.
    EmptySet,
    /// A bulk append stopped at a failing row.
    BulkAppend {
        appended: usize,
        source: Box<Error>,
    },
    /// A result source reported a failure.
    Source {
        message: String,
    },
    /// Invalid schema definition.
    InvalidSchema {
        message: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Construction { message } => {
                write!(f, "Could not build record set: {}", message)
            }
            Error::Boundary {
                index,
                direction: Direction::BeforeFirst,
            } => {
                write!(f, "Row {} precedes first row. Record set reset to BOF.", index)
            }
            Error::Boundary {
                index,
                direction: Direction::PastLast,
            } => {
                write!(f, "Row {} is beyond last row. Record set set to EOF.", index)
            }
            Error::SchemaMismatch { expected, found } => {
                write!(
                    f,
                    "Columns for row do not match record set (expected {}, found {}). Row not added.",
                    expected, found
                )
            }
            Error::EmptySet => write!(f, "Record set is empty"),
            Error::BulkAppend { source, .. } => {
                write!(f, "Could not add rows: {}", source)
            }
            Error::Source { message } => write!(f, "Result source error: {}", message),
            Error::InvalidSchema { message } => write!(f, "Invalid schema: {}", message),
        }
    }
}

impl core::error::Error for Error {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Error::BulkAppend { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

impl Error {
    /// Creates a construction error.
    pub fn construction(message: impl Into<String>) -> Self {
        Error::Construction {
            message: message.into(),
        }
    }

    /// Creates a boundary error.
    pub fn boundary(index: isize, direction: Direction) -> Self {
        Error::Boundary { index, direction }
    }

    /// Creates a schema mismatch error.
    pub fn schema_mismatch(expected: impl Into<String>, found: impl Into<String>) -> Self {
        Error::SchemaMismatch {
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// Creates a bulk append error wrapping the failure that stopped it.
    pub fn bulk_append(appended: usize, source: Error) -> Self {
        Error::BulkAppend {
            appended,
            source: Box::new(source),
        }
    }

    /// Creates a result source error.
    pub fn source_failure(message: impl Into<String>) -> Self {
        Error::Source {
            message: message.into(),
        }
    }

    /// Creates an invalid schema error.
    pub fn invalid_schema(message: impl Into<String>) -> Self {
        Error::InvalidSchema {
            message: message.into(),
        }
    }

    /// Returns true if this is a boundary error.
    pub fn is_boundary(&self) -> bool {
        matches!(self, Error::Boundary { .. })
    }
}
