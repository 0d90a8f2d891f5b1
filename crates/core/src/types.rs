//! Data type definitions for rowset.
//!
//! This module defines the column type tags a result source can report.

use core::fmt;

/// Column data types reported by a result source.
///
/// The set mirrors the type tags of the query layers rowset reads from, plus
/// `Undefined` for anything the source could not classify.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DataType {
    /// Boolean type (true/false)
    Boolean,
    /// 64-bit signed integer
    Integer,
    /// UTF-8 string
    String,
    /// Object identifier, stored as its string form
    Id,
    /// Point in time stored as Unix timestamp (milliseconds)
    Time,
    /// 64-bit floating point number
    Double,
    /// Type the source could not classify
    Undefined,
}

impl DataType {
    /// All data types, in legacy code order.
    pub const ALL: [DataType; 7] = [
        DataType::Boolean,
        DataType::Integer,
        DataType::String,
        DataType::Id,
        DataType::Time,
        DataType::Double,
        DataType::Undefined,
    ];

    /// Returns the upper-case tag used in diagnostic reports.
    pub fn name(&self) -> &'static str {
        match self {
            DataType::Boolean => "BOOLEAN",
            DataType::Integer => "INTEGER",
            DataType::String => "STRING",
            DataType::Id => "ID",
            DataType::Time => "TIME",
            DataType::Double => "DOUBLE",
            DataType::Undefined => "UNDEFINED",
        }
    }

    /// Maps a legacy integer type code (0..=5) to its data type.
    ///
    /// Any other code maps to `Undefined`.
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => DataType::Boolean,
            1 => DataType::Integer,
            2 => DataType::String,
            3 => DataType::Id,
            4 => DataType::Time,
            5 => DataType::Double,
            _ => DataType::Undefined,
        }
    }

    /// Returns the legacy integer code of this data type.
    pub fn code(&self) -> i32 {
        match self {
            DataType::Boolean => 0,
            DataType::Integer => 1,
            DataType::String => 2,
            DataType::Id => 3,
            DataType::Time => 4,
            DataType::Double => 5,
            DataType::Undefined => 6,
        }
    }

    /// Returns whether values of this type are numeric.
    pub fn is_numeric(&self) -> bool {
        matches!(self, DataType::Integer | DataType::Double)
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
