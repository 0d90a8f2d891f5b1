//! Diagnostic summary of a record set.

use crate::RecordSet;
use core::fmt;

const SEPARATOR: &str = "---------------------------------------------------------------";

impl fmt::Display for RecordSet {
    /// Writes the summary reported by [`RecordSet::record_set_info`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", RecordSet::version())?;
        writeln!(f, "{}", SEPARATOR)?;
        writeln!(f, "Row count: {}", self.row_count())?;
        writeln!(f, "Current row: {}", self.current_row_number())?;
        writeln!(f, "Column count: {}", self.column_count())?;
        writeln!(f, "Columns:")?;
        for column in self.column_defs() {
            writeln!(f, "\t {} ({})", column.name(), column.data_type())?;
        }
        writeln!(f, "is EOF: {}", self.is_eof())?;
        writeln!(f, "is BOF: {}", self.is_bof())
    }
}
