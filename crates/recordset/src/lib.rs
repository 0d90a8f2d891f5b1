//! Rowset - A bidirectional cursor over a fully materialized record set.
//!
//! This crate turns a forward-only result source into an in-memory record set
//! that supports:
//!
//! - `RecordSet`: Forward, backward and random-access navigation with BOF/EOF flags
//! - `ResultSource`: The forward-only producer a record set is drained from
//! - `MemorySource`: An in-memory result source
//! - `RowStore`: Schema-checked, append-only row storage
//! - `Cursor`: The navigation state machine
//! - `RecordSetOptions`: Construction options, including the bulk append policy
//!
//! # Example
//!
//! ```rust
//! use rowset::{MemorySource, RecordSet};
//! use rowset_core::schema::SchemaBuilder;
//! use rowset_core::{DataType, Row};
//!
//! let schema = SchemaBuilder::new()
//!     .add_column("id", DataType::Integer)
//!     .unwrap()
//!     .add_column("name", DataType::String)
//!     .unwrap()
//!     .build();
//! let rows = vec![
//!     Row::default().with("id", 1i64).with("name", "a"),
//!     Row::default().with("id", 2i64).with("name", "b"),
//! ];
//!
//! let mut rs = RecordSet::new(MemorySource::new(schema, rows)).unwrap();
//! assert_eq!(rs.row_count(), 2);
//!
//! while rs.has_next() {
//!     let row = rs.next_row().unwrap();
//!     assert!(row.get_by_name("name").is_some());
//! }
//!
//! // Out-of-range access parks the cursor on the last row
//! assert!(rs.row(10).is_err());
//! assert_eq!(rs.current_row_number(), 1);
//! assert!(rs.is_eof());
//! ```

#![no_std]

extern crate alloc;

pub mod cursor;
pub mod options;
mod record_set;
mod report;
pub mod source;
pub mod store;

pub use cursor::{Cursor, Outcome};
pub use options::{BulkAppend, RecordSetOptions};
pub use record_set::{RecordSet, Seek};
pub use source::{MemorySource, ResultSource};
pub use store::RowStore;

/// Library name and version, as shown in record set reports.
pub const VERSION: &str = concat!("rowset v", env!("CARGO_PKG_VERSION"));
