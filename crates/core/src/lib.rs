//! Rowset Core - Core types and schema definitions for rowset.
//!
//! This crate provides the foundational types shared by record sets and the
//! result sources they are built from:
//!
//! - `DataType`: Column type tags (Boolean, Integer, String, Id, Time, Double, Undefined)
//! - `Value`: Typed values held by row fields
//! - `Row`: An ordered set of named values
//! - `schema`: Column definitions, schemas and schema fingerprints
//! - `Error`: Error types for record set operations
//!
//! # Example
//!
//! ```rust
//! use rowset_core::{DataType, Row, Value};
//! use rowset_core::schema::SchemaBuilder;
//!
//! let schema = SchemaBuilder::new()
//!     .add_column("id", DataType::Integer)
//!     .unwrap()
//!     .add_column("name", DataType::String)
//!     .unwrap()
//!     .build();
//!
//! let row = Row::default().with("ID", 1i64).with("Name", "Alice");
//!
//! assert!(schema.check_row(&row).is_ok());
//! assert_eq!(row.get_by_name("name"), Some(&Value::String("Alice".into())));
//! ```

#![no_std]

extern crate alloc;

mod error;
mod row;
pub mod schema;
mod types;
mod value;

pub use error::{Direction, Error, Result};
pub use row::Row;
pub use types::DataType;
pub use value::Value;
