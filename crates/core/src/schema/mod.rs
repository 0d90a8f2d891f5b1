//! Schema module for rowset.
//!
//! This module contains the column definitions captured from a result source
//! and the fingerprint used to check rows against them.

mod column;
mod definition;
mod fingerprint;

pub use column::Column;
pub use definition::{Schema, SchemaBuilder};
pub use fingerprint::SchemaFingerprint;
