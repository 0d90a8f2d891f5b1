//! Schema fingerprints.
//!
//! A fingerprint is the ordered, case-folded sequence of column names. Two
//! fingerprints are equal exactly when both sequences have the same length
//! and every name matches case-insensitively at the same position. Names are
//! kept as separate elements, so `["ab", "c"]` and `["a", "bc"]` differ.

use crate::row::fold_case;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

/// Structural fingerprint of an ordered list of column names.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct SchemaFingerprint {
    names: Vec<String>,
}

impl SchemaFingerprint {
    /// Computes the fingerprint of the given names.
    pub fn of<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            names: names
                .into_iter()
                .map(|n| fold_case(n.as_ref()).collect::<String>())
                .collect(),
        }
    }

    /// Returns the number of names in the fingerprint.
    #[inline]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if the fingerprint covers no columns.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Returns the case-folded names.
    pub fn names(&self) -> &[String] {
        &self.names
    }
}

impl fmt::Display for SchemaFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, name) in self.names.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(name)?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_case_is_ignored() {
        assert_eq!(
            SchemaFingerprint::of(["ID", "Name"]),
            SchemaFingerprint::of(["id", "name"])
        );
    }

    #[test]
    fn test_order_matters() {
        assert_ne!(
            SchemaFingerprint::of(["id", "name"]),
            SchemaFingerprint::of(["name", "id"])
        );
    }

    #[test]
    fn test_split_names_do_not_collide() {
        assert_ne!(
            SchemaFingerprint::of(["ab", "c"]),
            SchemaFingerprint::of(["a", "bc"])
        );
    }

    #[test]
    fn test_length_matters() {
        assert_ne!(
            SchemaFingerprint::of(["id"]),
            SchemaFingerprint::of(["id", "name"])
        );
        assert!(SchemaFingerprint::of::<_, &str>([]).is_empty());
    }

    #[test]
    fn test_final_sigma_folds_like_row_lookup() {
        assert_eq!(
            SchemaFingerprint::of(["ΟΔΟΣ"]),
            SchemaFingerprint::of(["οδοσ"])
        );
        assert_eq!(SchemaFingerprint::of(["ΟΔΟΣ"]).names()[0], "οδοσ");
    }

    #[test]
    fn test_display() {
        assert_eq!(SchemaFingerprint::of(["A", "b"]).to_string(), "[a, b]");
    }
}
