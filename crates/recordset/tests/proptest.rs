//! Property-based tests for rowset using proptest.

use proptest::prelude::*;
use rowset::{MemorySource, Outcome, RecordSet};
use rowset_core::schema::{Schema, SchemaBuilder};
use rowset_core::{DataType, Error, Row};

fn schema() -> Schema {
    SchemaBuilder::new()
        .add_column("id", DataType::Integer)
        .unwrap()
        .add_column("name", DataType::String)
        .unwrap()
        .build()
}

fn rows(ids: &[i64]) -> Vec<Row> {
    ids.iter()
        .map(|&id| Row::default().with("id", id).with("name", format!("n{}", id)))
        .collect()
}

fn build(ids: &[i64]) -> RecordSet {
    RecordSet::new(MemorySource::new(schema(), rows(ids))).unwrap()
}

proptest! {
    /// Test that counts and flags after construction follow the row count.
    #[test]
    fn counts_after_construction(ids in prop::collection::vec(any::<i64>(), 0..50)) {
        let rs = build(&ids);
        prop_assert_eq!(rs.row_count(), ids.len());
        prop_assert_eq!(rs.column_count(), 2);
        prop_assert_eq!(rs.is_empty(), ids.is_empty());
        prop_assert!(rs.is_bof());
        prop_assert_eq!(rs.is_eof(), ids.is_empty());
    }

    /// Test that forward traversal visits every row once, in order.
    #[test]
    fn forward_traversal_visits_all(ids in prop::collection::vec(any::<i64>(), 0..50)) {
        let mut rs = build(&ids);
        rs.reset_to_beginning();
        let mut seen = Vec::new();
        while rs.has_next() {
            seen.push(rs.next_row().unwrap().clone());
        }
        prop_assert_eq!(seen, rows(&ids));
    }

    /// Test that backward traversal visits every row once, in reverse order.
    #[test]
    fn backward_traversal_visits_all(ids in prop::collection::vec(any::<i64>(), 0..50)) {
        let mut rs = build(&ids);
        rs.reset_to_end();
        let mut seen = Vec::new();
        while rs.has_previous() {
            seen.push(rs.previous_row().unwrap().clone());
        }
        let mut expected = rows(&ids);
        expected.reverse();
        prop_assert_eq!(seen, expected);
    }

    /// Test that in-range access never raises BOF or EOF.
    #[test]
    fn in_range_access_clears_flags(len in 1usize..40, pick in any::<prop::sample::Index>()) {
        let ids: Vec<i64> = (0..len as i64).collect();
        let mut rs = build(&ids);
        let index = pick.index(len) as isize;
        prop_assert!(rs.row(index).is_ok());
        prop_assert!(!rs.is_bof());
        prop_assert!(!rs.is_eof());
        prop_assert_eq!(rs.current_row_number(), index);
    }

    /// Test that out-of-range access parks the cursor at the nearest boundary.
    #[test]
    fn out_of_range_access_clamps(len in 1usize..40, offset in 1isize..1000, before in any::<bool>()) {
        let ids: Vec<i64> = (0..len as i64).collect();
        let mut rs = build(&ids);
        let index = if before { -offset } else { len as isize - 1 + offset };

        let outcome = rs.seek(index).unwrap().outcome;
        prop_assert!(outcome.is_clamped());
        prop_assert!(matches!(rs.row(index), Err(Error::Boundary { .. })), "expected Error::Boundary");

        if before {
            prop_assert_eq!(outcome, Outcome::ClampedBefore);
            prop_assert_eq!(rs.current_row_number(), 0);
            prop_assert!(rs.is_bof() && !rs.is_eof());
        } else {
            prop_assert_eq!(outcome, Outcome::ClampedAfter);
            prop_assert_eq!(rs.current_row_number(), len as isize - 1);
            prop_assert!(rs.is_eof() && !rs.is_bof());
        }
    }

    /// Test that a matching append lands at the old row count.
    #[test]
    fn append_lands_at_old_count(ids in prop::collection::vec(any::<i64>(), 0..30), id in any::<i64>()) {
        let mut rs = build(&ids);
        let old = rs.row_count();
        let new_row = Row::default().with("ID", id).with("NAME", "appended");
        rs.add_row(new_row.clone()).unwrap();
        prop_assert_eq!(rs.row_count(), old + 1);
        prop_assert_eq!(rs.row(old as isize).unwrap(), &new_row);
    }

    /// Test that a mismatching append leaves the record set unchanged.
    #[test]
    fn mismatched_append_is_rejected(ids in prop::collection::vec(any::<i64>(), 0..30), name in "[a-z]{1,8}") {
        prop_assume!(name != "name" && name != "id");
        let mut rs = build(&ids);
        let bad = Row::default().with("id", 0i64).with(name, "x");
        prop_assert!(rs.add_row(bad).is_err());
        prop_assert_eq!(rs.row_count(), ids.len());
    }

    /// Test that the set view holds exactly the distinct rows.
    #[test]
    fn set_view_deduplicates(ids in prop::collection::vec(0i64..10, 0..50)) {
        let rs = build(&ids);
        let distinct: std::collections::HashSet<i64> = ids.iter().copied().collect();
        prop_assert_eq!(rs.as_set().len(), distinct.len());
        prop_assert_eq!(rs.as_list().len(), ids.len());
    }
}
