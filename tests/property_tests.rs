//! Property-based tests for tidytable.
//!
//! These verify structural invariants over generated frames: duplicate
//! removal is idempotent and order-preserving, and the melt keeps row
//! accounting consistent.

use proptest::prelude::*;

use tidytable::{DataFrame, MeltOptions, Value, drop_duplicates, find_duplicates, wide_to_long};

/// Generate a single cell value.
fn value() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<i64>().prop_map(Value::Int),
        (-1000i32..1000).prop_map(|n| Value::Float(n as f64 / 10.0)),
        "[a-z]{0,6}".prop_map(Value::Str),
    ]
}

/// Generate a frame with 1-4 columns and 0-30 rows.
fn frame() -> impl Strategy<Value = DataFrame> {
    (1usize..=4).prop_flat_map(|width| {
        let rows = prop::collection::vec(prop::collection::vec(value(), width), 0..30);
        rows.prop_map(move |rows| {
            let columns = (0..width).map(|i| format!("c{}", i)).collect();
            DataFrame::new(columns, rows).expect("generated rows are aligned")
        })
    })
}

proptest! {
    #[test]
    fn drop_duplicates_is_idempotent(frame in frame()) {
        let once = drop_duplicates(&frame);
        let twice = drop_duplicates(&once);
        prop_assert_eq!(&once, &twice);
        prop_assert_eq!(find_duplicates(&once).count, 0);
    }

    #[test]
    fn drop_duplicates_accounting(frame in frame()) {
        let report = find_duplicates(&frame);
        let cleaned = drop_duplicates(&frame);
        prop_assert_eq!(cleaned.row_count() + report.count, frame.row_count());
        prop_assert!(report.preview.row_count() <= 5);
    }

    #[test]
    fn melt_row_count_matches_grid(values in prop::collection::vec((any::<i64>(), any::<i64>()), 1..20)) {
        let rows = values
            .iter()
            .enumerate()
            .map(|(i, &(a, b))| vec![
                Value::Str(format!("entity{}", i)),
                Value::Int(a),
                Value::Int(b),
            ])
            .collect();
        let wide = DataFrame::new(
            vec!["entity".to_string(), "1952".to_string(), "1957".to_string()],
            rows,
        )
        .unwrap();

        let options = MeltOptions { drop_missing: false, ..MeltOptions::default() };
        let long = wide_to_long(&wide, &["entity"], &options).unwrap();
        // one output row per (input row x year column)
        prop_assert_eq!(long.row_count(), wide.row_count() * 2);
        prop_assert_eq!(long.column_count(), 3);
    }
}
