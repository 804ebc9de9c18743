use batchsql::{BatchError, Dialect, DialectLimits, InsertBuilder};

struct DialectCase {
    dialect: Dialect,
    max_rows: usize,
    max_params: usize,
}

const CASES: [DialectCase; 2] = [
    DialectCase {
        dialect: Dialect::Postgres,
        max_rows: usize::MAX,
        max_params: 65000,
    },
    DialectCase {
        dialect: Dialect::Mssql,
        max_rows: 2100,
        max_params: usize::MAX,
    },
];

/// Collects the `$n` indices that appear in a rendered fragment.
fn placeholder_indices(query: &str) -> Vec<usize> {
    let mut indices = Vec::new();
    let mut chars = query.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '$' {
            continue;
        }
        let mut index = 0usize;
        while let Some(d) = chars.peek().and_then(|c| c.to_digit(10)) {
            index = index * 10 + d as usize;
            chars.next();
        }
        indices.push(index);
    }
    indices
}

#[test]
fn limits_match_documented_bounds() {
    for case in CASES {
        let builder = InsertBuilder::<i64>::new(case.dialect);
        assert_eq!(builder.max_rows(), case.max_rows, "{}", case.dialect);
        assert_eq!(builder.max_params(), case.max_params, "{}", case.dialect);
    }
}

#[test]
fn postgres_splits_on_parameter_cap() {
    let mut builder = InsertBuilder::new(Dialect::Postgres);
    let full = builder.max_params() / 3; // 21666 three-value rows

    for i in 0..full {
        builder.append([i as i64, 1, 1]).unwrap();
    }
    assert_eq!(builder.batch_count(), 1);

    builder.append([full as i64, 1, 1]).unwrap();
    assert_eq!(builder.batch_count(), 2);

    let batches = builder.to_sql().unwrap();
    assert_eq!(batches[0].args.len(), full * 3);
    // The overflowing row lands whole in the second batch.
    assert_eq!(batches[1].query, "($1,$2,$3)");
    assert_eq!(batches[1].args, &[full as i64, 1, 1]);
}

#[test]
fn mssql_splits_on_row_cap() {
    let mut builder = InsertBuilder::new(Dialect::Mssql);

    for i in 0..builder.max_rows() {
        builder.append([i as i64, 1, 1]).unwrap();
    }
    assert_eq!(builder.batch_count(), 1);

    builder.append([0, 1, 1]).unwrap();
    assert_eq!(builder.batch_count(), 2);

    let batches = builder.to_sql().unwrap();
    assert_eq!(batches[0].args.len(), 2100 * 3);
    assert_eq!(batches[1].query, "($1,$2,$3)");
}

#[test]
fn three_rows_render_one_batch() {
    for case in CASES {
        let mut builder = InsertBuilder::new(case.dialect);
        for _ in 0..3 {
            builder.append(["device", "1", "1"]).unwrap();
        }

        let batches = builder.to_sql().unwrap();
        assert_eq!(batches.len(), 1);
        assert_eq!(batches[0].query, "($1,$2,$3),($4,$5,$6),($7,$8,$9)");
        assert_eq!(batches[0].args.len(), 9);
    }
}

#[test]
fn round_trip_preserves_append_order() {
    let limits = DialectLimits::new(4, 10);
    let mut builder = InsertBuilder::with_limits(Dialect::Postgres, limits);

    let rows: Vec<[i32; 2]> = (0..11).map(|i| [i * 2, i * 2 + 1]).collect();
    for row in &rows {
        builder.append(*row).unwrap();
    }

    let batches = builder.to_sql().unwrap();
    // 10 params and 4 rows per batch both allow at most 4 two-value rows.
    assert_eq!(batches.len(), 3);

    let mut replayed = Vec::new();
    for batch in &batches {
        assert_eq!(batch.args.len() % 2, 0);

        let indices = placeholder_indices(&batch.query);
        let expected: Vec<usize> = (1..=batch.args.len()).collect();
        assert_eq!(indices, expected, "gap-free 1-based index sequence");

        replayed.extend_from_slice(batch.args);
    }

    let flattened: Vec<i32> = rows.iter().flatten().copied().collect();
    assert_eq!(replayed, flattened);
}

#[test]
fn to_sql_is_idempotent() {
    let mut builder = InsertBuilder::new(Dialect::Postgres);
    builder.append([1, 2, 3]).unwrap();
    builder.append([4, 5, 6]).unwrap();

    let first: Vec<_> = builder.to_sql().unwrap();
    let second: Vec<_> = builder.to_sql().unwrap();
    assert_eq!(first, second);
}

#[test]
fn arity_errors_surface_per_dialect() {
    for case in CASES {
        let mut builder = InsertBuilder::new(case.dialect);
        builder.append([1, 2, 3]).unwrap();

        let err = builder.append([1]).unwrap_err();
        assert_eq!(err, BatchError::InconsistentArity { expected: 3, got: 1 });
    }
}

#[test]
fn oversized_row_is_rejected_up_front() {
    let mut builder = InsertBuilder::new(Dialect::Postgres);
    let row: Vec<i64> = (0..65001).collect();

    let err = builder.append(row).unwrap_err();
    assert_eq!(
        err,
        BatchError::RowTooLarge {
            arity: 65001,
            max_params: 65000
        }
    );
    assert!(builder.is_empty());
}
