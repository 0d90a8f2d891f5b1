//! Benchmarks for record set construction, traversal and append.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rowset::{MemorySource, RecordSet};
use rowset_core::schema::{Schema, SchemaBuilder};
use rowset_core::{DataType, Row, Value};

fn create_test_schema() -> Schema {
    SchemaBuilder::new()
        .add_column("r_object_id", DataType::Id)
        .unwrap()
        .add_column("object_name", DataType::String)
        .unwrap()
        .add_column("r_creation_date", DataType::Time)
        .unwrap()
        .add_column("r_full_content_size", DataType::Double)
        .unwrap()
        .build()
}

fn create_rows(count: u64) -> Vec<Row> {
    (1..=count)
        .map(|i| {
            Row::default()
                .with("r_object_id", Value::Id(format!("09{:014x}", i)))
                .with("object_name", format!("doc{}.txt", i))
                .with("r_creation_date", Value::Time(1_700_000_000_000 + i as i64))
                .with("r_full_content_size", i as f64 * 1.5)
        })
        .collect()
}

fn build(count: u64) -> RecordSet {
    RecordSet::new(MemorySource::new(create_test_schema(), create_rows(count))).unwrap()
}

/// Benchmark: draining a source into a record set
fn construction_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("record_set_construction");

    for count in [100u64, 1000, 10000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(count), count, |b, &count| {
            b.iter_batched(
                || MemorySource::new(create_test_schema(), create_rows(count)),
                |source| black_box(RecordSet::new(source).unwrap()),
                criterion::BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

/// Benchmark: forward and backward traversal
fn traversal_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("record_set_traversal");

    for count in [1000u64, 10000].iter() {
        let mut rs = build(*count);

        group.bench_with_input(BenchmarkId::new("forward", count), count, |b, _| {
            b.iter(|| {
                rs.reset_to_beginning();
                let mut visited = 0usize;
                while rs.has_next() {
                    black_box(rs.next_row().unwrap());
                    visited += 1;
                }
                visited
            });
        });

        group.bench_with_input(BenchmarkId::new("backward", count), count, |b, _| {
            b.iter(|| {
                rs.reset_to_end();
                let mut visited = 0usize;
                while rs.has_previous() {
                    black_box(rs.previous_row().unwrap());
                    visited += 1;
                }
                visited
            });
        });
    }

    group.finish();
}

/// Benchmark: schema-checked appends
fn append_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("record_set_append");

    for count in [100u64, 1000].iter() {
        group.bench_with_input(BenchmarkId::new("add_rows", count), count, |b, &count| {
            b.iter_batched(
                || (build(10), create_rows(count)),
                |(mut rs, rows)| {
                    rs.add_rows(rows).unwrap();
                    black_box(rs)
                },
                criterion::BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    construction_benchmark,
    traversal_benchmark,
    append_benchmark
);
criterion_main!(benches);
