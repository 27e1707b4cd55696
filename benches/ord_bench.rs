//! Ord engine benchmark.
//!
//! Measures deep equality and total-order sorting over nested `Value`s.

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use fp_prelude::ord::{self, Orderable, Value};
use std::hint::black_box;

const SIZES: [usize; 3] = [10, 100, 1000];

/// A list of small mixed-kind records: `[index, ("label", flag)]`.
fn generate_values(size: usize) -> Vec<Value> {
    (0..size)
        .map(|index| {
            let number = u32::try_from((index * 31) % 97).unwrap_or(0);
            Value::array(vec![
                Value::from(number),
                Value::tuple(format!("label-{index}"), index % 2 == 0),
            ])
        })
        .collect()
}

fn benchmark_deep_equality(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("ord_equals");

    for size in SIZES {
        let left = Value::array(generate_values(size));
        let right = left.clone();
        group.bench_with_input(BenchmarkId::new("equals", size), &size, |bencher, _| {
            bencher.iter(|| black_box(ord::equals(black_box(&left), black_box(&right))));
        });
    }

    group.finish();
}

fn benchmark_total_order_sort(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("ord_total_order_sort");

    for size in SIZES {
        let values = generate_values(size);
        group.bench_with_input(BenchmarkId::new("sort_by", size), &size, |bencher, _| {
            bencher.iter_batched(
                || values.clone(),
                |mut values| {
                    values.sort_by(|left, right| left.total_order(right));
                    black_box(values)
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_deep_equality, benchmark_total_order_sort);

criterion_main!(benches);
