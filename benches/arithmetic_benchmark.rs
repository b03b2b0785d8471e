// ============================================================================
// Arithmetic Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Decimal-safe operations - the four scaled-integer operations
// 2. Native baseline - the same operations on raw f64
// 3. Digit counting - the string-derived precision helper in isolation
//
// The decimal-safe path pays for a string conversion per operand; these
// benchmarks show what that costs relative to a bare f64 op.

use coremath::numeric::{add, divide, fraction_digits, multiply, subtract};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

// ============================================================================
// Decimal-Safe Operations
// ============================================================================

fn benchmark_decimal_safe_ops(c: &mut Criterion) {
    let mut group = c.benchmark_group("decimal_safe");

    let pairs = [(0.1, 0.2), (19.99, 4.35), (123.456, 0.001)];

    for (a, b) in pairs.iter() {
        group.bench_with_input(BenchmarkId::new("add", format!("{a}+{b}")), &(*a, *b), |bench, &(a, b)| {
            bench.iter(|| black_box(add(black_box(a), black_box(b))));
        });
        group.bench_with_input(BenchmarkId::new("subtract", format!("{a}-{b}")), &(*a, *b), |bench, &(a, b)| {
            bench.iter(|| black_box(subtract(black_box(a), black_box(b))));
        });
        group.bench_with_input(BenchmarkId::new("multiply", format!("{a}*{b}")), &(*a, *b), |bench, &(a, b)| {
            bench.iter(|| black_box(multiply(black_box(a), black_box(b))));
        });
        group.bench_with_input(BenchmarkId::new("divide", format!("{a}/{b}")), &(*a, *b), |bench, &(a, b)| {
            bench.iter(|| black_box(divide(black_box(a), black_box(b))));
        });
    }

    group.finish();
}

// ============================================================================
// Native f64 Baseline
// ============================================================================

fn benchmark_native_baseline(c: &mut Criterion) {
    let mut group = c.benchmark_group("native_f64");

    group.bench_function("add", |bench| {
        bench.iter(|| black_box(black_box(0.1) + black_box(0.2)));
    });
    group.bench_function("multiply", |bench| {
        bench.iter(|| black_box(black_box(0.1) * black_box(0.2)));
    });

    group.finish();
}

// ============================================================================
// Digit Counting
// ============================================================================

fn benchmark_digit_counting(c: &mut Criterion) {
    let mut group = c.benchmark_group("fraction_digits");

    for value in [42.0, 0.1, 123.456789].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(value), value, |bench, &v| {
            bench.iter(|| black_box(fraction_digits(black_box(v))));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_decimal_safe_ops,
    benchmark_native_baseline,
    benchmark_digit_counting
);
criterion_main!(benches);
