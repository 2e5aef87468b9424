//! # Math Benchmarks
//!
//! Performance benchmarks for mathlib-core hot paths.
//!
//! Run with: `cargo bench -p mathlib-core`

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use mathlib_core::{
    Evaluator, MathValue, Matrix, Matrix4f, Operation, Vector, Vector3f, Vector4f,
    values_from_bytes, values_to_bytes,
};
use std::hint::black_box;

fn sample_matrix() -> Matrix4f {
    Matrix4f::from_rows([
        [4.0, 0.5, 0.0, 1.0],
        [0.0, 3.0, 1.0, 0.0],
        [0.2, 1.0, 2.0, 0.0],
        [1.0, 0.0, 0.3, 5.0],
    ])
}

// =============================================================================
// BENCHMARKS
// =============================================================================

fn bench_vector_ops(c: &mut Criterion) {
    let mut group = c.benchmark_group("vector");
    let a = Vector3f::new(1.0, 2.0, 3.0);
    let b = Vector3f::new(-4.0, 0.5, 2.0);

    group.bench_function("nor", |bench| {
        bench.iter(|| {
            let mut v = black_box(a);
            v.nor();
            v
        });
    });
    group.bench_function("crs", |bench| {
        bench.iter(|| {
            let mut v = black_box(a);
            v.crs(black_box(&b));
            v
        });
    });
    group.bench_function("lerp", |bench| {
        bench.iter(|| {
            let mut v = black_box(a);
            v.lerp(black_box(&b), 0.25);
            v
        });
    });

    group.finish();
}

fn bench_matrix_ops(c: &mut Criterion) {
    let mut group = c.benchmark_group("matrix4");
    let m = sample_matrix();
    let v = Vector4f::new(1.0, 2.0, 3.0, 1.0);

    group.bench_function("mul", |bench| bench.iter(|| black_box(m) * black_box(m)));
    group.bench_function("det", |bench| bench.iter(|| black_box(m).det()));
    group.bench_function("inv", |bench| {
        bench.iter(|| {
            let mut inv = black_box(m);
            inv.inv().map(|r| *r)
        });
    });
    group.bench_function("transform", |bench| {
        bench.iter(|| black_box(m).transform(black_box(&v)));
    });

    group.finish();
}

fn bench_batch_eval(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate_batch");
    let evaluator = Evaluator::default();

    for size in [100, 1000, 10000].iter() {
        let ops: Vec<Operation> = (0..*size)
            .map(|i| Operation::Inverse {
                m: {
                    let mut m = sample_matrix();
                    m.scl(1.0 + i as f32 * 0.001);
                    m.into()
                },
            })
            .collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), &ops, |bench, ops| {
            bench.iter(|| evaluator.evaluate_batch(black_box(ops)));
        });
    }

    group.finish();
}

fn bench_persistence(c: &mut Criterion) {
    let mut group = c.benchmark_group("persistence");
    let values: Vec<MathValue> = (0..1000)
        .map(|i| MathValue::Vector(Vector3f::new(i as f32, 1.0, -1.0).into()))
        .collect();
    let bytes = values_to_bytes(&values).unwrap_or_default();

    group.bench_function("serialize_1000", |bench| {
        bench.iter(|| values_to_bytes(black_box(&values)));
    });
    group.bench_function("deserialize_1000", |bench| {
        bench.iter(|| values_from_bytes(black_box(&bytes)));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_vector_ops,
    bench_matrix_ops,
    bench_batch_eval,
    bench_persistence
);
criterion_main!(benches);
