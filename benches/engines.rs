// benches/engines.rs
//
// Reference vs. parallel engine on the two benchmark kernels.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use arraybench::core::StaticRandom;
use arraybench::engine::create_engine;
use arraybench::{facade, DType, EngineKind, ExecutionEngine, Operand};

fn bench_lu(c: &mut Criterion) {
    let mut group = c.benchmark_group("lu");
    group.sample_size(10);

    for &n in &[64usize, 256] {
        for kind in [EngineKind::Reference, EngineKind::Parallel] {
            let engine = create_engine(kind, None).unwrap();
            let a = engine.random(&[n, n], DType::Float64, &mut StaticRandom::new(Some(1))).unwrap();
            group.bench_with_input(BenchmarkId::new(kind.name(), n), &a, |b, a| {
                b.iter(|| engine.lu(black_box(a)).unwrap())
            });
        }
    }
    group.finish();
}

fn bench_pi_round(c: &mut Criterion) {
    let mut group = c.benchmark_group("pi_round");
    let power = facade().ufunc("power").unwrap();
    let add = facade().ufunc("add").unwrap();
    let sqrt = facade().ufunc("sqrt").unwrap();
    let less_equal = facade().ufunc("less_equal").unwrap();

    for &n in &[100_000usize, 1_000_000] {
        for kind in [EngineKind::Reference, EngineKind::Parallel] {
            let engine = create_engine(kind, None).unwrap();
            let mut rng = StaticRandom::new(Some(2));
            let x = engine.random(&[n], DType::Float64, &mut rng).unwrap();
            let y = engine.random(&[n], DType::Float64, &mut rng).unwrap();

            group.bench_function(BenchmarkId::new(kind.name(), n), |b| {
                b.iter(|| {
                    let e = engine.as_ref();
                    let x2 = power.call(e, &[Operand::from(&x), Operand::Scalar(2.0)]).unwrap();
                    let y2 = power.call(e, &[Operand::from(&y), Operand::Scalar(2.0)]).unwrap();
                    let r2 = add.call(e, &[Operand::from(&x2), Operand::from(&y2)]).unwrap();
                    let r = sqrt.call(e, &[Operand::from(&r2)]).unwrap();
                    let inside = less_equal.call(e, &[Operand::from(&r), Operand::Scalar(1.0)]).unwrap();
                    black_box(add.reduce(e, &inside).unwrap())
                })
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_lu, bench_pi_round);
criterion_main!(benches);
