//! Criterion benchmarks for pi_engine.
//!
//! Benchmarks cover:
//! - Uniform RNG throughput
//! - Both estimation strategies at several trial counts
//! - Sequential versus parallel execution

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pi_engine::mc::{EstimationMethod, ExecutionMode, Simulator, TrialConfig};
use pi_engine::rng::EstimatorRng;

/// Benchmark uniform generation (foundation for every estimate).
fn bench_rng_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("rng_generation");

    for n_samples in [100, 10_000, 1_000_000] {
        group.bench_with_input(
            BenchmarkId::new("uniform_batch", n_samples),
            &n_samples,
            |b, &n| {
                let mut rng = EstimatorRng::from_seed(42);
                let mut buffer = vec![0.0; n];
                b.iter(|| {
                    rng.fill_uniform(&mut buffer);
                    black_box(buffer.iter().sum::<f64>())
                });
            },
        );
    }

    group.finish();
}

/// Benchmark both strategies with varying trial counts.
fn bench_simulation(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulation");
    group.sample_size(20);

    for method in EstimationMethod::ALL {
        for trials in [100, 10_000, 100_000] {
            for mode in [ExecutionMode::Sequential, ExecutionMode::Parallel] {
                let config = TrialConfig::builder()
                    .trials(trials)
                    .method(method)
                    .mode(mode)
                    .seed(42)
                    .build()
                    .unwrap();
                let simulator = Simulator::new(config).unwrap();

                group.bench_with_input(
                    BenchmarkId::new(format!("{}_{:?}", method, mode), trials),
                    &simulator,
                    |b, simulator| b.iter(|| black_box(simulator.run())),
                );
            }
        }
    }

    group.finish();
}

criterion_group!(benches, bench_rng_generation, bench_simulation);
criterion_main!(benches);
