//! Criterion benchmarks for the simulators.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use limit_models::{DistributionKind, Registry};
use limit_sim::clt::{CltConfig, CltSimulator};
use limit_sim::pi::{PiConfig, PiEstimator};
use limit_sim::slln::{SllnConfig, SllnSimulator};

fn bench_slln(c: &mut Criterion) {
    let registry = Registry::standard().unwrap();
    let mut group = c.benchmark_group("slln");

    for n in [1_000usize, 10_000, 100_000] {
        let sim = SllnSimulator::new(SllnConfig::builder().n_samples(n).build().unwrap());
        group.bench_with_input(BenchmarkId::new("analyse_all", n), &n, |b, _| {
            b.iter(|| black_box(sim.analyse_all(&registry)))
        });
    }
    group.finish();
}

fn bench_clt(c: &mut Criterion) {
    let registry = Registry::standard().unwrap();
    let uniform = registry.get(DistributionKind::Uniform).unwrap();
    let sim = CltSimulator::new(CltConfig::default());

    c.bench_function("clt_default_sizes", |b| {
        b.iter(|| black_box(sim.run(uniform).unwrap()))
    });
}

fn bench_pi(c: &mut Criterion) {
    let estimator = PiEstimator::new(PiConfig::builder().n_points(100_000).build().unwrap());
    c.bench_function("pi_100k", |b| b.iter(|| black_box(estimator.run())));
}

criterion_group!(benches, bench_slln, bench_clt, bench_pi);
criterion_main!(benches);
