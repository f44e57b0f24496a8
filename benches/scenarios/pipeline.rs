//! Benchmarks for complete pipeline runs.

use std::hint::black_box;

use amlab::{AmConfig, AmPipeline};
use criterion::{BenchmarkId, Criterion};
use rand::SeedableRng;
use rand_pcg::Pcg64;

pub fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/pipeline");
    group.sample_size(20);

    // === REFERENCE: 1 s at 10 kHz, 5 dB SNR ===
    // === CLEAN: same chain at 40 dB ===
    for (name, snr_db) in [("reference", 5.0), ("clean", 40.0)] {
        let Ok(pipeline) = AmPipeline::new(AmConfig::default().snr_db(snr_db)) else {
            continue;
        };
        let mut rng = Pcg64::seed_from_u64(7);
        group.bench_with_input(BenchmarkId::new(name, 10_000), &snr_db, |b, _| {
            b.iter(|| black_box(pipeline.run(&mut rng)))
        });
    }

    // === LONG: 4 s at 10 kHz ===
    if let Ok(pipeline) = AmPipeline::new(AmConfig::default().duration(4.0)) {
        let mut rng = Pcg64::seed_from_u64(7);
        group.bench_with_input(BenchmarkId::new("long", 40_000), &4.0, |b, _| {
            b.iter(|| black_box(pipeline.run(&mut rng)))
        });
    }

    group.finish();
}
