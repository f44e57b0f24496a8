//! Benchmarks for the analytic signal and envelope detector.

use std::hint::black_box;

use amlab::dsp::envelope::{detect, recover_baseband};
use amlab::dsp::hilbert::hilbert_transform;
use criterion::{BenchmarkId, Criterion};

use crate::{am_signal, SIGNAL_SIZES};

pub fn bench_envelope(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/envelope");

    for &size in SIGNAL_SIZES {
        let signal = am_signal(size);

        group.bench_with_input(BenchmarkId::new("hilbert", size), &size, |b, _| {
            b.iter(|| hilbert_transform(black_box(&signal)))
        });

        group.bench_with_input(BenchmarkId::new("detect", size), &size, |b, _| {
            b.iter(|| detect(black_box(&signal)))
        });

        let envelope = detect(&signal);
        group.bench_with_input(BenchmarkId::new("baseband", size), &size, |b, _| {
            b.iter(|| recover_baseband(black_box(&envelope), 0.7))
        });
    }

    group.finish();
}
