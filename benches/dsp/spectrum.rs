//! Benchmarks for one-sided magnitude spectra.

use std::hint::black_box;

use amlab::dsp::Spectrum;
use criterion::{BenchmarkId, Criterion};

use crate::{am_signal, SAMPLE_RATE, SIGNAL_SIZES};

pub fn bench_spectrum(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/spectrum");

    for &size in SIGNAL_SIZES {
        let signal = am_signal(size);
        group.bench_with_input(BenchmarkId::new("analyze", size), &size, |b, _| {
            b.iter(|| Spectrum::analyze(black_box(&signal), SAMPLE_RATE))
        });
    }

    group.finish();
}
