//! Benchmarks for Butterworth low-pass design and filtering.

use std::hint::black_box;

use amlab::dsp::filter::Butterworth;
use criterion::{BenchmarkId, Criterion};

use crate::{SAMPLE_RATE, SIGNAL_SIZES};

pub fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/filter");

    for order in [2, 4, 8] {
        group.bench_with_input(BenchmarkId::new("design", order), &order, |b, &order| {
            b.iter(|| Butterworth::lowpass(black_box(order), 10.0, SAMPLE_RATE))
        });
    }

    for &size in SIGNAL_SIZES {
        // Baseband-like input: slow sine plus a fast ripple to reject
        let input: Vec<f64> = (0..size)
            .map(|i| {
                let t = i as f64 / SAMPLE_RATE;
                (std::f64::consts::TAU * 2.0 * t).sin() + 0.1 * ((i % 7) as f64 - 3.0)
            })
            .collect();

        for order in [4, 8] {
            let Ok(filter) = Butterworth::lowpass(order, 10.0, SAMPLE_RATE) else {
                continue;
            };
            group.bench_with_input(
                BenchmarkId::new(format!("order{order}"), size),
                &size,
                |b, _| b.iter(|| filter.filter(black_box(&input))),
            );
        }
    }

    group.finish();
}
