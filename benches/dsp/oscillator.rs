//! Benchmarks for tone rendering and the modulator.

use std::hint::black_box;

use amlab::dsp::modulate::modulate_am;
use amlab::dsp::{TimeGrid, Tone};
use criterion::{BenchmarkId, Criterion};

use crate::{SAMPLE_RATE, SIGNAL_SIZES};

pub fn bench_oscillator(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/oscillator");

    for &size in SIGNAL_SIZES {
        let Ok(grid) = TimeGrid::new(SAMPLE_RATE, size as f64 / SAMPLE_RATE) else {
            continue;
        };
        let message_tone = Tone::sine(2.0);
        let carrier_tone = Tone::cosine(1_000.0);

        group.bench_with_input(BenchmarkId::new("carrier", size), &size, |b, _| {
            b.iter(|| carrier_tone.render(black_box(&grid)))
        });

        let message = message_tone.render(&grid);
        let carrier = carrier_tone.render(&grid);
        group.bench_with_input(BenchmarkId::new("modulate", size), &size, |b, _| {
            b.iter(|| modulate_am(black_box(&message), black_box(&carrier), 0.7))
        });
    }

    group.finish();
}
