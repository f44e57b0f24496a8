//! Benchmarks for the AWGN channel.

use std::hint::black_box;

use amlab::dsp::AwgnChannel;
use criterion::{BenchmarkId, Criterion};
use rand::SeedableRng;
use rand_pcg::Pcg64;

use crate::{am_signal, SIGNAL_SIZES};

pub fn bench_channel(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/channel");
    let mut rng = Pcg64::seed_from_u64(0);

    for &size in SIGNAL_SIZES {
        let signal = am_signal(size);

        for snr_db in [5.0, 40.0] {
            let Ok(channel) = AwgnChannel::new(snr_db) else {
                continue;
            };
            group.bench_with_input(
                BenchmarkId::new(format!("snr{snr_db}"), size),
                &size,
                |b, _| b.iter(|| channel.transmit(black_box(&signal), &mut rng)),
            );
        }
    }

    group.finish();
}
