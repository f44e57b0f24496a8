//! Benchmarks for individual AM chain stages.

mod channel;
mod envelope;
mod filter;
mod oscillator;
mod spectrum;

pub use channel::bench_channel;
pub use envelope::bench_envelope;
pub use filter::bench_filter;
pub use oscillator::bench_oscillator;
pub use spectrum::bench_spectrum;
