//! Signal-processing stages of the AM chain.
//!
//! Every stage takes whole sample arrays and returns a freshly allocated
//! array of the same length. Nothing here mutates its input or keeps state
//! between calls, so each stage can be exercised on its own.

/// AWGN channel model.
pub mod channel;
/// Envelope detection and baseband recovery.
pub mod envelope;
/// Butterworth low-pass design and causal filtering.
pub mod filter;
/// FFT-based analytic signal.
pub mod hilbert;
/// Double-sideband full-carrier modulation.
pub mod modulate;
/// Message and carrier tone synthesis.
pub mod oscillator;
/// One-sided magnitude spectrum.
pub mod spectrum;
/// Scalar measurements over sample arrays.
pub mod stats;
/// Uniform sampling clock.
pub mod time;

pub use channel::AwgnChannel;
pub use filter::Butterworth;
pub use oscillator::{Tone, Waveform};
pub use spectrum::Spectrum;
pub use time::TimeGrid;
