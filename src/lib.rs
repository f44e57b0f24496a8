//! Amplitude modulation, end to end.
//!
//! A message tone is modulated onto a carrier, pushed through an additive
//! white Gaussian noise channel and recovered again with an envelope
//! detector followed by a Butterworth low-pass filter. Every stage lives in
//! [`dsp`] as a pure function over whole sample arrays; [`pipeline`] wires
//! them together from one validated [`AmConfig`].

pub mod config;
pub mod dsp;
pub mod error;
pub mod pipeline;

pub use config::AmConfig;
pub use error::{AmError, AmResult};
pub use pipeline::{AmPipeline, PipelineOutput};

/// Added to spectrum magnitudes before taking a logarithm.
pub const SPECTRUM_FLOOR: f64 = 1e-12;
