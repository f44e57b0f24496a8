//! Uniform sampling clock.

/*
Sampling Clock
==============

In a real radio an oscillator defines time: an ADC takes a sample every
tick. Here the clock is a plain array of timestamps.

    t[i] = i / fs        for i in 0..N,   N = floor(fs × T)

The interval is half-open: t = 0 is included, t = T is not. That way a tone
with an integer number of cycles in T wraps around seamlessly, which keeps
FFT bins clean.

    fs = 10 kHz, T = 1 s  →  N = 10 000,  dt = 0.000100 s
*/

use crate::error::{AmError, AmResult};

/// Timestamps shared by every array in the chain.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeGrid {
    sample_rate: f64,
    duration: f64,
    times: Vec<f64>,
}

impl TimeGrid {
    /// Build the grid for `sample_rate` Hz over `duration` seconds.
    pub fn new(sample_rate: f64, duration: f64) -> AmResult<Self> {
        if !(sample_rate.is_finite() && sample_rate > 0.0) {
            return Err(AmError::invalid(
                "sample_rate",
                format!("must be finite and > 0, got {sample_rate}"),
            ));
        }
        if !(duration.is_finite() && duration > 0.0) {
            return Err(AmError::invalid(
                "duration",
                format!("must be finite and > 0, got {duration}"),
            ));
        }

        let n = (sample_rate * duration).floor() as usize;
        if n == 0 {
            return Err(AmError::invalid(
                "duration",
                format!("{duration} s at {sample_rate} Hz holds no samples"),
            ));
        }

        let times = (0..n).map(|i| i as f64 / sample_rate).collect();

        Ok(Self {
            sample_rate,
            duration,
            times,
        })
    }

    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Time step between consecutive samples.
    pub fn dt(&self) -> f64 {
        1.0 / self.sample_rate
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Number of samples covering `seconds`, rounded up and capped at the grid length.
    pub fn samples_in(&self, seconds: f64) -> usize {
        ((seconds.max(0.0) * self.sample_rate).ceil() as usize).min(self.len())
    }
}
