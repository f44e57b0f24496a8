//! Message and carrier tone synthesis.

/*
Reference Tones
===============

Both ends of the AM chain start from a pure tone evaluated on the shared
time grid:

    message   m(t) = sin(2π · fm · t)      slow, carries the information
    carrier   c(t) = cos(2π · fc · t)      fast, what the antenna radiates

Radios generate the carrier with a crystal or LC oscillator; the message is
whatever you want to send (voice, data). Here both are single frequencies so
the spectrum stays readable: one carrier line and two sidebands.


Nyquist
-------

A sampled tone is only meaningful below half the sample rate:

    f < fs / 2

Above that it aliases, folding back to a lower frequency. With fs = 10 kHz a
1 kHz carrier sits comfortably at 10 samples per cycle. `render` does not
refuse an aliasing frequency (it is still a well defined array), but the
pipeline configuration does.
*/

use std::f64::consts::TAU;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::time::TimeGrid;

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Cosine,
}

/// A unit-amplitude tone at a fixed frequency and zero phase offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub waveform: Waveform,
    pub frequency_hz: f64,
}

impl Tone {
    pub fn sine(frequency_hz: f64) -> Self {
        Self {
            waveform: Waveform::Sine,
            frequency_hz,
        }
    }

    pub fn cosine(frequency_hz: f64) -> Self {
        Self {
            waveform: Waveform::Cosine,
            frequency_hz,
        }
    }

    /// True when the tone can be sampled at `sample_rate` without aliasing.
    pub fn is_below_nyquist(&self, sample_rate: f64) -> bool {
        self.frequency_hz.abs() < sample_rate / 2.0
    }

    /// Value of the tone at time `t` seconds.
    #[inline]
    pub fn at(&self, t: f64) -> f64 {
        let phase = TAU * self.frequency_hz * t;
        match self.waveform {
            Waveform::Sine => phase.sin(),
            Waveform::Cosine => phase.cos(),
        }
    }

    /// Evaluate the tone at every timestamp of `grid`.
    pub fn render(&self, grid: &TimeGrid) -> Vec<f64> {
        grid.times().iter().map(|&t| self.at(t)).collect()
    }
}
