//! One-sided magnitude spectrum.
//!
//! The bench equivalent of a spectrum analyzer: the transmitted AM signal
//! shows one carrier line with a sideband on each side, `fm` Hz away.

use rustfft::{num_complex::Complex, FftPlanner};

use crate::SPECTRUM_FLOOR;

/// Magnitude of the DFT of a real signal, bins 0 to N/2.
#[derive(Debug, Clone, PartialEq)]
pub struct Spectrum {
    /// Frequency values for each bin (Hz)
    frequencies: Vec<f64>,
    /// |X[k]|, unnormalized like a plain forward FFT
    magnitudes: Vec<f64>,
    /// Bin spacing fs / N
    resolution: f64,
}

impl Spectrum {
    /// Transform `signal`, sampled at `sample_rate` Hz.
    ///
    /// An empty signal gives an empty spectrum.
    pub fn analyze(signal: &[f64], sample_rate: f64) -> Self {
        let n = signal.len();
        if n == 0 {
            return Self {
                frequencies: Vec::new(),
                magnitudes: Vec::new(),
                resolution: 0.0,
            };
        }

        let mut planner = FftPlanner::<f64>::new();
        let fft = planner.plan_fft_forward(n);

        let mut buffer: Vec<Complex<f64>> =
            signal.iter().map(|&x| Complex::new(x, 0.0)).collect();
        fft.process(&mut buffer);

        // real input: negative-frequency bins mirror the positive ones
        let bins = n / 2 + 1;
        let resolution = sample_rate / n as f64;
        let frequencies = (0..bins).map(|k| k as f64 * resolution).collect();
        let magnitudes = buffer[..bins].iter().map(|bin| bin.norm()).collect();

        Self {
            frequencies,
            magnitudes,
            resolution,
        }
    }

    pub fn len(&self) -> usize {
        self.magnitudes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.magnitudes.is_empty()
    }

    /// Distance between neighbouring bins in Hz.
    pub fn bin_spacing(&self) -> f64 {
        self.resolution
    }

    pub fn frequencies(&self) -> &[f64] {
        &self.frequencies
    }

    pub fn magnitudes(&self) -> &[f64] {
        &self.magnitudes
    }

    /// `log10(|X[k]| + floor)`, safe for bins that are exactly zero.
    pub fn log_magnitudes(&self) -> Vec<f64> {
        self.magnitudes
            .iter()
            .map(|&m| (m + SPECTRUM_FLOOR).log10())
            .collect()
    }

    /// `(frequency, log10 magnitude)` pairs up to and including `max_hz`.
    pub fn band(&self, max_hz: f64) -> Vec<(f64, f64)> {
        self.frequencies
            .iter()
            .zip(self.log_magnitudes())
            .take_while(|(f, _)| **f <= max_hz)
            .map(|(&f, db)| (f, db))
            .collect()
    }

    /// Strongest bin as `(frequency, magnitude)`.
    pub fn peak(&self) -> Option<(f64, f64)> {
        self.frequencies
            .iter()
            .copied()
            .zip(self.magnitudes.iter().copied())
            .max_by(|a, b| a.1.total_cmp(&b.1))
    }

    /// Magnitude of the bin nearest to `freq_hz`.
    pub fn magnitude_at(&self, freq_hz: f64) -> Option<f64> {
        if self.is_empty() || self.resolution <= 0.0 || freq_hz < 0.0 {
            return None;
        }
        let index = (freq_hz / self.resolution).round() as usize;
        self.magnitudes.get(index).copied()
    }
}
