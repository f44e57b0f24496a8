//! Parameters for one run of the AM chain.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{AmError, AmResult};

/*
| field            | default  | accepted range          |
| ---------------- | -------- | ----------------------- |
| sample_rate      | 10000 Hz | > 0                     |
| duration         | 1.0 s    | > 0, fs × T ≥ 1 sample  |
| message_freq     | 2 Hz     | > 0                     |
| carrier_freq     | 1000 Hz  | (0, fs/2)               |
| modulation_index | 0.7      | (0, 1]                  |
| snr_db           | 5 dB     | any real, or +∞         |
| cutoff_hz        | 10 Hz    | (0, fs/2)               |
| filter_order     | 4        | 1..=20                  |
| seed             | None     | None = OS entropy       |
*/

/// Highest Butterworth order accepted by the low-pass stage.
pub const MAX_FILTER_ORDER: usize = 20;

/// Every literal the AM chain depends on, in one place.
///
/// Build with [`AmConfig::default`] and the builder setters, then call
/// [`AmConfig::validate`] (or let [`crate::AmPipeline::new`] do it).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct AmConfig {
    /// Samples per second of the simulated ADC clock.
    pub sample_rate: f64,
    /// Simulated time span in seconds.
    pub duration: f64,
    /// Message (baseband) tone frequency in Hz.
    pub message_freq: f64,
    /// Carrier frequency in Hz. Must stay below Nyquist.
    pub carrier_freq: f64,
    /// Modulation index μ.
    pub modulation_index: f64,
    /// Channel signal-to-noise ratio in dB. `f64::INFINITY` disables noise.
    pub snr_db: f64,
    /// Low-pass cutoff in Hz.
    pub cutoff_hz: f64,
    /// Butterworth order of the low-pass filter.
    pub filter_order: usize,
    /// Seed for the channel noise. `None` draws a fresh seed per run.
    pub seed: Option<u64>,
}

impl Default for AmConfig {
    fn default() -> Self {
        Self {
            sample_rate: 10_000.0,
            duration: 1.0,
            message_freq: 2.0,
            carrier_freq: 1_000.0,
            modulation_index: 0.7,
            snr_db: 5.0,
            cutoff_hz: 10.0,
            filter_order: 4,
            seed: None,
        }
    }
}

impl AmConfig {
    pub fn sample_rate(mut self, hz: f64) -> Self {
        self.sample_rate = hz;
        self
    }

    pub fn duration(mut self, seconds: f64) -> Self {
        self.duration = seconds;
        self
    }

    pub fn message_freq(mut self, hz: f64) -> Self {
        self.message_freq = hz;
        self
    }

    pub fn carrier_freq(mut self, hz: f64) -> Self {
        self.carrier_freq = hz;
        self
    }

    pub fn modulation_index(mut self, mu: f64) -> Self {
        self.modulation_index = mu;
        self
    }

    pub fn snr_db(mut self, db: f64) -> Self {
        self.snr_db = db;
        self
    }

    pub fn cutoff_hz(mut self, hz: f64) -> Self {
        self.cutoff_hz = hz;
        self
    }

    pub fn filter_order(mut self, order: usize) -> Self {
        self.filter_order = order;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Nyquist frequency for the configured sample rate.
    pub fn nyquist(&self) -> f64 {
        self.sample_rate / 2.0
    }

    /// Number of samples the time grid will hold.
    pub fn sample_count(&self) -> usize {
        (self.sample_rate * self.duration).floor() as usize
    }

    /// Check every field against its accepted range.
    ///
    /// Runs before anything is allocated, so a bad literal never costs a
    /// partial pipeline run.
    pub fn validate(&self) -> AmResult<()> {
        positive("sample_rate", self.sample_rate)?;
        positive("duration", self.duration)?;
        if self.sample_count() == 0 {
            return Err(AmError::invalid(
                "duration",
                format!(
                    "sample_rate × duration must cover at least one sample, got {} × {}",
                    self.sample_rate, self.duration
                ),
            ));
        }
        positive("message_freq", self.message_freq)?;
        below_nyquist("carrier_freq", self.carrier_freq, self.nyquist())?;

        let mu = self.modulation_index;
        if !(mu > 0.0 && mu <= 1.0) {
            return Err(AmError::invalid(
                "modulation_index",
                format!("must lie in (0, 1], got {mu}"),
            ));
        }

        if self.snr_db.is_nan() || self.snr_db == f64::NEG_INFINITY {
            return Err(AmError::invalid(
                "snr_db",
                format!("must be a real number or +inf, got {}", self.snr_db),
            ));
        }

        below_nyquist("cutoff_hz", self.cutoff_hz, self.nyquist())?;

        if self.filter_order == 0 || self.filter_order > MAX_FILTER_ORDER {
            return Err(AmError::invalid(
                "filter_order",
                format!(
                    "must lie in 1..={MAX_FILTER_ORDER}, got {}",
                    self.filter_order
                ),
            ));
        }

        Ok(())
    }
}

fn positive(name: &'static str, value: f64) -> AmResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(AmError::invalid(
            name,
            format!("must be finite and > 0, got {value}"),
        ))
    }
}

fn below_nyquist(name: &'static str, hz: f64, nyquist: f64) -> AmResult<()> {
    if hz.is_finite() && hz > 0.0 && hz < nyquist {
        Ok(())
    } else {
        Err(AmError::invalid(
            name,
            format!("must lie in (0, {nyquist}) Hz, got {hz}"),
        ))
    }
}
