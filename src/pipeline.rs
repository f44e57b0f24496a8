//! The AM chain, start to finish.
//!
//! ```text
//! time grid ─┬─→ message ─┐
//!            └─→ carrier ─┴─→ modulator ─┬─→ spectrum (display only)
//!                                        └─→ channel ─→ envelope ─→ baseband ─→ low-pass
//! ```
//!
//! # Example
//!
//! ```
//! use amlab::{AmConfig, AmPipeline};
//!
//! let pipeline = AmPipeline::new(AmConfig::default().snr_db(40.0).seed(7))?;
//! let output = pipeline.run(&mut pipeline.rng())?;
//! assert_eq!(output.estimate.len(), output.grid.len());
//! # Ok::<(), amlab::AmError>(())
//! ```

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;
use tracing::{debug, info};

use crate::config::AmConfig;
use crate::dsp::channel::AwgnChannel;
use crate::dsp::envelope::{detect, recover_baseband};
use crate::dsp::filter::Butterworth;
use crate::dsp::modulate::modulate_am;
use crate::dsp::oscillator::Tone;
use crate::dsp::spectrum::Spectrum;
use crate::dsp::stats::{best_lag_correlation, LagCorrelation};
use crate::dsp::time::TimeGrid;
use crate::error::{ensure_len, AmResult};

/// A validated configuration plus the stage objects built from it.
#[derive(Debug, Clone)]
pub struct AmPipeline {
    config: AmConfig,
    channel: AwgnChannel,
    lowpass: Butterworth,
}

/// Every intermediate array of one run, all sharing `grid`'s indexing.
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    pub grid: TimeGrid,
    pub message: Vec<f64>,
    pub carrier: Vec<f64>,
    pub transmitted: Vec<f64>,
    pub spectrum: Spectrum,
    pub received: Vec<f64>,
    pub envelope: Vec<f64>,
    pub baseband: Vec<f64>,
    pub estimate: Vec<f64>,
}

impl AmPipeline {
    /// Validate `config` and design the channel and filter.
    ///
    /// Nothing is allocated for the sample arrays until [`AmPipeline::run`].
    pub fn new(config: AmConfig) -> AmResult<Self> {
        config.validate()?;
        let channel = AwgnChannel::new(config.snr_db)?;
        let lowpass =
            Butterworth::lowpass(config.filter_order, config.cutoff_hz, config.sample_rate)?;

        Ok(Self {
            config,
            channel,
            lowpass,
        })
    }

    pub fn config(&self) -> &AmConfig {
        &self.config
    }

    pub fn lowpass(&self) -> &Butterworth {
        &self.lowpass
    }

    /// Random source for the channel: seeded from `config.seed`, or from OS
    /// entropy when no seed is set.
    pub fn rng(&self) -> Pcg64 {
        match self.config.seed {
            Some(seed) => Pcg64::seed_from_u64(seed),
            None => Pcg64::from_entropy(),
        }
    }

    /// Run every stage once, drawing channel noise from `rng`.
    pub fn run<R: Rng + ?Sized>(&self, rng: &mut R) -> AmResult<PipelineOutput> {
        let cfg = &self.config;

        let grid = TimeGrid::new(cfg.sample_rate, cfg.duration)?;
        let n = grid.len();
        debug!(samples = n, dt = grid.dt(), "time grid");

        let message = Tone::sine(cfg.message_freq).render(&grid);
        let carrier = Tone::cosine(cfg.carrier_freq).render(&grid);
        ensure_len("message", n, message.len())?;
        ensure_len("carrier", n, carrier.len())?;

        let transmitted = modulate_am(&message, &carrier, cfg.modulation_index)?;
        ensure_len("modulator", n, transmitted.len())?;

        let spectrum = Spectrum::analyze(&transmitted, grid.sample_rate());
        if let Some((freq, magnitude)) = spectrum.peak() {
            debug!(freq, magnitude, bins = spectrum.len(), "spectrum peak");
        }

        let received = self.channel.transmit(&transmitted, rng)?;
        ensure_len("channel", n, received.len())?;

        let envelope = detect(&received);
        ensure_len("envelope detector", n, envelope.len())?;

        let baseband = recover_baseband(&envelope, cfg.modulation_index)?;
        ensure_len("baseband recovery", n, baseband.len())?;

        let estimate = self.lowpass.filter(&baseband);
        ensure_len("low-pass filter", n, estimate.len())?;

        info!(
            samples = n,
            snr_db = cfg.snr_db,
            modulation_index = cfg.modulation_index,
            "am chain complete"
        );

        Ok(PipelineOutput {
            grid,
            message,
            carrier,
            transmitted,
            spectrum,
            received,
            envelope,
            baseband,
            estimate,
        })
    }
}

impl PipelineOutput {
    /// How well `estimate` tracks `message`, ignoring the first
    /// `settle_secs` of filter transient and compensating up to a quarter
    /// second of filter delay.
    pub fn recovery(&self, settle_secs: f64) -> Option<LagCorrelation> {
        let skip = self.grid.samples_in(settle_secs);
        let max_lag = self.grid.samples_in(0.25);
        best_lag_correlation(&self.message, &self.estimate, skip, max_lag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AmError;

    #[test]
    fn test_invalid_config_fails_before_running() {
        let err = AmPipeline::new(AmConfig::default().cutoff_hz(6_000.0)).unwrap_err();
        assert!(matches!(err, AmError::InvalidParameter { name: "cutoff_hz", .. }));
    }

    #[test]
    fn test_all_arrays_share_grid_length() {
        let pipeline = AmPipeline::new(AmConfig::default().seed(1)).unwrap();
        let out = pipeline.run(&mut pipeline.rng()).unwrap();
        let n = out.grid.len();
        assert_eq!(n, 10_000);
        for (name, len) in [
            ("message", out.message.len()),
            ("carrier", out.carrier.len()),
            ("transmitted", out.transmitted.len()),
            ("received", out.received.len()),
            ("envelope", out.envelope.len()),
            ("baseband", out.baseband.len()),
            ("estimate", out.estimate.len()),
        ] {
            assert_eq!(len, n, "{name}");
        }
        assert_eq!(out.spectrum.len(), n / 2 + 1);
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let pipeline = AmPipeline::new(AmConfig::default().seed(42)).unwrap();
        let a = pipeline.run(&mut pipeline.rng()).unwrap();
        let b = pipeline.run(&mut pipeline.rng()).unwrap();
        assert_eq!(a.received, b.received);
        assert_eq!(a.estimate, b.estimate);
    }

    #[test]
    fn test_noiseless_round_trip() {
        let pipeline = AmPipeline::new(AmConfig::default().snr_db(f64::INFINITY)).unwrap();
        let out = pipeline.run(&mut pipeline.rng()).unwrap();
        assert_eq!(out.received, out.transmitted);

        let recovery = out.recovery(0.25).unwrap();
        assert!(
            recovery.correlation >= 0.95,
            "noiseless correlation {}",
            recovery.correlation
        );
    }
}
