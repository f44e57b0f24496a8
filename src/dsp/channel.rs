//! Additive white Gaussian noise channel.

/*
AWGN Channel
============

Between antennas the wave picks up thermal noise, interference and static.
The textbook stand-in for all of that is additive white Gaussian noise:
independent normal samples added to every transmitted sample.

Vocabulary
----------

  signal power   Mean of the squared samples.  P = (1/N) Σ x[i]²

  SNR            Signal-to-noise power ratio, usually quoted in dB.
                   SNR_dB  = 10 · log₁₀(P_signal / P_noise)
                   SNR_lin = 10^(SNR_dB / 10)

  σ              Standard deviation of the noise. For zero-mean noise the
                 power IS the variance, so σ = √P_noise.


The Math
--------

    P_signal = mean(x²)
    P_noise  = P_signal / 10^(SNR_dB / 10)
    r[i]     = x[i] + n[i],       n[i] ~ Normal(0, √P_noise)

Reference points:
    SNR = 40 dB  →  noise is 1/10000 of the signal power (barely visible)
    SNR =  5 dB  →  noise is ~1/3 of the signal power (very visible)
    SNR =  0 dB  →  noise and signal carry equal power
    SNR = +∞     →  no noise at all


Randomness
----------

The caller owns the random source. Passing the same seeded generator twice
reproduces the same noise, which is what makes the rest of the chain
testable.


Silent Input
------------

If every input sample is zero there is no power to scale the noise against.
Rather than invent a noise floor the channel passes the silence through
unchanged and logs a warning.
*/

use rand::Rng;
use rand_distr::{Distribution, Normal};
use tracing::{debug, warn};

use crate::dsp::stats::power;
use crate::error::{AmError, AmResult};

/// Mean of the squared samples.
#[inline]
pub fn signal_power(x: &[f64]) -> f64 {
    power(x)
}

/// Convert a power ratio from decibels to linear scale.
#[inline]
pub fn db_to_linear(db: f64) -> f64 {
    10.0_f64.powf(db / 10.0)
}

/// AWGN channel calibrated to a target signal-to-noise ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AwgnChannel {
    snr_db: f64,
}

impl AwgnChannel {
    /// Create a channel with the given SNR in dB.
    ///
    /// Any real value is accepted, as is `+inf` (noiseless). NaN and `-inf`
    /// are rejected.
    pub fn new(snr_db: f64) -> AmResult<Self> {
        if snr_db.is_nan() || snr_db == f64::NEG_INFINITY {
            return Err(AmError::invalid(
                "snr_db",
                format!("must be a real number or +inf, got {snr_db}"),
            ));
        }
        Ok(Self { snr_db })
    }

    pub fn snr_db(&self) -> f64 {
        self.snr_db
    }

    /// Noise power that yields this channel's SNR for a given signal power.
    pub fn noise_power(&self, signal_power: f64) -> f64 {
        signal_power / db_to_linear(self.snr_db)
    }

    /// Send `x` through the channel, drawing noise from `rng`.
    ///
    /// Fails only when the SNR is so low that the noise power is not a
    /// finite number.
    pub fn transmit<R: Rng + ?Sized>(&self, x: &[f64], rng: &mut R) -> AmResult<Vec<f64>> {
        let p_signal = signal_power(x);
        if p_signal == 0.0 {
            if !x.is_empty() {
                warn!(
                    samples = x.len(),
                    "channel input has zero power; passing it through without noise"
                );
            }
            return Ok(x.to_vec());
        }

        let p_noise = self.noise_power(p_signal);
        debug!(snr_db = self.snr_db, p_signal, p_noise, "awgn channel");
        if p_noise == 0.0 {
            return Ok(x.to_vec());
        }

        let sigma = p_noise.sqrt();
        if !sigma.is_finite() {
            return Err(AmError::invalid(
                "snr_db",
                format!("{} dB leaves no finite noise power", self.snr_db),
            ));
        }
        let normal =
            Normal::new(0.0, sigma).map_err(|e| AmError::invalid("snr_db", e.to_string()))?;

        Ok(x.iter().map(|&v| v + normal.sample(rng)).collect())
    }
}
