//! Envelope detection and baseband recovery.

/*
Envelope Detector
=================

An AM receiver doesn't need to know the carrier's exact phase. The cheapest
receiver there is, a diode feeding a capacitor, simply follows the peaks of
the incoming wave. What it traces is the envelope:

    received   r(t) ≈ (1 + μ·m(t)) · cos(ωc·t) + noise
    envelope   |a(t)| ≈ 1 + μ·m(t) + residue

Here the diode-and-capacitor is simulated with the magnitude of the analytic
signal (see `hilbert`). That gives the instantaneous amplitude at every
sample instead of a ripple-laden RC curve.


Baseband Recovery
-----------------

The envelope still carries the transmitter's fixed carrier level (the "1")
and the message scaled by μ. Undo both:

    m_env[i] = (envelope[i] − mean(envelope)) / μ

The mean over the whole array stands in for the DC offset. For a message
with a whole number of cycles the mean of m is zero, so the mean of the
envelope is exactly the carrier level.


Why Not Coherent Detection?
---------------------------

Multiplying by a local copy of the carrier and low-passing recovers the
message with less noise, but needs a phase-locked oscillator in the
receiver. Envelope detection needs nothing of the sort; that simplicity is
why AM broadcast used it, and the extra noise is the price.
*/

use tracing::debug;

use super::hilbert::analytic_signal;
use super::stats::mean;
use crate::error::{AmError, AmResult};

/// Instantaneous amplitude of `received`, one value per sample.
pub fn detect(received: &[f64]) -> Vec<f64> {
    analytic_signal(received)
        .into_iter()
        .map(|a| a.norm())
        .collect()
}

/// Subtract the global mean from every sample.
pub fn remove_dc(x: &[f64]) -> Vec<f64> {
    let dc = mean(x);
    x.iter().map(|&v| v - dc).collect()
}

/// Turn a detected envelope back into a message estimate:
/// `(envelope - mean(envelope)) / μ`.
pub fn recover_baseband(envelope: &[f64], modulation_index: f64) -> AmResult<Vec<f64>> {
    if !(modulation_index.is_finite() && modulation_index != 0.0) {
        return Err(AmError::invalid(
            "modulation_index",
            format!("must be finite and non-zero to rescale the envelope, got {modulation_index}"),
        ));
    }

    let dc = mean(envelope);
    debug!(dc, modulation_index, "baseband recovery");

    Ok(envelope
        .iter()
        .map(|&e| (e - dc) / modulation_index)
        .collect())
}
