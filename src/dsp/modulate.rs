//! Double-sideband full-carrier amplitude modulation.

/*
Amplitude Modulation
====================

AM varies the carrier's amplitude according to the message. It is how AM
broadcast radio works physically: the transmitter's output stage is fed a
supply voltage that follows the audio.

Vocabulary
----------

  envelope          The slowly varying outline traced by the carrier peaks.
                    For AM it is 1 + μ·m(t).

  modulation index  μ, how far the message pushes the envelope away from 1.
                      μ = 0    →  bare carrier, no information
                      μ = 0.7  →  envelope swings between 0.3 and 1.7
                      μ = 1    →  envelope touches zero at message troughs

  overmodulation    μ·|m| > 1. The envelope would go negative, the carrier
                    phase flips and an envelope detector can no longer
                    recover the message. Ruled out here by μ ≤ 1, |m| ≤ 1.


The Math
--------

For each sample index i:

    envelope[i] = base + modulator[i] × depth      with base = 1, depth = μ
    s[i]        = envelope[i] × c[i]

Expanding with m = sin(ωm·t) and c = cos(ωc·t):

    s(t) = cos(ωc·t) + (μ/2)·sin((ωc+ωm)·t) − (μ/2)·sin((ωc−ωm)·t)

so the spectrum shows the carrier line and two sidebands at fc ± fm, each
with half the modulation index as relative amplitude.


Envelope at Carrier Peaks
-------------------------

Wherever the carrier reaches +1 the transmitted sample IS the envelope:

    c[i] = 1   →   s[i] = 1 + μ·m[i]

That is the cleanest noiseless check of the modulator.
*/

use crate::error::{ensure_len, AmError, AmResult};

/// Calculate the modulated parameter value.
///
/// # Returns
/// The modulated value: base + (modulator × depth)
#[inline]
pub fn apply_modulation(base_value: f64, modulator: f64, depth: f64) -> f64 {
    base_value + (modulator * depth)
}

/// The envelope an ideal AM transmitter imposes: `1 + μ·m[i]`.
pub fn ideal_envelope(message: &[f64], modulation_index: f64) -> Vec<f64> {
    message
        .iter()
        .map(|&m| apply_modulation(1.0, m, modulation_index))
        .collect()
}

/// Modulate `message` onto `carrier`: `s[i] = (1 + μ·m[i]) · c[i]`.
///
/// `modulation_index` must lie in `[0, 1]`; zero produces the bare carrier.
pub fn modulate_am(message: &[f64], carrier: &[f64], modulation_index: f64) -> AmResult<Vec<f64>> {
    if !(0.0..=1.0).contains(&modulation_index) {
        return Err(AmError::invalid(
            "modulation_index",
            format!("must lie in [0, 1], got {modulation_index}"),
        ));
    }
    ensure_len("modulator", message.len(), carrier.len())?;

    Ok(message
        .iter()
        .zip(carrier)
        .map(|(&m, &c)| apply_modulation(1.0, m, modulation_index) * c)
        .collect())
}
