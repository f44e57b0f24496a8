use std::f64::consts::PI;

use rustfft::num_complex::Complex;
use tracing::debug;

use crate::config::MAX_FILTER_ORDER;
use crate::error::{AmError, AmResult};

/*
Butterworth Low-pass
====================

After baseband recovery the message estimate still carries carrier ripple
(at 2·fc) and wideband channel noise. A low-pass filter with its cutoff a
few times the message frequency keeps the message and drops the rest.

Vocabulary
----------

  cutoff        The -3 dB frequency. Below it the filter passes, above it
                the response rolls off.

  normalized    Cutoff as a fraction of Nyquist:  Wn = fc / (fs / 2).
  cutoff        Must lie strictly between 0 and 1.

  order         Number of poles. Each one adds 6 dB/octave of roll-off:
                order 4 falls at 24 dB/octave, 80 dB/decade.

  Butterworth   Maximally flat passband: no ripple, monotonic roll-off.
                |H(f)|² = 1 / (1 + (f / fc)^(2·order))


Design: Analog Prototype → Bilinear Transform
---------------------------------------------

1. Place `order` poles evenly on the left half of the unit circle in the
   s-plane:

       θk = π · (2k + order + 1) / (2 · order),   pk = e^{jθk}

2. Pre-warp the cutoff so the digital filter lands its -3 dB point at the
   requested frequency (the bilinear map squeezes the whole analog axis
   into 0..fs/2):

       ωa = 2·fs · tan(π · fc / fs)

3. Map every scaled pole into the z-plane:

       zk = (2·fs + ωa·pk) / (2·fs − ωa·pk)

   All zeros of a low-pass land at z = −1 (Nyquist).

4. Pair conjugate poles into second-order sections. An odd order leaves
   one real pole for a first-order section. Each section is scaled to unity
   gain at DC, so the cascade is too.


Realization: Cascaded Biquads
-----------------------------

    x ──→ [ section 1 ] ──→ [ section 2 ] ──→ … ──→ y

Multiplying all sections out gives one (b, a) polynomial pair, the textbook
direct form. At very low normalized cutoffs (10 Hz at 10 kHz is Wn = 0.002)
the high-order polynomial's coefficients nearly cancel, so the filter runs
as a cascade of second-order sections instead. The transfer function is the
same.

Each section uses Direct Form II Transposed:

    y     = b0·x + s1
    s1    = b1·x − a1·y + s2
    s2    = b2·x − a2·y

Filtering starts from zero state, so the first few time constants show the
filter settling in. That transient is expected.
*/

/// One second-order section, `a0` normalized to 1.
///
/// H(z) = (b0 + b1·z⁻¹ + b2·z⁻²) / (1 + a1·z⁻¹ + a2·z⁻²)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Biquad {
    pub b: [f64; 3],
    pub a: [f64; 2],
}

impl Biquad {
    /// Run `x` through this section from zero state.
    fn process(&self, x: &mut [f64]) {
        let mut s1 = 0.0; // first state register
        let mut s2 = 0.0; // second state register

        for sample in x.iter_mut() {
            let input = *sample;
            let output = self.b[0] * input + s1;
            s1 = self.b[1] * input - self.a[0] * output + s2;
            s2 = self.b[2] * input - self.a[1] * output;
            *sample = output;
        }
    }

    /// Complex response at `z⁻¹ = e^{-jω}`.
    fn response(&self, omega: f64) -> Complex<f64> {
        let z1 = Complex::from_polar(1.0, -omega);
        let z2 = z1 * z1;
        let num = self.b[0] + z1 * self.b[1] + z2 * self.b[2];
        let den = 1.0 + z1 * self.a[0] + z2 * self.a[1];
        num / den
    }

    /// Stable when both poles sit inside the unit circle.
    pub fn is_stable(&self) -> bool {
        self.a[1].abs() < 1.0 && self.a[0].abs() < 1.0 + self.a[1]
    }
}

/// Digital Butterworth low-pass filter.
#[derive(Debug, Clone, PartialEq)]
pub struct Butterworth {
    order: usize,
    cutoff_hz: f64,
    sample_rate: f64,
    sections: Vec<Biquad>,
}

impl Butterworth {
    /// Design a low-pass of `order` poles with its -3 dB point at `cutoff_hz`.
    pub fn lowpass(order: usize, cutoff_hz: f64, sample_rate: f64) -> AmResult<Self> {
        if order == 0 || order > MAX_FILTER_ORDER {
            return Err(AmError::invalid(
                "filter_order",
                format!("must lie in 1..={MAX_FILTER_ORDER}, got {order}"),
            ));
        }
        if !(sample_rate.is_finite() && sample_rate > 0.0) {
            return Err(AmError::invalid(
                "sample_rate",
                format!("must be finite and > 0, got {sample_rate}"),
            ));
        }
        let wn = cutoff_hz / (sample_rate / 2.0);
        if !(wn > 0.0 && wn < 1.0) {
            return Err(AmError::invalid(
                "cutoff_hz",
                format!(
                    "normalized cutoff {cutoff_hz} / {} must lie in (0, 1), got {wn}",
                    sample_rate / 2.0
                ),
            ));
        }

        let sections = design_lowpass(order, cutoff_hz, sample_rate);
        debug!(
            order,
            cutoff_hz,
            sample_rate,
            sections = sections.len(),
            "butterworth design"
        );

        Ok(Self {
            order,
            cutoff_hz,
            sample_rate,
            sections,
        })
    }

    pub fn order(&self) -> usize {
        self.order
    }

    pub fn cutoff_hz(&self) -> f64 {
        self.cutoff_hz
    }

    /// Cutoff as a fraction of Nyquist.
    pub fn normalized_cutoff(&self) -> f64 {
        self.cutoff_hz / (self.sample_rate / 2.0)
    }

    pub fn sections(&self) -> &[Biquad] {
        &self.sections
    }

    /// Filter `x` causally from zero initial state.
    ///
    /// The output has the same length as the input; the state lives only for
    /// the duration of the call.
    pub fn filter(&self, x: &[f64]) -> Vec<f64> {
        let mut out = x.to_vec();
        for section in &self.sections {
            section.process(&mut out);
        }
        out
    }

    /// |H| at `freq_hz`.
    pub fn magnitude_response(&self, freq_hz: f64) -> f64 {
        let omega = 2.0 * PI * freq_hz / self.sample_rate;
        self.sections
            .iter()
            .map(|s| s.response(omega))
            .fold(Complex::new(1.0, 0.0), |acc, h| acc * h)
            .norm()
    }

    /// Expanded transfer function `(b, a)` with `a[0] == 1`, each of length
    /// `order + 1`.
    pub fn coefficients(&self) -> (Vec<f64>, Vec<f64>) {
        let mut b = vec![1.0];
        let mut a = vec![1.0];
        for s in &self.sections {
            b = poly_mul(&b, &s.b);
            a = poly_mul(&a, &[1.0, s.a[0], s.a[1]]);
        }
        b.truncate(self.order + 1);
        a.truncate(self.order + 1);
        (b, a)
    }
}

/// Design and apply a Butterworth low-pass in one call.
pub fn lowpass(x: &[f64], cutoff_hz: f64, sample_rate: f64, order: usize) -> AmResult<Vec<f64>> {
    Ok(Butterworth::lowpass(order, cutoff_hz, sample_rate)?.filter(x))
}

/// Pre-warp frequency for the bilinear transform.
fn prewarp(freq_hz: f64, sample_rate: f64) -> f64 {
    2.0 * sample_rate * (PI * freq_hz / sample_rate).tan()
}

/// Butterworth analog prototype poles, left half plane.
fn butterworth_poles(order: usize) -> Vec<Complex<f64>> {
    (0..order)
        .map(|k| {
            let theta = PI * (2 * k + order + 1) as f64 / (2 * order) as f64;
            Complex::from_polar(1.0, theta)
        })
        .collect()
}

fn design_lowpass(order: usize, cutoff_hz: f64, sample_rate: f64) -> Vec<Biquad> {
    let wc = prewarp(cutoff_hz, sample_rate);
    let fs2 = 2.0 * sample_rate;

    let digital: Vec<Complex<f64>> = butterworth_poles(order)
        .into_iter()
        .map(|p| {
            let s = p * wc;
            (fs2 + s) / (fs2 - s)
        })
        .collect();

    let mut sections = Vec::with_capacity(order.div_ceil(2));

    // poles k and order-1-k are conjugates
    for z in digital.iter().take(order / 2) {
        let a1 = -2.0 * z.re;
        let a2 = z.norm_sqr();
        let gain = (1.0 + a1 + a2) / 4.0;
        sections.push(Biquad {
            b: [gain, 2.0 * gain, gain],
            a: [a1, a2],
        });
    }

    if order % 2 == 1 {
        let z = digital[order / 2].re;
        let gain = (1.0 - z) / 2.0;
        sections.push(Biquad {
            b: [gain, gain, 0.0],
            a: [-z, 0.0],
        });
    }

    sections
}

fn poly_mul(p: &[f64], q: &[f64]) -> Vec<f64> {
    let mut out = vec![0.0; p.len() + q.len() - 1];
    for (i, &pi) in p.iter().enumerate() {
        for (j, &qj) in q.iter().enumerate() {
            out[i + j] += pi * qj;
        }
    }
    out
}
