//! FFT-based analytic signal.

/*
Analytic Signal
===============

A real signal x(t) has a mirror-image spectrum: every positive frequency
has a twin at the matching negative frequency. The analytic signal drops
the negative half and doubles the positive half:

    a(t) = x(t) + j·H[x](t)

H[x] is the Hilbert transform: every component shifted by -90°, so cos
becomes sin. For a modulated carrier

    x(t) = A(t) · cos(ωc·t)    →    a(t) ≈ A(t) · e^{jωc·t}

and |a(t)| ≈ A(t), the envelope, with the carrier oscillation gone.


Construction
------------

    1. X = FFT(x)
    2. multiply bin k by h[k]:
           h[0]         = 1            DC kept once
           h[N/2]       = 1            Nyquist kept once (even N only)
           h[1 .. N/2)  = 2            positive frequencies doubled
           everything else = 0         negative frequencies removed
    3. a = IFFT(X · h) / N


Boundary Effects
----------------

The FFT treats the array as one period of a repeating signal. If the first
and last samples don't line up (a message with a fractional number of cycles,
noise, a filter transient) the jump at the wrap-around smears into the first
and last few samples. This needs the whole array at once; it can't be
streamed sample by sample without that edge error.
*/

use rustfft::{num_complex::Complex, FftPlanner};

/// Analytic signal of `x`; `re` reproduces `x`, `im` is its Hilbert transform.
pub fn analytic_signal(x: &[f64]) -> Vec<Complex<f64>> {
    let n = x.len();
    if n == 0 {
        return Vec::new();
    }

    let mut planner = FftPlanner::<f64>::new();
    let forward = planner.plan_fft_forward(n);
    let inverse = planner.plan_fft_inverse(n);

    let mut buffer: Vec<Complex<f64>> = x.iter().map(|&v| Complex::new(v, 0.0)).collect();
    forward.process(&mut buffer);

    for (k, bin) in buffer.iter_mut().enumerate() {
        *bin *= one_sided_weight(k, n);
    }

    inverse.process(&mut buffer);

    // rustfft leaves the inverse unnormalized
    let scale = 1.0 / n as f64;
    for v in buffer.iter_mut() {
        *v *= scale;
    }
    buffer
}

/// Hilbert transform of `x`: the imaginary part of its analytic signal.
pub fn hilbert_transform(x: &[f64]) -> Vec<f64> {
    analytic_signal(x).into_iter().map(|a| a.im).collect()
}

#[inline]
fn one_sided_weight(k: usize, n: usize) -> f64 {
    let half = n / 2;
    if k == 0 || (n % 2 == 0 && k == half) {
        1.0
    } else if k < (n + 1) / 2 {
        2.0
    } else {
        0.0
    }
}
