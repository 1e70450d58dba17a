//! Normalised analog lowpass prototypes.
//!
//! Each function returns the zeros, poles and gain of an order-`n` analog
//! lowpass with its characteristic frequency at 1 rad/s:
//!
//! | Family | Normalisation |
//! |--------|---------------|
//! | Butterworth | −3 dB at 1 rad/s |
//! | Chebyshev I | passband edge (ripple `rp`) at 1 rad/s |
//! | Chebyshev II | stopband edge (attenuation `rs`) at 1 rad/s |
//! | Bessel | phase midpoint at 1 rad/s (unit high-frequency delay asymptote) |

use super::roots::polynomial_roots;
use super::zpk::Zpk;
use crate::error::Result;
use num_complex::Complex64;
use std::f64::consts::PI;

/// Odd integers `-(n-1), -(n-3), ..., n-1` used to place poles on the circle.
fn symmetric_steps(n: usize) -> impl Iterator<Item = f64> {
    let n = n as i64;
    (0..n).map(move |i| (2 * i - n + 1) as f64)
}

fn product(values: &[Complex64]) -> Complex64 {
    values.iter().fold(Complex64::new(1.0, 0.0), |acc, v| acc * *v)
}

/// Butterworth prototype: poles evenly spaced on the left half unit circle.
pub fn butterworth(n: usize) -> Zpk {
    let poles = symmetric_steps(n)
        .map(|m| -Complex64::from_polar(1.0, PI * m / (2.0 * n as f64)))
        .collect();
    Zpk::new(Vec::new(), poles, 1.0)
}

/// Chebyshev type I prototype with `rp` dB of passband ripple.
pub fn chebyshev1(n: usize, rp: f64) -> Zpk {
    let eps = (10f64.powf(0.1 * rp) - 1.0).sqrt();
    let mu = (1.0 / eps).asinh() / n as f64;

    let poles: Vec<Complex64> = symmetric_steps(n)
        .map(|m| {
            let theta = PI * m / (2.0 * n as f64);
            -Complex64::new(mu, theta).sinh()
        })
        .collect();

    let mut gain = product(&poles.iter().map(|p| -*p).collect::<Vec<_>>()).re;
    if n % 2 == 0 {
        gain /= (1.0 + eps * eps).sqrt();
    }
    Zpk::new(Vec::new(), poles, gain)
}

/// Chebyshev type II prototype with `rs` dB of stopband attenuation.
pub fn chebyshev2(n: usize, rs: f64) -> Zpk {
    let de = 1.0 / (10f64.powf(0.1 * rs) - 1.0).sqrt();
    let mu = (1.0 / de).asinh() / n as f64;
    let nf = n as f64;

    // Zeros on the imaginary axis; odd orders have one fewer (at infinity).
    let zeros: Vec<Complex64> = symmetric_steps(n)
        .filter(|m| *m != 0.0)
        .map(|m| Complex64::new(0.0, 1.0) / (PI * m / (2.0 * nf)).sin())
        .collect();

    let poles: Vec<Complex64> = symmetric_steps(n)
        .map(|m| {
            let base = -Complex64::from_polar(1.0, PI * m / (2.0 * nf));
            let warped = Complex64::new(mu.sinh() * base.re, mu.cosh() * base.im);
            warped.inv()
        })
        .collect();

    let neg_poles: Vec<Complex64> = poles.iter().map(|p| -*p).collect();
    let neg_zeros: Vec<Complex64> = zeros.iter().map(|z| -*z).collect();
    let gain = (product(&neg_poles) / product(&neg_zeros)).re;
    Zpk::new(zeros, poles, gain)
}

/// Bessel/Thomson prototype, phase-normalised.
///
/// Poles are the roots of the reverse Bessel polynomial
/// `θₙ(s) = Σ aₖ sᵏ` with `aₖ = (2n−k)! / (2ⁿ⁻ᵏ k! (n−k)!)`, scaled by
/// `a₀^(−1/n)`. The scaling is folded into the coefficients before root
/// finding, which keeps them near unity even at high orders.
///
/// Root accuracy degrades with order: relative pole error is around
/// `1e-12` at order 10 and `1e-9` at order 16, the largest order
/// [`FilterParams::validate`](crate::FilterParams::validate) accepts.
pub fn bessel(n: usize) -> Result<Zpk> {
    let nf = n as f64;
    // ln a0 = ln((2n)! / n!) - n ln 2
    let ln_a0: f64 = ((n + 1)..=(2 * n)).map(|i| (i as f64).ln()).sum::<f64>() - nf * 2f64.ln();
    let scale = (ln_a0 / nf).exp();

    // b_k = a_k * scale^k / a0, built from a_{k+1}/a_k = 2(n-k) / ((2n-k)(k+1)).
    let mut coeffs = Vec::with_capacity(n + 1);
    let mut b = 1.0;
    coeffs.push(b);
    for k in 0..n {
        let ratio = 2.0 * (nf - k as f64) / ((2.0 * nf - k as f64) * (k as f64 + 1.0));
        b *= ratio * scale;
        coeffs.push(b);
    }

    Ok(Zpk::new(Vec::new(), polynomial_roots(&coeffs)?, 1.0))
}
