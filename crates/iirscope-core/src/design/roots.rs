//! Roots of real polynomials (Durand–Kerner iteration).

use crate::error::{DesignError, Result};
use num_complex::Complex64;

const MAX_ITERATIONS: usize = 2000;
const TOLERANCE: f64 = 1e-14;
/// Largest relative correction still accepted once iterations run out.
/// Rounding noise keeps the step above `TOLERANCE` for higher degrees.
const ACCEPT: f64 = 1e-7;

/// Roots of a polynomial with real coefficients, given in ascending powers.
///
/// Trailing zero coefficients are ignored. Near-real roots are snapped onto
/// the real axis and complex roots are returned as exact conjugate pairs,
/// so the result can be fed straight into [`Zpk::to_sos`](super::Zpk::to_sos).
///
/// Returns [`DesignError::RootsDidNotConverge`] if the iteration is still
/// moving the roots by more than `1e-7` (relative) when it gives up.
pub fn polynomial_roots(coeffs: &[f64]) -> Result<Vec<Complex64>> {
    let degree = match coeffs.iter().rposition(|c| *c != 0.0) {
        Some(d) => d,
        None => return Ok(Vec::new()),
    };
    if degree == 0 {
        return Ok(Vec::new());
    }

    let lead = coeffs[degree];
    let monic: Vec<f64> = coeffs[..=degree].iter().map(|c| c / lead).collect();
    if degree == 1 {
        return Ok(vec![Complex64::new(-monic[0], 0.0)]);
    }

    durand_kerner(&monic, MAX_ITERATIONS).map(conjugate_symmetric)
}

/// Simultaneous iteration on a monic polynomial of degree two or more.
fn durand_kerner(monic: &[f64], max_iterations: usize) -> Result<Vec<Complex64>> {
    let degree = monic.len() - 1;

    // Start on a circle matching the geometric mean of the root moduli,
    // rotated off the real axis.
    let radius = monic[0].abs().powf(1.0 / degree as f64).max(f64::MIN_POSITIVE);
    let mut roots: Vec<Complex64> = (0..degree)
        .map(|k| {
            let angle = std::f64::consts::TAU * k as f64 / degree as f64 + 0.4;
            Complex64::from_polar(radius, angle)
        })
        .collect();

    let mut largest_step = f64::INFINITY;
    for _ in 0..max_iterations {
        largest_step = 0.0;
        for i in 0..degree {
            let zi = roots[i];
            let denom = roots
                .iter()
                .enumerate()
                .filter(|(j, _)| *j != i)
                .fold(Complex64::new(1.0, 0.0), |acc, (_, zj)| acc * (zi - *zj));
            if denom.norm() == 0.0 {
                continue;
            }
            let step = eval_monic(&monic, zi) / denom;
            roots[i] = zi - step;
            largest_step = largest_step.max(step.norm() / roots[i].norm().max(1.0));
        }
        if largest_step < TOLERANCE {
            break;
        }
    }

    if largest_step > ACCEPT {
        return Err(DesignError::RootsDidNotConverge {
            degree,
            step: largest_step,
        });
    }
    Ok(roots)
}

/// Horner evaluation of a monic polynomial in ascending order.
fn eval_monic(monic: &[f64], z: Complex64) -> Complex64 {
    monic
        .iter()
        .rev()
        .fold(Complex64::new(0.0, 0.0), |acc, c| acc * z + *c)
}

/// Snaps near-real roots and rebuilds complex roots as exact conjugates.
fn conjugate_symmetric(roots: Vec<Complex64>) -> Vec<Complex64> {
    let mut reals = Vec::new();
    let mut upper = Vec::new();
    for root in roots {
        let tol = 1e-8 * root.norm().max(1.0);
        if root.im.abs() <= tol {
            reals.push(Complex64::new(root.re, 0.0));
        } else if root.im > 0.0 {
            upper.push(root);
        }
    }

    let mut out = reals;
    for root in upper {
        out.push(root);
        out.push(root.conj());
    }
    out
}
