//! Zeros/poles/gain representation and conversion to second-order sections.

use crate::error::{DesignError, Result};
use num_complex::Complex64;

/// A transfer function as zeros, poles and an overall gain.
#[derive(Debug, Clone, PartialEq)]
pub struct Zpk {
    /// Zeros of the transfer function.
    pub zeros: Vec<Complex64>,
    /// Poles of the transfer function.
    pub poles: Vec<Complex64>,
    /// Overall gain.
    pub gain: f64,
}

impl Zpk {
    /// Creates a zpk triple.
    pub fn new(zeros: Vec<Complex64>, poles: Vec<Complex64>, gain: f64) -> Self {
        Self { zeros, poles, gain }
    }

    /// Excess of poles over zeros (relative degree).
    pub fn degree(&self) -> usize {
        self.poles.len().saturating_sub(self.zeros.len())
    }

    /// Converts to SOS rows `[b0, b1, b2, a0, a1, a2]`.
    ///
    /// Conjugate pole pairs become one section each; real poles are paired
    /// up, with an odd one out placed in the first section. Each pole group
    /// takes the nearest remaining zeros. Sections are ordered from the
    /// pole farthest from the unit circle to the closest, and the gain is
    /// applied to the first section.
    pub fn to_sos(&self) -> Result<Vec<[f64; 6]>> {
        let (complex_poles, mut real_poles) = split_conjugates(&self.poles, "poles")?;
        let (mut complex_zeros, mut real_zeros) = split_conjugates(&self.zeros, "zeros")?;

        let mut groups: Vec<Factor> = complex_poles.into_iter().map(Factor::Conjugate).collect();
        real_poles.sort_by(|a, b| b.abs().total_cmp(&a.abs()));
        let single = if real_poles.len() % 2 == 1 {
            real_poles.pop().map(Factor::Real)
        } else {
            None
        };
        groups.extend(real_poles.chunks(2).map(|pair| Factor::Reals(pair[0], pair[1])));

        // Most resonant poles pick their zeros first.
        groups.sort_by(|a, b| a.unit_circle_distance().total_cmp(&b.unit_circle_distance()));
        let mut paired: Vec<(Factor, Option<Factor>)> = groups
            .into_iter()
            .map(|pole| (pole, take_nearest_zeros(pole, &mut complex_zeros, &mut real_zeros)))
            .collect();
        paired.reverse();
        if let Some(single) = single {
            let zero = take_nearest_zeros(single, &mut complex_zeros, &mut real_zeros);
            paired.insert(0, (single, zero));
        }

        let mut sections: Vec<[f64; 6]> = paired
            .into_iter()
            .map(|(pole, zero)| {
                let b = zero.map_or([1.0, 0.0, 0.0], Factor::coefficients);
                let a = pole.coefficients();
                [b[0], b[1], b[2], a[0], a[1], a[2]]
            })
            .collect();

        if let Some(first) = sections.first_mut() {
            for coefficient in &mut first[..3] {
                *coefficient *= self.gain;
            }
        } else {
            sections.push([self.gain, 0.0, 0.0, 1.0, 0.0, 0.0]);
        }

        Ok(sections)
    }
}

/// A first- or second-order polynomial factor built from roots.
#[derive(Debug, Clone, Copy)]
enum Factor {
    /// A root and its conjugate (stored as the upper-half-plane root).
    Conjugate(Complex64),
    /// Two real roots.
    Reals(f64, f64),
    /// One real root.
    Real(f64),
}

impl Factor {
    /// Polynomial coefficients in descending powers of z^-1.
    fn coefficients(self) -> [f64; 3] {
        match self {
            Factor::Conjugate(r) => [1.0, -2.0 * r.re, r.norm_sqr()],
            Factor::Reals(a, b) => [1.0, -(a + b), a * b],
            Factor::Real(a) => [1.0, -a, 0.0],
        }
    }

    /// Representative root used for nearest-zero matching.
    fn anchor(self) -> Complex64 {
        match self {
            Factor::Conjugate(r) => r,
            Factor::Reals(a, b) => Complex64::new(if a.abs() >= b.abs() { a } else { b }, 0.0),
            Factor::Real(a) => Complex64::new(a, 0.0),
        }
    }

    fn unit_circle_distance(self) -> f64 {
        (1.0 - self.anchor().norm()).abs()
    }
}

/// Splits roots into upper-half-plane conjugate representatives and reals.
fn split_conjugates(roots: &[Complex64], kind: &'static str) -> Result<(Vec<Complex64>, Vec<f64>)> {
    let mut upper = Vec::new();
    let mut lower = 0usize;
    let mut reals = Vec::new();

    for root in roots {
        let tol = 1e-9 * root.norm().max(1.0);
        if root.im.abs() <= tol {
            reals.push(root.re);
        } else if root.im > 0.0 {
            upper.push(*root);
        } else {
            lower += 1;
        }
    }

    if upper.len() != lower {
        return Err(DesignError::UnpairedRoots { kind });
    }
    Ok((upper, reals))
}

/// Index of the real root closest to `anchor`.
fn nearest_real(reals: &[f64], anchor: Complex64) -> Option<usize> {
    reals
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| {
            (Complex64::new(**a, 0.0) - anchor)
                .norm()
                .total_cmp(&(Complex64::new(**b, 0.0) - anchor).norm())
        })
        .map(|(i, _)| i)
}

/// Removes and returns the zeros that best match a pole group.
fn take_nearest_zeros(
    pole: Factor,
    complex: &mut Vec<Complex64>,
    reals: &mut Vec<f64>,
) -> Option<Factor> {
    let anchor = pole.anchor();

    if let Factor::Real(_) = pole {
        if let Some(i) = nearest_real(reals, anchor) {
            return Some(Factor::Real(reals.swap_remove(i)));
        }
        return None;
    }

    let nearest_complex = complex
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| (**a - anchor).norm().total_cmp(&(**b - anchor).norm()))
        .map(|(i, z)| (i, (*z - anchor).norm()));

    let real_distance = nearest_real(reals, anchor)
        .filter(|_| reals.len() >= 2)
        .map(|i| (Complex64::new(reals[i], 0.0) - anchor).norm());

    match (nearest_complex, real_distance) {
        (Some((i, dc)), Some(dr)) if dc <= dr => Some(Factor::Conjugate(complex.swap_remove(i))),
        (Some((i, _)), None) => Some(Factor::Conjugate(complex.swap_remove(i))),
        (_, Some(_)) => {
            let first = nearest_real(reals, anchor).map(|i| reals.swap_remove(i))?;
            let second = nearest_real(reals, anchor).map(|i| reals.swap_remove(i))?;
            Some(Factor::Reals(first, second))
        }
        (None, None) => nearest_real(reals, anchor).map(|i| Factor::Real(reals.swap_remove(i))),
    }
}
