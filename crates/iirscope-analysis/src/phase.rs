//! Phase unwrapping and group delay.
//!
//! Phase values from a DFT are wrapped to [-π, π]. These utilities
//! reconstruct the continuous (unwrapped) phase by detecting and correcting
//! 2π discontinuities, then differentiate it against angular frequency.
//!
//! ## Algorithms
//!
//! - [`unwrap_phase`]: Standard unwrapping with π tolerance
//! - [`unwrap_phase_tol`]: Configurable tolerance
//! - [`group_delay`]: −Δφ/Δω between neighbouring points

use std::f64::consts::{PI, TAU};

/// Standard phase unwrapping with π tolerance.
///
/// Every step between consecutive samples is replaced by its wrapped
/// equivalent in [-π, π], and the corrections accumulate. The output is a
/// fixed point: unwrapping it again changes nothing.
///
/// # Arguments
/// * `phase` - Wrapped phase values in radians
///
/// # Returns
/// Unwrapped (continuous) phase values
pub fn unwrap_phase(phase: &[f64]) -> Vec<f64> {
    unwrap_phase_tol(phase, PI)
}

/// Phase unwrapping with configurable tolerance.
///
/// Same as [`unwrap_phase`] but a step is only corrected when its magnitude
/// reaches `tolerance`. Tolerances above π leave moderate jumps alone
/// (useful for sparse or noisy spectra); tolerances below π behave like π,
/// since wrapping a step smaller than π leaves it unchanged.
///
/// A step of exactly ±π keeps its sign.
///
/// # Arguments
/// * `phase` - Wrapped phase values in radians
/// * `tolerance` - Jump detection threshold in radians (standard: π)
pub fn unwrap_phase_tol(phase: &[f64], tolerance: f64) -> Vec<f64> {
    let Some(&first) = phase.first() else {
        return Vec::new();
    };

    let mut unwrapped = Vec::with_capacity(phase.len());
    unwrapped.push(first);
    let mut correction = 0.0f64;

    for pair in phase.windows(2) {
        let diff = pair[1] - pair[0];
        if diff.abs() >= tolerance {
            let mut wrapped = wrap_to_pi(diff);
            if wrapped == -PI && diff > 0.0 {
                wrapped = PI;
            }
            correction += wrapped - diff;
        }
        unwrapped.push(pair[1] + correction);
    }

    unwrapped
}

/// Wrap a phase value to [-π, π).
pub fn wrap_to_pi(value: f64) -> f64 {
    (value + PI).rem_euclid(TAU) - PI
}

/// Group delay −Δφ / Δω between consecutive points.
///
/// `phase` must already be unwrapped and `frequencies` must be the matching
/// axis in the same unit as the sample rate (Hz, or cycles/sample). The
/// result has one fewer element than the inputs and is measured in seconds
/// (or samples). A zero frequency step yields zero delay.
pub fn group_delay(phase: &[f64], frequencies: &[f64]) -> Vec<f64> {
    debug_assert_eq!(phase.len(), frequencies.len());
    phase
        .windows(2)
        .zip(frequencies.windows(2))
        .map(|(p, f)| {
            let d_omega = TAU * (f[1] - f[0]);
            if d_omega == 0.0 {
                0.0
            } else {
                -(p[1] - p[0]) / d_omega
            }
        })
        .collect()
}
