//! Error types for filter design and SOS construction.

use thiserror::Error;

/// Errors raised while validating parameters or building a filter.
///
/// Every variant is produced before any sample is filtered, so a caller
/// can reject a bad configuration up front.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DesignError {
    /// Filter order outside the supported range.
    #[error("filter order must be between 1 and {max}, got {order}")]
    InvalidOrder {
        /// Requested order.
        order: usize,
        /// Largest supported order.
        max: usize,
    },

    /// Sample rate is zero, negative, or not finite.
    #[error("sample rate must be positive and finite, got {0}")]
    InvalidSampleRate(f64),

    /// A band edge lies outside the open interval (0, Nyquist).
    #[error(
        "{edge} cutoff {freq} Hz must lie strictly between 0 and the Nyquist frequency {nyquist} Hz"
    )]
    EdgeOutOfRange {
        /// Which edge (`"low"` or `"high"`).
        edge: &'static str,
        /// Offending frequency in Hz.
        freq: f64,
        /// Nyquist frequency in Hz.
        nyquist: f64,
    },

    /// Band filter whose low edge is not below its high edge.
    #[error("low cutoff {low} Hz must be below high cutoff {high} Hz")]
    InvertedBand {
        /// Low edge in Hz.
        low: f64,
        /// High edge in Hz.
        high: f64,
    },

    /// Ripple or attenuation that is not a positive dB value.
    #[error("{name} must be positive, got {value} dB")]
    InvalidRipple {
        /// Parameter name.
        name: &'static str,
        /// Offending value in dB.
        value: f64,
    },

    /// Filter family name not recognised.
    #[error("unknown filter family: {0}")]
    UnknownFamily(String),

    /// Band type name not recognised.
    #[error("unknown band type: {0}")]
    UnknownBand(String),

    /// A second-order section with `a0 == 0`.
    #[error("section {index} has a zero leading denominator coefficient")]
    DegenerateSection {
        /// Index of the section in the cascade.
        index: usize,
    },

    /// Polynomial root finding stopped before the roots settled.
    #[error("root finding did not converge for degree {degree} (last relative step {step:e})")]
    RootsDidNotConverge {
        /// Polynomial degree.
        degree: usize,
        /// Largest relative root correction in the final iteration.
        step: f64,
    },

    /// Complex roots that do not come in conjugate pairs.
    #[error("{kind} do not form conjugate pairs")]
    UnpairedRoots {
        /// `"zeros"` or `"poles"`.
        kind: &'static str,
    },
}

/// Convenience result type for filter design.
pub type Result<T> = std::result::Result<T, DesignError>;
