//! iirscope Core - IIR filter design and second-order-section filtering
//!
//! This crate provides the filters whose responses the rest of iirscope
//! analyzes: Bessel, Butterworth, Chebyshev I and Chebyshev II designs in
//! lowpass, highpass, bandpass and bandstop form, run as cascades of
//! second-order sections.
//!
//! # Core Abstractions
//!
//! ## Describing a filter
//!
//! - [`FilterFamily`] - Prototype approximation
//! - [`BandType`] - Lowpass, highpass, bandpass or bandstop
//! - [`FilterParams`] - Family, band, order, edges and sample rate, validated up front
//!
//! ## Designing
//!
//! - [`design::design`] - Parameters to [`SosCascade`]
//! - [`design::design_zpk`] - Parameters to digital [`Zpk`]
//! - [`design::prototype`] / [`design::transform`] - The individual design stages
//!
//! ## Filtering
//!
//! - [`Biquad`] - One second-order section (Direct Form I)
//! - [`SosCascade`] - Sections in series, with block filtering and impulse responses
//!
//! # Example
//!
//! ```rust
//! use iirscope_core::{BandType, FilterFamily, FilterParams, design};
//!
//! let params = FilterParams::new(
//!     FilterFamily::ChebyshevI,
//!     BandType::Bandpass,
//!     2,
//!     20.0,
//!     40.0,
//!     250.0,
//! );
//! let cascade = design::design(&params).unwrap();
//! let impulse = cascade.impulse_response(500, 10);
//! assert_eq!(impulse.len(), 500);
//! ```
//!
//! # Precision
//!
//! Everything runs in `f64`. Butterworth and Chebyshev prototypes come
//! from closed forms and are accurate to rounding. Bessel poles come from
//! polynomial root finding, so Bessel orders stop at
//! [`MAX_BESSEL_ORDER`], where the relative pole error is still below
//! `1e-8`.

pub mod biquad;
pub mod design;
pub mod error;
pub mod family;
pub mod params;
pub mod sos;

// Re-export main types at crate root
pub use biquad::Biquad;
pub use design::{Zpk, design, design_zpk};
pub use error::{DesignError, Result};
pub use family::{BandType, FilterFamily};
pub use params::{
    DEFAULT_PASSBAND_RIPPLE_DB, DEFAULT_STOPBAND_ATTENUATION_DB, FilterParams, MAX_BESSEL_ORDER,
    MAX_ORDER,
};
pub use sos::SosCascade;
