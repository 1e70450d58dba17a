//! iirscope Analysis - Spectral analysis of filter impulse responses
//!
//! This crate turns a sampled signal into the curves used to cross-check a
//! digital filter implementation:
//!
//! - [`fft`] - Full-length forward DFT
//! - [`phase`] - Phase unwrapping and group delay
//! - [`response`] - Magnitude (dB) and group-delay response, Nyquist
//!   restriction and display windows
//!
//! ## Example
//!
//! ```rust
//! use iirscope_analysis::{FrequencyResponse, SampleRate};
//!
//! // A two-tap moving average, sampled at 250 Hz.
//! let response = FrequencyResponse::analyze(&[0.5, 0.5, 0.0, 0.0], SampleRate::Hz(250.0)).unwrap();
//! assert_eq!(response.magnitude_db.len(), 4);
//! assert_eq!(response.group_delay.len(), 3);
//!
//! let (freqs, mags) = response.magnitude_up_to_nyquist();
//! assert_eq!(freqs.len(), mags.len());
//! ```

pub mod error;
pub mod fft;
pub mod phase;
pub mod response;

pub use error::{AnalysisError, Result, validate_signal};
pub use fft::{Fft, magnitude_db, spectrum};
pub use phase::{group_delay, unwrap_phase, unwrap_phase_tol, wrap_to_pi};
pub use response::{DisplayWindow, FrequencyAxis, FrequencyResponse, SampleRate, linspace};
