//! Digital IIR filter design.
//!
//! Produces the same transfer functions as the classic analog-prototype
//! recipe:
//!
//! 1. Build a normalised analog lowpass prototype ([`prototype`]).
//! 2. Prewarp the band edges for the bilinear transform.
//! 3. Map the prototype to the requested band type ([`transform`]).
//! 4. Discretise with the bilinear transform.
//! 5. Split into second-order sections ([`Zpk::to_sos`]).
//!
//! Frequencies are normalised to the Nyquist rate and designed at a
//! sample rate of 2, so the prewarped edge is `4·tan(π·Wn/2)`.
//!
//! # Example
//!
//! ```rust
//! use iirscope_core::{design, FilterFamily, FilterParams};
//!
//! let params = FilterParams::lowpass(FilterFamily::Butterworth, 4, 50.0, 250.0);
//! let mut cascade = design::design(&params).unwrap();
//! assert_eq!(cascade.sections().len(), 2);
//! let _y = cascade.process(1.0);
//! ```

pub mod prototype;
pub mod roots;
pub mod transform;
mod zpk;

pub use zpk::Zpk;

use crate::error::Result;
use crate::family::{BandType, FilterFamily};
use crate::params::FilterParams;
use crate::sos::SosCascade;
use std::f64::consts::PI;

/// Normalised design sample rate.
const DESIGN_FS: f64 = 2.0;

/// Designs the digital filter described by `params` as an SOS cascade.
///
/// Parameters are validated first; nothing is computed for an invalid
/// request.
pub fn design(params: &FilterParams) -> Result<SosCascade> {
    let digital = design_zpk(params)?;
    let rows = digital.to_sos()?;
    tracing::debug!(
        family = %params.family,
        band = %params.band,
        order = params.order,
        sections = rows.len(),
        "designed filter"
    );
    SosCascade::new(&rows)
}

/// Designs the digital filter described by `params` in zpk form.
pub fn design_zpk(params: &FilterParams) -> Result<Zpk> {
    params.validate()?;

    let analog = match params.family {
        FilterFamily::Butterworth => prototype::butterworth(params.order),
        FilterFamily::Bessel => prototype::bessel(params.order)?,
        FilterFamily::ChebyshevI => prototype::chebyshev1(params.order, params.passband_ripple_db),
        FilterFamily::ChebyshevII => {
            prototype::chebyshev2(params.order, params.stopband_attenuation_db)
        }
    };

    let nyquist = params.nyquist();
    let warp = |hz: f64| 2.0 * DESIGN_FS * (PI * (hz / nyquist) / DESIGN_FS).tan();

    let mapped = match params.band {
        BandType::Lowpass => transform::lowpass_to_lowpass(&analog, warp(params.high_hz)),
        BandType::Highpass => transform::lowpass_to_highpass(&analog, warp(params.low_hz)),
        BandType::Bandpass | BandType::Bandstop => {
            let (w1, w2) = (warp(params.low_hz), warp(params.high_hz));
            let (wo, bw) = ((w1 * w2).sqrt(), w2 - w1);
            if params.band == BandType::Bandpass {
                transform::lowpass_to_bandpass(&analog, wo, bw)
            } else {
                transform::lowpass_to_bandstop(&analog, wo, bw)
            }
        }
    };

    Ok(transform::bilinear(&mapped, DESIGN_FS))
}
