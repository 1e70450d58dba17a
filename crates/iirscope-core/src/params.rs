//! Filter parameters and their validation.

use crate::error::{DesignError, Result};
use crate::family::{BandType, FilterFamily};

/// Highest order accepted by the designer.
pub const MAX_ORDER: usize = 24;

/// Highest Bessel order accepted.
///
/// Bessel poles come from polynomial root finding in `f64`; beyond this
/// order the pole error climbs past `1e-8`.
pub const MAX_BESSEL_ORDER: usize = 16;

/// Default Chebyshev I passband ripple (dB).
pub const DEFAULT_PASSBAND_RIPPLE_DB: f64 = 1.0;

/// Default Chebyshev II stopband attenuation (dB).
pub const DEFAULT_STOPBAND_ATTENUATION_DB: f64 = 1.0;

/// Everything needed to design one digital IIR filter.
///
/// Lowpass filters use `high_hz` as their cutoff and highpass filters use
/// `low_hz`, so a single (low, high) pair can drive a whole sweep over band
/// types.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterParams {
    /// Prototype family.
    pub family: FilterFamily,
    /// Band type.
    pub band: BandType,
    /// Prototype order (band filters end up with twice as many poles).
    pub order: usize,
    /// Low band edge in Hz.
    pub low_hz: f64,
    /// High band edge in Hz.
    pub high_hz: f64,
    /// Sample rate in Hz.
    pub sample_rate: f64,
    /// Chebyshev I passband ripple in dB.
    pub passband_ripple_db: f64,
    /// Chebyshev II minimum stopband attenuation in dB.
    pub stopband_attenuation_db: f64,
}

impl FilterParams {
    /// Creates parameters with default ripple and attenuation.
    pub fn new(
        family: FilterFamily,
        band: BandType,
        order: usize,
        low_hz: f64,
        high_hz: f64,
        sample_rate: f64,
    ) -> Self {
        Self {
            family,
            band,
            order,
            low_hz,
            high_hz,
            sample_rate,
            passband_ripple_db: DEFAULT_PASSBAND_RIPPLE_DB,
            stopband_attenuation_db: DEFAULT_STOPBAND_ATTENUATION_DB,
        }
    }

    /// Lowpass with cutoff `cutoff_hz`.
    pub fn lowpass(family: FilterFamily, order: usize, cutoff_hz: f64, sample_rate: f64) -> Self {
        Self::new(family, BandType::Lowpass, order, 0.0, cutoff_hz, sample_rate)
    }

    /// Highpass with cutoff `cutoff_hz`.
    pub fn highpass(family: FilterFamily, order: usize, cutoff_hz: f64, sample_rate: f64) -> Self {
        Self::new(family, BandType::Highpass, order, cutoff_hz, 0.0, sample_rate)
    }

    /// Sets the Chebyshev I passband ripple.
    pub fn with_passband_ripple(mut self, ripple_db: f64) -> Self {
        self.passband_ripple_db = ripple_db;
        self
    }

    /// Sets the Chebyshev II stopband attenuation.
    pub fn with_stopband_attenuation(mut self, attenuation_db: f64) -> Self {
        self.stopband_attenuation_db = attenuation_db;
        self
    }

    /// Nyquist frequency in Hz.
    pub fn nyquist(&self) -> f64 {
        self.sample_rate / 2.0
    }

    /// Band edges actually used by this band type, in Hz.
    pub fn edges(&self) -> Vec<f64> {
        match self.band {
            BandType::Lowpass => vec![self.high_hz],
            BandType::Highpass => vec![self.low_hz],
            BandType::Bandpass | BandType::Bandstop => vec![self.low_hz, self.high_hz],
        }
    }

    /// Checks every parameter the chosen family and band type use.
    pub fn validate(&self) -> Result<()> {
        let max = self.family.max_order();
        if self.order == 0 || self.order > max {
            return Err(DesignError::InvalidOrder {
                order: self.order,
                max,
            });
        }
        if !self.sample_rate.is_finite() || self.sample_rate <= 0.0 {
            return Err(DesignError::InvalidSampleRate(self.sample_rate));
        }

        let nyquist = self.nyquist();
        let check = |edge: &'static str, freq: f64| {
            if freq.is_finite() && freq > 0.0 && freq < nyquist {
                Ok(())
            } else {
                Err(DesignError::EdgeOutOfRange { edge, freq, nyquist })
            }
        };
        match self.band {
            BandType::Lowpass => check("high", self.high_hz)?,
            BandType::Highpass => check("low", self.low_hz)?,
            BandType::Bandpass | BandType::Bandstop => {
                check("low", self.low_hz)?;
                check("high", self.high_hz)?;
                if self.low_hz >= self.high_hz {
                    return Err(DesignError::InvertedBand {
                        low: self.low_hz,
                        high: self.high_hz,
                    });
                }
            }
        }

        match self.family {
            FilterFamily::ChebyshevI if !is_positive(self.passband_ripple_db) => {
                Err(DesignError::InvalidRipple {
                    name: "passband ripple",
                    value: self.passband_ripple_db,
                })
            }
            FilterFamily::ChebyshevII if !is_positive(self.stopband_attenuation_db) => {
                Err(DesignError::InvalidRipple {
                    name: "stopband attenuation",
                    value: self.stopband_attenuation_db,
                })
            }
            _ => Ok(()),
        }
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowpass_uses_high_edge_only() {
        let params = FilterParams::lowpass(FilterFamily::Butterworth, 4, 50.0, 250.0);
        assert!(params.validate().is_ok());
        assert_eq!(params.edges(), vec![50.0]);
    }

    #[test]
    fn rejects_cutoff_at_nyquist() {
        let params = FilterParams::lowpass(FilterFamily::Butterworth, 4, 125.0, 250.0);
        assert!(matches!(
            params.validate(),
            Err(DesignError::EdgeOutOfRange { edge: "high", .. })
        ));
    }

    #[test]
    fn rejects_zero_and_huge_order() {
        let mut params = FilterParams::lowpass(FilterFamily::Butterworth, 0, 50.0, 250.0);
        assert!(matches!(params.validate(), Err(DesignError::InvalidOrder { .. })));
        params.order = MAX_ORDER;
        assert!(params.validate().is_ok());
        params.order = MAX_ORDER + 1;
        assert!(matches!(params.validate(), Err(DesignError::InvalidOrder { max: 24, .. })));
    }

    #[test]
    fn bessel_order_is_capped_lower() {
        let mut params =
            FilterParams::lowpass(FilterFamily::Bessel, MAX_BESSEL_ORDER, 50.0, 250.0);
        assert!(params.validate().is_ok());
        params.order = MAX_BESSEL_ORDER + 1;
        assert_eq!(
            params.validate(),
            Err(DesignError::InvalidOrder { order: 17, max: 16 })
        );
    }

    #[test]
    fn rejects_inverted_band() {
        let params = FilterParams::new(
            FilterFamily::ChebyshevI,
            BandType::Bandpass,
            2,
            300.0,
            200.0,
            1000.0,
        );
        assert!(matches!(params.validate(), Err(DesignError::InvertedBand { .. })));
    }

    #[test]
    fn rejects_non_positive_ripple() {
        let params = FilterParams::lowpass(FilterFamily::ChebyshevI, 2, 50.0, 250.0)
            .with_passband_ripple(0.0);
        assert!(matches!(params.validate(), Err(DesignError::InvalidRipple { .. })));

        // Ripple is irrelevant for Butterworth.
        let params = FilterParams::lowpass(FilterFamily::Butterworth, 2, 50.0, 250.0)
            .with_passband_ripple(0.0);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn rejects_bad_sample_rate() {
        let params = FilterParams::lowpass(FilterFamily::Butterworth, 2, 50.0, f64::NAN);
        assert!(matches!(params.validate(), Err(DesignError::InvalidSampleRate(_))));
    }
}
