//! Filter families and band types.
//!
//! Names follow two conventions that both appear in existing test output:
//! report directories use `chebyshevI`/`chebyshevII`, while exported CSV
//! files use `chebychev1`/`chebychev2`. Parsing accepts either.

use crate::error::DesignError;
use crate::params::{MAX_BESSEL_ORDER, MAX_ORDER};
use std::fmt;
use std::str::FromStr;

/// Approximation used for the analog prototype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterFamily {
    /// Maximally flat passband.
    Butterworth,
    /// Maximally flat group delay (phase-normalised).
    Bessel,
    /// Equiripple passband.
    ChebyshevI,
    /// Equiripple stopband.
    ChebyshevII,
}

impl FilterFamily {
    /// All families, in the order the filter test reports list them.
    pub const ALL: [FilterFamily; 4] = [
        FilterFamily::Bessel,
        FilterFamily::Butterworth,
        FilterFamily::ChebyshevI,
        FilterFamily::ChebyshevII,
    ];

    /// Directory name used by filter test reports.
    pub fn report_name(self) -> &'static str {
        match self {
            FilterFamily::Butterworth => "butterworth",
            FilterFamily::Bessel => "bessel",
            FilterFamily::ChebyshevI => "chebyshevI",
            FilterFamily::ChebyshevII => "chebyshevII",
        }
    }

    /// Highest prototype order this family can be designed at.
    pub fn max_order(self) -> usize {
        match self {
            FilterFamily::Bessel => MAX_BESSEL_ORDER,
            _ => MAX_ORDER,
        }
    }

    /// Lower-case stem used in exported CSV file names.
    pub fn file_stem(self) -> &'static str {
        match self {
            FilterFamily::Butterworth => "butterworth",
            FilterFamily::Bessel => "bessel",
            FilterFamily::ChebyshevI => "chebychev1",
            FilterFamily::ChebyshevII => "chebychev2",
        }
    }
}

impl FromStr for FilterFamily {
    type Err = DesignError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "butterworth" | "butter" => Ok(FilterFamily::Butterworth),
            "bessel" => Ok(FilterFamily::Bessel),
            "chebyshevi" | "chebychev1" | "chebyshev1" | "cheby1" => Ok(FilterFamily::ChebyshevI),
            "chebyshevii" | "chebychev2" | "chebyshev2" | "cheby2" => Ok(FilterFamily::ChebyshevII),
            _ => Err(DesignError::UnknownFamily(s.to_string())),
        }
    }
}

impl fmt::Display for FilterFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.report_name())
    }
}

/// Which part of the spectrum the filter passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BandType {
    /// Passes below the high edge.
    Lowpass,
    /// Passes above the low edge.
    Highpass,
    /// Passes between the edges.
    Bandpass,
    /// Rejects between the edges.
    Bandstop,
}

impl BandType {
    /// All band types, in sweep order.
    pub const ALL: [BandType; 4] = [
        BandType::Lowpass,
        BandType::Highpass,
        BandType::Bandpass,
        BandType::Bandstop,
    ];

    /// Long name (`lowpass`, ...), as used in export file names.
    pub fn name(self) -> &'static str {
        match self {
            BandType::Lowpass => "lowpass",
            BandType::Highpass => "highpass",
            BandType::Bandpass => "bandpass",
            BandType::Bandstop => "bandstop",
        }
    }

    /// Short report file stem (`lp`, `hp`, `bp`, `bs`).
    pub fn short_name(self) -> &'static str {
        match self {
            BandType::Lowpass => "lp",
            BandType::Highpass => "hp",
            BandType::Bandpass => "bp",
            BandType::Bandstop => "bs",
        }
    }

    /// Human-readable title.
    pub fn title(self) -> &'static str {
        match self {
            BandType::Lowpass => "Lowpass",
            BandType::Highpass => "Highpass",
            BandType::Bandpass => "Bandpass",
            BandType::Bandstop => "Bandstop",
        }
    }

    /// Whether the filter needs both band edges.
    pub fn is_band(self) -> bool {
        matches!(self, BandType::Bandpass | BandType::Bandstop)
    }
}

impl FromStr for BandType {
    type Err = DesignError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "lowpass" | "lp" => Ok(BandType::Lowpass),
            "highpass" | "hp" => Ok(BandType::Highpass),
            "bandpass" | "bp" => Ok(BandType::Bandpass),
            "bandstop" | "bs" => Ok(BandType::Bandstop),
            _ => Err(DesignError::UnknownBand(s.to_string())),
        }
    }
}

impl fmt::Display for BandType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn family_accepts_both_spellings() {
        assert_eq!("chebyshevI".parse::<FilterFamily>(), Ok(FilterFamily::ChebyshevI));
        assert_eq!("Chebychev1".parse::<FilterFamily>(), Ok(FilterFamily::ChebyshevI));
        assert_eq!("chebyshevII".parse::<FilterFamily>(), Ok(FilterFamily::ChebyshevII));
        assert_eq!("chebychev2".parse::<FilterFamily>(), Ok(FilterFamily::ChebyshevII));
        assert_eq!("Butterworth".parse::<FilterFamily>(), Ok(FilterFamily::Butterworth));
    }

    #[test]
    fn family_names_round_trip() {
        for family in FilterFamily::ALL {
            assert_eq!(family.report_name().parse::<FilterFamily>(), Ok(family));
            assert_eq!(family.file_stem().parse::<FilterFamily>(), Ok(family));
        }
    }

    #[test]
    fn unknown_family_is_rejected() {
        assert!(matches!(
            "elliptic".parse::<FilterFamily>(),
            Err(DesignError::UnknownFamily(name)) if name == "elliptic"
        ));
    }

    #[test]
    fn band_short_names() {
        assert_eq!("bs".parse::<BandType>(), Ok(BandType::Bandstop));
        assert_eq!(BandType::Bandpass.short_name(), "bp");
        assert!(BandType::Bandstop.is_band());
        assert!(!BandType::Highpass.is_band());
    }
}
