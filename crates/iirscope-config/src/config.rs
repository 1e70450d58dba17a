//! Configuration file format.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use iirscope_core::{BandType, FilterFamily, FilterParams};

use crate::error::ConfigError;

/// File picked up from the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "iirscope.toml";

const SWEEP_FAMILIES: [FilterFamily; 4] = [
    FilterFamily::Butterworth,
    FilterFamily::Bessel,
    FilterFamily::ChebyshevI,
    FilterFamily::ChebyshevII,
];

/// Top-level configuration.
///
/// Every field has a default, so an empty file (or no file at all) is a
/// valid configuration.
///
/// # TOML Format
///
/// ```toml
/// [response]
/// report_dir = "target/surefire-reports"
/// sample_rate = 250.0
///
/// [sweep]
/// input = "signal.txt"
/// output_dir = "."
/// low_hz = 200.0
/// high_hz = 300.0
/// families = ["butterworth", "bessel", "chebyshevI", "chebyshevII"]
/// bands = ["lowpass", "highpass", "bandpass", "bandstop"]
/// orders = [1, 2, 4, 5, 10]
/// passband_ripple_db = 1.0
/// stopband_attenuation_db = 1.0
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Settings for reading filter test reports.
    pub response: ResponseConfig,
    /// Settings for the filter-and-export sweep.
    pub sweep: SweepConfig,
}

/// Where impulse-response reports live and how they were sampled.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ResponseConfig {
    /// Directory holding one sub-directory per filter family.
    pub report_dir: PathBuf,
    /// Sample rate of the reports in Hz (1 for normalised frequency).
    pub sample_rate: f64,
}

impl Default for ResponseConfig {
    fn default() -> Self {
        Self {
            report_dir: PathBuf::from("target/surefire-reports"),
            sample_rate: 250.0,
        }
    }
}

/// The family × band × order grid applied to one input signal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SweepConfig {
    /// `time;value` input file.
    pub input: PathBuf,
    /// Directory receiving the CSV exports.
    pub output_dir: PathBuf,
    /// Low band edge in Hz (highpass cutoff).
    pub low_hz: f64,
    /// High band edge in Hz (lowpass cutoff).
    pub high_hz: f64,
    /// Family names, in sweep order.
    pub families: Vec<String>,
    /// Band type names, in sweep order.
    pub bands: Vec<String>,
    /// Filter orders, in sweep order.
    pub orders: Vec<usize>,
    /// Chebyshev I passband ripple in dB.
    pub passband_ripple_db: f64,
    /// Chebyshev II stopband attenuation in dB.
    pub stopband_attenuation_db: f64,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("signal.txt"),
            output_dir: PathBuf::from("."),
            low_hz: 200.0,
            high_hz: 300.0,
            families: SWEEP_FAMILIES
                .iter()
                .map(|f| f.report_name().to_string())
                .collect(),
            bands: BandType::ALL.iter().map(|b| b.name().to_string()).collect(),
            orders: vec![1, 2, 4, 5, 10],
            passband_ripple_db: iirscope_core::DEFAULT_PASSBAND_RIPPLE_DB,
            stopband_attenuation_db: iirscope_core::DEFAULT_STOPBAND_ATTENUATION_DB,
        }
    }
}

impl Config {
    /// Load a configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
        let config = Self::from_toml(&content)?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Load a configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Load `path` if given, else [`DEFAULT_CONFIG_FILE`] if it exists,
    /// else the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => Self::load(DEFAULT_CONFIG_FILE),
            None => {
                tracing::debug!("no configuration file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Check the response settings.
    ///
    /// The sweep is checked separately by [`SweepConfig::filters`] once the
    /// input's sample rate is known.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let rate = self.response.sample_rate;
        if !rate.is_finite() || rate <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "response sample rate must be positive, got {rate}"
            )));
        }
        self.sweep.families()?;
        self.sweep.bands()?;
        Ok(())
    }
}

impl SweepConfig {
    /// Parsed family list.
    pub fn families(&self) -> Result<Vec<FilterFamily>, ConfigError> {
        self.families
            .iter()
            .map(|name| {
                name.parse()
                    .map_err(|_| ConfigError::UnknownFamily(name.clone()))
            })
            .collect()
    }

    /// Parsed band type list.
    pub fn bands(&self) -> Result<Vec<BandType>, ConfigError> {
        self.bands
            .iter()
            .map(|name| name.parse().map_err(|_| ConfigError::UnknownBand(name.clone())))
            .collect()
    }

    /// Every filter of the sweep at `sample_rate`, families outermost and
    /// orders innermost.
    ///
    /// All entries are validated before any is returned, so a bad edge or
    /// order fails the whole sweep before filtering starts.
    pub fn filters(&self, sample_rate: f64) -> Result<Vec<FilterParams>, ConfigError> {
        let families = self.families()?;
        let bands = self.bands()?;
        if families.is_empty() || bands.is_empty() || self.orders.is_empty() {
            return Err(ConfigError::Invalid(
                "sweep needs at least one family, band and order".to_string(),
            ));
        }

        let mut filters = Vec::with_capacity(families.len() * bands.len() * self.orders.len());
        for &family in &families {
            for &band in &bands {
                for &order in &self.orders {
                    let params = FilterParams::new(
                        family,
                        band,
                        order,
                        self.low_hz,
                        self.high_hz,
                        sample_rate,
                    )
                    .with_passband_ripple(self.passband_ripple_db)
                    .with_stopband_attenuation(self.stopband_attenuation_db);
                    params.validate().map_err(|source| ConfigError::Design {
                        entry: format!("{family} {band} order {order}"),
                        source,
                    })?;
                    filters.push(params);
                }
            }
        }
        Ok(filters)
    }
}
