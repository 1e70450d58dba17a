//! Error types for configuration operations.

use iirscope_core::DesignError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or checking a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read a file
    #[error("failed to read file '{}': {source}", path.display())]
    ReadFile {
        /// Path of the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse TOML
    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Filter family name not recognised
    #[error("unknown filter family: {0}")]
    UnknownFamily(String),

    /// Band type name not recognised
    #[error("unknown band type: {0}")]
    UnknownBand(String),

    /// A sweep entry would be rejected by the designer
    #[error("invalid sweep entry {entry}: {source}")]
    Design {
        /// Family, band and order of the entry.
        entry: String,
        /// Why the designer rejects it.
        #[source]
        source: DesignError,
    },

    /// Any other inconsistent setting
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

impl ConfigError {
    /// Create a read file error.
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::ReadFile {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    fn mock_io_err() -> std::io::Error {
        std::io::Error::new(std::io::ErrorKind::NotFound, "mock")
    }

    #[test]
    fn read_file_display_names_path() {
        let err = ConfigError::read_file("/a/iirscope.toml", mock_io_err());
        let msg = err.to_string();
        assert!(msg.contains("failed to read file"), "got: {msg}");
        assert!(msg.contains("/a/iirscope.toml"), "got: {msg}");
        assert!(err.source().is_some(), "ReadFile must expose I/O source");
    }

    #[test]
    fn unknown_names_display() {
        assert_eq!(
            ConfigError::UnknownFamily("elliptic".to_string()).to_string(),
            "unknown filter family: elliptic"
        );
        assert_eq!(
            ConfigError::UnknownBand("allpass".to_string()).to_string(),
            "unknown band type: allpass"
        );
    }

    #[test]
    fn design_error_is_the_source() {
        let err = ConfigError::Design {
            entry: "butterworth lowpass order 0".to_string(),
            source: DesignError::InvalidSampleRate(0.0),
        };
        let msg = err.to_string();
        assert!(msg.starts_with("invalid sweep entry butterworth lowpass order 0"), "got: {msg}");
        assert!(err.source().is_some());
    }

    #[test]
    fn toml_parse_error_converts() {
        let parse_err = toml::from_str::<toml::Value>("= nope").unwrap_err();
        let err: ConfigError = parse_err.into();
        assert!(matches!(err, ConfigError::TomlParse(_)));
    }
}
