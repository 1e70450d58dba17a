//! Flat-file I/O for the iirscope toolchain.
//!
//! This crate provides:
//!
//! - **Loaders**: [`read_impulse_response`], [`read_time_series`] and
//!   [`read_sos`] for the plain-text formats the filter tests produce
//! - **CSV export**: [`write_filtered`] for filtered signals and
//!   [`write_response`] for magnitude and group-delay tables
//! - **Naming**: [`export_file_name`] for the sweep's output files
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use iirscope_io::{read_time_series, write_filtered};
//!
//! let series = read_time_series("signal.txt")?;
//! let filtered = cascade.filter(&series.values);
//! write_filtered("out.csv", &series.time, &filtered)?;
//! ```

mod export;
mod naming;
mod text;

pub use export::{
    ResponseFiles, write_filtered, write_group_delay, write_impulse_response,
    write_magnitude_response, write_response,
};
pub use naming::export_file_name;
pub use text::{TimeSeries, read_impulse_response, read_sos, read_time_series};

use std::path::{Path, PathBuf};

/// Error types for file I/O operations.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Standard I/O error without a path attached.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A file could not be opened or read.
    #[error("failed to read '{}': {source}", path.display())]
    Read {
        /// File that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A file could not be created or written.
    #[error("failed to write '{}': {source}", path.display())]
    Write {
        /// File that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A token is not a number.
    #[error("{}:{line}: cannot parse {token:?} as a number", path.display())]
    Parse {
        /// File containing the token.
        path: PathBuf,
        /// 1-based line number.
        line: usize,
        /// Offending text.
        token: String,
    },

    /// The file holds no data rows.
    #[error("'{}' contains no samples", .0.display())]
    Empty(PathBuf),

    /// A line has the wrong shape.
    #[error("{}:{line}: {reason}", path.display())]
    Malformed {
        /// File containing the line.
        path: PathBuf,
        /// 1-based line number.
        line: usize,
        /// What is wrong with it.
        reason: String,
    },

    /// No usable sample rate can be derived from the time column.
    #[error("cannot derive a sample rate from '{}': {reason}", path.display())]
    SampleRate {
        /// File the time column came from.
        path: PathBuf,
        /// What is wrong with it.
        reason: String,
    },

    /// Time and signal columns differ in length.
    #[error("time column has {time} rows but signal has {signal}")]
    LengthMismatch {
        /// Number of time stamps.
        time: usize,
        /// Number of signal values.
        signal: usize,
    },
}

impl IoError {
    /// Create a read error for `path`.
    pub fn read(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        IoError::Read {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create a write error for `path`.
    pub fn write(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        IoError::Write {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

/// Convenience result type for file I/O operations.
pub type Result<T> = std::result::Result<T, IoError>;
