//! Error types for spectral analysis.

use thiserror::Error;

/// Reasons a signal cannot be analyzed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    /// The signal has no samples, so its DFT is undefined.
    #[error("signal is empty")]
    EmptySignal,

    /// A sample is NaN or infinite.
    #[error("sample {index} is not finite ({value})")]
    NonFiniteSample {
        /// Position of the first offending sample.
        index: usize,
        /// The offending value.
        value: f64,
    },

    /// Every sample is zero; the magnitude would be −∞ dB everywhere.
    #[error("signal is all zeros; magnitude and phase are undefined")]
    AllZeroSignal,

    /// Sample rate is zero, negative, or not finite.
    #[error("sample rate must be positive and finite, got {0}")]
    InvalidSampleRate(f64),
}

/// Convenience result type for analysis.
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Checks that a signal is non-empty, finite and not identically zero.
pub fn validate_signal(signal: &[f64]) -> Result<()> {
    if signal.is_empty() {
        return Err(AnalysisError::EmptySignal);
    }
    if let Some((index, &value)) = signal.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        return Err(AnalysisError::NonFiniteSample { index, value });
    }
    if signal.iter().all(|v| *v == 0.0) {
        return Err(AnalysisError::AllZeroSignal);
    }
    Ok(())
}
