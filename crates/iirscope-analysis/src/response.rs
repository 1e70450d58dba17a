//! Magnitude and group-delay response of a sampled signal.
//!
//! [`FrequencyResponse::analyze`] takes a sampled signal (typically a
//! filter's impulse response) and derives:
//!
//! - the magnitude response in dB, one point per DFT bin (N points);
//! - the unwrapped phase, one point per bin;
//! - the group delay, one point per pair of neighbouring bins (N − 1 points).
//!
//! Both curves cover the whole 0..fs range; use
//! [`FrequencyResponse::magnitude_up_to_nyquist`] and
//! [`FrequencyResponse::delays_up_to_nyquist`] for the meaningful half.
//!
//! # Frequency axis
//!
//! By default the axis is N evenly spaced points from 0 to fs inclusive
//! ([`FrequencyAxis::Linspace`]). This reproduces the existing reference
//! plots exactly, but places bin k at `fs·k/(N−1)` instead of the true DFT
//! bin frequency `fs·k/N`. [`FrequencyAxis::BinCentered`] uses the true
//! bin frequencies.

use crate::error::{AnalysisError, Result, validate_signal};
use crate::fft::{magnitude_db, spectrum};
use crate::phase::{group_delay, unwrap_phase};
use rustfft::num_complex::Complex64;

/// Sample rate of an analyzed signal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SampleRate {
    /// Samples per second; frequencies in Hz, delays in seconds.
    Hz(f64),
    /// Sentinel rate 1: frequencies in cycles/sample, delays in samples.
    Normalized,
}

impl SampleRate {
    /// Interprets a raw rate, treating exactly `1` as [`SampleRate::Normalized`].
    pub fn from_value(value: f64) -> Result<Self> {
        if !value.is_finite() || value <= 0.0 {
            return Err(AnalysisError::InvalidSampleRate(value));
        }
        if value == 1.0 {
            Ok(SampleRate::Normalized)
        } else {
            Ok(SampleRate::Hz(value))
        }
    }

    /// Numeric rate (1 for normalised).
    pub fn value(self) -> f64 {
        match self {
            SampleRate::Hz(hz) => hz,
            SampleRate::Normalized => 1.0,
        }
    }

    /// Nyquist frequency in axis units.
    pub fn nyquist(self) -> f64 {
        self.value() / 2.0
    }

    /// Label for the frequency axis.
    pub fn frequency_unit(self) -> &'static str {
        match self {
            SampleRate::Hz(_) => "Hz",
            SampleRate::Normalized => "cycles/sample",
        }
    }

    /// Label for delay values.
    pub fn delay_unit(self) -> &'static str {
        match self {
            SampleRate::Hz(_) => "s",
            SampleRate::Normalized => "samples",
        }
    }
}

/// How DFT bins are mapped to frequencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FrequencyAxis {
    /// N points evenly spaced from 0 to fs inclusive; delays on N − 1
    /// points from 0 to fs inclusive.
    #[default]
    Linspace,
    /// Bin k at `fs·k/N`; each delay at the midpoint of its two bins.
    BinCentered,
}

/// Range of delay values worth displaying.
///
/// A presentation clamp only: the analyzer never alters delay values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayWindow {
    /// Smallest displayed delay.
    pub min: f64,
    /// Largest displayed delay.
    pub max: f64,
}

impl DisplayWindow {
    /// ±0.075 s for rates in Hz.
    pub const SECONDS: DisplayWindow = DisplayWindow {
        min: -0.075,
        max: 0.075,
    };

    /// ±200 samples for the normalised rate.
    pub const SAMPLES: DisplayWindow = DisplayWindow {
        min: -200.0,
        max: 200.0,
    };

    /// Default window for a sample rate.
    pub fn for_rate(rate: SampleRate) -> Self {
        match rate {
            SampleRate::Hz(_) => Self::SECONDS,
            SampleRate::Normalized => Self::SAMPLES,
        }
    }

    /// Whether `delay` lies inside the window (inclusive).
    pub fn contains(&self, delay: f64) -> bool {
        delay >= self.min && delay <= self.max
    }
}

/// Magnitude, phase and group delay of a signal.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyResponse {
    /// Sample rate the axes are expressed in.
    pub sample_rate: SampleRate,
    /// Bin-to-frequency mapping used.
    pub axis: FrequencyAxis,
    /// Full DFT, N bins.
    pub spectrum: Vec<Complex64>,
    /// Frequency of each bin, N points.
    pub frequencies: Vec<f64>,
    /// 20·log10|X[k]|, N points. A zero bin is `-inf`.
    pub magnitude_db: Vec<f64>,
    /// Unwrapped phase in radians, N points.
    pub phase: Vec<f64>,
    /// Frequency of each delay value, N − 1 points.
    pub delay_frequencies: Vec<f64>,
    /// Group delay in seconds (or samples), N − 1 points.
    pub group_delay: Vec<f64>,
}

impl FrequencyResponse {
    /// Analyzes `signal` on the default [`FrequencyAxis::Linspace`] axis.
    ///
    /// # Errors
    ///
    /// Empty, non-finite or all-zero signals are rejected.
    pub fn analyze(signal: &[f64], sample_rate: SampleRate) -> Result<Self> {
        Self::analyze_with(signal, sample_rate, FrequencyAxis::default())
    }

    /// Analyzes `signal` on the given frequency axis.
    ///
    /// `SampleRate::Hz(1.0)` is treated as [`SampleRate::Normalized`].
    pub fn analyze_with(
        signal: &[f64],
        sample_rate: SampleRate,
        axis: FrequencyAxis,
    ) -> Result<Self> {
        validate_signal(signal)?;
        let sample_rate = SampleRate::from_value(sample_rate.value())?;
        let fs = sample_rate.value();

        let n = signal.len();
        let spectrum = spectrum(signal);
        let magnitude_db: Vec<f64> = spectrum.iter().map(|bin| magnitude_db(*bin)).collect();
        let wrapped: Vec<f64> = spectrum.iter().map(|bin| bin.arg()).collect();
        let phase = unwrap_phase(&wrapped);

        let frequencies = match axis {
            FrequencyAxis::Linspace => linspace(0.0, fs, n),
            FrequencyAxis::BinCentered => (0..n).map(|k| fs * k as f64 / n as f64).collect(),
        };
        let group_delay = group_delay(&phase, &frequencies);
        let delay_frequencies = match axis {
            FrequencyAxis::Linspace => linspace(0.0, fs, n - 1),
            FrequencyAxis::BinCentered => frequencies
                .windows(2)
                .map(|pair| 0.5 * (pair[0] + pair[1]))
                .collect(),
        };

        tracing::debug!(
            samples = n,
            sample_rate = fs,
            axis = ?axis,
            "analyzed signal"
        );

        Ok(Self {
            sample_rate,
            axis,
            spectrum,
            frequencies,
            magnitude_db,
            phase,
            delay_frequencies,
            group_delay,
        })
    }

    /// Number of analyzed samples (N).
    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    /// Always false: analysis rejects empty signals.
    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    /// Frequencies and magnitudes restricted to [0, fs/2].
    pub fn magnitude_up_to_nyquist(&self) -> (&[f64], &[f64]) {
        let end = nyquist_end(&self.frequencies, self.sample_rate.nyquist());
        (&self.frequencies[..end], &self.magnitude_db[..end])
    }

    /// Delay frequencies and group delays restricted to [0, fs/2].
    pub fn delays_up_to_nyquist(&self) -> (&[f64], &[f64]) {
        let end = nyquist_end(&self.delay_frequencies, self.sample_rate.nyquist());
        (&self.delay_frequencies[..end], &self.group_delay[..end])
    }

    /// Default display window for this response's sample rate.
    pub fn display_window(&self) -> DisplayWindow {
        DisplayWindow::for_rate(self.sample_rate)
    }

    /// `(frequency, delay)` pairs up to Nyquist that fall inside `window`.
    pub fn visible_delays(&self, window: DisplayWindow) -> Vec<(f64, f64)> {
        let (freqs, delays) = self.delays_up_to_nyquist();
        freqs
            .iter()
            .zip(delays)
            .filter(|(_, d)| window.contains(**d))
            .map(|(f, d)| (*f, *d))
            .collect()
    }

    /// Frequency and level of the loudest bin up to Nyquist.
    ///
    /// `None` only if every bin up to Nyquist is a true zero.
    pub fn peak(&self) -> Option<(f64, f64)> {
        let (freqs, mags) = self.magnitude_up_to_nyquist();
        freqs
            .iter()
            .zip(mags)
            .filter(|(_, m)| m.is_finite())
            .max_by(|(_, a), (_, b)| a.total_cmp(b))
            .map(|(f, m)| (*f, *m))
    }

    /// Get magnitude at a specific frequency (interpolated)
    pub fn magnitude_at(&self, freq: f64) -> f64 {
        interpolate(&self.frequencies, &self.magnitude_db, freq)
    }

    /// Find the first −3 dB crossing below `reference_db`, up to Nyquist.
    ///
    /// Linearly interpolated between bins.
    pub fn cutoff_frequency(&self, reference_db: f64) -> Option<f64> {
        let target = reference_db - 3.0;
        let (freqs, mags) = self.magnitude_up_to_nyquist();

        for i in 1..mags.len() {
            if mags[i] < target && mags[i - 1] >= target {
                if !mags[i].is_finite() {
                    return Some(freqs[i]);
                }
                let t = (target - mags[i - 1]) / (mags[i] - mags[i - 1]);
                return Some(freqs[i - 1] + t * (freqs[i] - freqs[i - 1]));
            }
        }
        None
    }

    /// Smallest and largest delay up to Nyquist inside `window`.
    pub fn delay_range(&self, window: DisplayWindow) -> Option<(f64, f64)> {
        self.visible_delays(window)
            .into_iter()
            .map(|(_, d)| d)
            .fold(None, |range, d| match range {
                None => Some((d, d)),
                Some((lo, hi)) => Some((lo.min(d), hi.max(d))),
            })
    }
}

/// `n` evenly spaced points from `start` to `stop` inclusive.
///
/// The last point is exactly `stop`; a single point is `start`.
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            let mut points: Vec<f64> = (0..n).map(|i| start + i as f64 * step).collect();
            points[n - 1] = stop;
            points
        }
    }
}

/// Index one past the last frequency ≤ `nyquist` (axes are ascending).
fn nyquist_end(frequencies: &[f64], nyquist: f64) -> usize {
    frequencies.partition_point(|f| *f <= nyquist)
}

fn interpolate(x: &[f64], y: &[f64], target_x: f64) -> f64 {
    let (Some(&first), Some(&last)) = (y.first(), y.last()) else {
        return f64::NAN;
    };

    if target_x <= x[0] {
        return first;
    }

    for i in 1..x.len() {
        if target_x <= x[i] {
            let t = (target_x - x[i - 1]) / (x[i] - x[i - 1]);
            return y[i - 1] + t * (y[i] - y[i - 1]);
        }
    }

    last
}
