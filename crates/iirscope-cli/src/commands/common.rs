//! Shared CLI helpers used across multiple commands.

use anyhow::Context;
use iirscope_analysis::{FrequencyResponse, SampleRate};
use iirscope_config::Config;
use iirscope_core::{BandType, FilterFamily};
use serde::Serialize;
use std::path::Path;

/// Load and check the configuration.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let config = Config::load_or_default(path).context("loading configuration")?;
    config.validate()?;
    Ok(config)
}

/// Parse a filter family name, listing the accepted names on failure.
pub fn parse_family(name: &str) -> anyhow::Result<FilterFamily> {
    name.parse().map_err(|_| {
        anyhow::anyhow!(
            "unknown filter family '{name}' (expected one of: bessel, butterworth, chebyshevI, chebyshevII)"
        )
    })
}

/// Parse a band type name, listing the accepted names on failure.
pub fn parse_band(name: &str) -> anyhow::Result<BandType> {
    name.parse().map_err(|_| {
        anyhow::anyhow!(
            "unknown band type '{name}' (expected one of: lowpass, highpass, bandpass, bandstop)"
        )
    })
}

/// Sample rate from a command-line value; 1 selects normalised frequency.
pub fn sample_rate(value: f64) -> anyhow::Result<SampleRate> {
    SampleRate::from_value(value).with_context(|| format!("invalid sample rate {value}"))
}

/// Headline figures of one analyzed response.
#[derive(Debug, Clone, Serialize)]
pub struct ResponseSummary {
    /// What was analyzed (band or file name).
    pub label: String,
    /// Number of samples (N).
    pub samples: usize,
    /// Sample rate value (1 when normalised).
    pub sample_rate: f64,
    /// Unit of the frequency figures.
    pub frequency_unit: &'static str,
    /// Unit of the delay figures.
    pub delay_unit: &'static str,
    /// Frequency of the loudest bin up to Nyquist.
    pub peak_frequency: Option<f64>,
    /// Level of the loudest bin in dB.
    pub peak_db: Option<f64>,
    /// First point 3 dB below the peak.
    pub cutoff_frequency: Option<f64>,
    /// Smallest group delay inside the display window.
    pub delay_min: Option<f64>,
    /// Largest group delay inside the display window.
    pub delay_max: Option<f64>,
    /// Delay points up to Nyquist inside the display window.
    pub visible_delays: usize,
}

impl ResponseSummary {
    /// Summarize `response` under `label`.
    pub fn new(label: impl Into<String>, response: &FrequencyResponse) -> Self {
        let rate = response.sample_rate;
        let window = response.display_window();
        let peak = response.peak();
        let delay_range = response.delay_range(window);
        Self {
            label: label.into(),
            samples: response.len(),
            sample_rate: rate.value(),
            frequency_unit: rate.frequency_unit(),
            delay_unit: rate.delay_unit(),
            peak_frequency: peak.map(|(f, _)| f),
            peak_db: peak.map(|(_, db)| db),
            cutoff_frequency: peak.and_then(|(_, db)| response.cutoff_frequency(db)),
            delay_min: delay_range.map(|(lo, _)| lo),
            delay_max: delay_range.map(|(_, hi)| hi),
            visible_delays: response.visible_delays(window).len(),
        }
    }

    /// Print the summary as an indented block.
    pub fn print(&self) {
        let f_unit = self.frequency_unit;
        let d_unit = self.delay_unit;
        println!("{}:", self.label);
        println!("  {} samples at {} {f_unit}", self.samples, self.sample_rate);
        match (self.peak_frequency, self.peak_db) {
            (Some(freq), Some(db)) => println!("  Peak:       {db:.2} dB at {freq:.3} {f_unit}"),
            _ => println!("  Peak:       none (silent spectrum)"),
        }
        match self.cutoff_frequency {
            Some(freq) => println!("  -3 dB:      {freq:.3} {f_unit}"),
            None => println!("  -3 dB:      not reached below Nyquist"),
        }
        match (self.delay_min, self.delay_max) {
            (Some(lo), Some(hi)) => println!(
                "  Delay:      {lo:.6} .. {hi:.6} {d_unit} ({} points in view)",
                self.visible_delays
            ),
            _ => println!("  Delay:      no points inside the display window"),
        }
    }
}

/// Print summaries as text, or as one pretty JSON array.
pub fn report(summaries: &[ResponseSummary], json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(summaries)?);
    } else {
        for summary in summaries {
            summary.print();
        }
    }
    Ok(())
}
