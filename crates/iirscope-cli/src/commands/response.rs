//! Per-family report of the filter test suite's impulse responses.

use super::common::{self, ResponseSummary};
use anyhow::Context;
use clap::Args;
use iirscope_analysis::FrequencyResponse;
use iirscope_core::BandType;
use iirscope_io::{read_impulse_response, write_response};
use std::path::{Path, PathBuf};

/// Printed when no family is given.
pub const USAGE: &str =
    "Specify which filter shall be plotted: bessel, butterworth, chebyshevI, chebyshevII.";

/// Report order of the band files.
const BANDS: [BandType; 4] = [
    BandType::Lowpass,
    BandType::Highpass,
    BandType::Bandstop,
    BandType::Bandpass,
];

#[derive(Args)]
pub struct ResponseArgs {
    /// Filter family whose reports to read
    #[arg(value_name = "FAMILY")]
    family: Option<String>,

    /// Directory with one sub-directory per family
    #[arg(long)]
    report_dir: Option<PathBuf>,

    /// Sample rate of the impulse responses (1 = normalised)
    #[arg(long)]
    sample_rate: Option<f64>,

    /// Also write magnitude and group-delay CSVs here
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Print the summaries as JSON
    #[arg(long)]
    json: bool,

    /// Warn about missing band files instead of failing
    #[arg(long)]
    skip_missing: bool,
}

pub fn run(args: ResponseArgs, config_path: Option<&Path>) -> anyhow::Result<()> {
    let Some(family_name) = args.family else {
        println!("{USAGE}");
        return Ok(());
    };

    let config = common::load_config(config_path)?;
    let family = common::parse_family(&family_name)?;
    let report_dir = args.report_dir.unwrap_or(config.response.report_dir);
    let sample_rate =
        common::sample_rate(args.sample_rate.unwrap_or(config.response.sample_rate))?;
    let family_dir = report_dir.join(family.report_name());

    let mut summaries = Vec::with_capacity(BANDS.len());
    for band in BANDS {
        let path = family_dir.join(format!("{}.txt", band.short_name()));
        if args.skip_missing && !path.is_file() {
            tracing::warn!(path = %path.display(), "skipping missing {} report", band.name());
            continue;
        }

        let samples = read_impulse_response(&path)?;
        let response = FrequencyResponse::analyze(&samples, sample_rate)
            .with_context(|| format!("analyzing {}", path.display()))?;

        if let Some(dir) = &args.output_dir {
            let stem = format!("{}_{}", family.report_name(), band.short_name());
            write_response(dir, &stem, &response)?;
        }
        summaries.push(ResponseSummary::new(band.title(), &response));
    }

    if summaries.is_empty() {
        anyhow::bail!("no impulse responses found in {}", family_dir.display());
    }
    if !args.json {
        println!("{family} ({}):", family_dir.display());
    }
    common::report(&summaries, args.json)
}
