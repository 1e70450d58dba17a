//! Spectral analysis of a single file.

use super::common::{self, ResponseSummary};
use anyhow::Context;
use clap::Args;
use iirscope_analysis::{FrequencyAxis, FrequencyResponse};
use iirscope_core::SosCascade;
use iirscope_io::{read_impulse_response, read_sos, write_response};
use std::path::PathBuf;

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Impulse response file (or SOS table with --sos)
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Sample rate in Hz (1 = normalised, delays in samples)
    #[arg(long, default_value = "1000")]
    sample_rate: f64,

    /// Place each frequency at its DFT bin centre instead of spreading N points over 0..fs
    #[arg(long)]
    bin_centered: bool,

    /// Treat INPUT as second-order sections and analyze their impulse response
    #[arg(long)]
    sos: bool,

    /// Impulse response length for --sos
    #[arg(long, default_value = "500")]
    length: usize,

    /// Impulse position for --sos
    #[arg(long, default_value = "10")]
    at: usize,

    /// Write magnitude and group-delay CSVs here
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Print the summary as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(args: AnalyzeArgs) -> anyhow::Result<()> {
    let sample_rate = common::sample_rate(args.sample_rate)?;
    let axis = if args.bin_centered {
        FrequencyAxis::BinCentered
    } else {
        FrequencyAxis::Linspace
    };

    let samples = if args.sos {
        let rows = read_sos(&args.input)?;
        let cascade = SosCascade::new(&rows)
            .with_context(|| format!("building filter from {}", args.input.display()))?;
        tracing::info!(sections = rows.len(), length = args.length, "computing impulse response");
        cascade.impulse_response(args.length, args.at)
    } else {
        read_impulse_response(&args.input)?
    };

    let response = FrequencyResponse::analyze_with(&samples, sample_rate, axis)
        .with_context(|| format!("analyzing {}", args.input.display()))?;

    let label = args
        .input
        .file_stem()
        .map_or_else(|| "response".to_string(), |s| s.to_string_lossy().into_owned());
    if let Some(dir) = &args.output_dir {
        let files = write_response(dir, &label, &response)?;
        if !args.json {
            println!("Wrote {}", files.magnitude.display());
            println!("Wrote {}", files.group_delay.display());
        }
    }

    common::report(&[ResponseSummary::new(label, &response)], args.json)
}
