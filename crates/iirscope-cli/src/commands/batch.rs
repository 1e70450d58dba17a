//! Filter-and-export sweep over a time series.

use super::common;
use anyhow::Context;
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use iirscope_core::design;
use iirscope_io::{export_file_name, read_time_series, write_filtered};
use std::path::{Path, PathBuf};

#[derive(Args)]
pub struct BatchArgs {
    /// `time;value` input file (overrides the configuration)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Directory for the CSV exports (overrides the configuration)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,
}

pub fn run(args: BatchArgs, config_path: Option<&Path>) -> anyhow::Result<()> {
    let config = common::load_config(config_path)?;
    let sweep = &config.sweep;
    let input = args.input.unwrap_or_else(|| sweep.input.clone());
    let output_dir = args.output_dir.unwrap_or_else(|| sweep.output_dir.clone());

    let series = read_time_series(&input)?;
    println!(
        "Loaded {}: {} samples at {:.3} Hz",
        input.display(),
        series.len(),
        series.sample_rate
    );

    let filters = sweep.filters(series.sample_rate)?;
    std::fs::create_dir_all(&output_dir)
        .with_context(|| format!("creating {}", output_dir.display()))?;

    let pb = ProgressBar::new(filters.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")?
            .progress_chars("##-"),
    );

    for params in &filters {
        let cascade = design(params)?;
        let filtered = cascade.filter(&series.values);
        let name = export_file_name(
            params.family,
            params.band,
            sweep.low_hz,
            sweep.high_hz,
            params.order,
        );
        let path = output_dir.join(name);
        write_filtered(&path, &series.time, &filtered)?;
        pb.suspend(|| println!("Filtered signal has been saved to {}", path.display()));
        pb.inc(1);
    }

    pb.finish_and_clear();
    println!("Exported {} filtered signals to {}", filters.len(), output_dir.display());
    Ok(())
}
