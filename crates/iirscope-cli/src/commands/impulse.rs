//! Impulse responses of designed filters, in the report layout `response` reads.

use super::common;
use anyhow::Context;
use clap::Args;
use iirscope_core::{
    BandType, DEFAULT_PASSBAND_RIPPLE_DB, DEFAULT_STOPBAND_ATTENUATION_DB, FilterFamily,
    FilterParams, design,
};
use iirscope_io::write_impulse_response;
use std::path::{Path, PathBuf};

#[derive(Args)]
pub struct ImpulseArgs {
    /// Filter family
    #[arg(short, long)]
    family: String,

    /// Band type (default: all four)
    #[arg(short, long)]
    band: Option<String>,

    /// Filter order (default: 4 for lowpass/highpass, 2 for bandpass/bandstop)
    #[arg(long)]
    order: Option<usize>,

    /// Lowpass/highpass cutoff in Hz
    #[arg(long, default_value = "50")]
    cutoff: f64,

    /// Bandpass/bandstop centre frequency in Hz
    #[arg(long, default_value = "50")]
    center: f64,

    /// Bandpass/bandstop width in Hz
    #[arg(long, default_value = "5")]
    width: f64,

    /// Chebyshev I passband ripple in dB
    #[arg(long, default_value_t = DEFAULT_PASSBAND_RIPPLE_DB)]
    ripple: f64,

    /// Chebyshev II stopband attenuation in dB
    #[arg(long, default_value_t = DEFAULT_STOPBAND_ATTENUATION_DB)]
    attenuation: f64,

    /// Sample rate in Hz
    #[arg(long, default_value = "250")]
    sample_rate: f64,

    /// Number of output samples
    #[arg(long, default_value = "500")]
    length: usize,

    /// Position of the unit impulse (must be less than --length)
    #[arg(long, default_value = "10")]
    at: usize,

    /// Output directory (default: <report_dir>/<family>)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,
}

impl ImpulseArgs {
    fn params(&self, family: FilterFamily, band: BandType) -> FilterParams {
        let (low, high) = if band.is_band() {
            (self.center - self.width / 2.0, self.center + self.width / 2.0)
        } else {
            (self.cutoff, self.cutoff)
        };
        let order = self.order.unwrap_or(if band.is_band() { 2 } else { 4 });
        FilterParams::new(family, band, order, low, high, self.sample_rate)
            .with_passband_ripple(self.ripple)
            .with_stopband_attenuation(self.attenuation)
    }
}

pub fn run(args: ImpulseArgs, config_path: Option<&Path>) -> anyhow::Result<()> {
    if args.at >= args.length {
        anyhow::bail!(
            "impulse position {} must be less than the length {}",
            args.at,
            args.length
        );
    }
    let family = common::parse_family(&args.family)?;
    let bands = match &args.band {
        Some(name) => vec![common::parse_band(name)?],
        None => BandType::ALL.to_vec(),
    };
    let output_dir = match &args.output_dir {
        Some(dir) => dir.clone(),
        None => common::load_config(config_path)?
            .response
            .report_dir
            .join(family.report_name()),
    };

    // Validate everything before writing anything.
    let cascades = bands
        .iter()
        .map(|&band| design(&args.params(family, band)).map(|cascade| (band, cascade)))
        .collect::<Result<Vec<_>, _>>()?;

    std::fs::create_dir_all(&output_dir)
        .with_context(|| format!("creating {}", output_dir.display()))?;
    for (band, cascade) in cascades {
        let path = output_dir.join(format!("{}.txt", band.short_name()));
        write_impulse_response(&path, &cascade.impulse_response(args.length, args.at))?;
        println!("Wrote {} {} impulse response to {}", family, band, path.display());
    }
    Ok(())
}
