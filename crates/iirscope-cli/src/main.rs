//! iirscope CLI - frequency and group-delay analysis of IIR filter implementations.

mod commands;

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "iirscope")]
#[command(author, version, about = "IIR filter response analysis", long_about = None)]
struct Cli {
    /// Configuration file (default: ./iirscope.toml if present)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// More log output (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize the lp/hp/bs/bp impulse responses of one filter family
    Response(commands::response::ResponseArgs),

    /// Analyze a single impulse response or SOS table
    Analyze(commands::analyze::AnalyzeArgs),

    /// Filter a time series with every configured design and export CSVs
    Batch(commands::batch::BatchArgs),

    /// Write impulse responses of designed filters
    Impulse(commands::impulse::ImpulseArgs),
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let config = cli.config.as_deref();

    match cli.command {
        Commands::Response(args) => commands::response::run(args, config),
        Commands::Analyze(args) => commands::analyze::run(args),
        Commands::Batch(args) => commands::batch::run(args, config),
        Commands::Impulse(args) => commands::impulse::run(args, config),
    }
}
