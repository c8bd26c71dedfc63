use std::path::PathBuf;

use clap::Parser;

/// Aggregate price-list CSVs, search them by product name, export an HTML
/// table sorted by price per kilogram.
#[derive(Parser)]
#[command(name = "price-machine", version)]
pub struct Cli {
    /// Directory with price-list CSV files (prompted for when omitted)
    pub catalog: Option<PathBuf>,

    /// Default target for the HTML export
    #[arg(long, default_value = "output.html")]
    pub output: PathBuf,

    /// Custom header-synonym table (JSON with "product", "price" and
    /// "weight" arrays of lowercase header names)
    #[arg(long)]
    pub roles: Option<PathBuf>,

    /// Suppress info logs (only warnings and errors)
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable debug logging (per-file record counts)
    #[arg(short, long)]
    pub verbose: bool,
}
