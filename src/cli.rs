use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::io::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "gitworth")]
#[command(about = "GitHub portfolio analyzer - scores a developer profile from normalized profile data", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score a profile record and emit the assessment
    Analyze {
        /// Path to a profile record JSON file ("-" for stdin)
        profile: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Analysis time as RFC 3339 (defaults to now); fixing it makes runs
        /// reproducible
        #[arg(long = "at")]
        analysis_time: Option<String>,
    },

    /// Print the active scoring policy (weights and thresholds) as JSON
    Policy,
}
