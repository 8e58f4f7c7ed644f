//! CLI definition using clap

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Output format for the run summary
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "debris-mass")]
#[command(version)]
#[command(about = "Marine debris mass estimation from detection polygons")]
#[command(long_about = None)]
pub struct Cli {
    /// Path to predictions JSON file
    pub input: PathBuf,

    /// Path to output CSV report
    pub output: PathBuf,

    /// Config file to use instead of the default location
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Skip the TOTAL row at the end of the report
    #[arg(long)]
    pub no_totals: bool,

    /// Summary format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f')]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v')]
    pub verbose: bool,
}
