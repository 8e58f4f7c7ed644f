//! Command handlers

use crate::cli::Cli;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::estimator::{estimate, totalize};
use crate::export::export_to_csv;
use crate::extract::predictions;
use crate::output::output_summary;
use crate::types::{Detection, MassRow};
use serde_json::Value;
use std::fs;

/// Execute the CLI command
pub fn execute(cli: Cli) -> Result<()> {
    // Load config, CLI flags override
    let mut config = match cli.config {
        Some(ref path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if cli.no_totals {
        config.write_totals_row = false;
    }
    let output_format = cli.format.unwrap_or(config.output_format);

    if cli.verbose {
        match cli.config {
            Some(ref path) => eprintln!("Config file: {}", path.display()),
            None => eprintln!("Config file: default location"),
        }
        eprintln!("{}", config);
    }

    if !cli.input.exists() {
        return Err(Error::FileNotFound(cli.input.display().to_string()));
    }

    if cli.verbose {
        eprintln!("Reading predictions from {}", cli.input.display());
    }

    let content = fs::read_to_string(&cli.input)?;
    let document: Value = serde_json::from_str(&content)?;

    let rows: Vec<MassRow> = predictions(&document)
        .map(|pred| estimate(&Detection::from_value(pred), &config.calibration))
        .collect();

    if cli.verbose {
        eprintln!("Extracted {} detections", rows.len());
    }

    let totals = totalize(&rows);
    let totals_row = config.write_totals_row.then_some(&totals);
    export_to_csv(&rows, totals_row, &cli.output)?;

    output_summary(output_format, rows.len(), &totals)?;
    println!("Wrote CSV to {}", cli.output.display());

    Ok(())
}
