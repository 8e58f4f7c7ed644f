//! Configuration management for debris-mass
//!
//! Config stored at: ~/.config/debris-mass/config.json

use crate::cli::OutputFormat;
use crate::constants::{HIGH_MULT, LOW_MULT, MOD_MULT, PX2_TO_KG};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Area-to-mass calibration, passed explicitly into the estimator.
///
/// The defaults derive from a ground-sample-distance of 0.5 cm/px and an
/// areal density of 0.48 g/cm²; neither is validated, hence configurable.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Calibration {
    /// Pixel area to kilograms conversion factor (px² → kg)
    #[serde(default = "default_px2_to_kg")]
    pub px2_to_kg: f64,

    /// Low estimate multiplier
    #[serde(default = "default_low_mult")]
    pub low_mult: f64,

    /// Moderate estimate multiplier
    #[serde(default = "default_mod_mult")]
    pub mod_mult: f64,

    /// High estimate multiplier
    #[serde(default = "default_high_mult")]
    pub high_mult: f64,
}

fn default_px2_to_kg() -> f64 {
    PX2_TO_KG
}

fn default_low_mult() -> f64 {
    LOW_MULT
}

fn default_mod_mult() -> f64 {
    MOD_MULT
}

fn default_high_mult() -> f64 {
    HIGH_MULT
}

impl Default for Calibration {
    fn default() -> Self {
        Self {
            px2_to_kg: default_px2_to_kg(),
            low_mult: default_low_mult(),
            mod_mult: default_mod_mult(),
            high_mult: default_high_mult(),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Calibration constants for the mass model
    #[serde(default)]
    pub calibration: Calibration,

    /// Append a TOTAL row to the CSV report
    #[serde(default = "default_true")]
    pub write_totals_row: bool,

    /// Default summary format (json, table)
    #[serde(default = "default_output_format")]
    pub output_format: OutputFormat,
}

fn default_true() -> bool {
    true
}

fn default_output_format() -> OutputFormat {
    OutputFormat::Table
}

impl Default for Config {
    fn default() -> Self {
        Self {
            calibration: Calibration::default(),
            write_totals_row: default_true(),
            output_format: default_output_format(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| Error::Config("could not determine config directory".to_string()))?
            .join("debris-mass");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load config from the default location, or create default
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Config::default())
        }
    }

    /// Load config from an explicit path. Unlike [`Config::load`], a
    /// missing file here is an error: the caller asked for it by name.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::FileNotFound(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Debris Mass Configuration")?;
        writeln!(f, "=========================")?;
        writeln!(f)?;
        writeln!(f, "px² → kg:        {}", self.calibration.px2_to_kg)?;
        writeln!(f, "Low multiplier:  {}", self.calibration.low_mult)?;
        writeln!(f, "Mod multiplier:  {}", self.calibration.mod_mult)?;
        writeln!(f, "High multiplier: {}", self.calibration.high_mult)?;
        writeln!(f, "Totals row:      {}", self.write_totals_row)?;
        writeln!(f, "Summary format:  {}", self.output_format)?;
        Ok(())
    }
}
