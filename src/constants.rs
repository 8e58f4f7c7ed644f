//! Default calibration constants for the area-to-mass model.
//!
//! The conversion factor assumes a ground-sample-distance of 0.5 cm/px
//! and an areal density of 0.48 g/cm². These values are asserted, not
//! verified against survey data, so `config::Calibration` lets every one
//! of them be overridden per run.

/// Pixel area to kilograms (px² → kg).
pub const PX2_TO_KG: f64 = 0.00012;

/// Multiplier for the low mass estimate.
pub const LOW_MULT: f64 = 1.0;

/// Multiplier for the moderate mass estimate.
pub const MOD_MULT: f64 = 1.5;

/// Multiplier for the high mass estimate.
pub const HIGH_MULT: f64 = 2.0;
