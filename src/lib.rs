//! Debris Mass Library
//!
//! Marine debris mass estimation from polygon detection outputs.

pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod estimator;
pub mod export;
pub mod extract;
pub mod geometry;
pub mod output;
pub mod types;
