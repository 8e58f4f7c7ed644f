//! Debris Mass - estimate debris mass from detection polygons
//!
//! A CLI tool that converts object-detection polygon outputs into a
//! per-object mass report (CSV).

use clap::Parser;
use debris_mass::cli::Cli;
use debris_mass::commands;

fn main() {
    // Usage and help go to stdout; the exit code stays clap's
    // (0 for --help/--version, non-zero for misuse).
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            print!("{}", e);
            std::process::exit(e.exit_code());
        }
    };

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
