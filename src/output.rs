//! Output formatting module

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::types::MassTotals;
use serde_json::json;

/// Print the run summary to stdout after the report is written.
pub fn output_summary(
    output_format: OutputFormat,
    detection_count: usize,
    totals: &MassTotals,
) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(&json!({
            "detections": detection_count,
            "total_area_px2": totals.area_px2,
            "total_mass_low_kg": totals.mass_low_kg,
            "total_mass_mod_kg": totals.mass_mod_kg,
            "total_mass_high_kg": totals.mass_high_kg,
        }))?;
        println!("{}", content);
    } else {
        println!("\nMass Report");
        println!("===========");
        println!("Detections:   {}", detection_count);
        println!("Total area:   {:.1} px²", totals.area_px2);
        println!("Mass (low):   {:.3} kg", totals.mass_low_kg);
        println!("Mass (mod):   {:.3} kg", totals.mass_mod_kg);
        println!("Mass (high):  {:.3} kg", totals.mass_high_kg);
    }

    Ok(())
}
