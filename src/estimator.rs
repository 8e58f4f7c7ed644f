//! Area-to-mass estimation over extracted detections.
//!
//! Both functions here are pure: a detection maps to exactly one row,
//! and totals depend only on the rows. Invalid shapes degrade to zero
//! area or absent fields, never to an error.

use crate::config::Calibration;
use crate::geometry::shoelace_area_px2;
use crate::types::{Detection, MassRow, MassTotals};

/// Estimate one detection into a report row.
///
/// Pixel area comes from the polygon outline (0 for fewer than 3
/// vertices), base surface mass is area × the px²→kg factor, and the
/// three reported masses apply the low/moderate/high multipliers to the
/// same base. All other fields pass through verbatim.
pub fn estimate(detection: &Detection, calibration: &Calibration) -> MassRow {
    let points = detection.points.as_deref().unwrap_or(&[]);
    let area_px2 = shoelace_area_px2(points);
    let surface_kg = area_px2 * calibration.px2_to_kg;

    MassRow {
        detection_id: detection.detection_id.clone(),
        class: detection.class.clone(),
        class_id: detection.class_id,
        confidence: detection.confidence,
        bbox_x: detection.x,
        bbox_y: detection.y,
        bbox_width: detection.width,
        bbox_height: detection.height,
        num_points: points.len(),
        area_px2,
        mass_low_kg: surface_kg * calibration.low_mult,
        mass_mod_kg: surface_kg * calibration.mod_mult,
        mass_high_kg: surface_kg * calibration.high_mult,
    }
}

/// Sum the area and mass columns across all rows. Empty input sums to 0.
pub fn totalize(rows: &[MassRow]) -> MassTotals {
    rows.iter().fold(MassTotals::default(), |mut totals, row| {
        totals.area_px2 += row.area_px2;
        totals.mass_low_kg += row.mass_low_kg;
        totals.mass_mod_kg += row.mass_mod_kg;
        totals.mass_high_kg += row.mass_high_kg;
        totals
    })
}
