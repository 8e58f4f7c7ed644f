//! CSV report writer
//!
//! Fixed 13-column layout, one data row per detection in extraction
//! order, optional TOTAL row at the end. Absent fields render as empty
//! cells, never as 0.

use crate::error::Result;
use crate::types::{MassRow, MassTotals};
use csv::WriterBuilder;
use std::fmt::Display;
use std::path::Path;

/// Report column order
pub const HEADERS: [&str; 13] = [
    "detection_id",
    "class",
    "class_id",
    "confidence",
    "bbox_x",
    "bbox_y",
    "bbox_width",
    "bbox_height",
    "num_points",
    "area_px2",
    "mass_low_kg",
    "mass_mod_kg",
    "mass_high_kg",
];

/// Write the report to `output_path`. A totals row is appended when
/// `totals` is given.
pub fn export_to_csv(
    rows: &[MassRow],
    totals: Option<&MassTotals>,
    output_path: &Path,
) -> Result<()> {
    let mut writer = WriterBuilder::new().from_path(output_path)?;

    writer.write_record(HEADERS)?;

    for row in rows {
        writer.write_record(row_record(row))?;
    }

    if let Some(totals) = totals {
        writer.write_record(totals_record(totals))?;
    }

    writer.flush()?;
    Ok(())
}

fn row_record(row: &MassRow) -> [String; 13] {
    [
        blank_or(row.detection_id.as_ref()),
        blank_or(row.class.as_ref()),
        blank_or(row.class_id.as_ref()),
        blank_or(row.confidence.as_ref()),
        blank_or(row.bbox_x.as_ref()),
        blank_or(row.bbox_y.as_ref()),
        blank_or(row.bbox_width.as_ref()),
        blank_or(row.bbox_height.as_ref()),
        row.num_points.to_string(),
        row.area_px2.to_string(),
        row.mass_low_kg.to_string(),
        row.mass_mod_kg.to_string(),
        row.mass_high_kg.to_string(),
    ]
}

/// The sentinel row: "TOTAL" identifier, blank categorical and count
/// cells, the four numeric accumulations filled in.
fn totals_record(totals: &MassTotals) -> [String; 13] {
    [
        "TOTAL".to_string(),
        String::new(),
        String::new(),
        String::new(),
        String::new(),
        String::new(),
        String::new(),
        String::new(),
        String::new(),
        totals.area_px2.to_string(),
        totals.mass_low_kg.to_string(),
        totals.mass_mod_kg.to_string(),
        totals.mass_high_kg.to_string(),
    ]
}

fn blank_or<T: Display>(value: Option<&T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
