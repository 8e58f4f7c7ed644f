//! Report export

pub mod csv_report;

pub use csv_report::export_to_csv;
