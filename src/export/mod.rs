//! Export module for RelocateCLI
//!
//! Provides plan export in multiple formats:
//! - CSV: cost and payment data (spreadsheet-compatible)
//! - JSON: machine-readable full plan export
//! - YAML: human-readable full plan export

pub mod csv;
pub mod json;
pub mod yaml;

pub use csv::{export_costs_csv, export_payments_csv};
pub use json::{export_full_json, FullExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_full_yaml;
