//! Reports for RelocateCLI
//!
//! Aggregate views computed from the repositories, kept free of any
//! terminal formatting so the display layer and exporters share them.

pub mod cost_summary;

pub use cost_summary::{CategoryRow, CostSummaryReport};
