//! Display formatting for terminal output
//!
//! Plain-text tables and summary blocks. Formatting stays here so services
//! and reports return data, not strings.

pub mod checklist;
pub mod cost;
pub mod money;
pub mod task;

pub use checklist::{
    format_baggage_list, format_baggage_progress, format_document_list, format_document_progress,
    format_family_list,
};
pub use cost::{format_cost_details, format_cost_list, format_cost_summary, status_badge};
pub use money::format_currency;
pub use task::{format_task_list, format_task_progress};
