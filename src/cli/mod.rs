//! CLI command handlers
//!
//! Bridges clap argument parsing with the service layer. Each domain gets a
//! subcommand enum and a handler function.

pub mod backup;
pub mod baggage;
pub mod cost;
pub mod document;
pub mod export;
pub mod family;
pub mod import;
pub mod rates;
pub mod task;

pub use backup::{handle_backup_command, BackupCommands};
pub use baggage::{handle_baggage_command, BaggageCommands};
pub use cost::{handle_cost_command, CostCommands};
pub use document::{handle_document_command, DocumentCommands};
pub use export::{handle_export_command, ExportCommands, ExportFormat};
pub use family::{handle_family_command, FamilyCommands};
pub use import::{handle_import_command, ImportCommands};
pub use rates::{handle_rates_command, RatesCommands};
pub use task::{handle_task_command, TaskCommands};
