//! CLI commands for data export
//!
//! Provides commands for exporting the plan in various formats.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use clap::{Subcommand, ValueEnum};

use crate::error::{RelocateError, RelocateResult};
use crate::export::{export_costs_csv, export_full_json, export_full_yaml, export_payments_csv};
use crate::models::Currency;
use crate::storage::Storage;

/// Export format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// CSV format (costs only)
    Csv,
    /// JSON format (full plan)
    Json,
    /// YAML format (full plan, human-readable)
    Yaml,
}

/// Export subcommands
#[derive(Subcommand)]
pub enum ExportCommands {
    /// Export the full plan to a file
    All {
        /// Output file path
        output: PathBuf,

        /// Export format
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,
    },

    /// Export cost items to CSV
    Costs {
        /// Output file path
        output: PathBuf,
    },

    /// Export payment history to CSV
    Payments {
        /// Output file path
        output: PathBuf,
    },
}

/// Handle an export command
///
/// `display` is the currency derived amounts are exported in.
pub fn handle_export_command(
    storage: &Storage,
    cmd: ExportCommands,
    display: Currency,
) -> RelocateResult<()> {
    match cmd {
        ExportCommands::All { output, format } => {
            let mut writer = open_output(&output)?;
            match format {
                ExportFormat::Csv => {
                    let rates = storage.rates.snapshot()?;
                    export_costs_csv(storage, &mut writer, display, &rates)?;
                }
                ExportFormat::Json => export_full_json(storage, &mut writer)?,
                ExportFormat::Yaml => export_full_yaml(storage, &mut writer)?,
            }
            println!("Exported plan to {}", output.display());
        }

        ExportCommands::Costs { output } => {
            let rates = storage.rates.snapshot()?;
            let mut writer = open_output(&output)?;
            export_costs_csv(storage, &mut writer, display, &rates)?;
            println!("Exported costs to {}", output.display());
        }

        ExportCommands::Payments { output } => {
            let mut writer = open_output(&output)?;
            export_payments_csv(storage, &mut writer)?;
            println!("Exported payments to {}", output.display());
        }
    }

    Ok(())
}

fn open_output(path: &PathBuf) -> RelocateResult<BufWriter<File>> {
    let file = File::create(path).map_err(|e| {
        RelocateError::Export(format!("Failed to create {}: {}", path.display(), e))
    })?;
    Ok(BufWriter::new(file))
}
