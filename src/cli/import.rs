//! CLI commands for data import

use std::fs::File;
use std::path::PathBuf;

use clap::Subcommand;

use crate::error::{RelocateError, RelocateResult};
use crate::models::Currency;
use crate::services::{ColumnMapping, ImportService};
use crate::storage::Storage;

/// Import subcommands
#[derive(Subcommand)]
pub enum ImportCommands {
    /// Import cost items from a CSV file
    Costs {
        /// CSV file to import
        file: PathBuf,

        /// Column index of the item name (0-based)
        #[arg(long, default_value_t = 0)]
        name_column: usize,
        /// Column index of the unit value
        #[arg(long, default_value_t = 1)]
        value_column: usize,
        /// Column index of the quantity
        #[arg(long)]
        quantity_column: Option<usize>,
        /// Column index of the category
        #[arg(long)]
        category_column: Option<usize>,
        /// Column index of the currency
        #[arg(long)]
        currency_column: Option<usize>,
        /// Treat the first row as data, not a header
        #[arg(long)]
        no_header: bool,
        /// Field delimiter
        #[arg(long, default_value_t = ',')]
        delimiter: char,
        /// Currency for rows without one
        #[arg(long)]
        currency: Option<Currency>,
    },
}

/// Handle an import command
///
/// `default_currency` is used for rows that carry no currency of their own.
pub fn handle_import_command(
    storage: &Storage,
    cmd: ImportCommands,
    default_currency: Currency,
) -> RelocateResult<()> {
    match cmd {
        ImportCommands::Costs {
            file,
            name_column,
            value_column,
            quantity_column,
            category_column,
            currency_column,
            no_header,
            delimiter,
            currency,
        } => {
            let reader = File::open(&file).map_err(|e| {
                RelocateError::Import(format!("Failed to open {}: {}", file.display(), e))
            })?;

            let mapping = ColumnMapping {
                name_column,
                unit_value_column: value_column,
                quantity_column,
                category_column,
                currency_column,
                tax_column: None,
                fee_column: None,
                has_header: !no_header,
                delimiter,
            };

            let service = ImportService::new(storage);
            let outcome =
                service.import_costs(reader, &mapping, currency.unwrap_or(default_currency))?;

            println!(
                "Imported {} cost items ({} rows skipped)",
                outcome.imported, outcome.skipped
            );
        }
    }

    Ok(())
}
