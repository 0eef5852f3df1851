//! CSV import service
//!
//! Imports cost items from CSV files with a configurable column mapping, so
//! spreadsheets kept before adopting the tool can be pulled in wholesale.

use std::io::Read;

use csv::ReaderBuilder;

use crate::error::{RelocateError, RelocateResult};
use crate::models::{CostCategory, Currency};
use crate::services::costs::{CostService, CreateCostInput};
use crate::storage::Storage;

/// Column mapping configuration for cost CSV import
#[derive(Debug, Clone)]
pub struct ColumnMapping {
    /// Index of the item name column
    pub name_column: usize,
    /// Index of the unit value column
    pub unit_value_column: usize,
    /// Index of the quantity column (quantity 1 when absent)
    pub quantity_column: Option<usize>,
    /// Index of the category column (Other when absent)
    pub category_column: Option<usize>,
    /// Index of the currency column (default currency when absent)
    pub currency_column: Option<usize>,
    /// Index of the tax column
    pub tax_column: Option<usize>,
    /// Index of the fee column
    pub fee_column: Option<usize>,
    /// Whether the first row is a header
    pub has_header: bool,
    /// Delimiter character
    pub delimiter: char,
}

impl Default for ColumnMapping {
    fn default() -> Self {
        Self {
            name_column: 0,
            unit_value_column: 1,
            quantity_column: Some(2),
            category_column: Some(3),
            currency_column: Some(4),
            tax_column: None,
            fee_column: None,
            has_header: true,
            delimiter: ',',
        }
    }
}

/// Outcome of a CSV import run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportOutcome {
    /// Rows imported as cost items
    pub imported: usize,
    /// Rows skipped because they failed to parse or validate
    pub skipped: usize,
}

/// Service for importing cost items from CSV
pub struct ImportService<'a> {
    storage: &'a Storage,
}

impl<'a> ImportService<'a> {
    /// Create a new import service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Import cost items from CSV data
    ///
    /// Rows that fail to parse or validate are skipped and counted; a single
    /// bad row never aborts the rest of the file.
    pub fn import_costs<R: Read>(
        &self,
        reader: R,
        mapping: &ColumnMapping,
        default_currency: Currency,
    ) -> RelocateResult<ImportOutcome> {
        let mut csv_reader = ReaderBuilder::new()
            .has_headers(mapping.has_header)
            .delimiter(mapping.delimiter as u8)
            .flexible(true)
            .from_reader(reader);

        let cost_service = CostService::new(self.storage);
        let mut outcome = ImportOutcome::default();

        for record in csv_reader.records() {
            let record =
                record.map_err(|e| RelocateError::Import(format!("Failed to read CSV: {}", e)))?;

            let input = match parse_row(&record, mapping, default_currency) {
                Some(input) => input,
                None => {
                    outcome.skipped += 1;
                    continue;
                }
            };

            match cost_service.create(input) {
                Ok(_) => outcome.imported += 1,
                Err(e) if e.is_validation() => outcome.skipped += 1,
                Err(e) => return Err(e),
            }
        }

        Ok(outcome)
    }
}

/// Parse one CSV record into a cost input, or None if the row is unusable
fn parse_row(
    record: &csv::StringRecord,
    mapping: &ColumnMapping,
    default_currency: Currency,
) -> Option<CreateCostInput> {
    let name = record.get(mapping.name_column)?.trim();
    if name.is_empty() {
        return None;
    }

    let unit_value: f64 = record.get(mapping.unit_value_column)?.trim().parse().ok()?;

    let quantity = match mapping.quantity_column {
        Some(col) => match record.get(col).map(str::trim) {
            Some("") | None => 1,
            Some(raw) => raw.parse().ok()?,
        },
        None => 1,
    };

    let category = mapping
        .category_column
        .and_then(|col| record.get(col))
        .and_then(|raw| raw.parse::<CostCategory>().ok())
        .unwrap_or_default();

    let currency = mapping
        .currency_column
        .and_then(|col| record.get(col))
        .and_then(|raw| raw.parse::<Currency>().ok())
        .unwrap_or(default_currency);

    let optional_amount = |col: Option<usize>| -> Option<f64> {
        col.and_then(|c| record.get(c))
            .and_then(|raw| raw.trim().parse().ok())
    };

    Some(CreateCostInput {
        name: name.to_string(),
        description: None,
        category,
        currency,
        quantity,
        unit_value,
        tax: optional_amount(mapping.tax_column),
        fee: optional_amount(mapping.fee_column),
        delivery_fee: None,
    })
}
