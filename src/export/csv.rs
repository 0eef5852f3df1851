//! CSV export functionality
//!
//! Exports cost items (with derived amounts) and payments to spreadsheet-
//! compatible CSV.

use std::io::Write;

use crate::error::{RelocateError, RelocateResult};
use crate::models::{Currency, ExchangeRateTable};
use crate::services::CostService;
use crate::storage::Storage;

/// Export all cost items to CSV, derived amounts in the display currency
pub fn export_costs_csv<W: Write>(
    storage: &Storage,
    writer: &mut W,
    display: Currency,
    rates: &ExchangeRateTable,
) -> RelocateResult<()> {
    let cost_service = CostService::new(storage);

    writeln!(
        writer,
        "ID,Name,Category,Currency,Quantity,Unit Value,Tax,Fee,Delivery,Total ({code}),Paid ({code}),Remaining ({code}),Status",
        code = display.code()
    )
    .map_err(|e| RelocateError::Export(e.to_string()))?;

    let items = storage.costs.get_all()?;
    for item in items {
        let summary = cost_service.summarize(&item, display, rates);
        writeln!(
            writer,
            "{},{},{},{},{},{:.2},{},{},{},{:.2},{:.2},{:.2},{}",
            item.id,
            escape_csv(&item.name),
            item.category,
            item.currency,
            item.quantity,
            item.unit_value,
            format_optional(item.tax),
            format_optional(item.fee),
            format_optional(item.delivery_fee),
            summary.total,
            summary.paid,
            summary.remaining,
            summary.status,
        )
        .map_err(|e| RelocateError::Export(e.to_string()))?;
    }

    Ok(())
}

/// Export every payment across all cost items to CSV
pub fn export_payments_csv<W: Write>(storage: &Storage, writer: &mut W) -> RelocateResult<()> {
    writeln!(writer, "ID,Cost Item,Date,Amount,Currency,Description,Receipt")
        .map_err(|e| RelocateError::Export(e.to_string()))?;

    let items = storage.costs.get_all()?;
    for item in items {
        for payment in &item.payments {
            writeln!(
                writer,
                "{},{},{},{:.2},{},{},{}",
                payment.id,
                escape_csv(&item.name),
                payment.date,
                payment.amount,
                payment.currency,
                escape_csv(payment.description.as_deref().unwrap_or("")),
                escape_csv(payment.receipt.as_deref().unwrap_or("")),
            )
            .map_err(|e| RelocateError::Export(e.to_string()))?;
        }
    }

    Ok(())
}

fn format_optional(value: Option<f64>) -> String {
    value.map(|v| format!("{:.2}", v)).unwrap_or_default()
}

/// Escape a CSV field, quoting when it contains a comma, quote, or newline
fn escape_csv(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::RelocatePaths;
    use crate::models::CostCategory;
    use crate::services::{CreateCostInput, PaymentInput};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = RelocatePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_export_costs_csv() {
        let (_temp_dir, storage) = create_test_storage();
        let service = CostService::new(&storage);
        service
            .create(CreateCostInput {
                name: "Flights, one-way".to_string(),
                description: None,
                category: CostCategory::Travel,
                currency: Currency::Eur,
                quantity: 2,
                unit_value: 500.0,
                tax: Some(30.0),
                fee: None,
                delivery_fee: None,
            })
            .unwrap();

        let mut buf = Vec::new();
        export_costs_csv(&storage, &mut buf, Currency::Eur, &ExchangeRateTable::empty()).unwrap();
        let out = String::from_utf8(buf).unwrap();

        let mut lines = out.lines();
        assert!(lines.next().unwrap().starts_with("ID,Name,Category"));
        let row = lines.next().unwrap();
        // Comma in the name forces quoting
        assert!(row.contains("\"Flights, one-way\""));
        assert!(row.contains("1030.00"));
        assert!(row.ends_with("Not paid"));
    }

    #[test]
    fn test_export_payments_csv() {
        let (_temp_dir, storage) = create_test_storage();
        let service = CostService::new(&storage);
        let item = service
            .create(CreateCostInput {
                name: "Visa fee".to_string(),
                description: None,
                category: CostCategory::Visa,
                currency: Currency::Usd,
                quantity: 1,
                unit_value: 180.0,
                tax: None,
                fee: None,
                delivery_fee: None,
            })
            .unwrap();
        service
            .add_payment(
                item.id,
                PaymentInput {
                    amount: 180.0,
                    currency: None,
                    date: NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
                    description: Some("Consulate portal".to_string()),
                    receipt: None,
                },
            )
            .unwrap();

        let mut buf = Vec::new();
        export_payments_csv(&storage, &mut buf).unwrap();
        let out = String::from_utf8(buf).unwrap();

        assert!(out.contains("Visa fee"));
        assert!(out.contains("180.00,USD,Consulate portal"));
    }

    #[test]
    fn test_escape_csv() {
        assert_eq!(escape_csv("plain"), "plain");
        assert_eq!(escape_csv("a,b"), "\"a,b\"");
        assert_eq!(escape_csv("say \"hi\""), "\"say \"\"hi\"\"\"");
    }
}
