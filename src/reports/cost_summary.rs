//! Cost summary report
//!
//! Aggregates the cost plan by category in a single display currency, with
//! payment status counts across the whole plan.

use std::collections::HashMap;

use crate::error::RelocateResult;
use crate::models::{CostCategory, Currency, ExchangeRateTable, PaymentStatus};
use crate::services::CostService;
use crate::storage::Storage;

/// Per-category aggregate row
#[derive(Debug, Clone)]
pub struct CategoryRow {
    /// Category the row aggregates
    pub category: CostCategory,
    /// Number of cost items in the category
    pub item_count: usize,
    /// Total cost in the display currency
    pub total: f64,
    /// Amount paid in the display currency
    pub paid: f64,
    /// Remaining balance in the display currency
    pub remaining: f64,
}

/// Cost summary across the whole plan
#[derive(Debug, Clone)]
pub struct CostSummaryReport {
    /// Currency every amount below is expressed in
    pub display_currency: Currency,
    /// Per-category rows, ordered by remaining balance descending
    pub categories: Vec<CategoryRow>,
    /// Total cost of the plan
    pub total: f64,
    /// Total paid so far
    pub paid: f64,
    /// Total remaining
    pub remaining: f64,
    /// Items with no payment recorded
    pub not_paid_count: usize,
    /// Items partially paid
    pub partially_paid_count: usize,
    /// Items settled in full
    pub paid_count: usize,
}

impl CostSummaryReport {
    /// Generate the report in the given display currency
    pub fn generate(
        storage: &Storage,
        display_currency: Currency,
        rates: &ExchangeRateTable,
    ) -> RelocateResult<Self> {
        let cost_service = CostService::new(storage);
        let items = storage.costs.get_all()?;

        let mut by_category: HashMap<CostCategory, CategoryRow> = HashMap::new();
        let mut total = 0.0;
        let mut paid = 0.0;
        let mut not_paid_count = 0;
        let mut partially_paid_count = 0;
        let mut paid_count = 0;

        for item in &items {
            let summary = cost_service.summarize(item, display_currency, rates);

            let row = by_category
                .entry(item.category)
                .or_insert_with(|| CategoryRow {
                    category: item.category,
                    item_count: 0,
                    total: 0.0,
                    paid: 0.0,
                    remaining: 0.0,
                });
            row.item_count += 1;
            row.total += summary.total;
            row.paid += summary.paid;
            row.remaining += summary.remaining;

            total += summary.total;
            paid += summary.paid;

            match summary.status {
                PaymentStatus::NotPaid => not_paid_count += 1,
                PaymentStatus::PartiallyPaid => partially_paid_count += 1,
                PaymentStatus::Paid => paid_count += 1,
            }
        }

        let mut categories: Vec<CategoryRow> = by_category.into_values().collect();
        categories.sort_by(|a, b| {
            b.remaining
                .partial_cmp(&a.remaining)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        Ok(Self {
            display_currency,
            categories,
            total,
            paid,
            remaining: (total - paid).max(0.0),
            not_paid_count,
            partially_paid_count,
            paid_count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::RelocatePaths;
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

    fn cost(name: &str, category: CostCategory, unit_value: f64) -> CreateCostInput {
        CreateCostInput {
            name: name.to_string(),
            description: None,
            category,
            currency: Currency::Eur,
            quantity: 1,
            unit_value,
            tax: None,
            fee: None,
            delivery_fee: None,
        }
    }

    #[test]
    fn test_report_groups_by_category() {
        let (_temp_dir, storage) = create_test_storage();
        let service = CostService::new(&storage);

        let flights = service
            .create(cost("Flights", CostCategory::Travel, 1000.0))
            .unwrap();
        service
            .create(cost("Hotel", CostCategory::Travel, 400.0))
            .unwrap();
        service
            .create(cost("Visa fee", CostCategory::Visa, 180.0))
            .unwrap();

        service
            .add_payment(
                flights.id,
                PaymentInput {
                    amount: 1000.0,
                    currency: None,
                    date: NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
                    description: None,
                    receipt: None,
                },
            )
            .unwrap();

        let report =
            CostSummaryReport::generate(&storage, Currency::Eur, &ExchangeRateTable::empty())
                .unwrap();

        assert_eq!(report.total, 1580.0);
        assert_eq!(report.paid, 1000.0);
        assert_eq!(report.remaining, 580.0);
        assert_eq!(report.paid_count, 1);
        assert_eq!(report.not_paid_count, 2);
        assert_eq!(report.partially_paid_count, 0);

        assert_eq!(report.categories.len(), 2);
        // Travel has the larger remaining balance, so it sorts first
        assert_eq!(report.categories[0].category, CostCategory::Travel);
        assert_eq!(report.categories[0].item_count, 2);
        assert_eq!(report.categories[0].remaining, 400.0);
        assert_eq!(report.categories[1].remaining, 180.0);
    }

    #[test]
    fn test_report_converts_to_display_currency() {
        let (_temp_dir, storage) = create_test_storage();
        let service = CostService::new(&storage);

        let mut input = cost("Shipping quote", CostCategory::Shipping, 100.0);
        input.currency = Currency::Usd;
        service.create(input).unwrap();

        let rates = ExchangeRateTable::from_rates([(Currency::Usd, 2.0)]);
        let report = CostSummaryReport::generate(&storage, Currency::Eur, &rates).unwrap();

        // 100 USD at 2 USD per EUR is 50 EUR
        assert!((report.total - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_plan() {
        let (_temp_dir, storage) = create_test_storage();

        let report =
            CostSummaryReport::generate(&storage, Currency::Eur, &ExchangeRateTable::empty())
                .unwrap();

        assert!(report.categories.is_empty());
        assert_eq!(report.total, 0.0);
        assert_eq!(report.remaining, 0.0);
    }
}
