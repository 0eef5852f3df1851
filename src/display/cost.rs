//! Cost display formatting
//!
//! Formats cost items, payments, and the plan summary for terminal output.
//! All amounts are rendered in the display currency supplied by the caller.

use crate::display::money::format_currency;
use crate::models::{CostItem, Currency, ExchangeRateTable, PaymentStatus};
use crate::reports::CostSummaryReport;
use crate::services::{CostItemSummary, CostService};
use crate::storage::Storage;

/// Short badge for a payment status
pub fn status_badge(status: PaymentStatus) -> &'static str {
    match status {
        PaymentStatus::NotPaid => "[ ]",
        PaymentStatus::PartiallyPaid => "[~]",
        PaymentStatus::Paid => "[x]",
    }
}

/// Format the cost items as a table
pub fn format_cost_list(
    storage: &Storage,
    items: &[CostItem],
    display: Currency,
    rates: &ExchangeRateTable,
) -> String {
    if items.is_empty() {
        return "No cost items found.".to_string();
    }

    let cost_service = CostService::new(storage);

    let name_width = items
        .iter()
        .map(|i| i.name.len())
        .max()
        .unwrap_or(4)
        .max(4);
    let category_width = items
        .iter()
        .map(|i| i.category.to_string().len())
        .max()
        .unwrap_or(8)
        .max(8);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<5}  {:<name_width$}  {:<category_width$}  {:>14}  {:>14}  {:>14}  {}\n",
        "", "Name", "Category", "Total", "Paid", "Remaining", "ID",
    ));
    output.push_str(&format!(
        "{:-<5}  {:-<name_width$}  {:-<category_width$}  {:->14}  {:->14}  {:->14}  {:-<12}\n",
        "", "", "", "", "", "", "",
    ));

    for item in items {
        let summary = cost_service.summarize(item, display, rates);
        output.push_str(&format!(
            "{:<5}  {:<name_width$}  {:<category_width$}  {:>14}  {:>14}  {:>14}  {}\n",
            status_badge(summary.status),
            item.name,
            item.category.to_string(),
            format_currency(summary.total, display),
            format_currency(summary.paid, display),
            format_currency(summary.remaining, display),
            item.id,
        ));
    }

    output
}

/// Format a single cost item with its payment history
pub fn format_cost_details(
    item: &CostItem,
    summary: &CostItemSummary,
    display: Currency,
) -> String {
    let mut output = String::new();

    output.push_str(&format!("Cost item: {}\n", item.name));
    output.push_str(&format!("ID:        {}\n", item.id));
    output.push_str(&format!("Category:  {}\n", item.category));
    if let Some(description) = &item.description {
        output.push_str(&format!("Notes:     {}\n", description));
    }
    output.push_str(&format!(
        "Price:     {} x {} = {}\n",
        item.quantity,
        format_currency(item.unit_value, item.currency),
        format_currency(item.subtotal(), item.currency),
    ));
    if item.surcharges() > 0.0 {
        output.push_str(&format!(
            "Extras:    {} (tax/fee/delivery)\n",
            format_currency(item.surcharges(), item.currency),
        ));
    }

    output.push('\n');
    output.push_str(&format!(
        "Total:     {}\n",
        format_currency(summary.total, display)
    ));
    output.push_str(&format!(
        "Paid:      {}\n",
        format_currency(summary.paid, display)
    ));
    output.push_str(&format!(
        "Remaining: {}\n",
        format_currency(summary.remaining, display)
    ));
    output.push_str(&format!("Status:    {}\n", summary.status));

    if !item.payments.is_empty() {
        output.push_str(&format!("\nPayments ({}):\n", item.payments.len()));
        for payment in &item.payments {
            let note = payment.description.as_deref().unwrap_or("");
            output.push_str(&format!(
                "  {}  {:>14}  {}  {}\n",
                payment.date,
                format_currency(payment.amount, payment.currency),
                payment.id,
                note,
            ));
        }
    }

    output
}

/// Format the plan-wide cost summary block
pub fn format_cost_summary(report: &CostSummaryReport) -> String {
    let display = report.display_currency;
    let mut output = String::new();

    output.push_str(&format!("Cost plan ({})\n", display.code()));
    output.push_str(&format!(
        "  Total:     {}\n",
        format_currency(report.total, display)
    ));
    output.push_str(&format!(
        "  Paid:      {}\n",
        format_currency(report.paid, display)
    ));
    output.push_str(&format!(
        "  Remaining: {}\n",
        format_currency(report.remaining, display)
    ));
    output.push_str(&format!(
        "  Items:     {} paid, {} partial, {} open\n",
        report.paid_count, report.partially_paid_count, report.not_paid_count,
    ));

    if !report.categories.is_empty() {
        output.push_str("\nBy category:\n");
        let category_width = report
            .categories
            .iter()
            .map(|r| r.category.to_string().len())
            .max()
            .unwrap_or(8)
            .max(8);
        for row in &report.categories {
            output.push_str(&format!(
                "  {:<category_width$}  {:>3} items  {:>14} total  {:>14} remaining\n",
                row.category.to_string(),
                row.item_count,
                format_currency(row.total, display),
                format_currency(row.remaining, display),
            ));
        }
    }

    output
}
