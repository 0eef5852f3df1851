//! Cost CLI commands
//!
//! Implements CLI commands for cost items and their payments.

use chrono::{NaiveDate, Utc};
use clap::Subcommand;

use crate::display::cost::{format_cost_details, format_cost_list};
use crate::error::{RelocateError, RelocateResult};
use crate::models::{CostCategory, CostItem, Currency, PaymentId};
use crate::services::{
    CostService, CreateCostInput, PaymentInput, UpdateCostInput, UpdatePaymentInput,
};
use crate::storage::Storage;

/// Cost subcommands
#[derive(Subcommand)]
pub enum CostCommands {
    /// Add a new cost item
    Add {
        /// Item name
        name: String,
        /// Price per unit
        #[arg(short = 'p', long)]
        unit_value: f64,
        /// Quantity
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,
        /// Category (visa, travel, housing, shipping, documents, health, other)
        #[arg(short, long, default_value = "other")]
        category: String,
        /// Currency the item is priced in (BRL, USD, EUR)
        #[arg(long)]
        currency: Option<Currency>,
        /// Tax surcharge
        #[arg(long)]
        tax: Option<f64>,
        /// Fee surcharge
        #[arg(long)]
        fee: Option<f64>,
        /// Delivery surcharge
        #[arg(long)]
        delivery: Option<f64>,
        /// Free-form notes
        #[arg(short, long)]
        notes: Option<String>,
    },
    /// List cost items
    List {
        /// Only show one category
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Show a cost item with its payments
    Show {
        /// Item name or ID
        item: String,
    },
    /// Edit a cost item
    Edit {
        /// Item name or ID
        item: String,
        /// New name
        #[arg(long)]
        name: Option<String>,
        /// New price per unit
        #[arg(short = 'p', long)]
        unit_value: Option<f64>,
        /// New quantity
        #[arg(short, long)]
        quantity: Option<u32>,
        /// New category
        #[arg(short, long)]
        category: Option<String>,
        /// New currency
        #[arg(long)]
        currency: Option<Currency>,
        /// New tax surcharge (0 to clear)
        #[arg(long)]
        tax: Option<f64>,
        /// New fee surcharge (0 to clear)
        #[arg(long)]
        fee: Option<f64>,
        /// New delivery surcharge (0 to clear)
        #[arg(long)]
        delivery: Option<f64>,
    },
    /// Delete a cost item and its payments
    Delete {
        /// Item name or ID
        item: String,
    },
    /// Record a payment against a cost item
    Pay {
        /// Item name or ID
        item: String,
        /// Amount paid
        amount: f64,
        /// Currency the payment was made in (defaults to the item's)
        #[arg(long)]
        currency: Option<Currency>,
        /// Payment date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<NaiveDate>,
        /// Note on the payment
        #[arg(short, long)]
        notes: Option<String>,
        /// Receipt reference
        #[arg(long)]
        receipt: Option<String>,
    },
    /// List a cost item's payments
    Payments {
        /// Item name or ID
        item: String,
    },
    /// Edit a recorded payment
    EditPayment {
        /// Item name or ID
        item: String,
        /// Payment ID
        payment: String,
        /// New amount
        #[arg(long)]
        amount: Option<f64>,
        /// New currency (BRL, USD, EUR)
        #[arg(long)]
        currency: Option<Currency>,
        /// New payment date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<NaiveDate>,
        /// New note (empty string to clear)
        #[arg(short, long)]
        notes: Option<String>,
        /// New receipt reference (empty string to clear)
        #[arg(long)]
        receipt: Option<String>,
    },
    /// Remove a recorded payment
    Unpay {
        /// Item name or ID
        item: String,
        /// Payment ID
        payment: String,
    },
}

/// Parse a category argument with a helpful error
fn parse_category(raw: &str) -> RelocateResult<CostCategory> {
    raw.parse().map_err(RelocateError::Validation)
}

/// Handle a cost command
///
/// `display` is the currency derived amounts are shown in.
pub fn handle_cost_command(
    storage: &Storage,
    cmd: CostCommands,
    display: Currency,
) -> RelocateResult<()> {
    let service = CostService::new(storage);
    let rates = storage.rates.snapshot()?;

    match cmd {
        CostCommands::Add {
            name,
            unit_value,
            quantity,
            category,
            currency,
            tax,
            fee,
            delivery,
            notes,
        } => {
            let item = service.create(CreateCostInput {
                name,
                description: notes,
                category: parse_category(&category)?,
                currency: currency.unwrap_or(display),
                quantity,
                unit_value,
                tax,
                fee,
                delivery_fee: delivery,
            })?;

            println!("Added cost item: {}", item.name);
            println!("  Category: {}", item.category);
            println!(
                "  Price: {} x {:.2} {}",
                item.quantity, item.unit_value, item.currency
            );
            println!("  ID: {}", item.id);
        }

        CostCommands::List { category } => {
            let category = category.as_deref().map(parse_category).transpose()?;
            let items = service.list(category)?;
            print!("{}", format_cost_list(storage, &items, display, &rates));
        }

        CostCommands::Show { item } => {
            let found = resolve_cost(&service, &item)?;
            let summary = service.summarize(&found, display, &rates);
            print!("{}", format_cost_details(&found, &summary, display));
        }

        CostCommands::Edit {
            item,
            name,
            unit_value,
            quantity,
            category,
            currency,
            tax,
            fee,
            delivery,
        } => {
            let found = resolve_cost(&service, &item)?;
            let category = category.as_deref().map(parse_category).transpose()?;

            // A surcharge of 0 clears the field
            let clearable = |v: Option<f64>| v.map(|x| if x == 0.0 { None } else { Some(x) });

            let updated = service.update(
                found.id,
                UpdateCostInput {
                    name,
                    description: None,
                    category,
                    currency,
                    quantity,
                    unit_value,
                    tax: clearable(tax),
                    fee: clearable(fee),
                    delivery_fee: clearable(delivery),
                },
            )?;
            println!("Updated cost item: {}", updated.name);
        }

        CostCommands::Delete { item } => {
            let found = resolve_cost(&service, &item)?;
            service.delete(found.id)?;
            println!("Deleted cost item: {}", found.name);
        }

        CostCommands::Pay {
            item,
            amount,
            currency,
            date,
            notes,
            receipt,
        } => {
            let found = resolve_cost(&service, &item)?;
            let payment = service.add_payment(
                found.id,
                PaymentInput {
                    amount,
                    currency,
                    date: date.unwrap_or_else(|| Utc::now().date_naive()),
                    description: notes,
                    receipt,
                },
            )?;

            println!(
                "Recorded payment of {:.2} {} against {}",
                payment.amount, payment.currency, found.name
            );

            let refreshed = service.get(found.id)?;
            let summary = service.summarize(&refreshed, display, &rates);
            println!(
                "  Paid {:.2} of {:.2} {} ({})",
                summary.paid, summary.total, display, summary.status
            );
        }

        CostCommands::Payments { item } => {
            let found = resolve_cost(&service, &item)?;
            if found.payments.is_empty() {
                println!("No payments recorded for {}.", found.name);
            } else {
                for payment in &found.payments {
                    let note = payment.description.as_deref().unwrap_or("");
                    println!(
                        "{}  {:>12.2} {}  {}  {}",
                        payment.date, payment.amount, payment.currency, payment.id, note
                    );
                }
            }
        }

        CostCommands::EditPayment {
            item,
            payment,
            amount,
            currency,
            date,
            notes,
            receipt,
        } => {
            let found = resolve_cost(&service, &item)?;
            let payment_id = resolve_payment(&found, &payment)?;

            // An empty string clears the field
            let clearable =
                |v: Option<String>| v.map(|s| if s.is_empty() { None } else { Some(s) });

            let updated = service.edit_payment(
                found.id,
                payment_id,
                UpdatePaymentInput {
                    amount,
                    currency,
                    date,
                    description: clearable(notes),
                    receipt: clearable(receipt),
                },
            )?;
            println!(
                "Updated payment on {}: {:.2} {} ({})",
                found.name, updated.amount, updated.currency, updated.date
            );
        }

        CostCommands::Unpay { item, payment } => {
            let found = resolve_cost(&service, &item)?;
            let payment_id = resolve_payment(&found, &payment)?;

            service.remove_payment(found.id, payment_id)?;
            println!("Removed payment {} from {}", payment, found.name);
        }
    }

    Ok(())
}

/// Resolve a payment on an item by full UUID or short display ID
fn resolve_payment(item: &CostItem, input: &str) -> RelocateResult<PaymentId> {
    item.payments
        .iter()
        .find(|p| p.id.to_string() == input || p.id.as_uuid().to_string() == input)
        .map(|p| p.id)
        .ok_or_else(|| RelocateError::payment_not_found(input))
}

/// Resolve a cost item by full UUID, short display ID, or name
fn resolve_cost(service: &CostService, input: &str) -> RelocateResult<CostItem> {
    if let Ok(id) = input.parse() {
        if let Ok(item) = service.get(id) {
            return Ok(item);
        }
    }

    let items = service.list(None)?;
    items
        .into_iter()
        .find(|i| i.id.to_string() == input || i.name.eq_ignore_ascii_case(input))
        .ok_or_else(|| RelocateError::cost_not_found(input))
}
