//! Cost service
//!
//! Business logic for cost items and their payments: validation, CRUD,
//! and per-item summaries in a caller-chosen display currency.

use chrono::NaiveDate;

use crate::audit::EntityType;
use crate::error::{RelocateError, RelocateResult};
use crate::models::{
    CostCategory, CostItem, CostItemId, Currency, ExchangeRateTable, Payment, PaymentId,
    PaymentStatus,
};
use crate::storage::Storage;

/// Input for creating a cost item
#[derive(Debug, Clone)]
pub struct CreateCostInput {
    pub name: String,
    pub description: Option<String>,
    pub category: CostCategory,
    pub currency: Currency,
    pub quantity: u32,
    pub unit_value: f64,
    pub tax: Option<f64>,
    pub fee: Option<f64>,
    pub delivery_fee: Option<f64>,
}

/// Partial update for a cost item; `None` fields are left unchanged
#[derive(Debug, Clone, Default)]
pub struct UpdateCostInput {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
    pub category: Option<CostCategory>,
    pub currency: Option<Currency>,
    pub quantity: Option<u32>,
    pub unit_value: Option<f64>,
    pub tax: Option<Option<f64>>,
    pub fee: Option<Option<f64>>,
    pub delivery_fee: Option<Option<f64>>,
}

/// Input for recording a payment against a cost item
#[derive(Debug, Clone)]
pub struct PaymentInput {
    pub amount: f64,
    /// Defaults to the item's home currency when absent
    pub currency: Option<Currency>,
    pub date: NaiveDate,
    pub description: Option<String>,
    pub receipt: Option<String>,
}

/// Partial update for a recorded payment; `None` fields are left unchanged
#[derive(Debug, Clone, Default)]
pub struct UpdatePaymentInput {
    pub amount: Option<f64>,
    pub currency: Option<Currency>,
    pub date: Option<NaiveDate>,
    pub description: Option<Option<String>>,
    pub receipt: Option<Option<String>>,
}

/// Derived amounts for one cost item in a target currency
#[derive(Debug, Clone)]
pub struct CostItemSummary {
    pub total: f64,
    pub paid: f64,
    pub remaining: f64,
    pub status: PaymentStatus,
}

/// Service for cost management
pub struct CostService<'a> {
    storage: &'a Storage,
}

impl<'a> CostService<'a> {
    /// Create a new cost service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a new cost item
    pub fn create(&self, input: CreateCostInput) -> RelocateResult<CostItem> {
        let mut item = CostItem::new(
            input.name,
            input.category,
            input.currency,
            input.quantity,
            input.unit_value,
        );
        item.description = input.description;
        item.tax = input.tax;
        item.fee = input.fee;
        item.delivery_fee = input.delivery_fee;

        item.validate()
            .map_err(|e| RelocateError::Validation(e.to_string()))?;

        self.storage.costs.upsert(item.clone())?;
        self.storage.costs.save()?;
        self.storage.log_create(
            EntityType::CostItem,
            item.id.to_string(),
            Some(item.name.clone()),
            &item,
        )?;

        Ok(item)
    }

    /// List cost items, optionally filtered by category
    pub fn list(&self, category: Option<CostCategory>) -> RelocateResult<Vec<CostItem>> {
        match category {
            Some(cat) => self.storage.costs.get_by_category(cat),
            None => self.storage.costs.get_all(),
        }
    }

    /// Get a cost item by ID
    pub fn get(&self, id: CostItemId) -> RelocateResult<CostItem> {
        self.storage
            .costs
            .get(id)?
            .ok_or_else(|| RelocateError::cost_not_found(id.to_string()))
    }

    /// Update a cost item's fields
    pub fn update(&self, id: CostItemId, input: UpdateCostInput) -> RelocateResult<CostItem> {
        let mut item = self.get(id)?;
        let before = item.clone();

        if let Some(name) = input.name {
            item.name = name;
        }
        if let Some(description) = input.description {
            item.description = description;
        }
        if let Some(category) = input.category {
            item.category = category;
        }
        if let Some(currency) = input.currency {
            item.currency = currency;
        }
        if let Some(quantity) = input.quantity {
            item.quantity = quantity;
        }
        if let Some(unit_value) = input.unit_value {
            item.unit_value = unit_value;
        }
        if let Some(tax) = input.tax {
            item.tax = tax;
        }
        if let Some(fee) = input.fee {
            item.fee = fee;
        }
        if let Some(delivery_fee) = input.delivery_fee {
            item.delivery_fee = delivery_fee;
        }

        item.validate()
            .map_err(|e| RelocateError::Validation(e.to_string()))?;

        self.storage.costs.upsert(item.clone())?;
        self.storage.costs.save()?;
        self.storage.log_update(
            EntityType::CostItem,
            item.id.to_string(),
            Some(item.name.clone()),
            &before,
            &item,
        )?;

        Ok(item)
    }

    /// Delete a cost item and its payments
    pub fn delete(&self, id: CostItemId) -> RelocateResult<()> {
        let item = self.get(id)?;

        self.storage.costs.delete(id)?;
        self.storage.costs.save()?;
        self.storage.log_delete(
            EntityType::CostItem,
            item.id.to_string(),
            Some(item.name.clone()),
            &item,
        )?;

        Ok(())
    }

    /// Record a payment against a cost item
    pub fn add_payment(&self, id: CostItemId, input: PaymentInput) -> RelocateResult<Payment> {
        let mut item = self.get(id)?;

        let currency = input.currency.unwrap_or(item.currency);
        let mut payment = Payment::new(input.amount, currency, input.date);
        payment.description = input.description;
        payment.receipt = input.receipt;

        item.add_payment(payment.clone());
        item.validate()
            .map_err(|e| RelocateError::Validation(e.to_string()))?;

        self.storage.costs.upsert(item.clone())?;
        self.storage.costs.save()?;
        self.storage.log_create(
            EntityType::Payment,
            payment.id.to_string(),
            Some(item.name.clone()),
            &payment,
        )?;

        Ok(payment)
    }

    /// Edit a recorded payment's fields
    pub fn edit_payment(
        &self,
        id: CostItemId,
        payment_id: PaymentId,
        input: UpdatePaymentInput,
    ) -> RelocateResult<Payment> {
        let mut item = self.get(id)?;

        let before = item
            .payment(payment_id)
            .cloned()
            .ok_or_else(|| RelocateError::payment_not_found(payment_id.to_string()))?;

        let mut payment = before.clone();
        if let Some(amount) = input.amount {
            payment.amount = amount;
        }
        if let Some(currency) = input.currency {
            payment.currency = currency;
        }
        if let Some(date) = input.date {
            payment.date = date;
        }
        if let Some(description) = input.description {
            payment.description = description;
        }
        if let Some(receipt) = input.receipt {
            payment.receipt = receipt;
        }

        if let Some(slot) = item.payment_mut(payment_id) {
            *slot = payment.clone();
        }
        item.validate()
            .map_err(|e| RelocateError::Validation(e.to_string()))?;

        self.storage.costs.upsert(item.clone())?;
        self.storage.costs.save()?;
        self.storage.log_update(
            EntityType::Payment,
            payment_id.to_string(),
            Some(item.name.clone()),
            &before,
            &payment,
        )?;

        Ok(payment)
    }

    /// Remove a payment from a cost item
    pub fn remove_payment(&self, id: CostItemId, payment_id: PaymentId) -> RelocateResult<()> {
        let mut item = self.get(id)?;

        let removed = item
            .payment(payment_id)
            .cloned()
            .ok_or_else(|| RelocateError::payment_not_found(payment_id.to_string()))?;
        item.remove_payment(payment_id);

        self.storage.costs.upsert(item.clone())?;
        self.storage.costs.save()?;
        self.storage.log_delete(
            EntityType::Payment,
            payment_id.to_string(),
            Some(item.name.clone()),
            &removed,
        )?;

        Ok(())
    }

    /// Compute the derived amounts for one item in the target currency
    pub fn summarize(
        &self,
        item: &CostItem,
        target: Currency,
        rates: &ExchangeRateTable,
    ) -> CostItemSummary {
        CostItemSummary {
            total: item.total_cost(target, rates),
            paid: item.total_paid(target, rates),
            remaining: item.balance_due(target, rates),
            status: item.payment_status(target, rates),
        }
    }
}
