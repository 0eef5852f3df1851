//! Cost item and payment models
//!
//! A cost item is one budgeted or incurred expense, denominated in its home
//! currency, with an owned list of partial payments. Payments carry their own
//! currency, which may differ from the item's, so a EUR-denominated cost can
//! be paid partly in BRL and partly in USD. All derived amounts (total cost,
//! total paid, payment status) are computed in a caller-supplied target
//! currency against an exchange-rate snapshot.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::currency::Currency;
use super::ids::{CostItemId, PaymentId};
use super::rates::ExchangeRateTable;

/// Tolerance used when comparing paid against owed amounts
///
/// One cent in the target currency's minor unit; absorbs floating-point
/// rounding noise from currency conversion chains.
pub const PAYMENT_TOLERANCE: f64 = 0.01;

/// Expense category for a cost item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CostCategory {
    Visa,
    Travel,
    Housing,
    Shipping,
    Documents,
    Health,
    #[default]
    Other,
}

impl CostCategory {
    /// All categories, in display order
    pub const ALL: [CostCategory; 7] = [
        CostCategory::Visa,
        CostCategory::Travel,
        CostCategory::Housing,
        CostCategory::Shipping,
        CostCategory::Documents,
        CostCategory::Health,
        CostCategory::Other,
    ];
}

impl fmt::Display for CostCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Visa => write!(f, "Visa"),
            Self::Travel => write!(f, "Travel"),
            Self::Housing => write!(f, "Housing"),
            Self::Shipping => write!(f, "Shipping"),
            Self::Documents => write!(f, "Documents"),
            Self::Health => write!(f, "Health"),
            Self::Other => write!(f, "Other"),
        }
    }
}

impl std::str::FromStr for CostCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "visa" => Ok(Self::Visa),
            "travel" => Ok(Self::Travel),
            "housing" => Ok(Self::Housing),
            "shipping" => Ok(Self::Shipping),
            "documents" => Ok(Self::Documents),
            "health" => Ok(Self::Health),
            "other" => Ok(Self::Other),
            other => Err(format!("Unknown cost category: {}", other)),
        }
    }
}

/// Derived payment status of a cost item
///
/// Never stored; always recomputed from the item's total and aggregated paid
/// amount in a target display currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    NotPaid,
    PartiallyPaid,
    Paid,
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotPaid => write!(f, "Not paid"),
            Self::PartiallyPaid => write!(f, "Partially paid"),
            Self::Paid => write!(f, "Paid"),
        }
    }
}

/// One partial payment against a cost item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    /// Unique identifier
    pub id: PaymentId,

    /// Amount paid, in this payment's own currency
    pub amount: f64,

    /// Currency of the payment (may differ from the parent item's currency)
    pub currency: Currency,

    /// Date the payment was made
    pub date: NaiveDate,

    /// Optional free-text description
    pub description: Option<String>,

    /// Optional receipt reference (opaque string or URL)
    pub receipt: Option<String>,

    /// When the payment record was created
    pub created_at: DateTime<Utc>,
}

impl Payment {
    /// Create a new payment
    pub fn new(amount: f64, currency: Currency, date: NaiveDate) -> Self {
        Self {
            id: PaymentId::new(),
            amount,
            currency,
            date,
            description: None,
            receipt: None,
            created_at: Utc::now(),
        }
    }
}

/// Stored form of a payment, where the currency may be absent
///
/// Legacy records omit the payment currency; it is coalesced to the parent
/// item's currency at load time.
#[derive(Debug, Clone, Deserialize)]
struct StoredPayment {
    id: PaymentId,
    amount: f64,
    currency: Option<Currency>,
    date: NaiveDate,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    receipt: Option<String>,
    created_at: DateTime<Utc>,
}

/// One budgeted or incurred expense
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "StoredCostItem")]
pub struct CostItem {
    /// Unique identifier
    pub id: CostItemId,

    /// Short name (e.g., "Flight tickets")
    pub name: String,

    /// Optional longer description
    pub description: Option<String>,

    /// Expense category
    #[serde(default)]
    pub category: CostCategory,

    /// The item's home currency: the one its price fields are denominated in
    pub currency: Currency,

    /// Number of units (positive)
    pub quantity: u32,

    /// Price per unit in the home currency (positive)
    pub unit_value: f64,

    /// Optional tax surcharge
    pub tax: Option<f64>,

    /// Optional fee surcharge
    pub fee: Option<f64>,

    /// Optional delivery surcharge
    pub delivery_fee: Option<f64>,

    /// Partial payments against this item, in insertion order
    #[serde(default)]
    pub payments: Vec<Payment>,

    /// When the item was created
    pub created_at: DateTime<Utc>,
}

/// Stored form of a cost item, used to coalesce legacy payment records
#[derive(Debug, Clone, Deserialize)]
struct StoredCostItem {
    id: CostItemId,
    name: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    category: CostCategory,
    currency: Currency,
    quantity: u32,
    unit_value: f64,
    #[serde(default)]
    tax: Option<f64>,
    #[serde(default)]
    fee: Option<f64>,
    #[serde(default)]
    delivery_fee: Option<f64>,
    #[serde(default)]
    payments: Vec<StoredPayment>,
    created_at: DateTime<Utc>,
}

impl From<StoredCostItem> for CostItem {
    fn from(stored: StoredCostItem) -> Self {
        let home = stored.currency;
        Self {
            id: stored.id,
            name: stored.name,
            description: stored.description,
            category: stored.category,
            currency: home,
            quantity: stored.quantity,
            unit_value: stored.unit_value,
            tax: stored.tax,
            fee: stored.fee,
            delivery_fee: stored.delivery_fee,
            payments: stored
                .payments
                .into_iter()
                .map(|p| Payment {
                    id: p.id,
                    amount: p.amount,
                    currency: p.currency.unwrap_or(home),
                    date: p.date,
                    description: p.description,
                    receipt: p.receipt,
                    created_at: p.created_at,
                })
                .collect(),
            created_at: stored.created_at,
        }
    }
}

/// Normalize a surcharge field: absent or non-finite values count as zero
fn surcharge_or_zero(value: Option<f64>) -> f64 {
    match value {
        Some(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

impl CostItem {
    /// Create a new cost item
    pub fn new(
        name: impl Into<String>,
        category: CostCategory,
        currency: Currency,
        quantity: u32,
        unit_value: f64,
    ) -> Self {
        Self {
            id: CostItemId::new(),
            name: name.into(),
            description: None,
            category,
            currency,
            quantity,
            unit_value,
            tax: None,
            fee: None,
            delivery_fee: None,
            payments: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Subtotal in the home currency: quantity x unit value
    pub fn subtotal(&self) -> f64 {
        f64::from(self.quantity) * self.unit_value
    }

    /// Sum of the surcharge fields, treating absent or malformed values as 0
    pub fn surcharges(&self) -> f64 {
        surcharge_or_zero(self.tax)
            + surcharge_or_zero(self.fee)
            + surcharge_or_zero(self.delivery_fee)
    }

    /// Total cost (subtotal plus surcharges) expressed in the target currency
    pub fn total_cost(&self, target: Currency, rates: &ExchangeRateTable) -> f64 {
        rates.convert(self.subtotal() + self.surcharges(), self.currency, target)
    }

    /// Total paid, in the target currency
    ///
    /// Each payment converts from its own currency independently before
    /// summing; payments are not assumed to share the item's home currency.
    pub fn total_paid(&self, target: Currency, rates: &ExchangeRateTable) -> f64 {
        self.payments
            .iter()
            .map(|p| rates.convert(p.amount, p.currency, target))
            .sum()
    }

    /// Remaining balance in the target currency, floored at zero
    pub fn balance_due(&self, target: Currency, rates: &ExchangeRateTable) -> f64 {
        (self.total_cost(target, rates) - self.total_paid(target, rates)).max(0.0)
    }

    /// Derive the payment status in the target currency
    pub fn payment_status(&self, target: Currency, rates: &ExchangeRateTable) -> PaymentStatus {
        let total = self.total_cost(target, rates);
        let paid = self.total_paid(target, rates);

        if paid == 0.0 || (paid < PAYMENT_TOLERANCE && total > 0.0) {
            PaymentStatus::NotPaid
        } else if paid >= total || (paid - total).abs() < PAYMENT_TOLERANCE {
            PaymentStatus::Paid
        } else {
            PaymentStatus::PartiallyPaid
        }
    }

    /// Append a payment
    pub fn add_payment(&mut self, payment: Payment) {
        self.payments.push(payment);
    }

    /// Get a payment by ID
    pub fn payment(&self, id: PaymentId) -> Option<&Payment> {
        self.payments.iter().find(|p| p.id == id)
    }

    /// Get a mutable payment by ID
    pub fn payment_mut(&mut self, id: PaymentId) -> Option<&mut Payment> {
        self.payments.iter_mut().find(|p| p.id == id)
    }

    /// Remove a payment by ID, returning whether it existed
    pub fn remove_payment(&mut self, id: PaymentId) -> bool {
        let before = self.payments.len();
        self.payments.retain(|p| p.id != id);
        self.payments.len() != before
    }

    /// Validate the item's user-editable fields
    pub fn validate(&self) -> Result<(), CostValidationError> {
        if self.name.trim().is_empty() {
            return Err(CostValidationError::EmptyName);
        }
        if self.quantity == 0 {
            return Err(CostValidationError::ZeroQuantity);
        }
        if !self.unit_value.is_finite() || self.unit_value <= 0.0 {
            return Err(CostValidationError::NonPositiveUnitValue(self.unit_value));
        }
        for (field, value) in [
            ("tax", self.tax),
            ("fee", self.fee),
            ("delivery fee", self.delivery_fee),
        ] {
            if let Some(v) = value {
                if v.is_finite() && v < 0.0 {
                    return Err(CostValidationError::NegativeSurcharge(field, v));
                }
            }
        }
        for payment in &self.payments {
            if !payment.amount.is_finite() || payment.amount <= 0.0 {
                return Err(CostValidationError::NonPositivePaymentAmount(
                    payment.amount,
                ));
            }
        }
        Ok(())
    }
}

impl fmt::Display for CostItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] {} x {:.2} {}",
            self.name, self.category, self.quantity, self.unit_value, self.currency
        )
    }
}

/// Validation errors for cost items
#[derive(Debug, Clone, PartialEq)]
pub enum CostValidationError {
    EmptyName,
    ZeroQuantity,
    NonPositiveUnitValue(f64),
    NegativeSurcharge(&'static str, f64),
    NonPositivePaymentAmount(f64),
}

impl fmt::Display for CostValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Cost item name must not be empty"),
            Self::ZeroQuantity => write!(f, "Quantity must be at least 1"),
            Self::NonPositiveUnitValue(v) => {
                write!(f, "Unit value must be a positive number, got {}", v)
            }
            Self::NegativeSurcharge(field, v) => {
                write!(f, "Surcharge '{}' must not be negative, got {}", field, v)
            }
            Self::NonPositivePaymentAmount(v) => {
                write!(f, "Payment amount must be a positive number, got {}", v)
            }
        }
    }
}

impl std::error::Error for CostValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
    }

    fn sample_rates() -> ExchangeRateTable {
        ExchangeRateTable::from_rates([(Currency::Usd, 1.086), (Currency::Brl, 5.4)])
    }

    #[test]
    fn test_surcharge_aggregation() {
        let mut item = CostItem::new("Apostilles", CostCategory::Documents, Currency::Eur, 3, 10.0);
        item.tax = Some(5.0);
        item.fee = Some(2.0);
        item.delivery_fee = None;

        // 3 x 10 + 5 + 2 + 0, home currency == target, empty table
        let total = item.total_cost(Currency::Eur, &ExchangeRateTable::empty());
        assert_eq!(total, 37.0);
    }

    #[test]
    fn test_malformed_surcharge_normalized_to_zero() {
        let mut item = CostItem::new("Visa fees", CostCategory::Visa, Currency::Eur, 1, 100.0);
        item.tax = Some(f64::NAN);
        item.fee = Some(f64::INFINITY);

        let total = item.total_cost(Currency::Eur, &ExchangeRateTable::empty());
        assert_eq!(total, 100.0);
    }

    #[test]
    fn test_multi_currency_payment_summation() {
        let mut item = CostItem::new("Deposit", CostCategory::Housing, Currency::Eur, 1, 100.0);
        item.add_payment(Payment::new(50.0, Currency::Eur, date()));
        item.add_payment(Payment::new(54.30, Currency::Usd, date()));

        let paid = item.total_paid(Currency::Eur, &sample_rates());
        // 50 + 54.30 / 1.086 ~= 100.0
        assert!((paid - 100.0).abs() < 0.01);
    }

    #[test]
    fn test_total_cost_converted_to_target() {
        let item = CostItem::new("Shipping", CostCategory::Shipping, Currency::Eur, 1, 100.0);
        let brl = item.total_cost(Currency::Brl, &sample_rates());
        assert!((brl - 540.0).abs() < 1e-9);
    }

    #[test]
    fn test_status_exact_match_is_paid() {
        let mut item = CostItem::new("Fee", CostCategory::Visa, Currency::Eur, 1, 100.0);
        item.add_payment(Payment::new(100.0, Currency::Eur, date()));
        assert_eq!(
            item.payment_status(Currency::Eur, &ExchangeRateTable::empty()),
            PaymentStatus::Paid
        );
    }

    #[test]
    fn test_status_within_tolerance_is_paid() {
        let mut item = CostItem::new("Fee", CostCategory::Visa, Currency::Eur, 1, 100.0);
        item.add_payment(Payment::new(99.995, Currency::Eur, date()));
        assert_eq!(
            item.payment_status(Currency::Eur, &ExchangeRateTable::empty()),
            PaymentStatus::Paid
        );
    }

    #[test]
    fn test_status_outside_tolerance_is_partial() {
        let mut item = CostItem::new("Fee", CostCategory::Visa, Currency::Eur, 1, 100.0);
        item.add_payment(Payment::new(99.98, Currency::Eur, date()));
        assert_eq!(
            item.payment_status(Currency::Eur, &ExchangeRateTable::empty()),
            PaymentStatus::PartiallyPaid
        );
    }

    #[test]
    fn test_status_zero_paid_is_not_paid() {
        let item = CostItem::new("Fee", CostCategory::Visa, Currency::Eur, 1, 100.0);
        assert_eq!(
            item.payment_status(Currency::Eur, &ExchangeRateTable::empty()),
            PaymentStatus::NotPaid
        );
    }

    #[test]
    fn test_status_zero_total_zero_paid_is_not_paid() {
        // Accepted default behavior for a free item with no payments
        let mut item = CostItem::new("Freebie", CostCategory::Other, Currency::Eur, 1, 1.0);
        item.unit_value = 0.0;
        assert_eq!(
            item.payment_status(Currency::Eur, &ExchangeRateTable::empty()),
            PaymentStatus::NotPaid
        );
    }

    #[test]
    fn test_overpayment_is_paid() {
        let mut item = CostItem::new("Fee", CostCategory::Visa, Currency::Eur, 1, 100.0);
        item.add_payment(Payment::new(120.0, Currency::Eur, date()));
        assert_eq!(
            item.payment_status(Currency::Eur, &ExchangeRateTable::empty()),
            PaymentStatus::Paid
        );
        assert_eq!(
            item.balance_due(Currency::Eur, &ExchangeRateTable::empty()),
            0.0
        );
    }

    #[test]
    fn test_payment_crud_on_item() {
        let mut item = CostItem::new("Fee", CostCategory::Visa, Currency::Eur, 1, 100.0);
        let payment = Payment::new(25.0, Currency::Eur, date());
        let pid = payment.id;

        item.add_payment(payment);
        assert!(item.payment(pid).is_some());

        item.payment_mut(pid).unwrap().amount = 30.0;
        assert_eq!(item.payment(pid).unwrap().amount, 30.0);

        assert!(item.remove_payment(pid));
        assert!(!item.remove_payment(pid));
        assert!(item.payments.is_empty());
    }

    #[test]
    fn test_validation() {
        let mut item = CostItem::new("Fee", CostCategory::Visa, Currency::Eur, 1, 100.0);
        assert!(item.validate().is_ok());

        item.quantity = 0;
        assert_eq!(item.validate(), Err(CostValidationError::ZeroQuantity));
        item.quantity = 1;

        item.unit_value = -5.0;
        assert!(matches!(
            item.validate(),
            Err(CostValidationError::NonPositiveUnitValue(_))
        ));
        item.unit_value = 100.0;

        item.tax = Some(-1.0);
        assert!(matches!(
            item.validate(),
            Err(CostValidationError::NegativeSurcharge("tax", _))
        ));
    }

    #[test]
    fn test_legacy_payment_without_currency_defaults_to_item_currency() {
        let json = r#"{
            "id": "550e8400-e29b-41d4-a716-446655440000",
            "name": "Moving boxes",
            "category": "shipping",
            "currency": "BRL",
            "quantity": 10,
            "unit_value": 12.5,
            "created_at": "2025-01-01T00:00:00Z",
            "payments": [
                {
                    "id": "650e8400-e29b-41d4-a716-446655440000",
                    "amount": 40.0,
                    "date": "2025-01-05",
                    "created_at": "2025-01-05T00:00:00Z"
                },
                {
                    "id": "750e8400-e29b-41d4-a716-446655440000",
                    "amount": 10.0,
                    "currency": "USD",
                    "date": "2025-01-06",
                    "created_at": "2025-01-06T00:00:00Z"
                }
            ]
        }"#;

        let item: CostItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.payments[0].currency, Currency::Brl);
        assert_eq!(item.payments[1].currency, Currency::Usd);
    }

    #[test]
    fn test_serialization_round_trip() {
        let mut item = CostItem::new("Fee", CostCategory::Visa, Currency::Usd, 2, 80.0);
        item.add_payment(Payment::new(40.0, Currency::Brl, date()));

        let json = serde_json::to_string(&item).unwrap();
        let loaded: CostItem = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded.id, item.id);
        assert_eq!(loaded.payments.len(), 1);
        assert_eq!(loaded.payments[0].currency, Currency::Brl);
    }
}
