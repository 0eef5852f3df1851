//! Exchange-rate snapshot and currency conversion
//!
//! Rates are quoted as "units of currency X per 1 EUR" (the pivot), the same
//! orientation the cached rate feed uses. Conversion is fail-soft: when the
//! snapshot lacks a usable rate, the original value is returned unconverted.
//! The table is a read-only snapshot; callers never observe a partial update.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::currency::Currency;

/// A snapshot of exchange rates relative to the pivot currency
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExchangeRateTable {
    /// Units of each currency per 1 unit of the pivot (EUR)
    #[serde(default)]
    rates: HashMap<Currency, f64>,

    /// When this snapshot was obtained from the rate feed
    #[serde(default)]
    pub fetched_at: Option<DateTime<Utc>>,
}

impl ExchangeRateTable {
    /// Create an empty table (every conversion degrades to a no-op)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a table from (currency, rate) pairs, stamped now
    pub fn from_rates(pairs: impl IntoIterator<Item = (Currency, f64)>) -> Self {
        Self {
            rates: pairs.into_iter().collect(),
            fetched_at: Some(Utc::now()),
        }
    }

    /// Set the rate for a currency (units per 1 EUR)
    pub fn set(&mut self, currency: Currency, rate: f64) {
        self.rates.insert(currency, rate);
    }

    /// Get the rate for a currency, if present and usable
    ///
    /// The pivot currency always has an implicit rate of 1.0. Rates that are
    /// non-finite or non-positive are treated as absent.
    pub fn rate(&self, currency: Currency) -> Option<f64> {
        if currency.is_pivot() {
            return Some(1.0);
        }
        match self.rates.get(&currency) {
            Some(&r) if r.is_finite() && r > 0.0 => Some(r),
            _ => None,
        }
    }

    /// Check whether the table has no stored rates
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// Convert a value between currencies through the pivot
    ///
    /// Returns `value` unchanged when `from == to` or when the snapshot lacks
    /// a usable rate for either non-pivot currency involved. Never returns
    /// NaN or infinity for finite input.
    pub fn convert(&self, value: f64, from: Currency, to: Currency) -> f64 {
        if from == to {
            return value;
        }

        let (from_rate, to_rate) = match (self.rate(from), self.rate(to)) {
            (Some(f), Some(t)) => (f, t),
            _ => return value,
        };

        // Into the pivot, then out of it. Rates are units-per-EUR, so the
        // first leg divides and the second multiplies.
        (value / from_rate) * to_rate
    }

    /// Age of the snapshot, if it carries a fetch timestamp
    pub fn age(&self) -> Option<chrono::Duration> {
        self.fetched_at.map(|t| Utc::now() - t)
    }
}
