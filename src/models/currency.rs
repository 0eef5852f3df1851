//! Currency enumeration
//!
//! The application supports three currencies. All cross-currency conversion
//! is routed through a pivot currency (EUR), matching how the cached
//! exchange-rate snapshot is quoted.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the supported currencies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Brazilian real
    Brl,
    /// United States dollar
    Usd,
    /// Euro (the pivot currency)
    #[default]
    Eur,
}

impl Currency {
    /// The pivot currency all conversions are routed through
    pub const PIVOT: Currency = Currency::Eur;

    /// All supported currencies
    pub const ALL: [Currency; 3] = [Currency::Brl, Currency::Usd, Currency::Eur];

    /// The ISO 4217 code
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Brl => "BRL",
            Self::Usd => "USD",
            Self::Eur => "EUR",
        }
    }

    /// The display symbol used when formatting amounts
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Brl => "R$",
            Self::Usd => "$",
            Self::Eur => "€",
        }
    }

    /// Check whether this currency is the pivot
    pub const fn is_pivot(&self) -> bool {
        matches!(self, Self::Eur)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Currency {
    type Err = CurrencyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "BRL" | "R$" => Ok(Self::Brl),
            "USD" => Ok(Self::Usd),
            "EUR" | "€" => Ok(Self::Eur),
            other => Err(CurrencyParseError(other.to_string())),
        }
    }
}

/// Error type for currency parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyParseError(pub String);

impl fmt::Display for CurrencyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown currency '{}' (expected BRL, USD, or EUR)",
            self.0
        )
    }
}

impl std::error::Error for CurrencyParseError {}
