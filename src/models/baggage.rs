//! Baggage checklist model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::BaggageItemId;

/// Category of a baggage item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BaggageCategory {
    Clothing,
    Electronics,
    Kitchen,
    Paperwork,
    #[default]
    Other,
}

impl fmt::Display for BaggageCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Clothing => write!(f, "Clothing"),
            Self::Electronics => write!(f, "Electronics"),
            Self::Kitchen => write!(f, "Kitchen"),
            Self::Paperwork => write!(f, "Paperwork"),
            Self::Other => write!(f, "Other"),
        }
    }
}

impl FromStr for BaggageCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "clothing" => Ok(Self::Clothing),
            "electronics" => Ok(Self::Electronics),
            "kitchen" => Ok(Self::Kitchen),
            "paperwork" => Ok(Self::Paperwork),
            "other" => Ok(Self::Other),
            other => Err(format!("Unknown baggage category: {}", other)),
        }
    }
}

/// One item on the baggage checklist
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaggageItem {
    /// Unique identifier
    pub id: BaggageItemId,

    /// Item name
    pub name: String,

    /// Category
    #[serde(default)]
    pub category: BaggageCategory,

    /// How many of this item
    pub quantity: u32,

    /// Whether the item has been packed
    #[serde(default)]
    pub packed: bool,

    /// When the record was created
    pub created_at: DateTime<Utc>,
}

impl BaggageItem {
    /// Create a new baggage item
    pub fn new(name: impl Into<String>, category: BaggageCategory, quantity: u32) -> Self {
        Self {
            id: BaggageItemId::new(),
            name: name.into(),
            category,
            quantity,
            packed: false,
            created_at: Utc::now(),
        }
    }

    /// Validate the item's user-editable fields
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Baggage item name must not be empty".to_string());
        }
        if self.quantity == 0 {
            return Err("Baggage item quantity must be at least 1".to_string());
        }
        Ok(())
    }
}

impl fmt::Display for BaggageItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = if self.packed { "x" } else { " " };
        write!(f, "[{}] {} ({}) x{}", mark, self.name, self.category, self.quantity)
    }
}
