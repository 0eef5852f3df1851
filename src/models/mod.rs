//! Core data models for RelocateCLI

pub mod baggage;
pub mod cost;
pub mod currency;
pub mod document;
pub mod family;
pub mod ids;
pub mod rates;
pub mod task;

pub use baggage::{BaggageCategory, BaggageItem};
pub use cost::{CostCategory, CostItem, CostValidationError, Payment, PaymentStatus, PAYMENT_TOLERANCE};
pub use currency::Currency;
pub use document::{Document, DocumentKind, DocumentStatus};
pub use family::{FamilyMember, Relationship};
pub use ids::{BaggageItemId, CostItemId, DocumentId, FamilyMemberId, PaymentId, TaskId};
pub use rates::ExchangeRateTable;
pub use task::{Task, TaskStatus};
