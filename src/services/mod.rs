//! Business logic services
//!
//! Services sit between the CLI and the repositories. Each one validates
//! input, applies the change, persists it, and writes an audit entry.

pub mod baggage;
pub mod costs;
pub mod documents;
pub mod family;
pub mod import;
pub mod rates;
pub mod tasks;

pub use baggage::{BaggageProgress, BaggageService};
pub use costs::{
    CostItemSummary, CostService, CreateCostInput, PaymentInput, UpdateCostInput,
    UpdatePaymentInput,
};
pub use documents::{DocumentProgress, DocumentService};
pub use family::FamilyService;
pub use import::{ColumnMapping, ImportOutcome, ImportService};
pub use rates::RateService;
pub use tasks::{TaskProgress, TaskService};
