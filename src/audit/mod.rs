//! Audit logging system
//!
//! Every create/update/delete performed through the service layer is recorded
//! as an append-only JSONL entry, so the history of a plan can be inspected
//! after the fact.

pub mod entry;
pub mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
