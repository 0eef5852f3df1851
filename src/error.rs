//! Custom error types for RelocateCLI
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for RelocateCLI operations
#[derive(Error, Debug)]
pub enum RelocateError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Duplicate entity errors
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// Import errors
    #[error("Import error: {0}")]
    Import(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Backup errors
    #[error("Backup error: {0}")]
    Backup(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl RelocateError {
    /// Create a "not found" error for cost items
    pub fn cost_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Cost item",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for payments
    pub fn payment_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Payment",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for tasks
    pub fn task_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Task",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for documents
    pub fn document_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Document",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for family members
    pub fn family_member_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Family member",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for baggage items
    pub fn baggage_item_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Baggage item",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for RelocateError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for RelocateError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for RelocateCLI operations
pub type RelocateResult<T> = Result<T, RelocateError>;
