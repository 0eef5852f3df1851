//! Exchange-rate snapshot storage
//!
//! The rate table is a single cached snapshot, not a keyed collection.
//! Readers always get a full clone of the table, so a concurrent update can
//! never expose a half-written snapshot.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::RelocateError;
use crate::models::{Currency, ExchangeRateTable};

use super::file_io::{read_json, write_json_atomic};

/// Repository for the cached exchange-rate snapshot
pub struct RateRepository {
    path: PathBuf,
    table: RwLock<ExchangeRateTable>,
}

impl RateRepository {
    /// Create a new rate repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            table: RwLock::new(ExchangeRateTable::default()),
        }
    }

    /// Load the snapshot from disk (empty table if the file is missing)
    pub fn load(&self) -> Result<(), RelocateError> {
        let loaded: ExchangeRateTable = read_json(&self.path)?;

        let mut table = self
            .table
            .write()
            .map_err(|e| RelocateError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *table = loaded;
        Ok(())
    }

    /// Save the snapshot to disk
    pub fn save(&self) -> Result<(), RelocateError> {
        let table = self
            .table
            .read()
            .map_err(|e| RelocateError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        write_json_atomic(&self.path, &*table)
    }

    /// Get a clone of the current snapshot
    pub fn snapshot(&self) -> Result<ExchangeRateTable, RelocateError> {
        let table = self
            .table
            .read()
            .map_err(|e| RelocateError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(table.clone())
    }

    /// Replace the whole snapshot
    pub fn set_table(&self, new_table: ExchangeRateTable) -> Result<(), RelocateError> {
        let mut table = self
            .table
            .write()
            .map_err(|e| RelocateError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *table = new_table;
        Ok(())
    }

    /// Set a single rate (units per 1 EUR), stamping the snapshot now
    pub fn set_rate(&self, currency: Currency, rate: f64) -> Result<(), RelocateError> {
        let mut table = self
            .table
            .write()
            .map_err(|e| RelocateError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        table.set(currency, rate);
        table.fetched_at = Some(chrono::Utc::now());
        Ok(())
    }
}
