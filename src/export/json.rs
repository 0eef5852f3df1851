//! JSON export functionality
//!
//! Exports the complete relocation plan to JSON with schema versioning.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{RelocateError, RelocateResult};
use crate::models::{BaggageItem, CostItem, Document, ExchangeRateTable, FamilyMember, Task};
use crate::storage::Storage;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full plan export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    /// Schema version for compatibility checking
    pub schema_version: String,
    /// Export timestamp
    pub exported_at: DateTime<Utc>,
    /// Application version that created the export
    pub app_version: String,
    /// All cost items, payments embedded
    pub costs: Vec<CostItem>,
    /// All planning tasks
    pub tasks: Vec<Task>,
    /// All document records
    pub documents: Vec<Document>,
    /// Family roster
    pub family: Vec<FamilyMember>,
    /// Baggage checklist
    pub baggage: Vec<BaggageItem>,
    /// Exchange-rate snapshot at export time
    pub rates: ExchangeRateTable,
}

impl FullExport {
    /// Build an export from current storage contents
    pub fn from_storage(storage: &Storage) -> RelocateResult<Self> {
        Ok(Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            costs: storage.costs.get_all()?,
            tasks: storage.tasks.get_all()?,
            documents: storage.documents.get_all()?,
            family: storage.family.get_all()?,
            baggage: storage.baggage.get_all()?,
            rates: storage.rates.snapshot()?,
        })
    }
}

/// Export the full plan to pretty-printed JSON
pub fn export_full_json<W: Write>(storage: &Storage, writer: &mut W) -> RelocateResult<()> {
    let export = FullExport::from_storage(storage)?;
    serde_json::to_writer_pretty(writer, &export)
        .map_err(|e| RelocateError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::RelocatePaths;
    use crate::models::{CostCategory, Currency};
    use crate::services::{CostService, CreateCostInput, TaskService};
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = RelocatePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_export_round_trips() {
        let (_temp_dir, storage) = create_test_storage();
        CostService::new(&storage)
            .create(CreateCostInput {
                name: "Flights".to_string(),
                description: None,
                category: CostCategory::Travel,
                currency: Currency::Eur,
                quantity: 1,
                unit_value: 900.0,
                tax: None,
                fee: None,
                delivery_fee: None,
            })
            .unwrap();
        TaskService::new(&storage).create("Book movers", None, None).unwrap();

        let mut buf = Vec::new();
        export_full_json(&storage, &mut buf).unwrap();

        let parsed: FullExport = serde_json::from_slice(&buf).unwrap();
        assert_eq!(parsed.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(parsed.costs.len(), 1);
        assert_eq!(parsed.tasks.len(), 1);
        assert_eq!(parsed.costs[0].name, "Flights");
    }
}
