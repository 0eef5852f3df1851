//! Storage layer for RelocateCLI
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation, one repository per record collection.

pub mod baggage;
pub mod costs;
pub mod documents;
pub mod family;
pub mod file_io;
pub mod init;
pub mod rates;
pub mod tasks;

pub use baggage::BaggageRepository;
pub use costs::CostRepository;
pub use documents::DocumentRepository;
pub use family::FamilyRepository;
pub use file_io::{read_json, write_json_atomic};
pub use init::initialize_storage;
pub use rates::RateRepository;
pub use tasks::TaskRepository;

use serde::Serialize;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::paths::RelocatePaths;
use crate::error::RelocateError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: RelocatePaths,
    audit: AuditLogger,
    pub costs: CostRepository,
    pub tasks: TaskRepository,
    pub documents: DocumentRepository,
    pub family: FamilyRepository,
    pub baggage: BaggageRepository,
    pub rates: RateRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: RelocatePaths) -> Result<Self, RelocateError> {
        // Ensure directories exist
        paths.ensure_directories()?;

        Ok(Self {
            audit: AuditLogger::new(paths.audit_log()),
            costs: CostRepository::new(paths.costs_file()),
            tasks: TaskRepository::new(paths.tasks_file()),
            documents: DocumentRepository::new(paths.documents_file()),
            family: FamilyRepository::new(paths.family_file()),
            baggage: BaggageRepository::new(paths.baggage_file()),
            rates: RateRepository::new(paths.rates_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &RelocatePaths {
        &self.paths
    }

    /// Get the audit logger
    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Load all data from disk
    pub fn load_all(&self) -> Result<(), RelocateError> {
        self.costs.load()?;
        self.tasks.load()?;
        self.documents.load()?;
        self.family.load()?;
        self.baggage.load()?;
        self.rates.load()?;
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), RelocateError> {
        self.costs.save()?;
        self.tasks.save()?;
        self.documents.save()?;
        self.family.save()?;
        self.baggage.save()?;
        self.rates.save()?;
        Ok(())
    }

    /// Check if storage has been initialized (has a settings file)
    pub fn is_initialized(&self) -> bool {
        self.paths.settings_file().exists()
    }

    /// Record a create operation in the audit log
    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Result<(), RelocateError> {
        self.audit
            .log(&AuditEntry::create(entity_type, entity_id, entity_name, entity))
    }

    /// Record an update operation in the audit log
    pub fn log_update<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        before: &T,
        after: &T,
    ) -> Result<(), RelocateError> {
        self.audit.log(&AuditEntry::update(
            entity_type,
            entity_id,
            entity_name,
            before,
            after,
        ))
    }

    /// Record a delete operation in the audit log
    pub fn log_delete<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Result<(), RelocateError> {
        self.audit
            .log(&AuditEntry::delete(entity_type, entity_id, entity_name, entity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = RelocatePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        assert!(temp_dir.path().join("data").exists());
        assert!(temp_dir.path().join("backups").exists());
        assert!(!storage.is_initialized());
    }

    #[test]
    fn test_load_all_on_empty_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = RelocatePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        storage.load_all().unwrap();
        assert_eq!(storage.costs.count().unwrap(), 0);
        assert_eq!(storage.tasks.count().unwrap(), 0);
    }
}
