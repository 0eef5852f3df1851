//! Backup restoration for RelocateCLI
//!
//! Restores the data files from a backup archive.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};

use crate::config::paths::RelocatePaths;
use crate::error::{RelocateError, RelocateResult};
use crate::storage::file_io::write_json_atomic;

use super::manager::BackupArchive;

/// Handles restoring from backups
pub struct RestoreManager {
    paths: RelocatePaths,
}

impl RestoreManager {
    /// Create a new RestoreManager
    pub fn new(paths: RelocatePaths) -> Self {
        Self { paths }
    }

    /// Restore data from a backup file
    ///
    /// Overwrites all current data with the backup contents. Create a fresh
    /// backup before restoring.
    pub fn restore_from_file(&self, backup_path: &Path) -> RelocateResult<RestoreResult> {
        let contents = fs::read_to_string(backup_path)
            .map_err(|e| RelocateError::Io(format!("Failed to read backup file: {}", e)))?;

        let archive: BackupArchive = serde_json::from_str(&contents)
            .map_err(|e| RelocateError::Json(format!("Failed to parse backup file: {}", e)))?;

        self.restore_from_archive(&archive)
    }

    /// Restore data from a parsed backup archive
    pub fn restore_from_archive(&self, archive: &BackupArchive) -> RelocateResult<RestoreResult> {
        self.paths.ensure_directories()?;

        let mut result = RestoreResult {
            schema_version: archive.schema_version,
            backup_date: archive.created_at,
            files_restored: Vec::new(),
        };

        let sections = [
            ("costs", &archive.costs, self.paths.costs_file()),
            ("tasks", &archive.tasks, self.paths.tasks_file()),
            ("documents", &archive.documents, self.paths.documents_file()),
            ("family", &archive.family, self.paths.family_file()),
            ("baggage", &archive.baggage, self.paths.baggage_file()),
            ("rates", &archive.rates, self.paths.rates_file()),
        ];

        for (name, value, path) in sections {
            if value.is_null() {
                continue;
            }
            write_json_atomic(&path, value)?;
            result.files_restored.push(name);
        }

        Ok(result)
    }

    /// Validate a backup file without restoring it
    pub fn validate_backup(&self, backup_path: &Path) -> RelocateResult<ValidationResult> {
        let contents = fs::read_to_string(backup_path)
            .map_err(|e| RelocateError::Io(format!("Failed to read backup file: {}", e)))?;

        let archive: BackupArchive = serde_json::from_str(&contents)
            .map_err(|e| RelocateError::Json(format!("Failed to parse backup file: {}", e)))?;

        Ok(ValidationResult {
            schema_version: archive.schema_version,
            backup_date: archive.created_at,
            has_costs: archive.costs.is_object(),
            has_tasks: archive.tasks.is_object(),
            has_documents: archive.documents.is_object(),
            has_rates: archive.rates.is_object(),
        })
    }
}

/// Result of a restore operation
#[derive(Debug)]
pub struct RestoreResult {
    /// Schema version of the restored archive
    pub schema_version: u32,
    /// When the backup was originally created
    pub backup_date: DateTime<Utc>,
    /// Section names that were written back to disk
    pub files_restored: Vec<&'static str>,
}

impl RestoreResult {
    /// One-line summary for CLI output
    pub fn summary(&self) -> String {
        format!(
            "Restored {} sections from backup taken {}",
            self.files_restored.len(),
            self.backup_date.format("%Y-%m-%d %H:%M:%S UTC")
        )
    }
}

/// Result of validating a backup file
#[derive(Debug)]
pub struct ValidationResult {
    /// Schema version of the archive
    pub schema_version: u32,
    /// When the backup was created
    pub backup_date: DateTime<Utc>,
    /// Whether the archive carries cost data
    pub has_costs: bool,
    /// Whether the archive carries task data
    pub has_tasks: bool,
    /// Whether the archive carries document data
    pub has_documents: bool,
    /// Whether the archive carries an exchange-rate snapshot
    pub has_rates: bool,
}
