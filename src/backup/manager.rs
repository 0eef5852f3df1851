//! Backup manager for RelocateCLI
//!
//! Handles rolling backups with a configurable retention policy. Backups are
//! stored as dated JSON archives bundling every data file.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::paths::RelocatePaths;
use crate::config::settings::BackupRetention;
use crate::error::{RelocateError, RelocateResult};

/// Metadata about a backup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackupInfo {
    /// Backup filename
    pub filename: String,
    /// Full path to backup
    pub path: PathBuf,
    /// When the backup was created
    pub created_at: DateTime<Utc>,
    /// Size in bytes
    pub size_bytes: u64,
}

/// Backup archive format
#[derive(Debug, Serialize, Deserialize)]
pub struct BackupArchive {
    /// Schema version for migration support
    pub schema_version: u32,
    /// When the backup was created
    pub created_at: DateTime<Utc>,
    /// Cost data, payments embedded
    pub costs: serde_json::Value,
    /// Task data
    pub tasks: serde_json::Value,
    /// Document data
    pub documents: serde_json::Value,
    /// Family roster data
    pub family: serde_json::Value,
    /// Baggage checklist data
    pub baggage: serde_json::Value,
    /// Exchange-rate snapshot
    pub rates: serde_json::Value,
}

/// Manages backup creation and retention
pub struct BackupManager {
    backup_dir: PathBuf,
    paths: RelocatePaths,
    retention: BackupRetention,
}

impl BackupManager {
    /// Create a new BackupManager
    pub fn new(paths: RelocatePaths, retention: BackupRetention) -> Self {
        let backup_dir = paths.backup_dir();
        Self {
            backup_dir,
            paths,
            retention,
        }
    }

    /// Create a backup of all data
    ///
    /// Returns the path to the created backup file.
    pub fn create_backup(&self) -> RelocateResult<PathBuf> {
        fs::create_dir_all(&self.backup_dir)
            .map_err(|e| RelocateError::Io(format!("Failed to create backup directory: {}", e)))?;

        let now = Utc::now();
        let filename = format!(
            "backup-{}-{:03}.json",
            now.format("%Y%m%d-%H%M%S"),
            now.timestamp_subsec_millis()
        );
        let backup_path = self.backup_dir.join(&filename);

        let archive = self.create_archive(now)?;

        let json = serde_json::to_string_pretty(&archive)
            .map_err(|e| RelocateError::Json(format!("Failed to serialize backup: {}", e)))?;

        fs::write(&backup_path, json)
            .map_err(|e| RelocateError::Io(format!("Failed to write backup file: {}", e)))?;

        Ok(backup_path)
    }

    /// Create a backup archive from the current data files
    fn create_archive(&self, timestamp: DateTime<Utc>) -> RelocateResult<BackupArchive> {
        Ok(BackupArchive {
            schema_version: 1,
            created_at: timestamp,
            costs: read_json_value(&self.paths.costs_file())?,
            tasks: read_json_value(&self.paths.tasks_file())?,
            documents: read_json_value(&self.paths.documents_file())?,
            family: read_json_value(&self.paths.family_file())?,
            baggage: read_json_value(&self.paths.baggage_file())?,
            rates: read_json_value(&self.paths.rates_file())?,
        })
    }

    /// List all available backups, newest first
    pub fn list_backups(&self) -> RelocateResult<Vec<BackupInfo>> {
        if !self.backup_dir.exists() {
            return Ok(Vec::new());
        }

        let mut backups = Vec::new();

        for entry in fs::read_dir(&self.backup_dir)
            .map_err(|e| RelocateError::Io(format!("Failed to read backup directory: {}", e)))?
        {
            let entry = entry
                .map_err(|e| RelocateError::Io(format!("Failed to read directory entry: {}", e)))?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                if let Some(info) = parse_backup_info(&path) {
                    backups.push(info);
                }
            }
        }

        backups.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(backups)
    }

    /// Delete backups beyond the retention limit
    ///
    /// Returns the paths that were removed.
    pub fn enforce_retention(&self) -> RelocateResult<Vec<PathBuf>> {
        let backups = self.list_backups()?;
        let max = self.retention.max_count as usize;

        let mut removed = Vec::new();
        for backup in backups.iter().skip(max) {
            fs::remove_file(&backup.path)
                .map_err(|e| RelocateError::Io(format!("Failed to delete old backup: {}", e)))?;
            removed.push(backup.path.clone());
        }

        Ok(removed)
    }

    /// Create a backup and apply the retention policy in one step
    pub fn create_backup_with_retention(&self) -> RelocateResult<(PathBuf, Vec<PathBuf>)> {
        let path = self.create_backup()?;
        let removed = self.enforce_retention()?;
        Ok((path, removed))
    }

    /// Backup directory path
    pub fn backup_dir(&self) -> &PathBuf {
        &self.backup_dir
    }

    /// Find a backup by filename
    pub fn get_backup(&self, filename: &str) -> RelocateResult<Option<BackupInfo>> {
        Ok(self
            .list_backups()?
            .into_iter()
            .find(|b| b.filename == filename))
    }

    /// The most recent backup, if any
    pub fn get_latest_backup(&self) -> RelocateResult<Option<BackupInfo>> {
        Ok(self.list_backups()?.into_iter().next())
    }
}

/// Extract backup metadata from a file on disk
fn parse_backup_info(path: &Path) -> Option<BackupInfo> {
    let filename = path.file_name()?.to_string_lossy().to_string();
    if !filename.starts_with("backup-") {
        return None;
    }

    let metadata = fs::metadata(path).ok()?;
    let content = fs::read_to_string(path).ok()?;
    let archive: BackupArchive = serde_json::from_str(&content).ok()?;

    Some(BackupInfo {
        filename,
        path: path.to_path_buf(),
        created_at: archive.created_at,
        size_bytes: metadata.len(),
    })
}

/// Read a data file as a raw JSON value, null when missing
///
/// Null marks the section as absent so restore leaves the file alone
/// instead of writing an object the repositories cannot parse.
fn read_json_value(path: &Path) -> RelocateResult<serde_json::Value> {
    if !path.exists() {
        return Ok(serde_json::Value::Null);
    }
    let content = fs::read_to_string(path)
        .map_err(|e| RelocateError::Io(format!("Failed to read {}: {}", path.display(), e)))?;
    serde_json::from_str(&content)
        .map_err(|e| RelocateError::Json(format!("Invalid JSON in {}: {}", path.display(), e)))
}
