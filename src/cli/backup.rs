//! Backup CLI commands
//!
//! Implements CLI commands for backup management.

use std::path::PathBuf;

use clap::Subcommand;

use crate::backup::{BackupManager, RestoreManager};
use crate::config::paths::RelocatePaths;
use crate::config::settings::Settings;
use crate::error::{RelocateError, RelocateResult};

/// Backup subcommands
#[derive(Subcommand)]
pub enum BackupCommands {
    /// Create a new backup
    Create,

    /// List all available backups
    List,

    /// Restore from a backup
    Restore {
        /// Backup filename or path (use 'latest' for the most recent)
        backup: String,
    },

    /// Validate a backup file without restoring it
    Info {
        /// Backup filename or path
        backup: String,
    },

    /// Delete backups beyond the retention limit
    Prune,
}

/// Handle a backup command
pub fn handle_backup_command(
    paths: &RelocatePaths,
    settings: &Settings,
    cmd: BackupCommands,
) -> RelocateResult<()> {
    let manager = BackupManager::new(paths.clone(), settings.backup_retention.clone());

    match cmd {
        BackupCommands::Create => {
            let (path, removed) = manager.create_backup_with_retention()?;
            println!("Created backup: {}", path.display());
            if !removed.is_empty() {
                println!("Pruned {} old backup(s)", removed.len());
            }
        }

        BackupCommands::List => {
            let backups = manager.list_backups()?;
            if backups.is_empty() {
                println!("No backups found.");
                return Ok(());
            }
            for backup in backups {
                println!(
                    "{}  {}  {} KiB",
                    backup.created_at.format("%Y-%m-%d %H:%M:%S"),
                    backup.filename,
                    backup.size_bytes / 1024,
                );
            }
        }

        BackupCommands::Restore { backup } => {
            let backup_path = resolve_backup_path(&manager, &backup)?;

            // Safety net before overwriting current data
            let pre_restore = manager.create_backup()?;
            println!("Saved current data to {}", pre_restore.display());

            let restore = RestoreManager::new(paths.clone());
            let result = restore.restore_from_file(&backup_path)?;
            println!("{}", result.summary());
        }

        BackupCommands::Info { backup } => {
            let backup_path = resolve_backup_path(&manager, &backup)?;
            let restore = RestoreManager::new(paths.clone());
            let validation = restore.validate_backup(&backup_path)?;

            println!("Backup: {}", backup_path.display());
            println!("  Schema version: {}", validation.schema_version);
            println!("  Created: {}", validation.backup_date);
            println!("  Costs: {}", if validation.has_costs { "yes" } else { "no" });
            println!("  Tasks: {}", if validation.has_tasks { "yes" } else { "no" });
            println!(
                "  Documents: {}",
                if validation.has_documents { "yes" } else { "no" }
            );
            println!("  Rates: {}", if validation.has_rates { "yes" } else { "no" });
        }

        BackupCommands::Prune => {
            let removed = manager.enforce_retention()?;
            if removed.is_empty() {
                println!("Nothing to prune.");
            } else {
                println!("Removed {} old backup(s)", removed.len());
            }
        }
    }

    Ok(())
}

/// Resolve 'latest', a filename in the backup directory, or a direct path
fn resolve_backup_path(manager: &BackupManager, input: &str) -> RelocateResult<PathBuf> {
    if input == "latest" {
        return manager
            .get_latest_backup()?
            .map(|b| b.path)
            .ok_or_else(|| RelocateError::Backup("No backups available".to_string()));
    }

    if let Some(info) = manager.get_backup(input)? {
        return Ok(info.path);
    }

    let path = PathBuf::from(input);
    if path.exists() {
        return Ok(path);
    }

    Err(RelocateError::Backup(format!("Backup not found: {}", input)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::BackupRetention;
    use crate::storage::Storage;
    use tempfile::TempDir;

    fn setup() -> (TempDir, RelocatePaths, Settings) {
        let temp_dir = TempDir::new().unwrap();
        let paths = RelocatePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths.clone()).unwrap();
        storage.load_all().unwrap();
        storage.save_all().unwrap();
        (temp_dir, paths, Settings::default())
    }

    #[test]
    fn test_create_and_restore_latest() {
        let (_temp_dir, paths, settings) = setup();

        handle_backup_command(&paths, &settings, BackupCommands::Create).unwrap();
        handle_backup_command(
            &paths,
            &settings,
            BackupCommands::Restore {
                backup: "latest".to_string(),
            },
        )
        .unwrap();
    }

    #[test]
    fn test_resolve_missing_backup() {
        let (_temp_dir, paths, _settings) = setup();
        let manager = BackupManager::new(paths, BackupRetention::default());
        assert!(resolve_backup_path(&manager, "nope.json").is_err());
        assert!(resolve_backup_path(&manager, "latest").is_err());
    }
}
