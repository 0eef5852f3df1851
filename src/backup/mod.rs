//! Backup and restore for RelocateCLI
//!
//! Rolling JSON backups of the data directory with retention, plus restore
//! and validation of existing archives.

pub mod manager;
pub mod restore;

pub use manager::{BackupArchive, BackupInfo, BackupManager};
pub use restore::{RestoreManager, RestoreResult, ValidationResult};
