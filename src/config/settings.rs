//! User settings for RelocateCLI
//!
//! Manages user preferences including the display currency used for
//! on-screen amounts and backup retention policies.

use serde::{Deserialize, Serialize};

use super::paths::RelocatePaths;
use crate::error::RelocateError;
use crate::models::Currency;

/// Backup retention settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackupRetention {
    /// Maximum number of backups to keep
    pub max_count: u32,
}

impl Default for BackupRetention {
    fn default() -> Self {
        Self { max_count: 30 }
    }
}

/// User settings, persisted as config.json in the base directory
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Currency used for displayed amounts unless overridden per command
    #[serde(default)]
    pub display_currency: Currency,

    /// Backup retention policy
    #[serde(default)]
    pub backup_retention: BackupRetention,
}

impl Settings {
    /// Load settings from disk, creating the file with defaults if missing
    pub fn load_or_create(paths: &RelocatePaths) -> Result<Self, RelocateError> {
        let path = paths.settings_file();

        if path.exists() {
            let content = std::fs::read_to_string(&path)
                .map_err(|e| RelocateError::Io(format!("Failed to read settings: {}", e)))?;
            serde_json::from_str(&content)
                .map_err(|e| RelocateError::Json(format!("Failed to parse settings: {}", e)))
        } else {
            let settings = Self::default();
            settings.save(paths)?;
            Ok(settings)
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &RelocatePaths) -> Result<(), RelocateError> {
        paths.ensure_directories()?;

        let content = serde_json::to_string_pretty(self)
            .map_err(|e| RelocateError::Json(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), content)
            .map_err(|e| RelocateError::Io(format!("Failed to write settings: {}", e)))
    }
}
