//! Path management for RelocateCLI
//!
//! Provides XDG-compliant path resolution for configuration, data, and backups.
//!
//! ## Path Resolution Order
//!
//! 1. `RELOCATE_CLI_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/relocate-cli` or `~/.config/relocate-cli`
//! 3. Windows: `%APPDATA%\relocate-cli`

use std::path::PathBuf;

use crate::error::RelocateError;

/// Manages all paths used by RelocateCLI
#[derive(Debug, Clone)]
pub struct RelocatePaths {
    /// Base directory for all RelocateCLI data
    base_dir: PathBuf,
}

impl RelocatePaths {
    /// Create a new RelocatePaths instance
    ///
    /// Path resolution:
    /// 1. `RELOCATE_CLI_DATA_DIR` env var (explicit override)
    /// 2. Unix: `$XDG_CONFIG_HOME/relocate-cli` or `~/.config/relocate-cli`
    /// 3. Windows: `%APPDATA%\relocate-cli`
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, RelocateError> {
        let base_dir = if let Ok(custom) = std::env::var("RELOCATE_CLI_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create RelocatePaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/relocate-cli/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (~/.config/relocate-cli/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the backup directory (~/.config/relocate-cli/backups/)
    pub fn backup_dir(&self) -> PathBuf {
        self.base_dir.join("backups")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Get the path to costs.json
    pub fn costs_file(&self) -> PathBuf {
        self.data_dir().join("costs.json")
    }

    /// Get the path to tasks.json
    pub fn tasks_file(&self) -> PathBuf {
        self.data_dir().join("tasks.json")
    }

    /// Get the path to documents.json
    pub fn documents_file(&self) -> PathBuf {
        self.data_dir().join("documents.json")
    }

    /// Get the path to family.json
    pub fn family_file(&self) -> PathBuf {
        self.data_dir().join("family.json")
    }

    /// Get the path to baggage.json
    pub fn baggage_file(&self) -> PathBuf {
        self.data_dir().join("baggage.json")
    }

    /// Get the path to rates.json (cached exchange-rate snapshot)
    pub fn rates_file(&self) -> PathBuf {
        self.data_dir().join("rates.json")
    }

    /// Ensure all required directories exist
    ///
    /// Creates:
    /// - Base directory (~/.config/relocate-cli/)
    /// - Data directory (~/.config/relocate-cli/data/)
    /// - Backup directory (~/.config/relocate-cli/backups/)
    pub fn ensure_directories(&self) -> Result<(), RelocateError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| RelocateError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| RelocateError::Io(format!("Failed to create data directory: {}", e)))?;

        std::fs::create_dir_all(self.backup_dir())
            .map_err(|e| RelocateError::Io(format!("Failed to create backup directory: {}", e)))?;

        Ok(())
    }
}

/// Resolve the default base directory for the current platform
fn resolve_default_path() -> Result<PathBuf, RelocateError> {
    #[cfg(windows)]
    {
        let appdata = std::env::var("APPDATA")
            .map_err(|_| RelocateError::Config("APPDATA environment variable not set".into()))?;
        Ok(PathBuf::from(appdata).join("relocate-cli"))
    }

    #[cfg(not(windows))]
    {
        if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
            if !xdg.is_empty() {
                return Ok(PathBuf::from(xdg).join("relocate-cli"));
            }
        }

        let home = std::env::var("HOME")
            .map_err(|_| RelocateError::Config("HOME environment variable not set".into()))?;
        Ok(PathBuf::from(home).join(".config").join("relocate-cli"))
    }
}
