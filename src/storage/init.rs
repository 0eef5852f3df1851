//! Storage initialization

use crate::config::paths::RelocatePaths;
use crate::config::settings::Settings;
use crate::error::RelocateError;

use super::Storage;

/// Initialize storage for a new plan
///
/// Creates the directory layout, writes default settings, and persists empty
/// data files so subsequent loads see a consistent on-disk state.
pub fn initialize_storage(paths: &RelocatePaths) -> Result<Storage, RelocateError> {
    paths.ensure_directories()?;
    Settings::load_or_create(paths)?;

    let storage = Storage::new(paths.clone())?;
    storage.save_all()?;
    Ok(storage)
}
