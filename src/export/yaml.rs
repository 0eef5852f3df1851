//! YAML export functionality
//!
//! Exports the complete relocation plan to YAML for human-readable backup.

use std::io::Write;

use crate::error::{RelocateError, RelocateResult};
use crate::export::json::FullExport;
use crate::storage::Storage;

/// Export the full plan to YAML
pub fn export_full_yaml<W: Write>(storage: &Storage, mut writer: W) -> RelocateResult<()> {
    let export = FullExport::from_storage(storage)?;

    writeln!(writer, "# RelocateCLI full plan export")
        .map_err(|e| RelocateError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", export.exported_at)
        .map_err(|e| RelocateError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| RelocateError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| RelocateError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::RelocatePaths;
    use crate::services::TaskService;
    use tempfile::TempDir;

    #[test]
    fn test_yaml_export_parses_back() {
        let temp_dir = TempDir::new().unwrap();
        let paths = RelocatePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();

        TaskService::new(&storage)
            .create("Register at city hall", None, None)
            .unwrap();

        let mut buf = Vec::new();
        export_full_yaml(&storage, &mut buf).unwrap();
        let out = String::from_utf8(buf).unwrap();

        assert!(out.starts_with("# RelocateCLI full plan export"));
        // Comment lines are valid YAML, so the whole output parses
        let parsed: FullExport = serde_yaml::from_str(&out).unwrap();
        assert_eq!(parsed.tasks.len(), 1);
    }
}
