//! Baggage checklist repository for JSON storage

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::RelocateError;
use crate::models::{BaggageCategory, BaggageItem, BaggageItemId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable baggage data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct BaggageData {
    #[serde(default)]
    items: Vec<BaggageItem>,
}

/// Repository for baggage item persistence
pub struct BaggageRepository {
    path: PathBuf,
    data: RwLock<HashMap<BaggageItemId, BaggageItem>>,
}

impl BaggageRepository {
    /// Create a new baggage repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load baggage items from disk
    pub fn load(&self) -> Result<(), RelocateError> {
        let file_data: BaggageData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| RelocateError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for item in file_data.items {
            data.insert(item.id, item);
        }

        Ok(())
    }

    /// Save baggage items to disk
    pub fn save(&self) -> Result<(), RelocateError> {
        let data = self
            .data
            .read()
            .map_err(|e| RelocateError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut items: Vec<_> = data.values().cloned().collect();
        items.sort_by(|a, b| a.name.cmp(&b.name));

        let file_data = BaggageData { items };
        write_json_atomic(&self.path, &file_data)
    }

    /// Get a baggage item by ID
    pub fn get(&self, id: BaggageItemId) -> Result<Option<BaggageItem>, RelocateError> {
        let data = self
            .data
            .read()
            .map_err(|e| RelocateError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&id).cloned())
    }

    /// Get all baggage items, grouped by category then name
    pub fn get_all(&self) -> Result<Vec<BaggageItem>, RelocateError> {
        let data = self
            .data
            .read()
            .map_err(|e| RelocateError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut items: Vec<_> = data.values().cloned().collect();
        items.sort_by(|a, b| {
            format!("{}", a.category)
                .cmp(&format!("{}", b.category))
                .then(a.name.cmp(&b.name))
        });
        Ok(items)
    }

    /// Get baggage items for a category
    pub fn get_by_category(
        &self,
        category: BaggageCategory,
    ) -> Result<Vec<BaggageItem>, RelocateError> {
        Ok(self
            .get_all()?
            .into_iter()
            .filter(|i| i.category == category)
            .collect())
    }

    /// Insert or update a baggage item
    pub fn upsert(&self, item: BaggageItem) -> Result<(), RelocateError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| RelocateError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.insert(item.id, item);
        Ok(())
    }

    /// Delete a baggage item
    pub fn delete(&self, id: BaggageItemId) -> Result<bool, RelocateError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| RelocateError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(data.remove(&id).is_some())
    }

    /// Count baggage items
    pub fn count(&self) -> Result<usize, RelocateError> {
        let data = self
            .data
            .read()
            .map_err(|e| RelocateError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, BaggageRepository) {
        let temp_dir = TempDir::new().unwrap();
        let repo = BaggageRepository::new(temp_dir.path().join("baggage.json"));
        (temp_dir, repo)
    }

    #[test]
    fn test_upsert_get_delete() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let item = BaggageItem::new("Laptop", BaggageCategory::Electronics, 1);
        let id = item.id;
        repo.upsert(item).unwrap();

        assert_eq!(repo.get(id).unwrap().unwrap().name, "Laptop");
        assert!(repo.delete(id).unwrap());
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_get_by_category() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        repo.upsert(BaggageItem::new("Laptop", BaggageCategory::Electronics, 1))
            .unwrap();
        repo.upsert(BaggageItem::new("Coats", BaggageCategory::Clothing, 3))
            .unwrap();

        assert_eq!(
            repo.get_by_category(BaggageCategory::Electronics).unwrap().len(),
            1
        );
        assert!(repo.get_by_category(BaggageCategory::Kitchen).unwrap().is_empty());
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let item = BaggageItem::new("Laptop", BaggageCategory::Electronics, 1);
        let id = item.id;
        repo.upsert(item).unwrap();
        repo.save().unwrap();

        let repo2 = BaggageRepository::new(temp_dir.path().join("baggage.json"));
        repo2.load().unwrap();
        assert!(repo2.get(id).unwrap().is_some());
    }
}
