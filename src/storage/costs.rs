//! Cost item repository for JSON storage
//!
//! Manages loading and saving cost items to costs.json. Payments live inside
//! their owning cost item, so deleting an item drops its payments with it.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::RelocateError;
use crate::models::{CostCategory, CostItem, CostItemId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable cost data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct CostData {
    #[serde(default)]
    items: Vec<CostItem>,
}

/// Repository for cost item persistence with a category index
pub struct CostRepository {
    path: PathBuf,
    data: RwLock<HashMap<CostItemId, CostItem>>,
    /// Index: category -> item ids
    by_category: RwLock<HashMap<CostCategory, Vec<CostItemId>>>,
}

impl CostRepository {
    /// Create a new cost repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
            by_category: RwLock::new(HashMap::new()),
        }
    }

    /// Load cost items from disk and build the category index
    pub fn load(&self) -> Result<(), RelocateError> {
        let file_data: CostData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| RelocateError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        let mut by_category = self
            .by_category
            .write()
            .map_err(|e| RelocateError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        by_category.clear();

        for item in file_data.items {
            by_category.entry(item.category).or_default().push(item.id);
            data.insert(item.id, item);
        }

        Ok(())
    }

    /// Save cost items to disk
    pub fn save(&self) -> Result<(), RelocateError> {
        let data = self
            .data
            .read()
            .map_err(|e| RelocateError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut items: Vec<_> = data.values().cloned().collect();
        items.sort_by(|a, b| a.created_at.cmp(&b.created_at));

        let file_data = CostData { items };
        write_json_atomic(&self.path, &file_data)
    }

    /// Get a cost item by ID
    pub fn get(&self, id: CostItemId) -> Result<Option<CostItem>, RelocateError> {
        let data = self
            .data
            .read()
            .map_err(|e| RelocateError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&id).cloned())
    }

    /// Get all cost items, oldest first
    pub fn get_all(&self) -> Result<Vec<CostItem>, RelocateError> {
        let data = self
            .data
            .read()
            .map_err(|e| RelocateError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut items: Vec<_> = data.values().cloned().collect();
        items.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(items)
    }

    /// Get cost items for a category
    pub fn get_by_category(&self, category: CostCategory) -> Result<Vec<CostItem>, RelocateError> {
        let data = self
            .data
            .read()
            .map_err(|e| RelocateError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        let by_category = self
            .by_category
            .read()
            .map_err(|e| RelocateError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let ids = by_category.get(&category).map(|v| v.as_slice()).unwrap_or(&[]);
        let mut items: Vec<_> = ids.iter().filter_map(|id| data.get(id).cloned()).collect();
        items.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(items)
    }

    /// Insert or update a cost item
    pub fn upsert(&self, item: CostItem) -> Result<(), RelocateError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| RelocateError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        let mut by_category = self
            .by_category
            .write()
            .map_err(|e| RelocateError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        // Remove from the old category index if updating
        if let Some(old) = data.get(&item.id) {
            if let Some(ids) = by_category.get_mut(&old.category) {
                ids.retain(|&id| id != item.id);
            }
        }

        by_category.entry(item.category).or_default().push(item.id);
        data.insert(item.id, item);
        Ok(())
    }

    /// Delete a cost item (and, by containment, its payments)
    pub fn delete(&self, id: CostItemId) -> Result<bool, RelocateError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| RelocateError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        let mut by_category = self
            .by_category
            .write()
            .map_err(|e| RelocateError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        if let Some(item) = data.remove(&id) {
            if let Some(ids) = by_category.get_mut(&item.category) {
                ids.retain(|&iid| iid != id);
            }
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Count cost items
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
    use crate::models::Currency;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, CostRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("costs.json");
        let repo = CostRepository::new(path);
        (temp_dir, repo)
    }

    fn item(name: &str, category: CostCategory) -> CostItem {
        CostItem::new(name, category, Currency::Eur, 1, 100.0)
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_upsert_and_get() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let cost = item("Flight tickets", CostCategory::Travel);
        let id = cost.id;
        repo.upsert(cost).unwrap();

        let retrieved = repo.get(id).unwrap().unwrap();
        assert_eq!(retrieved.name, "Flight tickets");
    }

    #[test]
    fn test_get_by_category() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        repo.upsert(item("Flights", CostCategory::Travel)).unwrap();
        repo.upsert(item("Hotel", CostCategory::Travel)).unwrap();
        repo.upsert(item("Visa fee", CostCategory::Visa)).unwrap();

        assert_eq!(repo.get_by_category(CostCategory::Travel).unwrap().len(), 2);
        assert_eq!(repo.get_by_category(CostCategory::Visa).unwrap().len(), 1);
        assert!(repo.get_by_category(CostCategory::Health).unwrap().is_empty());
    }

    #[test]
    fn test_category_index_follows_update() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let mut cost = item("Health insurance", CostCategory::Other);
        let id = cost.id;
        repo.upsert(cost.clone()).unwrap();

        cost.category = CostCategory::Health;
        repo.upsert(cost).unwrap();

        assert!(repo.get_by_category(CostCategory::Other).unwrap().is_empty());
        let health = repo.get_by_category(CostCategory::Health).unwrap();
        assert_eq!(health.len(), 1);
        assert_eq!(health[0].id, id);
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let cost = item("Flight tickets", CostCategory::Travel);
        let id = cost.id;
        repo.upsert(cost).unwrap();
        repo.save().unwrap();

        let repo2 = CostRepository::new(temp_dir.path().join("costs.json"));
        repo2.load().unwrap();

        assert_eq!(repo2.count().unwrap(), 1);
        assert_eq!(repo2.get(id).unwrap().unwrap().name, "Flight tickets");
    }

    #[test]
    fn test_delete() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let cost = item("Flight tickets", CostCategory::Travel);
        let id = cost.id;
        repo.upsert(cost).unwrap();

        assert!(repo.delete(id).unwrap());
        assert!(!repo.delete(id).unwrap());
        assert_eq!(repo.count().unwrap(), 0);
        assert!(repo.get_by_category(CostCategory::Travel).unwrap().is_empty());
    }
}
