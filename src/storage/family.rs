//! Family member repository for JSON storage

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::RelocateError;
use crate::models::{FamilyMember, FamilyMemberId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable family data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct FamilyData {
    #[serde(default)]
    members: Vec<FamilyMember>,
}

/// Repository for family member persistence
pub struct FamilyRepository {
    path: PathBuf,
    data: RwLock<HashMap<FamilyMemberId, FamilyMember>>,
}

impl FamilyRepository {
    /// Create a new family repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load family members from disk
    pub fn load(&self) -> Result<(), RelocateError> {
        let file_data: FamilyData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| RelocateError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for member in file_data.members {
            data.insert(member.id, member);
        }

        Ok(())
    }

    /// Save family members to disk
    pub fn save(&self) -> Result<(), RelocateError> {
        let data = self
            .data
            .read()
            .map_err(|e| RelocateError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut members: Vec<_> = data.values().cloned().collect();
        members.sort_by(|a, b| a.created_at.cmp(&b.created_at));

        let file_data = FamilyData { members };
        write_json_atomic(&self.path, &file_data)
    }

    /// Get a family member by ID
    pub fn get(&self, id: FamilyMemberId) -> Result<Option<FamilyMember>, RelocateError> {
        let data = self
            .data
            .read()
            .map_err(|e| RelocateError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&id).cloned())
    }

    /// Get all family members, oldest record first
    pub fn get_all(&self) -> Result<Vec<FamilyMember>, RelocateError> {
        let data = self
            .data
            .read()
            .map_err(|e| RelocateError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut members: Vec<_> = data.values().cloned().collect();
        members.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(members)
    }

    /// Insert or update a family member
    pub fn upsert(&self, member: FamilyMember) -> Result<(), RelocateError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| RelocateError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.insert(member.id, member);
        Ok(())
    }

    /// Delete a family member
    pub fn delete(&self, id: FamilyMemberId) -> Result<bool, RelocateError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| RelocateError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(data.remove(&id).is_some())
    }

    /// Count family members
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
    use crate::models::Relationship;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, FamilyRepository) {
        let temp_dir = TempDir::new().unwrap();
        let repo = FamilyRepository::new(temp_dir.path().join("family.json"));
        (temp_dir, repo)
    }

    #[test]
    fn test_upsert_get_delete() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let member = FamilyMember::new("Ana", Relationship::Spouse);
        let id = member.id;
        repo.upsert(member).unwrap();

        assert_eq!(repo.get(id).unwrap().unwrap().name, "Ana");
        assert!(repo.delete(id).unwrap());
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let member = FamilyMember::new("Ana", Relationship::Spouse);
        let id = member.id;
        repo.upsert(member).unwrap();
        repo.save().unwrap();

        let repo2 = FamilyRepository::new(temp_dir.path().join("family.json"));
        repo2.load().unwrap();
        assert_eq!(repo2.get(id).unwrap().unwrap().relationship, Relationship::Spouse);
    }
}
