//! Family member service

use chrono::NaiveDate;

use crate::audit::EntityType;
use crate::error::{RelocateError, RelocateResult};
use crate::models::{FamilyMember, FamilyMemberId, Relationship};
use crate::storage::Storage;

/// Service for family member management
pub struct FamilyService<'a> {
    storage: &'a Storage,
}

impl<'a> FamilyService<'a> {
    /// Create a new family service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Add a family member
    pub fn create(
        &self,
        name: impl Into<String>,
        relationship: Relationship,
        birth_date: Option<NaiveDate>,
        passport_number: Option<String>,
    ) -> RelocateResult<FamilyMember> {
        let mut member = FamilyMember::new(name, relationship);
        member.birth_date = birth_date;
        member.passport_number = passport_number;

        member.validate().map_err(RelocateError::Validation)?;

        self.storage.family.upsert(member.clone())?;
        self.storage.family.save()?;
        self.storage.log_create(
            EntityType::FamilyMember,
            member.id.to_string(),
            Some(member.name.clone()),
            &member,
        )?;

        Ok(member)
    }

    /// List all family members
    pub fn list(&self) -> RelocateResult<Vec<FamilyMember>> {
        self.storage.family.get_all()
    }

    /// Get a family member by ID
    pub fn get(&self, id: FamilyMemberId) -> RelocateResult<FamilyMember> {
        self.storage
            .family
            .get(id)?
            .ok_or_else(|| RelocateError::family_member_not_found(id.to_string()))
    }

    /// Delete a family member
    pub fn delete(&self, id: FamilyMemberId) -> RelocateResult<()> {
        let member = self.get(id)?;

        self.storage.family.delete(id)?;
        self.storage.family.save()?;
        self.storage.log_delete(
            EntityType::FamilyMember,
            member.id.to_string(),
            Some(member.name.clone()),
            &member,
        )?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::RelocatePaths;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = RelocatePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_create_list_delete() {
        let (_temp_dir, storage) = create_test_storage();
        let service = FamilyService::new(&storage);

        let member = service
            .create("Ana", Relationship::Spouse, None, Some("FD123456".into()))
            .unwrap();
        assert_eq!(service.list().unwrap().len(), 1);

        service.delete(member.id).unwrap();
        assert!(service.list().unwrap().is_empty());
    }

    #[test]
    fn test_create_rejects_empty_name() {
        let (_temp_dir, storage) = create_test_storage();
        let service = FamilyService::new(&storage);

        assert!(service
            .create("", Relationship::Child, None, None)
            .unwrap_err()
            .is_validation());
    }
}
