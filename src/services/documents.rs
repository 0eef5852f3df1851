//! Document service

use chrono::NaiveDate;

use crate::audit::EntityType;
use crate::error::{RelocateError, RelocateResult};
use crate::models::{Document, DocumentId, DocumentKind, DocumentStatus};
use crate::storage::Storage;

/// Progress counts for the document checklist
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentProgress {
    pub total: usize,
    pub in_hand: usize,
    pub requested: usize,
    pub expired: usize,
}

/// Service for document management
pub struct DocumentService<'a> {
    storage: &'a Storage,
}

impl<'a> DocumentService<'a> {
    /// Create a new document service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a new document record
    pub fn create(
        &self,
        name: impl Into<String>,
        kind: DocumentKind,
        expires_on: Option<NaiveDate>,
        reference: Option<String>,
    ) -> RelocateResult<Document> {
        let mut doc = Document::new(name, kind);
        doc.expires_on = expires_on;
        doc.reference = reference;

        doc.validate().map_err(RelocateError::Validation)?;

        self.storage.documents.upsert(doc.clone())?;
        self.storage.documents.save()?;
        self.storage.log_create(
            EntityType::Document,
            doc.id.to_string(),
            Some(doc.name.clone()),
            &doc,
        )?;

        Ok(doc)
    }

    /// List documents, optionally filtered by status
    pub fn list(&self, status: Option<DocumentStatus>) -> RelocateResult<Vec<Document>> {
        match status {
            Some(s) => self.storage.documents.get_by_status(s),
            None => self.storage.documents.get_all(),
        }
    }

    /// Get a document by ID
    pub fn get(&self, id: DocumentId) -> RelocateResult<Document> {
        self.storage
            .documents
            .get(id)?
            .ok_or_else(|| RelocateError::document_not_found(id.to_string()))
    }

    /// Change a document's acquisition status
    pub fn set_status(&self, id: DocumentId, status: DocumentStatus) -> RelocateResult<Document> {
        let mut doc = self.get(id)?;
        let before = doc.clone();

        doc.set_status(status);

        self.storage.documents.upsert(doc.clone())?;
        self.storage.documents.save()?;
        self.storage.log_update(
            EntityType::Document,
            doc.id.to_string(),
            Some(doc.name.clone()),
            &before,
            &doc,
        )?;

        Ok(doc)
    }

    /// Delete a document record
    pub fn delete(&self, id: DocumentId) -> RelocateResult<()> {
        let doc = self.get(id)?;

        self.storage.documents.delete(id)?;
        self.storage.documents.save()?;
        self.storage.log_delete(
            EntityType::Document,
            doc.id.to_string(),
            Some(doc.name.clone()),
            &doc,
        )?;

        Ok(())
    }

    /// Progress counts as of the given date
    pub fn progress(&self, today: NaiveDate) -> RelocateResult<DocumentProgress> {
        let docs = self.storage.documents.get_all()?;
        Ok(DocumentProgress {
            total: docs.len(),
            in_hand: docs.iter().filter(|d| d.is_in_hand()).count(),
            requested: docs
                .iter()
                .filter(|d| d.status == DocumentStatus::Requested)
                .count(),
            expired: docs.iter().filter(|d| d.is_expired(today)).count(),
        })
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
    fn test_create_and_status_change() {
        let (_temp_dir, storage) = create_test_storage();
        let service = DocumentService::new(&storage);

        let doc = service
            .create("Ana's passport", DocumentKind::Passport, None, None)
            .unwrap();
        assert_eq!(doc.status, DocumentStatus::Missing);

        let doc = service.set_status(doc.id, DocumentStatus::InHand).unwrap();
        assert!(doc.is_in_hand());
    }

    #[test]
    fn test_progress_counts_expired() {
        let (_temp_dir, storage) = create_test_storage();
        let service = DocumentService::new(&storage);

        let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let past = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

        service
            .create("Old visa", DocumentKind::Visa, Some(past), None)
            .unwrap();
        let in_hand = service
            .create("Passport", DocumentKind::Passport, None, None)
            .unwrap();
        service.set_status(in_hand.id, DocumentStatus::InHand).unwrap();

        let progress = service.progress(today).unwrap();
        assert_eq!(progress.total, 2);
        assert_eq!(progress.in_hand, 1);
        assert_eq!(progress.expired, 1);
    }

    #[test]
    fn test_get_missing_is_not_found() {
        let (_temp_dir, storage) = create_test_storage();
        let service = DocumentService::new(&storage);

        assert!(service.get(DocumentId::new()).unwrap_err().is_not_found());
    }
}
