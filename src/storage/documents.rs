//! Document repository for JSON storage

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::RelocateError;
use crate::models::{Document, DocumentId, DocumentStatus};

use super::file_io::{read_json, write_json_atomic};

/// Serializable document data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct DocumentData {
    #[serde(default)]
    documents: Vec<Document>,
}

/// Repository for document persistence
pub struct DocumentRepository {
    path: PathBuf,
    data: RwLock<HashMap<DocumentId, Document>>,
}

impl DocumentRepository {
    /// Create a new document repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load documents from disk
    pub fn load(&self) -> Result<(), RelocateError> {
        let file_data: DocumentData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| RelocateError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for doc in file_data.documents {
            data.insert(doc.id, doc);
        }

        Ok(())
    }

    /// Save documents to disk
    pub fn save(&self) -> Result<(), RelocateError> {
        let data = self
            .data
            .read()
            .map_err(|e| RelocateError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut documents: Vec<_> = data.values().cloned().collect();
        documents.sort_by(|a, b| a.name.cmp(&b.name));

        let file_data = DocumentData { documents };
        write_json_atomic(&self.path, &file_data)
    }

    /// Get a document by ID
    pub fn get(&self, id: DocumentId) -> Result<Option<Document>, RelocateError> {
        let data = self
            .data
            .read()
            .map_err(|e| RelocateError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&id).cloned())
    }

    /// Get all documents, sorted by name
    pub fn get_all(&self) -> Result<Vec<Document>, RelocateError> {
        let data = self
            .data
            .read()
            .map_err(|e| RelocateError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut documents: Vec<_> = data.values().cloned().collect();
        documents.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(documents)
    }

    /// Get documents with a given status
    pub fn get_by_status(&self, status: DocumentStatus) -> Result<Vec<Document>, RelocateError> {
        Ok(self
            .get_all()?
            .into_iter()
            .filter(|d| d.status == status)
            .collect())
    }

    /// Insert or update a document
    pub fn upsert(&self, doc: Document) -> Result<(), RelocateError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| RelocateError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.insert(doc.id, doc);
        Ok(())
    }

    /// Delete a document
    pub fn delete(&self, id: DocumentId) -> Result<bool, RelocateError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| RelocateError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(data.remove(&id).is_some())
    }

    /// Count documents
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
    use crate::models::DocumentKind;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, DocumentRepository) {
        let temp_dir = TempDir::new().unwrap();
        let repo = DocumentRepository::new(temp_dir.path().join("documents.json"));
        (temp_dir, repo)
    }

    #[test]
    fn test_upsert_get_delete() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let doc = Document::new("Ana's passport", DocumentKind::Passport);
        let id = doc.id;
        repo.upsert(doc).unwrap();

        assert_eq!(repo.get(id).unwrap().unwrap().name, "Ana's passport");
        assert!(repo.delete(id).unwrap());
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_get_by_status() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let mut in_hand = Document::new("Passport", DocumentKind::Passport);
        in_hand.set_status(DocumentStatus::InHand);
        repo.upsert(in_hand).unwrap();
        repo.upsert(Document::new("Visa", DocumentKind::Visa)).unwrap();

        assert_eq!(repo.get_by_status(DocumentStatus::InHand).unwrap().len(), 1);
        assert_eq!(repo.get_by_status(DocumentStatus::Missing).unwrap().len(), 1);
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let doc = Document::new("Apostille", DocumentKind::Apostille);
        let id = doc.id;
        repo.upsert(doc).unwrap();
        repo.save().unwrap();

        let repo2 = DocumentRepository::new(temp_dir.path().join("documents.json"));
        repo2.load().unwrap();
        assert_eq!(repo2.get(id).unwrap().unwrap().kind, DocumentKind::Apostille);
    }
}
