//! Baggage checklist service

use crate::audit::EntityType;
use crate::error::{RelocateError, RelocateResult};
use crate::models::{BaggageCategory, BaggageItem, BaggageItemId};
use crate::storage::Storage;

/// Progress counts for the baggage checklist
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaggageProgress {
    pub total: usize,
    pub packed: usize,
}

/// Service for baggage checklist management
pub struct BaggageService<'a> {
    storage: &'a Storage,
}

impl<'a> BaggageService<'a> {
    /// Create a new baggage service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Add an item to the checklist
    pub fn create(
        &self,
        name: impl Into<String>,
        category: BaggageCategory,
        quantity: u32,
    ) -> RelocateResult<BaggageItem> {
        let item = BaggageItem::new(name, category, quantity);

        item.validate().map_err(RelocateError::Validation)?;

        self.storage.baggage.upsert(item.clone())?;
        self.storage.baggage.save()?;
        self.storage.log_create(
            EntityType::BaggageItem,
            item.id.to_string(),
            Some(item.name.clone()),
            &item,
        )?;

        Ok(item)
    }

    /// List items, optionally filtered by category
    pub fn list(&self, category: Option<BaggageCategory>) -> RelocateResult<Vec<BaggageItem>> {
        match category {
            Some(cat) => self.storage.baggage.get_by_category(cat),
            None => self.storage.baggage.get_all(),
        }
    }

    /// Get an item by ID
    pub fn get(&self, id: BaggageItemId) -> RelocateResult<BaggageItem> {
        self.storage
            .baggage
            .get(id)?
            .ok_or_else(|| RelocateError::baggage_item_not_found(id.to_string()))
    }

    /// Mark an item packed or unpacked
    pub fn set_packed(&self, id: BaggageItemId, packed: bool) -> RelocateResult<BaggageItem> {
        let mut item = self.get(id)?;
        let before = item.clone();

        item.packed = packed;

        self.storage.baggage.upsert(item.clone())?;
        self.storage.baggage.save()?;
        self.storage.log_update(
            EntityType::BaggageItem,
            item.id.to_string(),
            Some(item.name.clone()),
            &before,
            &item,
        )?;

        Ok(item)
    }

    /// Delete an item
    pub fn delete(&self, id: BaggageItemId) -> RelocateResult<()> {
        let item = self.get(id)?;

        self.storage.baggage.delete(id)?;
        self.storage.baggage.save()?;
        self.storage.log_delete(
            EntityType::BaggageItem,
            item.id.to_string(),
            Some(item.name.clone()),
            &item,
        )?;

        Ok(())
    }

    /// Progress counts for the checklist
    pub fn progress(&self) -> RelocateResult<BaggageProgress> {
        let items = self.storage.baggage.get_all()?;
        Ok(BaggageProgress {
            total: items.len(),
            packed: items.iter().filter(|i| i.packed).count(),
        })
    }
}
