//! In-memory primary store
//!
//! Useful for development without a database and for simulating primary
//! outages in tests via [`MemoryStore::set_available`].

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;

use crate::entities::{NameListTemplate, TemplateFilter, TemplateId, TemplateUpdate};
use crate::error::{Result, StoreError};
use crate::primary::PrimaryStore;

/// Vec-backed [`PrimaryStore`] implementation
pub struct MemoryStore {
    templates: Mutex<Vec<NameListTemplate>>,
    available: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            templates: Mutex::new(Vec::new()),
            available: AtomicBool::new(true),
        }
    }

    /// Toggle simulated availability. While unavailable every operation
    /// fails with [`StoreError::Backend`].
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<()> {
        if self.available.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(StoreError::Backend("primary store unavailable".to_string()))
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PrimaryStore for MemoryStore {
    async fn insert(&self, template: &NameListTemplate) -> Result<()> {
        self.check_available()?;
        self.templates.lock().unwrap().push(template.clone());
        Ok(())
    }

    async fn find(&self, filter: &TemplateFilter) -> Result<Vec<NameListTemplate>> {
        self.check_available()?;
        let templates = self.templates.lock().unwrap();
        let mut matching: Vec<NameListTemplate> = templates
            .iter()
            .filter(|t| filter.matches(t))
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(matching)
    }

    async fn find_by_id(&self, id: &TemplateId) -> Result<Option<NameListTemplate>> {
        self.check_available()?;
        let templates = self.templates.lock().unwrap();
        Ok(templates.iter().find(|t| &t.id == id).cloned())
    }

    async fn update_by_id(&self, id: &TemplateId, update: &TemplateUpdate) -> Result<bool> {
        self.check_available()?;
        let mut templates = self.templates.lock().unwrap();
        match templates.iter_mut().find(|t| &t.id == id) {
            Some(template) => {
                template.apply(update);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_by_id(&self, id: &TemplateId) -> Result<bool> {
        self.check_available()?;
        let mut templates = self.templates.lock().unwrap();
        let before = templates.len();
        templates.retain(|t| &t.id != id);
        Ok(templates.len() < before)
    }
}
