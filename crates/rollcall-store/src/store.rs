//! Dual-backend template store
//!
//! Every operation first attempts the primary store, bounded by a timeout.
//! Writes are mirrored into a file-backed fallback collection regardless of
//! the primary outcome; reads fall back to that collection when the primary
//! is unreachable. This is best-effort replication: the fallback is always
//! kept consistent with the most recent writes even when the primary never
//! received them, at the cost of possible primary/fallback divergence.
//!
//! Validation errors always propagate to the caller; primary-store errors
//! are caught and logged, never surfaced while the fallback can answer.

use std::future::Future;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tracing::{debug, error, warn};

use crate::entities::{NameListTemplate, TemplateFilter, TemplateId, TemplateInput, TemplateUpdate};
use crate::error::{Result, StoreError};
use crate::mirror::FileMirror;
use crate::primary::PrimaryStore;

/// Default bound on a single primary-store call.
pub const DEFAULT_PRIMARY_TIMEOUT: Duration = Duration::from_secs(5);

/// Template store with a primary backend and a file-mirrored fallback
/// collection.
///
/// The fallback collection and its backing file are only ever mutated
/// while holding a single mutex, so concurrent writers cannot lose
/// mirror updates to interleaved read-modify-write cycles.
pub struct TemplateStore {
    primary: Arc<dyn PrimaryStore>,
    mirror: FileMirror,
    fallback: Mutex<Vec<NameListTemplate>>,
    primary_timeout: Duration,
}

impl TemplateStore {
    /// Open the store, seeding the fallback collection from the mirror
    /// document (created empty if absent).
    pub async fn open(
        primary: Arc<dyn PrimaryStore>,
        mirror_path: impl AsRef<Path>,
        primary_timeout: Duration,
    ) -> Result<Self> {
        let (mirror, templates) = FileMirror::open(mirror_path).await?;
        debug!(
            count = templates.len(),
            path = %mirror.path().display(),
            "loaded fallback collection from mirror"
        );

        Ok(Self {
            primary,
            mirror,
            fallback: Mutex::new(templates),
            primary_timeout,
        })
    }

    /// List templates, newest-created first.
    ///
    /// Served by the primary when reachable; otherwise the same filter
    /// semantics are applied to the fallback collection. Never fails.
    pub async fn list(&self, filter: &TemplateFilter) -> Vec<NameListTemplate> {
        match self.try_primary(self.primary.find(filter)).await {
            Ok(templates) => templates,
            Err(e) => {
                warn!(error = %e, "primary list failed, serving fallback collection");
                let fallback = self.fallback.lock().await;
                let mut matching: Vec<NameListTemplate> = fallback
                    .iter()
                    .filter(|t| filter.matches(t))
                    .cloned()
                    .collect();
                matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));
                matching
            }
        }
    }

    /// Fetch a single template by id, consulting the fallback collection
    /// on a primary miss or failure.
    pub async fn get(&self, id: &TemplateId) -> Result<NameListTemplate> {
        match self.try_primary(self.primary.find_by_id(id)).await {
            Ok(Some(template)) => return Ok(template),
            Ok(None) => {}
            Err(e) => warn!(error = %e, %id, "primary lookup failed, consulting fallback"),
        }

        let fallback = self.fallback.lock().await;
        fallback
            .iter()
            .find(|t| &t.id == id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    /// Create a template.
    ///
    /// The write is attempted against the primary, but the new template is
    /// appended to the fallback collection and persisted regardless of the
    /// primary outcome, so reads stay consistent with the latest writes.
    pub async fn create(&self, input: TemplateInput) -> Result<NameListTemplate> {
        input.validate()?;
        let template = NameListTemplate::new(input);

        if let Err(e) = self.try_primary(self.primary.insert(&template)).await {
            warn!(error = %e, id = %template.id, "primary insert failed, template kept in fallback only");
        }

        let mut fallback = self.fallback.lock().await;
        fallback.push(template.clone());
        self.persist(&fallback).await;

        Ok(template)
    }

    /// Update a template in place.
    ///
    /// The fallback entry is merged and persisted whenever it matches,
    /// even when the primary reports no matching id; the file is the
    /// durability backstop. Returns `NotFound` when the primary reports
    /// no match, or when the primary is unreachable and the fallback has
    /// no entry either.
    pub async fn update(&self, id: &TemplateId, update: &TemplateUpdate) -> Result<()> {
        update.validate()?;

        let primary_result = self.try_primary(self.primary.update_by_id(id, update)).await;

        let fallback_matched = {
            let mut fallback = self.fallback.lock().await;
            match fallback.iter_mut().find(|t| &t.id == id) {
                Some(template) => {
                    template.apply(update);
                    self.persist(&fallback).await;
                    true
                }
                None => false,
            }
        };

        match primary_result {
            Ok(true) => Ok(()),
            Ok(false) => Err(StoreError::NotFound(id.to_string())),
            Err(e) => {
                warn!(error = %e, %id, "primary update failed, fallback decides the outcome");
                if fallback_matched {
                    Ok(())
                } else {
                    Err(StoreError::NotFound(id.to_string()))
                }
            }
        }
    }

    /// Delete a template from both tiers.
    ///
    /// Signals `NotFound` only when neither the primary nor the fallback
    /// collection contained the id.
    pub async fn delete(&self, id: &TemplateId) -> Result<()> {
        let primary_result = self.try_primary(self.primary.delete_by_id(id)).await;

        let removed_from_fallback = {
            let mut fallback = self.fallback.lock().await;
            let before = fallback.len();
            fallback.retain(|t| &t.id != id);
            let removed = fallback.len() < before;
            if removed {
                self.persist(&fallback).await;
            }
            removed
        };

        match primary_result {
            Ok(true) => Ok(()),
            Ok(false) => {
                if removed_from_fallback {
                    Ok(())
                } else {
                    Err(StoreError::NotFound(id.to_string()))
                }
            }
            Err(e) => {
                warn!(error = %e, %id, "primary delete failed, fallback decides the outcome");
                if removed_from_fallback {
                    Ok(())
                } else {
                    Err(StoreError::NotFound(id.to_string()))
                }
            }
        }
    }

    /// Bound a primary-store call by the configured timeout; an elapsed
    /// timeout counts as a primary failure.
    async fn try_primary<T>(&self, op: impl Future<Output = Result<T>>) -> Result<T> {
        match tokio::time::timeout(self.primary_timeout, op).await {
            Ok(result) => result,
            Err(_) => Err(StoreError::Backend(format!(
                "primary store timed out after {:?}",
                self.primary_timeout
            ))),
        }
    }

    /// Best-effort mirror rewrite; failures are logged, not propagated.
    async fn persist(&self, templates: &[NameListTemplate]) {
        if let Err(e) = self.mirror.save(templates).await {
            error!(error = %e, path = %self.mirror.path().display(), "failed to persist mirror");
        }
    }
}
