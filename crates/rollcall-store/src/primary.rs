//! Primary-store abstraction

use async_trait::async_trait;

use crate::entities::{NameListTemplate, TemplateFilter, TemplateId, TemplateUpdate};
use crate::error::Result;

/// The structured-query backend preferred for template persistence.
///
/// Only the success/failure contract is consumed: any error from an
/// implementation is treated as the primary being unavailable, and the
/// caller falls back to the file-mirrored collection. Recovery is implicit
/// per call; there is no sticky degraded state.
#[async_trait]
pub trait PrimaryStore: Send + Sync {
    /// Insert a newly created template.
    async fn insert(&self, template: &NameListTemplate) -> Result<()>;

    /// Filtered listing, newest-created first.
    async fn find(&self, filter: &TemplateFilter) -> Result<Vec<NameListTemplate>>;

    /// Look up a single template by id.
    async fn find_by_id(&self, id: &TemplateId) -> Result<Option<NameListTemplate>>;

    /// Apply a full-replacement update. Returns whether a record matched.
    async fn update_by_id(&self, id: &TemplateId, update: &TemplateUpdate) -> Result<bool>;

    /// Delete by id. Returns whether a record was deleted.
    async fn delete_by_id(&self, id: &TemplateId) -> Result<bool>;
}
