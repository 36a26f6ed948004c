//! Template persistence for rollcall
//!
//! Stores named, categorized lists of person names behind a two-tier
//! backend: a primary structured-query store and a local JSON file that
//! mirrors every write and serves reads when the primary is unreachable.

pub mod entities;
pub mod error;
pub mod memory;
pub mod mirror;
pub mod primary;
pub mod store;

#[cfg(feature = "sqlite")]
pub mod sqlite;

// Re-export core types
pub use entities::{NameListTemplate, TemplateFilter, TemplateId, TemplateInput, TemplateUpdate};
pub use error::{Result, StoreError};
pub use memory::MemoryStore;
pub use mirror::FileMirror;
pub use primary::PrimaryStore;
pub use store::TemplateStore;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteStore;
