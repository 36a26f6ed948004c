//! Error types for the template store

use thiserror::Error;

/// Store-specific errors
#[derive(Error, Debug)]
pub enum StoreError {
    /// Missing or invalid client input. Always surfaced to the caller,
    /// regardless of backend state.
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Template not found: {0}")]
    NotFound(String),

    /// Primary-store failure. Caught internally by [`crate::TemplateStore`]
    /// and answered from the fallback collection; only surfaces when the
    /// fallback path itself cannot satisfy the call.
    #[error("Backend unavailable: {0}")]
    Backend(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for store operations
pub type Result<T> = std::result::Result<T, StoreError>;
