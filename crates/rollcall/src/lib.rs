//! Rollcall turns free-form name lists into canonical token sequences
//! and computes which expected attendees are missing from an actual list.

pub mod diff;
pub mod normalize;

// Re-export core functions
pub use diff::absentees;
pub use normalize::{normalize, normalized_key};

/// Get the library version
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
