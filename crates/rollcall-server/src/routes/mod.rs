//! HTTP route handlers

pub mod compare;
pub mod recognize;
pub mod templates;
