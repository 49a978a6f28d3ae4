//! Common utilities
pub mod measure;
