//! Shared utilities for the schema derivation tools.

pub mod config;

// Re-export main types
pub use config::{Config, OutputFormat};
