//! Core utilities and types for tsmirror.
//!
//! This crate provides the naming conventions and file output helpers used
//! across the tsmirror crates.

mod file;
mod naming;

// File operations
pub use file::{File, clear_dir};
// Identifier case conversion
pub use naming::{to_capitalized, to_lower_camel};
