//! Linking pipeline and shared code generation utilities for tsmirror.
//!
//! This crate provides the language-agnostic half of code generation:
//! cross-unit type resolution and the building blocks used by the
//! language-specific generators (e.g., `tsmirror-codegen-typescript`).
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`language`] - Language-specific abstractions (LanguageCodegen, TypeMapper, etc.)
//! - [`linker`] - Resolution of type names to units and relative import paths
//! - [`pipeline`] - Staged parse → link pipeline with diagnostics

pub mod builder;
pub mod language;
pub mod linker;
pub mod pipeline;

pub use builder::{CodeBuilder, CodeFragment, Renderable};
pub use language::{GenerateResult, GeneratedFile, LanguageCodegen, TypeMapper};
pub use linker::{Linker, link, relative_dir};
