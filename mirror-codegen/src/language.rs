//! Language-agnostic code generation traits.

use std::path::{Path, PathBuf};

use eyre::Result;
use tsmirror_ir::PrimitiveType;

/// Trait for language-specific code generators.
///
/// Implement this trait to emit the linked units in a new target language.
pub trait LanguageCodegen {
    /// Render every file without writing to disk
    fn preview(&self) -> Vec<GeneratedFile>;

    /// Render every file, then write them all into the output directory.
    ///
    /// Nothing is written if rendering fails.
    fn generate(&self, output_dir: &Path) -> Result<GenerateResult>;
}

/// Result of code generation
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// Files written, as absolute or output-relative paths
    pub written: Vec<PathBuf>,
}

/// A rendered output file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Path relative to the output directory, `/`-separated
    pub path: String,
    /// File content
    pub content: String,
}

/// Trait for mapping primitive types to language-specific type strings.
///
/// Implement this trait for each target language to provide type mappings.
pub trait TypeMapper {
    /// Map a primitive type to a language-specific type string
    fn map_primitive(&self, ty: PrimitiveType) -> &'static str;

    /// Map a raw source type name through the primitive alias table
    fn map_source(&self, token: &str) -> &'static str {
        self.map_primitive(PrimitiveType::from_source(token))
    }
}
