//! TypeScript declaration generator.

use std::path::Path;

use eyre::Result;
use tsmirror_codegen::{GenerateResult, GeneratedFile, LanguageCodegen};
use tsmirror_core::File;
use tsmirror_ir::Unit;

use crate::renderer::{RenderOptions, output_path, render_unit};

/// File extension of generated declaration files.
pub const FILE_EXTENSION: &str = "ts";

/// TypeScript generator producing one declaration file per linked unit.
pub struct Generator {
    units: Vec<Unit>,
    options: RenderOptions,
}

impl LanguageCodegen for Generator {
    fn preview(&self) -> Vec<GeneratedFile> {
        self.units
            .iter()
            .map(|unit| GeneratedFile {
                path: output_path(unit),
                content: render_unit(unit, &self.options),
            })
            .collect()
    }

    fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        // Render everything first so a write only starts once all output exists
        let files = self.preview();
        let mut result = GenerateResult::default();

        for file in files {
            let path = output_dir.join(&file.path);
            File::new(&path, file.content).write()?;
            tracing::info!(path = %path.display(), "wrote");
            result.written.push(path);
        }

        Ok(result)
    }
}

impl Generator {
    /// Create a generator over linked units.
    pub fn new(units: Vec<Unit>) -> Self {
        Self {
            units,
            options: RenderOptions::default(),
        }
    }

    /// Enable or disable the banner comment.
    pub fn with_banner(mut self, banner: bool) -> Self {
        self.options.banner = banner;
        self
    }
}
