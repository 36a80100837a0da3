//! CodeFile abstraction for structured TypeScript file generation.
//!
//! Provides a high-level API for generating TypeScript files with an
//! optional banner comment, organized imports and body content.

use tsmirror_codegen::{CodeBuilder, CodeFragment, Renderable};

use crate::ast::Import;

/// A structured representation of a TypeScript file.
///
/// Organizes code into three sections: banner, imports and body. Each
/// section is rendered in order, separated by a blank line.
///
/// # Example
///
/// ```
/// use tsmirror_codegen_typescript::{CodeFile, ast::{Import, Interface}};
///
/// let code = CodeFile::new()
///     .banner("/* Auto Generated */")
///     .imports([Import::new("Vehicle", "./vehicle")])
///     .add(Interface::new("Car").extends("Vehicle"))
///     .render();
///
/// assert_eq!(
///     code,
///     "/* Auto Generated */\n\nimport { Vehicle } from \"./vehicle\";\n\nexport interface Car extends Vehicle {\n}\n"
/// );
/// ```
#[derive(Default)]
pub struct CodeFile {
    banner: Option<String>,
    imports: Vec<Import>,
    body: Vec<Vec<CodeFragment>>,
}

impl CodeFile {
    /// Create a new empty CodeFile.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the comment line rendered at the top of the file.
    pub fn banner(mut self, banner: impl Into<String>) -> Self {
        self.banner = Some(banner.into());
        self
    }

    /// Add imports from an iterator.
    pub fn imports(mut self, imports: impl IntoIterator<Item = Import>) -> Self {
        self.imports.extend(imports);
        self
    }

    /// Add a body element (any Renderable).
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.body.push(node.to_fragments());
        self
    }

    /// Render the file with four-space indentation.
    pub fn render(&self) -> String {
        let mut builder = CodeBuilder::new();

        // 1. Banner, always followed by a blank line
        if let Some(banner) = &self.banner {
            builder.push_line(banner).push_blank();
        }

        // 2. Imports
        for import in &self.imports {
            builder.emit(import);
        }

        // 3. Blank line between imports and body
        if !self.imports.is_empty() && !self.body.is_empty() {
            builder.push_blank();
        }

        // 4. Body with blank lines between elements
        for (i, fragments) in self.body.iter().enumerate() {
            if i > 0 {
                builder.push_blank();
            }
            for fragment in fragments {
                builder.apply_fragment(fragment);
            }
        }

        builder.build()
    }
}
