//! TypeScript import builder.

use tsmirror_codegen::builder::{CodeFragment, Renderable};

/// A named import of one exported declaration.
///
/// Two imports are equal when they render to the same line, which is what
/// import deduplication keys on.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Import {
    name: String,
    from: String,
}

impl Import {
    pub fn new(name: impl Into<String>, from: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            from: from.into(),
        }
    }

    /// Render the import statement as a single line.
    pub fn to_line(&self) -> String {
        format!("import {{ {} }} from \"{}\";", self.name, self.from)
    }
}

impl Renderable for Import {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::line(self.to_line())]
    }
}
