//! Line buffer for generating indented code.

use super::{CodeFragment, Renderable};

/// One level of indentation in generated files.
pub const INDENT: &str = "    ";

/// Mutable buffer that emits lines at the current indentation level.
///
/// # Example
///
/// ```
/// use tsmirror_codegen::builder::CodeBuilder;
///
/// let mut builder = CodeBuilder::new();
/// builder
///     .push_line("export interface Part {")
///     .push_indent()
///     .push_line("name: string;")
///     .push_dedent()
///     .push_line("}");
/// assert_eq!(builder.build(), "export interface Part {\n    name: string;\n}\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CodeBuilder {
    indent_level: usize,
    buffer: String,
}

impl CodeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a line of code with current indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        for _ in 0..self.indent_level {
            self.buffer.push_str(INDENT);
        }
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line (no indentation).
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Increase indentation level.
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Emit a Renderable node.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(&fragment);
        }
        self
    }

    /// Apply a single code fragment.
    pub fn apply_fragment(&mut self, fragment: &CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(s);
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(header);
                self.push_indent();
                for f in body {
                    self.apply_fragment(f);
                }
                self.push_dedent();
                self.push_line(close);
            }
        }
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_line_has_no_indent() {
        let mut builder = CodeBuilder::new();
        builder
            .push_line("export interface Car {")
            .push_indent()
            .push_blank()
            .push_dedent()
            .push_line("}");

        assert_eq!(builder.build(), "export interface Car {\n\n}\n");
    }

    #[test]
    fn test_dedent_saturates() {
        let mut builder = CodeBuilder::new();
        builder.push_dedent().push_line("x");
        assert_eq!(builder.build(), "x\n");
    }

    #[test]
    fn test_emit_nested_blocks() {
        struct Nested;
        impl Renderable for Nested {
            fn to_fragments(&self) -> Vec<CodeFragment> {
                vec![CodeFragment::block(
                    "export enum Outer {",
                    vec![
                        CodeFragment::line("a,"),
                        CodeFragment::block("{", vec![CodeFragment::line("b,")], "}"),
                    ],
                    "}",
                )]
            }
        }

        let mut builder = CodeBuilder::new();
        builder.emit(&Nested);
        assert_eq!(
            builder.build(),
            "export enum Outer {\n    a,\n    {\n        b,\n    }\n}\n"
        );
    }
}
