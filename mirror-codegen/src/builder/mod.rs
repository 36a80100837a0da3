//! Code generation building blocks.
//!
//! - [`CodeBuilder`] - indented line buffer that renders fragments
//! - [`CodeFragment`] - intermediate representation for code pieces
//! - [`Renderable`] - trait for types that can be converted to code fragments

mod code_builder;
mod renderable;

pub use code_builder::{CodeBuilder, INDENT};
pub use renderable::{CodeFragment, Renderable};
