//! Staged conversion pipeline.
//!
//! This module provides a [`Pipeline`] orchestrator that runs the
//! conversion phases over the whole set of discovered source units:
//!
//! - `parse` - every source unit becomes a [`Unit`](tsmirror_ir::Unit)
//! - `link` - type names are resolved against the complete unit set
//!
//! Every unit is parsed before any unit is linked, since a type may be
//! referenced before the file declaring it is discovered.
//!
//! # Example
//!
//! ```ignore
//! use tsmirror_codegen::pipeline::Pipeline;
//!
//! let sources = tsmirror_source::discover(Path::new("Models"))?;
//! let ctx = Pipeline::new().run(sources)?;
//!
//! for diag in &ctx.diagnostics {
//!     eprintln!("{diag}");
//! }
//! ```

mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod runner;

pub use context::CompilationContext;
pub use diagnostic::{Diagnostic, Severity};
pub use phase::Phase;
pub use runner::Pipeline;
