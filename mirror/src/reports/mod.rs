//! Report data structures for commands.
//!
//! This module provides data structures that separate data collection from rendering.
//! Commands build reports, then render them to an Output target.

mod check;
mod convert;
mod output;

pub use check::CheckReport;
pub use convert::{ConvertReport, ConvertResult, WrittenResult};
pub use output::{Report, TerminalOutput};
