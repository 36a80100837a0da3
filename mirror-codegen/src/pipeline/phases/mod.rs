//! Built-in pipeline phases.

mod link;
mod parse;

pub use link::LinkPhase;
pub use parse::ParsePhase;
