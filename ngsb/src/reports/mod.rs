//! Report data structures for commands.
//!
//! Operations build reports, then render them to an Output target.

mod create;
mod output;

pub use create::{CreateReport, CreateResult, GenerateStep};
pub use output::{Output, Report, TerminalOutput};
