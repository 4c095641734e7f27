//! Report data structures for commands.
//!
//! Commands collect data into reports, then render them to an [`Output`]
//! target, keeping data collection separate from formatting.

mod check;
mod output;

pub use check::CheckReport;
pub use output::{Output, Report, TerminalOutput};
