//! Report data structures for commands.
//!
//! Commands build reports, then render them to an Output target.

mod check;
mod generate;
mod list;
mod output;

pub use check::{CheckReport, ComponentStats};
pub use generate::{GenerateReport, GenerationResult, PreviewResult, WrittenResult};
pub use list::{ComponentSummary, ListReport};
pub use output::{Report, TerminalOutput};
