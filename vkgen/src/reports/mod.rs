//! Report data structures for commands.
//!
//! Operations build reports, then commands render them to an output target.

mod check;
mod clean;
mod diagnostics;
mod generate;
mod output;
mod summary;

pub use check::CheckReport;
pub use clean::CleanReport;
pub use generate::{GenerateReport, GenerationResult, PreviewResult, WrittenResult};
pub use output::{Report, TerminalOutput};
pub use summary::ModelSummary;
