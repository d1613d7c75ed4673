//! Compilation pipeline from parsed schema to finalized descriptor model.
//!
//! The [`Pipeline`] runs the built-in phases in order:
//!
//! - `lower` - builds descriptors from schema definitions and methods
//! - `flatten` - copies inherited properties into every class
//! - `link` - checks references against the name table
//! - `validate` - runs lints over the finished model
//! - `analyze` - computes data shared by emitters
//!
//! Plugins are notified before and after each phase. Every phase appends to
//! one diagnostics list on the [`CompilationContext`].
//!
//! # Example
//!
//! ```ignore
//! use vkgen_codegen::pipeline::Pipeline;
//!
//! let ctx = Pipeline::new().run(schema)?;
//! for diag in ctx.warnings() {
//!     eprintln!("{diag}");
//! }
//! ```

mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod plugin;
mod runner;
mod snapshot;

pub use context::CompilationContext;
pub use diagnostic::{Diagnostic, Severity};
pub use phase::Phase;
pub use plugin::Plugin;
pub use runner::Pipeline;
pub use snapshot::{PhaseSnapshot, SnapshotPlugin};
