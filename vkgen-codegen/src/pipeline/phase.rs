//! Pipeline phase trait.

use eyre::Result;

use super::CompilationContext;

/// A step of the compilation pipeline.
///
/// Phases run in order and mutate the shared [`CompilationContext`].
/// Problems with individual schema entities are recorded as diagnostics;
/// returning an error aborts the whole run.
pub trait Phase: Send + Sync {
    /// The name of this phase (used in diagnostics and plugin hooks).
    fn name(&self) -> &'static str;

    /// A human-readable description of what this phase does.
    fn description(&self) -> &'static str;

    /// Run this phase on the compilation context.
    fn run(&self, ctx: &mut CompilationContext) -> Result<()>;
}
