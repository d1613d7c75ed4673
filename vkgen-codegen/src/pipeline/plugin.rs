//! Pipeline plugin trait.

use eyre::Result;

use super::CompilationContext;

/// A hook into the compilation pipeline.
///
/// Plugins are called around every phase, built-in or custom, and may
/// inspect or modify the context. Returning an error aborts the pipeline.
pub trait Plugin: Send + Sync {
    /// The name of this plugin.
    fn name(&self) -> &'static str;

    /// Called before a phase runs.
    #[allow(unused_variables)]
    fn on_before_phase(&self, phase: &str, ctx: &mut CompilationContext) -> Result<()> {
        Ok(())
    }

    /// Called after a phase completes successfully.
    #[allow(unused_variables)]
    fn on_after_phase(&self, phase: &str, ctx: &mut CompilationContext) -> Result<()> {
        Ok(())
    }
}
