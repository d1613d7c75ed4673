//! Analyze phase - computes data shared by emitters.

use eyre::Result;

use crate::{
    ComputedData,
    pipeline::{CompilationContext, Phase},
};

/// Phase that builds [`ComputedData`] from the finished model.
pub struct AnalyzePhase;

impl Phase for AnalyzePhase {
    fn name(&self) -> &'static str {
        "analyze"
    }

    fn description(&self) -> &'static str {
        "Compute the name table, scope grouping and boxed fields"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let computed = ComputedData::from_model(ctx.model_mut()?);
        ctx.computed = Some(computed);
        Ok(())
    }
}
