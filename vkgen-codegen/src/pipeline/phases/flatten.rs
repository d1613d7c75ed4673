//! Flatten phase - copies inherited properties into every class.

use eyre::{Result, bail};

use crate::{
    flatten::flatten,
    pipeline::{CompilationContext, Phase},
};

/// Phase that flattens class inheritance in place.
pub struct FlattenPhase;

impl Phase for FlattenPhase {
    fn name(&self) -> &'static str {
        "flatten"
    }

    fn description(&self) -> &'static str {
        "Copy inherited properties into every class"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let CompilationContext {
            model, diagnostics, ..
        } = ctx;
        let Some(model) = model.as_mut() else {
            bail!("descriptor model not built - did the lower phase run?");
        };
        flatten(&mut model.classes, diagnostics);
        Ok(())
    }
}
