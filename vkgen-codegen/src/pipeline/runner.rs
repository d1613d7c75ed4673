//! Pipeline orchestrator.

use eyre::Result;
use tracing::debug;
use vkgen_schema::Schema;

use super::{
    CompilationContext, Phase, Plugin,
    phases::{AnalyzePhase, FlattenPhase, LinkPhase, LowerPhase, ValidatePhase},
};

/// Runs the compilation phases over a schema.
///
/// Built-in phases run first, in a fixed order, followed by any phases added
/// with [`Pipeline::phase`]. Plugins are called before and after each one.
///
/// # Example
///
/// ```ignore
/// let ctx = Pipeline::new()
///     .plugin(SnapshotPlugin::with_output_dir(".vkgen/debug"))
///     .run(schema)?;
/// ```
pub struct Pipeline {
    validate: ValidatePhase,
    phases: Vec<Box<dyn Phase>>,
    plugins: Vec<Box<dyn Plugin>>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self {
            validate: ValidatePhase::new(),
            phases: Vec::new(),
            plugins: Vec::new(),
        }
    }

    /// Replace the built-in validate phase, e.g. to change its lints.
    pub fn validate(mut self, validate: ValidatePhase) -> Self {
        self.validate = validate;
        self
    }

    /// Add a phase to run after the built-in phases.
    pub fn phase(mut self, phase: impl Phase + 'static) -> Self {
        self.phases.push(Box::new(phase));
        self
    }

    /// Add a plugin to receive phase lifecycle hooks.
    pub fn plugin(mut self, plugin: impl Plugin + 'static) -> Self {
        self.plugins.push(Box::new(plugin));
        self
    }

    /// Run every phase over `schema`.
    ///
    /// Order: lower, flatten, link, validate, analyze, then custom phases.
    /// Schema anomalies end up as diagnostics on the returned context; only
    /// a fatal phase or plugin failure returns an error.
    pub fn run(&self, schema: Schema) -> Result<CompilationContext> {
        let mut ctx = CompilationContext::new(schema);

        let builtin: [&dyn Phase; 5] = [
            &LowerPhase,
            &FlattenPhase,
            &LinkPhase,
            &self.validate,
            &AnalyzePhase,
        ];
        for phase in builtin {
            self.run_phase(phase, &mut ctx)?;
        }
        for phase in &self.phases {
            self.run_phase(phase.as_ref(), &mut ctx)?;
        }

        Ok(ctx)
    }

    fn run_phase(&self, phase: &dyn Phase, ctx: &mut CompilationContext) -> Result<()> {
        let name = phase.name();

        for plugin in &self.plugins {
            plugin.on_before_phase(name, ctx)?;
        }

        let before = ctx.diagnostics.len();
        phase.run(ctx)?;
        debug!(
            phase = name,
            diagnostics = ctx.diagnostics.len() - before,
            "{}",
            phase.description()
        );

        for plugin in &self.plugins {
            plugin.on_after_phase(name, ctx)?;
        }

        Ok(())
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    };

    use serde_json::json;

    use super::*;
    use crate::testing::{sample_schema, schema};

    struct CountingPlugin {
        before: Arc<AtomicUsize>,
        after: Arc<AtomicUsize>,
    }

    impl Plugin for CountingPlugin {
        fn name(&self) -> &'static str {
            "counting"
        }

        fn on_before_phase(&self, _phase: &str, _ctx: &mut CompilationContext) -> Result<()> {
            self.before.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        fn on_after_phase(&self, _phase: &str, _ctx: &mut CompilationContext) -> Result<()> {
            self.after.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    struct OrderPlugin(Arc<Mutex<Vec<String>>>);

    impl Plugin for OrderPlugin {
        fn name(&self) -> &'static str {
            "order"
        }

        fn on_after_phase(&self, phase: &str, _ctx: &mut CompilationContext) -> Result<()> {
            self.0.lock().unwrap().push(phase.to_string());
            Ok(())
        }
    }

    struct MarkerPhase;

    impl Phase for MarkerPhase {
        fn name(&self) -> &'static str {
            "marker"
        }

        fn description(&self) -> &'static str {
            "Add a marker diagnostic"
        }

        fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
            ctx.add_info("marker", "custom phase ran");
            Ok(())
        }
    }

    #[test]
    fn test_pipeline_populates_context() {
        let ctx = Pipeline::new().run(sample_schema()).unwrap();

        let model = ctx.model.as_ref().unwrap();
        assert!(model.classes.iter().all(|c| c.is_flattened));
        assert!(ctx.computed.is_some());
        assert!(!ctx.has_errors());
    }

    #[test]
    fn test_child_inherits_from_kept_declaration() {
        let ctx = Pipeline::new()
            .run(schema(json!({
                "objects": {
                    "base_thing": {"type": "object", "properties": {"first_prop": {"type": "integer"}}},
                    "base_child": {"allOf": [
                        {"$ref": "#/definitions/base_thing"},
                        {"properties": {"own": {"type": "string"}}}
                    ]}
                },
                "responses": {
                    "base_thing": {"type": "object", "properties": {"second_prop": {"type": "integer"}}}
                }
            })))
            .unwrap();

        let model = ctx.model.as_ref().unwrap();
        let props = |name: &str| -> Vec<String> {
            model
                .class(name)
                .unwrap()
                .properties
                .iter()
                .map(|p| p.name.wire().to_string())
                .collect()
        };
        assert_eq!(model.classes.len(), 2);
        assert_eq!(props("base_thing"), ["first_prop"]);
        assert_eq!(props("base_child"), ["first_prop", "own"]);
        assert!(ctx
            .warnings()
            .any(|d| d.message.contains("duplicate type 'base_thing'")));
    }

    #[test]
    fn test_pipeline_plugin_hooks() {
        let before = Arc::new(AtomicUsize::new(0));
        let after = Arc::new(AtomicUsize::new(0));
        let plugin = CountingPlugin {
            before: before.clone(),
            after: after.clone(),
        };

        Pipeline::new().plugin(plugin).run(sample_schema()).unwrap();

        assert_eq!(before.load(Ordering::SeqCst), 5);
        assert_eq!(after.load(Ordering::SeqCst), 5);
    }

    #[test]
    fn test_phase_order_with_custom_phase() {
        let order = Arc::new(Mutex::new(Vec::new()));
        let ctx = Pipeline::new()
            .plugin(OrderPlugin(order.clone()))
            .phase(MarkerPhase)
            .run(sample_schema())
            .unwrap();

        assert_eq!(
            *order.lock().unwrap(),
            ["lower", "flatten", "link", "validate", "analyze", "marker"]
        );
        assert!(ctx.diagnostics.iter().any(|d| d.message == "custom phase ran"));
    }
}
