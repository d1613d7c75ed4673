//! Per-phase snapshots of the pipeline state, written by `--visualize`.

use std::{
    fs,
    path::{Path, PathBuf},
    sync::{Mutex, PoisonError},
};

use eyre::{Result, WrapErr};
use serde::Serialize;
use tracing::debug;
use vkgen_ir::ApiModel;

use super::{CompilationContext, Diagnostic, Plugin};
use crate::ComputedData;

/// The pipeline state after one phase.
#[derive(Debug, Clone, Serialize)]
pub struct PhaseSnapshot {
    pub phase: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<ApiModel>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub computed: Option<ComputedData>,

    /// Diagnostics collected so far.
    pub diagnostics: Vec<Diagnostic>,
}

/// A plugin that records the model and diagnostics after every phase.
///
/// With an output directory configured, each snapshot is also written as
/// `<dir>/<phase>.json` as soon as the phase completes.
#[derive(Default)]
pub struct SnapshotPlugin {
    snapshots: Mutex<Vec<PhaseSnapshot>>,
    output_dir: Option<PathBuf>,
}

impl SnapshotPlugin {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_output_dir(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            snapshots: Mutex::default(),
            output_dir: Some(output_dir.into()),
        }
    }

    /// All snapshots captured so far, in phase order.
    pub fn snapshots(&self) -> Vec<PhaseSnapshot> {
        self.snapshots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

fn write_snapshot(dir: &Path, snapshot: &PhaseSnapshot) -> Result<()> {
    fs::create_dir_all(dir)
        .wrap_err_with(|| format!("failed to create {}", dir.display()))?;
    let path = dir.join(format!("{}.json", snapshot.phase));
    let json = serde_json::to_string_pretty(snapshot)?;
    fs::write(&path, json).wrap_err_with(|| format!("failed to write {}", path.display()))?;
    debug!(path = %path.display(), "wrote phase snapshot");
    Ok(())
}

impl Plugin for SnapshotPlugin {
    fn name(&self) -> &'static str {
        "snapshot"
    }

    fn on_after_phase(&self, phase: &str, ctx: &mut CompilationContext) -> Result<()> {
        let snapshot = PhaseSnapshot {
            phase: phase.to_string(),
            model: ctx.model.clone(),
            computed: ctx.computed.clone(),
            diagnostics: ctx.diagnostics.clone(),
        };

        if let Some(dir) = &self.output_dir {
            write_snapshot(dir, &snapshot)?;
        }

        self.snapshots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(snapshot);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::{pipeline::Pipeline, testing::sample_schema};

    #[test]
    fn test_snapshot_captures_each_phase() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("debug");

        let pipeline = Pipeline::new().plugin(SnapshotPlugin::with_output_dir(&dir));
        pipeline.run(sample_schema()).unwrap();

        for phase in ["lower", "flatten", "link", "validate", "analyze"] {
            assert!(dir.join(format!("{phase}.json")).exists(), "{phase}.json");
        }

        let analyze: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(dir.join("analyze.json")).unwrap()).unwrap();
        assert!(analyze.get("computed").is_some());

        let lower: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(dir.join("lower.json")).unwrap()).unwrap();
        assert!(lower.get("computed").is_none());
        assert!(lower["model"]["classes"].is_array());
    }

    #[test]
    fn test_snapshots_in_memory() {
        let plugin = SnapshotPlugin::new();
        let mut ctx = CompilationContext::new(Default::default());
        plugin.on_after_phase("lower", &mut ctx).unwrap();

        let snapshots = plugin.snapshots();
        assert_eq!(snapshots.len(), 1);
        assert_eq!(snapshots[0].phase, "lower");
        assert!(snapshots[0].model.is_none());
    }
}
