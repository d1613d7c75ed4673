//! Generate operation - schema to Rust client.

use std::path::{Path, PathBuf};

use eyre::{Context, Result};
use tracing::info;
use vkgen_codegen::pipeline::{Pipeline, SnapshotPlugin};
use vkgen_codegen_rust::{Generator, LanguageCodegen, RustOptions};
use vkgen_schema::{Config, Schema};

use super::summarize;
use crate::reports::{GenerateReport, GenerationResult, PreviewResult, WrittenResult};

/// Options for the generate operation.
pub struct GenerateOptions {
    /// Whether to preview without writing files.
    pub dry_run: bool,
    /// Whether to write per-phase snapshots.
    pub visualize: bool,
}

/// Execute the generate operation.
///
/// Runs the pipeline on the schema and replaces the configured output
/// directory with the rendered client. Diagnostics never stop generation.
pub fn generate(schema: Schema, config: &Config, opts: GenerateOptions) -> Result<GenerateReport> {
    let output_dir = config.output.dir.as_path();
    let debug_dir = debug_dir(output_dir);

    let mut pipeline = Pipeline::new();
    if opts.visualize {
        pipeline = pipeline.plugin(SnapshotPlugin::with_output_dir(&debug_dir));
    }
    let mut ctx = pipeline.run(schema).wrap_err("Pipeline failed")?;

    let summary = summarize(&ctx)?;
    let diagnostics = std::mem::take(&mut ctx.diagnostics);

    let options = RustOptions::from_config(&config.output, &config.naming);
    let generator = Generator::from_context(&mut ctx, options)?;

    let result = if opts.dry_run {
        GenerationResult::Preview(PreviewResult {
            files: generator.preview(),
        })
    } else {
        let generated = generator
            .generate(output_dir)
            .wrap_err("Failed to generate code")?;
        info!(
            dir = %output_dir.display(),
            files = generated.files.len(),
            diagnostics = diagnostics.len(),
            "generated client"
        );

        GenerationResult::Written(WrittenResult {
            output_dir: generated.output_dir,
            files: generated.files.len(),
            debug_dir: opts.visualize.then_some(debug_dir),
        })
    };

    Ok(GenerateReport {
        diagnostics,
        summary,
        result,
    })
}

/// Snapshots live next to the output directory, which is replaced wholesale.
fn debug_dir(output_dir: &Path) -> PathBuf {
    output_dir
        .parent()
        .unwrap_or_else(|| Path::new(""))
        .join(".vkgen")
        .join("debug")
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;
    use vkgen_codegen::testing::sample_schema;

    use super::*;

    fn config(dir: &Path) -> Config {
        let mut config = Config::default();
        config.output.dir = dir.join("api");
        config
    }

    #[test]
    fn test_generate_writes_output() {
        let temp = TempDir::new().unwrap();
        let config = config(temp.path());

        let report = generate(
            sample_schema(),
            &config,
            GenerateOptions {
                dry_run: false,
                visualize: false,
            },
        )
        .unwrap();

        let GenerationResult::Written(written) = report.result else {
            panic!("expected written output");
        };
        assert_eq!(written.output_dir, temp.path().join("api"));
        assert!(written.files > 0);
        assert!(written.debug_dir.is_none());
        assert!(temp.path().join("api/mod.rs").exists());
        assert!(temp.path().join("api/methods/friends.rs").exists());

        assert_eq!(report.summary.methods, 3);
        assert_eq!(report.summary.scopes, 2);
        assert_eq!(report.summary.boxed_fields, 1);
        // the `counters` union
        assert!(report.diagnostics.iter().any(|d| d.message.contains("type union")));
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let config = config(temp.path());

        let report = generate(
            sample_schema(),
            &config,
            GenerateOptions {
                dry_run: true,
                visualize: false,
            },
        )
        .unwrap();

        let GenerationResult::Preview(preview) = report.result else {
            panic!("expected a preview");
        };
        assert!(preview.files.iter().any(|f| f.path == "methods/mod.rs"));
        assert!(!temp.path().join("api").exists());
    }

    #[test]
    fn test_visualize_writes_snapshots_outside_output() {
        let temp = TempDir::new().unwrap();
        let config = config(temp.path());

        let report = generate(
            sample_schema(),
            &config,
            GenerateOptions {
                dry_run: false,
                visualize: true,
            },
        )
        .unwrap();

        let debug = temp.path().join(".vkgen/debug");
        assert!(debug.join("lower.json").exists());
        assert!(debug.join("analyze.json").exists());
        let GenerationResult::Written(written) = report.result else {
            panic!("expected written output");
        };
        assert_eq!(written.debug_dir, Some(debug));
        assert!(fs::read_dir(temp.path().join("api")).is_ok());
    }

    #[test]
    fn test_regeneration_is_byte_identical() {
        let temp = TempDir::new().unwrap();
        let config = config(temp.path());
        let run = || {
            generate(
                sample_schema(),
                &config,
                GenerateOptions {
                    dry_run: false,
                    visualize: false,
                },
            )
            .unwrap();
            fs::read_to_string(temp.path().join("api/methods/friends.rs")).unwrap()
        };

        assert_eq!(run(), run());
    }
}
