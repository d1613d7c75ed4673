//! Clean operation - remove generated output.

use std::{fs, path::Path};

use eyre::{Context, Result};
use tracing::debug;
use vkgen_core::{GENERATED_HEADER, staging_dir};

use crate::reports::CleanReport;

/// Options for the clean operation.
pub struct CleanOptions<'a> {
    /// Output directory to remove.
    pub output_dir: &'a Path,
    /// Whether to preview without deleting.
    pub dry_run: bool,
}

/// Execute the clean operation.
///
/// Removes the output directory if vkgen wrote it, together with any
/// staging directory an interrupted run left behind.
pub fn clean(opts: CleanOptions) -> Result<CleanReport> {
    let mut report = CleanReport {
        dry_run: opts.dry_run,
        removed: Vec::new(),
        skipped: Vec::new(),
    };

    let candidates = [
        Some(opts.output_dir.to_path_buf()),
        staging_dir(opts.output_dir),
    ];

    for dir in candidates.into_iter().flatten() {
        if !dir.is_dir() {
            continue;
        }
        if !is_generated(&dir) {
            report.skipped.push(dir);
            continue;
        }
        if !opts.dry_run {
            fs::remove_dir_all(&dir)
                .wrap_err_with(|| format!("failed to remove {}", dir.display()))?;
            debug!(dir = %dir.display(), "removed generated output");
        }
        report.removed.push(dir);
    }

    Ok(report)
}

/// A directory counts as generated when its root module carries the header.
fn is_generated(dir: &Path) -> bool {
    fs::read_to_string(dir.join("mod.rs"))
        .map(|content| content.starts_with(GENERATED_HEADER))
        .unwrap_or(false)
}
