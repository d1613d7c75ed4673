//! Clean command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from removing generated output.
#[derive(Debug)]
pub struct CleanReport {
    /// Whether this was a dry run.
    pub dry_run: bool,
    /// Directories removed (or that would be removed).
    pub removed: Vec<PathBuf>,
    /// Directories left alone because vkgen did not write them.
    pub skipped: Vec<PathBuf>,
}

impl Report for CleanReport {
    fn render(&self, out: &mut dyn Output) {
        if self.removed.is_empty() && self.skipped.is_empty() {
            out.preformatted("Nothing to clean.");
            return;
        }

        if !self.removed.is_empty() {
            out.section(if self.dry_run { "Would delete" } else { "Deleted" });
            for path in &self.removed {
                out.removed_item(&path.display().to_string());
            }
        }

        if !self.skipped.is_empty() {
            out.newline();
            out.section("Skipped (not generated by vkgen)");
            for path in &self.skipped {
                out.list_item(&format!("! {}", path.display()));
            }
        }
    }
}
