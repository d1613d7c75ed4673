use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use vkgen_schema::CONFIG_FILE;

use super::load_config;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CleanCommand {
    /// Path to vkgen.toml (defaults are used when it does not exist)
    #[arg(short, long, default_value = CONFIG_FILE)]
    pub config: PathBuf,

    /// Output directory (overrides [output] dir)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Preview what would be deleted without actually deleting
    #[arg(long)]
    pub dry_run: bool,
}

impl CleanCommand {
    pub fn run(&self) -> Result<()> {
        let config = load_config(&self.config, None, self.output.as_deref());

        let report = ops::clean(ops::clean::CleanOptions {
            output_dir: &config.output.dir,
            dry_run: self.dry_run,
        })?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
