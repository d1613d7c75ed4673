use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use vkgen_schema::CONFIG_FILE;

use super::{load_config, load_schema};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to vkgen.toml (defaults are used when it does not exist)
    #[arg(short, long, default_value = CONFIG_FILE)]
    pub config: PathBuf,

    /// Combined schema document (overrides [schema])
    #[arg(short, long)]
    pub schema: Option<PathBuf>,

    /// Output directory (overrides [output] dir)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Emit blocking call-sites instead of async ones
    #[arg(long)]
    pub blocking: bool,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Write a JSON snapshot of the model after every pipeline phase
    #[arg(long)]
    pub visualize: bool,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let mut config = load_config(&self.config, self.schema.as_deref(), self.output.as_deref());
        if self.blocking {
            config.output.is_async = false;
        }
        let schema = load_schema(&config);

        let report = ops::generate(
            schema,
            &config,
            ops::generate::GenerateOptions {
                dry_run: self.dry_run,
                visualize: self.visualize,
            },
        )?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
