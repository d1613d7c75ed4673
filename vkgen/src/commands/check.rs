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
pub struct CheckCommand {
    /// Path to vkgen.toml (defaults are used when it does not exist)
    #[arg(short, long, default_value = CONFIG_FILE)]
    pub config: PathBuf,

    /// Combined schema document (overrides [schema])
    #[arg(short, long)]
    pub schema: Option<PathBuf>,
}

impl CheckCommand {
    pub fn run(&self) -> Result<()> {
        let config = load_config(&self.config, self.schema.as_deref(), None);
        let schema = load_schema(&config);

        let report = ops::check(schema)?;
        report.render(&mut TerminalOutput::new());

        if !report.is_valid() {
            std::process::exit(1);
        }
        Ok(())
    }
}
