mod check;
mod clean;
mod generate;

use std::path::Path;

use check::CheckCommand;
use clap::{Parser, Subcommand};
use clean::CleanCommand;
use eyre::Result;
use generate::GenerateCommand;
use vkgen_schema::{Config, Schema, SchemaConfig};

/// Extension trait for exiting on schema and config errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for vkgen_schema::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "vkgen")]
#[command(version)]
#[command(about = "Generate a typed Rust client from the VK API schema")]
pub(crate) struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Clean(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the client into the output directory, replacing it
    Generate(GenerateCommand),

    /// Run the pipeline and report diagnostics without writing anything
    Check(CheckCommand),

    /// Remove the generated output directory
    Clean(CleanCommand),
}

/// Read `vkgen.toml` (or defaults when it is absent) and apply flag overrides.
fn load_config(path: &Path, schema: Option<&Path>, output: Option<&Path>) -> Config {
    let mut config = Config::open_or_default(path).unwrap_or_exit();
    if let Some(schema) = schema {
        config.schema = SchemaConfig {
            path: Some(schema.to_path_buf()),
            ..SchemaConfig::default()
        };
    }
    if let Some(output) = output {
        config.output.dir = output.to_path_buf();
    }
    config
}

fn load_schema(config: &Config) -> Schema {
    let source = config.schema.source().unwrap_or_exit();
    Schema::load(&source).unwrap_or_exit()
}
