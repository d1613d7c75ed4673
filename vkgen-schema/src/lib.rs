//! Input model for the vkgen generator: the API schema documents and the
//! `vkgen.toml` configuration that points at them.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod error;
mod schema;

pub use config::{
    CONFIG_FILE, Config, NamingConfig, OutputConfig, ReservedStyle, SchemaConfig,
};
pub use error::{Error, Result};
pub use schema::{Definition, MethodDef, ParameterDef, Schema, SchemaSource};
