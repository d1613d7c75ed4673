//! Code generation building blocks.
//!
//! - [`CodeBuilder`] - indented line writer with a fluent API
//! - [`CodeFragment`] - intermediate representation for code pieces
//! - [`Renderable`] - types that can be turned into fragments
//! - [`Indent`] - indentation configuration

mod code_builder;
mod indent;
mod renderable;

pub use code_builder::CodeBuilder;
pub use indent::Indent;
pub use renderable::{CodeFragment, Renderable};
