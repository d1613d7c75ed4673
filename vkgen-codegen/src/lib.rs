//! Language-agnostic core of the vkgen generator.
//!
//! This crate turns a parsed API schema into a finalized descriptor model
//! and provides the abstractions language-specific emitters build on
//! (e.g., `vkgen-codegen-rust`).
//!
//! # Module Organization
//!
//! - [`resolve`] - TypeResolver: schema type nodes to [`TypeReference`](vkgen_ir::TypeReference)
//! - [`flatten`] - Inheritance flattening with cycle rejection
//! - [`pipeline`] - Phases, plugins and diagnostics (lower → flatten → link → validate → analyze)
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`language`] - Language-specific abstractions (LanguageCodegen, TypeMapper, etc.)
//! - [`testing`] - Sample schemas for tests (feature-gated)

pub mod builder;
mod computed;
pub mod flatten;
pub mod language;
pub mod pipeline;
pub mod resolve;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use builder::{CodeBuilder, CodeFragment, Indent, Renderable};
pub use computed::{BoxedField, ComputedData};
pub use language::{GenerateResult, LanguageCodegen, PreviewFile, TypeMapper};
pub use resolve::TypeResolver;
