//! Rust target of the vkgen generator.
//!
//! Renders a finalized [`ApiModel`](vkgen_ir::ApiModel) as a module tree of
//! serde data types and transport-backed method groups:
//!
//! ```text
//! mod.rs
//! objects/<scope>/<type>.rs      classes, enums, aliases
//! responses/<scope>/<type>.rs    unwrapped response envelopes
//! methods/<scope>.rs             one struct per scope, one fn per method
//! methods/mod.rs                 `Api` entry point
//! ```

mod encode;
mod generator;
mod naming;
mod rust_file;
mod symbols;
mod type_mapper;

pub mod ast;
pub mod files;

pub use ast::{Arm, Enum, Field, Fn, Impl, Match, Param, Struct, Variant};
pub use encode::{Encoder, Encoding};
pub use generator::{Generator, RustOptions};
pub use rust_file::{RawCode, RustFile, Use};
pub use symbols::{Symbol, SymbolTable};
pub use type_mapper::{JSON_VALUE, RustTypeMapper};
pub use vkgen_codegen::{GenerateResult, LanguageCodegen, PreviewFile};
