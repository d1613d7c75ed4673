//! Core utilities and types for the vkgen API client generator.
//!
//! This crate provides identifier handling and output writing shared by
//! every other vkgen crate.

mod file;
mod naming;
mod title;
mod utils;

// File operations
pub use file::{File, GENERATED_HEADER, GeneratedFile, replace_dir, staging_dir};
// Naming
pub use naming::{NamingConvention, RUST_NAMING, RUST_NAMING_SUFFIXED};
pub use title::NamingTitle;
// String utilities
pub use utils::{split_words, to_pascal_case, to_snake_case};
