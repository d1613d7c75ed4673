//! Built-in pipeline phases.
//!
//! - [`LowerPhase`] - builds descriptors from the schema
//! - [`FlattenPhase`] - flattens class inheritance
//! - [`LinkPhase`] - checks references against the name table
//! - [`ValidatePhase`] - runs lints over the model
//! - [`AnalyzePhase`] - computes data shared by emitters

mod analyze;
mod flatten;
mod link;
mod lower;
mod validate;

pub use analyze::AnalyzePhase;
pub use flatten::FlattenPhase;
pub use link::LinkPhase;
pub use lower::LowerPhase;
pub use validate::{
    AliasedScalarLint, DuplicateNameLint, Lint, LintInfo, UndefinedTypeLint, ValidatePhase,
};
