//! Built-in lints for model validation.

mod aliased_scalar;
mod duplicate_name;
mod undefined_type;

pub use aliased_scalar::AliasedScalarLint;
pub use duplicate_name::DuplicateNameLint;
pub use undefined_type::UndefinedTypeLint;
