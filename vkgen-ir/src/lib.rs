//! Descriptor model for the vkgen generator.
//!
//! These types are the target-agnostic representation of an API schema,
//! sitting between parsing and emission:
//!
//! ```text
//! schema.json → vkgen-schema (parsing) → vkgen-ir (descriptors) → codegen
//! ```
//!
//! Every collection keeps declaration order so that emitting the same
//! model twice produces identical output.

mod descriptors;
mod model;
mod types;

pub use descriptors::{
    AliasDescriptor, Category, ClassDescriptor, EnumDescriptor, EnumMember, EnumRepr,
    MethodDescriptor, MethodParameterDescriptor, PropertyDescriptor,
};
pub use model::{ApiModel, NameTable, TypeEntry, TypeKind};
pub use types::{ScalarKind, ScalarType, TypeReference};
pub use vkgen_core::NamingTitle;
