//! Wire names paired with their canonical identifier form.

use std::fmt;

use serde::Serialize;

use crate::{NamingConvention, split_words};

/// A schema identifier as it travels over the wire, together with its
/// canonical word form.
///
/// The wire string is stored once and never altered; every rendering is
/// derived from the canonical form, which is lower-case words joined by
/// `_` and therefore stable under repeated derivation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct NamingTitle {
    wire: String,
    canonical: String,
}

impl NamingTitle {
    /// Create a title from a raw wire name.
    pub fn new(wire: impl Into<String>) -> Self {
        let wire = wire.into();
        let canonical = split_words(&wire).join("_");
        Self { wire, canonical }
    }

    /// The original wire name, byte for byte.
    pub fn wire(&self) -> &str {
        &self.wire
    }

    /// The canonical word form (e.g., "canAccessClosed" -> "can_access_closed").
    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    /// Identifier for a type declaration.
    pub fn type_name(&self, naming: &NamingConvention) -> String {
        naming.type_name(&self.canonical)
    }

    /// Identifier for a field, parameter or function.
    pub fn field_name(&self, naming: &NamingConvention) -> String {
        naming.field_name(&self.canonical)
    }

    /// Identifier for a `mod` declaration.
    pub fn module_name(&self, naming: &NamingConvention) -> String {
        naming.module_name(&self.canonical)
    }

    /// File stem for the unit declaring this title.
    pub fn file_name(&self, naming: &NamingConvention) -> String {
        naming.file_name(&self.canonical)
    }

    /// Type name decorated as a collection of this title.
    pub fn collection_type_name(&self, naming: &NamingConvention) -> String {
        naming.collection_name(&self.type_name(naming))
    }
}

impl fmt::Display for NamingTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.wire)
    }
}

impl From<&str> for NamingTitle {
    fn from(wire: &str) -> Self {
        Self::new(wire)
    }
}
