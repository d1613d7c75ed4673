//! Resolved type references.

use std::fmt;

use serde::Serialize;

/// Primitive kinds a schema type tag can resolve to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScalarKind {
    Int,
    Bool,
    Double,
    String,
    /// Free-form JSON (`"type": "object"` without properties).
    Any,
}

impl ScalarKind {
    /// Get the lowercase string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ScalarKind::Int => "int",
            ScalarKind::Bool => "bool",
            ScalarKind::Double => "double",
            ScalarKind::String => "string",
            ScalarKind::Any => "object",
        }
    }
}

/// A scalar type, remembering the schema tag it was aliased from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ScalarType {
    pub kind: ScalarKind,
    /// Set when the alias table rewrote the tag (e.g. `"integer"` -> int).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aliased_from: Option<String>,
}

/// A classified schema type node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum TypeReference {
    Scalar(ScalarType),
    ArrayOf(Box<TypeReference>),
    /// A named class, enum or alias; checked against the name table later.
    Reference(String),
    /// A node the resolver could not classify, carrying its raw shape.
    Undefined(String),
}

impl TypeReference {
    /// A scalar taken verbatim from the schema.
    pub fn scalar(kind: ScalarKind) -> Self {
        TypeReference::Scalar(ScalarType {
            kind,
            aliased_from: None,
        })
    }

    /// A scalar produced by the alias table.
    pub fn aliased(kind: ScalarKind, from: impl Into<String>) -> Self {
        TypeReference::Scalar(ScalarType {
            kind,
            aliased_from: Some(from.into()),
        })
    }

    /// An array of `inner`.
    pub fn array(inner: TypeReference) -> Self {
        TypeReference::ArrayOf(Box::new(inner))
    }

    /// The fallback for anything unclassifiable.
    pub fn undefined() -> Self {
        TypeReference::Undefined("object".to_string())
    }

    /// Whether this is an `int`, `bool` or `double` scalar.
    ///
    /// These are the kinds made optional at call-sites regardless of the
    /// schema's required flag.
    pub fn is_nullable_scalar(&self) -> bool {
        matches!(
            self,
            TypeReference::Scalar(ScalarType {
                kind: ScalarKind::Int | ScalarKind::Bool | ScalarKind::Double,
                ..
            })
        )
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, TypeReference::Undefined(_))
    }

    /// The named entity this type points at, looking through arrays.
    pub fn referenced_name(&self) -> Option<&str> {
        match self {
            TypeReference::Reference(name) => Some(name),
            TypeReference::ArrayOf(inner) => inner.referenced_name(),
            _ => None,
        }
    }
}

impl fmt::Display for TypeReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeReference::Scalar(scalar) => f.write_str(scalar.kind.as_str()),
            TypeReference::ArrayOf(inner) => write!(f, "array<{}>", inner),
            TypeReference::Reference(name) => f.write_str(name),
            TypeReference::Undefined(raw) => write!(f, "undefined({})", raw),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let ty = TypeReference::array(TypeReference::Reference("users_user".into()));
        assert_eq!(ty.to_string(), "array<users_user>");
        assert_eq!(TypeReference::undefined().to_string(), "undefined(object)");
        assert_eq!(
            TypeReference::aliased(ScalarKind::Int, "integer").to_string(),
            "int"
        );
    }

    #[test]
    fn test_nullable_scalars() {
        assert!(TypeReference::scalar(ScalarKind::Int).is_nullable_scalar());
        assert!(TypeReference::scalar(ScalarKind::Bool).is_nullable_scalar());
        assert!(TypeReference::scalar(ScalarKind::Double).is_nullable_scalar());
        assert!(!TypeReference::scalar(ScalarKind::String).is_nullable_scalar());
        assert!(!TypeReference::Reference("x".into()).is_nullable_scalar());
    }

    #[test]
    fn test_referenced_name_through_arrays() {
        let ty = TypeReference::array(TypeReference::array(TypeReference::Reference(
            "photos_photo".into(),
        )));
        assert_eq!(ty.referenced_name(), Some("photos_photo"));
        assert_eq!(TypeReference::undefined().referenced_name(), None);
    }
}
