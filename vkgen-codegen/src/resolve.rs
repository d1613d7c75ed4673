//! Classification of raw schema type nodes.
//!
//! The schema's `type` field is weakly typed: it may be a string, a list of
//! strings, or absent in favour of `$ref` or `items`. [`TypeResolver`]
//! converts a node once into a [`TypeReference`] and records anything it
//! could not classify as a diagnostic. Resolution never fails.

use serde_json::{Map, Value};
use vkgen_ir::{ScalarKind, TypeReference};

use crate::pipeline::Diagnostic;

/// Phase name attached to resolver diagnostics.
const PHASE: &str = "lower";

/// Converts schema type nodes into [`TypeReference`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeResolver;

impl TypeResolver {
    /// Resolve `node`, appending a diagnostic located at `location` for every
    /// shape that degrades to [`TypeReference::Undefined`].
    pub fn resolve(
        &self,
        node: &Value,
        location: &str,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> TypeReference {
        let obj = match node {
            Value::Object(obj) => obj,
            Value::Array(_) => {
                return degenerate_array(location, diagnostics);
            }
            other => {
                diagnostics.push(
                    Diagnostic::warning(PHASE, format!("unrecognized type node `{}`", other))
                        .at(location),
                );
                return TypeReference::undefined();
            }
        };

        match obj.get("type") {
            None => self.resolve_untagged(obj, location, diagnostics),
            Some(Value::String(tag)) if tag == "array" => {
                self.resolve_array(obj, location, diagnostics)
            }
            Some(Value::String(tag)) => resolve_tag(tag, location, diagnostics),
            Some(Value::Array(union)) => {
                let members: Vec<String> = union
                    .iter()
                    .map(|t| t.as_str().map_or_else(|| t.to_string(), str::to_string))
                    .collect();
                diagnostics.push(
                    Diagnostic::warning(
                        PHASE,
                        format!("type union [{}] is not modelled", members.join(", ")),
                    )
                    .at(location),
                );
                TypeReference::undefined()
            }
            Some(other) => {
                diagnostics.push(
                    Diagnostic::warning(PHASE, format!("unrecognized type tag `{}`", other))
                        .at(location),
                );
                TypeReference::undefined()
            }
        }
    }

    /// A node without a `type` key: a reference, an implicit array, or nothing.
    fn resolve_untagged(
        &self,
        obj: &Map<String, Value>,
        location: &str,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> TypeReference {
        if let Some(pointer) = obj.get("$ref") {
            let target = pointer
                .as_str()
                .and_then(|p| p.rsplit('/').next())
                .filter(|name| !name.is_empty());
            return match target {
                Some(name) => TypeReference::Reference(name.to_string()),
                None => {
                    diagnostics.push(
                        Diagnostic::warning(PHASE, format!("malformed reference `{}`", pointer))
                            .at(location),
                    );
                    TypeReference::undefined()
                }
            };
        }

        if obj.contains_key("items") {
            return self.resolve_array(obj, location, diagnostics);
        }

        diagnostics.push(Diagnostic::warning(PHASE, "type node has no type").at(location));
        TypeReference::undefined()
    }

    fn resolve_array(
        &self,
        obj: &Map<String, Value>,
        location: &str,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> TypeReference {
        match obj.get("items") {
            None | Some(Value::Array(_)) => degenerate_array(location, diagnostics),
            Some(items) => {
                let inner = self.resolve(items, &format!("{location}[]"), diagnostics);
                TypeReference::array(inner)
            }
        }
    }
}

fn degenerate_array(location: &str, diagnostics: &mut Vec<Diagnostic>) -> TypeReference {
    diagnostics.push(Diagnostic::warning(PHASE, "degenerate array shape").at(location));
    TypeReference::undefined()
}

/// Legacy tags and the scalar name each stands for.
fn alias_of(tag: &str) -> Option<&'static str> {
    match tag {
        "base" => Some("bool"),
        "integer" | "base_bool_int" => Some("int"),
        "number" => Some("double"),
        "String" => Some("string"),
        _ => None,
    }
}

fn scalar_kind(name: &str) -> Option<ScalarKind> {
    match name {
        "bool" | "boolean" => Some(ScalarKind::Bool),
        "int" => Some(ScalarKind::Int),
        "double" => Some(ScalarKind::Double),
        "string" => Some(ScalarKind::String),
        "object" => Some(ScalarKind::Any),
        _ => None,
    }
}

fn resolve_tag(tag: &str, location: &str, diagnostics: &mut Vec<Diagnostic>) -> TypeReference {
    let aliased = alias_of(tag);
    match (scalar_kind(aliased.unwrap_or(tag)), aliased) {
        (Some(kind), Some(_)) => TypeReference::aliased(kind, tag),
        (Some(kind), None) => TypeReference::scalar(kind),
        (None, _) => {
            diagnostics.push(
                Diagnostic::warning(PHASE, format!("unknown type tag `{}`", tag)).at(location),
            );
            TypeReference::Undefined(tag.to_string())
        }
    }
}
