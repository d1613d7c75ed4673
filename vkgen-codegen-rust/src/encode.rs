//! Rust expressions turning a parameter value into its wire string.

use std::collections::{HashMap, HashSet};

use vkgen_ir::{ApiModel, NameTable, ScalarKind, TypeKind, TypeReference};

/// How a value is written into the request parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Encoding {
    /// `Display`: numbers, strings, enums, free-form JSON.
    Display,
    /// Booleans as `1` or `0`.
    Flag,
    /// Elements joined with `,`.
    List(Box<Encoding>),
    /// Serialized as a JSON document. Failures are returned through `?`,
    /// so the caller needs `T::Error: From<serde_json::Error>`.
    Json,
}

impl Encoding {
    /// Whether the expression uses `?` on a serialization result.
    pub fn is_fallible(&self) -> bool {
        match self {
            Encoding::Json => true,
            Encoding::List(element) => matches!(**element, Encoding::Json | Encoding::List(_)),
            Encoding::Display | Encoding::Flag => false,
        }
    }

    /// Expression encoding the owned value bound to `var`.
    pub fn expression(&self, var: &str) -> String {
        match self {
            Encoding::Display => format!("{}.to_string()", var),
            Encoding::Flag => format!("u8::from({}).to_string()", var),
            Encoding::Json => format!("serde_json::to_string(&{})?", var),
            Encoding::List(element) if self.is_fallible() => format!(
                "{}.iter().map(|x| {}).collect::<Result<Vec<_>, _>>()?.join(\",\")",
                var,
                element.element("x")
            ),
            Encoding::List(element) => format!(
                "{}.iter().map(|x| {}).collect::<Vec<_>>().join(\",\")",
                var,
                element.element("x")
            ),
        }
    }

    /// Expression encoding a borrowed list element. JSON yields a `Result`.
    fn element(&self, var: &str) -> String {
        match self {
            Encoding::Display => format!("{}.to_string()", var),
            Encoding::Flag => format!("u8::from(*{}).to_string()", var),
            Encoding::Json | Encoding::List(_) => format!("serde_json::to_string({})", var),
        }
    }
}

/// Picks an [`Encoding`] per type, looking through aliases.
#[derive(Debug)]
pub struct Encoder<'a> {
    names: &'a NameTable,
    aliases: HashMap<&'a str, &'a TypeReference>,
}

impl<'a> Encoder<'a> {
    pub fn new(model: &'a ApiModel, names: &'a NameTable) -> Self {
        let aliases = model
            .aliases
            .iter()
            .map(|a| (a.name(), &a.target))
            .collect();
        Self { names, aliases }
    }

    pub fn encoding(&self, ty: &TypeReference) -> Encoding {
        self.encoding_of(ty, &mut HashSet::new())
    }

    fn encoding_of<'t>(&self, ty: &'t TypeReference, seen: &mut HashSet<&'t str>) -> Encoding
    where
        'a: 't,
    {
        match ty {
            TypeReference::Scalar(scalar) if scalar.kind == ScalarKind::Bool => Encoding::Flag,
            TypeReference::Scalar(_) | TypeReference::Undefined(_) => Encoding::Display,
            TypeReference::ArrayOf(inner) => match self.encoding_of(inner, seen) {
                Encoding::List(_) => Encoding::List(Box::new(Encoding::Json)),
                element => Encoding::List(Box::new(element)),
            },
            TypeReference::Reference(name) => {
                match self.names.get(name).map(|entry| entry.kind) {
                    Some(TypeKind::Enum) => Encoding::Display,
                    Some(TypeKind::Alias) if seen.insert(name.as_str()) => {
                        match self.aliases.get(name.as_str()) {
                            Some(target) => self.encoding_of(target, seen),
                            None => Encoding::Json,
                        }
                    }
                    _ => Encoding::Json,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use vkgen_core::NamingTitle;
    use vkgen_ir::{AliasDescriptor, Category, ClassDescriptor, EnumDescriptor, EnumRepr};

    use super::*;

    fn model() -> ApiModel {
        ApiModel {
            classes: vec![ClassDescriptor::new("base_object", "base", Category::Objects)],
            enums: vec![
                EnumDescriptor::new("friends_order", "friends", Category::Objects, EnumRepr::String)
                    .member("hints", "hints"),
            ],
            aliases: vec![AliasDescriptor {
                title: NamingTitle::new("base_flag"),
                scope: "base".into(),
                category: Category::Objects,
                description: None,
                target: TypeReference::scalar(ScalarKind::Bool),
            }],
            ..Default::default()
        }
    }

    fn encode(ty: TypeReference, var: &str) -> String {
        let model = model();
        let (names, _) = NameTable::from_model(&model);
        Encoder::new(&model, &names).encoding(&ty).expression(var)
    }

    fn reference(name: &str) -> TypeReference {
        TypeReference::Reference(name.into())
    }

    #[test]
    fn test_scalars() {
        assert_eq!(encode(TypeReference::scalar(ScalarKind::Int), "v"), "v.to_string()");
        assert_eq!(
            encode(TypeReference::scalar(ScalarKind::Bool), "v"),
            "u8::from(v).to_string()"
        );
        assert_eq!(encode(TypeReference::undefined(), "v"), "v.to_string()");
    }

    #[test]
    fn test_references() {
        assert_eq!(encode(reference("friends_order"), "v"), "v.to_string()");
        assert_eq!(
            encode(reference("base_object"), "v"),
            "serde_json::to_string(&v)?"
        );
        assert_eq!(encode(reference("base_flag"), "v"), "u8::from(v).to_string()");
    }

    #[test]
    fn test_only_json_is_fallible() {
        let model = model();
        let (names, _) = NameTable::from_model(&model);
        let encoder = Encoder::new(&model, &names);

        assert!(encoder.encoding(&reference("base_object")).is_fallible());
        assert!(encoder
            .encoding(&TypeReference::array(reference("base_object")))
            .is_fallible());
        assert!(!encoder.encoding(&reference("base_flag")).is_fallible());
        assert!(!encoder
            .encoding(&TypeReference::array(TypeReference::scalar(ScalarKind::Int)))
            .is_fallible());
    }

    #[test]
    fn test_lists() {
        assert_eq!(
            encode(TypeReference::array(TypeReference::scalar(ScalarKind::String)), "fields"),
            "fields.iter().map(|x| x.to_string()).collect::<Vec<_>>().join(\",\")"
        );
        assert_eq!(
            encode(TypeReference::array(reference("base_flag")), "v"),
            "v.iter().map(|x| u8::from(*x).to_string()).collect::<Vec<_>>().join(\",\")"
        );
        assert_eq!(
            encode(
                TypeReference::array(TypeReference::array(TypeReference::scalar(ScalarKind::Int))),
                "v"
            ),
            "v.iter().map(|x| serde_json::to_string(x)).collect::<Result<Vec<_>, _>>()?.join(\",\")"
        );
    }
}
