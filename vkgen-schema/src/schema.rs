//! API schema documents.

use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};
use tracing::debug;

use crate::{Error, Result};

/// A complete API schema: data shapes, response envelopes and methods.
///
/// Maps keep declaration order so generation is deterministic.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Schema {
    #[serde(default)]
    pub objects: IndexMap<String, Definition>,

    #[serde(default)]
    pub responses: IndexMap<String, Definition>,

    /// Keyed by wire name; accepts either a map or a list of named entries.
    #[serde(default, deserialize_with = "deserialize_methods")]
    pub methods: IndexMap<String, MethodDef>,
}

/// An object or response definition.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Definition {
    /// Raw type tag: a string, a list of strings, or absent.
    #[serde(rename = "type")]
    pub ty: Option<Value>,

    pub description: Option<String>,

    #[serde(default)]
    pub properties: IndexMap<String, Value>,

    /// Base references and inline property groups.
    #[serde(default, rename = "allOf")]
    pub all_of: Vec<Value>,

    #[serde(rename = "enum")]
    pub enum_values: Option<Vec<Value>>,

    #[serde(default, rename = "enumNames")]
    pub enum_names: Vec<String>,

    pub items: Option<Value>,

    /// Explicit grouping tag; defaults to the name prefix.
    pub scope: Option<String>,

    #[serde(rename = "$ref")]
    pub reference: Option<String>,
}

impl Definition {
    /// Whether the definition describes a property bag.
    pub fn is_object(&self) -> bool {
        !self.properties.is_empty()
            || !self.all_of.is_empty()
            || self.reference.is_some()
            || matches!(&self.ty, Some(Value::String(t)) if t == "object")
    }

    /// The definition rebuilt as a bare type node, for non-object shapes.
    pub fn type_node(&self) -> Value {
        let mut node = Map::new();
        if let Some(ty) = &self.ty {
            node.insert("type".into(), ty.clone());
        }
        if let Some(items) = &self.items {
            node.insert("items".into(), items.clone());
        }
        if let Some(reference) = &self.reference {
            node.insert("$ref".into(), Value::String(reference.clone()));
        }
        Value::Object(node)
    }
}

/// A callable API method.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MethodDef {
    /// Wire name, present when methods are given as a list.
    pub name: Option<String>,

    pub description: Option<String>,

    pub scope: Option<String>,

    #[serde(default)]
    pub parameters: Vec<ParameterDef>,

    pub response: Option<Value>,

    #[serde(default)]
    pub responses: IndexMap<String, Value>,
}

impl MethodDef {
    /// The type node of the successful response, if any.
    pub fn response_node(&self) -> Option<&Value> {
        self.response
            .as_ref()
            .or_else(|| self.responses.get("response"))
    }
}

/// A method parameter: a type node with a name and a required flag.
#[derive(Debug, Clone, Deserialize)]
pub struct ParameterDef {
    pub name: String,

    #[serde(default)]
    pub required: bool,

    pub description: Option<String>,

    #[serde(flatten)]
    pub node: Map<String, Value>,
}

impl ParameterDef {
    /// The parameter's type node.
    pub fn type_node(&self) -> Value {
        Value::Object(self.node.clone())
    }
}

fn deserialize_methods<'de, D>(
    deserializer: D,
) -> std::result::Result<IndexMap<String, MethodDef>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawMethods {
        Map(IndexMap<String, MethodDef>),
        List(Vec<MethodDef>),
    }

    match RawMethods::deserialize(deserializer)? {
        RawMethods::Map(map) => Ok(map),
        RawMethods::List(list) => {
            let mut methods = IndexMap::with_capacity(list.len());
            for method in list {
                let name = method
                    .name
                    .clone()
                    .ok_or_else(|| D::Error::custom("method entry without a \"name\""))?;
                if methods.contains_key(&name) {
                    return Err(D::Error::custom(format!("duplicate method \"{}\"", name)));
                }
                methods.insert(name, method);
            }
            Ok(methods)
        }
    }
}

/// `objects.json` / `responses.json` in the split layout.
#[derive(Deserialize)]
struct DefinitionsFile {
    #[serde(default)]
    definitions: IndexMap<String, Definition>,
}

/// `methods.json` in the split layout.
#[derive(Deserialize)]
struct MethodsFile {
    #[serde(default, deserialize_with = "deserialize_methods")]
    methods: IndexMap<String, MethodDef>,
}

/// Where a schema is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaSource {
    /// One document with `objects`, `responses` and `methods` keys.
    Combined(std::path::PathBuf),
    /// Three documents, as published upstream.
    Split {
        objects: std::path::PathBuf,
        responses: std::path::PathBuf,
        methods: std::path::PathBuf,
    },
}

impl Schema {
    /// Load a schema from its configured source.
    pub fn load(source: &SchemaSource) -> Result<Self> {
        match source {
            SchemaSource::Combined(path) => Self::open(path),
            SchemaSource::Split {
                objects,
                responses,
                methods,
            } => Self::open_split(objects, responses, methods),
        }
    }

    /// Open and parse a combined schema document.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let (content, filename) = read(path.as_ref())?;
        Self::from_str_with_filename(&content, &filename)
    }

    /// Parse a combined schema document from a string.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let schema: Schema = parse_json(content, filename)?;
        debug!(
            file = filename,
            objects = schema.objects.len(),
            responses = schema.responses.len(),
            methods = schema.methods.len(),
            "parsed schema"
        );
        Ok(schema)
    }

    /// Open and parse the three split schema documents.
    pub fn open_split(objects: &Path, responses: &Path, methods: &Path) -> Result<Self> {
        let (content, filename) = read(objects)?;
        let objects: DefinitionsFile = parse_json(&content, &filename)?;
        let (content, filename) = read(responses)?;
        let responses: DefinitionsFile = parse_json(&content, &filename)?;
        let (content, filename) = read(methods)?;
        let methods: MethodsFile = parse_json(&content, &filename)?;

        debug!(
            objects = objects.definitions.len(),
            responses = responses.definitions.len(),
            methods = methods.methods.len(),
            "parsed split schema"
        );

        Ok(Self {
            objects: objects.definitions,
            responses: responses.definitions,
            methods: methods.methods,
        })
    }
}

fn read(path: &Path) -> Result<(String, String)> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        Box::new(Error::Io {
            path: path.to_path_buf(),
            source: e,
        })
    })?;
    Ok((content, path.display().to_string()))
}

fn parse_json<T: serde::de::DeserializeOwned>(content: &str, filename: &str) -> Result<T> {
    serde_json::from_str(content).map_err(|e| Error::parse(e, content, filename))
}
