//! `vkgen.toml` configuration.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;
use vkgen_core::{NamingConvention, RUST_NAMING, RUST_NAMING_SUFFIXED};

use crate::{Error, Result, SchemaSource};

/// Default configuration file name.
pub const CONFIG_FILE: &str = "vkgen.toml";

/// Root of `vkgen.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub schema: SchemaConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub naming: NamingConfig,
}

/// `[schema]`: either one combined document or the three split ones.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SchemaConfig {
    pub path: Option<PathBuf>,
    pub objects: Option<PathBuf>,
    pub responses: Option<PathBuf>,
    pub methods: Option<PathBuf>,
}

impl SchemaConfig {
    /// Resolve the configured layout into a [`SchemaSource`].
    pub fn source(&self) -> Result<SchemaSource> {
        match (&self.path, &self.objects, &self.responses, &self.methods) {
            (Some(path), None, None, None) => Ok(SchemaSource::Combined(path.clone())),
            (None, Some(objects), Some(responses), Some(methods)) => Ok(SchemaSource::Split {
                objects: objects.clone(),
                responses: responses.clone(),
                methods: methods.clone(),
            }),
            (None, None, None, None) => Err(Error::layout("no schema configured")),
            (Some(_), _, _, _) => Err(Error::layout(
                "[schema] path cannot be combined with objects, responses or methods",
            )),
            _ => Err(Error::layout(
                "split schema layout needs objects, responses and methods",
            )),
        }
    }
}

/// `[output]`: where and how generated code is written.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Directory replaced on every run.
    #[serde(default = "default_dir")]
    pub dir: PathBuf,

    /// Rust path of the generated module inside the consuming crate.
    #[serde(default = "default_module_path")]
    pub module_path: String,

    /// Rust path of the transport trait the method groups call.
    #[serde(default = "default_transport")]
    pub transport: String,

    /// Emit `async fn` call-sites.
    #[serde(default = "default_async", rename = "async")]
    pub is_async: bool,
}

fn default_dir() -> PathBuf {
    PathBuf::from("src/api")
}

fn default_module_path() -> String {
    "crate::api".to_string()
}

fn default_transport() -> String {
    "crate::transport::Transport".to_string()
}

fn default_async() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_dir(),
            module_path: default_module_path(),
            transport: default_transport(),
            is_async: default_async(),
        }
    }
}

/// How identifiers that collide with Rust keywords are escaped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReservedStyle {
    /// `type` -> `r#type`
    #[default]
    Raw,
    /// `type` -> `type_`
    Suffix,
}

/// `[naming]`
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NamingConfig {
    #[serde(default)]
    pub reserved: ReservedStyle,
}

impl NamingConfig {
    /// The naming convention selected by this configuration.
    pub fn convention(&self) -> NamingConvention {
        match self.reserved {
            ReservedStyle::Raw => RUST_NAMING,
            ReservedStyle::Suffix => RUST_NAMING_SUFFIXED,
        }
    }
}

impl Config {
    /// Open and parse a configuration file.
    ///
    /// Relative paths inside the file are resolved against its directory.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        let mut config = Self::from_str_with_filename(&content, &path.display().to_string())?;
        if let Some(base) = path.parent() {
            config.rebase(base);
        }
        Ok(config)
    }

    /// Open a configuration file, falling back to defaults when it is absent.
    pub fn open_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::open(path)
        } else {
            debug!(path = %path.display(), "no configuration file, using defaults");
            Ok(Self::default())
        }
    }

    /// Parse a configuration from a string.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::config(e, content, filename))
    }

    fn rebase(&mut self, base: &Path) {
        let rebase = |p: &mut PathBuf| {
            if p.is_relative() {
                *p = base.join(&*p);
            }
        };
        for path in [
            &mut self.schema.path,
            &mut self.schema.objects,
            &mut self.schema.responses,
            &mut self.schema.methods,
        ]
        .into_iter()
        .flatten()
        {
            rebase(path);
        }
        rebase(&mut self.output.dir);
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::from_str_with_filename("", CONFIG_FILE).unwrap();
        assert_eq!(config.output.dir, PathBuf::from("src/api"));
        assert_eq!(config.output.module_path, "crate::api");
        assert_eq!(config.output.transport, "crate::transport::Transport");
        assert!(config.output.is_async);
        assert_eq!(config.naming.reserved, ReservedStyle::Raw);
    }

    #[test]
    fn test_full_config() {
        let config = Config::from_str_with_filename(
            r#"
            [schema]
            objects = "schema/objects.json"
            responses = "schema/responses.json"
            methods = "schema/methods.json"

            [output]
            dir = "gen"
            async = false

            [naming]
            reserved = "suffix"
            "#,
            CONFIG_FILE,
        )
        .unwrap();

        assert!(matches!(
            config.schema.source().unwrap(),
            SchemaSource::Split { .. }
        ));
        assert!(!config.output.is_async);
        assert_eq!(config.naming.convention().field_name("type"), "type_");
    }

    #[test]
    fn test_layout_errors() {
        let none = SchemaConfig::default();
        assert!(matches!(*none.source().unwrap_err(), Error::Layout { .. }));

        let partial = SchemaConfig {
            objects: Some("objects.json".into()),
            ..Default::default()
        };
        assert!(partial.source().is_err());

        let both = SchemaConfig {
            path: Some("schema.json".into()),
            methods: Some("methods.json".into()),
            ..Default::default()
        };
        assert!(both.source().is_err());
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let err = Config::from_str_with_filename("[output]\ndirectory = \"x\"\n", CONFIG_FILE)
            .unwrap_err();
        assert!(matches!(*err, Error::Config { .. }));
    }

    #[test]
    fn test_open_rebases_relative_paths() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE);
        fs::write(&path, "[schema]\npath = \"schema.json\"\n").unwrap();

        let config = Config::open(&path).unwrap();

        assert_eq!(
            config.schema.source().unwrap(),
            SchemaSource::Combined(temp.path().join("schema.json"))
        );
        assert_eq!(config.output.dir, temp.path().join("src/api"));
    }

    #[test]
    fn test_open_or_default_without_file() {
        let temp = TempDir::new().unwrap();
        let config = Config::open_or_default(temp.path().join(CONFIG_FILE)).unwrap();
        assert!(config.schema.path.is_none());
    }
}
