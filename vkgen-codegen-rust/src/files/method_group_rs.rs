use std::path::PathBuf;

use vkgen_codegen::CodeFragment;
use vkgen_core::GeneratedFile;

use super::{GENERATED_HEADER, last_segment, uses};
use crate::{Encoding, Field, Fn, Impl, Param, RustFile, Struct, Use};

/// A call-site parameter.
#[derive(Debug, Clone)]
pub struct CallParam {
    pub name: String,
    pub wire: String,
    /// Rust type without the `Option` wrapper.
    pub ty: String,
    /// Omitted values are not sent at all.
    pub optional: bool,
    pub encoding: Encoding,
    pub doc: Option<String>,
}

impl CallParam {
    fn insert(&self, var: &str) -> String {
        format!(
            "params.insert({:?}.to_string(), {});",
            self.wire,
            self.encoding.expression(var)
        )
    }

    fn statement(&self) -> CodeFragment {
        if self.optional {
            CodeFragment::block(
                format!("if let Some(v) = {} {{", self.name),
                vec![CodeFragment::line(self.insert("v"))],
            )
        } else {
            CodeFragment::line(self.insert(&self.name))
        }
    }
}

/// One API method.
#[derive(Debug, Clone)]
pub struct MethodFn {
    pub name: String,
    /// Full wire name, e.g. `friends.get`.
    pub wire: String,
    pub doc: Option<String>,
    pub params: Vec<CallParam>,
    pub response: String,
}

impl MethodFn {
    /// The description followed by a list of documented parameters.
    fn doc(&self) -> Option<String> {
        let params: Vec<String> = self
            .params
            .iter()
            .filter_map(|p| {
                let doc = p.doc.as_deref()?.trim();
                (!doc.is_empty()).then(|| format!("* `{}` - {}", p.name, doc))
            })
            .collect();

        match (self.doc.as_deref().map(str::trim), params.is_empty()) {
            (Some(doc), true) => Some(doc.to_string()),
            (Some(doc), false) => Some(format!("{}\n\n{}", doc, params.join("\n"))),
            (None, false) => Some(params.join("\n")),
            (None, true) => None,
        }
    }

    fn to_fn(&self, is_async: bool) -> Fn {
        let mut method = Fn::new(&self.name)
            .doc(self.doc())
            .async_(is_async)
            .receiver("&self");
        for param in &self.params {
            let ty = if param.optional {
                format!("Option<{}>", param.ty)
            } else {
                param.ty.clone()
            };
            method = method.param(Param::new(&param.name, ty));
        }

        let declare = if self.params.is_empty() {
            "let params = BTreeMap::new();"
        } else {
            "let mut params = BTreeMap::new();"
        };
        let invoke = format!(
            "self.transport.invoke({:?}, params){}",
            self.wire,
            if is_async { ".await" } else { "" }
        );

        if self.params.iter().any(|p| p.encoding.is_fallible()) {
            method = method.where_("T::Error: From<serde_json::Error>");
        }

        let method = method
            .returns(format!("Result<{}, T::Error>", self.response))
            .body_line(declare);
        self.params
            .iter()
            .fold(method, |m, p| m.body_node(p.statement()))
            .body_line(invoke)
    }
}

/// `methods/<scope>.rs`: a struct borrowing the transport with one
/// method per API call in the scope.
#[derive(Debug, Clone)]
pub struct MethodGroupRs {
    pub path: PathBuf,
    pub name: String,
    /// Scope wire name, for the doc comment.
    pub scope: String,
    /// Full path of the transport trait.
    pub transport: String,
    pub is_async: bool,
    pub methods: Vec<MethodFn>,
}

impl GeneratedFile for MethodGroupRs {
    fn path(&self) -> PathBuf {
        self.path.clone()
    }

    fn render(&self) -> String {
        let group = Struct::new(format!("{}<'a, T>", self.name))
            .doc(Some(format!("Methods of the `{}` scope.", self.scope)))
            .field(Field::new("transport", "&'a T").private());

        let constructor = Fn::new("new")
            .param(Param::new("transport", "&'a T"))
            .returns("Self")
            .body_line("Self { transport }");

        let calls = Impl::new(format!("{}<'a, T>", self.name))
            .generics(format!("'a, T: {}", last_segment(&self.transport)))
            .method(constructor)
            .methods(self.methods.iter().map(|m| m.to_fn(self.is_async)));

        RustFile::new()
            .use_stmt(uses::btree_map())
            .use_stmts(Use::item(&self.transport))
            .add(group)
            .add(calls)
            .render_with_header(GENERATED_HEADER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn param(name: &str, ty: &str, optional: bool, encoding: Encoding) -> CallParam {
        CallParam {
            name: name.into(),
            wire: name.into(),
            ty: ty.into(),
            optional,
            encoding,
            doc: None,
        }
    }

    fn group(is_async: bool) -> MethodGroupRs {
        MethodGroupRs {
            path: PathBuf::from("methods/friends.rs"),
            name: "Friends".into(),
            scope: "friends".into(),
            transport: "crate::transport::Transport".into(),
            is_async,
            methods: vec![MethodFn {
                name: "add".into(),
                wire: "friends.add".into(),
                doc: Some("Adds a friend.".into()),
                params: vec![
                    CallParam {
                        doc: Some("User ID".into()),
                        ..param("user_id", "i64", true, Encoding::Display)
                    },
                    param("text", "String", false, Encoding::Display),
                    param("follow", "bool", true, Encoding::Flag),
                ],
                response: "i64".into(),
            }],
        }
    }

    #[test]
    fn test_async_group() {
        assert_eq!(
            group(true).render(),
            r#"// Generated by vkgen - DO NOT EDIT

use std::collections::BTreeMap;

use crate::transport::Transport;

/// Methods of the `friends` scope.
pub struct Friends<'a, T> {
    transport: &'a T,
}

impl<'a, T: Transport> Friends<'a, T> {
    pub fn new(transport: &'a T) -> Self {
        Self { transport }
    }

    /// Adds a friend.
    ///
    /// * `user_id` - User ID
    pub async fn add(
        &self,
        user_id: Option<i64>,
        text: String,
        follow: Option<bool>,
    ) -> Result<i64, T::Error> {
        let mut params = BTreeMap::new();
        if let Some(v) = user_id {
            params.insert("user_id".to_string(), v.to_string());
        }
        params.insert("text".to_string(), text.to_string());
        if let Some(v) = follow {
            params.insert("follow".to_string(), u8::from(v).to_string());
        }
        self.transport.invoke("friends.add", params).await
    }
}
"#
        );
    }

    #[test]
    fn test_blocking_group() {
        let code = group(false).render();
        assert!(code.contains("    pub fn add(\n"));
        assert!(code.contains("        self.transport.invoke(\"friends.add\", params)\n"));
        assert!(!code.contains(".await"));
    }

    #[test]
    fn test_json_params_convert_errors() {
        let method = MethodFn {
            name: "save".into(),
            wire: "account.saveProfileInfo".into(),
            doc: None,
            params: vec![param("profile", "AccountProfile", false, Encoding::Json)],
            response: "i64".into(),
        };
        assert_eq!(
            method.to_fn(false).build(),
            r#"pub fn save(&self, profile: AccountProfile) -> Result<i64, T::Error>
where
    T::Error: From<serde_json::Error>,
{
    let mut params = BTreeMap::new();
    params.insert("profile".to_string(), serde_json::to_string(&profile)?);
    self.transport.invoke("account.saveProfileInfo", params)
}
"#
        );
    }

    #[test]
    fn test_method_without_params() {
        let method = MethodFn {
            name: "get_server_time".into(),
            wire: "utils.getServerTime".into(),
            doc: None,
            params: vec![],
            response: "i64".into(),
        };
        let code = method.to_fn(true).build();
        assert!(code.starts_with("pub async fn get_server_time(&self) -> Result<i64, T::Error> {\n"));
        assert!(code.contains("let params = BTreeMap::new();"));
    }
}
