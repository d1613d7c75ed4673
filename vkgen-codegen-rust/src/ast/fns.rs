//! Rust function and match builders.

use vkgen_codegen::{CodeBuilder, CodeFragment, Renderable};

use super::preamble;

/// Signatures longer than this are broken one parameter per line.
const MAX_SIGNATURE_WIDTH: usize = 92;

/// A parameter in a Rust function.
#[derive(Debug, Clone)]
pub struct Param {
    pub name: String,
    pub ty: String,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

/// Builder for Rust functions and methods.
#[derive(Debug, Clone)]
pub struct Fn {
    name: String,
    doc: Option<String>,
    attrs: Vec<String>,
    is_public: bool,
    is_async: bool,
    receiver: Option<String>,
    params: Vec<Param>,
    return_type: Option<String>,
    predicates: Vec<String>,
    body: Vec<CodeFragment>,
}

impl Fn {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            attrs: Vec::new(),
            is_public: true,
            is_async: false,
            receiver: None,
            params: Vec::new(),
            return_type: None,
            predicates: Vec::new(),
            body: Vec::new(),
        }
    }

    pub fn doc(mut self, doc: Option<impl Into<String>>) -> Self {
        self.doc = doc.map(Into::into);
        self
    }

    pub fn attr(mut self, attr: impl Into<String>) -> Self {
        self.attrs.push(attr.into());
        self
    }

    /// Omit `pub`, e.g. for trait impl items.
    pub fn private(mut self) -> Self {
        self.is_public = false;
        self
    }

    pub fn async_(mut self, is_async: bool) -> Self {
        self.is_async = is_async;
        self
    }

    /// Set the receiver, e.g. `&self`.
    pub fn receiver(mut self, receiver: impl Into<String>) -> Self {
        self.receiver = Some(receiver.into());
        self
    }

    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.return_type = Some(ty.into());
        self
    }

    /// Add a `where` predicate, e.g. `T::Error: From<serde_json::Error>`.
    pub fn where_(mut self, predicate: impl Into<String>) -> Self {
        self.predicates.push(predicate.into());
        self
    }

    pub fn body_line(mut self, line: impl Into<String>) -> Self {
        self.body.push(CodeFragment::line(line));
        self
    }

    /// Append a nested node (a `match`, an `if let` block...) to the body.
    pub fn body_node(mut self, node: impl Renderable) -> Self {
        self.body.extend(node.to_fragments());
        self
    }

    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::rust();
        builder.emit(self);
        builder.build()
    }

    fn arguments(&self) -> Vec<String> {
        self.receiver
            .iter()
            .cloned()
            .chain(self.params.iter().map(|p| format!("{}: {}", p.name, p.ty)))
            .collect()
    }
}

impl Renderable for Fn {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = preamble(self.doc.as_deref(), &[], &self.attrs);

        let vis = if self.is_public { "pub " } else { "" };
        let async_kw = if self.is_async { "async " } else { "" };
        let open = format!("{}{}fn {}(", vis, async_kw, self.name);
        let ret = match &self.return_type {
            Some(ret) => format!(") -> {}", ret),
            None => ")".to_string(),
        };
        let close = if self.predicates.is_empty() {
            format!("{} {{", ret)
        } else {
            ret
        };

        let arguments = self.arguments();
        let one_line = format!("{}{}{}", open, arguments.join(", "), close);

        if one_line.len() <= MAX_SIGNATURE_WIDTH || arguments.is_empty() {
            fragments.push(CodeFragment::line(one_line));
        } else {
            fragments.push(CodeFragment::block_with_close(
                open,
                arguments
                    .into_iter()
                    .map(|a| CodeFragment::line(format!("{},", a)))
                    .collect(),
                Some(close),
            ));
        }

        if !self.predicates.is_empty() {
            fragments.push(CodeFragment::line("where"));
            fragments.push(CodeFragment::indent(
                self.predicates
                    .iter()
                    .map(|p| CodeFragment::line(format!("{},", p)))
                    .collect(),
            ));
            fragments.push(CodeFragment::line("{"));
        }
        fragments.push(CodeFragment::indent(self.body.clone()));
        fragments.push(CodeFragment::line("}"));

        fragments
    }
}

/// One arm of a [`Match`].
#[derive(Debug, Clone)]
pub struct Arm {
    pub pattern: String,
    pub body: String,
}

impl Arm {
    pub fn new(pattern: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            body: body.into(),
        }
    }
}

/// A `match` expression with single-expression arms.
#[derive(Debug, Clone)]
pub struct Match {
    scrutinee: String,
    arms: Vec<Arm>,
}

impl Match {
    pub fn new(scrutinee: impl Into<String>) -> Self {
        Self {
            scrutinee: scrutinee.into(),
            arms: Vec::new(),
        }
    }

    pub fn arm(mut self, arm: Arm) -> Self {
        self.arms.push(arm);
        self
    }

    pub fn arms(mut self, arms: impl IntoIterator<Item = Arm>) -> Self {
        self.arms.extend(arms);
        self
    }
}

impl Renderable for Match {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::block(
            format!("match {} {{", self.scrutinee),
            self.arms
                .iter()
                .map(|a| CodeFragment::line(format!("{} => {},", a.pattern, a.body)))
                .collect(),
        )]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_signature_stays_on_one_line() {
        let f = Fn::new("as_wire")
            .receiver("&self")
            .returns("&'static str")
            .body_node(Match::new("*self").arm(Arm::new("Self::Hints", "\"hints\"")))
            .build();
        assert_eq!(
            f,
            "pub fn as_wire(&self) -> &'static str {\n    \
             match *self {\n        \
             Self::Hints => \"hints\",\n    \
             }\n\
             }\n"
        );
    }

    #[test]
    fn test_long_signature_breaks_per_parameter() {
        let f = Fn::new("get")
            .async_(true)
            .receiver("&self")
            .param(Param::new("user_id", "Option<i64>"))
            .param(Param::new("fields", "Option<Vec<String>>"))
            .returns("Result<crate::api::responses::friends::FriendsGetResponse, T::Error>")
            .body_line("todo!()")
            .build();
        assert_eq!(
            f,
            "pub async fn get(\n    \
             &self,\n    \
             user_id: Option<i64>,\n    \
             fields: Option<Vec<String>>,\n\
             ) -> Result<crate::api::responses::friends::FriendsGetResponse, T::Error> {\n    \
             todo!()\n\
             }\n"
        );
    }

    #[test]
    fn test_where_clause() {
        let f = Fn::new("send")
            .receiver("&self")
            .returns("Result<(), T::Error>")
            .where_("T::Error: From<serde_json::Error>")
            .body_line("Ok(())")
            .build();
        assert_eq!(
            f,
            "pub fn send(&self) -> Result<(), T::Error>\n\
             where\n    \
             T::Error: From<serde_json::Error>,\n\
             {\n    \
             Ok(())\n\
             }\n"
        );
    }

    #[test]
    fn test_private_fn_without_return() {
        let f = Fn::new("touch").private().body_line("()").build();
        assert_eq!(f, "fn touch() {\n    ()\n}\n");
    }
}
