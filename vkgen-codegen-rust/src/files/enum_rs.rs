use std::path::PathBuf;

use vkgen_core::GeneratedFile;
use vkgen_ir::EnumRepr;

use super::{GENERATED_HEADER, uses};
use crate::{Arm, Enum, Fn, Impl, Match, Param, RustFile, Variant};

/// One enum variant and the value it stands for on the wire.
#[derive(Debug, Clone)]
pub struct Member {
    pub name: String,
    pub wire: String,
    pub ordinal: usize,
    pub doc: Option<String>,
}

/// An enum with its wire conversions.
///
/// String enums map through `#[serde(rename)]`. Integer enums go through
/// `i64` with `TryFrom`/`From`, so unknown numbers fail deserialization.
#[derive(Debug, Clone)]
pub struct EnumRs {
    pub path: PathBuf,
    pub name: String,
    pub doc: Option<String>,
    pub repr: EnumRepr,
    pub members: Vec<Member>,
}

impl EnumRs {
    fn declaration(&self) -> Enum {
        let mut decl = Enum::new(&self.name)
            .doc(self.doc.as_deref())
            .derives(["Debug", "Clone", "Copy", "PartialEq", "Eq", "Hash", "Serialize", "Deserialize"]);
        if self.repr == EnumRepr::Integer {
            decl = decl.attr("serde(try_from = \"i64\", into = \"i64\")");
        }

        self.members.iter().fold(decl, |decl, m| {
            let variant = Variant::new(&m.name)
                .doc(m.doc.as_deref())
                .discriminant(m.ordinal);
            match self.repr {
                EnumRepr::String => decl.variant(variant.attr(format!("serde(rename = {:?})", m.wire))),
                EnumRepr::Integer => decl.variant(variant),
            }
        })
    }

    fn wire_literal(&self, member: &Member) -> String {
        match self.repr {
            EnumRepr::String => format!("{:?}", member.wire),
            EnumRepr::Integer => member.wire.clone(),
        }
    }

    fn as_wire(&self) -> Impl {
        let returns = match self.repr {
            EnumRepr::String => "&'static str",
            EnumRepr::Integer => "i64",
        };
        let arms = self
            .members
            .iter()
            .map(|m| Arm::new(format!("Self::{}", m.name), self.wire_literal(m)));

        Impl::new(&self.name).method(
            Fn::new("as_wire")
                .doc(Some("The value sent over the wire."))
                .receiver("&self")
                .returns(returns)
                .body_node(Match::new("*self").arms(arms)),
        )
    }

    fn display(&self) -> Impl {
        let body = match self.repr {
            EnumRepr::String => "f.write_str(self.as_wire())",
            EnumRepr::Integer => "write!(f, \"{}\", self.as_wire())",
        };
        Impl::new(&self.name).for_trait("fmt::Display").method(
            Fn::new("fmt")
                .private()
                .receiver("&self")
                .param(Param::new("f", "&mut fmt::Formatter<'_>"))
                .returns("fmt::Result")
                .body_line(body),
        )
    }

    fn try_from_i64(&self) -> Impl {
        let arms = self
            .members
            .iter()
            .map(|m| Arm::new(&m.wire, format!("Ok(Self::{})", m.name)))
            .chain([Arm::new(
                "other",
                format!("Err(format!(\"unknown {} value {{}}\", other))", self.name),
            )]);

        Impl::new(&self.name)
            .for_trait("TryFrom<i64>")
            .item("type Error = String;")
            .method(
                Fn::new("try_from")
                    .private()
                    .param(Param::new("value", "i64"))
                    .returns("Result<Self, Self::Error>")
                    .body_node(Match::new("value").arms(arms)),
            )
    }

    fn into_i64(&self) -> Impl {
        Impl::new("i64")
            .for_trait(format!("From<{}>", self.name))
            .method(
                Fn::new("from")
                    .private()
                    .param(Param::new("value", &self.name))
                    .returns("Self")
                    .body_line("value.as_wire()"),
            )
    }
}

impl GeneratedFile for EnumRs {
    fn path(&self) -> PathBuf {
        self.path.clone()
    }

    fn render(&self) -> String {
        let file = RustFile::new()
            .use_stmt(uses::fmt())
            .use_stmt(uses::serde())
            .add(self.declaration())
            .add(self.as_wire());

        let file = match self.repr {
            EnumRepr::String => file,
            EnumRepr::Integer => file.add(self.try_from_i64()).add(self.into_i64()),
        };

        file.add(self.display()).render_with_header(GENERATED_HEADER)
    }
}
