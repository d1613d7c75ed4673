use std::path::PathBuf;

use vkgen_core::GeneratedFile;

use super::{GENERATED_HEADER, last_segment};
use crate::{Field, Fn, Impl, Param, RawCode, RustFile, Struct, Use};

/// A method group as seen from the index.
#[derive(Debug, Clone)]
pub struct MethodGroup {
    pub module: String,
    pub name: String,
    pub accessor: String,
}

/// `methods/mod.rs`: the scope modules and the `Api` entry point.
#[derive(Debug, Clone)]
pub struct MethodsMod {
    pub transport: String,
    pub groups: Vec<MethodGroup>,
}

impl GeneratedFile for MethodsMod {
    fn path(&self) -> PathBuf {
        PathBuf::from("methods").join("mod.rs")
    }

    fn render(&self) -> String {
        let api = Struct::new("Api<'a, T>")
            .doc(Some("Entry point to every method group."))
            .field(Field::new("transport", "&'a T").private());

        let accessors = self.groups.iter().map(|g| {
            Fn::new(&g.accessor)
                .receiver("&self")
                .returns(format!("{}<'a, T>", g.name))
                .body_line(format!("{}::new(self.transport)", g.name))
        });

        let calls = Impl::new("Api<'a, T>")
            .generics(format!("'a, T: {}", last_segment(&self.transport)))
            .method(
                Fn::new("new")
                    .param(Param::new("transport", "&'a T"))
                    .returns("Self")
                    .body_line("Self { transport }"),
            )
            .methods(accessors);

        let mut file = RustFile::new().use_stmts(Use::item(&self.transport));
        if !self.groups.is_empty() {
            file = file
                .add(RawCode::lines(
                    self.groups.iter().map(|g| format!("pub mod {};", g.module)),
                ))
                .add(RawCode::lines(
                    self.groups
                        .iter()
                        .map(|g| format!("pub use {}::{};", g.module, g.name)),
                ));
        }

        file.add(api).add(calls).render_with_header(GENERATED_HEADER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render() {
        let file = MethodsMod {
            transport: "crate::transport::Transport".into(),
            groups: vec![MethodGroup {
                module: "friends".into(),
                name: "Friends".into(),
                accessor: "friends".into(),
            }],
        };

        assert_eq!(
            file.render(),
            r#"// Generated by vkgen - DO NOT EDIT

use crate::transport::Transport;

pub mod friends;

pub use friends::Friends;

/// Entry point to every method group.
pub struct Api<'a, T> {
    transport: &'a T,
}

impl<'a, T: Transport> Api<'a, T> {
    pub fn new(transport: &'a T) -> Self {
        Self { transport }
    }

    pub fn friends(&self) -> Friends<'a, T> {
        Friends::new(self.transport)
    }
}
"#
        );
    }

    #[test]
    fn test_unqualified_transport_needs_no_import() {
        let file = MethodsMod {
            transport: "Transport".into(),
            groups: vec![],
        };
        let code = file.render();
        assert!(!code.contains("use "));
        assert!(code.contains("impl<'a, T: Transport> Api<'a, T> {"));
    }
}
