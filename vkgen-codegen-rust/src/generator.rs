use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use eyre::Result;
use tracing::debug;
use vkgen_codegen::{
    ComputedData, GenerateResult, LanguageCodegen, PreviewFile, TypeMapper,
    pipeline::CompilationContext,
};
use vkgen_core::{File, GeneratedFile, NamingConvention, NamingTitle, RUST_NAMING, replace_dir};
use vkgen_ir::{
    AliasDescriptor, ApiModel, Category, ClassDescriptor, EnumDescriptor, MethodDescriptor,
};
use vkgen_schema::{NamingConfig, OutputConfig};

use crate::{
    Encoder, RustTypeMapper, SymbolTable,
    files::{
        AliasRs, CallParam, CategoryMod, ClassField, ClassRs, EnumRs, Member, MethodFn,
        MethodGroup, MethodGroupRs, MethodsMod, RootMod, ScopeMod,
    },
    naming::UniqueNames,
    symbols::Symbol,
};

/// Settings of the Rust target.
#[derive(Debug, Clone)]
pub struct RustOptions {
    /// Rust path of the generated module, e.g. `crate::api`.
    pub module_path: String,
    /// Rust path of the transport trait.
    pub transport: String,
    pub is_async: bool,
    pub naming: NamingConvention,
}

impl RustOptions {
    pub fn from_config(output: &OutputConfig, naming: &NamingConfig) -> Self {
        Self {
            module_path: output.module_path.clone(),
            transport: output.transport.clone(),
            is_async: output.is_async,
            naming: naming.convention(),
        }
    }
}

impl Default for RustOptions {
    fn default() -> Self {
        Self {
            module_path: "crate::api".to_string(),
            transport: "crate::transport::Transport".to_string(),
            is_async: true,
            naming: RUST_NAMING,
        }
    }
}

/// Rust code generator for a finalized descriptor model.
pub struct Generator {
    model: ApiModel,
    computed: ComputedData,
    options: RustOptions,
}

impl LanguageCodegen for Generator {
    fn language(&self) -> &'static str {
        "rust"
    }

    fn file_extension(&self) -> &'static str {
        "rs"
    }

    fn preview(&self) -> Vec<PreviewFile> {
        self.files()
            .into_iter()
            .map(|f| PreviewFile {
                path: relative(f.path()),
                content: f.content().to_string(),
            })
            .collect()
    }

    fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        let files = self.files();
        let written = replace_dir(output_dir, &files)?;
        debug!(dir = %output_dir.display(), files = written, "wrote rust client");

        Ok(GenerateResult {
            output_dir: output_dir.to_path_buf(),
            files: files.iter().map(|f| relative(f.path())).collect(),
        })
    }
}

impl Generator {
    pub fn new(model: ApiModel, computed: ComputedData, options: RustOptions) -> Self {
        Self {
            model,
            computed,
            options,
        }
    }

    /// Take the model and analysis out of a finished pipeline run.
    pub fn from_context(ctx: &mut CompilationContext, options: RustOptions) -> Result<Self> {
        let model = ctx.take_model()?;
        let computed = ctx.take_computed()?;
        Ok(Self::new(model, computed, options))
    }

    /// Render every output file in memory.
    pub fn files(&self) -> Vec<File> {
        let symbols = SymbolTable::new(
            &self.computed.names,
            &self.options.naming,
            &self.options.module_path,
        );
        let emit = Emitter {
            model: &self.model,
            computed: &self.computed,
            options: &self.options,
            symbols: &symbols,
            mapper: RustTypeMapper::new(&symbols, &self.options.naming),
        };

        let mut files = Vec::new();
        let mut categories = Vec::new();

        for category in [Category::Objects, Category::Responses] {
            let scopes = symbols.scopes(category);
            if scopes.is_empty() {
                continue;
            }
            categories.push(category);

            files.push(
                CategoryMod {
                    category,
                    scopes: scopes
                        .values()
                        .filter_map(|entries| entries.first())
                        .map(|(_, s)| s.scope_module.clone())
                        .collect(),
                }
                .to_file(),
            );
            for (dir, entries) in &scopes {
                let items = entries
                    .iter()
                    .map(|(_, s)| (s.file_module.clone(), s.type_name.clone()))
                    .collect();
                files.push(ScopeMod::new(Path::new(category.as_str()).join(dir), items).to_file());
            }
        }

        files.push(RootMod { categories }.to_file());
        files.extend(emit.declarations());
        files.extend(emit.methods());
        files
    }
}

/// Borrowed state shared by the per-file builders of one run.
struct Emitter<'a> {
    model: &'a ApiModel,
    computed: &'a ComputedData,
    options: &'a RustOptions,
    symbols: &'a SymbolTable,
    mapper: RustTypeMapper<'a>,
}

impl Emitter<'_> {
    fn declarations(&self) -> Vec<File> {
        let classes = self.model.classes.iter().filter_map(|class| {
            let symbol = self.symbols.get(class.name())?;
            Some(self.class_rs(class, symbol).to_file())
        });
        let enums = self.model.enums.iter().filter_map(|decl| {
            let symbol = self.symbols.get(decl.name())?;
            Some(self.enum_rs(decl, symbol).to_file())
        });
        let aliases = self.model.aliases.iter().filter_map(|alias| {
            let symbol = self.symbols.get(alias.name())?;
            Some(self.alias_rs(alias, symbol).to_file())
        });

        classes.chain(enums).chain(aliases).collect()
    }

    fn class_rs(&self, class: &ClassDescriptor, symbol: &Symbol) -> ClassRs {
        let mut names = UniqueNames::default();
        let fields = class
            .properties
            .iter()
            .map(|property| {
                let mut ty = self.mapper.map_type(&property.ty);
                if self.computed.is_boxed(class.name(), property.name.wire()) {
                    ty = self.mapper.map_boxed(&ty);
                }
                ClassField {
                    name: names.claim(property.name.field_name(&self.options.naming)),
                    wire: property.name.wire().to_string(),
                    ty,
                    doc: property.description.clone(),
                }
            })
            .collect();

        ClassRs {
            path: symbol.file_path(),
            name: symbol.type_name.clone(),
            doc: class.description.clone(),
            fields,
        }
    }

    fn enum_rs(&self, decl: &EnumDescriptor, symbol: &Symbol) -> EnumRs {
        let mut names = UniqueNames::default();
        let members = decl
            .members
            .iter()
            .map(|member| Member {
                name: names.claim(member.title.type_name(&self.options.naming)),
                wire: member.wire_value.clone(),
                ordinal: member.ordinal,
                doc: member.description.clone(),
            })
            .collect();

        EnumRs {
            path: symbol.file_path(),
            name: symbol.type_name.clone(),
            doc: decl.description.clone(),
            repr: decl.repr,
            members,
        }
    }

    fn alias_rs(&self, alias: &AliasDescriptor, symbol: &Symbol) -> AliasRs {
        AliasRs {
            path: symbol.file_path(),
            name: symbol.type_name.clone(),
            doc: alias.description.clone(),
            target: self.mapper.map_type(&alias.target),
        }
    }

    /// Method group files and the index, one group per scope module.
    fn methods(&self) -> Vec<File> {
        let naming = &self.options.naming;

        let mut scopes: BTreeMap<String, (NamingTitle, Vec<&MethodDescriptor>)> = BTreeMap::new();
        for (scope, methods) in self.model.methods_by_scope() {
            let title = NamingTitle::new(scope);
            scopes
                .entry(title.file_name(naming))
                .or_insert_with(|| (title, Vec::new()))
                .1
                .extend(methods);
        }

        let mut type_names = UniqueNames::default().reserve("Api");
        let mut accessors = UniqueNames::default().reserve("new");
        let encoder = Encoder::new(self.model, &self.computed.names);

        let mut files = Vec::new();
        let mut groups = Vec::new();
        for (dir, (title, methods)) in scopes {
            let group = MethodGroup {
                module: title.module_name(naming),
                name: type_names.claim(title.type_name(naming)),
                accessor: accessors.claim(title.field_name(naming)),
            };

            let mut fn_names = UniqueNames::default().reserve("new");
            let methods = methods
                .into_iter()
                .map(|method| MethodFn {
                    name: fn_names.claim(method.name.field_name(naming)),
                    wire: method.title.wire().to_string(),
                    doc: method.description.clone(),
                    params: self.call_params(method, &encoder),
                    response: self.mapper.map_type(&method.response_type),
                })
                .collect();

            files.push(
                MethodGroupRs {
                    path: PathBuf::from("methods").join(format!("{}.rs", dir)),
                    name: group.name.clone(),
                    scope: title.wire().to_string(),
                    transport: self.options.transport.clone(),
                    is_async: self.options.is_async,
                    methods,
                }
                .to_file(),
            );
            groups.push(group);
        }

        files.push(
            MethodsMod {
                transport: self.options.transport.clone(),
                groups,
            }
            .to_file(),
        );
        files
    }

    fn call_params(&self, method: &MethodDescriptor, encoder: &Encoder<'_>) -> Vec<CallParam> {
        let mut names = UniqueNames::default().reserve("params");
        method
            .parameters
            .iter()
            .map(|param| CallParam {
                name: names.claim(param.title.field_name(&self.options.naming)),
                wire: param.title.wire().to_string(),
                ty: self.mapper.map_type(&param.ty),
                // Numbers and flags stay optional even when required.
                optional: param.ty.is_nullable_scalar() || !param.required,
                encoding: encoder.encoding(&param.ty),
                doc: param.description.clone(),
            })
            .collect()
    }
}

/// A relative path with `/` separators on every platform.
fn relative(path: &Path) -> String {
    path.iter()
        .map(|c| c.to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
