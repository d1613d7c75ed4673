//! Lower phase - builds the descriptor model from the schema.

use std::collections::HashMap;

use eyre::Result;
use serde_json::Value;
use tracing::debug;
use vkgen_ir::{
    AliasDescriptor, ApiModel, Category, ClassDescriptor, EnumDescriptor, EnumRepr,
    MethodDescriptor, MethodParameterDescriptor, NamingTitle, PropertyDescriptor, TypeReference,
};
use vkgen_schema::{Definition, MethodDef, Schema};

use crate::{
    TypeResolver,
    pipeline::{CompilationContext, Diagnostic, Phase},
};

const PHASE: &str = "lower";

/// Phase that walks the schema and builds an [`ApiModel`].
///
/// References are recorded by name only; the link phase checks them once
/// every declaration is known. A type name declared again, in either
/// section, is dropped with a warning so the first declaration wins.
pub struct LowerPhase;

impl Phase for LowerPhase {
    fn name(&self) -> &'static str {
        "lower"
    }

    fn description(&self) -> &'static str {
        "Build descriptors from schema definitions and methods"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let model = lower(&ctx.schema, &mut ctx.diagnostics);
        debug!(
            classes = model.classes.len(),
            enums = model.enums.len(),
            aliases = model.aliases.len(),
            methods = model.methods.len(),
            "lowered schema"
        );
        ctx.model = Some(model);
        Ok(())
    }
}

fn lower(schema: &Schema, diagnostics: &mut Vec<Diagnostic>) -> ApiModel {
    let mut lowering = Lowering {
        model: ApiModel::default(),
        declared: HashMap::new(),
        diagnostics,
    };

    for (name, def) in &schema.objects {
        if lowering.declare(name, Category::Objects) {
            lowering.definition(name, def, Category::Objects);
        }
    }
    for (name, def) in &schema.responses {
        if lowering.declare(name, Category::Responses) {
            lowering.response(name, def);
        }
    }
    for (name, def) in &schema.methods {
        lowering.method(name, def);
    }

    lowering.model
}

struct Lowering<'a> {
    model: ApiModel,
    /// Type names seen so far, with the section of their first declaration.
    declared: HashMap<String, Category>,
    diagnostics: &'a mut Vec<Diagnostic>,
}

impl Lowering<'_> {
    /// Claim a type name; false if an earlier definition already holds it.
    fn declare(&mut self, name: &str, category: Category) -> bool {
        if let Some(first) = self.declared.get(name) {
            let message = format!(
                "duplicate type '{}' ignored, first declared in {}",
                name,
                first.as_str()
            );
            self.warn(message, &format!("{}.{}", category.as_str(), name));
            return false;
        }
        self.declared.insert(name.to_string(), category);
        true
    }

    fn resolve(&mut self, node: &Value, location: &str) -> TypeReference {
        TypeResolver.resolve(node, location, self.diagnostics)
    }

    fn warn(&mut self, message: String, location: &str) {
        self.diagnostics
            .push(Diagnostic::warning(PHASE, message).at(location));
    }

    fn definition(&mut self, name: &str, def: &Definition, category: Category) {
        let scope = def
            .scope
            .clone()
            .unwrap_or_else(|| definition_scope(name).to_string());
        let location = format!("{}.{}", category.as_str(), name);

        if let Some(values) = &def.enum_values {
            if !values.is_empty() {
                let en = self.enumeration(name, scope, category, def, values, &location);
                self.model.enums.push(en);
                return;
            }
            self.warn(format!("enum '{}' has no values", name), &location);
        }

        let bare_reference =
            def.reference.is_some() && def.properties.is_empty() && def.all_of.is_empty();

        if def.is_object() && !bare_reference {
            let class = self.class(name, scope, category, def, &location);
            self.model.classes.push(class);
        } else {
            let target = self.resolve(&def.type_node(), &location);
            self.model.aliases.push(AliasDescriptor {
                title: NamingTitle::new(name),
                scope,
                category,
                description: def.description.clone(),
                target,
            });
        }
    }

    /// A response whose `response` property is the payload is unwrapped;
    /// anything else is lowered like an object definition.
    fn response(&mut self, name: &str, def: &Definition) {
        let Some(payload) = def.properties.get("response") else {
            self.definition(name, def, Category::Responses);
            return;
        };

        match serde_json::from_value::<Definition>(payload.clone()) {
            Ok(mut inner) => {
                inner.description = inner.description.or_else(|| def.description.clone());
                inner.scope = inner.scope.or_else(|| def.scope.clone());
                self.definition(name, &inner, Category::Responses);
            }
            Err(err) => {
                let location = format!("responses.{}.response", name);
                self.warn(format!("malformed response payload: {}", err), &location);
                self.model.aliases.push(AliasDescriptor {
                    title: NamingTitle::new(name),
                    scope: definition_scope(name).to_string(),
                    category: Category::Responses,
                    description: def.description.clone(),
                    target: TypeReference::undefined(),
                });
            }
        }
    }

    fn class(
        &mut self,
        name: &str,
        scope: String,
        category: Category,
        def: &Definition,
        location: &str,
    ) -> ClassDescriptor {
        let mut class =
            ClassDescriptor::new(name, scope, category).description(def.description.clone());

        if let Some(pointer) = &def.reference {
            class = class.base(last_segment(pointer));
        }

        for (prop, node) in &def.properties {
            class = class.property(self.property(prop, node, location));
        }

        for (index, entry) in def.all_of.iter().enumerate() {
            if let Some(pointer) = entry.get("$ref").and_then(Value::as_str) {
                class = class.base(last_segment(pointer));
            } else if let Some(Value::Object(props)) = entry.get("properties") {
                for (prop, node) in props {
                    class = class.property(self.property(prop, node, location));
                }
            } else {
                self.warn(
                    format!("allOf entry {} has neither $ref nor properties", index),
                    location,
                );
            }
        }

        class
    }

    fn property(&mut self, name: &str, node: &Value, owner: &str) -> PropertyDescriptor {
        let ty = self.resolve(node, &format!("{}.{}", owner, name));
        let description = node
            .get("description")
            .and_then(Value::as_str)
            .map(str::to_string);
        PropertyDescriptor::new(name, ty).description(description)
    }

    fn enumeration(
        &mut self,
        name: &str,
        scope: String,
        category: Category,
        def: &Definition,
        values: &[Value],
        location: &str,
    ) -> EnumDescriptor {
        let repr = if values.iter().all(|v| v.is_i64()) {
            EnumRepr::Integer
        } else {
            EnumRepr::String
        };

        let mut en = EnumDescriptor::new(name, scope, category, repr);
        en.description = def.description.clone();

        for (index, value) in values.iter().enumerate() {
            let wire = match value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            if en.members.iter().any(|m| m.wire_value == wire) {
                self.warn(format!("duplicate enum value `{}` ignored", wire), location);
                continue;
            }
            let member = match def.enum_names.get(index) {
                Some(name) => name.clone(),
                None => member_name(&wire),
            };
            en = en.member_at(index, member, wire);
        }

        en
    }

    fn method(&mut self, wire: &str, def: &MethodDef) {
        let (prefix, local) = wire.split_once('.').unwrap_or((wire, wire));
        let scope = def.scope.clone().unwrap_or_else(|| prefix.to_string());
        let location = format!("methods.{}", wire);

        let mut parameters = Vec::with_capacity(def.parameters.len());
        for param in &def.parameters {
            let ty = self.resolve(&param.type_node(), &format!("{}.{}", location, param.name));
            parameters.push(MethodParameterDescriptor {
                title: NamingTitle::new(param.name.as_str()),
                ty,
                required: param.required,
                description: param.description.clone(),
            });
        }

        let response_type = match def.response_node() {
            Some(node) => self.resolve(node, &format!("{}.response", location)),
            None => {
                self.warn("method has no response type".to_string(), &location);
                TypeReference::undefined()
            }
        };

        self.model.methods.push(MethodDescriptor {
            title: NamingTitle::new(wire),
            name: NamingTitle::new(local),
            scope,
            response_type,
            parameters,
            description: def.description.clone(),
        });
    }
}

/// Default scope of a definition: its name up to the first `_`.
fn definition_scope(name: &str) -> &str {
    match name.split_once('_') {
        Some((prefix, _)) if !prefix.is_empty() => prefix,
        _ => name,
    }
}

/// Identifier source for a member without an `enumNames` entry. Negative
/// numbers are spelled out so `-1` and `1` stay distinguishable.
fn member_name(wire: &str) -> String {
    match wire.strip_prefix('-') {
        Some(digits) if digits.starts_with(|c: char| c.is_ascii_digit()) => {
            format!("minus_{}", digits)
        }
        _ => wire.to_string(),
    }
}

fn last_segment(pointer: &str) -> &str {
    pointer.rsplit('/').next().unwrap_or(pointer)
}
