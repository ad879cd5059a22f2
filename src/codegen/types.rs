/// Data type emitter
///
/// Produces `types.rs`: one Rust item per GraphQL object, interface, union,
/// enum and input type.
///
/// - Object types become structs whose fields are all `Option`, since a
///   client projection may select any subset of them.
/// - Input types become structs that follow schema nullability.
/// - Interfaces and unions become enums tagged by `__typename`.
/// - Enums become fieldless enums renamed to their GraphQL values.

use crate::codegen::naming::{rust_field_ident, rust_type_ident, rust_variant_ident};
use crate::codegen::writer::CodeWriter;
use crate::schema::type_mapping::TypeMapper;
use crate::schema::types::{EnumValue, Field, InputValue, TypeDef, TypeDefKind};

use std::collections::HashSet;

/// Render the body of `types.rs`
///
/// With `data_types` unset only enums and input types are emitted; they are
/// still needed by the client stub.
pub fn render_types(mapper: &TypeMapper<'_>, data_types: bool) -> String {
    let registry = mapper.registry();
    let referenced_roots = referenced_root_types(mapper);

    let mut w = CodeWriter::new();
    w.line("use serde::{Deserialize, Serialize};");

    for type_def in registry.types() {
        if !mapper.is_generated(&type_def.name) {
            continue;
        }
        if registry.is_root_type(&type_def.name) && !referenced_roots.contains(type_def.name.as_str()) {
            continue;
        }

        match &type_def.kind {
            TypeDefKind::Object { fields, .. } if data_types => {
                w.blank();
                write_object(&mut w, mapper, type_def, fields);
            }
            TypeDefKind::Interface { .. } | TypeDefKind::Union { .. } if data_types => {
                w.blank();
                write_abstract(&mut w, mapper, type_def);
            }
            TypeDefKind::Enum { values } => {
                w.blank();
                write_enum(&mut w, type_def, values);
            }
            TypeDefKind::InputObject { fields } => {
                w.blank();
                write_input(&mut w, mapper, type_def, fields);
            }
            _ => {}
        }
    }

    w.finish()
}

fn write_object(w: &mut CodeWriter, mapper: &TypeMapper<'_>, type_def: &TypeDef, fields: &[Field]) {
    w.doc(type_def.description.as_deref());
    w.line("#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]");
    w.block(format!("pub struct {} {{", rust_type_ident(&type_def.name)), "}", |w| {
        for field in fields {
            let boxed = mapper.needs_box(&type_def.name, &field.ty);
            let ty = mapper.non_null_type(&field.ty, boxed);
            w.doc(field.description.as_deref());
            w.line(serde_attribute(&field.name, true));
            w.line(format!("pub {}: Option<{}>,", rust_field_ident(&field.name), ty));
        }
    });
}

fn write_input(
    w: &mut CodeWriter,
    mapper: &TypeMapper<'_>,
    type_def: &TypeDef,
    fields: &[InputValue],
) {
    let type_ident = rust_type_ident(&type_def.name);

    w.doc(type_def.description.as_deref());
    w.line("#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]");
    w.block(format!("pub struct {} {{", type_ident), "}", |w| {
        for field in fields {
            let boxed = mapper.needs_box(&type_def.name, &field.ty);
            let optional = is_optional_input(field);
            let ty = mapper.non_null_type(&field.ty, boxed);

            w.doc(field.description.as_deref());
            if let Some(default) = &field.default_value {
                w.line(format!("/// Defaults to `{}` on the server.", default));
            }
            let attribute = serde_attribute(&field.name, optional);
            if !attribute.is_empty() {
                w.line(attribute);
            }
            if optional {
                w.line(format!("pub {}: Option<{}>,", rust_field_ident(&field.name), ty));
            } else {
                w.line(format!("pub {}: {},", rust_field_ident(&field.name), ty));
            }
        }
    });

    // Constructor taking every required field
    let required: Vec<&InputValue> = fields.iter().filter(|f| !is_optional_input(f)).collect();
    w.blank();
    w.block(format!("impl {} {{", type_ident), "}", |w| {
        let params = required
            .iter()
            .map(|f| {
                let boxed = mapper.needs_box(&type_def.name, &f.ty);
                format!(
                    "{}: {}",
                    rust_field_ident(&f.name),
                    mapper.non_null_type(&f.ty, boxed)
                )
            })
            .collect::<Vec<_>>()
            .join(", ");
        w.block(format!("pub fn new({}) -> Self {{", params), "}", |w| {
            w.block("Self {", "}", |w| {
                for field in fields {
                    let ident = rust_field_ident(&field.name);
                    if is_optional_input(field) {
                        w.line(format!("{}: None,", ident));
                    } else {
                        w.line(format!("{},", ident));
                    }
                }
            });
        });
    });
}

fn write_enum(w: &mut CodeWriter, type_def: &TypeDef, values: &[EnumValue]) {
    let type_ident = rust_type_ident(&type_def.name);

    w.doc(type_def.description.as_deref());
    w.line("#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]");
    w.block(format!("pub enum {} {{", type_ident), "}", |w| {
        for value in values {
            w.doc(value.description.as_deref());
            let variant = rust_variant_ident(&value.name);
            if variant != value.name {
                w.line(format!("#[serde(rename = \"{}\")]", value.name));
            }
            w.line(format!("{},", variant));
        }
    });

    w.blank();
    w.block(format!("impl {} {{", type_ident), "}", |w| {
        w.line("/// Value as written in GraphQL documents");
        w.block("pub fn as_str(&self) -> &'static str {", "}", |w| {
            if values.is_empty() {
                w.line("match *self {}");
                return;
            }
            w.block("match self {", "}", |w| {
                for value in values {
                    w.line(format!(
                        "{}::{} => \"{}\",",
                        type_ident,
                        rust_variant_ident(&value.name),
                        value.name
                    ));
                }
            });
        });
    });
}

fn write_abstract(w: &mut CodeWriter, mapper: &TypeMapper<'_>, type_def: &TypeDef) {
    w.doc(type_def.description.as_deref());
    w.line("#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]");
    w.line("#[serde(tag = \"__typename\")]");
    w.block(format!("pub enum {} {{", rust_type_ident(&type_def.name)), "}", |w| {
        for member in mapper.registry().possible_types(&type_def.name) {
            let variant = rust_type_ident(&member.name);
            if variant != member.name {
                w.line(format!("#[serde(rename = \"{}\")]", member.name));
            }
            w.line(format!("{}({}),", variant, mapper.named_type(&member.name)));
        }
        w.line("/// A type added to the schema after this code was generated");
        w.line("#[serde(other)]");
        w.line("Unknown,");
    });
}

/// Root operation types that other data types refer to
///
/// Root types only get a struct when a field, union member or interface
/// implementor reachable from the other data types names them.
fn referenced_root_types<'r>(mapper: &TypeMapper<'r>) -> HashSet<&'r str> {
    let registry = mapper.registry();
    let mut referenced = HashSet::new();
    let mut pending: Vec<&TypeDef> = registry
        .types()
        .filter(|t| !registry.is_root_type(&t.name))
        .collect();

    while let Some(type_def) = pending.pop() {
        let mut names: Vec<&str> = type_def.fields().iter().map(|f| f.ty.named_type()).collect();
        if matches!(type_def.kind, TypeDefKind::Interface { .. } | TypeDefKind::Union { .. }) {
            names.extend(
                registry
                    .possible_types(&type_def.name)
                    .into_iter()
                    .map(|t| t.name.as_str()),
            );
        }

        for name in names {
            if registry.is_root_type(name) && mapper.is_generated(name) && referenced.insert(name) {
                pending.extend(registry.get(name));
            }
        }
    }

    referenced
}

/// Nullable inputs and inputs with a server-side default may be omitted
pub(crate) fn is_optional_input(value: &InputValue) -> bool {
    value.ty.is_nullable() || value.default_value.is_some()
}

fn serde_attribute(graphql_name: &str, optional: bool) -> String {
    let mut parts = Vec::new();
    if rust_field_ident(graphql_name).trim_start_matches("r#") != graphql_name {
        parts.push(format!("rename = \"{}\"", graphql_name));
    }
    if optional {
        parts.push("default".to_string());
        parts.push("skip_serializing_if = \"Option::is_none\"".to_string());
    }

    if parts.is_empty() {
        String::new()
    } else {
        format!("#[serde({})]", parts.join(", "))
    }
}
