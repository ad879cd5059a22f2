use crate::codegen::naming::{rust_field_ident, to_snake_case};
use crate::codegen::writer::CodeWriter;
use crate::schema::registry::SchemaRegistry;
use crate::schema::types::{OperationKind, TypeDefKind};

/// Render the body of `constants.rs`
///
/// One module per named type holding its GraphQL name and the names of its
/// fields, input fields or enum values.
pub fn render_constants(registry: &SchemaRegistry) -> String {
    let mut w = CodeWriter::new();

    for kind in OperationKind::ALL {
        if let Some(name) = registry.root_type_name(kind) {
            w.line(format!(
                "pub const {}_TYPE: &str = \"{}\";",
                kind.keyword().to_uppercase(),
                name
            ));
        }
    }

    for type_def in registry.types() {
        let names: Vec<&str> = match &type_def.kind {
            TypeDefKind::Scalar => continue,
            TypeDefKind::Object { fields, .. } | TypeDefKind::Interface { fields, .. } => {
                fields.iter().map(|f| f.name.as_str()).collect()
            }
            TypeDefKind::InputObject { fields } => fields.iter().map(|f| f.name.as_str()).collect(),
            TypeDefKind::Enum { values } => values.iter().map(|v| v.name.as_str()).collect(),
            TypeDefKind::Union { .. } => Vec::new(),
        };

        w.blank();
        w.block(format!("pub mod {} {{", rust_field_ident(&type_def.name)), "}", |w| {
            w.line(format!("pub const TYPE_NAME: &str = \"{}\";", type_def.name));
            for name in names {
                w.line(format!("pub const {}: &str = \"{}\";", constant_ident(name), name));
            }
        });
    }

    w.finish()
}

fn constant_ident(name: &str) -> String {
    let ident = to_snake_case(name).to_uppercase();
    if ident == "TYPE_NAME" {
        format!("{}_", ident)
    } else {
        ident
    }
}
