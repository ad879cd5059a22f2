/// Client stub emitter
///
/// Produces `client.rs`: a request type, one builder per root operation field
/// and one selection-set builder ("projection") per composite type.

use crate::codegen::naming::{rust_field_ident, to_pascal_case, to_snake_case};
use crate::codegen::types::is_optional_input;
use crate::codegen::writer::CodeWriter;
use crate::schema::type_mapping::TypeMapper;
use crate::schema::types::{Field, InputValue, OperationKind, TypeDef, TypeDefKind};

/// Helpers shared by every generated builder
const CLIENT_RUNTIME: &str = r##"/// Body of a GraphQL request
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphQLRequest {
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_name: Option<String>,
    #[serde(skip_serializing_if = "serde_json::Map::is_empty")]
    pub variables: serde_json::Map<String, serde_json::Value>,
}

/// A selection set under construction
pub trait Projection {
    /// The selection set, braces included
    fn selection_set(&self) -> String;
}

fn selection_set(fields: &[String]) -> String {
    if fields.is_empty() {
        "{ __typename }".to_string()
    } else {
        format!("{{ {} }}", fields.join(" "))
    }
}

fn abstract_selection_set(fields: &[String]) -> String {
    if fields.iter().any(|f| f == "__typename") {
        return selection_set(fields);
    }
    let mut all = vec!["__typename".to_string()];
    all.extend(fields.iter().cloned());
    selection_set(&all)
}

fn build_request(
    operation: &str,
    operation_name: &str,
    field: &str,
    variables: Vec<(&str, &str, serde_json::Value)>,
    selection: Option<String>,
) -> GraphQLRequest {
    let mut query = format!("{} {}", operation, operation_name);
    if !variables.is_empty() {
        let definitions: Vec<String> = variables
            .iter()
            .map(|(name, graphql_type, _)| format!("${}: {}", name, graphql_type))
            .collect();
        query.push_str(&format!("({})", definitions.join(", ")));
    }
    query.push_str(" { ");
    query.push_str(field);
    if !variables.is_empty() {
        let arguments: Vec<String> = variables
            .iter()
            .map(|(name, _, _)| format!("{}: ${}", name, name))
            .collect();
        query.push_str(&format!("({})", arguments.join(", ")));
    }
    if let Some(selection) = selection {
        query.push(' ');
        query.push_str(&selection);
    }
    query.push_str(" }");

    GraphQLRequest {
        query,
        operation_name: Some(operation_name.to_string()),
        variables: variables
            .into_iter()
            .map(|(name, _, value)| (name.to_string(), value))
            .collect(),
    }
}"##;

/// Method names a projection must not generate for a field
const RESERVED_METHODS: &[&str] = &["clone", "default", "eq", "fmt", "selection_set"];

/// Client generation options
pub struct ClientOptions<'a> {
    pub include_queries: &'a [String],
    pub include_mutations: &'a [String],
}

/// Render the body of `client.rs`
pub fn render_client(mapper: &TypeMapper<'_>, options: &ClientOptions<'_>) -> String {
    let registry = mapper.registry();
    let mut w = CodeWriter::new();

    w.line("use serde::Serialize;");
    w.blank();
    w.line("#[allow(unused_imports)]");
    w.line("use super::types::*;");
    w.blank();
    w.lines(CLIENT_RUNTIME);

    for kind in OperationKind::ALL {
        let Some(root) = registry.root_type(kind) else {
            continue;
        };
        let include: &[String] = match kind {
            OperationKind::Query => options.include_queries,
            OperationKind::Mutation => options.include_mutations,
            OperationKind::Subscription => &[],
        };

        for name in include {
            if !root.fields().iter().any(|f| &f.name == name) {
                tracing::warn!("Included {} field '{}' is not defined on {}", kind.keyword(), name, root.name);
            }
        }

        for field in root.fields() {
            if !include.is_empty() && !include.contains(&field.name) {
                tracing::debug!("Skipping {} builder for {}", kind.keyword(), field.name);
                continue;
            }
            w.blank();
            write_operation(&mut w, mapper, kind, field);
        }
    }

    for type_def in registry.types() {
        if type_def.is_composite() {
            w.blank();
            write_projection(&mut w, mapper, type_def);
        }
    }

    w.finish()
}

/// Name of the builder struct for a root field, e.g. `CreateProductGraphQLMutation`
pub fn operation_ident(kind: OperationKind, field: &str) -> String {
    format!("{}GraphQL{}", to_pascal_case(field), to_pascal_case(kind.keyword()))
}

/// Name of the projection struct for a composite type
pub fn projection_ident(type_name: &str) -> String {
    format!("{}Projection", type_name)
}

fn write_operation(w: &mut CodeWriter, mapper: &TypeMapper<'_>, kind: OperationKind, field: &Field) {
    let ident = operation_ident(kind, &field.name);
    let (required, optional): (Vec<&InputValue>, Vec<&InputValue>) =
        field.arguments.iter().partition(|a| !is_optional_input(a));
    let return_type = field.ty.named_type();
    let composite = mapper
        .registry()
        .get(return_type)
        .map(TypeDef::is_composite)
        .unwrap_or(false);

    w.doc(field.description.as_deref());
    if field.description.is_some() {
        w.line("///");
    }
    w.line(format!("/// `{} {{ {}: {} }}`", kind.keyword(), field.name, field.ty));
    if required.is_empty() {
        w.line("#[derive(Debug, Clone, PartialEq, Default)]");
    } else {
        w.line("#[derive(Debug, Clone, PartialEq)]");
    }
    if field.arguments.is_empty() {
        w.line(format!("pub struct {} {{}}", ident));
    } else {
        w.block(format!("pub struct {} {{", ident), "}", |w| {
            for arg in &field.arguments {
                w.doc(arg.description.as_deref());
                let ty = mapper.non_null_type(&arg.ty, false);
                if is_optional_input(arg) {
                    w.line(format!("pub {}: Option<{}>,", rust_field_ident(&arg.name), ty));
                } else {
                    w.line(format!("pub {}: {},", rust_field_ident(&arg.name), ty));
                }
            }
        });
    }

    w.blank();
    w.block(format!("impl {} {{", ident), "}", |w| {
        w.line(format!("pub const OPERATION: &'static str = \"{}\";", kind.keyword()));
        w.line(format!(
            "pub const OPERATION_NAME: &'static str = \"{}\";",
            to_pascal_case(&field.name)
        ));
        w.line(format!("pub const FIELD_NAME: &'static str = \"{}\";", field.name));

        w.blank();
        let params = required
            .iter()
            .map(|a| format!("{}: {}", rust_field_ident(&a.name), mapper.non_null_type(&a.ty, false)))
            .collect::<Vec<_>>()
            .join(", ");
        w.block(format!("pub fn new({}) -> Self {{", params), "}", |w| {
            w.block("Self {", "}", |w| {
                for arg in &field.arguments {
                    let arg_ident = rust_field_ident(&arg.name);
                    if is_optional_input(arg) {
                        w.line(format!("{}: None,", arg_ident));
                    } else {
                        w.line(format!("{},", arg_ident));
                    }
                }
            });
        });

        for arg in &optional {
            let arg_ident = rust_field_ident(&arg.name);
            w.blank();
            w.block(
                format!(
                    "pub fn with_{}(mut self, {}: {}) -> Self {{",
                    to_snake_case(&arg.name),
                    arg_ident,
                    mapper.non_null_type(&arg.ty, false)
                ),
                "}",
                |w| {
                    w.line(format!("self.{} = Some({});", arg_ident, arg_ident));
                    w.line("self");
                },
            );
        }

        w.blank();
        let signature = if composite {
            format!(
                "pub fn to_request(&self, projection: &{}) -> Result<GraphQLRequest, serde_json::Error> {{",
                projection_ident(return_type)
            )
        } else {
            "pub fn to_request(&self) -> Result<GraphQLRequest, serde_json::Error> {".to_string()
        };
        w.block(signature, "}", |w| {
            if field.arguments.is_empty() {
                w.line("let variables = Vec::new();");
            } else {
                w.line("let mut variables = Vec::new();");
            }
            for arg in &field.arguments {
                let arg_ident = rust_field_ident(&arg.name);
                if is_optional_input(arg) {
                    w.block(format!("if let Some(value) = &self.{} {{", arg_ident), "}", |w| {
                        w.line(format!(
                            "variables.push((\"{}\", \"{}\", serde_json::to_value(value)?));",
                            arg.name, arg.ty
                        ));
                    });
                } else {
                    w.line(format!(
                        "variables.push((\"{}\", \"{}\", serde_json::to_value(&self.{})?));",
                        arg.name, arg.ty, arg_ident
                    ));
                }
            }
            let selection = if composite {
                "Some(projection.selection_set())"
            } else {
                "None"
            };
            w.line(format!(
                "Ok(build_request(Self::OPERATION, Self::OPERATION_NAME, Self::FIELD_NAME, variables, {}))",
                selection
            ));
        });
    });
}

fn write_projection(w: &mut CodeWriter, mapper: &TypeMapper<'_>, type_def: &TypeDef) {
    let registry = mapper.registry();
    let ident = projection_ident(&type_def.name);
    let is_abstract = !matches!(type_def.kind, TypeDefKind::Object { .. });

    w.line(format!("/// Selection set builder for `{}`", type_def.name));
    w.line("#[derive(Debug, Clone, PartialEq, Default)]");
    w.block(format!("pub struct {} {{", ident), "}", |w| {
        w.line("fields: Vec<String>,");
    });

    w.blank();
    w.block(format!("impl {} {{", ident), "}", |w| {
        let mut first = true;
        let mut separate = |w: &mut CodeWriter| {
            if !first {
                w.blank();
            }
            first = false;
        };

        for field in type_def.fields() {
            // Fields with required arguments cannot be selected without values
            if field.arguments.iter().any(|a| !is_optional_input(a)) {
                continue;
            }

            let method = projection_method(&field.name);
            let nested = registry
                .get(field.ty.named_type())
                .filter(|t| t.is_composite());

            separate(w);
            w.line(format!("/// `{}: {}`", field.name, field.ty));
            match nested {
                Some(nested) => {
                    let nested_ident = projection_ident(&nested.name);
                    w.block(
                        format!(
                            "pub fn {}(mut self, projection: impl FnOnce({}) -> {}) -> Self {{",
                            method, nested_ident, nested_ident
                        ),
                        "}",
                        |w| {
                            w.line(format!("let nested = projection({}::default());", nested_ident));
                            w.line(format!(
                                "self.fields.push(format!(\"{} {{}}\", nested.selection_set()));",
                                field.name
                            ));
                            w.line("self");
                        },
                    );
                }
                None => {
                    w.block(format!("pub fn {}(mut self) -> Self {{", method), "}", |w| {
                        w.line(format!("self.fields.push(\"{}\".to_string());", field.name));
                        w.line("self");
                    });
                }
            }
        }

        if is_abstract {
            for member in registry.possible_types(&type_def.name) {
                let member_ident = projection_ident(&member.name);
                separate(w);
                w.line(format!("/// Fields selected when the value is a `{}`", member.name));
                w.block(
                    format!(
                        "pub fn on_{}(mut self, projection: impl FnOnce({}) -> {}) -> Self {{",
                        to_snake_case(&member.name),
                        member_ident,
                        member_ident
                    ),
                    "}",
                    |w| {
                        w.line(format!("let nested = projection({}::default());", member_ident));
                        w.line(format!(
                            "self.fields.push(format!(\"... on {} {{}}\", nested.selection_set()));",
                            member.name
                        ));
                        w.line("self");
                    },
                );
            }
        }

        separate(w);
        w.block("pub fn __typename(mut self) -> Self {", "}", |w| {
            w.line("self.fields.push(\"__typename\".to_string());");
            w.line("self");
        });
    });

    w.blank();
    w.block(format!("impl Projection for {} {{", ident), "}", |w| {
        w.block("fn selection_set(&self) -> String {", "}", |w| {
            if is_abstract {
                w.line("abstract_selection_set(&self.fields)");
            } else {
                w.line("selection_set(&self.fields)");
            }
        });
    });
}

fn projection_method(field_name: &str) -> String {
    let ident = rust_field_ident(field_name);
    if RESERVED_METHODS.contains(&ident.as_str()) {
        format!("{}_", ident)
    } else {
        ident
    }
}
