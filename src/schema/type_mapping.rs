/// GraphQL to Rust type mapping
///
/// This module resolves GraphQL type references to Rust type paths, applying the
/// configured mapping table, the built-in scalar defaults and the fallback for
/// unmapped custom scalars.

use crate::codegen::naming::rust_type_ident;
use crate::error::GenerationWarning;
use crate::schema::registry::SchemaRegistry;
use crate::schema::scalars::{suggested_type, validate_literal, DEFAULT_SCALAR_TYPE};
use crate::schema::types::{is_builtin_scalar, GraphQLType, TypeDefKind};

use indexmap::IndexMap;
use std::collections::HashSet;

/// Default Rust type for a built-in GraphQL scalar
///
/// # Type Mapping Rules
///
/// - `ID` → `String`
/// - `String` → `String`
/// - `Int` → `i32`
/// - `Float` → `f64`
/// - `Boolean` → `bool`
pub fn builtin_scalar_type(name: &str) -> Option<&'static str> {
    match name {
        "ID" | "String" => Some("String"),
        "Int" => Some("i32"),
        "Float" => Some("f64"),
        "Boolean" => Some("bool"),
        _ => None,
    }
}

/// Resolves GraphQL types against a schema and a mapping table
pub struct TypeMapper<'a> {
    registry: &'a SchemaRegistry,
    mapping: &'a IndexMap<String, String>,
}

impl<'a> TypeMapper<'a> {
    pub fn new(registry: &'a SchemaRegistry, mapping: &'a IndexMap<String, String>) -> Self {
        Self { registry, mapping }
    }

    pub fn registry(&self) -> &'a SchemaRegistry {
        self.registry
    }

    /// Whether a type is replaced by a user supplied Rust type
    pub fn is_mapped(&self, name: &str) -> bool {
        self.mapping.contains_key(name)
    }

    /// Whether a generated Rust type exists for this GraphQL type
    pub fn is_generated(&self, name: &str) -> bool {
        !self.is_mapped(name)
            && !is_builtin_scalar(name)
            && matches!(
                self.registry.get(name).map(|t| &t.kind),
                Some(
                    TypeDefKind::Object { .. }
                        | TypeDefKind::Interface { .. }
                        | TypeDefKind::Union { .. }
                        | TypeDefKind::Enum { .. }
                        | TypeDefKind::InputObject { .. }
                )
            )
    }

    /// Rust type for a named GraphQL type, ignoring nullability
    pub fn named_type(&self, name: &str) -> String {
        if let Some(mapped) = self.mapping.get(name) {
            return mapped.clone();
        }

        if let Some(builtin) = builtin_scalar_type(name) {
            return builtin.to_string();
        }

        match self.registry.get(name).map(|t| &t.kind) {
            Some(TypeDefKind::Scalar) | None => DEFAULT_SCALAR_TYPE.to_string(),
            Some(_) => rust_type_ident(name),
        }
    }

    /// Rust type for a field or argument type, honouring nullability
    ///
    /// `boxed` wraps the named type in `Box` when it is not behind a list.
    pub fn rust_type(&self, ty: &GraphQLType, boxed: bool) -> String {
        let inner = self.non_null_type(ty, boxed);
        if ty.is_nullable() {
            format!("Option<{}>", inner)
        } else {
            inner
        }
    }

    /// Rust type for a field type with its outer nullability removed
    pub fn non_null_type(&self, ty: &GraphQLType, boxed: bool) -> String {
        match ty {
            GraphQLType::Named { name, .. } => {
                let named = self.named_type(name);
                if boxed {
                    format!("Box<{}>", named)
                } else {
                    named
                }
            }
            GraphQLType::List { item, .. } => format!("Vec<{}>", self.rust_type(item, false)),
        }
    }

    /// Whether a field of `container` must be boxed to keep the type finite
    ///
    /// A field needs boxing when it is not behind a list and its type can reach
    /// `container` again through other non-list fields.
    pub fn needs_box(&self, container: &str, ty: &GraphQLType) -> bool {
        match ty {
            GraphQLType::List { .. } => false,
            GraphQLType::Named { name, .. } => {
                let mut visited = HashSet::new();
                self.reaches(name, container, &mut visited)
            }
        }
    }

    fn reaches<'b>(&'b self, from: &'b str, target: &str, visited: &mut HashSet<&'b str>) -> bool {
        if !self.is_generated(from) {
            return false;
        }
        if from == target {
            return true;
        }
        if !visited.insert(from) {
            return false;
        }

        let Some(type_def) = self.registry.get(from) else {
            return false;
        };

        match &type_def.kind {
            TypeDefKind::Object { fields, .. } => fields
                .iter()
                .filter(|f| !f.ty.is_list())
                .any(|f| self.reaches(f.ty.named_type(), target, visited)),
            TypeDefKind::InputObject { fields } => fields
                .iter()
                .filter(|f| !f.ty.is_list())
                .any(|f| self.reaches(f.ty.named_type(), target, visited)),
            TypeDefKind::Interface { .. } | TypeDefKind::Union { .. } => self
                .registry
                .possible_types(from)
                .into_iter()
                .any(|t| self.reaches(&t.name, target, visited)),
            TypeDefKind::Scalar | TypeDefKind::Enum { .. } => false,
        }
    }

    /// Non-fatal problems with the mapping table for this schema
    ///
    /// Reports each unmapped custom scalar once, mapping keys that name no
    /// schema type, and temporal default values that cannot parse.
    pub fn warnings(&self) -> Vec<GenerationWarning> {
        let mut warnings = Vec::new();

        for scalar in self.registry.custom_scalars() {
            if !self.is_mapped(&scalar.name) {
                warnings.push(GenerationWarning::UnmappedScalar {
                    scalar: scalar.name.clone(),
                    fallback: DEFAULT_SCALAR_TYPE.to_string(),
                    suggestion: suggested_type(&scalar.name).map(str::to_string),
                });
            }
        }

        for key in self.mapping.keys() {
            if !self.registry.contains(key) {
                warnings.push(GenerationWarning::UnknownMappingKey(key.clone()));
            }
        }

        for type_def in self.registry.types() {
            let mut check = |location: String, ty: &GraphQLType, literal: &Option<String>| {
                let Some(literal) = literal else { return };
                let scalar = ty.named_type();
                if validate_literal(scalar, literal) == Some(false) {
                    warnings.push(GenerationWarning::InvalidDefaultValue {
                        location,
                        scalar: scalar.to_string(),
                        literal: literal.clone(),
                    });
                }
            };

            match &type_def.kind {
                TypeDefKind::InputObject { fields } => {
                    for field in fields {
                        check(
                            format!("input field {}.{}", type_def.name, field.name),
                            &field.ty,
                            &field.default_string,
                        );
                    }
                }
                TypeDefKind::Object { fields, .. } | TypeDefKind::Interface { fields, .. } => {
                    for field in fields {
                        for argument in &field.arguments {
                            check(
                                format!(
                                    "argument {}.{}({})",
                                    type_def.name, field.name, argument.name
                                ),
                                &argument.ty,
                                &argument.default_string,
                            );
                        }
                    }
                }
                _ => {}
            }
        }

        warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry(sdl: &str) -> SchemaRegistry {
        SchemaRegistry::from_sdl(sdl).expect("schema should parse")
    }

    fn named(name: &str, nullable: bool) -> GraphQLType {
        GraphQLType::Named {
            name: name.to_string(),
            nullable,
        }
    }

    #[test]
    fn test_builtin_scalars() {
        let registry = registry("type Query { ping: String }");
        let mapping = IndexMap::new();
        let mapper = TypeMapper::new(&registry, &mapping);

        assert_eq!(mapper.rust_type(&named("ID", false), false), "String");
        assert_eq!(mapper.rust_type(&named("Int", false), false), "i32");
        assert_eq!(mapper.rust_type(&named("Float", false), false), "f64");
        assert_eq!(mapper.rust_type(&named("Boolean", true), false), "Option<bool>");
    }

    #[test]
    fn test_mapped_scalar_uses_native_type() {
        let registry = registry("scalar DateTime type Query { now: DateTime! }");
        let mut mapping = IndexMap::new();
        mapping.insert(
            "DateTime".to_string(),
            "chrono::DateTime<chrono::FixedOffset>".to_string(),
        );
        let mapper = TypeMapper::new(&registry, &mapping);

        assert_eq!(
            mapper.rust_type(&named("DateTime", false), false),
            "chrono::DateTime<chrono::FixedOffset>"
        );
        assert!(mapper.warnings().is_empty());
    }

    #[test]
    fn test_unmapped_scalar_falls_back() {
        let registry = registry("scalar DateTime type Query { now: DateTime }");
        let mapping = IndexMap::new();
        let mapper = TypeMapper::new(&registry, &mapping);

        assert_eq!(
            mapper.rust_type(&named("DateTime", true), false),
            "Option<serde_json::Value>"
        );
        assert_eq!(
            mapper.warnings(),
            vec![GenerationWarning::UnmappedScalar {
                scalar: "DateTime".to_string(),
                fallback: "serde_json::Value".to_string(),
                suggestion: Some("chrono::DateTime<chrono::FixedOffset>".to_string()),
            }]
        );
    }

    #[test]
    fn test_builtin_override() {
        let registry = registry("type Query { node(id: ID!): String }");
        let mut mapping = IndexMap::new();
        mapping.insert("ID".to_string(), "uuid::Uuid".to_string());
        let mapper = TypeMapper::new(&registry, &mapping);

        assert_eq!(mapper.rust_type(&named("ID", false), false), "uuid::Uuid");
    }

    #[test]
    fn test_unknown_mapping_key_warns() {
        let registry = registry("type Query { ping: String }");
        let mut mapping = IndexMap::new();
        mapping.insert("Money".to_string(), "rust_decimal::Decimal".to_string());
        let mapper = TypeMapper::new(&registry, &mapping);

        assert_eq!(
            mapper.warnings(),
            vec![GenerationWarning::UnknownMappingKey("Money".to_string())]
        );
    }

    #[test]
    fn test_lists() {
        let registry = registry("type Product { id: ID! } type Query { products: [Product!]! }");
        let mapping = IndexMap::new();
        let mapper = TypeMapper::new(&registry, &mapping);

        let ty = GraphQLType::List {
            item: Box::new(named("Product", true)),
            nullable: true,
        };
        assert_eq!(mapper.rust_type(&ty, false), "Option<Vec<Option<Product>>>");
        assert_eq!(mapper.non_null_type(&ty, false), "Vec<Option<Product>>");
    }

    #[test]
    fn test_recursive_types_need_box() {
        let registry = registry(
            r#"
            type Category { parent: Category children: [Category!]! owner: Owner }
            type Owner { name: String favourite: Category }
            type Product { category: Category }
            "#,
        );
        let mapping = IndexMap::new();
        let mapper = TypeMapper::new(&registry, &mapping);

        assert!(mapper.needs_box("Category", &named("Category", true)));
        assert!(mapper.needs_box("Category", &named("Owner", true)));
        assert!(!mapper.needs_box(
            "Category",
            &GraphQLType::List {
                item: Box::new(named("Category", false)),
                nullable: false
            }
        ));
        assert!(!mapper.needs_box("Product", &named("Category", true)));
    }

    #[test]
    fn test_mapped_type_breaks_recursion() {
        let registry = registry("type Category { parent: Category }");
        let mut mapping = IndexMap::new();
        mapping.insert("Category".to_string(), "crate::model::Category".to_string());
        let mapper = TypeMapper::new(&registry, &mapping);

        assert!(!mapper.needs_box("Category", &named("Category", true)));
        assert!(!mapper.is_generated("Category"));
    }

    #[test]
    fn test_invalid_temporal_default_warns() {
        let registry = registry(
            r#"
            scalar DateTime
            input Filter { since: DateTime = "yesterday" }
            "#,
        );
        let mut mapping = IndexMap::new();
        mapping.insert(
            "DateTime".to_string(),
            "chrono::DateTime<chrono::FixedOffset>".to_string(),
        );
        let mapper = TypeMapper::new(&registry, &mapping);

        assert_eq!(
            mapper.warnings(),
            vec![GenerationWarning::InvalidDefaultValue {
                location: "input field Filter.since".to_string(),
                scalar: "DateTime".to_string(),
                literal: "yesterday".to_string(),
            }]
        );
    }
}
