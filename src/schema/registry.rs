/// Schema registry
///
/// Parses schema documents with the GraphQL parser bundled in `async-graphql`
/// and merges their definitions into a single, ordered type system.
/// Type extensions are applied after all documents are read, so the order of
/// files does not matter for `extend` definitions.

use crate::codegen::naming::{rust_field_ident, rust_variant_ident, to_snake_case};
use crate::error::{CodegenError, Result};
use crate::schema::discovery::SchemaDocument;
use crate::schema::types::{
    is_builtin_scalar, EnumValue, Field, GraphQLType, InputValue, OperationKind, TypeDef,
    TypeDefKind,
};

use async_graphql::parser::types::{
    BaseType, FieldDefinition, InputValueDefinition, SchemaDefinition, ServiceDocument, Type,
    TypeDefinition, TypeKind, TypeSystemDefinition,
};
use async_graphql::parser::Positioned;
use async_graphql::Value;
use indexmap::IndexMap;
use std::collections::HashMap;

/// The merged type system of all schema documents
#[derive(Debug, Clone, Default)]
pub struct SchemaRegistry {
    types: IndexMap<String, TypeDef>,
    query_type: Option<String>,
    mutation_type: Option<String>,
    subscription_type: Option<String>,
}

/// Root operation names collected from `schema { ... }` definitions
#[derive(Default)]
struct RootNames {
    defined: bool,
    query: Option<String>,
    mutation: Option<String>,
    subscription: Option<String>,
}

impl SchemaRegistry {
    /// Parse and merge schema documents
    pub fn from_documents(documents: &[SchemaDocument]) -> Result<Self> {
        let mut registry = SchemaRegistry::default();
        let mut roots = RootNames::default();
        let mut extensions = Vec::new();

        for document in documents {
            let parsed = parse_document(document)?;
            tracing::debug!(
                "Parsed {} ({} definitions)",
                document.path.display(),
                parsed.definitions.len()
            );

            for definition in parsed.definitions {
                match definition {
                    TypeSystemDefinition::Schema(schema) => {
                        roots.merge(&schema.node)?;
                    }
                    TypeSystemDefinition::Type(def) => {
                        let extend = def.node.extend;
                        let type_def = convert_type_definition(&def.node);
                        if extend {
                            extensions.push(type_def);
                        } else {
                            registry.insert(type_def)?;
                        }
                    }
                    TypeSystemDefinition::Directive(directive) => {
                        tracing::debug!("Ignoring directive definition @{}", directive.node.name.node);
                    }
                }
            }
        }

        for extension in extensions {
            registry.apply_extension(extension)?;
        }

        registry.resolve_roots(roots)?;
        registry.validate_references()?;
        registry.validate_rust_names()?;

        Ok(registry)
    }

    /// Parse a single schema source, mainly for tests and tooling
    pub fn from_sdl(sdl: &str) -> Result<Self> {
        Self::from_documents(&[SchemaDocument {
            path: "<inline>".into(),
            content: sdl.to_string(),
        }])
    }

    pub fn get(&self, name: &str) -> Option<&TypeDef> {
        self.types.get(name)
    }

    /// All named types in declaration order
    pub fn types(&self) -> impl Iterator<Item = &TypeDef> {
        self.types.values()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name) || is_builtin_scalar(name)
    }

    /// Name of the root type for an operation kind, if the schema has one
    pub fn root_type_name(&self, kind: OperationKind) -> Option<&str> {
        match kind {
            OperationKind::Query => self.query_type.as_deref(),
            OperationKind::Mutation => self.mutation_type.as_deref(),
            OperationKind::Subscription => self.subscription_type.as_deref(),
        }
    }

    /// Root type definition for an operation kind
    pub fn root_type(&self, kind: OperationKind) -> Option<&TypeDef> {
        self.root_type_name(kind).and_then(|name| self.get(name))
    }

    pub fn is_root_type(&self, name: &str) -> bool {
        OperationKind::ALL
            .iter()
            .any(|kind| self.root_type_name(*kind) == Some(name))
    }

    /// Custom scalars declared by the schema
    pub fn custom_scalars(&self) -> impl Iterator<Item = &TypeDef> {
        self.types
            .values()
            .filter(|t| matches!(t.kind, TypeDefKind::Scalar))
    }

    /// Object types that can be returned for an interface or union
    pub fn possible_types(&self, name: &str) -> Vec<&TypeDef> {
        match self.get(name).map(|t| &t.kind) {
            Some(TypeDefKind::Union { members }) => {
                members.iter().filter_map(|m| self.get(m)).collect()
            }
            Some(TypeDefKind::Interface { .. }) => self
                .types
                .values()
                .filter(|t| match &t.kind {
                    TypeDefKind::Object { implements, .. } => implements.iter().any(|i| i == name),
                    _ => false,
                })
                .collect(),
            Some(TypeDefKind::Object { .. }) => self.get(name).into_iter().collect(),
            _ => Vec::new(),
        }
    }

    fn insert(&mut self, type_def: TypeDef) -> Result<()> {
        if is_builtin_scalar(&type_def.name) {
            // Redeclaring a built-in scalar is harmless
            if matches!(type_def.kind, TypeDefKind::Scalar) {
                return Ok(());
            }
            return Err(CodegenError::NameCollision(type_def.name));
        }

        if self.types.contains_key(&type_def.name) {
            return Err(CodegenError::DuplicateDefinition(format!(
                "{} {}",
                type_def.kind.keyword(),
                type_def.name
            )));
        }

        self.types.insert(type_def.name.clone(), type_def);
        Ok(())
    }

    fn apply_extension(&mut self, extension: TypeDef) -> Result<()> {
        let base = self.types.get_mut(&extension.name).ok_or_else(|| CodegenError::UnknownType {
            name: extension.name.clone(),
            referenced_by: format!("extend {} {}", extension.kind.keyword(), extension.name),
        })?;
        let type_name = base.name.clone();

        match (&mut base.kind, extension.kind) {
            (TypeDefKind::Scalar, TypeDefKind::Scalar) => {}
            (
                TypeDefKind::Object { implements, fields },
                TypeDefKind::Object {
                    implements: ext_implements,
                    fields: ext_fields,
                },
            )
            | (
                TypeDefKind::Interface { implements, fields },
                TypeDefKind::Interface {
                    implements: ext_implements,
                    fields: ext_fields,
                },
            ) => {
                for interface in ext_implements {
                    if !implements.contains(&interface) {
                        implements.push(interface);
                    }
                }
                for field in ext_fields {
                    if fields.iter().any(|f| f.name == field.name) {
                        return Err(CodegenError::DuplicateDefinition(format!(
                            "field {}.{}",
                            type_name, field.name
                        )));
                    }
                    fields.push(field);
                }
            }
            (TypeDefKind::Union { members }, TypeDefKind::Union { members: ext_members }) => {
                for member in ext_members {
                    if members.contains(&member) {
                        return Err(CodegenError::DuplicateDefinition(format!(
                            "union member {}.{}",
                            type_name, member
                        )));
                    }
                    members.push(member);
                }
            }
            (TypeDefKind::Enum { values }, TypeDefKind::Enum { values: ext_values }) => {
                for value in ext_values {
                    if values.iter().any(|v| v.name == value.name) {
                        return Err(CodegenError::DuplicateDefinition(format!(
                            "enum value {}.{}",
                            type_name, value.name
                        )));
                    }
                    values.push(value);
                }
            }
            (
                TypeDefKind::InputObject { fields },
                TypeDefKind::InputObject { fields: ext_fields },
            ) => {
                for field in ext_fields {
                    if fields.iter().any(|f| f.name == field.name) {
                        return Err(CodegenError::DuplicateDefinition(format!(
                            "input field {}.{}",
                            type_name, field.name
                        )));
                    }
                    fields.push(field);
                }
            }
            _ => return Err(CodegenError::NameCollision(type_name)),
        }

        Ok(())
    }

    fn resolve_roots(&mut self, roots: RootNames) -> Result<()> {
        let RootNames {
            defined,
            query,
            mutation,
            subscription,
        } = roots;

        self.query_type = self.resolve_root(OperationKind::Query, query, defined)?;
        self.mutation_type = self.resolve_root(OperationKind::Mutation, mutation, defined)?;
        self.subscription_type =
            self.resolve_root(OperationKind::Subscription, subscription, defined)?;

        Ok(())
    }

    /// Root type of one operation kind
    ///
    /// Names given by `schema` definitions or extensions win. Kinds left
    /// unnamed fall back to the default type name unless a base `schema`
    /// definition exists.
    fn resolve_root(
        &self,
        kind: OperationKind,
        named: Option<String>,
        defined: bool,
    ) -> Result<Option<String>> {
        match named {
            Some(name) if self.types.contains_key(&name) => Ok(Some(name)),
            Some(name) => Err(CodegenError::UnknownType {
                name,
                referenced_by: format!("schema {} root", kind.keyword()),
            }),
            None if defined => Ok(None),
            None => {
                let name = kind.default_type_name();
                match self.types.get(name).map(|t| &t.kind) {
                    Some(TypeDefKind::Object { .. }) => Ok(Some(name.to_string())),
                    _ => Ok(None),
                }
            }
        }
    }

    fn validate_references(&self) -> Result<()> {
        let check = |name: &str, referenced_by: String| -> Result<()> {
            if self.contains(name) {
                Ok(())
            } else {
                Err(CodegenError::UnknownType {
                    name: name.to_string(),
                    referenced_by,
                })
            }
        };

        for type_def in self.types.values() {
            match &type_def.kind {
                TypeDefKind::Scalar => {}
                TypeDefKind::Object { implements, fields }
                | TypeDefKind::Interface { implements, fields } => {
                    for interface in implements {
                        check(interface, format!("{} implements", type_def.name))?;
                    }
                    for field in fields {
                        check(
                            field.ty.named_type(),
                            format!("field {}.{}", type_def.name, field.name),
                        )?;
                        for argument in &field.arguments {
                            check(
                                argument.ty.named_type(),
                                format!(
                                    "argument {}.{}({})",
                                    type_def.name, field.name, argument.name
                                ),
                            )?;
                        }
                    }
                }
                TypeDefKind::Union { members } => {
                    for member in members {
                        check(member, format!("union {}", type_def.name))?;
                    }
                }
                TypeDefKind::Enum { .. } => {}
                TypeDefKind::InputObject { fields } => {
                    for field in fields {
                        check(
                            field.ty.named_type(),
                            format!("input field {}.{}", type_def.name, field.name),
                        )?;
                    }
                }
            }
        }

        Ok(())
    }

    /// Names that differ in GraphQL but become the same Rust identifier
    fn validate_rust_names(&self) -> Result<()> {
        let mut modules: HashMap<String, &str> = HashMap::new();

        for type_def in self.types.values() {
            let owner = type_def.name.as_str();
            match &type_def.kind {
                TypeDefKind::Scalar => continue,
                TypeDefKind::Object { fields, .. } | TypeDefKind::Interface { fields, .. } => {
                    let names = || fields.iter().map(|f| f.name.as_str());
                    ensure_distinct(owner, names(), rust_field_ident)?;
                    ensure_distinct(owner, names(), constant_key)?;
                    for field in fields {
                        ensure_distinct(
                            &format!("{}.{}", owner, field.name),
                            field.arguments.iter().map(|a| a.name.as_str()),
                            rust_field_ident,
                        )?;
                    }
                }
                TypeDefKind::InputObject { fields } => {
                    let names = || fields.iter().map(|f| f.name.as_str());
                    ensure_distinct(owner, names(), rust_field_ident)?;
                    ensure_distinct(owner, names(), constant_key)?;
                }
                TypeDefKind::Enum { values } => {
                    let names = || values.iter().map(|v| v.name.as_str());
                    ensure_distinct(owner, names(), rust_variant_ident)?;
                    ensure_distinct(owner, names(), constant_key)?;
                }
                TypeDefKind::Union { .. } => {}
            }

            // Every named type gets a module in constants.rs
            let module = rust_field_ident(owner);
            if let Some(previous) = modules.insert(module.clone(), owner) {
                return Err(CodegenError::NameCollision(format!(
                    "types {} and {} both become `{}` in Rust",
                    previous, owner, module
                )));
            }
        }

        Ok(())
    }
}

fn constant_key(name: &str) -> String {
    to_snake_case(name).to_uppercase()
}

fn ensure_distinct<'n>(
    owner: &str,
    names: impl Iterator<Item = &'n str>,
    ident: fn(&str) -> String,
) -> Result<()> {
    let mut seen: HashMap<String, &str> = HashMap::new();
    for name in names {
        let key = ident(name);
        if let Some(previous) = seen.insert(key.clone(), name) {
            return Err(CodegenError::NameCollision(format!(
                "{owner}.{previous} and {owner}.{name} both become `{key}` in Rust"
            )));
        }
    }
    Ok(())
}

impl RootNames {
    fn merge(&mut self, schema: &SchemaDefinition) -> Result<()> {
        if !schema.extend {
            if self.defined {
                return Err(CodegenError::DuplicateDefinition(
                    "schema definition".to_string(),
                ));
            }
            self.defined = true;
        }

        for (slot, name, kind) in [
            (&mut self.query, &schema.query, "query"),
            (&mut self.mutation, &schema.mutation, "mutation"),
            (&mut self.subscription, &schema.subscription, "subscription"),
        ] {
            if let Some(name) = name {
                if slot.is_some() {
                    return Err(CodegenError::DuplicateDefinition(format!(
                        "schema {} root",
                        kind
                    )));
                }
                *slot = Some(name.node.to_string());
            }
        }

        Ok(())
    }
}

/// Parse one document, mapping parser errors to `SchemaParse`
pub fn parse_document(document: &SchemaDocument) -> Result<ServiceDocument> {
    async_graphql::parser::parse_schema(&document.content).map_err(|e| {
        let pos = e.positions().next();
        CodegenError::SchemaParse {
            file: document.path.clone(),
            line: pos.map(|p| p.line).unwrap_or(0),
            column: pos.map(|p| p.column).unwrap_or(0),
            message: e.to_string(),
        }
    })
}

fn convert_type_definition(def: &TypeDefinition) -> TypeDef {
    let kind = match &def.kind {
        TypeKind::Scalar => TypeDefKind::Scalar,
        TypeKind::Object(object) => TypeDefKind::Object {
            implements: names(&object.implements),
            fields: object.fields.iter().map(convert_field).collect(),
        },
        TypeKind::Interface(interface) => TypeDefKind::Interface {
            implements: names(&interface.implements),
            fields: interface.fields.iter().map(convert_field).collect(),
        },
        TypeKind::Union(union) => TypeDefKind::Union {
            members: names(&union.members),
        },
        TypeKind::Enum(enum_type) => TypeDefKind::Enum {
            values: enum_type
                .values
                .iter()
                .map(|value| EnumValue {
                    name: value.node.value.node.to_string(),
                    description: value.node.description.as_ref().map(|d| d.node.clone()),
                })
                .collect(),
        },
        TypeKind::InputObject(input) => TypeDefKind::InputObject {
            fields: input.fields.iter().map(convert_input_value).collect(),
        },
    };

    TypeDef {
        name: def.name.node.to_string(),
        description: def.description.as_ref().map(|d| d.node.clone()),
        kind,
    }
}

fn convert_field(field: &Positioned<FieldDefinition>) -> Field {
    let field = &field.node;
    Field {
        name: field.name.node.to_string(),
        description: field.description.as_ref().map(|d| d.node.clone()),
        arguments: field.arguments.iter().map(convert_input_value).collect(),
        ty: convert_type(&field.ty.node),
    }
}

fn convert_input_value(value: &Positioned<InputValueDefinition>) -> InputValue {
    let value = &value.node;
    let default = value.default_value.as_ref().map(|d| &d.node);
    InputValue {
        name: value.name.node.to_string(),
        description: value.description.as_ref().map(|d| d.node.clone()),
        ty: convert_type(&value.ty.node),
        default_value: default.map(|v| v.to_string()),
        default_string: match default {
            Some(Value::String(s)) => Some(s.clone()),
            _ => None,
        },
    }
}

fn convert_type(ty: &Type) -> GraphQLType {
    match &ty.base {
        BaseType::Named(name) => GraphQLType::Named {
            name: name.to_string(),
            nullable: ty.nullable,
        },
        BaseType::List(item) => GraphQLType::List {
            item: Box::new(convert_type(item)),
            nullable: ty.nullable,
        },
    }
}

fn names<T: ToString>(items: &[Positioned<T>]) -> Vec<String> {
    items.iter().map(|item| item.node.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PRODUCTS: &str = r#"
        scalar DateTime

        type Query {
            products: [Product!]!
        }

        type Product {
            id: ID!
            name: String!
            createdOn: DateTime
        }
    "#;

    #[test]
    fn test_declaration_order_preserved() {
        let registry = SchemaRegistry::from_sdl(PRODUCTS).unwrap();
        let names: Vec<&str> = registry.types().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["DateTime", "Query", "Product"]);
    }

    #[test]
    fn test_default_root_types() {
        let registry = SchemaRegistry::from_sdl(PRODUCTS).unwrap();
        assert_eq!(registry.root_type_name(OperationKind::Query), Some("Query"));
        assert_eq!(registry.root_type_name(OperationKind::Mutation), None);
        assert!(registry.is_root_type("Query"));
        assert!(!registry.is_root_type("Product"));
    }

    #[test]
    fn test_schema_definition_names_roots() {
        let registry = SchemaRegistry::from_sdl(
            r#"
            schema { query: RootQuery mutation: RootMutation }
            type RootQuery { ping: String }
            type RootMutation { touch(id: ID!): Boolean }
            type Query { unused: String }
            "#,
        )
        .unwrap();

        assert_eq!(registry.root_type_name(OperationKind::Query), Some("RootQuery"));
        assert_eq!(registry.root_type_name(OperationKind::Mutation), Some("RootMutation"));
        assert!(!registry.is_root_type("Query"));
    }

    #[test]
    fn test_extensions_merge_across_documents() {
        let documents = vec![
            SchemaDocument {
                path: "a.graphqls".into(),
                content: "extend type Query { materials: [Material!]! }".to_string(),
            },
            SchemaDocument {
                path: "b.graphqls".into(),
                content: PRODUCTS.to_string(),
            },
            SchemaDocument {
                path: "c.graphqls".into(),
                content: "type Material { id: ID! name: String }".to_string(),
            },
        ];

        let registry = SchemaRegistry::from_documents(&documents).unwrap();
        let query = registry.get("Query").unwrap();
        let fields: Vec<&str> = query.fields().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(fields, vec!["products", "materials"]);
    }

    #[test]
    fn test_duplicate_type_definition() {
        let err = SchemaRegistry::from_sdl(
            r#"
            type Product { id: ID! }
            type Product { name: String }
            "#,
        )
        .unwrap_err();

        assert!(matches!(err, CodegenError::DuplicateDefinition(_)));
    }

    #[test]
    fn test_duplicate_field_in_extension() {
        let err = SchemaRegistry::from_sdl(
            r#"
            type Product { id: ID! }
            extend type Product { id: ID! }
            "#,
        )
        .unwrap_err();

        assert!(matches!(err, CodegenError::DuplicateDefinition(_)));
    }

    #[test]
    fn test_extension_of_different_kind() {
        let err = SchemaRegistry::from_sdl(
            r#"
            enum Product { A }
            extend type Product { id: ID! }
            "#,
        )
        .unwrap_err();

        assert!(matches!(err, CodegenError::NameCollision(_)));
    }

    #[test]
    fn test_extension_of_undefined_type() {
        let err = SchemaRegistry::from_sdl("extend type Product { id: ID! }").unwrap_err();
        assert!(matches!(err, CodegenError::UnknownType { .. }));
    }

    #[test]
    fn test_unknown_field_type() {
        let err = SchemaRegistry::from_sdl("type Product { material: Material }").unwrap_err();
        match err {
            CodegenError::UnknownType { name, referenced_by } => {
                assert_eq!(name, "Material");
                assert_eq!(referenced_by, "field Product.material");
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_parse_error_reports_location() {
        let err = SchemaRegistry::from_documents(&[SchemaDocument {
            path: "broken.graphqls".into(),
            content: "type Product {\n  id: ID!\n  name: \n".to_string(),
        }])
        .unwrap_err();

        match err {
            CodegenError::SchemaParse { file, line, .. } => {
                assert_eq!(file, std::path::PathBuf::from("broken.graphqls"));
                assert!(line >= 3);
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_possible_types() {
        let registry = SchemaRegistry::from_sdl(
            r#"
            interface Node { id: ID! }
            type Product implements Node { id: ID! }
            type Material implements Node { id: ID! }
            type Failure { message: String }
            union DeletionResult = Product | Failure
            "#,
        )
        .unwrap();

        let node: Vec<&str> = registry
            .possible_types("Node")
            .iter()
            .map(|t| t.name.as_str())
            .collect();
        assert_eq!(node, vec!["Product", "Material"]);

        let union: Vec<&str> = registry
            .possible_types("DeletionResult")
            .iter()
            .map(|t| t.name.as_str())
            .collect();
        assert_eq!(union, vec!["Product", "Failure"]);
    }

    #[test]
    fn test_string_default_values_captured() {
        let registry = SchemaRegistry::from_sdl(
            r#"
            scalar DateTime
            input Filter { since: DateTime = "2024-02-24T00:00:00Z" limit: Int = 10 }
            "#,
        )
        .unwrap();

        match &registry.get("Filter").unwrap().kind {
            TypeDefKind::InputObject { fields } => {
                assert_eq!(fields[0].default_string.as_deref(), Some("2024-02-24T00:00:00Z"));
                assert_eq!(fields[1].default_value.as_deref(), Some("10"));
                assert_eq!(fields[1].default_string, None);
            }
            _ => panic!("Filter should be an input type"),
        }
    }

    #[test]
    fn test_extend_interface_enum_union_and_input() {
        let registry = SchemaRegistry::from_sdl(
            r#"
            interface Node { id: ID! }
            extend interface Node { createdOn: String }

            enum FailureType { NOT_FOUND }
            extend enum FailureType { STILL_REFERENCED }

            type Product implements Node { id: ID! createdOn: String }
            type Failure { message: String }
            type DeletionSuccess { id: ID! }
            union DeletionResult = Failure
            extend union DeletionResult = DeletionSuccess

            input ProductFilter { name: String }
            extend input ProductFilter { materialId: ID }
            "#,
        )
        .unwrap();

        let node: Vec<&str> = registry
            .get("Node")
            .unwrap()
            .fields()
            .iter()
            .map(|f| f.name.as_str())
            .collect();
        assert_eq!(node, vec!["id", "createdOn"]);

        match &registry.get("FailureType").unwrap().kind {
            TypeDefKind::Enum { values } => {
                let values: Vec<&str> = values.iter().map(|v| v.name.as_str()).collect();
                assert_eq!(values, vec!["NOT_FOUND", "STILL_REFERENCED"]);
            }
            _ => panic!("FailureType should be an enum"),
        }

        let members: Vec<&str> = registry
            .possible_types("DeletionResult")
            .iter()
            .map(|t| t.name.as_str())
            .collect();
        assert_eq!(members, vec!["Failure", "DeletionSuccess"]);

        match &registry.get("ProductFilter").unwrap().kind {
            TypeDefKind::InputObject { fields } => {
                let fields: Vec<&str> = fields.iter().map(|f| f.name.as_str()).collect();
                assert_eq!(fields, vec!["name", "materialId"]);
            }
            _ => panic!("ProductFilter should be an input type"),
        }
    }

    #[test]
    fn test_duplicate_enum_value_in_extension() {
        let err = SchemaRegistry::from_sdl(
            r#"
            enum FailureType { NOT_FOUND }
            extend enum FailureType { NOT_FOUND }
            "#,
        )
        .unwrap_err();

        assert!(matches!(err, CodegenError::DuplicateDefinition(ref what) if what == "enum value FailureType.NOT_FOUND"));
    }

    #[test]
    fn test_duplicate_union_member_in_extension() {
        let err = SchemaRegistry::from_sdl(
            r#"
            type Failure { message: String }
            union DeletionResult = Failure
            extend union DeletionResult = Failure
            "#,
        )
        .unwrap_err();

        assert!(matches!(err, CodegenError::DuplicateDefinition(ref what) if what == "union member DeletionResult.Failure"));
    }

    #[test]
    fn test_second_schema_definition() {
        let err = SchemaRegistry::from_sdl(
            r#"
            schema { query: Query }
            schema { mutation: Mutation }
            type Query { ping: String }
            type Mutation { touch: Boolean }
            "#,
        )
        .unwrap_err();

        assert!(matches!(err, CodegenError::DuplicateDefinition(ref what) if what == "schema definition"));
    }

    #[test]
    fn test_object_named_like_builtin_scalar() {
        let err = SchemaRegistry::from_sdl("type String { x: Int }").unwrap_err();
        assert!(matches!(err, CodegenError::NameCollision(ref name) if name == "String"));

        // Redeclaring the scalar itself is accepted
        assert!(SchemaRegistry::from_sdl("scalar String type Query { a: String }").is_ok());
    }

    #[test]
    fn test_schema_extension_without_base_definition() {
        let registry = SchemaRegistry::from_sdl(
            r#"
            extend schema { query: RootQuery }
            type RootQuery { ping: String }
            type Query { unused: String }
            type Mutation { touch: Boolean }
            "#,
        )
        .unwrap();

        assert_eq!(registry.root_type_name(OperationKind::Query), Some("RootQuery"));
        assert_eq!(registry.root_type_name(OperationKind::Mutation), Some("Mutation"));
        assert!(!registry.is_root_type("Query"));
    }

    #[test]
    fn test_fields_with_same_rust_name() {
        let err = SchemaRegistry::from_sdl("type Product { productId: ID product_id: ID }").unwrap_err();
        match err {
            CodegenError::NameCollision(message) => {
                assert_eq!(
                    message,
                    "Product.productId and Product.product_id both become `product_id` in Rust"
                );
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_enum_values_with_same_rust_name() {
        let err = SchemaRegistry::from_sdl("enum Status { NOT_FOUND notFound }").unwrap_err();
        assert!(matches!(err, CodegenError::NameCollision(_)));
    }

    #[test]
    fn test_arguments_with_same_rust_name() {
        let err = SchemaRegistry::from_sdl("type Query { product(productId: ID, product_id: ID): String }")
            .unwrap_err();
        assert!(matches!(err, CodegenError::NameCollision(ref message) if message.starts_with("Query.product.productId")));
    }

    #[test]
    fn test_types_with_same_module_name() {
        let err = SchemaRegistry::from_sdl("type OrderItem { id: ID } type Order_Item { id: ID }").unwrap_err();
        assert!(matches!(err, CodegenError::NameCollision(ref message) if message.contains("`order_item`")));
    }
}
