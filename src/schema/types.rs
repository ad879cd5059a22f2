use std::fmt;

/// Built-in GraphQL scalars
pub const BUILTIN_SCALARS: &[&str] = &["ID", "String", "Int", "Float", "Boolean"];

/// Whether `name` is one of the built-in GraphQL scalars
pub fn is_builtin_scalar(name: &str) -> bool {
    BUILTIN_SCALARS.contains(&name)
}

/// A reference to a type as written on a field or argument
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphQLType {
    Named { name: String, nullable: bool },
    List { item: Box<GraphQLType>, nullable: bool },
}

impl GraphQLType {
    /// The innermost named type
    pub fn named_type(&self) -> &str {
        match self {
            GraphQLType::Named { name, .. } => name,
            GraphQLType::List { item, .. } => item.named_type(),
        }
    }

    pub fn is_nullable(&self) -> bool {
        match self {
            GraphQLType::Named { nullable, .. } | GraphQLType::List { nullable, .. } => *nullable,
        }
    }

    pub fn is_list(&self) -> bool {
        matches!(self, GraphQLType::List { .. })
    }
}

impl fmt::Display for GraphQLType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphQLType::Named { name, nullable } => {
                write!(f, "{}", name)?;
                if !nullable {
                    write!(f, "!")?;
                }
            }
            GraphQLType::List { item, nullable } => {
                write!(f, "[{}]", item)?;
                if !nullable {
                    write!(f, "!")?;
                }
            }
        }
        Ok(())
    }
}

/// An argument or input object field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputValue {
    pub name: String,
    pub description: Option<String>,
    pub ty: GraphQLType,
    /// Default value rendered as GraphQL
    pub default_value: Option<String>,
    /// Default value when it is a string literal
    pub default_string: Option<String>,
}

/// A field of an object or interface type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub description: Option<String>,
    pub arguments: Vec<InputValue>,
    pub ty: GraphQLType,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumValue {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeDefKind {
    Scalar,
    Object { implements: Vec<String>, fields: Vec<Field> },
    Interface { implements: Vec<String>, fields: Vec<Field> },
    Union { members: Vec<String> },
    Enum { values: Vec<EnumValue> },
    InputObject { fields: Vec<InputValue> },
}

impl TypeDefKind {
    /// Human readable kind name, as used in GraphQL SDL
    pub fn keyword(&self) -> &'static str {
        match self {
            TypeDefKind::Scalar => "scalar",
            TypeDefKind::Object { .. } => "type",
            TypeDefKind::Interface { .. } => "interface",
            TypeDefKind::Union { .. } => "union",
            TypeDefKind::Enum { .. } => "enum",
            TypeDefKind::InputObject { .. } => "input",
        }
    }
}

/// A named type of the merged schema
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDef {
    pub name: String,
    pub description: Option<String>,
    pub kind: TypeDefKind,
}

impl TypeDef {
    /// Output fields of objects and interfaces
    pub fn fields(&self) -> &[Field] {
        match &self.kind {
            TypeDefKind::Object { fields, .. } | TypeDefKind::Interface { fields, .. } => fields,
            _ => &[],
        }
    }

    pub fn is_composite(&self) -> bool {
        matches!(
            self.kind,
            TypeDefKind::Object { .. } | TypeDefKind::Interface { .. } | TypeDefKind::Union { .. }
        )
    }
}

/// Root operation kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Query,
    Mutation,
    Subscription,
}

impl OperationKind {
    pub const ALL: [OperationKind; 3] = [
        OperationKind::Query,
        OperationKind::Mutation,
        OperationKind::Subscription,
    ];

    /// Operation keyword in a GraphQL document
    pub fn keyword(self) -> &'static str {
        match self {
            OperationKind::Query => "query",
            OperationKind::Mutation => "mutation",
            OperationKind::Subscription => "subscription",
        }
    }

    /// Default root type name when no `schema` definition names one
    pub fn default_type_name(self) -> &'static str {
        match self {
            OperationKind::Query => "Query",
            OperationKind::Mutation => "Mutation",
            OperationKind::Subscription => "Subscription",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_display_round_trips_sdl_notation() {
        let ty = GraphQLType::List {
            item: Box::new(GraphQLType::Named {
                name: "Product".to_string(),
                nullable: false,
            }),
            nullable: false,
        };

        assert_eq!(ty.to_string(), "[Product!]!");
        assert_eq!(ty.named_type(), "Product");
        assert!(ty.is_list());
        assert!(!ty.is_nullable());
    }

    #[test]
    fn test_builtin_scalars() {
        assert!(is_builtin_scalar("ID"));
        assert!(is_builtin_scalar("Boolean"));
        assert!(!is_builtin_scalar("DateTime"));
    }
}
