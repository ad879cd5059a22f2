/// GraphQL schema loading and type mapping
///
/// This module discovers schema documents, parses and merges them into a
/// registry, and maps GraphQL types to Rust types.

pub mod discovery;
pub mod registry;
pub mod scalars;
pub mod type_mapping;
pub mod types;

pub use discovery::{discover_schema_files, load_schema_documents, SchemaDocument};
pub use registry::SchemaRegistry;
pub use scalars::DEFAULT_SCALAR_TYPE;
pub use type_mapping::{builtin_scalar_type, TypeMapper};
pub use types::{GraphQLType, OperationKind, TypeDef, TypeDefKind};
