use gqlcodegen::config::{CodegenConfig, Config};
use indexmap::IndexMap;

/// Product catalogue schema used by `init --example`
pub const EXAMPLE_SCHEMA: &str = include_str!("../../demos/graphql-client/schema.graphqls");

/// File name of the example schema inside the schema directory
pub const EXAMPLE_SCHEMA_FILE: &str = "products.graphqls";

/// Scalar mappings every new configuration starts with
pub fn default_type_mapping() -> IndexMap<String, String> {
    let mut mapping = IndexMap::new();
    mapping.insert(
        "DateTime".to_string(),
        "chrono::DateTime<chrono::FixedOffset>".to_string(),
    );
    mapping
}

/// Configuration for a schema directory
pub fn create_config(schema_dir: &str) -> Config {
    Config {
        codegen: CodegenConfig {
            schema_paths: vec![schema_dir.to_string()],
            ..CodegenConfig::default()
        },
        type_mapping: default_type_mapping(),
    }
}
