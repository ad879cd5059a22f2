use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Top-level configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    pub codegen: CodegenConfig,

    /// GraphQL type name -> Rust type path
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub type_mapping: IndexMap<String, String>,
}

/// Code generation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodegenConfig {
    /// Schema locations: directories (searched recursively), files or glob patterns
    pub schema_paths: Vec<String>,

    /// Directory the generated module is written into
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Name of the generated Rust module
    #[serde(default = "default_package_name")]
    pub package_name: String,

    /// Generate the typed client stub (`client.rs`)
    #[serde(default = "default_true")]
    pub generate_client: bool,

    /// Generate data types (`types.rs`)
    #[serde(default = "default_true")]
    pub generate_data_types: bool,

    /// Mark every generated file as `@generated`
    #[serde(default = "default_true")]
    pub add_generated_annotation: bool,

    /// Query fields to generate client builders for (empty means all)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub include_queries: Vec<String>,

    /// Mutation fields to generate client builders for (empty means all)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub include_mutations: Vec<String>,
}

fn default_output_dir() -> String {
    "src".to_string()
}

fn default_package_name() -> String {
    "codegen".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for CodegenConfig {
    fn default() -> Self {
        Self {
            schema_paths: vec!["schema".to_string()],
            output_dir: default_output_dir(),
            package_name: default_package_name(),
            generate_client: true,
            generate_data_types: true,
            add_generated_annotation: true,
            include_queries: Vec::new(),
            include_mutations: Vec::new(),
        }
    }
}

impl Config {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        self.codegen.validate()?;

        for (graphql_type, rust_type) in &self.type_mapping {
            if graphql_type.trim().is_empty() {
                return Err("Type mapping contains an empty GraphQL type name".to_string());
            }
            if rust_type.trim().is_empty() {
                return Err(format!(
                    "Type mapping for '{}' must name a Rust type",
                    graphql_type
                ));
            }
        }

        Ok(())
    }
}

impl CodegenConfig {
    /// Validate code generation settings
    pub fn validate(&self) -> Result<(), String> {
        if self.schema_paths.is_empty() {
            return Err("At least one schema path must be configured".to_string());
        }

        if self.schema_paths.iter().any(|p| p.trim().is_empty()) {
            return Err("Schema paths must not be empty".to_string());
        }

        if self.output_dir.trim().is_empty() {
            return Err("Output directory must not be empty".to_string());
        }

        // The package name becomes a directory and a `mod` declaration
        let mut chars = self.package_name.chars();
        let valid_start = matches!(chars.next(), Some(c) if c.is_ascii_lowercase() || c == '_');
        if !valid_start
            || !chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
            || self.package_name == "_"
        {
            return Err(format!(
                "Package name '{}' must be a snake_case Rust module name",
                self.package_name
            ));
        }

        if crate::codegen::is_rust_keyword(&self.package_name) {
            return Err(format!(
                "Package name '{}' is a Rust keyword",
                self.package_name
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_package_name_must_be_snake_case() {
        let mut config = Config::default();
        config.codegen.package_name = "Codegen".to_string();
        assert!(config.validate().is_err());

        config.codegen.package_name = "the.oronco.codegen".to_string();
        assert!(config.validate().is_err());

        config.codegen.package_name = "graphql_types2".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_package_name_rejects_keywords() {
        let mut config = Config::default();
        config.codegen.package_name = "mod".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_schema_paths_required() {
        let mut config = Config::default();
        config.codegen.schema_paths.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_mapping_target_rejected() {
        let mut config = Config::default();
        config
            .type_mapping
            .insert("DateTime".to_string(), "  ".to_string());
        assert!(config.validate().is_err());
    }
}
