use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodegenError {
    #[error("Schema not found: {0}")]
    SchemaNotFound(String),

    #[error("Schema parse error in {}:{line}:{column}: {message}", .file.display())]
    SchemaParse {
        file: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },

    #[error("Multiple definitions found for {0}")]
    DuplicateDefinition(String),

    #[error("Name collision between different kinds of definitions: {0}")]
    NameCollision(String),

    #[error("Unknown type '{name}' referenced by {referenced_by}")]
    UnknownType { name: String, referenced_by: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<toml::de::Error> for CodegenError {
    fn from(err: toml::de::Error) -> Self {
        CodegenError::Config(format!("TOML parse error: {}", err))
    }
}

impl From<toml::ser::Error> for CodegenError {
    fn from(err: toml::ser::Error) -> Self {
        CodegenError::Serialization(format!("TOML serialization error: {}", err))
    }
}

pub type Result<T> = std::result::Result<T, CodegenError>;

/// Non-fatal problems found during generation.
///
/// Warnings never abort a run; they are logged as they are found and
/// collected into the [`GenerationReport`](crate::codegen::GenerationReport).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationWarning {
    /// A custom scalar has no entry in the type mapping; `fallback` was used.
    UnmappedScalar {
        scalar: String,
        fallback: String,
        suggestion: Option<String>,
    },
    /// A type mapping key names no type in the schema.
    UnknownMappingKey(String),
    /// A default value literal cannot be a valid value of its scalar.
    InvalidDefaultValue {
        location: String,
        scalar: String,
        literal: String,
    },
}

impl fmt::Display for GenerationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerationWarning::UnmappedScalar {
                scalar,
                fallback,
                suggestion,
            } => {
                write!(f, "Scalar '{}' has no type mapping, using {}", scalar, fallback)?;
                if let Some(suggestion) = suggestion {
                    write!(f, " (consider mapping it to {})", suggestion)?;
                }
                Ok(())
            }
            GenerationWarning::UnknownMappingKey(name) => {
                write!(f, "Type mapping for '{}' does not match any schema type", name)
            }
            GenerationWarning::InvalidDefaultValue {
                location,
                scalar,
                literal,
            } => write!(
                f,
                "Default value {:?} of {} is not a valid {}",
                literal, location, scalar
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display_names_file_and_position() {
        let err = CodegenError::SchemaParse {
            file: PathBuf::from("schema/broken.graphqls"),
            line: 3,
            column: 7,
            message: "expected name".to_string(),
        };

        assert_eq!(
            err.to_string(),
            "Schema parse error in schema/broken.graphqls:3:7: expected name"
        );
    }

    #[test]
    fn test_unmapped_scalar_warning_mentions_suggestion() {
        let warning = GenerationWarning::UnmappedScalar {
            scalar: "DateTime".to_string(),
            fallback: "serde_json::Value".to_string(),
            suggestion: Some("chrono::DateTime<chrono::FixedOffset>".to_string()),
        };

        let text = warning.to_string();
        assert!(text.contains("DateTime"));
        assert!(text.contains("serde_json::Value"));
        assert!(text.contains("chrono::DateTime<chrono::FixedOffset>"));
    }
}
