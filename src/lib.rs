pub mod codegen;
pub mod config;
pub mod error;
pub mod schema;

// Re-export commonly used types
pub use codegen::{generate, GenerationReport};
pub use config::{CodegenConfig, Config};
pub use error::{CodegenError, GenerationWarning, Result};
pub use schema::SchemaRegistry;
