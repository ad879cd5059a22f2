/// Rust code generation from a GraphQL schema
///
/// This module ties discovery, parsing, type mapping and the emitters together.
/// Everything is rendered in memory first; files are only touched once the
/// whole module has been generated, so a failing run writes nothing.

mod client;
mod constants;
pub mod naming;
mod types;
mod writer;

pub use client::{operation_ident, projection_ident, render_client, ClientOptions};
pub use constants::render_constants;
pub use naming::{is_rust_keyword, to_pascal_case, to_snake_case};
pub use types::render_types;

use crate::config::Config;
use crate::error::{CodegenError, GenerationWarning, Result};
use crate::schema::discovery::load_schema_documents;
use crate::schema::registry::SchemaRegistry;
use crate::schema::type_mapping::TypeMapper;

use std::fs;
use std::path::{Path, PathBuf};

/// Marker placed at the top of generated files
pub const GENERATED_HEADER: &str =
    "// @generated by gqlcodegen from a GraphQL schema. Do not edit by hand.";

/// Every file name the generator may own inside the module directory
pub const GENERATED_FILE_NAMES: &[&str] = &["mod.rs", "types.rs", "constants.rs", "client.rs"];

/// A rendered file, relative to the generated module directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub name: &'static str,
    pub content: String,
}

/// Outcome of a successful generation run
#[derive(Debug, Clone, Default)]
pub struct GenerationReport {
    /// Directory of the generated module
    pub module_dir: PathBuf,
    /// Files written, in write order
    pub files: Vec<PathBuf>,
    pub warnings: Vec<GenerationWarning>,
}

/// Load the schema described by a configuration
pub fn load_schema(config: &Config) -> Result<SchemaRegistry> {
    let documents = load_schema_documents(&config.codegen.schema_paths)?;
    tracing::info!("Parsing {} schema document(s)", documents.len());
    SchemaRegistry::from_documents(&documents)
}

/// Render all generated files for a schema without touching the filesystem
pub fn render(config: &Config, registry: &SchemaRegistry) -> (Vec<GeneratedFile>, Vec<GenerationWarning>) {
    let codegen = &config.codegen;
    let mapper = TypeMapper::new(registry, &config.type_mapping);
    let warnings = mapper.warnings();

    let mut modules = vec!["constants", "types"];
    let mut files = vec![
        GeneratedFile {
            name: "constants.rs",
            content: with_header(codegen.add_generated_annotation, render_constants(registry)),
        },
        GeneratedFile {
            name: "types.rs",
            content: with_header(
                codegen.add_generated_annotation,
                render_types(&mapper, codegen.generate_data_types),
            ),
        },
    ];

    if codegen.generate_client {
        modules.push("client");
        let options = ClientOptions {
            include_queries: &codegen.include_queries,
            include_mutations: &codegen.include_mutations,
        };
        files.push(GeneratedFile {
            name: "client.rs",
            content: with_header(codegen.add_generated_annotation, render_client(&mapper, &options)),
        });
    }

    let mut module = String::from("#![allow(dead_code, unused_imports, non_camel_case_types, clippy::all)]\n\n");
    for name in modules {
        module.push_str(&format!("pub mod {};\n", name));
    }
    files.insert(
        0,
        GeneratedFile {
            name: "mod.rs",
            content: with_header(codegen.add_generated_annotation, module),
        },
    );

    (files, warnings)
}

/// Run the full generation: discover, parse, map, emit and write
pub fn generate(config: &Config) -> Result<GenerationReport> {
    config.validate().map_err(CodegenError::Config)?;

    let registry = load_schema(config)?;
    let (files, warnings) = render(config, &registry);

    for warning in &warnings {
        tracing::warn!("{}", warning);
    }

    let module_dir = Path::new(&config.codegen.output_dir).join(&config.codegen.package_name);
    let written = write_module(&module_dir, &files)?;

    tracing::info!(
        "Generated {} file(s) in {}",
        written.len(),
        module_dir.display()
    );

    Ok(GenerationReport {
        module_dir,
        files: written,
        warnings,
    })
}

/// Replace the generated files of a module directory
///
/// Only files the generator owns are removed; anything else in the directory
/// is left alone.
fn write_module(module_dir: &Path, files: &[GeneratedFile]) -> Result<Vec<PathBuf>> {
    if module_dir.is_dir() {
        for name in GENERATED_FILE_NAMES {
            let stale = module_dir.join(name);
            if stale.is_file() && !files.iter().any(|f| f.name == *name) {
                tracing::debug!("Removing stale {}", stale.display());
                fs::remove_file(&stale)?;
            }
        }
    } else {
        fs::create_dir_all(module_dir)?;
    }

    let mut written = Vec::with_capacity(files.len());
    for file in files {
        let path = module_dir.join(file.name);
        fs::write(&path, &file.content)?;
        written.push(path);
    }

    Ok(written)
}

fn with_header(annotate: bool, body: String) -> String {
    let mut content = if annotate {
        format!("{}\n\n{}", GENERATED_HEADER, body)
    } else {
        body
    };
    if !content.ends_with('\n') {
        content.push('\n');
    }
    content
}
