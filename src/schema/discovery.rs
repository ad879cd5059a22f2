use crate::error::{CodegenError, Result};

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// File extensions recognised as GraphQL schema documents
pub const SCHEMA_EXTENSIONS: &[&str] = &["graphql", "graphqls", "gql"];

/// A schema document read from disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaDocument {
    pub path: PathBuf,
    pub content: String,
}

/// Resolve configured schema locations into a sorted list of schema files
///
/// Each location may be a directory (searched recursively), a single file or
/// a glob pattern. Fails with `SchemaNotFound` when a location does not
/// exist or when no schema file is found at all.
pub fn discover_schema_files(locations: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for location in locations {
        if is_glob_pattern(location) {
            let matches = resolve_glob(location)?;
            if matches.is_empty() {
                return Err(CodegenError::SchemaNotFound(format!(
                    "Pattern '{}' matched no schema files",
                    location
                )));
            }
            files.extend(matches);
            continue;
        }

        let path = Path::new(location);
        if path.is_dir() {
            let before = files.len();
            collect_schema_files(path, &mut files)?;
            tracing::debug!(
                "Found {} schema file(s) in {}",
                files.len() - before,
                path.display()
            );
        } else if path.is_file() {
            files.push(path.to_path_buf());
        } else {
            return Err(CodegenError::SchemaNotFound(format!(
                "Schema location '{}' does not exist",
                location
            )));
        }
    }

    // Same file reachable from two locations is read once
    let mut seen = HashSet::new();
    files.retain(|f| seen.insert(fs::canonicalize(f).unwrap_or_else(|_| f.clone())));

    if files.is_empty() {
        return Err(CodegenError::SchemaNotFound(format!(
            "No schema files (*.{}) found in {}",
            SCHEMA_EXTENSIONS.join(", *."),
            locations.join(", ")
        )));
    }

    Ok(files)
}

/// Read every discovered schema file
///
/// Documents containing only whitespace are skipped.
pub fn load_schema_documents(locations: &[String]) -> Result<Vec<SchemaDocument>> {
    let files = discover_schema_files(locations)?;
    let mut documents = Vec::with_capacity(files.len());

    for path in files {
        let content = fs::read_to_string(&path)?;
        if content.trim().is_empty() {
            tracing::warn!("Skipping empty schema file: {}", path.display());
            continue;
        }
        documents.push(SchemaDocument { path, content });
    }

    if documents.is_empty() {
        return Err(CodegenError::SchemaNotFound(format!(
            "All schema files in {} are empty",
            locations.join(", ")
        )));
    }

    Ok(documents)
}

fn collect_schema_files(dir: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
    let mut entries = fs::read_dir(dir)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::result::Result<Vec<_>, _>>()?;
    entries.sort();

    for path in entries {
        if path.is_dir() {
            collect_schema_files(&path, files)?;
        } else if is_schema_file(&path) {
            files.push(path);
        }
    }

    Ok(())
}

fn resolve_glob(pattern: &str) -> Result<Vec<PathBuf>> {
    let entries = glob::glob(pattern).map_err(|e| {
        CodegenError::Config(format!("Invalid schema pattern '{}': {}", pattern, e))
    })?;

    let mut matches: Vec<PathBuf> = entries
        .filter_map(|entry| match entry {
            Ok(path) => Some(path),
            Err(e) => {
                tracing::warn!("Skipping unreadable path for '{}': {}", pattern, e);
                None
            }
        })
        .filter(|path| path.is_file())
        .collect();
    matches.sort();

    Ok(matches)
}

fn is_glob_pattern(location: &str) -> bool {
    location.contains(['*', '?', '['])
}

/// Whether a path has a GraphQL schema extension
pub fn is_schema_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| SCHEMA_EXTENSIONS.contains(&ext))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_missing_directory_is_schema_not_found() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("graphql-client");

        let err = discover_schema_files(&[missing.to_string_lossy().to_string()]).unwrap_err();
        assert!(matches!(err, CodegenError::SchemaNotFound(_)));
    }

    #[test]
    fn test_empty_directory_is_schema_not_found() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "README.md", "not a schema");

        let err = discover_schema_files(&[dir.path().to_string_lossy().to_string()]).unwrap_err();
        assert!(matches!(err, CodegenError::SchemaNotFound(_)));
    }

    #[test]
    fn test_recursive_discovery_is_sorted() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "b.graphqls", "type B { id: ID }");
        write(dir.path(), "a.graphql", "type A { id: ID }");
        write(dir.path(), "nested/c.gql", "type C { id: ID }");
        write(dir.path(), "nested/notes.txt", "ignored");

        let files = discover_schema_files(&[dir.path().to_string_lossy().to_string()]).unwrap();
        let names: Vec<String> = files
            .iter()
            .map(|p| p.strip_prefix(dir.path()).unwrap().to_string_lossy().replace('\\', "/"))
            .collect();

        assert_eq!(names, vec!["a.graphql", "b.graphqls", "nested/c.gql"]);
    }

    #[test]
    fn test_glob_pattern() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "one.graphql", "type One { id: ID }");
        write(dir.path(), "two.graphqls", "type Two { id: ID }");

        let pattern = format!("{}/*.graphql", dir.path().to_string_lossy());
        let files = discover_schema_files(&[pattern]).unwrap();

        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("one.graphql"));
    }

    #[test]
    fn test_same_file_listed_twice_is_read_once() {
        let dir = TempDir::new().unwrap();
        let file = write(dir.path(), "schema.graphqls", "type A { id: ID }");

        let locations = vec![
            dir.path().to_string_lossy().to_string(),
            file.to_string_lossy().to_string(),
        ];
        let files = discover_schema_files(&locations).unwrap();

        assert_eq!(files.len(), 1);
    }

    #[test]
    fn test_whitespace_only_documents_skipped() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "empty.graphqls", "  \n\t\n");
        write(dir.path(), "real.graphqls", "type A { id: ID }");

        let docs = load_schema_documents(&[dir.path().to_string_lossy().to_string()]).unwrap();

        assert_eq!(docs.len(), 1);
        assert!(docs[0].path.ends_with("real.graphqls"));
    }
}
