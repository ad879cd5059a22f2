use gqlcodegen::error::Result;
use gqlcodegen::schema::{OperationKind, TypeDefKind, TypeMapper};

/// Run the check command: load, merge and validate without writing
pub fn run(config_path: String) -> Result<()> {
    tracing::info!("📖 Loading configuration from {}", config_path);

    let config = gqlcodegen::config::load_config(&config_path)?;
    let registry = gqlcodegen::codegen::load_schema(&config)?;

    let mut counts = [0usize; 6];
    for type_def in registry.types() {
        let slot = match type_def.kind {
            TypeDefKind::Scalar => 0,
            TypeDefKind::Object { .. } => 1,
            TypeDefKind::Interface { .. } => 2,
            TypeDefKind::Union { .. } => 3,
            TypeDefKind::Enum { .. } => 4,
            TypeDefKind::InputObject { .. } => 5,
        };
        counts[slot] += 1;
    }

    tracing::info!(
        "📊 {} scalar(s), {} object(s), {} interface(s), {} union(s), {} enum(s), {} input(s)",
        counts[0],
        counts[1],
        counts[2],
        counts[3],
        counts[4],
        counts[5]
    );

    for kind in OperationKind::ALL {
        if let Some(root) = registry.root_type(kind) {
            tracing::info!("   {} {}: {} field(s)", kind.keyword(), root.name, root.fields().len());
        }
    }

    let warnings = TypeMapper::new(&registry, &config.type_mapping).warnings();
    for warning in &warnings {
        tracing::warn!("{}", warning);
    }

    tracing::info!("✅ Schema is valid ({} warning(s))", warnings.len());

    Ok(())
}
