use gqlcodegen::error::Result;

/// Run the generate command
pub fn run(config_path: String, output_dir: Option<String>) -> Result<()> {
    tracing::info!("📖 Loading configuration from {}", config_path);

    let mut config = gqlcodegen::config::load_config(&config_path)?;
    if let Some(output_dir) = output_dir {
        config.codegen.output_dir = output_dir;
    }

    tracing::info!(
        "🔧 Generating module '{}' from {}",
        config.codegen.package_name,
        config.codegen.schema_paths.join(", ")
    );

    let report = gqlcodegen::generate(&config)?;

    for file in &report.files {
        tracing::info!("   • {}", file.display());
    }
    if report.warnings.is_empty() {
        tracing::info!("✅ Generated {}", report.module_dir.display());
    } else {
        tracing::info!(
            "✅ Generated {} with {} warning(s)",
            report.module_dir.display(),
            report.warnings.len()
        );
    }

    Ok(())
}
