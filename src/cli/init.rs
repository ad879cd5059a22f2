use gqlcodegen::error::Result;
use std::fs;
use std::path::Path;

/// Run the init command to create a configuration and, with `--example`, a schema
pub fn run(example: bool, schema_dir: String, output: Option<String>) -> Result<()> {
    if example {
        write_example_schema(&schema_dir)?;
    }

    let config = crate::cli::example::create_config(&schema_dir);

    // Output to stdout or file
    if let Some(output_path) = output {
        gqlcodegen::config::save_config(&config, &output_path)?;
        tracing::info!("📝 Generated configuration: {}", output_path);
        tracing::info!("🚀 Next: gqlcodegen generate --config {}", output_path);
    } else {
        let toml_string = toml::to_string_pretty(&config)?;
        println!("{}", toml_string);
        tracing::info!("💡 Tip: Add --output <file> to save to a file instead of stdout");
    }

    Ok(())
}

fn write_example_schema(schema_dir: &str) -> Result<()> {
    let dir = Path::new(schema_dir);
    let path = dir.join(crate::cli::example::EXAMPLE_SCHEMA_FILE);

    if path.exists() {
        tracing::warn!("{} already exists, leaving it untouched", path.display());
        return Ok(());
    }

    fs::create_dir_all(dir)?;
    fs::write(&path, crate::cli::example::EXAMPLE_SCHEMA)?;

    tracing::info!("🎨 Wrote example schema: {}", path.display());
    tracing::info!("   • Products and materials with DateTime timestamps");
    tracing::info!("   • An interface, a union and an enum");
    tracing::info!("   • Queries and mutations for the client stub");

    Ok(())
}
