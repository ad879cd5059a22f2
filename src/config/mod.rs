mod types;

pub use types::{CodegenConfig, Config};

use crate::error::{CodegenError, Result};
use std::fs;

/// Load configuration from a TOML file
pub fn load_config(path: &str) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .map_err(|e| CodegenError::Config(format!("Failed to read config file '{}': {}", path, e)))?;

    parse_config(&contents)
}

/// Parse and validate configuration from TOML text
pub fn parse_config(contents: &str) -> Result<Config> {
    let config: Config = toml::from_str(contents)?;
    config.validate().map_err(CodegenError::Config)?;
    Ok(config)
}

/// Save configuration to a TOML file
pub fn save_config(config: &Config, path: &str) -> Result<()> {
    config.validate().map_err(CodegenError::Config)?;

    let toml_string = toml::to_string_pretty(config)?;
    fs::write(path, toml_string)
        .map_err(|e| CodegenError::Config(format!("Failed to write config file '{}': {}", path, e)))?;

    Ok(())
}
