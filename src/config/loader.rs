// Configuration loader
// Loads settings from ~/.chartbrief/config.toml or environment variable

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};

use super::settings::{Config, TomlConfig};

/// Load configuration from an explicit path, the default config file,
/// or the environment
pub fn load_config(explicit_path: Option<&Path>) -> Result<Config> {
    // An explicitly requested config file must exist and parse
    if let Some(path) = explicit_path {
        return load_from_file(path);
    }

    // Try ~/.chartbrief/config.toml next
    if let Some(config) = try_load_default_file()? {
        return Ok(config);
    }

    // Fall back to environment variable
    if let Ok(api_key) = std::env::var("OPENAI_API_KEY") {
        if !api_key.is_empty() {
            return Ok(Config::with_api_key(api_key));
        }
    }

    bail!(
        "No configuration found.\n\n\
         Create ~/.chartbrief/config.toml with:\n  \
         api_key = \"sk-...\"\n\n\
         Alternatively, set environment variable:\n  \
         export OPENAI_API_KEY=\"sk-...\""
    );
}

fn load_from_file(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let toml_config: TomlConfig = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

    Ok(toml_config.into_config())
}

fn try_load_default_file() -> Result<Option<Config>> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    let config_path = home.join(".chartbrief/config.toml");

    if !config_path.exists() {
        return Ok(None);
    }

    load_from_file(&config_path).map(Some)
}
