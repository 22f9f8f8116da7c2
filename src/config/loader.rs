// Configuration loader
// Loads settings from ~/.solace/config.toml; SOLACE_DATASET overrides

use anyhow::{Context, Result};
use std::fs;

use super::settings::Config;

/// Load configuration from the Solace config file and environment.
/// A missing config file is not an error; defaults apply.
pub fn load_config() -> Result<Config> {
    let mut config = try_load_from_solace_config()?.unwrap_or_default();

    if let Ok(dataset) = std::env::var("SOLACE_DATASET") {
        if !dataset.is_empty() {
            config.dataset = Some(dataset);
        }
    }

    Ok(config)
}

fn try_load_from_solace_config() -> Result<Option<Config>> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    let config_path = home.join(".solace/config.toml");

    if !config_path.exists() {
        return Ok(None);
    }

    let contents = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read {}", config_path.display()))?;

    #[derive(serde::Deserialize)]
    struct TomlConfig {
        #[serde(default)]
        dataset: Option<String>,
        #[serde(default)]
        seed: Option<u64>,
    }

    let toml_config: TomlConfig =
        toml::from_str(&contents).context("Failed to parse config.toml")?;

    Ok(Some(Config {
        dataset: toml_config.dataset,
        seed: toml_config.seed,
    }))
}
