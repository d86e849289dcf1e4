use std::{env, fs};

use anyhow::{Context, Result};
use log::info;
use regression::configs::PlaygroundConfig;

/// Names the JSON file holding the playground's configuration.
const CONFIG_VAR: &str = "PLAYGROUND_CONFIG";

/// Loads the playground configuration.
///
/// Reads the file named by `PLAYGROUND_CONFIG` when set, falling back to the reference
/// configuration otherwise.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
pub fn load() -> Result<PlaygroundConfig> {
    let Ok(path) = env::var(CONFIG_VAR) else {
        info!("{CONFIG_VAR} not set, using the reference configuration");
        return Ok(PlaygroundConfig::default());
    };

    let content = fs::read_to_string(&path).with_context(|| format!("cannot read '{path}'"))?;
    let config = parse(&content).with_context(|| format!("invalid config in '{path}'"))?;

    info!("loaded configuration from {path}");
    Ok(config)
}

fn parse(content: &str) -> Result<PlaygroundConfig> {
    Ok(serde_json::from_str(content)?)
}
