//! Config file loading and saving.

use std::path::Path;

use anyhow::{Context, Result};
use turbo_pager::PagerConfig;

/// Config file names searched for, in order.
pub const CONFIG_NAMES: [&str; 3] = ["pager.toml", ".pager.toml", "pager.json"];

/// Load config from a file. The format is chosen by extension.
pub fn load(path: &Path) -> Result<PagerConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: PagerConfig = if is_json(path) {
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse JSON config: {}", path.display()))?
    } else {
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse TOML config: {}", path.display()))?
    };

    config
        .validate()
        .with_context(|| format!("Invalid config: {}", path.display()))?;

    Ok(config)
}

/// Save config to a file.
pub fn save(config: &PagerConfig, path: &Path) -> Result<()> {
    let content = if is_json(path) {
        serde_json::to_string_pretty(config)?
    } else {
        toml::to_string_pretty(config)?
    };

    std::fs::write(path, content)
        .with_context(|| format!("Failed to write config file: {}", path.display()))
}

fn is_json(path: &Path) -> bool {
    path.extension().map_or(false, |ext| ext == "json")
}
