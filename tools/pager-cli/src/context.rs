//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use turbo_pager::PagerConfig;

use crate::config::{self, CONFIG_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// Pager configuration.
    pub config: PagerConfig,
    /// Where the configuration came from, if a file was found.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let config_path = match config_path {
            Some(path) => Some(resolve_path(&cwd, path)),
            None => find_config(&cwd),
        };

        let config = match &config_path {
            Some(path) => {
                output.debug(&format!("Using config: {}", path.display()));
                config::load(path)?
            }
            None => {
                output.debug("No config file found, using defaults");
                PagerConfig::default()
            }
        };

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }
}

#[cfg(test)]
impl Context {
    /// Context with default config and quiet output.
    pub fn with_defaults(json: bool) -> Self {
        Self {
            config: PagerConfig::default(),
            config_path: None,
            output: Output::new(false, json),
            cwd: std::env::temp_dir(),
        }
    }
}

/// Find a config file in the directory tree.
fn find_config(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        for name in &CONFIG_NAMES {
            let path = current.join(name);
            if path.exists() {
                return Some(path);
            }
        }

        if !current.pop() {
            return None;
        }
    }
}

fn resolve_path(cwd: &Path, path: &str) -> PathBuf {
    let path = PathBuf::from(path);
    if path.is_absolute() {
        path
    } else {
        cwd.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_config_walks_up() {
        let root = std::env::temp_dir().join(format!("pager-ctx-test-{}", std::process::id()));
        let nested = root.join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(root.join(".pager.toml"), "").unwrap();

        assert_eq!(find_config(&nested), Some(root.join(".pager.toml")));

        std::fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn test_resolve_path() {
        let cwd = PathBuf::from("/srv/store");
        assert_eq!(resolve_path(&cwd, "pager.toml"), cwd.join("pager.toml"));
        assert_eq!(resolve_path(&cwd, "/etc/pager.toml"), PathBuf::from("/etc/pager.toml"));
    }
}
