//! Pager configuration.

use serde::{Deserialize, Serialize};

use crate::control::ControlOptions;
use crate::error::PaginationError;
use crate::range::{RangePolicy, DEFAULT_BOUNDARIES, DEFAULT_SIBLINGS};
use crate::window::DEFAULT_PER_PAGE;

/// Storefront pager configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagerConfig {
    /// Handling of out-of-range input.
    #[serde(default)]
    pub policy: RangePolicy,

    /// Window sizes.
    #[serde(default)]
    pub window: WindowConfig,

    /// Listing defaults.
    #[serde(default)]
    pub listing: ListingConfig,

    /// Control layout.
    #[serde(default)]
    pub controls: ControlsConfig,
}

impl PagerConfig {
    /// Check that every value is usable.
    pub fn validate(&self) -> Result<(), PaginationError> {
        if self.window.siblings < 0 {
            return Err(PaginationError::Config(format!(
                "window.siblings must not be negative (got {})",
                self.window.siblings
            )));
        }
        if self.window.boundaries < 0 {
            return Err(PaginationError::Config(format!(
                "window.boundaries must not be negative (got {})",
                self.window.boundaries
            )));
        }
        if self.listing.per_page < 1 {
            return Err(PaginationError::Config(format!(
                "listing.per_page must be at least 1 (got {})",
                self.listing.per_page
            )));
        }
        Ok(())
    }

    /// Control options derived from this config.
    pub fn control_options(&self) -> ControlOptions {
        ControlOptions::default()
            .with_window(self.window.siblings, self.window.boundaries)
            .with_first_last(self.controls.show_first_last)
            .with_prev_next(self.controls.show_prev_next)
            .with_policy(self.policy)
    }
}

/// Window sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Pages shown on each side of the current page.
    #[serde(default = "default_siblings")]
    pub siblings: i64,

    /// Pages pinned at each end.
    #[serde(default = "default_boundaries")]
    pub boundaries: i64,
}

fn default_siblings() -> i64 {
    DEFAULT_SIBLINGS
}

fn default_boundaries() -> i64 {
    DEFAULT_BOUNDARIES
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            siblings: default_siblings(),
            boundaries: default_boundaries(),
        }
    }
}

/// Listing defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingConfig {
    /// Items per page.
    #[serde(default = "default_per_page")]
    pub per_page: i64,
}

fn default_per_page() -> i64 {
    DEFAULT_PER_PAGE
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            per_page: default_per_page(),
        }
    }
}

/// Control layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlsConfig {
    /// Include first/last controls.
    #[serde(default)]
    pub show_first_last: bool,

    /// Include previous/next controls.
    #[serde(default = "default_true")]
    pub show_prev_next: bool,
}

fn default_true() -> bool {
    true
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            show_first_last: false,
            show_prev_next: true,
        }
    }
}

/// Generate a default pager.toml config file.
pub fn generate_default_config() -> String {
    format!(
        r#"# Storefront pager configuration

# "strict" rejects out-of-range pages, "clamp" pulls them into range
policy = "strict"

[window]
siblings = {siblings}
boundaries = {boundaries}

[listing]
per_page = {per_page}

[controls]
show_first_last = false
show_prev_next = true
"#,
        siblings = DEFAULT_SIBLINGS,
        boundaries = DEFAULT_BOUNDARIES,
        per_page = DEFAULT_PER_PAGE,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = PagerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.window.siblings, 1);
        assert_eq!(config.listing.per_page, 24);
        assert_eq!(config.policy, RangePolicy::Strict);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: PagerConfig =
            serde_json::from_str(r#"{"window":{"siblings":2},"policy":"clamp"}"#).unwrap();
        assert_eq!(config.window.siblings, 2);
        assert_eq!(config.window.boundaries, 1);
        assert_eq!(config.policy, RangePolicy::Clamp);
        assert!(config.controls.show_prev_next);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = PagerConfig::default();
        config.window.boundaries = -1;
        assert!(matches!(config.validate(), Err(PaginationError::Config(_))));

        let mut config = PagerConfig::default();
        config.listing.per_page = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("listing.per_page"));
    }

    #[test]
    fn test_control_options() {
        let mut config = PagerConfig::default();
        config.window.siblings = 3;
        config.controls.show_first_last = true;
        config.policy = RangePolicy::Clamp;

        let options = config.control_options();
        assert_eq!(options.siblings, 3);
        assert!(options.show_first_last);
        assert_eq!(options.policy, RangePolicy::Clamp);
        assert!(!options.disabled);
    }

    #[test]
    fn test_generated_config_mentions_sections() {
        let text = generate_default_config();
        assert!(text.contains("[window]"));
        assert!(text.contains("per_page = 24"));
    }
}
