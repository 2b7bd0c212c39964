//! CLI command implementations.

pub mod config;
pub mod items;
pub mod range;
pub mod window;

use clap::{Args, Subcommand, ValueEnum};

/// Arguments for the range command.
#[derive(Args)]
pub struct RangeArgs {
    /// Current page (1-indexed).
    #[arg(short, long, allow_negative_numbers = true)]
    pub page: i64,

    /// Total number of pages.
    #[arg(short, long, allow_negative_numbers = true)]
    pub total: i64,

    /// Pages shown on each side of the current page.
    #[arg(short, long, allow_negative_numbers = true)]
    pub siblings: Option<i64>,

    /// Pages pinned at each end.
    #[arg(short, long, allow_negative_numbers = true)]
    pub boundaries: Option<i64>,

    /// Clamp out-of-range input instead of rejecting it.
    #[arg(long)]
    pub clamp: bool,
}

/// Arguments for the items command.
#[derive(Args)]
pub struct ItemsArgs {
    /// Current page (1-indexed).
    #[arg(short, long, allow_negative_numbers = true)]
    pub page: i64,

    /// Total number of pages. Derived from --items when omitted.
    #[arg(short, long, allow_negative_numbers = true)]
    pub total: Option<i64>,

    /// Total number of items in the listing.
    #[arg(long, allow_negative_numbers = true)]
    pub items: Option<i64>,

    /// Items per page (default: from config).
    #[arg(long, allow_negative_numbers = true)]
    pub per_page: Option<i64>,

    /// Disable every control.
    #[arg(long)]
    pub disabled: bool,

    /// Include first/last controls.
    #[arg(long)]
    pub first_last: bool,

    /// Clamp out-of-range input instead of rejecting it.
    #[arg(long)]
    pub clamp: bool,
}

/// Arguments for the window command.
#[derive(Args)]
pub struct WindowArgs {
    /// Current page (1-indexed).
    #[arg(short, long, default_value = "1", allow_negative_numbers = true)]
    pub page: i64,

    /// Total number of items in the listing.
    #[arg(long, allow_negative_numbers = true)]
    pub items: i64,

    /// Items per page (default: from config).
    #[arg(long, allow_negative_numbers = true)]
    pub per_page: Option<i64>,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,

        /// File format to write.
        #[arg(long, value_enum, default_value_t = ConfigFormat::Toml)]
        format: ConfigFormat,
    },
    /// Validate the config file.
    Validate,
}

/// Config file format for `config init`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ConfigFormat {
    /// Commented pager.toml.
    Toml,
    /// pager.json.
    Json,
}
