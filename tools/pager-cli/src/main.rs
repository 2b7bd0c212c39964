//! Pager CLI - Inspect storefront page selector layouts.
//!
//! Commands:
//! - `pager range` - Compute the page/gap sequence for a page
//! - `pager items` - Show the controls a page selector would display
//! - `pager window` - Show result-count arithmetic for a listing
//! - `pager config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{ConfigArgs, ItemsArgs, RangeArgs, WindowArgs};

/// Pager CLI - Inspect storefront page selector layouts
#[derive(Parser)]
#[command(name = "pager")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the page/gap sequence for a page
    Range(RangeArgs),

    /// Show the controls a page selector would display
    Items(ItemsArgs),

    /// Show result-count arithmetic for a listing
    Window(WindowArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = match context::Context::load(config_path, output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    // Execute command
    let result = match cli.command {
        Commands::Range(args) => commands::range::run(args, &ctx),
        Commands::Items(args) => commands::items::run(args, &ctx),
        Commands::Window(args) => commands::window::run(args, &ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
