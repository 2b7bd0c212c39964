//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};
use turbo_pager::config::generate_default_config;
use turbo_pager::PagerConfig;

use super::{ConfigArgs, ConfigCommand, ConfigFormat};
use crate::config;
use crate::context::Context;

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force, format } => init_config(force, format, ctx),
        ConfigCommand::Validate => validate_config(ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("source", &path.display().to_string()),
        None => ctx.output.kv("source", "defaults"),
    }
    ctx.output.kv("policy", ctx.config.policy.as_str());

    ctx.output.line("[window]");
    ctx.output.kv("siblings", &ctx.config.window.siblings.to_string());
    ctx.output
        .kv("boundaries", &ctx.config.window.boundaries.to_string());

    ctx.output.line("[listing]");
    ctx.output.kv("per_page", &ctx.config.listing.per_page.to_string());

    ctx.output.line("[controls]");
    ctx.output.kv(
        "show_first_last",
        &ctx.config.controls.show_first_last.to_string(),
    );
    ctx.output.kv(
        "show_prev_next",
        &ctx.config.controls.show_prev_next.to_string(),
    );

    Ok(())
}

fn init_config(force: bool, format: ConfigFormat, ctx: &Context) -> Result<()> {
    let config_path = match format {
        ConfigFormat::Toml => ctx.cwd.join("pager.toml"),
        ConfigFormat::Json => ctx.cwd.join("pager.json"),
    };

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    match format {
        ConfigFormat::Toml => fs::write(&config_path, generate_default_config())?,
        ConfigFormat::Json => config::save(&PagerConfig::default(), &config_path)?,
    }

    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

fn validate_config(ctx: &Context) -> Result<()> {
    let Some(path) = &ctx.config_path else {
        bail!("No config file found. Run `pager config init` to create one.");
    };

    // Context::load already parsed and validated the file.
    ctx.config.validate()?;

    let mut warnings: Vec<String> = Vec::new();

    if ctx.config.window.siblings > 5 {
        warnings.push(format!(
            "window.siblings = {} makes a very wide selector",
            ctx.config.window.siblings
        ));
    }
    if ctx.config.window.boundaries == 0 {
        warnings.push(
            "window.boundaries = 0 behaves like 1; first and last pages are always shown"
                .to_string(),
        );
    }
    if ctx.config.listing.per_page > 100 {
        warnings.push(format!(
            "listing.per_page = {} is above the storefront maximum of 100",
            ctx.config.listing.per_page
        ));
    }

    for warning in &warnings {
        ctx.output.warn(&format!("Warning: {}", warning));
    }

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "path": path.display().to_string(),
            "valid": true,
            "warnings": warnings,
        }));
        return Ok(());
    }

    if warnings.is_empty() {
        ctx.output.success("Configuration is valid");
    } else {
        ctx.output.success("Configuration is valid (with warnings)");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context_in(dir: &std::path::Path) -> Context {
        Context {
            cwd: dir.to_path_buf(),
            ..Context::with_defaults(true)
        }
    }

    #[test]
    fn test_init_writes_loadable_config() {
        let dir = std::env::temp_dir().join(format!("pager-init-test-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let ctx = context_in(&dir);

        for (format, name) in [
            (ConfigFormat::Toml, "pager.toml"),
            (ConfigFormat::Json, "pager.json"),
        ] {
            init_config(false, format, &ctx).unwrap();
            let loaded = config::load(&dir.join(name)).unwrap();
            assert_eq!(loaded, PagerConfig::default());
        }

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_init_refuses_overwrite_without_force() {
        let dir = std::env::temp_dir().join(format!("pager-init-force-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let ctx = context_in(&dir);

        init_config(false, ConfigFormat::Json, &ctx).unwrap();
        assert!(init_config(false, ConfigFormat::Json, &ctx).is_err());
        assert!(init_config(true, ConfigFormat::Json, &ctx).is_ok());

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_validate_without_file() {
        let ctx = Context::with_defaults(true);
        assert!(validate_config(&ctx).is_err());
        assert!(show_config(&Context::with_defaults(false)).is_ok());
    }
}
