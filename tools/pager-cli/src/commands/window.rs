//! Window command.

use anyhow::{Context as _, Result};
use turbo_pager::{format_tokens, PageWindow};

use super::WindowArgs;
use crate::context::Context;

/// Run the window command.
pub fn run(args: WindowArgs, ctx: &Context) -> Result<()> {
    let per_page = args.per_page.unwrap_or(ctx.config.listing.per_page);
    let window = PageWindow::new(args.page, per_page, args.items)
        .context("Invalid listing window")?;

    if ctx.output.is_json() {
        ctx.output.json(&window);
        return Ok(());
    }

    ctx.output.header("Listing window");
    ctx.output.kv("page", &format!("{} of {}", window.page, window.total_pages));
    ctx.output.kv("per_page", &window.per_page.to_string());
    ctx.output.kv(
        "showing",
        &format!(
            "{}-{} of {}",
            window.start_item(),
            window.end_item(),
            window.total_items
        ),
    );
    ctx.output.kv("offset", &window.offset().to_string());
    ctx.output.kv("prev", &optional(window.prev_page()));
    ctx.output.kv("next", &optional(window.next_page()));

    let tokens = window.range(ctx.config.window.siblings, ctx.config.window.boundaries)?;
    ctx.output.kv("pages", &format_tokens(&tokens));

    Ok(())
}

fn optional(page: Option<i64>) -> String {
    page.map(|p| p.to_string())
        .unwrap_or_else(|| "-".to_string())
}
