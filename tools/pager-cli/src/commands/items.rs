//! Items command.

use anyhow::{bail, Context as _, Result};
use serde::Serialize;
use turbo_pager::{build_items, PageItem, PageRange, PageWindow, RangePolicy};

use super::ItemsArgs;
use crate::context::Context;
use crate::output::item_badge;

#[derive(Debug, Serialize)]
struct ItemsReport {
    page: i64,
    total: i64,
    items: Vec<PageItem>,
}

/// Run the items command.
pub fn run(args: ItemsArgs, ctx: &Context) -> Result<()> {
    let report = build_report(&args, ctx)?;

    if ctx.output.is_json() {
        ctx.output.json(&report);
        return Ok(());
    }

    let badges: Vec<String> = report.items.iter().map(item_badge).collect();
    ctx.output.line(&badges.join(" "));

    let clickable = report
        .items
        .iter()
        .filter(|item| item.is_interactive())
        .count();
    ctx.output.debug(&format!(
        "{} controls, {} clickable",
        report.items.len(),
        clickable
    ));

    Ok(())
}

fn build_report(args: &ItemsArgs, ctx: &Context) -> Result<ItemsReport> {
    let mut options = ctx
        .config
        .control_options()
        .with_disabled(args.disabled);
    if args.first_last {
        options = options.with_first_last(true);
    }
    if args.clamp {
        options = options.with_policy(RangePolicy::Clamp);
    }

    let total = match (args.total, args.items) {
        (Some(total), _) => total,
        (None, Some(items)) => {
            let per_page = args.per_page.unwrap_or(ctx.config.listing.per_page);
            let window = match options.policy {
                RangePolicy::Strict => PageWindow::new(1, per_page, items)
                    .context("Invalid listing window")?,
                RangePolicy::Clamp => PageWindow::clamped(1, per_page, items),
            };
            ctx.output.debug(&format!(
                "{} items at {} per page = {} pages",
                window.total_items, window.per_page, window.total_pages
            ));
            window.total_pages
        }
        (None, None) => bail!("Either --total or --items is required"),
    };

    let items = build_items(args.page, total, &options)
        .with_context(|| format!("Cannot build controls for page {} of {}", args.page, total))?;

    let (page, total) = match options.policy {
        RangePolicy::Strict => (args.page, total),
        RangePolicy::Clamp => {
            let effective = PageRange::new(args.page, total).normalized();
            if effective.current != args.page || effective.total != total {
                ctx.output.warn(&format!(
                    "Input clamped to page {} of {}",
                    effective.current, effective.total
                ));
            }
            (effective.current, effective.total)
        }
    };

    Ok(ItemsReport { page, total, items })
}
