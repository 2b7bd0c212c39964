//! Range command.

use anyhow::{Context as _, Result};
use serde::Serialize;
use turbo_pager::{PageRange, PageToken, RangePolicy};

use super::RangeArgs;
use crate::context::Context;
use crate::output::styled_tokens;

#[derive(Serialize)]
struct RangeReport {
    #[serde(flatten)]
    range: PageRange,
    policy: RangePolicy,
    window_size: i64,
    tokens: Vec<PageToken>,
}

/// Run the range command.
pub fn run(args: RangeArgs, ctx: &Context) -> Result<()> {
    let policy = if args.clamp {
        RangePolicy::Clamp
    } else {
        ctx.config.policy
    };

    let range = PageRange::new(args.page, args.total)
        .with_siblings(args.siblings.unwrap_or(ctx.config.window.siblings))
        .with_boundaries(args.boundaries.unwrap_or(ctx.config.window.boundaries));

    ctx.output.debug(&format!(
        "siblings={} boundaries={} policy={}",
        range.siblings,
        range.boundaries,
        policy.as_str()
    ));

    let tokens = range
        .compute_with(policy)
        .with_context(|| format!("Cannot lay out page {} of {}", args.page, args.total))?;

    let effective = match policy {
        RangePolicy::Strict => range,
        RangePolicy::Clamp => range.normalized(),
    };
    if effective != range {
        ctx.output.warn(&format!(
            "Input clamped to page {} of {}",
            effective.current, effective.total
        ));
    }

    if ctx.output.is_json() {
        ctx.output.json(&RangeReport {
            range: effective,
            policy,
            window_size: effective.window_size(),
            tokens,
        });
        return Ok(());
    }

    ctx.output.line(&styled_tokens(&tokens, effective.current));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(page: i64, total: i64) -> RangeArgs {
        RangeArgs {
            page,
            total,
            siblings: None,
            boundaries: None,
            clamp: false,
        }
    }

    #[test]
    fn test_range_command() {
        let ctx = Context::with_defaults(true);
        assert!(run(args(5, 10), &ctx).is_ok());
        assert!(run(args(1, 1), &ctx).is_ok());
    }

    #[test]
    fn test_range_command_rejects_invalid_input() {
        let ctx = Context::with_defaults(true);
        assert!(run(args(11, 10), &ctx).is_err());
        assert!(run(args(1, 0), &ctx).is_err());
        assert!(run(
            RangeArgs {
                siblings: Some(-1),
                ..args(1, 10)
            },
            &ctx
        )
        .is_err());
    }

    #[test]
    fn test_range_command_clamps() {
        let ctx = Context::with_defaults(true);
        assert!(run(
            RangeArgs {
                clamp: true,
                ..args(11, 10)
            },
            &ctx
        )
        .is_ok());
    }
}
