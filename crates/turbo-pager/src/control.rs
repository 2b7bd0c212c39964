//! Page-control model.
//!
//! Turns a token sequence into the list of controls a page selector shows,
//! with selection and disabled state resolved. Rendering those controls is
//! left to the view layer.

use serde::{Deserialize, Serialize};

use crate::error::PaginationError;
use crate::range::{PageRange, RangePolicy, DEFAULT_BOUNDARIES, DEFAULT_SIBLINGS};
use crate::token::PageToken;

/// Kind of control in a page selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    /// Jump to page 1.
    First,
    /// Step back one page.
    Previous,
    /// A concrete page.
    Page,
    /// Non-interactive ellipsis.
    Gap,
    /// Step forward one page.
    Next,
    /// Jump to the last page.
    Last,
}

impl ItemKind {
    /// Default label for the control.
    pub fn label(&self) -> &'static str {
        match self {
            ItemKind::First => "\u{00ab}",
            ItemKind::Previous => "\u{2039}",
            ItemKind::Page => "",
            ItemKind::Gap => "\u{2026}",
            ItemKind::Next => "\u{203a}",
            ItemKind::Last => "\u{00bb}",
        }
    }
}

/// A single control in a page selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageItem {
    /// Kind of control.
    pub kind: ItemKind,
    /// Page the control navigates to. `None` for gaps.
    pub page: Option<i64>,
    /// Whether this is the current page.
    pub selected: bool,
    /// Whether the control ignores activation.
    pub disabled: bool,
}

impl PageItem {
    fn gap() -> Self {
        Self {
            kind: ItemKind::Gap,
            page: None,
            selected: false,
            disabled: true,
        }
    }

    /// Check if activating this control should dispatch a page change.
    pub fn is_interactive(&self) -> bool {
        !self.disabled && self.page.is_some()
    }

    /// Display label (the page number for page controls).
    pub fn label(&self) -> String {
        match (self.kind, self.page) {
            (ItemKind::Page, Some(page)) => page.to_string(),
            (kind, _) => kind.label().to_string(),
        }
    }
}

/// Options for building a page selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlOptions {
    /// Pages shown on each side of the current page.
    #[serde(default = "default_siblings")]
    pub siblings: i64,
    /// Pages pinned at each end.
    #[serde(default = "default_boundaries")]
    pub boundaries: i64,
    /// Disable every control (e.g. while results are loading).
    #[serde(default)]
    pub disabled: bool,
    /// Include first/last controls.
    #[serde(default)]
    pub show_first_last: bool,
    /// Include previous/next controls.
    #[serde(default = "default_true")]
    pub show_prev_next: bool,
    /// Handling of out-of-range input.
    #[serde(default)]
    pub policy: RangePolicy,
}

fn default_siblings() -> i64 {
    DEFAULT_SIBLINGS
}

fn default_boundaries() -> i64 {
    DEFAULT_BOUNDARIES
}

fn default_true() -> bool {
    true
}

impl Default for ControlOptions {
    fn default() -> Self {
        Self {
            siblings: default_siblings(),
            boundaries: default_boundaries(),
            disabled: false,
            show_first_last: false,
            show_prev_next: true,
            policy: RangePolicy::Strict,
        }
    }
}

impl ControlOptions {
    /// Set window sizes.
    pub fn with_window(mut self, siblings: i64, boundaries: i64) -> Self {
        self.siblings = siblings;
        self.boundaries = boundaries;
        self
    }

    /// Disable every control.
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Include first/last controls.
    pub fn with_first_last(mut self, show: bool) -> Self {
        self.show_first_last = show;
        self
    }

    /// Include previous/next controls.
    pub fn with_prev_next(mut self, show: bool) -> Self {
        self.show_prev_next = show;
        self
    }

    /// Set the input policy.
    pub fn with_policy(mut self, policy: RangePolicy) -> Self {
        self.policy = policy;
        self
    }
}

/// Build the controls for `current` out of `total` pages.
pub fn build_items(
    current: i64,
    total: i64,
    options: &ControlOptions,
) -> Result<Vec<PageItem>, PaginationError> {
    let range = PageRange::new(current, total)
        .with_siblings(options.siblings)
        .with_boundaries(options.boundaries);
    let range = match options.policy {
        RangePolicy::Strict => {
            range.validate()?;
            range
        }
        RangePolicy::Clamp => range.normalized(),
    };

    let tokens = range.compute()?;
    let current = range.current;
    let total = range.total;
    let disabled = options.disabled;

    let nav = |kind: ItemKind, page: i64, at_edge: bool| PageItem {
        kind,
        page: Some(page),
        selected: false,
        disabled: disabled || at_edge,
    };

    let mut items = Vec::with_capacity(tokens.len() + 4);

    if options.show_first_last {
        items.push(nav(ItemKind::First, 1, current == 1));
    }
    if options.show_prev_next {
        items.push(nav(ItemKind::Previous, (current - 1).max(1), current == 1));
    }

    items.extend(tokens.iter().map(|token| match token {
        PageToken::Page { page } => {
            let selected = *page == current;
            PageItem {
                kind: ItemKind::Page,
                page: Some(*page),
                selected,
                disabled: disabled || selected,
            }
        }
        PageToken::Gap => PageItem::gap(),
    }));

    if options.show_prev_next {
        items.push(nav(ItemKind::Next, (current + 1).min(total), current == total));
    }
    if options.show_first_last {
        items.push(nav(ItemKind::Last, total, current == total));
    }

    Ok(items)
}

/// Resolve a requested page change.
///
/// Clamps `target` into `[1, total]` and returns `None` when the result is
/// the current page, in which case no change should be dispatched.
pub fn navigate(current: i64, total: i64, target: i64) -> Option<i64> {
    let page = target.clamp(1, total.max(1));
    (page != current).then_some(page)
}
