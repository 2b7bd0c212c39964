//! Page range computation.
//!
//! Lays out a page selector as boundary pages at both ends, a window of
//! siblings around the current page, and gap markers for the elided runs
//! in between:
//!
//! ```text
//! [1] … [24] [25] [26] … [50]
//! ```
//!
//! A gap always stands for two or more hidden pages. When only one page
//! would be hidden it is shown instead.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::PaginationError;
use crate::token::PageToken;

/// Default number of pages shown on each side of the current page.
pub const DEFAULT_SIBLINGS: i64 = 1;

/// Default number of pages pinned at each end.
pub const DEFAULT_BOUNDARIES: i64 = 1;

/// How invalid input is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RangePolicy {
    /// Reject invalid input with an error.
    #[default]
    Strict,
    /// Clamp the page into range and floor negative counts to zero.
    Clamp,
}

impl RangePolicy {
    /// Get the policy name.
    pub fn as_str(&self) -> &'static str {
        match self {
            RangePolicy::Strict => "strict",
            RangePolicy::Clamp => "clamp",
        }
    }

    /// Parse a policy name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "strict" => Some(RangePolicy::Strict),
            "clamp" => Some(RangePolicy::Clamp),
            _ => None,
        }
    }
}

/// Inputs to a single range computation.
///
/// The value is `Copy + Hash`, so callers that memoize layouts can use it
/// directly as a cache key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageRange {
    /// Current page (1-indexed).
    pub current: i64,
    /// Total number of pages.
    pub total: i64,
    /// Pages shown on each side of the current page.
    pub siblings: i64,
    /// Pages pinned at the start and at the end.
    pub boundaries: i64,
}

impl PageRange {
    /// Create a range request with default window sizes.
    pub fn new(current: i64, total: i64) -> Self {
        Self {
            current,
            total,
            siblings: DEFAULT_SIBLINGS,
            boundaries: DEFAULT_BOUNDARIES,
        }
    }

    /// Set the sibling count.
    pub fn with_siblings(mut self, siblings: i64) -> Self {
        self.siblings = siblings;
        self
    }

    /// Set the boundary count.
    pub fn with_boundaries(mut self, boundaries: i64) -> Self {
        self.boundaries = boundaries;
        self
    }

    /// Check the request against the input constraints.
    pub fn validate(&self) -> Result<(), PaginationError> {
        if self.total < 1 {
            return Err(PaginationError::InvalidTotal(self.total));
        }
        if self.current < 1 || self.current > self.total {
            return Err(PaginationError::PageOutOfRange {
                page: self.current,
                total: self.total,
            });
        }
        if self.siblings < 0 {
            return Err(PaginationError::InvalidSiblingCount(self.siblings));
        }
        if self.boundaries < 0 {
            return Err(PaginationError::InvalidBoundaryCount(self.boundaries));
        }
        Ok(())
    }

    /// Return a copy with every field forced into its valid range.
    pub fn normalized(&self) -> Self {
        let total = self.total.max(1);
        Self {
            current: self.current.clamp(1, total),
            total,
            siblings: self.siblings.max(0),
            boundaries: self.boundaries.max(0),
        }
    }

    /// Maximum number of concrete pages the layout shows without a gap.
    pub fn window_size(&self) -> i64 {
        window_size(self.siblings, self.boundaries)
    }

    /// Compute the layout, rejecting invalid input.
    pub fn compute(&self) -> Result<Vec<PageToken>, PaginationError> {
        self.compute_with(RangePolicy::Strict)
    }

    /// Compute the layout under the given policy.
    pub fn compute_with(&self, policy: RangePolicy) -> Result<Vec<PageToken>, PaginationError> {
        let range = match policy {
            RangePolicy::Strict => {
                self.validate()?;
                *self
            }
            RangePolicy::Clamp => {
                let normalized = self.normalized();
                if normalized != *self {
                    debug!(input = ?self, ?normalized, "clamped page range input");
                }
                normalized
            }
        };

        Ok(layout(
            range.current,
            range.total,
            range.siblings,
            range.boundaries,
        ))
    }
}

/// Compute the page selector layout for `current` out of `total` pages.
///
/// ```
/// use turbo_pager::{page_range, PageToken};
///
/// let tokens = page_range(25, 50, 1, 1).unwrap();
/// assert_eq!(tokens[1], PageToken::Gap);
/// assert_eq!(tokens.len(), 7);
/// ```
pub fn page_range(
    current: i64,
    total: i64,
    siblings: i64,
    boundaries: i64,
) -> Result<Vec<PageToken>, PaginationError> {
    PageRange::new(current, total)
        .with_siblings(siblings)
        .with_boundaries(boundaries)
        .compute()
}

fn window_size(siblings: i64, boundaries: i64) -> i64 {
    siblings
        .saturating_mul(2)
        .saturating_add(3)
        .saturating_add(boundaries.saturating_mul(2))
}

/// Lay out validated input.
///
/// The first and last pages are always pinned, so a boundary count of zero
/// lays out like a boundary count of one. Otherwise a gap would end up at
/// either end of the sequence.
fn layout(current: i64, total: i64, siblings: i64, boundaries: i64) -> Vec<PageToken> {
    let boundaries = boundaries.max(1);
    let window = window_size(siblings, boundaries);

    if total <= window {
        trace!(total, window, "all pages fit in window");
        return pages(1, total).collect();
    }

    let left_edge = current.saturating_sub(siblings).max(boundaries + 1);
    let right_edge = current.saturating_add(siblings).min(total - boundaries);

    let left_gap = left_edge > boundaries + 2;
    let right_gap = right_edge < total - boundaries - 1;

    debug!(
        current,
        total,
        siblings,
        boundaries,
        left_edge,
        right_edge,
        left_gap,
        right_gap,
        "computed page range"
    );

    let mut tokens = Vec::new();
    match (left_gap, right_gap) {
        (false, false) => tokens.extend(pages(1, total)),
        (true, false) => {
            tokens.extend(pages(1, boundaries));
            tokens.push(PageToken::Gap);
            tokens.extend(pages(left_edge, total));
        }
        (false, true) => {
            tokens.extend(pages(1, right_edge));
            tokens.push(PageToken::Gap);
            tokens.extend(pages(total - boundaries + 1, total));
        }
        (true, true) => {
            tokens.extend(pages(1, boundaries));
            tokens.push(PageToken::Gap);
            tokens.extend(pages(left_edge, right_edge));
            tokens.push(PageToken::Gap);
            tokens.extend(pages(total - boundaries + 1, total));
        }
    }
    tokens
}

fn pages(start: i64, end: i64) -> impl Iterator<Item = PageToken> {
    (start..=end).map(PageToken::page)
}

#[cfg(test)]
mod tests {
    use super::*;

    const G: PageToken = PageToken::Gap;

    fn p(page: i64) -> PageToken {
        PageToken::page(page)
    }

    #[test]
    fn test_first_page() {
        let tokens = page_range(1, 50, 1, 1).unwrap();
        assert_eq!(tokens, vec![p(1), p(2), G, p(50)]);
    }

    #[test]
    fn test_middle_page() {
        let tokens = page_range(25, 50, 1, 1).unwrap();
        assert_eq!(tokens, vec![p(1), G, p(24), p(25), p(26), G, p(50)]);
    }

    #[test]
    fn test_near_end() {
        let tokens = page_range(48, 50, 1, 1).unwrap();
        assert_eq!(tokens, vec![p(1), G, p(47), p(48), p(49), p(50)]);
    }

    #[test]
    fn test_last_page() {
        let tokens = page_range(50, 50, 1, 1).unwrap();
        assert_eq!(tokens, vec![p(1), G, p(49), p(50)]);
    }

    #[test]
    fn test_just_over_window() {
        let tokens = page_range(5, 9, 1, 1).unwrap();
        assert_eq!(tokens, vec![p(1), G, p(4), p(5), p(6), G, p(9)]);
    }

    #[test]
    fn test_fits_in_window() {
        let tokens = page_range(4, 7, 1, 1).unwrap();
        assert_eq!(tokens, (1..=7).map(p).collect::<Vec<_>>());
    }

    #[test]
    fn test_single_page() {
        assert_eq!(page_range(1, 1, 0, 0).unwrap(), vec![p(1)]);
        assert_eq!(page_range(1, 1, 3, 2).unwrap(), vec![p(1)]);
    }

    #[test]
    fn test_wider_window() {
        let tokens = page_range(25, 50, 2, 2).unwrap();
        assert_eq!(
            tokens,
            vec![p(1), p(2), G, p(23), p(24), p(25), p(26), p(27), G, p(49), p(50)]
        );
    }

    #[test]
    fn test_single_hidden_page_is_shown() {
        // Page 2 would be the only page behind a left gap.
        let tokens = page_range(4, 50, 1, 1).unwrap();
        assert_eq!(tokens, vec![p(1), p(2), p(3), p(4), p(5), G, p(50)]);

        // Page 49 would be the only page behind a right gap.
        let tokens = page_range(47, 50, 1, 1).unwrap();
        assert_eq!(tokens, vec![p(1), G, p(46), p(47), p(48), p(49), p(50)]);
    }

    #[test]
    fn test_two_hidden_pages_become_gap() {
        let tokens = page_range(5, 50, 1, 1).unwrap();
        assert_eq!(tokens, vec![p(1), G, p(4), p(5), p(6), G, p(50)]);
    }

    #[test]
    fn test_zero_siblings() {
        let tokens = page_range(10, 20, 0, 1).unwrap();
        assert_eq!(tokens, vec![p(1), G, p(10), G, p(20)]);
    }

    #[test]
    fn test_zero_boundaries_pins_endpoints() {
        let tokens = page_range(25, 50, 1, 0).unwrap();
        assert_eq!(tokens, page_range(25, 50, 1, 1).unwrap());
        assert_eq!(tokens.first(), Some(&p(1)));
        assert_eq!(tokens.last(), Some(&p(50)));
    }

    #[test]
    fn test_window_size() {
        assert_eq!(PageRange::new(1, 10).window_size(), 7);
        assert_eq!(PageRange::new(1, 10).with_siblings(2).with_boundaries(2).window_size(), 11);
        assert_eq!(
            PageRange::new(1, 10).with_siblings(i64::MAX).window_size(),
            i64::MAX
        );
    }

    #[test]
    fn test_huge_counts_do_not_overflow() {
        let tokens = page_range(3, 5, i64::MAX, i64::MAX).unwrap();
        assert_eq!(tokens, (1..=5).map(p).collect::<Vec<_>>());

        let tokens = page_range(i64::MAX / 2, i64::MAX, 1, 1).unwrap();
        assert_eq!(tokens.len(), 7);
        assert_eq!(tokens.last(), Some(&p(i64::MAX)));
    }

    #[test]
    fn test_strict_rejects_invalid_input() {
        assert_eq!(
            page_range(1, 0, 1, 1),
            Err(PaginationError::InvalidTotal(0))
        );
        assert_eq!(
            page_range(0, 10, 1, 1),
            Err(PaginationError::PageOutOfRange { page: 0, total: 10 })
        );
        assert_eq!(
            page_range(11, 10, 1, 1),
            Err(PaginationError::PageOutOfRange { page: 11, total: 10 })
        );
        assert_eq!(
            page_range(1, 10, -1, 1),
            Err(PaginationError::InvalidSiblingCount(-1))
        );
        assert_eq!(
            page_range(1, 10, 1, -3),
            Err(PaginationError::InvalidBoundaryCount(-3))
        );
    }

    #[test]
    fn test_clamp_policy() {
        let tokens = PageRange::new(99, 50)
            .compute_with(RangePolicy::Clamp)
            .unwrap();
        assert_eq!(tokens, page_range(50, 50, 1, 1).unwrap());

        let tokens = PageRange::new(-4, 0)
            .with_siblings(-1)
            .with_boundaries(-1)
            .compute_with(RangePolicy::Clamp)
            .unwrap();
        assert_eq!(tokens, vec![p(1)]);
    }

    #[test]
    fn test_normalized() {
        let range = PageRange::new(0, -5).with_siblings(-2).normalized();
        assert_eq!(range.current, 1);
        assert_eq!(range.total, 1);
        assert_eq!(range.siblings, 0);
        assert_eq!(range.boundaries, 1);
    }

    #[test]
    fn test_types_are_thread_safe() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PageRange>();
        assert_send_sync::<PageToken>();
        assert_send_sync::<PaginationError>();
    }

    #[test]
    fn test_policy_names() {
        assert_eq!(RangePolicy::from_name("Clamp"), Some(RangePolicy::Clamp));
        assert_eq!(RangePolicy::from_name("strict"), Some(RangePolicy::Strict));
        assert_eq!(RangePolicy::from_name("lenient"), None);
        assert_eq!(RangePolicy::default().as_str(), "strict");
    }
}
