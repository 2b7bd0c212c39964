//! Result-count arithmetic for a paged listing.

use serde::{Deserialize, Serialize};

use crate::error::PaginationError;
use crate::range::{PageRange, RangePolicy};
use crate::token::PageToken;

/// Default items per page for storefront listings.
pub const DEFAULT_PER_PAGE: i64 = 24;

/// The page of a listing being viewed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct PageWindow {
    /// Current page (1-indexed).
    pub page: i64,
    /// Items per page.
    pub per_page: i64,
    /// Total number of items.
    pub total_items: i64,
    /// Total number of pages. An empty listing still has one page.
    pub total_pages: i64,
}

impl PageWindow {
    /// Create a page window, rejecting out-of-range input.
    pub fn new(page: i64, per_page: i64, total_items: i64) -> Result<Self, PaginationError> {
        if per_page < 1 {
            return Err(PaginationError::InvalidPageSize(per_page));
        }
        if total_items < 0 {
            return Err(PaginationError::InvalidItemCount(total_items));
        }

        let total_pages = total_pages(per_page, total_items);
        if page < 1 || page > total_pages {
            return Err(PaginationError::PageOutOfRange {
                page,
                total: total_pages,
            });
        }

        Ok(Self {
            page,
            per_page,
            total_items,
            total_pages,
        })
    }

    /// Create a page window, clamping input into range.
    pub fn clamped(page: i64, per_page: i64, total_items: i64) -> Self {
        let per_page = per_page.max(1);
        let total_items = total_items.max(0);
        let total_pages = total_pages(per_page, total_items);

        Self {
            page: page.clamp(1, total_pages),
            per_page,
            total_items,
            total_pages,
        }
    }

    /// Get the offset for SQL queries.
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.per_page)
    }

    /// Whether there's a next page.
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Whether there's a previous page.
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    /// Check if on first page.
    pub fn is_first(&self) -> bool {
        self.page == 1
    }

    /// Check if on last page.
    pub fn is_last(&self) -> bool {
        self.page >= self.total_pages
    }

    pub fn next_page(&self) -> Option<i64> {
        self.has_next().then_some(self.page + 1)
    }

    pub fn prev_page(&self) -> Option<i64> {
        self.has_prev().then_some(self.page - 1)
    }

    /// Get start item number (1-indexed), or 0 for an empty listing.
    pub fn start_item(&self) -> i64 {
        if self.total_items == 0 {
            0
        } else {
            self.offset() + 1
        }
    }

    /// Get end item number.
    pub fn end_item(&self) -> i64 {
        self.page
            .saturating_mul(self.per_page)
            .min(self.total_items)
    }

    /// Range request for this window.
    pub fn page_range(&self, siblings: i64, boundaries: i64) -> PageRange {
        PageRange::new(self.page, self.total_pages)
            .with_siblings(siblings)
            .with_boundaries(boundaries)
    }

    /// Lay out the page selector for this window.
    pub fn range(&self, siblings: i64, boundaries: i64) -> Result<Vec<PageToken>, PaginationError> {
        self.page_range(siblings, boundaries)
            .compute_with(RangePolicy::Strict)
    }
}

impl Default for PageWindow {
    fn default() -> Self {
        Self::clamped(1, DEFAULT_PER_PAGE, 0)
    }
}

fn total_pages(per_page: i64, total_items: i64) -> i64 {
    if total_items == 0 {
        1
    } else {
        // ceil(total_items / per_page)
        (total_items - 1) / per_page + 1
    }
}
