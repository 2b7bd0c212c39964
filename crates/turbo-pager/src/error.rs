//! Pagination error types.

use thiserror::Error;

/// Errors that can occur when laying out a page selector.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PaginationError {
    /// Total page count below one.
    #[error("Invalid total page count: {0} (must be at least 1)")]
    InvalidTotal(i64),

    /// Current page outside `[1, total]`.
    #[error("Page {page} out of range: expected 1..={total}")]
    PageOutOfRange { page: i64, total: i64 },

    /// Negative sibling count.
    #[error("Invalid sibling count: {0} (must not be negative)")]
    InvalidSiblingCount(i64),

    /// Negative boundary count.
    #[error("Invalid boundary count: {0} (must not be negative)")]
    InvalidBoundaryCount(i64),

    /// Page size below one.
    #[error("Invalid page size: {0} (must be at least 1)")]
    InvalidPageSize(i64),

    /// Negative item count.
    #[error("Invalid item count: {0} (must not be negative)")]
    InvalidItemCount(i64),

    /// Configuration rejected by validation.
    #[error("Configuration error: {0}")]
    Config(String),
}
