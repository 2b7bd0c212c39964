//! Pagination layout for TurboCommerce storefronts.
//!
//! This crate computes what a page selector shows:
//!
//! - **Range**: page numbers and gap markers for a boundary + siblings layout
//! - **Window**: result-count arithmetic (total pages, offsets, item ranges)
//! - **Controls**: page/gap/prev/next controls with selected and disabled state
//! - **Config**: serde-backed window, listing, and control settings
//!
//! # Example
//!
//! ```rust
//! use turbo_pager::prelude::*;
//!
//! let tokens = page_range(25, 50, 1, 1).unwrap();
//! assert_eq!(format_tokens(&tokens), "1 … 24 25 26 … 50");
//!
//! let window = PageWindow::new(3, 24, 100).unwrap();
//! let items = build_items(window.page, window.total_pages, &ControlOptions::default()).unwrap();
//! assert!(items.iter().any(|item| item.selected));
//! ```

pub mod config;
pub mod control;
pub mod error;
pub mod range;
pub mod token;
pub mod window;

pub use config::PagerConfig;
pub use control::{build_items, navigate, ControlOptions, ItemKind, PageItem};
pub use error::PaginationError;
pub use range::{page_range, PageRange, RangePolicy};
pub use token::{format_tokens, PageToken};
pub use window::PageWindow;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::{ControlsConfig, ListingConfig, PagerConfig, WindowConfig};
    pub use crate::control::{build_items, navigate, ControlOptions, ItemKind, PageItem};
    pub use crate::error::PaginationError;
    pub use crate::range::{page_range, PageRange, RangePolicy};
    pub use crate::token::{format_tokens, PageToken};
    pub use crate::window::PageWindow;
}
