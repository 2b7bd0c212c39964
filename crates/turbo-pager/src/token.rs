//! Page tokens produced by the range computer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One slot in a page selector, read left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PageToken {
    /// A concrete, 1-indexed page.
    Page { page: i64 },
    /// An elided run of at least two pages.
    Gap,
}

impl PageToken {
    /// Create a page token.
    pub fn page(page: i64) -> Self {
        PageToken::Page { page }
    }

    /// The page number, if this is a concrete page.
    pub fn as_page(&self) -> Option<i64> {
        match self {
            PageToken::Page { page } => Some(*page),
            PageToken::Gap => None,
        }
    }

    /// Check if this is a gap marker.
    pub fn is_gap(&self) -> bool {
        matches!(self, PageToken::Gap)
    }
}

impl From<i64> for PageToken {
    fn from(page: i64) -> Self {
        PageToken::page(page)
    }
}

impl fmt::Display for PageToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageToken::Page { page } => write!(f, "{}", page),
            PageToken::Gap => write!(f, "\u{2026}"),
        }
    }
}

/// Format a token sequence as a single space-separated line.
pub fn format_tokens(tokens: &[PageToken]) -> String {
    tokens
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_accessors() {
        assert_eq!(PageToken::page(4).as_page(), Some(4));
        assert_eq!(PageToken::Gap.as_page(), None);
        assert!(PageToken::Gap.is_gap());
        assert!(!PageToken::from(1).is_gap());
    }

    #[test]
    fn test_token_serialization() {
        let json = serde_json::to_string(&PageToken::page(3)).unwrap();
        assert_eq!(json, r#"{"type":"page","page":3}"#);

        let json = serde_json::to_string(&PageToken::Gap).unwrap();
        assert_eq!(json, r#"{"type":"gap"}"#);

        let back: PageToken = serde_json::from_str(r#"{"type":"page","page":9}"#).unwrap();
        assert_eq!(back, PageToken::page(9));
    }

    #[test]
    fn test_format_tokens() {
        let tokens = vec![
            PageToken::page(1),
            PageToken::Gap,
            PageToken::page(5),
        ];
        assert_eq!(format_tokens(&tokens), "1 \u{2026} 5");
    }
}
