//! Output formatting for the CLI.

use console::style;
use turbo_pager::{ItemKind, PageItem, PageToken};

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    /// Create a new output handler.
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    /// Print a success message.
    pub fn success(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("✓").green(), msg);
    }

    /// Print a warning message.
    pub fn warn(&self, msg: &str) {
        if self.json {
            return;
        }
        eprintln!("{} {}", style("⚠").yellow(), msg);
    }

    /// Print an error message.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
            return;
        }
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Print a debug message (only in verbose mode).
    pub fn debug(&self, msg: &str) {
        if !self.verbose || self.json {
            return;
        }
        eprintln!("{} {}", style("→").dim(), style(msg).dim());
    }

    /// Print a header/title.
    pub fn header(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print JSON output.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    /// Print a key-value pair.
    pub fn kv(&self, key: &str, value: &str) {
        if self.json {
            return;
        }
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print a raw line.
    pub fn line(&self, line: &str) {
        if self.json {
            return;
        }
        println!("{}", line);
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }
}

/// Render a token sequence with the current page highlighted.
pub fn styled_tokens(tokens: &[PageToken], current: i64) -> String {
    tokens
        .iter()
        .map(|token| match token {
            PageToken::Page { page } if *page == current => {
                style(format!("[{}]", page)).bold().cyan().to_string()
            }
            PageToken::Page { page } => page.to_string(),
            PageToken::Gap => style(token.to_string()).dim().to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render a control as a short badge.
pub fn item_badge(item: &PageItem) -> String {
    let label = item.label();
    if item.selected {
        style(format!("[{}]", label)).bold().cyan().to_string()
    } else if item.kind == ItemKind::Gap || item.disabled {
        style(label).dim().to_string()
    } else {
        label
    }
}
