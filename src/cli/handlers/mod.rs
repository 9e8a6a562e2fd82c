//! Command handlers for the CLI.
//!
//! Session handlers are `impl` blocks on [`Session`](super::session::Session),
//! one file per command group.

mod completions;
mod compose;
mod remove;
mod view;

pub use completions::handle_completions;

/// Truncates a string to a maximum display width, adding ellipsis if needed.
pub(crate) fn truncate_str(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_width.saturating_sub(1)).collect();
        format!("{}…", truncated)
    }
}

/// Collapses a multi-line note onto one line for tables and prompts.
pub(crate) fn one_line(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
