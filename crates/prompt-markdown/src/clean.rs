//! Markdown post-processing.

use once_cell::sync::Lazy;
use regex::Regex;

static EXCESS_NEWLINES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").expect("valid newline regex"));

/// Normalize blank lines and trailing whitespace in rendered Markdown.
///
/// Strips trailing whitespace from every line (leading indentation is kept),
/// collapses runs of three or more newlines to a single blank line and trims
/// the document. Line ends are trimmed before collapsing so that lines made
/// only of spaces cannot form a new run afterwards, which keeps the
/// function idempotent.
#[must_use]
pub fn clean_markdown(markdown: &str) -> String {
    let trimmed = trim_line_end_whitespace(markdown);
    let collapsed = EXCESS_NEWLINES.replace_all(&trimmed, "\n\n");
    collapsed.trim().to_string()
}

/// Remove trailing whitespace from every line while preserving newlines.
fn trim_line_end_whitespace(text: &str) -> String {
    let mut cleaned = String::with_capacity(text.len());
    for (idx, line) in text.split('\n').enumerate() {
        if idx > 0 {
            cleaned.push('\n');
        }
        cleaned.push_str(line.trim_end());
    }
    cleaned
}
