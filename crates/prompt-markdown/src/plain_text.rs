//! Heading heuristics for input that is not markup.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

static ALL_CAPS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z\s]+$").expect("valid all-caps regex"));
static NUMBERED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]+)[.)]\s+(.+)$").expect("valid numbered-line regex"));

/// Minimum length, in characters, an all-caps line needs to become a heading.
const MIN_CAPS_HEADING_LEN: usize = 4;

/// Infer Markdown headings from the shape of plain-text lines.
///
/// Works line by line:
///
/// - blank lines are kept as-is;
/// - all-caps lines longer than three characters become `## LINE`;
/// - `1. Text` / `2) Text` lines become `### Text` (the ordinal is dropped);
/// - everything else is kept as-is.
///
/// This is a best-effort pass, not a parser, and never fails.
#[must_use]
pub fn plain_text_to_markdown(text: &str) -> String {
    text.split('\n').map(convert_line).collect::<Vec<_>>().join("\n")
}

fn convert_line(line: &str) -> Cow<'_, str> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Cow::Borrowed(line);
    }

    if is_caps_heading(trimmed) {
        return Cow::Owned(format!("## {trimmed}"));
    }

    if let Some(caps) = NUMBERED.captures(trimmed) {
        return Cow::Owned(format!("### {}", &caps[2]));
    }

    Cow::Borrowed(line)
}

fn is_caps_heading(trimmed: &str) -> bool {
    trimmed.chars().count() >= MIN_CAPS_HEADING_LEN && ALL_CAPS.is_match(trimmed) && trimmed == trimmed.to_uppercase()
}
