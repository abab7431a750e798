//! Text node normalization.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

/// Collapse every run of whitespace (newlines, tabs, NBSP included) to a
/// single ASCII space. Leading and trailing runs are collapsed, not removed.
pub(crate) fn normalize_whitespace_cow(text: &str) -> Cow<'_, str> {
    WHITESPACE_RUN.replace_all(text, " ")
}
