//! Closed set of element kinds the renderer distinguishes.

use std::borrow::Cow;

/// Element kind, resolved once from the lowercase tag name.
///
/// Every name outside the rule table maps to [`Tag::Other`], which renders
/// its children and drops the wrapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    /// `h1`..`h6`; the level is always in `1..=6`.
    Heading(u8),
    /// `p`
    Paragraph,
    /// `strong`, `b`
    Strong,
    /// `em`, `i`
    Emphasis,
    /// `u`
    Underline,
    /// `a`
    Anchor,
    /// `br`
    LineBreak,
    /// `ul`
    UnorderedList,
    /// `ol`
    OrderedList,
    /// `li`
    ListItem,
    /// `blockquote`
    Blockquote,
    /// `code`
    Code,
    /// `pre`
    Pre,
    /// `hr`
    HorizontalRule,
    /// `table`
    Table,
    /// `tr`
    TableRow,
    /// `td`, `th`
    TableCell,
    /// `img`
    Image,
    /// `div`, `span`, `section`, `article`, `main`
    Container,
    /// Any other element.
    Other,
}

impl Tag {
    /// Resolve a tag name. Matching is ASCII case-insensitive; names that
    /// are already lowercase (everything the loader produces) are matched
    /// without allocating.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        let lower = if name.bytes().any(|b| b.is_ascii_uppercase()) {
            Cow::Owned(name.to_ascii_lowercase())
        } else {
            Cow::Borrowed(name)
        };
        match lower.as_ref() {
            "h1" => Self::Heading(1),
            "h2" => Self::Heading(2),
            "h3" => Self::Heading(3),
            "h4" => Self::Heading(4),
            "h5" => Self::Heading(5),
            "h6" => Self::Heading(6),
            "p" => Self::Paragraph,
            "strong" | "b" => Self::Strong,
            "em" | "i" => Self::Emphasis,
            "u" => Self::Underline,
            "a" => Self::Anchor,
            "br" => Self::LineBreak,
            "ul" => Self::UnorderedList,
            "ol" => Self::OrderedList,
            "li" => Self::ListItem,
            "blockquote" => Self::Blockquote,
            "code" => Self::Code,
            "pre" => Self::Pre,
            "hr" => Self::HorizontalRule,
            "table" => Self::Table,
            "tr" => Self::TableRow,
            "td" | "th" => Self::TableCell,
            "img" => Self::Image,
            "div" | "span" | "section" | "article" | "main" => Self::Container,
            _ => Self::Other,
        }
    }
}
