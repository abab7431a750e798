//! Node dispatcher and per-tag rendering rules.
//!
//! The walker appends every fragment to one output buffer in document order.
//! Rules that need to inspect their rendered children (paragraph trimming,
//! blockquote line prefixes, list items, table cells) render them into a
//! scratch buffer first; all other rules write the opening marker, walk the
//! children straight into the output and write the closing marker.
//!
//! Block rules always finish with `"\n\n"`; inline rules add no whitespace.

use crate::converter::list::render_list;
use crate::converter::table::render_table;
use crate::converter::tag::Tag;
use crate::converter::text::normalize_whitespace_cow;
use crate::dom::{Element, Node};

const DEFAULT_LINK_TARGET: &str = "#";
const DEFAULT_IMAGE_ALT: &str = "image";

/// Render a node and its subtree into `output`.
///
/// `parent` is the kind of the enclosing element, if any; only `code` looks
/// at it, to tell inline code from the body of a fenced block.
pub(crate) fn walk_node(node: &Node, parent: Option<Tag>, output: &mut String) {
    match node {
        Node::Text(text) => output.push_str(&normalize_whitespace_cow(text)),
        Node::Element(element) => walk_element(element, parent, output),
    }
}

/// Render the children of `element` into `output`.
pub(crate) fn walk_children(element: &Element, output: &mut String) {
    for child in &element.children {
        walk_node(child, Some(element.tag()), output);
    }
}

/// Render the children of `element` into a fresh string.
pub(crate) fn render_children(element: &Element) -> String {
    let mut content = String::new();
    walk_children(element, &mut content);
    content
}

fn walk_element(element: &Element, parent: Option<Tag>, output: &mut String) {
    match element.tag() {
        Tag::Heading(level) => {
            for _ in 0..level {
                output.push('#');
            }
            output.push(' ');
            walk_children(element, output);
            output.push_str("\n\n");
        }

        Tag::Paragraph => {
            let content = render_children(element);
            let trimmed = content.trim();
            if !trimmed.is_empty() {
                output.push_str(trimmed);
                output.push_str("\n\n");
            }
        }

        Tag::Strong => wrap_children(element, "**", output),

        // Markdown has no underline; it degrades to emphasis.
        Tag::Emphasis | Tag::Underline => wrap_children(element, "*", output),

        Tag::Anchor => {
            let href = non_empty_attribute(element, "href").unwrap_or(DEFAULT_LINK_TARGET);
            output.push('[');
            walk_children(element, output);
            output.push_str("](");
            output.push_str(href);
            output.push(')');
        }

        Tag::LineBreak => output.push('\n'),

        Tag::UnorderedList => {
            render_list(&element.children, false, output);
            output.push('\n');
        }

        Tag::OrderedList => {
            render_list(&element.children, true, output);
            output.push('\n');
        }

        Tag::Blockquote => {
            let content = render_children(element);
            for (idx, line) in content.trim().split('\n').enumerate() {
                if idx > 0 {
                    output.push('\n');
                }
                output.push_str("> ");
                output.push_str(line);
            }
            output.push_str("\n\n");
        }

        Tag::Code => {
            if parent == Some(Tag::Pre) {
                walk_children(element, output);
            } else {
                wrap_children(element, "`", output);
            }
        }

        Tag::Pre => {
            output.push_str("\n```\n");
            walk_children(element, output);
            output.push_str("\n```\n\n");
        }

        Tag::HorizontalRule => output.push_str("\n---\n\n"),

        Tag::Table => {
            render_table(element, output);
            output.push_str("\n\n");
        }

        Tag::Image => {
            let alt = non_empty_attribute(element, "alt").unwrap_or(DEFAULT_IMAGE_ALT);
            let src = element.attribute("src").unwrap_or_default();
            output.push_str("![");
            output.push_str(alt);
            output.push_str("](");
            output.push_str(src);
            output.push(')');
        }

        // Items render as-is; numbering and prefixes belong to the list.
        Tag::ListItem | Tag::TableRow | Tag::TableCell | Tag::Container | Tag::Other => {
            walk_children(element, output);
        }
    }
}

fn wrap_children(element: &Element, marker: &str, output: &mut String) {
    output.push_str(marker);
    walk_children(element, output);
    output.push_str(marker);
}

/// Attribute value, treating an empty value the same as a missing one.
fn non_empty_attribute<'a>(element: &'a Element, name: &str) -> Option<&'a str> {
    element.attribute(name).filter(|value| !value.is_empty())
}
