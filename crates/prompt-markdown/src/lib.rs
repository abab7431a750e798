//! # prompt-markdown
//!
//! Structure-preserving conversion of HTML (and heading-shaped plain text)
//! into Markdown.
//!
//! HTML is parsed with html5ever into an owned node tree, walked depth-first
//! with a fixed rule per tag (headings, paragraphs, emphasis, links, lists,
//! tables, code, images, blockquotes) and finally cleaned: trailing
//! whitespace removed, blank-line runs collapsed, document trimmed.
//!
//! ```
//! use prompt_markdown::convert_to_markdown;
//!
//! let markdown = convert_to_markdown(
//!     "<h1>Title</h1><p>Hello <strong>world</strong>.</p><ul><li>One</li><li>Two</li></ul>",
//!     true,
//! )
//! .unwrap();
//! assert_eq!(markdown, "# Title\n\nHello **world**.\n\n- One\n- Two");
//!
//! let outline = convert_to_markdown("INTRODUCTION\n1. Getting Started", false).unwrap();
//! assert_eq!(outline, "## INTRODUCTION\n### Getting Started");
//! ```
//!
//! The converter never fails on malformed markup. The only errors are the
//! nesting guard ([`ErrorKind::InputTooDeep`]) and non-UTF-8 byte input
//! ([`ErrorKind::InvalidInput`]).

mod clean;
pub mod converter;
pub mod dom;
pub mod error;
pub mod options;
mod plain_text;

pub use clean::clean_markdown;
pub use converter::Tag;
pub use dom::{Element, Node, parse_html};
pub use error::{ConversionError, ErrorKind, Result};
pub use options::{ConversionOptions, DEFAULT_MAX_DEPTH};
pub use plain_text::plain_text_to_markdown;

/// Convert content to cleaned Markdown with default options.
///
/// `is_html` selects the DOM-based converter (`true`, the usual choice) or
/// the plain-text heading heuristic (`false`). The format is never guessed.
///
/// # Errors
///
/// Returns [`ConversionError::InputTooDeep`] when HTML nests deeper than
/// [`DEFAULT_MAX_DEPTH`].
pub fn convert_to_markdown(content: &str, is_html: bool) -> Result<String> {
    convert_with_options(content, is_html, &ConversionOptions::default())
}

/// Convert content to cleaned Markdown.
///
/// # Errors
///
/// Returns [`ConversionError::InputTooDeep`] when HTML nests deeper than
/// `options.max_depth`.
pub fn convert_with_options(content: &str, is_html: bool, options: &ConversionOptions) -> Result<String> {
    tracing::debug!(input_len = content.len(), is_html, "converting content to markdown");

    let raw = if is_html {
        html_to_markdown_with_options(content, options)?
    } else {
        plain_text_to_markdown(content)
    };
    let markdown = clean_markdown(&raw);

    tracing::trace!(raw_len = raw.len(), output_len = markdown.len(), "conversion finished");
    Ok(markdown)
}

/// Convert raw bytes to cleaned Markdown.
///
/// # Errors
///
/// Returns [`ConversionError::InvalidInput`] when `bytes` is not UTF-8, and
/// [`ConversionError::InputTooDeep`] as [`convert_with_options`] does.
pub fn convert_bytes(bytes: &[u8], is_html: bool, options: &ConversionOptions) -> Result<String> {
    let content = std::str::from_utf8(bytes)?;
    convert_with_options(content, is_html, options)
}

/// Render HTML to Markdown without the cleaning pass.
///
/// # Errors
///
/// Returns [`ConversionError::InputTooDeep`] when the document nests deeper
/// than [`DEFAULT_MAX_DEPTH`].
pub fn html_to_markdown(html: &str) -> Result<String> {
    html_to_markdown_with_options(html, &ConversionOptions::default())
}

/// Render HTML to Markdown without the cleaning pass, using `options`.
///
/// # Errors
///
/// Returns [`ConversionError::InputTooDeep`] when the document nests deeper
/// than `options.max_depth`.
pub fn html_to_markdown_with_options(html: &str, options: &ConversionOptions) -> Result<String> {
    let root = parse_html(html, options)?;
    let mut output = String::with_capacity(html.len());
    converter::main::walk_node(&root, None, &mut output);
    Ok(output)
}

/// Render a single node (and its subtree) to Markdown.
///
/// The node is treated as having no parent element, so a bare `code`
/// element renders as inline code. Trees built by hand get the same nesting
/// limit as parsed documents.
///
/// # Errors
///
/// Returns [`ConversionError::InputTooDeep`] when elements nest deeper than
/// `options.max_depth` below `node`.
pub fn render_node(node: &Node, options: &ConversionOptions) -> Result<String> {
    dom::ensure_depth(node, options.max_depth)?;

    let mut output = String::new();
    converter::main::walk_node(node, None, &mut output);
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_to_end_scenario() {
        let html = "<h1>Title</h1><p>Hello <strong>world</strong>.</p><ul><li>One</li><li>Two</li></ul>";
        assert_eq!(
            html_to_markdown(html).unwrap(),
            "# Title\n\nHello **world**.\n\n- One\n- Two\n\n"
        );
        assert_eq!(
            convert_to_markdown(html, true).unwrap(),
            "# Title\n\nHello **world**.\n\n- One\n- Two"
        );
    }

    #[test]
    fn test_plain_text_path_is_cleaned() {
        assert_eq!(
            convert_to_markdown("OVERVIEW   \n\n\n\nbody  ", false).unwrap(),
            "## OVERVIEW\n\nbody"
        );
    }

    #[test]
    fn test_render_node_matches_rule_table() {
        let node: Node = Element::new("a").with_child(Node::text("Click")).into();
        assert_eq!(render_node(&node, &ConversionOptions::default()).unwrap(), "[Click](#)");
    }

    #[test]
    fn test_render_node_rejects_deep_builder_tree() {
        let mut node = Node::text("bottom");
        for _ in 0..1_000 {
            node = Element::new("div").with_child(node).into();
        }

        let err = render_node(&node, &ConversionOptions::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InputTooDeep);

        let shallow: Node = Element::new("div")
            .with_child(Element::new("p").with_child(Node::text("ok")))
            .into();
        let options = ConversionOptions::default().with_max_depth(1);
        assert_eq!(render_node(&shallow, &options).unwrap(), "ok\n\n");
    }

    #[test]
    fn test_convert_bytes_rejects_invalid_utf8() {
        let err = convert_bytes(&[b'<', b'p', b'>', 0xff], true, &ConversionOptions::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);

        let ok = convert_bytes(b"<p>fine</p>", true, &ConversionOptions::default()).unwrap();
        assert_eq!(ok, "fine");
    }

    #[test]
    fn test_depth_guard_surfaces_through_entry_point() {
        let html = "<div>".repeat(20) + "x";
        let options = ConversionOptions::default().with_max_depth(8);
        let err = convert_with_options(&html, true, &options).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InputTooDeep);
    }
}
