//! Owned node tree and the html5ever-backed loader that produces it.
//!
//! html5ever builds a reference-counted [`RcDom`]; the converter works on a
//! plain owned tree instead so rendering never touches `RefCell` borrows and
//! the tree is dropped as soon as conversion finishes. The loader is also
//! where the nesting guard lives: a document deeper than
//! [`ConversionOptions::max_depth`] is rejected before any recursive
//! rendering starts.

use html5ever::driver::ParseOpts;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData, RcDom};

use crate::converter::Tag;
use crate::error::{ConversionError, Result};
use crate::options::ConversionOptions;

/// A node of the parsed document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Character data, exactly as decoded by the parser.
    Text(String),
    /// An element with its attributes and ordered children.
    Element(Element),
}

impl Node {
    /// Create a text node.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// The element, if this node is one.
    #[must_use]
    pub const fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(element) => Some(element),
            Self::Text(_) => None,
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

/// An element node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: Tag,
    name: String,
    /// Attributes in source order.
    pub attributes: Vec<(String, String)>,
    /// Child nodes in document order.
    pub children: Vec<Node>,
}

impl Element {
    /// Create an element with no attributes or children.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into().to_ascii_lowercase();
        Self {
            tag: Tag::from_name(&name),
            name,
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Kind resolved from the tag name.
    #[must_use]
    pub const fn tag(&self) -> Tag {
        self.tag
    }

    /// Lowercase tag name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Add an attribute.
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Append a child node.
    #[must_use]
    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Look up an attribute value by (case-insensitive) name.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Parse an HTML string into an owned tree rooted at the document body.
///
/// The returned root is the `body` element (or the document itself for
/// documents without one, such as framesets), so `<head>` content never
/// reaches the renderer. Comments, doctypes and processing instructions are
/// dropped; elements listed in [`ConversionOptions::strip_tags`] are dropped
/// with their whole subtree.
///
/// # Errors
///
/// Returns [`ConversionError::InputTooDeep`] when elements nest deeper than
/// [`ConversionOptions::max_depth`] below the root.
pub fn parse_html(html: &str, options: &ConversionOptions) -> Result<Node> {
    let dom = html5ever::parse_document(RcDom::default(), ParseOpts::default()).one(html);

    let (root_handle, root_name) = match find_body(&dom.document) {
        Some(body) => (body, "body"),
        None => (dom.document.clone(), "#document"),
    };

    let mut root = Element::new(root_name);
    root.children = build_children(&root_handle, 1, options)?;
    Ok(Node::Element(root))
}

/// Check that no element in `root` nests deeper than `limit` below it.
///
/// Depth is counted the way the loader counts it: the root's element
/// children sit at depth 1. The walk keeps its own stack, so arbitrarily deep
/// caller-built trees are measured without recursing.
pub(crate) fn ensure_depth(root: &Node, limit: usize) -> Result<()> {
    let mut pending: Vec<(&Element, usize)> = Vec::new();
    if let Node::Element(element) = root {
        pending.push((element, 0));
    }

    while let Some((element, depth)) = pending.pop() {
        let child_depth = depth + 1;
        for child in element.children.iter().filter_map(Node::as_element) {
            if child_depth > limit {
                tracing::warn!(depth = child_depth, limit, "node tree nesting exceeds limit");
                return Err(ConversionError::InputTooDeep {
                    depth: child_depth,
                    limit,
                });
            }
            pending.push((child, child_depth));
        }
    }

    Ok(())
}

fn find_body(document: &Handle) -> Option<Handle> {
    let html = find_child_element(document, "html")?;
    find_child_element(&html, "body")
}

fn find_child_element(parent: &Handle, local: &str) -> Option<Handle> {
    parent
        .children
        .borrow()
        .iter()
        .find(|child| matches!(&child.data, NodeData::Element { name, .. } if &*name.local == local))
        .cloned()
}

fn build_children(handle: &Handle, depth: usize, options: &ConversionOptions) -> Result<Vec<Node>> {
    let children = handle.children.borrow();
    let mut nodes = Vec::with_capacity(children.len());

    for child in children.iter() {
        match &child.data {
            NodeData::Text { contents } => {
                let contents = contents.borrow();
                if !contents.is_empty() {
                    nodes.push(Node::Text(contents.to_string()));
                }
            }
            NodeData::Element { name, attrs, .. } => {
                let tag_name = str::to_ascii_lowercase(&name.local);
                if options.strips(&tag_name) {
                    continue;
                }
                if depth > options.max_depth {
                    tracing::warn!(depth, limit = options.max_depth, "document nesting exceeds limit");
                    return Err(ConversionError::InputTooDeep {
                        depth,
                        limit: options.max_depth,
                    });
                }

                let attributes = attrs
                    .borrow()
                    .iter()
                    .map(|attr| (attr.name.local.to_string(), attr.value.to_string()))
                    .collect();

                nodes.push(Node::Element(Element {
                    tag: Tag::from_name(&tag_name),
                    name: tag_name,
                    attributes,
                    children: build_children(child, depth + 1, options)?,
                }));
            }
            NodeData::Document
            | NodeData::Doctype { .. }
            | NodeData::Comment { .. }
            | NodeData::ProcessingInstruction { .. } => {}
        }
    }

    Ok(nodes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn parse(html: &str) -> Element {
        match parse_html(html, &ConversionOptions::default()).unwrap() {
            Node::Element(root) => root,
            Node::Text(_) => panic!("root should be an element"),
        }
    }

    #[test]
    fn test_root_is_body() {
        let root = parse("<p>Hello</p>");
        assert_eq!(root.name, "body");
        assert_eq!(root.children.len(), 1);

        let p = root.children[0].as_element().expect("p element");
        assert_eq!(p.tag, Tag::Paragraph);
        assert_eq!(p.children, vec![Node::text("Hello")]);
    }

    #[test]
    fn test_head_content_is_excluded() {
        let root = parse("<html><head><title>Ignored</title></head><body><p>Kept</p></body></html>");
        assert_eq!(root.children.len(), 1);
        assert_eq!(root.children[0].as_element().map(|el| el.tag), Some(Tag::Paragraph));
    }

    #[test]
    fn test_attributes_and_entities() {
        let root = parse(r#"<a href="/x?a=1&amp;b=2" title="T">Tom &amp; Jerry</a>"#);
        let a = root.children[0].as_element().expect("anchor");
        assert_eq!(a.attribute("href"), Some("/x?a=1&b=2"));
        assert_eq!(a.attribute("TITLE"), Some("T"));
        assert_eq!(a.attribute("missing"), None);
        assert_eq!(a.children, vec![Node::text("Tom & Jerry")]);
    }

    #[test]
    fn test_comments_dropped() {
        let root = parse("<p>a<!-- note -->b</p>");
        let p = root.children[0].as_element().expect("p");
        assert_eq!(p.children, vec![Node::text("a"), Node::text("b")]);
    }

    #[test]
    fn test_strip_tags_drop_subtree() {
        let options = ConversionOptions::default().with_strip_tags(["script"]);
        let Node::Element(root) = parse_html("<p>keep</p><script>var x = 1;</script>", &options).unwrap() else {
            panic!("root should be an element");
        };
        assert!(root.children.iter().all(|child| child.as_element().is_none_or(|el| el.name != "script")));
    }

    #[test]
    fn test_depth_guard() {
        let html = "<div>".repeat(40) + "deep" + &"</div>".repeat(40);
        let options = ConversionOptions::default().with_max_depth(16);

        let err = parse_html(&html, &options).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InputTooDeep);

        let relaxed = ConversionOptions::default().with_max_depth(64);
        assert!(parse_html(&html, &relaxed).is_ok());
    }

    #[test]
    fn test_depth_guard_counts_from_body() {
        let options = ConversionOptions::default().with_max_depth(2);
        assert!(parse_html("<div><p>ok</p></div>", &options).is_ok());
        assert!(parse_html("<div><div><p>too deep</p></div></div>", &options).is_err());
    }

    fn chain(levels: usize) -> Node {
        (0..levels).fold(Node::text("leaf"), |node, _| Element::new("div").with_child(node).into())
    }

    #[test]
    fn test_ensure_depth_matches_loader_counting() {
        // root plus two nested divs below it
        let tree = chain(3);
        assert!(ensure_depth(&tree, 2).is_ok());

        let err = ensure_depth(&tree, 1).unwrap_err();
        assert!(matches!(err, ConversionError::InputTooDeep { depth: 2, limit: 1 }));
    }

    #[test]
    fn test_ensure_depth_on_text_root() {
        assert!(ensure_depth(&Node::text("plain"), 0).is_ok());
    }

    #[test]
    fn test_element_builder() {
        let li = Element::new("LI").with_attribute("class", "item").with_child(Node::text("x"));
        assert_eq!(li.name(), "li");
        assert_eq!(li.tag(), Tag::ListItem);
        assert_eq!(li.attribute("class"), Some("item"));
        assert_eq!(li.children.len(), 1);
    }
}
