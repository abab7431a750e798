//! Ordered and unordered list rendering.

use crate::converter::main::render_children;
use crate::converter::tag::Tag;
use crate::dom::Node;

/// Render the `li` children of a list, one tight line per item.
///
/// Non-`li` children are ignored. Items whose trimmed content is empty are
/// skipped and do not consume a number, so ordered numbering follows the
/// emitted items rather than source positions.
pub(crate) fn render_list(children: &[Node], ordered: bool, output: &mut String) {
    let mut counter = 0usize;

    for item in children
        .iter()
        .filter_map(Node::as_element)
        .filter(|element| element.tag() == Tag::ListItem)
    {
        let content = render_children(item);
        let content = content.trim();
        if content.is_empty() {
            continue;
        }

        if ordered {
            counter += 1;
            output.push_str(&counter.to_string());
            output.push_str(". ");
        } else {
            output.push_str("- ");
        }
        output.push_str(content);
        output.push('\n');
    }
}
