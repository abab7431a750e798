//! Pipe table rendering.
//!
//! Rows are gathered into a cell grid before anything is written, because
//! the separator line depends on the header row.

use crate::converter::main::render_children;
use crate::converter::tag::Tag;
use crate::dom::Element;

/// Render `table` as a pipe table.
///
/// The first non-empty row becomes the header and fixes the separator width.
/// Later rows are written with the cells they have: no padding, no
/// truncation. A table without any cells renders as nothing.
pub(crate) fn render_table(table: &Element, output: &mut String) {
    let rows = collect_rows(table);
    let Some((header, body)) = rows.split_first() else {
        return;
    };

    push_row(header, output);

    output.push('|');
    for _ in header {
        output.push_str(" --- |");
    }
    output.push('\n');

    for row in body {
        push_row(row, output);
    }
}

/// Rendered, trimmed cell text for every row that has at least one cell.
fn collect_rows(table: &Element) -> Vec<Vec<String>> {
    let mut row_elements = Vec::new();
    collect_row_elements(table, &mut row_elements);

    row_elements
        .into_iter()
        .map(|row| {
            row.children
                .iter()
                .filter_map(|child| child.as_element())
                .filter(|cell| cell.tag() == Tag::TableCell)
                .map(|cell| render_children(cell).trim().to_string())
                .collect::<Vec<_>>()
        })
        .filter(|cells| !cells.is_empty())
        .collect()
}

/// Rows in document order, looking through `thead`/`tbody`/`tfoot` and any
/// other wrapper but not into nested tables.
fn collect_row_elements<'a>(element: &'a Element, rows: &mut Vec<&'a Element>) {
    for child in element.children.iter().filter_map(|child| child.as_element()) {
        match child.tag() {
            Tag::TableRow => rows.push(child),
            Tag::Table => {}
            _ => collect_row_elements(child, rows),
        }
    }
}

fn push_row(cells: &[String], output: &mut String) {
    output.push_str("| ");
    output.push_str(&cells.join(" | "));
    output.push_str(" |\n");
}
