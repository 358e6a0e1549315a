//! DOM walking for table structure
//!
//! Works on the scraper/ego-tree node tree directly so that rows and cells of
//! nested tables are never mistaken for rows and cells of the outer table.

use ego_tree::NodeRef;
use regex::Regex;
use scraper::{ElementRef, Node};
use std::sync::LazyLock;

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s+").expect("BUG: hardcoded whitespace regex is statically valid")
});

/// HTML caps colspan at 1000 and rowspan at 65534
const MAX_COLSPAN: usize = 1000;
const MAX_ROWSPAN: usize = 65_534;

/// One `<td>`/`<th>` before span expansion
#[derive(Debug, Clone)]
pub(super) struct RawCell {
    pub text: String,
    pub is_header: bool,
    pub colspan: usize,
    pub rowspan: usize,
}

/// Rows of a table split into its row groups
#[derive(Debug, Default)]
pub(super) struct RawSections {
    pub head: Vec<Vec<RawCell>>,
    pub body: Vec<Vec<RawCell>>,
    pub foot: Vec<Vec<RawCell>>,
}

/// Collect the rows that belong to `table` itself
///
/// Direct `<tr>` children and `<tbody>` rows go to the body in document order.
/// Without a `<thead>`, leading body rows made only of `<th>` cells are moved
/// into the head.
pub(super) fn collect_sections(table: ElementRef<'_>) -> RawSections {
    let mut sections = RawSections::default();

    for child in child_elements(table) {
        match child.value().name() {
            "thead" => sections.head.extend(collect_rows(child)),
            "tbody" => sections.body.extend(collect_rows(child)),
            "tfoot" => sections.foot.extend(collect_rows(child)),
            "tr" => {
                if let Some(row) = collect_cells(child) {
                    sections.body.push(row);
                }
            }
            _ => {}
        }
    }

    if sections.head.is_empty() {
        let leading = sections
            .body
            .iter()
            .take_while(|row| !row.is_empty() && row.iter().all(|cell| cell.is_header))
            .count();
        sections.head = sections.body.drain(..leading).collect();
    }

    sections
}

fn collect_rows(group: ElementRef<'_>) -> Vec<Vec<RawCell>> {
    child_elements(group)
        .filter(|row| row.value().name() == "tr")
        .filter_map(collect_cells)
        .collect()
}

/// Cells of one `<tr>`; `None` for a hidden row
fn collect_cells(row: ElementRef<'_>) -> Option<Vec<RawCell>> {
    if is_hidden(row) {
        return None;
    }

    let cells = child_elements(row)
        .filter(|cell| matches!(cell.value().name(), "td" | "th"))
        .map(|cell| RawCell {
            text: cell_text(cell),
            is_header: cell.value().name() == "th",
            colspan: span_attr(cell, "colspan", MAX_COLSPAN),
            rowspan: span_attr(cell, "rowspan", MAX_ROWSPAN),
        })
        .collect();

    Some(cells)
}

/// Visible child elements
fn child_elements(element: ElementRef<'_>) -> impl Iterator<Item = ElementRef<'_>> {
    element
        .children()
        .filter_map(ElementRef::wrap)
        .filter(|child| !is_hidden(*child))
}

fn span_attr(cell: ElementRef<'_>, name: &str, max: usize) -> usize {
    cell.value()
        .attr(name)
        .and_then(|value| value.trim().parse::<usize>().ok())
        .unwrap_or(1)
        .clamp(1, max)
}

/// Elements the browser would not display
fn is_hidden(element: ElementRef<'_>) -> bool {
    let value = element.value();
    if value.attr("hidden").is_some() {
        return true;
    }
    value.attr("style").is_some_and(|style| {
        let compact: String = style
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_ascii_lowercase();
        compact.contains("display:none")
    })
}

/// Visible text of a cell with whitespace runs collapsed
pub(super) fn cell_text(cell: ElementRef<'_>) -> String {
    let mut raw = String::new();
    push_text(*cell, &mut raw);
    WHITESPACE.replace_all(&raw, " ").trim().to_string()
}

fn push_text(node: NodeRef<'_, Node>, out: &mut String) {
    for child in node.children() {
        match child.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(element) => {
                if matches!(element.name(), "script" | "style" | "template") {
                    continue;
                }
                if ElementRef::wrap(child).is_some_and(is_hidden) {
                    continue;
                }
                if element.name() == "br" {
                    out.push(' ');
                }
                push_text(child, out);
            }
            _ => {}
        }
    }
}
