//! Table model over the arena DOM.
//!
//! A table's semantic rows are its direct `tr` children plus the `tr`
//! children of its direct `thead`/`tbody`/`tfoot` sections, in document
//! order. html5ever always inserts an implied `tbody`, so section rows are
//! the common case. Cells are `td` and `th` alike.

mod grid;
mod locate;

pub use grid::{Slot, SpanGrid};
pub use locate::{LocatedTable, find_nested_tables, find_tables, find_top_level_tables};

use crate::dom::{ArenaDom, ArenaNodeId};

/// Tags counted as table cells.
pub const CELL_TAGS: &[&str] = &["td", "th"];

/// Row group wrappers searched for rows.
pub const SECTION_TAGS: &[&str] = &["thead", "tbody", "tfoot"];

/// Span attribute on a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanAttr {
    Row,
    Col,
}

impl SpanAttr {
    /// Attribute name in markup.
    pub fn name(self) -> &'static str {
        match self {
            SpanAttr::Row => "rowspan",
            SpanAttr::Col => "colspan",
        }
    }
}

/// Check if a node is a `table` element.
pub fn is_table(dom: &ArenaDom, id: ArenaNodeId) -> bool {
    dom.is_tag(id, "table")
}

/// Semantic rows of a table, in document order.
pub fn rows(dom: &ArenaDom, table: ArenaNodeId) -> Vec<ArenaNodeId> {
    let mut rows = Vec::new();
    for child in dom.children(table) {
        match dom.element_name(child).map(|n| n.as_ref()) {
            Some("tr") => rows.push(child),
            Some(tag) if SECTION_TAGS.contains(&tag) => {
                rows.extend(dom.child_elements(child, &["tr"]));
            }
            _ => {}
        }
    }
    rows
}

/// Direct `td`/`th` children of a row.
pub fn cells(dom: &ArenaDom, row: ArenaNodeId) -> Vec<ArenaNodeId> {
    dom.child_elements(row, CELL_TAGS)
}

/// Direct `caption` children of a table.
pub fn captions(dom: &ArenaDom, table: ArenaNodeId) -> Vec<ArenaNodeId> {
    dom.child_elements(table, &["caption"])
}

/// Parse a span attribute value.
///
/// Anything that is not a positive integer counts as 1; larger values are
/// clamped to `max`.
pub fn parse_span(value: Option<&str>, max: u32) -> u32 {
    value
        .and_then(|v| v.trim().parse::<u32>().ok())
        .filter(|&n| n >= 1)
        .map_or(1, |n| n.min(max.max(1)))
}

/// Effective span of a cell.
pub fn span(dom: &ArenaDom, cell: ArenaNodeId, attr: SpanAttr, max: u32) -> u32 {
    parse_span(dom.get_attr(cell, attr.name()), max)
}

/// Remove both span attributes from a cell. Returns true if any was present.
pub fn strip_spans(dom: &mut ArenaDom, cell: ArenaNodeId) -> bool {
    let row = dom.remove_attr(cell, SpanAttr::Row.name());
    let col = dom.remove_attr(cell, SpanAttr::Col.name());
    row || col
}

/// Check if a node's text content is blank.
pub fn is_text_empty(dom: &ArenaDom, id: ArenaNodeId) -> bool {
    dom.text_of(id).trim().is_empty()
}

/// Trimmed text with internal whitespace runs collapsed to single spaces.
pub fn collapsed_text(dom: &ArenaDom, id: ArenaNodeId) -> String {
    dom.text_of(id).split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::parse_html;

    #[test]
    fn test_parse_span_recovers() {
        assert_eq!(parse_span(None, 1000), 1);
        assert_eq!(parse_span(Some("3"), 1000), 3);
        assert_eq!(parse_span(Some(" 2 "), 1000), 2);
        assert_eq!(parse_span(Some("0"), 1000), 1);
        assert_eq!(parse_span(Some("-4"), 1000), 1);
        assert_eq!(parse_span(Some("two"), 1000), 1);
        assert_eq!(parse_span(Some("2.5"), 1000), 1);
        assert_eq!(parse_span(Some("5000"), 1000), 1000);
    }

    #[test]
    fn test_rows_span_sections_in_order() {
        let dom = parse_html(
            "<table><thead><tr><th>h</th></tr></thead>\
             <tbody><tr><td>a</td></tr><tr><td>b</td></tr></tbody>\
             <tfoot><tr><td>f</td></tr></tfoot></table>",
        );
        let table = dom.find_by_tag("table").unwrap();
        let texts: Vec<_> = rows(&dom, table).iter().map(|&r| dom.text_of(r)).collect();
        assert_eq!(texts, vec!["h", "a", "b", "f"]);
    }

    #[test]
    fn test_rows_skip_nested_table_rows() {
        let dom = parse_html(
            "<table><tr><td><table><tr><td>x</td></tr><tr><td>y</td></tr></table></td></tr></table>",
        );
        let outer = dom.find_by_tag("table").unwrap();
        assert_eq!(rows(&dom, outer).len(), 1);
    }

    #[test]
    fn test_cells_include_headers() {
        let dom = parse_html("<table><tr><th>a</th><td>b</td></tr></table>");
        let table = dom.find_by_tag("table").unwrap();
        let row = rows(&dom, table)[0];
        assert_eq!(cells(&dom, row).len(), 2);
    }

    #[test]
    fn test_collapsed_text() {
        let dom = parse_html("<p>  Quarterly\n   results <b>2024</b> </p>");
        let p = dom.find_by_tag("p").unwrap();
        assert_eq!(collapsed_text(&dom, p), "Quarterly results 2024");
    }

    #[test]
    fn test_strip_spans() {
        let mut dom = parse_html(r#"<table><tr><td rowspan="2" colspan="3">a</td></tr></table>"#);
        let td = dom.find_by_tag("td").unwrap();
        assert!(strip_spans(&mut dom, td));
        assert!(!strip_spans(&mut dom, td));
        assert_eq!(dom.get_attr(td, "rowspan"), None);
    }
}
