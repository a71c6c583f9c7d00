//! Recover a layout from an HTML document.

use crate::dom::{ArenaDom, ArenaNodeId, parse_html};
use crate::table::{cells, collapsed_text, rows};

use super::layout::{Block, CellOverride, TableSpec};

const HEADINGS: [&str; 6] = ["h1", "h2", "h3", "h4", "h5", "h6"];

/// Reads the block structure of a document back into [`Block`]s.
///
/// Only the body's direct children become top-level blocks. Every table
/// cell with recognizable content is reported as an override, so parsed
/// tables carry `default_fill` only as a placeholder.
#[derive(Debug, Clone)]
pub struct LayoutParser {
    default_fill: Vec<Block>,
}

impl Default for LayoutParser {
    fn default() -> Self {
        Self::new(vec![Block::paragraph(100)])
    }
}

impl LayoutParser {
    pub fn new(default_fill: Vec<Block>) -> Self {
        Self { default_fill }
    }

    pub fn parse_document(&self, html: &str) -> Vec<Block> {
        let dom = parse_html(html);
        let Some(body) = dom.find_by_tag("body") else {
            return Vec::new();
        };
        dom.children(body)
            .filter_map(|child| self.parse_node(&dom, child))
            .collect()
    }

    fn parse_node(&self, dom: &ArenaDom, id: ArenaNodeId) -> Option<Block> {
        if let Some(text) = dom.text_content(id) {
            let length = text.trim().chars().count();
            return (length > 0).then_some(Block::Paragraph { length });
        }

        let tag = dom.element_name(id)?.as_ref();
        match tag {
            "p" => Some(Block::Paragraph {
                length: collapsed_text(dom, id).chars().count(),
            }),
            "table" => Some(Block::Table(self.parse_table(dom, id))),
            _ => {
                let level = HEADINGS.iter().position(|&h| h == tag)?;
                Some(Block::Heading {
                    text: collapsed_text(dom, id),
                    level: level as u8 + 1,
                })
            }
        }
    }

    fn parse_table(&self, dom: &ArenaDom, table: ArenaNodeId) -> TableSpec {
        let table_rows = rows(dom, table);
        let mut cols = 0;
        let mut overrides = Vec::new();

        for (r, &row) in table_rows.iter().enumerate() {
            let row_cells = cells(dom, row);
            cols = cols.max(row_cells.len());
            for (c, &cell) in row_cells.iter().enumerate() {
                let content: Vec<Block> = dom
                    .children(cell)
                    .filter_map(|child| self.parse_node(dom, child))
                    .collect();
                if !content.is_empty() {
                    overrides.push(CellOverride {
                        row: r,
                        col: c,
                        content,
                    });
                }
            }
        }

        TableSpec {
            rows: table_rows.len(),
            cols,
            cell_fill: self.default_fill.clone(),
            overrides,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_blocks() {
        let blocks = LayoutParser::default().parse_document(
            "<html><body><p>hello  world</p><h3>Title</h3>\
             <table><tr><td>a</td><td>b</td><td>c</td></tr><tr><td>d</td></tr></table>\
             </body></html>",
        );

        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[0], Block::paragraph(11));
        assert_eq!(blocks[1], Block::heading("Title", 3));
        let Block::Table(table) = &blocks[2] else {
            panic!("expected table");
        };
        assert_eq!((table.rows, table.cols), (2, 3));
        assert_eq!(table.overrides.len(), 4);
        assert_eq!(table.cell_content(1, 0), &[Block::paragraph(1)]);
    }

    #[test]
    fn test_nested_table_becomes_override() {
        let blocks = LayoutParser::default().parse_document(
            "<table><tr><td><h2>x</h2><table><tr><td>1</td><td>2</td></tr></table></td></tr></table>",
        );
        let Block::Table(outer) = &blocks[0] else {
            panic!("expected table");
        };
        let content = outer.cell_content(0, 0);
        assert_eq!(content[0], Block::heading("x", 2));
        assert!(content[1].same_shape(&Block::Table(TableSpec::new(1, 2, vec![]))));
    }

    #[test]
    fn test_empty_cells_use_fill() {
        let parser = LayoutParser::new(vec![Block::heading("fill", 1)]);
        let blocks = parser.parse_document("<table><tr><td></td><td> </td></tr></table>");
        let Block::Table(table) = &blocks[0] else {
            panic!("expected table");
        };
        assert!(table.overrides.is_empty());
        assert_eq!(table.cell_content(0, 1), &[Block::heading("fill", 1)]);
    }

    #[test]
    fn test_unknown_elements_skipped() {
        let blocks = LayoutParser::default().parse_document("<div>x</div><ul><li>y</li></ul>");
        assert!(blocks.is_empty());
    }
}
