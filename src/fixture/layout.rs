//! Declarative document layouts.

#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

/// One top-level block of a synthetic document, or one item of cell content.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "cli", serde(tag = "type", rename_all = "lowercase"))]
pub enum Block {
    /// `<hN>` with fixed text.
    Heading {
        #[cfg_attr(feature = "cli", serde(default = "default_heading_text"))]
        text: String,
        #[cfg_attr(feature = "cli", serde(default = "default_heading_level"))]
        level: u8,
    },
    /// `<p>` with generated text of roughly `length` characters.
    Paragraph {
        #[cfg_attr(feature = "cli", serde(default = "default_paragraph_length"))]
        length: usize,
    },
    /// A table, possibly with nested tables in its cells.
    Table(TableSpec),
}

/// Table shape and content.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(Serialize, Deserialize))]
pub struct TableSpec {
    pub rows: usize,
    pub cols: usize,
    /// Content of every cell without an override.
    pub cell_fill: Vec<Block>,
    #[cfg_attr(feature = "cli", serde(default))]
    pub overrides: Vec<CellOverride>,
}

/// Replacement content for the cell at a zero-based position.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(Serialize, Deserialize))]
pub struct CellOverride {
    pub row: usize,
    pub col: usize,
    pub content: Vec<Block>,
}

#[cfg(feature = "cli")]
fn default_heading_text() -> String {
    "Header".to_string()
}

#[cfg(feature = "cli")]
fn default_heading_level() -> u8 {
    1
}

#[cfg(feature = "cli")]
fn default_paragraph_length() -> usize {
    100
}

impl Block {
    pub fn heading(text: impl Into<String>, level: u8) -> Self {
        Block::Heading {
            text: text.into(),
            level,
        }
    }

    pub fn paragraph(length: usize) -> Self {
        Block::Paragraph { length }
    }

    /// Same kind of block and, for tables, the same dimensions.
    ///
    /// Generated text is random, so this is the strongest equality a
    /// generate/parse round trip can promise.
    pub fn same_shape(&self, other: &Block) -> bool {
        match (self, other) {
            (Block::Heading { .. }, Block::Heading { .. }) => true,
            (Block::Paragraph { .. }, Block::Paragraph { .. }) => true,
            (Block::Table(a), Block::Table(b)) => a.rows == b.rows && a.cols == b.cols,
            _ => false,
        }
    }
}

impl TableSpec {
    pub fn new(rows: usize, cols: usize, cell_fill: Vec<Block>) -> Self {
        Self {
            rows,
            cols,
            cell_fill,
            overrides: Vec::new(),
        }
    }

    pub fn with_override(mut self, row: usize, col: usize, content: Vec<Block>) -> Self {
        self.overrides.push(CellOverride { row, col, content });
        self
    }

    /// Content for a cell: its override if any, otherwise the fill.
    pub fn cell_content(&self, row: usize, col: usize) -> &[Block] {
        self.overrides
            .iter()
            .rev()
            .find(|o| o.row == row && o.col == col)
            .map_or(self.cell_fill.as_slice(), |o| o.content.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_content_prefers_latest_override() {
        let spec = TableSpec::new(2, 2, vec![Block::paragraph(10)])
            .with_override(0, 1, vec![Block::heading("a", 1)])
            .with_override(0, 1, vec![Block::heading("b", 2)]);

        assert_eq!(spec.cell_content(0, 1), &[Block::heading("b", 2)]);
        assert_eq!(spec.cell_content(1, 1), &[Block::paragraph(10)]);
    }

    #[test]
    fn test_same_shape() {
        let a = Block::Table(TableSpec::new(2, 3, vec![]));
        let b = Block::Table(TableSpec::new(2, 3, vec![Block::paragraph(1)]));
        let c = Block::Table(TableSpec::new(3, 2, vec![]));
        assert!(a.same_shape(&b));
        assert!(!a.same_shape(&c));
        assert!(Block::paragraph(1).same_shape(&Block::paragraph(50)));
        assert!(!Block::paragraph(1).same_shape(&Block::heading("x", 1)));
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_json_layout() {
        let json = r#"[
            {"type": "paragraph"},
            {"type": "heading", "text": "Table 1", "level": 2},
            {"type": "table", "rows": 2, "cols": 2,
             "cell_fill": [{"type": "paragraph", "length": 20}],
             "overrides": [{"row": 0, "col": 1, "content": [{"type": "heading"}]}]}
        ]"#;
        let layout: Vec<Block> = serde_json::from_str(json).unwrap();
        assert_eq!(layout[0], Block::paragraph(100));
        assert_eq!(layout[1], Block::heading("Table 1", 2));
        let Block::Table(table) = &layout[2] else {
            panic!("expected table");
        };
        assert_eq!(table.cell_content(0, 1), &[Block::heading("Header", 1)]);
    }
}
