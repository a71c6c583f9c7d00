//! Occupancy grid for rowspan/colspan layout.

use crate::config::NormalizeOptions;
use crate::dom::{ArenaDom, ArenaNodeId};

use super::{SpanAttr, cells, span};

/// One grid position and the cell occupying it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub cell: ArenaNodeId,
    /// True at the cell's top-left position, false where it is spanned into.
    pub origin: bool,
}

/// Table layout after resolving spans.
///
/// Rows are indexed like the table's semantic rows; a row's line may be
/// shorter than `width` when the markup row is short.
#[derive(Debug, Clone)]
pub struct SpanGrid {
    lines: Vec<Vec<Option<Slot>>>,
    width: usize,
}

impl SpanGrid {
    /// Lay out the given rows.
    ///
    /// Each cell takes the first column not already claimed by a rowspan from
    /// above. Rowspans are clipped to the last row; where spans overlap, the
    /// earlier claim wins. Returns `None` if the layout would need more than
    /// `options.max_grid_cells` slots.
    pub fn build(dom: &ArenaDom, rows: &[ArenaNodeId], options: &NormalizeOptions) -> Option<Self> {
        let mut lines: Vec<Vec<Option<Slot>>> = vec![Vec::new(); rows.len()];
        let mut claimed = 0usize;

        for (r, &row) in rows.iter().enumerate() {
            let mut col = 0usize;
            for cell in cells(dom, row) {
                while lines[r].get(col).is_some_and(Option::is_some) {
                    col += 1;
                }

                let colspan = span(dom, cell, SpanAttr::Col, options.max_colspan) as usize;
                let rowspan =
                    (span(dom, cell, SpanAttr::Row, options.max_rowspan) as usize).min(rows.len() - r);

                claimed = claimed.saturating_add(colspan.saturating_mul(rowspan));
                if claimed > options.max_grid_cells {
                    return None;
                }

                for (dr, line) in lines[r..r + rowspan].iter_mut().enumerate() {
                    if line.len() < col + colspan {
                        line.resize(col + colspan, None);
                    }
                    for (dc, slot) in line[col..col + colspan].iter_mut().enumerate() {
                        if slot.is_none() {
                            *slot = Some(Slot {
                                cell,
                                origin: dr == 0 && dc == 0,
                            });
                        }
                    }
                }

                col += colspan;
            }
        }

        let width = lines.iter().map(Vec::len).max().unwrap_or(0);
        if width.saturating_mul(lines.len()) > options.max_grid_cells {
            return None;
        }
        Some(Self { lines, width })
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.lines.len()
    }

    /// Slot at a position, `None` if nothing occupies it.
    pub fn slot(&self, row: usize, col: usize) -> Option<Slot> {
        self.lines.get(row).and_then(|l| l.get(col)).copied().flatten()
    }

    /// Check if a row has no occupied slot at all.
    pub fn row_is_vacant(&self, row: usize) -> bool {
        self.lines
            .get(row)
            .is_none_or(|l| l.iter().all(Option::is_none))
    }
}
