//! Pass 2: Header Promoter

use tracing::trace;

use crate::config::NormalizeOptions;
use crate::dom::{ArenaDom, ArenaNodeId};
use crate::table::{SpanAttr, SpanGrid, cells, collapsed_text, find_top_level_tables, rows, span};

/// Turn a full-width title row into a Markdown heading before its table.
///
/// ```text
/// <table><tr><td colspan="2">Title</td></tr><tr><td>a</td><td>b</td></tr></table>
/// ```
/// becomes
/// ```text
/// ## Title
/// <table><tr><td>a</td><td>b</td></tr></table>
/// ```
///
/// Only top-level tables are considered. The first row qualifies when it is
/// a single cell whose colspan equals the table width and the table is at
/// least two columns wide. Returns the number of headings inserted.
pub fn promote_spanning_headers(dom: &mut ArenaDom, options: &NormalizeOptions) -> usize {
    let marker = options.heading_marker();
    let mut promoted = 0;

    for table in find_top_level_tables(dom, options.max_depth) {
        let Some((row, text)) = spanning_title_row(dom, table, options) else {
            continue;
        };

        trace!(heading = %text, "promoting spanning header row");
        let heading = dom.create_text(format!("{marker} {text}\n"));
        dom.insert_before(table, heading);
        dom.detach(row);
        promoted += 1;
    }

    promoted
}

/// The first row and its heading text, if it spans the whole table.
fn spanning_title_row(
    dom: &ArenaDom,
    table: ArenaNodeId,
    options: &NormalizeOptions,
) -> Option<(ArenaNodeId, String)> {
    let table_rows = rows(dom, table);
    let &first = table_rows.first()?;

    let first_cells = cells(dom, first);
    let &[cell] = first_cells.as_slice() else {
        return None;
    };

    let width = SpanGrid::build(dom, &table_rows, options)?.width();
    let colspan = span(dom, cell, SpanAttr::Col, options.max_colspan) as usize;
    if width < 2 || colspan != width {
        return None;
    }

    let text = collapsed_text(dom, cell);
    (!text.is_empty()).then_some((first, text))
}
