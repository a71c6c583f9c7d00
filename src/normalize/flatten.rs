//! Pass 1: Single-Column Flattener

use tracing::trace;

use crate::config::NormalizeOptions;
use crate::dom::{ArenaDom, ArenaNodeId};
use crate::error::{Error, Result};
use crate::table::{captions, cells, find_top_level_tables, rows};

/// Replace top-level single-column tables with their cell contents.
///
/// ```text
/// <table><tr><td>A</td></tr><tr><td>B</td></tr></table>
/// ```
/// becomes
/// ```text
/// A<br/>B<br/>
/// ```
///
/// Cell children are moved verbatim, so a table nested in a flattened cell
/// survives as inline content. Rows without cells are ignored; a table with
/// no cells at all is left alone. Returns the number of tables flattened.
pub fn flatten_single_column_tables(dom: &mut ArenaDom, options: &NormalizeOptions) -> Result<usize> {
    let candidates: Vec<ArenaNodeId> = find_top_level_tables(dom, options.max_depth)
        .into_iter()
        .filter(|&t| is_single_column(dom, t))
        .collect();

    for &table in &candidates {
        let replacement = flatten_table(dom, table)?;
        trace!(nodes = replacement.len(), "flattening single-column table");
        for node in replacement {
            dom.insert_before(table, node);
        }
        dom.detach(table);
    }

    Ok(candidates.len())
}

/// Every cell-bearing row holds exactly one cell, and at least one row does.
fn is_single_column(dom: &ArenaDom, table: ArenaNodeId) -> bool {
    let counts: Vec<usize> = rows(dom, table)
        .into_iter()
        .map(|r| cells(dom, r).len())
        .collect();
    counts.iter().any(|&n| n == 1) && counts.iter().all(|&n| n <= 1)
}

/// Collect the nodes that replace a table: one line per row.
fn flatten_table(dom: &mut ArenaDom, table: ArenaNodeId) -> Result<Vec<ArenaNodeId>> {
    let mut out = Vec::new();

    // A caption would otherwise vanish with the table; keep it as the first line.
    for caption in captions(dom, table) {
        out.extend(dom.children(caption).collect::<Vec<_>>());
        out.push(dom.create_html_element("br"));
    }

    for row in rows(dom, table) {
        let row_cells = cells(dom, row);
        match row_cells.len() {
            0 => continue,
            1 => {
                out.extend(dom.children(row_cells[0]).collect::<Vec<_>>());
                out.push(dom.create_html_element("br"));
            }
            n => {
                return Err(Error::Internal {
                    pass: "flatten",
                    detail: format!("row classified as single-column has {n} cells"),
                });
            }
        }
    }

    Ok(out)
}
