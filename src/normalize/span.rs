//! Pass 4: Span Expander

use tracing::{trace, warn};

use crate::config::NormalizeOptions;
use crate::dom::{ArenaDom, ArenaNodeId};
use crate::error::{Error, Result};
use crate::table::{SpanGrid, cells, find_tables, rows, strip_spans};

/// Expand `rowspan`/`colspan` cells into a rectangular grid of plain cells.
///
/// ```text
/// <tr><td rowspan="2">A</td><td>B</td></tr>     <tr><td>A</td><td>B</td></tr>
/// <tr><td>C</td></tr>                       =>  <tr><td>A</td><td>C</td></tr>
/// ```
///
/// Spanned-into positions get a copy of the spanning cell with the same tag
/// and only its text content; nested markup is not duplicated. Rows shorter
/// than the table are padded with empty `td` cells, except rows that neither
/// hold cells nor are spanned into. Afterwards no cell carries a span
/// attribute.
///
/// Returns the number of cells inserted.
pub fn expand_spans(dom: &mut ArenaDom, options: &NormalizeOptions) -> Result<usize> {
    let tables: Vec<ArenaNodeId> = find_tables(dom, dom.document(), options.max_depth)
        .into_iter()
        .map(|t| t.id)
        .collect();

    let mut inserted = 0;
    for table in tables {
        inserted += expand_table(dom, table, options)?;
    }
    Ok(inserted)
}

fn expand_table(dom: &mut ArenaDom, table: ArenaNodeId, options: &NormalizeOptions) -> Result<usize> {
    let table_rows = rows(dom, table);
    if table_rows.is_empty() {
        return Ok(0);
    }

    let Some(grid) = SpanGrid::build(dom, &table_rows, options) else {
        warn!(
            rows = table_rows.len(),
            limit = options.max_grid_cells,
            "table too large to expand spans; dropping span attributes"
        );
        strip_all_spans(dom, &table_rows);
        return Ok(0);
    };

    let mut inserted = 0;
    for (r, &row) in table_rows.iter().enumerate() {
        let own = cells(dom, row);
        if own.is_empty() && grid.row_is_vacant(r) {
            continue;
        }

        // Index of the next original cell; new cells go right before it.
        let mut next = 0usize;
        for c in 0..grid.width() {
            let new_cell = match grid.slot(r, c) {
                Some(slot) if slot.origin => {
                    if own.get(next) != Some(&slot.cell) {
                        return Err(Error::Internal {
                            pass: "span",
                            detail: format!("cell at row {r}, column {c} is out of order"),
                        });
                    }
                    next += 1;
                    continue;
                }
                Some(slot) => duplicate_cell(dom, slot.cell),
                None => dom.create_html_element("td"),
            };

            match own.get(next) {
                Some(&before) => dom.insert_before(before, new_cell),
                None => dom.append(row, new_cell),
            }
            inserted += 1;
        }
    }

    strip_all_spans(dom, &table_rows);
    trace!(inserted, width = grid.width(), "expanded table spans");
    Ok(inserted)
}

/// A plain cell with the same tag as `source` holding only its text.
fn duplicate_cell(dom: &mut ArenaDom, source: ArenaNodeId) -> ArenaNodeId {
    let tag = dom
        .element_name(source)
        .map(|n| n.to_string())
        .unwrap_or_else(|| "td".to_string());
    let text = dom.text_of(source);

    let cell = dom.create_html_element(&tag);
    if !text.is_empty() {
        let text_node = dom.create_text(text);
        dom.append(cell, text_node);
    }
    cell
}

fn strip_all_spans(dom: &mut ArenaDom, table_rows: &[ArenaNodeId]) {
    for &row in table_rows {
        for cell in cells(dom, row) {
            strip_spans(dom, cell);
        }
    }
}
