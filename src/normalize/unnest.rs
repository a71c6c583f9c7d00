//! Pass 3: Unnester

use tracing::trace;

use crate::config::NormalizeOptions;
use crate::dom::ArenaDom;
use crate::table::{find_nested_tables, find_top_level_tables};

/// Hoist every table nested inside another table to just before the
/// outermost table that contains it.
///
/// ```text
/// <table><tr><td>x <table id=B>..</table></td></tr></table>
/// ```
/// becomes
/// ```text
/// <table id=B>..</table><table><tr><td>x </td></tr></table>
/// ```
///
/// Nested tables keep their document order, so a chain A > B > C ends up as
/// B, C, A. The cell that held a nested table keeps its other content.
/// Returns the number of tables moved.
pub fn hoist_nested_tables(dom: &mut ArenaDom, options: &NormalizeOptions) -> usize {
    let mut hoisted = 0;

    for outer in find_top_level_tables(dom, options.max_depth) {
        let nested = find_nested_tables(dom, outer, options.max_depth);
        if nested.is_empty() {
            continue;
        }
        trace!(count = nested.len(), "hoisting nested tables");
        for table in nested {
            dom.insert_before(outer, table);
            hoisted += 1;
        }
    }

    hoisted
}
