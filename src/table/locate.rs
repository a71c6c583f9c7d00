//! Table locator: enumerate tables with an explicit, depth-guarded stack.

use tracing::warn;

use crate::dom::{ArenaDom, ArenaNodeId};

use super::is_table;

/// A table found during traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocatedTable {
    pub id: ArenaNodeId,
    /// Element depth below the traversal root.
    pub depth: usize,
    /// True if another table encloses this one (within the traversal root).
    pub nested: bool,
}

/// All tables strictly below `root`, in document order.
///
/// Subtrees deeper than `max_depth` are not searched.
pub fn find_tables(dom: &ArenaDom, root: ArenaNodeId, max_depth: usize) -> Vec<LocatedTable> {
    let mut found = Vec::new();
    let mut truncated = 0usize;

    // (node, depth, inside a table)
    let mut stack: Vec<(ArenaNodeId, usize, bool)> = children_rev(dom, root)
        .into_iter()
        .map(|c| (c, 1, false))
        .collect();

    while let Some((id, depth, inside)) = stack.pop() {
        let here_is_table = is_table(dom, id);
        if here_is_table {
            found.push(LocatedTable {
                id,
                depth,
                nested: inside,
            });
        }

        if depth >= max_depth {
            if dom.children(id).next().is_some() {
                truncated += 1;
            }
            continue;
        }

        let inside = inside || here_is_table;
        stack.extend(
            children_rev(dom, id)
                .into_iter()
                .map(|c| (c, depth + 1, inside)),
        );
    }

    if truncated > 0 {
        warn!(
            max_depth,
            subtrees = truncated,
            "table search stopped at depth limit"
        );
    }

    found
}

/// Tables with no table ancestor.
pub fn find_top_level_tables(dom: &ArenaDom, max_depth: usize) -> Vec<ArenaNodeId> {
    find_tables(dom, dom.document(), max_depth)
        .into_iter()
        .filter(|t| !t.nested)
        .map(|t| t.id)
        .collect()
}

/// Tables anywhere inside `table`, in document order.
pub fn find_nested_tables(dom: &ArenaDom, table: ArenaNodeId, max_depth: usize) -> Vec<ArenaNodeId> {
    find_tables(dom, table, max_depth)
        .into_iter()
        .map(|t| t.id)
        .collect()
}

fn children_rev(dom: &ArenaDom, id: ArenaNodeId) -> Vec<ArenaNodeId> {
    let mut children: Vec<_> = dom.children(id).collect();
    children.reverse();
    children
}
