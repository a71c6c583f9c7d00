//! Pass 5: Empty-Row Collapser

use crate::config::NormalizeOptions;
use crate::dom::ArenaDom;
use crate::table::{find_tables, is_text_empty, rows};

/// Drop the first of each pair of adjacent text-empty rows.
///
/// This is a single left-to-right scan, not a fixed point: after removing
/// row `i` the scan still moves on to `i + 1`, skipping the row that slid
/// into place. Three empty rows in a row therefore collapse to two, four to
/// two. Returns the number of rows removed.
pub fn collapse_empty_rows(dom: &mut ArenaDom, options: &NormalizeOptions) -> usize {
    let mut removed = 0;

    for table in find_tables(dom, dom.document(), options.max_depth) {
        let mut table_rows = rows(dom, table.id);
        let mut i = 0;
        while i + 1 < table_rows.len() {
            if is_text_empty(dom, table_rows[i]) && is_text_empty(dom, table_rows[i + 1]) {
                let row = table_rows.remove(i);
                dom.detach(row);
                removed += 1;
            }
            i += 1;
        }
    }

    removed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::find_top_level_tables;

    fn remaining(html: &str) -> (Vec<String>, usize) {
        let mut dom = crate::dom::parse_html(html);
        let n = collapse_empty_rows(&mut dom, &NormalizeOptions::default());
        let table = find_top_level_tables(&dom, 512)[0];
        let texts = rows(&dom, table).into_iter().map(|r| dom.text_of(r)).collect();
        (texts, n)
    }

    fn table_of(cells: &[&str]) -> String {
        let body: String = cells
            .iter()
            .map(|c| format!("<tr><td>{c}</td><td></td></tr>"))
            .collect();
        format!("<table>{body}</table>")
    }

    #[test]
    fn test_pair_of_empty_rows_collapses_to_one() {
        let (rows, n) = remaining(&table_of(&["a", "", " ", "b"]));
        assert_eq!(n, 1);
        assert_eq!(rows, vec!["a", " ", "b"]);
    }

    #[test]
    fn test_single_empty_row_kept() {
        let (rows, n) = remaining(&table_of(&["a", "", "b"]));
        assert_eq!(n, 0);
        assert_eq!(rows.len(), 3);
    }

    #[test]
    fn test_run_of_three_only_partially_collapsed() {
        let (rows, n) = remaining(&table_of(&["a", "", "", "", "b"]));
        assert_eq!(n, 1);
        assert_eq!(rows, vec!["a", "", "", "b"]);
    }

    #[test]
    fn test_run_of_four_loses_two() {
        let (rows, n) = remaining(&table_of(&["", "", "", ""]));
        assert_eq!(n, 2);
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn test_whitespace_and_markup_only_rows_are_empty() {
        let (rows, n) = remaining(
            "<table><tr><td> <b> </b></td></tr><tr><td>&nbsp;<img src=x></td></tr><tr><td>z</td></tr></table>",
        );
        assert_eq!(n, 1);
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn test_empty_table_is_noop() {
        let (rows, n) = remaining("<table></table>");
        assert_eq!((rows.len(), n), (0, 0));
    }
}
