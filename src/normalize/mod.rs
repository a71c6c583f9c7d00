//! Table normalization passes.
//!
//! Each pass rewrites the arena DOM in place and snapshots the nodes it will
//! visit before mutating anything.
//!
//! ## Pipeline Order
//!
//! 1. **Flatten** - Inline top-level single-column tables
//! 2. **Header** - Promote full-width title rows to headings
//! 3. **Unnest** - Hoist nested tables before their outer table
//! 4. **Span** - Expand rowspan/colspan into a rectangular grid
//! 5. **Empty rows** - Drop redundant blank rows
//! 6. **Caption** - Promote captions to bold paragraphs
//!
//! Passes 1 and 2 only see tables that were top-level in the input; tables
//! hoisted by pass 3 are not flattened or header-promoted afterwards.

mod caption;
mod empty_rows;
mod flatten;
mod header;
mod span;
mod unnest;

pub use caption::promote_captions;
pub use empty_rows::collapse_empty_rows;
pub use flatten::flatten_single_column_tables;
pub use header::promote_spanning_headers;
pub use span::expand_spans;
pub use unnest::hoist_nested_tables;

use tracing::debug;

use crate::config::NormalizeOptions;
use crate::dom::{ArenaDom, OutputScope, parse_html, serialize};
use crate::error::Result;

/// What each pass changed during one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizeReport {
    pub tables_flattened: usize,
    pub headers_promoted: usize,
    pub tables_hoisted: usize,
    pub cells_inserted: usize,
    pub rows_removed: usize,
    pub captions_promoted: usize,
}

/// Runs the six passes in fixed order.
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    options: NormalizeOptions,
}

impl Normalizer {
    pub fn new(options: NormalizeOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &NormalizeOptions {
        &self.options
    }

    /// Normalize a parsed tree in place.
    pub fn run(&self, dom: &mut ArenaDom) -> Result<NormalizeReport> {
        let options = &self.options;

        let tables_flattened = flatten_single_column_tables(dom, options)?;
        debug!(tables_flattened, "flatten pass done");

        let headers_promoted = promote_spanning_headers(dom, options);
        debug!(headers_promoted, "header pass done");

        let tables_hoisted = hoist_nested_tables(dom, options);
        debug!(tables_hoisted, "unnest pass done");

        let cells_inserted = expand_spans(dom, options)?;
        debug!(cells_inserted, "span pass done");

        let rows_removed = collapse_empty_rows(dom, options);
        debug!(rows_removed, "empty-row pass done");

        let captions_promoted = promote_captions(dom, options);
        debug!(captions_promoted, "caption pass done");

        Ok(NormalizeReport {
            tables_flattened,
            headers_promoted,
            tables_hoisted,
            cells_inserted,
            rows_removed,
            captions_promoted,
        })
    }

    /// Parse, normalize and serialize.
    pub fn normalize(&self, html: &str) -> Result<String> {
        self.normalize_with_report(html).map(|(out, _)| out)
    }

    /// Like [`Normalizer::normalize`], also returning the per-pass report.
    pub fn normalize_with_report(&self, html: &str) -> Result<(String, NormalizeReport)> {
        let mut dom = parse_html(html);
        let report = self.run(&mut dom)?;
        Ok((serialize(&dom, OutputScope::detect(html)), report))
    }
}
