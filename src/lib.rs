//! # hypertab
//!
//! Normalizes HTML tables into a simple, flat, rectangular form that
//! downstream Markdown converters and text extractors handle well.
//!
//! ## Features
//!
//! - Inline single-column tables as `<br/>`-separated lines
//! - Promote full-width title rows to Markdown-style headings
//! - Hoist nested tables out of their parent table
//! - Expand `rowspan`/`colspan` into a rectangular cell grid
//! - Collapse runs of blank rows
//! - Turn captions into bold paragraphs
//!
//! Malformed markup is never an error; it is repaired by the parser the way a
//! browser would before any pass runs.
//!
//! ## Quick Start
//!
//! ```
//! let out = hypertab::normalize("<table><tr><td>A</td></tr><tr><td>B</td></tr></table>").unwrap();
//! assert_eq!(out, "A<br/>B<br/>");
//! ```
//!
//! ## Options
//!
//! ```
//! use hypertab::{NormalizeOptions, normalize_with};
//!
//! let options = NormalizeOptions::default().with_heading_level(3);
//! let html = r#"<table><tr><td colspan="2">Totals</td></tr><tr><td>1</td><td>2</td></tr></table>"#;
//! let out = normalize_with(html, &options).unwrap();
//! assert!(out.starts_with("### Totals\n"));
//! ```

pub mod config;
pub mod dom;
pub mod error;
pub mod fixture;
pub mod normalize;
pub mod table;
pub(crate) mod util;

use std::borrow::Cow;

pub use config::NormalizeOptions;
pub use error::{Error, Result};
pub use normalize::{NormalizeReport, Normalizer};

/// Normalize an HTML string with default options.
pub fn normalize(html: &str) -> Result<String> {
    Normalizer::default().normalize(html)
}

/// Normalize an HTML string with explicit options.
pub fn normalize_with(html: &str, options: &NormalizeOptions) -> Result<String> {
    Normalizer::new(options.clone()).normalize(html)
}

/// Decode raw document bytes.
///
/// UTF-8 is tried first, then any encoding declared in the document head,
/// then Windows-1252.
pub fn decode_html(bytes: &[u8]) -> Cow<'_, str> {
    util::decode_text(bytes, util::sniff_declared_encoding(bytes))
}

/// Normalize raw bytes, decoding them with [`decode_html`] first.
pub fn normalize_bytes(bytes: &[u8], options: &NormalizeOptions) -> Result<String> {
    normalize_with(&decode_html(bytes), options)
}
