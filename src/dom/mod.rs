//! Tree model: html5ever parsing into an arena DOM, and serialization back.
//!
//! # Example
//!
//! ```
//! use hypertab::dom::{parse_html, serialize, OutputScope};
//!
//! let html = "<p>Hello, <b>World</b></p>";
//! let dom = parse_html(html);
//! assert_eq!(serialize(&dom, OutputScope::detect(html)), html);
//! ```

mod arena;
mod serialize;
mod tree_sink;

pub use arena::{ArenaDom, ArenaNode, ArenaNodeData, ArenaNodeId, Attribute, html_name};
pub use serialize::{OutputScope, escape_attr, escape_text, serialize};

use html5ever::driver::ParseOpts;
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;

use tree_sink::ArenaSink;

/// Parse HTML into an ArenaDom.
///
/// Parsing never fails: html5ever repairs malformed markup the way a browser
/// would (auto-closing tags, implied `tbody`, foster-parented table text).
pub fn parse_html(html: &str) -> ArenaDom {
    let sink = ArenaSink::new();
    let result = parse_document(sink, ParseOpts::default())
        .from_utf8()
        .one(html.as_bytes());
    result.into_dom()
}
