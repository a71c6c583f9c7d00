//! HTML serializer - converts an ArenaDom back to markup.
//!
//! Output is XHTML-flavoured (`<br/>`) so that downstream Markdown converters
//! see explicit line breaks.

use std::fmt::Write;

use super::arena::{ArenaDom, ArenaNodeData, ArenaNodeId};

/// How much of the parsed document to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputScope {
    /// The whole document, including doctype and the `html` element.
    Document,
    /// Only the contents of `head` and `body`.
    ///
    /// html5ever always synthesizes `html`/`head`/`body`; for fragment input
    /// those wrappers are dropped again.
    Fragment,
}

impl OutputScope {
    /// Pick the scope matching the input: full document only if the first
    /// tag, after any doctype and comments, is `html`, `head` or `body`.
    pub fn detect(html: &str) -> Self {
        let is_document_tag =
            |name: &str| ["html", "head", "body"].iter().any(|t| name.eq_ignore_ascii_case(t));
        match first_tag_name(html) {
            Some(name) if is_document_tag(name) => OutputScope::Document,
            _ => OutputScope::Fragment,
        }
    }
}

/// Name of the first start tag, skipping whitespace, comments, doctype and
/// processing instructions. `None` if text comes first.
fn first_tag_name(html: &str) -> Option<&str> {
    let mut rest = html.trim_start_matches('\u{feff}');
    loop {
        rest = rest.trim_start();
        if let Some(after) = rest.strip_prefix("<!--") {
            rest = after.find("-->").map_or("", |end| &after[end + 3..]);
        } else if rest.starts_with("<!") || rest.starts_with("<?") {
            rest = rest.find('>').map_or("", |end| &rest[end + 1..]);
        } else {
            let after = rest.strip_prefix('<')?;
            let len = after
                .find(|c: char| !c.is_ascii_alphanumeric())
                .unwrap_or(after.len());
            return (len > 0).then(|| &after[..len]);
        }
    }
}

/// Serialize the reachable tree.
pub fn serialize(dom: &ArenaDom, scope: OutputScope) -> String {
    let mut out = String::new();
    match scope {
        OutputScope::Document => {
            for child in dom.children(dom.document()) {
                walk_node(dom, child, &mut out);
            }
        }
        OutputScope::Fragment => {
            for section in ["head", "body"] {
                if let Some(id) = dom.find_by_tag(section) {
                    for child in dom.children(id) {
                        walk_node(dom, child, &mut out);
                    }
                }
            }
        }
    }
    out
}

enum Frame<'a> {
    Open(ArenaNodeId),
    Close(&'a str),
}

/// Serialize a subtree with an explicit stack, so depth is bounded only by memory.
fn walk_node(dom: &ArenaDom, root: ArenaNodeId, out: &mut String) {
    let mut stack = vec![Frame::Open(root)];

    while let Some(frame) = stack.pop() {
        let id = match frame {
            Frame::Open(id) => id,
            Frame::Close(tag) => {
                let _ = write!(out, "</{}>", tag);
                continue;
            }
        };
        let Some(node) = dom.get(id) else {
            continue;
        };

        match &node.data {
            ArenaNodeData::Document => push_children(dom, id, &mut stack),
            ArenaNodeData::Text(text) => {
                let raw = dom
                    .element_name(node.parent)
                    .is_some_and(|p| is_raw_text(p.as_ref()));
                if raw {
                    out.push_str(text);
                } else {
                    out.push_str(&escape_text(text));
                }
            }
            ArenaNodeData::Comment(text) => {
                let _ = write!(out, "<!--{}-->", text);
            }
            ArenaNodeData::Doctype { name, .. } => {
                let _ = write!(out, "<!DOCTYPE {}>", name);
            }
            ArenaNodeData::Element { name, attrs } => {
                let tag = name.local.as_ref();
                out.push('<');
                out.push_str(tag);
                for attr in attrs {
                    out.push(' ');
                    if let Some(prefix) = &attr.name.prefix {
                        out.push_str(prefix.as_ref());
                        out.push(':');
                    }
                    out.push_str(attr.name.local.as_ref());
                    let _ = write!(out, "=\"{}\"", escape_attr(&attr.value));
                }

                if is_void(tag) {
                    out.push_str("/>");
                    continue;
                }
                out.push('>');
                stack.push(Frame::Close(tag));
                push_children(dom, id, &mut stack);
            }
        }
    }
}

fn push_children<'a>(dom: &'a ArenaDom, id: ArenaNodeId, stack: &mut Vec<Frame<'a>>) {
    let children: Vec<ArenaNodeId> = dom.children(id).collect();
    stack.extend(children.into_iter().rev().map(Frame::Open));
}

/// Elements that never have content and serialize self-closing.
fn is_void(tag: &str) -> bool {
    matches!(
        tag,
        "area"
            | "base"
            | "br"
            | "col"
            | "embed"
            | "hr"
            | "img"
            | "input"
            | "link"
            | "meta"
            | "source"
            | "track"
            | "wbr"
    )
}

/// Elements whose text content is emitted verbatim.
fn is_raw_text(tag: &str) -> bool {
    matches!(
        tag,
        "script" | "style" | "xmp" | "iframe" | "noembed" | "noframes" | "plaintext"
    )
}

/// Escape character data.
pub fn escape_text(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '\u{a0}' => result.push_str("&nbsp;"),
            _ => result.push(c),
        }
    }
    result
}

/// Escape a double-quoted attribute value.
pub fn escape_attr(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '"' => result.push_str("&quot;"),
            '\u{a0}' => result.push_str("&nbsp;"),
            _ => result.push(c),
        }
    }
    result
}
