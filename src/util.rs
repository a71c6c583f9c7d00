//! Input decoding helpers.

use std::borrow::Cow;

/// Decode bytes to a string, handling various encodings.
///
/// This function:
/// 1. First tries UTF-8 (handles BOM automatically via encoding_rs)
/// 2. If malformed, tries the hint encoding (from `<meta charset>` or `<?xml encoding?>`)
/// 3. Falls back to Windows-1252 (common in legacy HTML exports)
///
/// Uses `Cow<str>` to avoid allocation when the input is valid UTF-8.
pub fn decode_text<'a>(bytes: &'a [u8], hint_encoding: Option<&str>) -> Cow<'a, str> {
    let (result, _encoding, malformed) = encoding_rs::UTF_8.decode(bytes);

    if !malformed {
        return result;
    }

    if let Some(name) = hint_encoding
        && let Some(encoding) = encoding_rs::Encoding::for_label(name.as_bytes())
    {
        let (result, _, _) = encoding.decode(bytes);
        return result;
    }

    let (result, _, _) = encoding_rs::WINDOWS_1252.decode(bytes);
    result
}

/// Find a declared encoding in the head of an HTML or XHTML document.
///
/// Checks `<meta charset="...">`, `<meta ... content="...; charset=...">`
/// and the XML declaration, within the first 1024 bytes.
pub fn sniff_declared_encoding(bytes: &[u8]) -> Option<&str> {
    let prefix = &bytes[..bytes.len().min(1024)];
    extract_meta_charset(prefix).or_else(|| extract_xml_encoding(prefix))
}

/// Extract `charset=` from the first `<meta` tag that carries one.
fn extract_meta_charset(bytes: &[u8]) -> Option<&str> {
    let mut rest = bytes;
    while let Some(meta) = find_ignore_case(rest, b"<meta") {
        let tag = &rest[meta..];
        let end = tag.iter().position(|&b| b == b'>').unwrap_or(tag.len());
        let tag = &tag[..end];

        if let Some(pos) = find_ignore_case(tag, b"charset=") {
            let value = &tag[pos + 8..];
            let value = match value.first() {
                Some(b'"' | b'\'') => &value[1..],
                _ => value,
            };
            let len = value
                .iter()
                .position(|&b| matches!(b, b'"' | b'\'' | b';' | b' ' | b'/' | b'>'))
                .unwrap_or(value.len());
            if len > 0 {
                return std::str::from_utf8(&value[..len]).ok();
            }
        }
        rest = &rest[meta + end..];
    }
    None
}

/// Extract encoding from XML declaration.
///
/// Parses `<?xml ... encoding="..." ?>` in the first 100 bytes.
pub fn extract_xml_encoding(bytes: &[u8]) -> Option<&str> {
    let check_len = bytes.len().min(100);
    let prefix = &bytes[..check_len];

    let xml_start = prefix.windows(5).position(|w| w == b"<?xml")?;
    let after_xml = &prefix[xml_start..];

    let enc_pos = find_ignore_case(after_xml, b"encoding=")?;
    let after_enc = &after_xml[enc_pos + 9..];

    let &quote = after_enc.first()?;
    if quote != b'"' && quote != b'\'' {
        return None;
    }

    let value_end = after_enc[1..].iter().position(|&b| b == quote)? + 1;
    std::str::from_utf8(&after_enc[1..value_end]).ok()
}

fn find_ignore_case(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|w| w.eq_ignore_ascii_case(needle))
}
