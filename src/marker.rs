//! Open/close marker matching and removal.
//!
//! Styled spans are delimited by an opening `<span style="...">` tag and
//! the literal `</span>`. The matcher here is deliberately narrow: it only
//! recognizes a span tag whose sole attribute is `style`, so other inline
//! HTML in the document is left alone. It operates on plain strings and
//! knows nothing about buffers or selections.

use std::ops::Range;

/// The literal closing marker.
pub const CLOSE_MARKER: &str = "</span>";

const OPEN_PREFIX: &str = "<span style=\"";
const OPEN_SUFFIX: &str = "\">";

/// Find the first open marker in `text`.
///
/// An open marker is `<span style="` followed by any run of non-quote
/// bytes and then `">`. A span tag with extra attributes after the style
/// string does not match.
pub fn find_open_marker(text: &str) -> Option<Range<usize>> {
    let mut search_from = 0;
    while let Some(rel) = text[search_from..].find(OPEN_PREFIX) {
        let start = search_from + rel;
        let attr_start = start + OPEN_PREFIX.len();
        // The style string runs to the next quote, and the tag must end
        // right there with `">`.
        match text[attr_start..].find('"') {
            Some(quote) if text[attr_start + quote..].starts_with(OPEN_SUFFIX) => {
                return Some(start..attr_start + quote + OPEN_SUFFIX.len());
            }
            Some(_) => search_from = attr_start,
            None => return None,
        }
    }
    None
}

/// Remove all open markers and all literal close markers from `text`.
///
/// Returns the stripped text and whether at least one open marker was
/// found. When none is found the text comes back unchanged and stripping
/// is a no-op for the caller, even if stray close markers are present.
/// Unbalanced markers are removed best-effort; unrelated text is never
/// touched.
pub fn strip_markers(text: &str) -> (String, bool) {
    if find_open_marker(text).is_none() {
        return (text.to_string(), false);
    }

    let mut stripped = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(range) = find_open_marker(rest) {
        stripped.push_str(&rest[..range.start]);
        rest = &rest[range.end..];
    }
    stripped.push_str(rest);

    (stripped.replace(CLOSE_MARKER, ""), true)
}
