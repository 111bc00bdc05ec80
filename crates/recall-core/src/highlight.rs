//! Match highlighting for suggestion display.
//!
//! Splits a suggestion into alternating matched/unmatched segments by
//! explicit case-insensitive substring scanning. User input is never
//! fed to a pattern engine, so metacharacters cannot change the match
//! or raise errors.

use serde::Serialize;

/// A run of text within a suggestion, flagged when it matches the query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub text: String,
    pub matched: bool,
}

impl Segment {
    fn plain(text: &str) -> Self {
        Self {
            text: text.to_string(),
            matched: false,
        }
    }

    fn matched(text: &str) -> Self {
        Self {
            text: text.to_string(),
            matched: true,
        }
    }
}

/// Split `text` into segments, marking every case-insensitive
/// occurrence of the trimmed `query`.
///
/// Occurrences are found left to right and do not overlap. Spans are
/// computed on the lowercased text; when lowercasing would change the
/// byte layout of `text` (possible outside ASCII, e.g. `İ`), offsets
/// can no longer be mapped back, so the whole text is returned as a
/// single unmatched segment rather than mis-highlighted.
pub fn highlight(text: &str, query: &str) -> Vec<Segment> {
    if text.is_empty() {
        return Vec::new();
    }

    let needle = query.trim().to_lowercase();
    if needle.is_empty() || !lowercase_preserves_layout(text) {
        return vec![Segment::plain(text)];
    }

    let haystack = text.to_lowercase();
    let mut segments = Vec::new();
    let mut cursor = 0;

    while let Some(pos) = haystack[cursor..].find(&needle) {
        let start = cursor + pos;
        let end = start + needle.len();
        if start > cursor {
            segments.push(Segment::plain(&text[cursor..start]));
        }
        segments.push(Segment::matched(&text[start..end]));
        cursor = end;
    }

    if segments.is_empty() {
        return vec![Segment::plain(text)];
    }
    if cursor < text.len() {
        segments.push(Segment::plain(&text[cursor..]));
    }

    segments
}

/// True when every character of `text` lowercases to exactly one
/// character of the same UTF-8 length, i.e. byte offsets into the
/// lowercased text are valid offsets into the original.
fn lowercase_preserves_layout(text: &str) -> bool {
    text.chars().all(|c| {
        let mut lower = c.to_lowercase();
        match (lower.next(), lower.next()) {
            (Some(l), None) => l.len_utf8() == c.len_utf8(),
            _ => false,
        }
    })
}
