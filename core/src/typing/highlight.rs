//! Accent styling for partially typed text
//!
//! Indices here are character indices, not byte offsets, so a multi-byte
//! character is revealed as a whole.

use std::ops::Range;

/// A run of revealed text that is either accented or plain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub highlighted: bool,
}

/// Character range of the first occurrence of `needle` in `full`.
pub fn highlight_range(full: &str, needle: &str) -> Option<Range<usize>> {
    if needle.is_empty() {
        return None;
    }
    let byte_start = full.find(needle)?;
    let start = full[..byte_start].chars().count();
    Some(start..start + needle.chars().count())
}

/// The first `count` characters of `text`.
pub fn char_prefix(text: &str, count: usize) -> &str {
    &text[..byte_offset(text, count)]
}

fn byte_offset(text: &str, char_index: usize) -> usize {
    text.char_indices()
        .nth(char_index)
        .map(|(offset, _)| offset)
        .unwrap_or(text.len())
}

/// Split revealed text into plain and accented runs. Empty runs are dropped.
pub fn highlight_segments(revealed: &str, range: Option<Range<usize>>) -> Vec<Segment<'_>> {
    let Some(range) = range else {
        if revealed.is_empty() {
            return Vec::new();
        }
        return vec![Segment { text: revealed, highlighted: false }];
    };

    let start = byte_offset(revealed, range.start);
    let end = byte_offset(revealed, range.end.max(range.start));

    [
        (&revealed[..start], false),
        (&revealed[start..end], true),
        (&revealed[end..], false),
    ]
    .into_iter()
    .filter(|(text, _)| !text.is_empty())
    .map(|(text, highlighted)| Segment { text, highlighted })
    .collect()
}
