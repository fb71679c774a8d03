use std::ops::Range;

use crate::grouping::{CLOSE, OPEN};

/// Byte ranges of `s` that lie outside every parenthesised group.
///
/// A run of characters at depth 0 is closed by the next `(` or by the end
/// of the string. Anything inside a group, including nested groups, is not
/// reported, so a string that is exactly one group yields no ranges.
///
/// Expects balanced input; a stray `)` is clamped at depth 0.
pub fn ungrouped_ranges(s: &str) -> Vec<Range<usize>> {
    let mut ranges = Vec::new();
    let mut depth = 0usize;
    let mut start: Option<usize> = None;

    for (index, ch) in s.char_indices() {
        match ch {
            OPEN => {
                if depth == 0 {
                    if let Some(start) = start.take() {
                        ranges.push(start..index);
                    }
                }
                depth += 1;
            }
            CLOSE => {
                depth = depth.saturating_sub(1);
            }
            _ => {
                if depth == 0 && start.is_none() {
                    start = Some(index);
                }
            }
        }
    }
    if let Some(start) = start {
        ranges.push(start..s.len());
    }

    ranges
}

/// Ungrouped characters of `s` with their byte offsets, left to right.
pub fn ungrouped_chars(s: &str) -> impl Iterator<Item = (usize, char)> + '_ {
    ungrouped_ranges(s)
        .into_iter()
        .flat_map(move |range| s[range.clone()].char_indices().map(move |(i, ch)| (range.start + i, ch)))
}
