use std::ops::{Bound, RangeBounds};

pub fn from<R: RangeBounds<usize>>(range: &R) -> usize {
    match range.start_bound() {
        Bound::Unbounded => 0,
        Bound::Included(x) => *x,
        Bound::Excluded(x) => x + 1,
    }
}

pub fn to<R: RangeBounds<usize>>(range: &R, max: usize) -> usize {
    match range.end_bound() {
        Bound::Unbounded => max,
        Bound::Included(x) => x + 1,
        Bound::Excluded(x) => *x,
    }
}

/// Find the byte offset of the utf-16 offset `index` in `text`.
///
/// Returns `None` if the offset falls in the middle of a surrogate pair.
/// Offsets past the end are clamped to the length of the string.
pub fn utf16_to_byte(text: &str, mut index: usize) -> Option<usize> {
    let mut iter = text.char_indices();
    while index > 0 {
        match iter.next() {
            Some((_, c)) => {
                let l = c.len_utf16();
                if l > index {
                    return None;
                }
                index -= l;
            }
            None => return Some(text.len()),
        }
    }
    Some(iter.next().map_or(text.len(), |(b, _)| b))
}

/// Split `text` at the given utf-16 offset. An offset inside of a surrogate pair splits
/// before that character; positions are checked for this when they are resolved.
pub fn split_at_utf16(text: &str, index: usize) -> (&str, &str) {
    let mid = utf16_to_byte(text, index).unwrap_or_else(|| {
        let mut mid = 0;
        let mut units = 0;
        for c in text.chars() {
            if units + c.len_utf16() > index {
                break;
            }
            units += c.len_utf16();
            mid += c.len_utf8();
        }
        mid
    });
    text.split_at(mid)
}
