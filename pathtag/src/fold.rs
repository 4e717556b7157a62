//! Ordinal case-insensitive string search.
//!
//! Comparison folds one code point at a time to its simple uppercase form
//! and never consults a locale, so results are identical on every platform.
//! Code points whose uppercase form expands to several characters (`ß`)
//! only match themselves. Uppercase folding makes `ſ` match `s`, while the
//! KELVIN SIGN stays distinct from `k`.
//!
//! Matches are reported as byte ranges into the haystack. Folding can change
//! the UTF-8 width of a character (`ſ` is two bytes, `s` one), so the matched
//! span is not assumed to be as long as the needle.

use std::ops::Range;

fn fold(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

fn chars_eq(a: char, b: char) -> bool {
    a == b || fold(a) == fold(b)
}

/// Returns true if both strings are equal ignoring case.
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars().count() == b.chars().count() && a.chars().zip(b.chars()).all(|(x, y)| chars_eq(x, y))
}

/// Finds the first case-insensitive occurrence of `needle` in `haystack`.
///
/// An empty needle matches at the start.
pub fn find_ignore_case(haystack: &str, needle: &str) -> Option<Range<usize>> {
    if needle.is_empty() {
        return Some(0..0);
    }

    for (start, _) in haystack.char_indices() {
        if let Some(end) = match_at(haystack, start, needle) {
            return Some(start..end);
        }
    }
    None
}

/// Returns true if `needle` occurs anywhere in `haystack`, ignoring case.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    find_ignore_case(haystack, needle).is_some()
}

/// Replaces every non-overlapping case-insensitive occurrence of `needle`,
/// scanning left to right.
pub fn replace_ignore_case(haystack: &str, needle: &str, replacement: &str) -> String {
    if needle.is_empty() {
        return haystack.to_string();
    }

    let mut out = String::with_capacity(haystack.len());
    let mut rest = haystack;
    while let Some(range) = find_ignore_case(rest, needle) {
        out.push_str(&rest[..range.start]);
        out.push_str(replacement);
        rest = &rest[range.end..];
    }
    out.push_str(rest);
    out
}

fn match_at(haystack: &str, start: usize, needle: &str) -> Option<usize> {
    let mut hay = haystack[start..].char_indices();
    for n in needle.chars() {
        let (_, h) = hay.next()?;
        if !chars_eq(h, n) {
            return None;
        }
    }
    Some(hay.next().map_or(haystack.len(), |(offset, _)| start + offset))
}
