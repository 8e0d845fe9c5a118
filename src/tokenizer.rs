//! Color literal scanning.
//!
//! A single compiled pattern matches the four supported notations and
//! yields a lazy, ordered sequence of non-overlapping matches. Text
//! outside those spans is never touched. The scan is a pure function
//! of the input: the `regex` crate keeps no match cursor, so repeated
//! and concurrent scans over the same text always produce the same
//! match list (the hover-preview collaborator relies on re-running
//! this scanner over both the input and the output text).

use regex::Regex;
use std::sync::LazyLock;

// Keyword matching is case-insensitive; the matched substring is
// returned verbatim. Hex accepts 3 to 8 digits so that 5- and 7-digit
// runs still scan as tokens and fail at the parser instead.
static COLOR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)#[0-9a-f]{3,8}|(?:rgba?|hsla?|oklch)\([^)]*\)").expect("valid regex")
});

/// A single color literal found in the input text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorToken<'a> {
    /// Byte offset of the match start in the original text.
    pub start: usize,
    /// Byte offset one past the match end.
    pub end: usize,
    /// The matched substring, original casing preserved.
    pub text: &'a str,
}

/// Scan `text` for color literals.
///
/// Matches are yielded lazily in document order and never overlap.
pub fn tokens(text: &str) -> impl Iterator<Item = ColorToken<'_>> {
    COLOR_PATTERN.find_iter(text).map(|m| ColorToken {
        start: m.start(),
        end: m.end(),
        text: m.as_str(),
    })
}
