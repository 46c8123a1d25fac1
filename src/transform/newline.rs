//! Newline escaping
//!
//! Converts between real line breaks and the two-character literal `\n`.
//! The pair is not a bijection: input that already contains a literal `\n`
//! comes back as a real newline, and a mixed run such as CRLF comes back as a
//! single LF.

use once_cell::sync::Lazy;
use regex::{NoExpand, Regex};

/// CR, LF, NEL, LINE SEPARATOR and PARAGRAPH SEPARATOR.
const LINE_BREAKS: [char; 5] = ['\r', '\n', '\u{85}', '\u{2028}', '\u{2029}'];

static LINE_BREAK_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\r\n\x{85}\x{2028}\x{2029}]+").unwrap());

/// Replace every run of line-break characters with the literal `\n`.
///
/// A run at the very end of the input is dropped rather than escaped, so
/// `"Hello\nWorld\n"` becomes `Hello\nWorld` with no trailing literal.
pub fn escape_newlines(input: &str) -> String {
    let body = input.trim_end_matches(LINE_BREAKS);
    LINE_BREAK_RUN.replace_all(body, NoExpand(r"\n")).into_owned()
}

/// Replace every literal `\n` with a line feed.
///
/// There is no escape for the escape: `\\n` also becomes a backslash
/// followed by a line feed.
pub fn unescape_newlines(input: &str) -> String {
    input.replace(r"\n", "\n")
}
