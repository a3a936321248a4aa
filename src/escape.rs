//! CSS class-name escaping.
//!
//! Generated selectors embed raw theme keys, which may contain characters
//! that are not valid in a CSS identifier (`%`, `/`, `.`, ...). This module
//! implements the CSSOM "serialize an identifier" algorithm so any key the
//! theme can express yields a selector browsers will parse.

use std::fmt::Write;

/// Escape a raw utility name for use as a CSS class selector.
///
/// Follows the same rules as `CSS.escape()`:
/// - ASCII alphanumerics, `-`, `_`, and non-ASCII pass through unchanged
/// - a leading digit (or digit after a leading `-`) becomes a code-point escape
/// - a lone `-` becomes `\-`
/// - control characters become code-point escapes
/// - everything else is backslash-escaped
pub fn escape_class(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let chars: Vec<char> = raw.chars().collect();

    if chars.len() == 1 && chars[0] == '-' {
        return "\\-".to_string();
    }

    for (i, &c) in chars.iter().enumerate() {
        match c {
            '\0' => out.push('\u{FFFD}'),
            '\u{01}'..='\u{1f}' | '\u{7f}' => {
                let _ = write!(out, "\\{:x} ", c as u32);
            }
            '0'..='9' if i == 0 || (i == 1 && chars[0] == '-') => {
                let _ = write!(out, "\\{:x} ", c as u32);
            }
            'a'..='z' | 'A'..='Z' | '0'..='9' | '-' | '_' => out.push(c),
            c if c as u32 >= 0x80 => out.push(c),
            c => {
                out.push('\\');
                out.push(c);
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_name_unchanged() {
        assert_eq!(escape_class("bg-gradient-t-ice"), "bg-gradient-t-ice");
    }

    #[test]
    fn test_percent_escaped() {
        assert_eq!(escape_class("bg-radial-t-ice-50%"), "bg-radial-t-ice-50\\%");
    }

    #[test]
    fn test_slash_and_dot() {
        assert_eq!(escape_class("w-1/2"), "w-1\\/2");
        assert_eq!(escape_class("p-2.5"), "p-2\\.5");
    }

    #[test]
    fn test_leading_digit() {
        assert_eq!(escape_class("2xl"), "\\32 xl");
    }

    #[test]
    fn test_digit_after_leading_dash() {
        assert_eq!(escape_class("-2xl"), "-\\32 xl");
    }

    #[test]
    fn test_lone_dash() {
        assert_eq!(escape_class("-"), "\\-");
    }

    #[test]
    fn test_non_ascii_passthrough() {
        assert_eq!(escape_class("bg-gradient-t-blau\u{df}"), "bg-gradient-t-blau\u{df}");
    }
}
