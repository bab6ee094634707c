//! Utility functions for text handling.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Characters that carry meaning in chat markdown
pub const MARKDOWN_SPECIAL: &[char] = &['*', '#', '/', '(', ')', '[', ']', '_', '`'];

/// Zero-width space, used to defuse heading detection
pub const ZERO_WIDTH_SPACE: char = '\u{200b}';

static ASTERISK_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\\\*|\*+").unwrap());
static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Escape markdown special characters in literal text.
///
/// Each special character gets a backslash prefix unless one is already
/// present, so escaping is idempotent. Zero-width spaces are removed.
pub fn escape_markdown(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut prev_backslash = false;

    for c in text.chars() {
        if c == ZERO_WIDTH_SPACE {
            continue;
        }
        if MARKDOWN_SPECIAL.contains(&c) && !prev_backslash {
            result.push('\\');
        }
        prev_backslash = c == '\\' && !prev_backslash;
        result.push(c);
    }

    result
}

/// Collapse whitespace runs into a single space
pub fn collapse_whitespace(s: &str) -> Cow<'_, str> {
    WHITESPACE_RUN.replace_all(s, " ")
}

/// Remove unescaped asterisk runs of exactly `width` characters.
///
/// Used before re-wrapping content in bold (`width == 2`) or italic
/// (`width == 1`). Runs of any other length, such as `***`, are left alone.
pub fn strip_asterisks(text: &str, width: usize) -> String {
    ASTERISK_RUN
        .replace_all(text, |caps: &Captures| {
            let run = &caps[0];
            if run.starts_with('\\') || run.len() != width {
                run.to_string()
            } else {
                String::new()
            }
        })
        .into_owned()
}

/// Indent every line after the first by `width` spaces
pub fn indent_continuation(text: &str, width: usize) -> String {
    let pad = " ".repeat(width);
    let mut out = String::with_capacity(text.len());

    for (i, line) in text.lines().enumerate() {
        if i > 0 {
            out.push('\n');
            if !line.is_empty() {
                out.push_str(&pad);
            }
        }
        out.push_str(line);
    }

    out
}

/// Clean an attribute value (trim and handle empty)
pub fn clean_attribute(value: Option<&str>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
