/// ANSI color helper utilities for terminal output.
use regex::Regex;
use std::sync::LazyLock;
use unicode_width::UnicodeWidthStr;

pub const RESET: &str = "\x1b[0m";
pub const GREY: &str = "\x1b[90m";

static ANSI_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("valid ANSI regex"));

pub fn strip_ansi(s: &str) -> String {
    ANSI_RE.replace_all(s, "").into_owned()
}

/// Terminal column width of `s`, ignoring ANSI escape sequences.
pub fn visible_width(s: &str) -> usize {
    UnicodeWidthStr::width(strip_ansi(s).as_str())
}

/// Wrap `value` in `color` when coloring is enabled.
pub fn paint(value: &str, color: &str, enabled: bool) -> String {
    if enabled {
        format!("{color}{value}{RESET}")
    } else {
        value.to_string()
    }
}

/// Grey for empty values (an event may have an empty title).
pub fn colorize_optional(value: &str, enabled: bool) -> String {
    if value.trim().is_empty() {
        paint("(untitled)", GREY, enabled)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_ignores_escape_codes_and_counts_wide_chars() {
        assert_eq!(visible_width(&paint("abc", GREY, true)), 3);
        assert_eq!(visible_width("日本"), 4);
    }

    #[test]
    fn paint_is_plain_when_disabled() {
        assert_eq!(paint("x", GREY, false), "x");
        assert_eq!(colorize_optional("  ", false), "(untitled)");
    }
}
