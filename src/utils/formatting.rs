//! Formatting utilities used for CLI outputs.

use super::colors::visible_width;

/// Pad to `width` terminal columns; ANSI codes and wide chars are accounted for.
pub fn pad_right(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(visible_width(s));
    format!("{}{}", s, " ".repeat(pad))
}

/// Cut `s` to at most `max` chars, marking the cut with "...".
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(3)).collect();
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::colors::{GREY, paint};

    #[test]
    fn pad_right_counts_visible_columns() {
        assert_eq!(pad_right("ab", 4), "ab  ");
        assert_eq!(pad_right("abcdef", 4), "abcdef");
        let grey = paint("ab", GREY, true);
        assert_eq!(pad_right(&grey, 3), format!("{grey} "));
    }

    #[test]
    fn truncate_marks_cut() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a rather long title", 10), "a rathe...");
    }
}
