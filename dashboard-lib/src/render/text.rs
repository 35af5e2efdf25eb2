//! Terminal-cell measurement for table text.

use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

use crate::column::Alignment;

/// Width of `s` in terminal cells; wide CJK and emoji count as two.
pub fn display_width(s: &str) -> usize {
    s.width()
}

/// Width of one character in cells. Control characters count as zero.
pub fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// Cut `s` down to at most `max_width` cells, ending in `…` when anything
/// was dropped.
///
/// A wide character that would straddle the limit is dropped whole, so the
/// result can be one cell narrower than `max_width`.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }

    if max_width == 0 {
        return String::new();
    }

    let target_width = max_width - 1;
    let mut result = String::new();
    let mut width = 0;

    for ch in s.chars() {
        let ch_width = char_width(ch);
        if width + ch_width > target_width {
            break;
        }
        result.push(ch);
        width += ch_width;
    }

    result.push('…');
    result
}

/// Truncate or pad `s` to exactly `width` cells.
pub fn fit(s: &str, width: usize, align: Alignment) -> String {
    let s = truncate_to_width(s, width);
    let gap = width.saturating_sub(display_width(&s));
    let (left, right) = match align {
        Alignment::Left => (0, gap),
        Alignment::Right => (gap, 0),
        Alignment::Center => (gap / 2, gap - gap / 2),
    };
    format!("{}{}{}", " ".repeat(left), s, " ".repeat(right))
}
