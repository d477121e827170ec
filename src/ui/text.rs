//! Display-width aware text helpers.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Terminal columns occupied by `text`.
pub fn width(text: &str) -> u16 {
    u16::try_from(UnicodeWidthStr::width(text)).unwrap_or(u16::MAX)
}

/// Greedy word wrap to `max_width` columns.
///
/// Words wider than a line are split by character. Always returns at least
/// one line.
pub fn wrap(text: &str, max_width: u16) -> Vec<String> {
    let max_width = usize::from(max_width.max(1));
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0usize;

    for word in text.split_whitespace() {
        let word_width = UnicodeWidthStr::width(word);

        if word_width > max_width {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }
            for ch in word.chars() {
                let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
                if current_width + ch_width > max_width && !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                    current_width = 0;
                }
                current.push(ch);
                current_width += ch_width;
            }
            continue;
        }

        let needed = if current.is_empty() {
            word_width
        } else {
            current_width + 1 + word_width
        };
        if needed > max_width {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_width = word_width;
        } else {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
            current_width = needed;
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Cut `text` to at most `max_width` columns.
pub fn truncate(text: &str, max_width: u16) -> String {
    let max_width = usize::from(max_width);
    let mut out = String::new();
    let mut used = 0usize;
    for ch in text.chars() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + ch_width > max_width {
            break;
        }
        out.push(ch);
        used += ch_width;
    }
    out
}

/// Byte index of the space at display `column` of `text`, if that cell is
/// a space.
pub fn blank_at(text: &str, column: u16) -> Option<usize> {
    let column = usize::from(column);
    let mut at = 0usize;
    for (byte, ch) in text.char_indices() {
        if at == column {
            return (ch == ' ').then_some(byte);
        }
        at += UnicodeWidthChar::width(ch).unwrap_or(0);
        if at > column {
            return None;
        }
    }
    None
}

/// Left padding that centers `content_width` columns in `total` columns.
pub fn center_offset(content_width: u16, total: u16) -> u16 {
    total.saturating_sub(content_width) / 2
}
