use colored::*;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: char = '…';

/// Columns `s` occupies in a terminal.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Shortens `s` to at most `max_width` display columns, ending in `…` when cut.
pub fn truncate(s: &str, max_width: usize) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - ELLIPSIS.width().unwrap_or(1);
    let mut result = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        result.push(ch);
    }
    // Per-char widths can undercount sequences such as emoji variation selectors.
    while !result.is_empty() && display_width(&result) > budget {
        result.pop();
    }
    result.push(ELLIPSIS);
    result
}

/// Left-aligns `s` in a field `width` columns wide.
pub fn pad_right(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(display_width(s));
    format!("{}{}", s, " ".repeat(fill))
}

/// Centers `s` in a field `width` columns wide; extra space goes right.
pub fn pad_center(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(display_width(s));
    let left = fill / 2;
    format!("{}{}{}", " ".repeat(left), s, " ".repeat(fill - left))
}

/// Signal-bar glyphs for the `list` priority column.
pub fn priority_display(priority: f64) -> String {
    if priority.fract() != 0.0 {
        return format!("{:.0}", priority);
    }
    match priority as i64 {
        0 => "---".to_string(),
        1 => "⚠⚠⚠".to_string(),
        2 => "▄▆█".to_string(),
        3 => "▄▆ ".to_string(),
        4 => "▄  ".to_string(),
        other => other.to_string(),
    }
}

pub fn priority_label(priority: f64) -> &'static str {
    match priority as i64 {
        1 => "Urgent",
        2 => "High",
        3 => "Medium",
        4 => "Low",
        _ => "No priority",
    }
}

/// Parses `#rrggbb` (or `rrggbb`) into RGB components.
pub fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

/// Applies a Linear hex color, leaving the text unstyled if the color is unusable.
pub fn color_hex(text: &str, hex: Option<&str>) -> ColoredString {
    match hex.and_then(parse_hex_color) {
        Some((r, g, b)) => text.truecolor(r, g, b),
        None => text.normal(),
    }
}

/// Shows only the first and last four characters of a token.
pub fn mask_api_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 8 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}...{}", head, tail)
}
