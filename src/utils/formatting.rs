//! Formatting utilities used for CLI and export outputs.

use unicode_width::UnicodeWidthStr;

/// Display width of `s`, ignoring ANSI color sequences.
pub fn visible_width(s: &str) -> usize {
    let mut plain = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            // skip up to and including the terminating 'm'
            for c in chars.by_ref() {
                if c == 'm' {
                    break;
                }
            }
        } else {
            plain.push(c);
        }
    }
    UnicodeWidthStr::width(plain.as_str())
}

/// Pad on the right to `width` display columns.
pub fn pad_right(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(visible_width(s));
    format!("{}{}", s, " ".repeat(fill))
}

pub fn pad_left(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(visible_width(s));
    format!("{}{}", " ".repeat(fill), s)
}

/// Render an amount with the configured currency symbol.
///
/// Whole amounts print without decimals, e.g. `₹100` / `-₹8` / `₹302.50`.
pub fn format_money(value: f64, currency: &str) -> String {
    // -0.0 would otherwise print as "-₹0"
    let value = if value == 0.0 { 0.0 } else { value };
    let sign = if value < 0.0 { "-" } else { "" };
    let abs = value.abs();

    if abs.fract() == 0.0 {
        format!("{sign}{currency}{abs:.0}")
    } else {
        format!("{sign}{currency}{abs:.2}")
    }
}

/// Split a comma-separated list of names, dropping blanks.
pub fn split_names(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Comma-separated list, or "-" when empty.
pub fn join_names(names: &[String]) -> String {
    if names.is_empty() {
        "-".to_string()
    } else {
        names.join(", ")
    }
}
