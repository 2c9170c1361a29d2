/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

const BOLD: &str = "\x1b[1m";

/// False when `NO_COLOR` is set.
pub fn colors_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

/// Balance color:
/// \>0 → green (receives money)
/// \<0 → red (pays)
/// 0 → reset
pub fn color_for_balance(value: f64) -> &'static str {
    if value > 0.0 {
        GREEN
    } else if value < 0.0 {
        RED
    } else {
        RESET
    }
}

/// Wrap `value` in `color`, resetting afterwards.
pub fn paint(value: &str, color: &str) -> String {
    if color == RESET || !colors_enabled() {
        value.to_string()
    } else {
        format!("{color}{value}{RESET}")
    }
}

pub fn bold(value: &str) -> String {
    paint(value, BOLD)
}
