/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Zero totals are greyed out, everything else is left as is.
pub fn colorize_hours(value: f64, text: &str) -> String {
    if value <= 0.0 {
        format!("{GREY}{text}{RESET}")
    } else {
        text.to_string()
    }
}
