/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Status color used by list/day outputs:
/// confirmed → green, pending → yellow, everything else → grey.
pub fn color_for_status(status: &str) -> &'static str {
    match status {
        "confirmed" => GREEN,
        "pending" => YELLOW,
        _ => GREY,
    }
}
