/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Pending-count color:
/// 0 → green (nothing left to backfill)
/// \>0 → yellow
pub fn color_for_pending(count: u64) -> &'static str {
    if count == 0 { GREEN } else { YELLOW }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_color_flips_on_zero() {
        assert_eq!(color_for_pending(0), GREEN);
        assert_eq!(color_for_pending(3), YELLOW);
    }
}
