//! Centralized UI formatting and color utilities
//!
//! Status icons, warnings and the quiet-mode switch shared by every
//! fieldcheck command.

use colored::{ColoredString, Colorize};

/// Check if quiet mode is enabled via environment variable
pub fn is_quiet() -> bool {
    std::env::var("FIELDCHECK_QUIET")
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

/// Icon for a record outcome: ✓ (green) when valid, ✗ (red) otherwise.
pub fn outcome_icon(valid: bool) -> ColoredString {
    if valid {
        "✓".green()
    } else {
        "✗".red()
    }
}

/// Print a warning to stderr unless quiet mode is on.
pub fn warn(message: &str) {
    if !is_quiet() {
        eprintln!("{} {}", "Warning:".yellow(), message);
    }
}
