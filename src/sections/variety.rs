//! Character variety sections - uppercase, lowercase, digits, special chars.

use regex::Regex;
use std::sync::LazyLock;

static UPPERCASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Z]").expect("Invalid uppercase regex"));
static LOWERCASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-z]").expect("Invalid lowercase regex"));
// `\d` would also match non-ASCII digits
static DIGIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]").expect("Invalid digit regex"));
static SPECIAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[!@#$%^&*]").expect("Invalid special regex"));

/// Checks for at least one ASCII uppercase letter.
pub fn uppercase_section(password: &str) -> bool {
    UPPERCASE.is_match(password)
}

/// Checks for at least one ASCII lowercase letter.
pub fn lowercase_section(password: &str) -> bool {
    LOWERCASE.is_match(password)
}

/// Checks for at least one ASCII digit.
pub fn digit_section(password: &str) -> bool {
    DIGIT.is_match(password)
}

/// Checks for at least one of `!@#$%^&*`.
pub fn special_section(password: &str) -> bool {
    SPECIAL.is_match(password)
}
