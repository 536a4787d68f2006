//! Pattern section - rejects passwords built around well-known sequences.

use regex::Regex;
use std::sync::LazyLock;

/// Substrings that mark a password as predictable, matched case-insensitively.
pub const COMMON_PATTERNS: [&str; 4] = ["password", "1234", "qwerty", "abc123"];

static COMMON: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("(?i){}", COMMON_PATTERNS.join("|"))).expect("Invalid pattern regex")
});

/// Checks that the password contains none of [`COMMON_PATTERNS`].
pub fn common_pattern_section(password: &str) -> bool {
    !COMMON.is_match(password)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_section_each_pattern() {
        for pattern in COMMON_PATTERNS {
            assert!(!common_pattern_section(pattern), "{pattern} should be rejected");
            assert!(!common_pattern_section(&format!("x{pattern}y")));
        }
    }

    #[test]
    fn test_pattern_section_case_insensitive() {
        assert!(!common_pattern_section("MyPaSsWoRd!"));
        assert!(!common_pattern_section("QWERTY"));
        assert!(!common_pattern_section("ABC123"));
    }

    #[test]
    fn test_pattern_section_near_misses() {
        assert!(common_pattern_section("abc"));
        assert!(common_pattern_section("123"));
        assert!(common_pattern_section("1243"));
        assert!(common_pattern_section("passw0rd"));
        assert!(common_pattern_section("abc12"));
    }

    #[test]
    fn test_pattern_section_strong_password() {
        assert!(common_pattern_section("RandomPass987!@#Word"));
    }

    #[test]
    fn test_pattern_section_empty() {
        assert!(common_pattern_section(""));
    }
}
