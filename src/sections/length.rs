//! Length section - checks password minimum length.

/// Minimum number of characters, counted as Unicode scalar values.
pub const MIN_LENGTH: usize = 8;

/// Checks if the password meets the minimum length requirement.
pub fn length_section(password: &str) -> bool {
    password.chars().count() >= MIN_LENGTH
}
