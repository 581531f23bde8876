//! Length criterion - checks password minimum length.

/// Minimum password length, in bytes.
pub const MIN_LENGTH: usize = 8;

/// Counts raw bytes of the UTF-8 encoding, not chars or graphemes.
pub fn meets_min_length(password: &str) -> bool {
    password.len() >= MIN_LENGTH
}
