//! Character variety criteria - uppercase, lowercase, digits, special chars.
//!
//! Classification is ASCII-only so results don't depend on locale.

pub fn has_uppercase(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_uppercase())
}

pub fn has_lowercase(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_lowercase())
}

pub fn has_digit(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_digit())
}

/// Any ASCII punctuation or symbol: ``!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~``
pub fn has_special(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_punctuation())
}
