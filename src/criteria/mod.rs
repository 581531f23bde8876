//! Password criteria
//!
//! Each criterion is an independent rule with a boolean check and a fixed
//! remediation message. The predicates live in one file per concern.

mod blacklist;
mod length;
mod variety;

use std::sync::Arc;

use crate::blacklist::Blacklist;

pub use length::MIN_LENGTH;

/// A single password rule.
///
/// The first five variants make up the default policy, see [`Criterion::defaults`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Criterion {
    MinimumLength,
    HasUppercase,
    HasLowercase,
    HasDigit,
    HasSpecialCharacter,
    /// Rejects passwords found in a list of common passwords.
    NotBlacklisted(Arc<Blacklist>),
}

impl Criterion {
    /// The default policy, in report order.
    pub fn defaults() -> Vec<Criterion> {
        vec![
            Criterion::MinimumLength,
            Criterion::HasUppercase,
            Criterion::HasLowercase,
            Criterion::HasDigit,
            Criterion::HasSpecialCharacter,
        ]
    }

    pub fn not_blacklisted(blacklist: Blacklist) -> Self {
        Criterion::NotBlacklisted(Arc::new(blacklist))
    }

    /// Returns `true` when `password` meets this rule.
    pub fn satisfied(&self, password: &str) -> bool {
        match self {
            Criterion::MinimumLength => length::meets_min_length(password),
            Criterion::HasUppercase => variety::has_uppercase(password),
            Criterion::HasLowercase => variety::has_lowercase(password),
            Criterion::HasDigit => variety::has_digit(password),
            Criterion::HasSpecialCharacter => variety::has_special(password),
            Criterion::NotBlacklisted(list) => blacklist::not_blacklisted(list, password),
        }
    }

    /// Remediation message shown when the rule is not met.
    pub fn describe(&self) -> &'static str {
        match self {
            Criterion::MinimumLength => "Password must be at least 8 characters long.",
            Criterion::HasUppercase => "Password must contain at least one uppercase letter.",
            Criterion::HasLowercase => "Password must contain at least one lowercase letter.",
            Criterion::HasDigit => "Password must contain at least one digit.",
            Criterion::HasSpecialCharacter => {
                "Password must contain at least one special character."
            }
            Criterion::NotBlacklisted(_) => "Password must not be a commonly used password.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_order() {
        assert_eq!(
            Criterion::defaults(),
            vec![
                Criterion::MinimumLength,
                Criterion::HasUppercase,
                Criterion::HasLowercase,
                Criterion::HasDigit,
                Criterion::HasSpecialCharacter,
            ]
        );
    }

    #[test]
    fn test_defaults_all_fail_on_empty() {
        for criterion in Criterion::defaults() {
            assert!(!criterion.satisfied(""), "{:?} accepted empty password", criterion);
        }
    }

    #[test]
    fn test_describe_messages_are_distinct() {
        let mut messages: Vec<_> = Criterion::defaults().iter().map(|c| c.describe()).collect();
        messages.push(Criterion::not_blacklisted(Blacklist::from_entries(["x"])).describe());
        let before = messages.len();
        messages.sort();
        messages.dedup();
        assert_eq!(messages.len(), before);
    }

    #[test]
    fn test_not_blacklisted_dispatch() {
        let criterion = Criterion::not_blacklisted(Blacklist::from_entries(["letmein"]));
        assert!(!criterion.satisfied("LetMeIn"));
        assert!(criterion.satisfied("Sp3c!al_"));
    }
}
