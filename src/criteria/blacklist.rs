//! Blacklist criterion - rejects passwords from a common password list.

use crate::blacklist::Blacklist;

pub fn not_blacklisted(blacklist: &Blacklist, password: &str) -> bool {
    !blacklist.contains(password)
}
