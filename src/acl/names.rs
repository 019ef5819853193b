//! User and group name validation
//!
//! The patterns accept at least what the scheduler configuration validator
//! accepts, so a name that passes configuration checks is never dropped here.

use once_cell::sync::Lazy;
use regex::Regex;

static USER_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[_a-zA-Z][a-zA-Z0-9_.@-]*[$]?$").expect("valid regex"));

static GROUP_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[_a-zA-Z][a-zA-Z0-9_-]*$").expect("valid regex"));

/// Check a user name: a letter or underscore, then letters, digits, `_`, `.`,
/// `@` or `-`, with an optional trailing `$`.
pub fn is_valid_user_name(name: &str) -> bool {
    USER_NAME_RE.is_match(name)
}

/// Check a group name: a letter or underscore, then letters, digits, `_` or `-`.
pub fn is_valid_group_name(name: &str) -> bool {
    GROUP_NAME_RE.is_match(name)
}
