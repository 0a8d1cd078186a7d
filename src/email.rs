//! Email-address grammar.
//!
//! The local part is drawn from a restricted ASCII set; the domain is one or
//! more dot-separated labels of 1-63 characters that begin and end with an
//! alphanumeric character.

use regex::Regex;
use std::sync::LazyLock;

/// Anchored email pattern, shared with the schema baseline.
pub const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$";

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(EMAIL_PATTERN).unwrap());

/// Returns true when `address` matches the email grammar.
pub fn is_valid_email(address: &str) -> bool {
    EMAIL_RE.is_match(address)
}
