//! Email validation functions

use once_cell::sync::Lazy;
use regex::Regex;

// local@domain.tld: no whitespace anywhere, exactly one '@', a dot after it
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// Validates basic email format
///
/// Deliberately permissive: the server re-validates with a stricter parser.
/// This only catches obvious typos before a round trip.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}
