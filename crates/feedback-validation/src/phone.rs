//! Phone number validation

use once_cell::sync::Lazy;
use regex::Regex;

/// Fewest digits (a leading `+` counts) a phone number may carry
pub const PHONE_MIN_DIGITS: usize = 5;

/// Most digits (a leading `+` counts) a phone number may carry
pub const PHONE_MAX_DIGITS: usize = 15;

// Shape only: optional '+', then 5..=20 of digits, spaces, dashes, parens
static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+?[0-9\s\-()]{5,20}$").expect("phone pattern is valid")
});

/// Counts the characters left after dropping everything but digits and `+`
pub fn phone_digit_count(phone: &str) -> usize {
    phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .count()
}

/// Validates a phone number
///
/// The field is optional, so an empty string is valid. A non-empty value
/// must match the shape pattern and carry between 5 and 15 digits.
///
/// # Examples
/// ```
/// use feedback_validation::is_valid_phone;
/// assert!(is_valid_phone(""));
/// assert!(is_valid_phone("+7 999 123-45-67"));
/// assert!(!is_valid_phone("123"));
/// ```
pub fn is_valid_phone(phone: &str) -> bool {
    if phone.is_empty() {
        return true;
    }

    let digits = phone_digit_count(phone);
    PHONE_REGEX.is_match(phone) && (PHONE_MIN_DIGITS..=PHONE_MAX_DIGITS).contains(&digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_phones() {
        assert!(is_valid_phone(""));
        assert!(is_valid_phone("+7 999 123-45-67"));
        assert!(is_valid_phone("(495) 123-45-67"));
        assert!(is_valid_phone("12345"));
    }

    #[test]
    fn test_too_few_digits() {
        assert!(!is_valid_phone("123"));
        // shape is fine, but only 3 digits
        assert!(!is_valid_phone("1-2-3  "));
    }

    #[test]
    fn test_too_many_digits() {
        assert!(!is_valid_phone("1234567890123456"));
        assert!(!is_valid_phone("+1234567890123456"));
    }

    #[test]
    fn test_garbage_rejected() {
        assert!(!is_valid_phone("call me maybe"));
        assert!(!is_valid_phone("-------------------------"));
        assert!(!is_valid_phone("+7 999 123 45 67 ext 1"));
    }

    #[test]
    fn test_plus_only_at_start() {
        assert!(!is_valid_phone("7+999 123 45 67"));
    }

    #[test]
    fn test_digit_count() {
        assert_eq!(phone_digit_count("+7 (999) 123-45-67"), 12);
        assert_eq!(phone_digit_count("--"), 0);
    }
}
