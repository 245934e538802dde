//! String length and membership validators

/// Minimum length of the full name, after trimming and escaping
pub const FULL_NAME_MIN: usize = 2;

/// Maximum length of the full name, after trimming and escaping
pub const FULL_NAME_MAX: usize = 100;

/// Minimum length of the message, after trimming and escaping
pub const MESSAGE_MIN: usize = 10;

/// Default upper bound for the message length
pub const DEFAULT_MAX_MESSAGE_LENGTH: usize = 1000;

/// Length in characters, not bytes.
///
/// Names and messages are routinely Cyrillic, where a byte count would
/// double the apparent length.
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Checks `min <= len(s) <= max`, both ends inclusive
pub fn is_length_between(s: &str, min: usize, max: usize) -> bool {
    let len = char_len(s);
    len >= min && len <= max
}

/// Full name rule, applied to the sanitized value
pub fn is_valid_full_name(sanitized: &str) -> bool {
    is_length_between(sanitized, FULL_NAME_MIN, FULL_NAME_MAX)
}

/// Message rule, applied to the sanitized value
pub fn is_valid_message(sanitized: &str, max_length: usize) -> bool {
    is_length_between(sanitized, MESSAGE_MIN, max_length)
}

/// Enum/value restriction
pub fn is_one_of<S: AsRef<str>>(value: &str, allowed: &[S]) -> bool {
    allowed.iter().any(|candidate| candidate.as_ref() == value)
}

/// Characters still available in a field capped at `max`.
///
/// Goes negative once the value is over the limit. Counts `char`s like the
/// length rules and the server's `len()`; a browser's `value.length` counts
/// UTF-16 units, so characters outside the BMP (emoji) cost one here and two
/// there.
pub fn remaining_chars(value: &str, max: usize) -> i64 {
    max as i64 - char_len(value) as i64
}
