//! HTML escaping of user-supplied text

/// Escapes the five HTML-significant characters.
///
/// `&` is handled first so entities produced for the other characters are
/// not escaped twice.
pub fn escape_html(unsafe_text: &str) -> String {
    let mut escaped = String::with_capacity(unsafe_text.len());
    for c in unsafe_text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Trims surrounding whitespace and escapes the remainder.
///
/// This is the form every free-text field is checked and submitted in.
pub fn sanitize(raw: &str) -> String {
    escape_html(raw.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_reserved_characters() {
        assert_eq!(escape_html("<b>"), "&lt;b&gt;");
        assert_eq!(escape_html("Tom & Jerry"), "Tom &amp; Jerry");
        assert_eq!(escape_html(r#"say "hi""#), "say &quot;hi&quot;");
        assert_eq!(escape_html("it's"), "it&#039;s");
    }

    #[test]
    fn test_escape_is_not_recursive() {
        assert_eq!(escape_html("&lt;"), "&amp;lt;");
    }

    #[test]
    fn test_plain_text_untouched() {
        assert_eq!(escape_html("Иванов Иван"), "Иванов Иван");
        assert_eq!(escape_html(""), "");
    }

    #[test]
    fn test_sanitize_trims_first() {
        assert_eq!(sanitize("  <x>  "), "&lt;x&gt;");
        assert_eq!(sanitize("\n\t"), "");
    }
}
