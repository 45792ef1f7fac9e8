//! Postal code cell conversion.

/// Converts free text to a numeric postal code.
///
/// All non-digit characters are stripped before parsing, so `"CA 92651"`
/// and `"92651-1234"` both yield a value. A cell without digits is absence.
pub fn convert(text: &str) -> Option<i64> {
    let digits: String = text.chars().filter(char::is_ascii_digit).collect();
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::convert;

    #[test]
    fn plain_zip() {
        assert_eq!(convert("92651"), Some(92651));
    }

    #[test]
    fn surrounding_text_is_stripped() {
        assert_eq!(convert("CA 92651"), Some(92651));
        assert_eq!(convert("92651-1234"), Some(926511234));
    }

    #[test]
    fn no_digits_is_absent() {
        assert_eq!(convert(""), None);
        assert_eq!(convert("unknown"), None);
    }
}
