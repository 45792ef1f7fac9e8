//! Phone number cell conversion.

/// Converts free text to an E.164-ish phone number.
///
/// Everything except digits and `+` is stripped. A number that does not
/// start with `+` gets the US country code prefixed. An empty result is
/// absence.
pub fn convert(text: &str) -> Option<String> {
    let number: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();

    if number.is_empty() {
        return None;
    }

    if number.starts_with('+') {
        Some(number)
    } else {
        Some(format!("+1{number}"))
    }
}

#[cfg(test)]
mod tests {
    use super::convert;

    #[test]
    fn us_number_is_normalized() {
        assert_eq!(convert("(714) 555-1212"), Some("+17145551212".to_string()));
        assert_eq!(convert("714.555.1212"), Some("+17145551212".to_string()));
    }

    #[test]
    fn international_number_keeps_its_prefix() {
        assert_eq!(convert("+44 20 7946 0958"), Some("+442079460958".to_string()));
    }

    #[test]
    fn empty_is_absent() {
        assert_eq!(convert(""), None);
        assert_eq!(convert("n/a"), None);
    }
}
