//! Boolean cell conversion.

/// Converts free text to a boolean.
///
/// The cell is split on spaces and hyphens and only the first token is
/// inspected: `"yes"` and `"true"` (any case) mean true, anything else --
/// including an empty cell -- means false. Spreadsheets in the wild carry
/// values like `"Yes - gave it to her 12/2019"`, so trailing commentary is
/// deliberately ignored.
pub fn convert(text: &str) -> bool {
    match first_token(text) {
        Some(token) => {
            let token = token.to_ascii_lowercase();
            token == "yes" || token == "true"
        }
        None => false,
    }
}

fn first_token(text: &str) -> Option<&str> {
    text.split([' ', '-'])
        .map(str::trim)
        .find(|token| !token.is_empty())
}

#[cfg(test)]
mod tests {
    use super::convert;

    #[test]
    fn yes_and_true_are_true() {
        assert!(convert("yes"));
        assert!(convert("Yes"));
        assert!(convert("YES"));
        assert!(convert("true"));
        assert!(convert("True"));
    }

    #[test]
    fn trailing_commentary_is_ignored() {
        assert!(convert("Yes - gave it to her 12/2019"));
        assert!(convert("yes please"));
        assert!(!convert("no way"));
    }

    #[test]
    fn anything_else_is_false() {
        assert!(!convert("no"));
        assert!(!convert("false"));
        assert!(!convert("maybe"));
        assert!(!convert("y"));
    }

    #[test]
    fn total_over_empty_input() {
        assert!(!convert(""));
        assert!(!convert("   "));
        assert!(!convert("- -"));
    }
}
