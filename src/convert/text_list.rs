//! Free-text list cell conversion.

/// Separator tokens, longest first so that phrase separators win over the
/// punctuation they contain. The phrases come straight from observed
/// spreadsheet prose ("I surf X but have also surfed in Y").
const SEPARATORS: &[&str] = &[
    "but have also surfed in",
    "and now have a",
    "also enjoy",
    ", and",
    "and a",
    "and",
    "or",
    "to",
    ";",
    ",",
    "&",
    "-",
];

/// Noise tokens that show up as list entries but carry no meaning.
const NOISE: &[&str] = &["NA", "up"];

/// Splits free text into a list of entries.
///
/// The text is cut at every occurrence of a separator token, entries are
/// trimmed, and empty or noise entries are dropped. An empty cell yields
/// an empty list.
pub fn convert(text: &str) -> Vec<String> {
    let mut entries = Vec::new();
    let mut start = 0;
    let mut index = 0;

    while index < text.len() {
        if !text.is_char_boundary(index) {
            index += 1;
            continue;
        }
        match SEPARATORS.iter().find(|sep| text[index..].starts_with(**sep)) {
            Some(sep) => {
                push_entry(&mut entries, &text[start..index]);
                index += sep.len();
                start = index;
            }
            None => index += 1,
        }
    }
    push_entry(&mut entries, &text[start..]);

    entries
}

fn push_entry(entries: &mut Vec<String>, raw: &str) {
    let entry = raw.trim();
    if !entry.is_empty() && !NOISE.contains(&entry) {
        entries.push(entry.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::convert;

    #[test]
    fn splits_on_punctuation() {
        assert_eq!(
            convert("San Onofre; Trestles, Lowers"),
            vec!["San Onofre", "Trestles", "Lowers"]
        );
    }

    #[test]
    fn splits_on_conjunctions() {
        assert_eq!(convert("Doheny and Bolsa Chica"), vec!["Doheny", "Bolsa Chica"]);
        assert_eq!(convert("longboard & funboard"), vec!["longboard", "funboard"]);
    }

    #[test]
    fn splits_on_prose_phrases() {
        assert_eq!(
            convert("Doheny but have also surfed in Waikiki"),
            vec!["Doheny", "Waikiki"]
        );
    }

    #[test]
    fn drops_noise_entries() {
        assert_eq!(convert("NA"), Vec::<String>::new());
        assert_eq!(convert("Doheny, NA"), vec!["Doheny"]);
    }

    #[test]
    fn empty_cell_is_empty_list() {
        assert_eq!(convert(""), Vec::<String>::new());
        assert_eq!(convert("  "), Vec::<String>::new());
    }
}
