//! Region cell conversion.

use crate::reference::RegionReference;

/// Converts free text to a canonical region name using the reference
/// table. Matching is case-insensitive over full names, standard
/// abbreviations and alternate abbreviations; no match is absence.
pub fn convert(text: &str, reference: &RegionReference) -> Option<String> {
    reference.canonical_name(text).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::convert;
    use crate::reference::RegionReference;

    #[test]
    fn abbreviation_resolves_to_canonical_name() {
        let reference = RegionReference::new();
        assert_eq!(convert("CA", &reference), Some("California".to_string()));
        assert_eq!(convert("wash.", &reference), Some("Washington".to_string()));
    }

    #[test]
    fn unknown_region_is_absent() {
        let reference = RegionReference::new();
        assert_eq!(convert("Middle Earth", &reference), None);
    }
}
