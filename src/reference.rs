//! Reference table of regions for the supported countries.
//!
//! The table is constructed once and passed explicitly to the pieces that
//! need it (the region/country converters and record validation). Lookups
//! accept the full region name, the standard postal abbreviation, or a
//! traditional alternate abbreviation, and always resolve to the canonical
//! full name. All matching is case-insensitive.

use crate::model::enums::Country;

/// One region of a supported country.
#[derive(Debug, Clone, Copy)]
pub struct RegionEntry {
    /// Canonical full name, e.g. "California".
    pub name: &'static str,
    /// Standard two-letter abbreviation, e.g. "CA".
    pub code: &'static str,
    /// Traditional alternate abbreviations, e.g. "Calif.".
    pub alt: &'static [&'static str],
}

/// Immutable region lookup table for the supported countries.
#[derive(Debug, Clone)]
pub struct RegionReference {
    countries: Vec<(Country, &'static [RegionEntry])>,
}

impl RegionReference {
    pub fn new() -> Self {
        Self {
            countries: vec![
                (Country::UnitedStates, US_REGIONS),
                (Country::Canada, CANADA_REGIONS),
            ],
        }
    }

    /// Resolves a full name, abbreviation or alternate abbreviation to the
    /// canonical full region name, searching every supported country.
    pub fn canonical_name(&self, text: &str) -> Option<&'static str> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        self.countries
            .iter()
            .flat_map(|(_, regions)| regions.iter())
            .find(|region| region.matches(text))
            .map(|region| region.name)
    }

    /// Whether `name` is the canonical name of a region of `country`.
    pub fn is_region_of(&self, country: Country, name: &str) -> bool {
        self.regions_of(country)
            .iter()
            .any(|region| region.name == name)
    }

    /// All regions registered for one country.
    pub fn regions_of(&self, country: Country) -> &'static [RegionEntry] {
        self.countries
            .iter()
            .find(|(c, _)| *c == country)
            .map(|(_, regions)| *regions)
            .unwrap_or(&[])
    }
}

impl Default for RegionReference {
    fn default() -> Self {
        Self::new()
    }
}

impl RegionEntry {
    fn matches(&self, text: &str) -> bool {
        text.eq_ignore_ascii_case(self.name)
            || text.eq_ignore_ascii_case(self.code)
            || self.alt.iter().any(|alt| text.eq_ignore_ascii_case(alt))
    }
}

const US_REGIONS: &[RegionEntry] = &[
    RegionEntry { name: "Alabama", code: "AL", alt: &["Ala."] },
    RegionEntry { name: "Alaska", code: "AK", alt: &[] },
    RegionEntry { name: "Arizona", code: "AZ", alt: &["Ariz."] },
    RegionEntry { name: "Arkansas", code: "AR", alt: &["Ark."] },
    RegionEntry { name: "California", code: "CA", alt: &["Calif.", "Cal."] },
    RegionEntry { name: "Colorado", code: "CO", alt: &["Colo."] },
    RegionEntry { name: "Connecticut", code: "CT", alt: &["Conn."] },
    RegionEntry { name: "Delaware", code: "DE", alt: &["Del."] },
    RegionEntry { name: "District of Columbia", code: "DC", alt: &["D.C."] },
    RegionEntry { name: "Florida", code: "FL", alt: &["Fla."] },
    RegionEntry { name: "Georgia", code: "GA", alt: &["Ga."] },
    RegionEntry { name: "Hawaii", code: "HI", alt: &[] },
    RegionEntry { name: "Idaho", code: "ID", alt: &[] },
    RegionEntry { name: "Illinois", code: "IL", alt: &["Ill."] },
    RegionEntry { name: "Indiana", code: "IN", alt: &["Ind."] },
    RegionEntry { name: "Iowa", code: "IA", alt: &[] },
    RegionEntry { name: "Kansas", code: "KS", alt: &["Kan."] },
    RegionEntry { name: "Kentucky", code: "KY", alt: &["Ky."] },
    RegionEntry { name: "Louisiana", code: "LA", alt: &["La."] },
    RegionEntry { name: "Maine", code: "ME", alt: &[] },
    RegionEntry { name: "Maryland", code: "MD", alt: &["Md."] },
    RegionEntry { name: "Massachusetts", code: "MA", alt: &["Mass."] },
    RegionEntry { name: "Michigan", code: "MI", alt: &["Mich."] },
    RegionEntry { name: "Minnesota", code: "MN", alt: &["Minn."] },
    RegionEntry { name: "Mississippi", code: "MS", alt: &["Miss."] },
    RegionEntry { name: "Missouri", code: "MO", alt: &["Mo."] },
    RegionEntry { name: "Montana", code: "MT", alt: &["Mont."] },
    RegionEntry { name: "Nebraska", code: "NE", alt: &["Neb."] },
    RegionEntry { name: "Nevada", code: "NV", alt: &["Nev."] },
    RegionEntry { name: "New Hampshire", code: "NH", alt: &["N.H."] },
    RegionEntry { name: "New Jersey", code: "NJ", alt: &["N.J."] },
    RegionEntry { name: "New Mexico", code: "NM", alt: &["N.M."] },
    RegionEntry { name: "New York", code: "NY", alt: &["N.Y."] },
    RegionEntry { name: "North Carolina", code: "NC", alt: &["N.C."] },
    RegionEntry { name: "North Dakota", code: "ND", alt: &["N.D."] },
    RegionEntry { name: "Ohio", code: "OH", alt: &[] },
    RegionEntry { name: "Oklahoma", code: "OK", alt: &["Okla."] },
    RegionEntry { name: "Oregon", code: "OR", alt: &["Ore."] },
    RegionEntry { name: "Pennsylvania", code: "PA", alt: &["Pa."] },
    RegionEntry { name: "Rhode Island", code: "RI", alt: &["R.I."] },
    RegionEntry { name: "South Carolina", code: "SC", alt: &["S.C."] },
    RegionEntry { name: "South Dakota", code: "SD", alt: &["S.D."] },
    RegionEntry { name: "Tennessee", code: "TN", alt: &["Tenn."] },
    RegionEntry { name: "Texas", code: "TX", alt: &["Tex."] },
    RegionEntry { name: "Utah", code: "UT", alt: &[] },
    RegionEntry { name: "Vermont", code: "VT", alt: &["Vt."] },
    RegionEntry { name: "Virginia", code: "VA", alt: &["Va."] },
    RegionEntry { name: "Washington", code: "WA", alt: &["Wash."] },
    RegionEntry { name: "West Virginia", code: "WV", alt: &["W.Va."] },
    RegionEntry { name: "Wisconsin", code: "WI", alt: &["Wis."] },
    RegionEntry { name: "Wyoming", code: "WY", alt: &["Wyo."] },
];

const CANADA_REGIONS: &[RegionEntry] = &[
    RegionEntry { name: "Alberta", code: "AB", alt: &["Alta."] },
    RegionEntry { name: "British Columbia", code: "BC", alt: &["B.C."] },
    RegionEntry { name: "Manitoba", code: "MB", alt: &["Man."] },
    RegionEntry { name: "New Brunswick", code: "NB", alt: &["N.B."] },
    RegionEntry { name: "Newfoundland and Labrador", code: "NL", alt: &["Nfld."] },
    RegionEntry { name: "Northwest Territories", code: "NT", alt: &["N.W.T."] },
    RegionEntry { name: "Nova Scotia", code: "NS", alt: &["N.S."] },
    RegionEntry { name: "Nunavut", code: "NU", alt: &[] },
    RegionEntry { name: "Ontario", code: "ON", alt: &["Ont."] },
    RegionEntry { name: "Prince Edward Island", code: "PE", alt: &["P.E.I."] },
    RegionEntry { name: "Quebec", code: "QC", alt: &["Que."] },
    RegionEntry { name: "Saskatchewan", code: "SK", alt: &["Sask."] },
    RegionEntry { name: "Yukon", code: "YT", alt: &[] },
];
