//! Enumerated cell conversions driven by synonym tables.
//!
//! Each table maps the spellings observed across years of spreadsheet
//! exports (full names, abbreviations, misspellings) to one canonical
//! value. Matching is case-insensitive. Supporting a new export format is
//! a data change here, not a control-flow change.

use crate::model::enums::{Chapter, Country, EnteredStatus, Level, MemberStatus};

const CHAPTER_SYNONYMS: &[(&str, Chapter)] = &[
    ("San Diego", Chapter::SanDiego),
    ("SanDiego", Chapter::SanDiego),
    ("SD", Chapter::SanDiego),
    ("Orange County", Chapter::OrangeCountyLosAngeles),
    ("OrangeCounty", Chapter::OrangeCountyLosAngeles),
    ("OC", Chapter::OrangeCountyLosAngeles),
    ("OrangeCountyLosAngeles", Chapter::OrangeCountyLosAngeles),
    ("Orange County/Los Angeles", Chapter::OrangeCountyLosAngeles),
    ("OCLA", Chapter::OrangeCountyLosAngeles),
    ("LA", Chapter::OrangeCountyLosAngeles),
    ("LosAngeles", Chapter::OrangeCountyLosAngeles),
    ("Los Angeles", Chapter::OrangeCountyLosAngeles),
    ("Ventura", Chapter::VenturaSantaBarbara),
    ("Santa Barbara", Chapter::VenturaSantaBarbara),
    ("Ventura/Santa Barbara", Chapter::VenturaSantaBarbara),
    ("SantaCruz", Chapter::SantaCruzSanFrancisco),
    ("Santa Cruz", Chapter::SantaCruzSanFrancisco),
    ("SC", Chapter::SantaCruzSanFrancisco),
    ("Santa Cruz/San Francisco", Chapter::SantaCruzSanFrancisco),
    ("SantaCruzSanFrancisco", Chapter::SantaCruzSanFrancisco),
    ("SCSF", Chapter::SantaCruzSanFrancisco),
    ("SanFrancisco", Chapter::SantaCruzSanFrancisco),
    ("San Francisco", Chapter::SantaCruzSanFrancisco),
    ("Del Norte", Chapter::DelNorteOregon),
    ("Del Norte Oregon", Chapter::DelNorteOregon),
    ("Oregon", Chapter::Oregon),
    ("Washington", Chapter::Washington),
    ("Hawaii", Chapter::Hawaii),
    ("Maine", Chapter::NewEngland),
    ("New England", Chapter::NewEngland),
    ("New Jersey", Chapter::NewJersey),
    ("Corpus Christi", Chapter::CorpusChristi),
    ("Virginia Beach", Chapter::VirginiaBeach),
    ("St. Augustine", Chapter::StAugustineFlorida),
    ("St. Augustine Florida", Chapter::StAugustineFlorida),
    ("St Augustine", Chapter::StAugustineFlorida),
    ("Rockaway Beach", Chapter::RockawayBeachNewYork),
    ("Rockaway Beach New York", Chapter::RockawayBeachNewYork),
    ("Rockaway", Chapter::RockawayBeachNewYork),
    ("International", Chapter::WahineKaiInternational),
    ("Wahine Kai International", Chapter::WahineKaiInternational),
    ("WKI", Chapter::WahineKaiInternational),
];

const LEVEL_SYNONYMS: &[(&str, Level)] = &[
    ("Beginner", Level::Beginner),
    ("Beg", Level::Beginner),
    ("Intermediate", Level::Intermediate),
    ("Int", Level::Intermediate),
    ("Advanced", Level::Advanced),
    ("Adv", Level::Advanced),
    ("Expert", Level::Expert),
    ("Exp", Level::Expert),
];

const MEMBER_STATUS_SYNONYMS: &[(&str, MemberStatus)] = &[
    ("pending", MemberStatus::Pending),
    ("unconfirmed", MemberStatus::Pending),
    ("non-paying", MemberStatus::ActiveNonPaying),
    ("honorary", MemberStatus::ActiveNonPaying),
    ("board", MemberStatus::ActiveNonPaying),
    ("activenonpaying", MemberStatus::ActiveNonPaying),
    ("active: non-paying", MemberStatus::ActiveNonPaying),
    ("lifetime", MemberStatus::LifetimeMember),
    ("lifetimemember", MemberStatus::LifetimeMember),
    ("lifetime member", MemberStatus::LifetimeMember),
    ("terminated", MemberStatus::Terminated),
    ("inactive", MemberStatus::Terminated),
];

const COUNTRY_SYNONYMS: &[(&str, Country)] = &[
    ("United States", Country::UnitedStates),
    ("United States of America", Country::UnitedStates),
    ("America", Country::UnitedStates),
    ("US", Country::UnitedStates),
    ("USA", Country::UnitedStates),
    ("Canada", Country::Canada),
    ("CA", Country::Canada),
];

fn lookup<T: Copy>(table: &[(&str, T)], text: &str) -> Option<T> {
    let text = text.trim();
    table
        .iter()
        .find(|(synonym, _)| text.eq_ignore_ascii_case(synonym))
        .map(|(_, value)| *value)
}

/// Converts free text to a chapter. Never absent: unrecognized text falls
/// back to the international no-chapter sentinel.
pub fn chapter(text: &str) -> Chapter {
    lookup(CHAPTER_SYNONYMS, text).unwrap_or(Chapter::WahineKaiInternational)
}

/// Converts free text to a level; unrecognized text is absence.
pub fn level(text: &str) -> Option<Level> {
    lookup(LEVEL_SYNONYMS, text)
}

/// Converts free text to a member status. Never absent: unrecognized text
/// falls back to the active-paying default.
pub fn member_status(text: &str) -> MemberStatus {
    lookup(MEMBER_STATUS_SYNONYMS, text).unwrap_or(MemberStatus::ActivePaying)
}

/// Converts free text to an entered status. Only the first space/hyphen
/// token is inspected; unrecognized text falls back to not-entered.
pub fn entered_status(text: &str) -> EnteredStatus {
    let token = text
        .split([' ', '-'])
        .map(str::trim)
        .find(|token| !token.is_empty());

    match token {
        Some(token) => match token.to_ascii_lowercase().as_str() {
            "yes" => EnteredStatus::Accepted,
            "invited" | "sent" | "pending" => EnteredStatus::Entered,
            _ => EnteredStatus::NotEntered,
        },
        None => EnteredStatus::NotEntered,
    }
}

/// Converts free text to a country; unrecognized text is absence.
pub fn country(text: &str) -> Option<Country> {
    lookup(COUNTRY_SYNONYMS, text)
}
