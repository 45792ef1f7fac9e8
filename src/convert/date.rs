//! Date cell conversion.

use chrono::NaiveDate;

/// Formats tried for free-form parsing, most common first. Spreadsheet
/// exports are predominantly US-style month-first.
const FORMATS: &[&str] = &[
    // Two-digit years first: %Y happily eats "21" as the year 21
    "%m/%d/%y",
    "%m/%d/%Y",
    "%m-%d-%Y",
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%B %d, %Y",
    "%b %d, %Y",
    "%B %d %Y",
    "%d %B %Y",
];

/// Converts free text to a date.
///
/// Free-form parsing is attempted first over the known formats. If that
/// fails, a digits-only fallback applies: exactly 4 digits are a year
/// (January 1st of that year), exactly 6 digits are YYYYMM (first of that
/// month). The fallback is only taken when the cell contains nothing but
/// digits -- a cell like `"lifetime member since forever"` must not be
/// mistaken for a date.
pub fn convert(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    for format in FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(text, format) {
            return Some(date);
        }
    }

    // Fallback requires an all-digit cell
    if !text.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    match text.len() {
        4 => {
            let year = text.parse().ok()?;
            NaiveDate::from_ymd_opt(year, 1, 1)
        }
        6 => {
            let year = text[..4].parse().ok()?;
            let month = text[4..].parse().ok()?;
            NaiveDate::from_ymd_opt(year, month, 1)
        }
        _ => None,
    }
}
