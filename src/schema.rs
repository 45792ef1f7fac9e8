//! Row schema: binds each domain field to its accepted header aliases,
//! converter, required-ness and default.
//!
//! Alias lookup is case-insensitive and tried in declaration order; the
//! first alias present in the header row wins. A required field with no
//! matching header (or an unparsable cell) is left absent so that
//! validation rejects the record -- required-ness is never enforced here.

use std::sync::Arc;

use crate::convert::{self, DomainValue};
use crate::model::enums::{Chapter, Country, EnteredStatus, MemberStatus};
use crate::model::member::Field;
use crate::reference::RegionReference;

type Convert = Box<dyn Fn(&str) -> Option<DomainValue> + Send + Sync>;

/// Declares how one domain field is populated from a raw row.
pub struct FieldSpec {
    pub field: Field,
    pub aliases: &'static [&'static str],
    pub required: bool,
    pub default: Option<DomainValue>,
    convert: Convert,
}

impl FieldSpec {
    fn required(field: Field, aliases: &'static [&'static str], convert: Convert) -> Self {
        // A required field must surface as a validation failure when
        // absent, never be silently defaulted.
        Self { field, aliases, required: true, default: None, convert }
    }

    fn optional(field: Field, aliases: &'static [&'static str], convert: Convert) -> Self {
        Self { field, aliases, required: false, default: None, convert }
    }

    fn with_default(
        field: Field,
        aliases: &'static [&'static str],
        convert: Convert,
        default: DomainValue,
    ) -> Self {
        Self { field, aliases, required: false, default: Some(default), convert }
    }

    /// Runs this field's converter over one raw cell.
    pub fn convert(&self, raw: &str) -> Option<DomainValue> {
        (self.convert)(raw)
    }
}

/// The full field map for one member record, in declaration order.
pub struct FieldSchema {
    specs: Vec<FieldSpec>,
}

impl FieldSchema {
    pub fn new(reference: Arc<RegionReference>) -> Self {
        let region = {
            let reference = Arc::clone(&reference);
            Box::new(move |raw: &str| {
                convert::region::convert(raw, &reference).map(DomainValue::Text)
            })
        };

        let specs = vec![
            FieldSpec::required(Field::Email, &["Email"], text()),
            FieldSpec::required(Field::FirstName, &["FirstName", "First Name"], text()),
            FieldSpec::optional(Field::LastName, &["LastName", "Last Name"], text()),
            FieldSpec::optional(
                Field::FacebookName,
                &["FacebookName", "Facebook Name", "FB Name"],
                text(),
            ),
            FieldSpec::optional(Field::PayPalName, &["PayPalName", "Pay Pal Name"], text()),
            FieldSpec::optional(Field::PhoneNumber, &["PhoneNumber", "Phone Number"], phone()),
            FieldSpec::optional(
                Field::StreetAddress,
                &["StreetAddress", "Street Address", "Address"],
                text(),
            ),
            FieldSpec::optional(Field::City, &["City"], text()),
            FieldSpec::optional(
                Field::Region,
                &["Region", "State", "Province", "State or Province"],
                region,
            ),
            FieldSpec::with_default(
                Field::Country,
                &["Country"],
                country(),
                DomainValue::Country(Country::UnitedStates),
            ),
            FieldSpec::optional(
                Field::PostalCode,
                &["PostalCode", "Postal Code", "Post Code", "ZIP Code"],
                postal(),
            ),
            FieldSpec::optional(Field::Occupation, &["Occupation", "Profession"], text()),
            FieldSpec::with_default(
                Field::Chapter,
                &["Chapter"],
                chapter(),
                DomainValue::Chapter(Chapter::WahineKaiInternational),
            ),
            FieldSpec::optional(Field::Birthdate, &["Birthdate", "Birthday", "bday"], date()),
            FieldSpec::optional(Field::Level, &["Level"], level()),
            FieldSpec::optional(Field::Boards, &["Boards", "Board(s)"], list()),
            FieldSpec::optional(Field::PhotoUrl, &["PhotoUrl", "Photo Url", "Photo URL"], text()),
            FieldSpec::optional(Field::Biography, &["Bio", "Biography"], text()),
            FieldSpec::optional(
                Field::StartedSurfing,
                &["Started Surfing", "StartedSurfing", "Started Surfing Date"],
                date(),
            ),
            FieldSpec::with_default(
                Field::Status,
                &["Status", "Member Status"],
                status(),
                DomainValue::Status(MemberStatus::ActivePaying),
            ),
            FieldSpec::required(Field::JoinedDate, &["Joined Date", "JoinedDate", "Joined"], date()),
            FieldSpec::optional(
                Field::RenewalDate,
                &["Renewal Date", "RenewalDate", "Renewal"],
                date(),
            ),
            FieldSpec::optional(
                Field::TerminatedDate,
                &["Terminated Date", "TerminatedDate", "Terminated"],
                date(),
            ),
            FieldSpec::with_default(
                Field::EnteredInFacebookChapter,
                &[
                    "EnteredInLocalChapter",
                    "LocalChapter",
                    "Local Chapter",
                    "Entered in Local Facebook Chapter?",
                    "Entered in Local Chapter",
                ],
                entered(),
                DomainValue::Entered(EnteredStatus::NotEntered),
            ),
            FieldSpec::with_default(
                Field::EnteredInFacebookWki,
                &[
                    "EnteredInFacebookWki",
                    "FacebookWki",
                    "Facebook Wki",
                    "Entered in Facebook Wki",
                    "Entered in Facebook Wki?",
                    "Entered in Facebook WKI",
                    "Entered in Facebook WKI?",
                    "WKI",
                    "Entered in WKI",
                ],
                entered(),
                DomainValue::Entered(EnteredStatus::NotEntered),
            ),
            FieldSpec::with_default(
                Field::NeedsNewMemberBag,
                &[
                    "NeedsNewMemberBag",
                    "Needs New Member Bag",
                    "Needs A New Member Bag",
                    "Needs A New Member Bag?",
                ],
                flag(),
                DomainValue::Flag(false),
            ),
            FieldSpec::with_default(
                Field::WonSurfboard,
                &[
                    "WonSurfboard",
                    "Won A Surfboard?",
                    "Won A Surfboard",
                    "Won Surfboard?",
                    "Won Surfboard",
                ],
                flag(),
                DomainValue::Flag(false),
            ),
            FieldSpec::optional(
                Field::DateSurfboardWon,
                &[
                    "Surfboard Won Date",
                    "SurfboardWonDate",
                    "Date Surfboard Won",
                    "DateSurfboardWon",
                ],
                date(),
            ),
            FieldSpec::optional(
                Field::SurfSpots,
                &["SurfSpots", "Where", "Surf Spots", "Favorite Surf Spots"],
                list(),
            ),
            FieldSpec::with_default(
                Field::SocialMediaOptOut,
                &[
                    "SocialMediaOptOut",
                    "Opt Out of Social Media?",
                    "Opt Out of Social Media",
                ],
                flag(),
                DomainValue::Flag(false),
            ),
        ];

        Self { specs }
    }

    pub fn specs(&self) -> &[FieldSpec] {
        &self.specs
    }

    /// Resolves each spec against a header row, yielding the column index
    /// of the first alias present (case-insensitive), if any.
    pub fn bind(&self, headers: &[String]) -> Vec<Option<usize>> {
        self.specs
            .iter()
            .map(|spec| {
                spec.aliases.iter().find_map(|alias| {
                    headers
                        .iter()
                        .position(|header| header.trim().eq_ignore_ascii_case(alias))
                })
            })
            .collect()
    }
}

fn text() -> Convert {
    Box::new(|raw| Some(DomainValue::Text(raw.to_string())))
}

fn flag() -> Convert {
    Box::new(|raw| Some(DomainValue::Flag(convert::boolean::convert(raw))))
}

fn date() -> Convert {
    Box::new(|raw| convert::date::convert(raw).map(DomainValue::Date))
}

fn phone() -> Convert {
    Box::new(|raw| convert::phone::convert(raw).map(DomainValue::Text))
}

fn postal() -> Convert {
    Box::new(|raw| convert::postal::convert(raw).map(DomainValue::Number))
}

fn list() -> Convert {
    Box::new(|raw| Some(DomainValue::List(convert::text_list::convert(raw))))
}

fn chapter() -> Convert {
    Box::new(|raw| Some(DomainValue::Chapter(convert::enums::chapter(raw))))
}

fn level() -> Convert {
    Box::new(|raw| convert::enums::level(raw).map(DomainValue::Level))
}

fn status() -> Convert {
    Box::new(|raw| Some(DomainValue::Status(convert::enums::member_status(raw))))
}

fn entered() -> Convert {
    Box::new(|raw| Some(DomainValue::Entered(convert::enums::entered_status(raw))))
}

fn country() -> Convert {
    Box::new(|raw| convert::enums::country(raw).map(DomainValue::Country))
}
