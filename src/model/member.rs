//! The normalized member record and its domain invariants.

use chrono::NaiveDate;
use log::warn;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::convert::DomainValue;
use crate::model::enums::{Chapter, Country, EnteredStatus, Level, MemberStatus, Position};
use crate::reference::RegionReference;

/// Identifies one domain field of a [`MemberRecord`]. The row schema is
/// keyed by these, and [`MemberRecord::set`] routes a converted value to
/// the right place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Email,
    FirstName,
    LastName,
    FacebookName,
    PayPalName,
    PhoneNumber,
    StreetAddress,
    City,
    Region,
    Country,
    PostalCode,
    Occupation,
    Chapter,
    Birthdate,
    Level,
    Boards,
    PhotoUrl,
    Biography,
    StartedSurfing,
    Status,
    JoinedDate,
    RenewalDate,
    TerminatedDate,
    EnteredInFacebookChapter,
    EnteredInFacebookWki,
    NeedsNewMemberBag,
    WonSurfboard,
    DateSurfboardWon,
    SurfSpots,
    SocialMediaOptOut,
}

/// One normalized member entry, derived from one spreadsheet row.
///
/// Fields that validation requires are `Option` so that an absent or
/// unparsable cell stays visibly absent until classification; it is never
/// silently defaulted. `id` is assigned by the member store upon a
/// successful create.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// Always false on import, regardless of what the spreadsheet says.
    pub admin: bool,
    pub facebook_name: Option<String>,
    pub pay_pal_name: Option<String>,
    pub phone_number: Option<String>,
    pub street_address: Option<String>,
    pub city: Option<String>,
    /// Canonical region name, validated against the country's reference
    /// regions.
    pub region: Option<String>,
    pub country: Option<Country>,
    pub postal_code: Option<i64>,
    pub occupation: Option<String>,
    pub chapter: Option<Chapter>,
    pub birthdate: Option<NaiveDate>,
    pub level: Option<Level>,
    pub boards: Vec<String>,
    pub photo_url: Option<String>,
    pub biography: Option<String>,
    pub started_surfing: Option<NaiveDate>,
    pub status: MemberStatus,
    pub joined_date: Option<NaiveDate>,
    pub renewal_date: Option<NaiveDate>,
    pub terminated_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    pub date_started_position: Option<NaiveDate>,
    pub entered_in_facebook_chapter: EnteredStatus,
    pub entered_in_facebook_wki: EnteredStatus,
    pub needs_new_member_bag: bool,
    pub won_surfboard: bool,
    pub date_surfboard_won: Option<NaiveDate>,
    pub surf_spots: Vec<String>,
    pub social_media_opt_out: bool,
}

/// A violated domain invariant. Classification logs these; the import
/// report itself only carries the partitions.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("first name is required")]
    MissingFirstName,
    #[error("email is required")]
    MissingEmail,
    #[error("chapter is required")]
    MissingChapter,
    #[error("joined date is required")]
    MissingJoinedDate,
    #[error("a member with a leadership position must have a position start date")]
    MissingPositionStartDate,
    #[error("a member who won a surfboard must have the date it was won")]
    MissingSurfboardWonDate,
    #[error("a member with a region must also have a country")]
    RegionWithoutCountry,
    #[error("{region} is not a region of {country}")]
    RegionCountryMismatch { region: String, country: Country },
}

impl MemberRecord {
    /// Assigns one converted value to the field it belongs to.
    ///
    /// A value of the wrong domain type for the field is dropped with a
    /// warning; the schema owns the pairing of field and converter, so
    /// this only fires on a schema bug.
    pub fn set(&mut self, field: Field, value: DomainValue) {
        match (field, value) {
            (Field::Email, DomainValue::Text(v)) => self.email = Some(v),
            (Field::FirstName, DomainValue::Text(v)) => self.first_name = Some(v),
            (Field::LastName, DomainValue::Text(v)) => self.last_name = Some(v),
            (Field::FacebookName, DomainValue::Text(v)) => self.facebook_name = Some(v),
            (Field::PayPalName, DomainValue::Text(v)) => self.pay_pal_name = Some(v),
            (Field::PhoneNumber, DomainValue::Text(v)) => self.phone_number = Some(v),
            (Field::StreetAddress, DomainValue::Text(v)) => self.street_address = Some(v),
            (Field::City, DomainValue::Text(v)) => self.city = Some(v),
            (Field::Region, DomainValue::Text(v)) => self.region = Some(v),
            (Field::Country, DomainValue::Country(v)) => self.country = Some(v),
            (Field::PostalCode, DomainValue::Number(v)) => self.postal_code = Some(v),
            (Field::Occupation, DomainValue::Text(v)) => self.occupation = Some(v),
            (Field::Chapter, DomainValue::Chapter(v)) => self.chapter = Some(v),
            (Field::Birthdate, DomainValue::Date(v)) => self.birthdate = Some(v),
            (Field::Level, DomainValue::Level(v)) => self.level = Some(v),
            (Field::Boards, DomainValue::List(v)) => self.boards = v,
            (Field::PhotoUrl, DomainValue::Text(v)) => self.photo_url = Some(v),
            (Field::Biography, DomainValue::Text(v)) => self.biography = Some(v),
            (Field::StartedSurfing, DomainValue::Date(v)) => self.started_surfing = Some(v),
            (Field::Status, DomainValue::Status(v)) => self.status = v,
            (Field::JoinedDate, DomainValue::Date(v)) => self.joined_date = Some(v),
            (Field::RenewalDate, DomainValue::Date(v)) => self.renewal_date = Some(v),
            (Field::TerminatedDate, DomainValue::Date(v)) => self.terminated_date = Some(v),
            (Field::EnteredInFacebookChapter, DomainValue::Entered(v)) => {
                self.entered_in_facebook_chapter = v
            }
            (Field::EnteredInFacebookWki, DomainValue::Entered(v)) => {
                self.entered_in_facebook_wki = v
            }
            (Field::NeedsNewMemberBag, DomainValue::Flag(v)) => self.needs_new_member_bag = v,
            (Field::WonSurfboard, DomainValue::Flag(v)) => self.won_surfboard = v,
            (Field::DateSurfboardWon, DomainValue::Date(v)) => self.date_surfboard_won = Some(v),
            (Field::SurfSpots, DomainValue::List(v)) => self.surf_spots = v,
            (Field::SocialMediaOptOut, DomainValue::Flag(v)) => self.social_media_opt_out = v,
            (field, value) => {
                warn!("dropping value of wrong type for {field:?}: {value:?}");
            }
        }
    }

    /// Checks every domain invariant, reporting the first violation.
    ///
    /// The region/country cross-check uses the same reference table the
    /// region converter canonicalizes against.
    pub fn validate(&self, reference: &RegionReference) -> Result<(), ValidationError> {
        if is_blank(&self.first_name) {
            return Err(ValidationError::MissingFirstName);
        }
        if is_blank(&self.email) {
            return Err(ValidationError::MissingEmail);
        }
        if self.chapter.is_none() {
            return Err(ValidationError::MissingChapter);
        }
        if self.joined_date.is_none() {
            return Err(ValidationError::MissingJoinedDate);
        }
        if self.position.is_some() && self.date_started_position.is_none() {
            return Err(ValidationError::MissingPositionStartDate);
        }
        if self.won_surfboard && self.date_surfboard_won.is_none() {
            return Err(ValidationError::MissingSurfboardWonDate);
        }
        if let Some(region) = &self.region {
            let country = self.country.ok_or(ValidationError::RegionWithoutCountry)?;
            if !reference.is_region_of(country, region) {
                return Err(ValidationError::RegionCountryMismatch {
                    region: region.clone(),
                    country,
                });
            }
        }
        Ok(())
    }
}

fn is_blank(value: &Option<String>) -> bool {
    match value {
        Some(text) => text.trim().is_empty(),
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn valid_record() -> MemberRecord {
        MemberRecord {
            email: Some("kai@example.com".to_string()),
            first_name: Some("Kai".to_string()),
            chapter: Some(Chapter::SanDiego),
            joined_date: NaiveDate::from_ymd_opt(2019, 6, 1),
            ..MemberRecord::default()
        }
    }

    #[test]
    fn valid_record_passes() {
        let reference = RegionReference::new();
        assert!(valid_record().validate(&reference).is_ok());
    }

    #[test]
    fn missing_email_is_invalid() {
        let reference = RegionReference::new();
        let mut record = valid_record();
        record.email = None;
        assert_eq!(record.validate(&reference), Err(ValidationError::MissingEmail));

        record.email = Some("   ".to_string());
        assert_eq!(record.validate(&reference), Err(ValidationError::MissingEmail));
    }

    #[test]
    fn missing_first_name_is_invalid() {
        let reference = RegionReference::new();
        let mut record = valid_record();
        record.first_name = Some(String::new());
        assert_eq!(record.validate(&reference), Err(ValidationError::MissingFirstName));
    }

    #[test]
    fn missing_joined_date_is_invalid() {
        let reference = RegionReference::new();
        let mut record = valid_record();
        record.joined_date = None;
        assert_eq!(record.validate(&reference), Err(ValidationError::MissingJoinedDate));
    }

    #[test]
    fn position_requires_start_date() {
        let reference = RegionReference::new();
        let mut record = valid_record();
        record.position = Some(Position::ChapterChair);
        assert_eq!(
            record.validate(&reference),
            Err(ValidationError::MissingPositionStartDate)
        );

        record.date_started_position = NaiveDate::from_ymd_opt(2021, 1, 15);
        assert!(record.validate(&reference).is_ok());
    }

    #[test]
    fn won_surfboard_requires_date() {
        let reference = RegionReference::new();
        let mut record = valid_record();
        record.won_surfboard = true;
        assert_eq!(
            record.validate(&reference),
            Err(ValidationError::MissingSurfboardWonDate)
        );
    }

    #[test]
    fn region_requires_country() {
        let reference = RegionReference::new();
        let mut record = valid_record();
        record.region = Some("California".to_string());
        assert_eq!(
            record.validate(&reference),
            Err(ValidationError::RegionWithoutCountry)
        );
    }

    #[test]
    fn region_must_belong_to_country() {
        let reference = RegionReference::new();
        let mut record = valid_record();
        record.region = Some("California".to_string());
        record.country = Some(Country::Canada);
        assert_eq!(
            record.validate(&reference),
            Err(ValidationError::RegionCountryMismatch {
                region: "California".to_string(),
                country: Country::Canada,
            })
        );

        record.country = Some(Country::UnitedStates);
        assert!(record.validate(&reference).is_ok());
    }

    #[test]
    fn set_routes_values_to_fields() {
        let mut record = MemberRecord::default();
        record.set(Field::Email, DomainValue::Text("kai@example.com".to_string()));
        record.set(Field::WonSurfboard, DomainValue::Flag(true));
        record.set(Field::PostalCode, DomainValue::Number(92651));

        assert_eq!(record.email.as_deref(), Some("kai@example.com"));
        assert!(record.won_surfboard);
        assert_eq!(record.postal_code, Some(92651));
    }

    #[test]
    fn set_drops_mismatched_value() {
        let mut record = MemberRecord::default();
        record.set(Field::Email, DomainValue::Flag(true));
        assert_eq!(record.email, None);
    }

    #[test]
    fn serializes_with_canonical_field_names() {
        let record = valid_record();
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["email"], "kai@example.com");
        assert_eq!(json["firstName"], "Kai");
        assert_eq!(json["chapter"], "San Diego");
        assert_eq!(json["joinedDate"], "2019-06-01");
        assert_eq!(json["status"], "ActivePaying");
        assert_eq!(json["admin"], false);
    }
}
