use chrono::NaiveDate;

use super::DomainError;

pub const DATE_FORMAT: &str = "%Y-%m-%d";
/// Width of the short text columns (`varchar(255)` where the backend has one).
pub const MAX_FIELD_CHARS: usize = 255;

/// Unvalidated submission fields as they arrive from a public form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HackathonInput {
    pub name: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub location: Option<String>,
    pub venue: Option<String>,
    pub organizer_name: Option<String>,
    pub organizer_email: Option<String>,
    pub image_url: Option<String>,
}

/// The column set persisted for a new hackathon. Status is not part of it:
/// every new submission starts as `submitted`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewHackathon {
    pub name: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub location: String,
    pub venue: String,
    pub organizer_name: String,
    pub organizer_email: String,
    pub image_url: Option<String>,
}

impl TryFrom<HackathonInput> for NewHackathon {
    type Error = DomainError;

    fn try_from(input: HackathonInput) -> Result<Self, Self::Error> {
        let name = require_short("name", input.name)?;
        let start_date = parse_date("start_date", require("start_date", input.start_date)?)?;
        let end_date = parse_date("end_date", require("end_date", input.end_date)?)?;
        let location = require_short("location", input.location)?;
        let venue = require_short("venue", input.venue)?;
        let organizer_name = require_short("organizer_name", input.organizer_name)?;
        let organizer_email = require_short("organizer_email", input.organizer_email)?;

        if end_date < start_date {
            return Err(DomainError::InvalidDateRange {
                start: start_date,
                end: end_date,
            });
        }

        Ok(Self {
            name,
            description: input.description.unwrap_or_default(),
            start_date,
            end_date,
            location,
            venue,
            organizer_name,
            organizer_email,
            image_url: optional(input.image_url),
        })
    }
}

/// Trims a required field and rejects it when absent or blank.
pub(crate) fn require(field: &'static str, value: Option<String>) -> Result<String, DomainError> {
    match value.map(|v| v.trim().to_string()) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(DomainError::MissingField(field)),
    }
}

/// [`require`] plus the [`MAX_FIELD_CHARS`] column limit.
pub(crate) fn require_short(
    field: &'static str,
    value: Option<String>,
) -> Result<String, DomainError> {
    let value = require(field, value)?;
    if value.chars().count() > MAX_FIELD_CHARS {
        return Err(DomainError::TooLong {
            field,
            max: MAX_FIELD_CHARS,
        });
    }
    Ok(value)
}

fn optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_date(field: &'static str, value: String) -> Result<NaiveDate, DomainError> {
    NaiveDate::parse_from_str(&value, DATE_FORMAT)
        .map_err(|_| DomainError::InvalidDate { field, value })
}
