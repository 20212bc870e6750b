use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("field {0} is required")]
    MissingField(&'static str),
    #[error("field {field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },
    #[error("invalid date for {field}: '{value}'. expected YYYY-MM-DD")]
    InvalidDate { field: &'static str, value: String },
    #[error("end_date {end} is before start_date {start}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },
    #[error("invalid hackathon status: '{0}'. expected submitted, approved or rejected")]
    InvalidStatus(String),
    #[error("invalid upload: {0}")]
    InvalidUpload(String),
}
