// Age computation from date of birth
// Whole elapsed calendar years; a birthday not yet reached this year does not count.

use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime};

use crate::constants::{DOB_FORMATS, MIN_EDIT_AGE};
use crate::error::{CelebrityError, Result};

/// Source of "today" for age evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Clock {
    /// Local calendar date at the moment of evaluation
    #[default]
    System,
    /// Pinned date, used by tests and reproducible renders
    Fixed(NaiveDate),
}

impl Clock {
    pub fn today(&self) -> NaiveDate {
        match self {
            Clock::System => Local::now().date_naive(),
            Clock::Fixed(date) => *date,
        }
    }
}

/// Parse a date-of-birth string.
/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps and `YYYY-MM-DDTHH:MM:SS`.
pub fn parse_dob(dob: &str) -> Result<NaiveDate> {
    let trimmed = dob.trim();

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, DOB_FORMATS[0]) {
        return Ok(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, DOB_FORMATS[1]) {
        return Ok(dt.date());
    }

    Err(CelebrityError::InvalidDate(dob.to_string()))
}

/// Whole years between `dob` and `today`.
pub fn years_between(dob: NaiveDate, today: NaiveDate) -> Result<u32> {
    if dob > today {
        return Err(CelebrityError::InvalidDate(format!("{} is in the future", dob)));
    }

    let mut age = today.year() - dob.year();
    if (today.month(), today.day()) < (dob.month(), dob.day()) {
        age -= 1;
    }

    Ok(age as u32)
}

/// Age in whole years for a date-of-birth string evaluated on `today`.
pub fn age_on(dob: &str, today: NaiveDate) -> Result<u32> {
    years_between(parse_dob(dob)?, today)
}

/// Whether an age qualifies for editing
pub fn is_adult(age: u32) -> bool {
    age >= MIN_EDIT_AGE
}
