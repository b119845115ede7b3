//! Validated field types.
//!
//! A [`Name`], [`Phone`] or [`Birthday`] can only ever hold a well-formed value: the
//! constructors return a [`ValidationError`] instead of building an invalid field, and
//! `set` re-runs the same checks, keeping the previous value on failure.
//!
//! All three serialize as their raw string.

use crate::error::ValidationError;
use chrono::{Local, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Serialize, Serializer};
use std::fmt;

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9]{10,14}$").expect("valid phone regex"));
static BIRTHDAY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{4})-([0-9]{1,2})-([0-9]{1,2})$").expect("valid birthday regex")
});

fn ensure_not_blank(value: &str, field: &'static str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Empty { field });
    }
    Ok(())
}

/// Contact name. Stored verbatim; must contain something other than whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name(String);

impl Name {
    pub const FIELD: &'static str = "Name";

    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        ensure_not_blank(&value, Self::FIELD)?;
        Ok(Self(value))
    }

    pub fn set(&mut self, value: impl Into<String>) -> Result<(), ValidationError> {
        *self = Self::new(value)?;
        Ok(())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Phone number: an optional leading `+` followed by 10 to 14 digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    pub const FIELD: &'static str = "Phone";

    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        ensure_not_blank(&value, Self::FIELD)?;
        if !PHONE_RE.is_match(&value) {
            return Err(ValidationError::InvalidPhone(value));
        }
        Ok(Self(value))
    }

    pub fn set(&mut self, value: impl Into<String>) -> Result<(), ValidationError> {
        *self = Self::new(value)?;
        Ok(())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Loose comparison key for this number. See [`phone_code`].
    pub fn phone_code(&self) -> &str {
        phone_code(&self.0)
    }
}

/// Strips leading `+` and then leading `0` characters.
///
/// This is deliberately liberal: `+0501234567`, `0501234567` and `501234567` all share
/// the key `501234567`, while `+380501234567` does not. It is not E.164 normalization.
pub fn phone_code(number: &str) -> &str {
    number.trim_start_matches('+').trim_start_matches('0')
}

/// Birthday in `YYYY-M-D` form (month and day may have one or two digits).
///
/// Invariant: the date exists in the calendar and is not after the day it was validated.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Birthday {
    raw: String,
    date: NaiveDate,
}

impl Birthday {
    pub const FIELD: &'static str = "Birthday";

    /// Validates against the local calendar date.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        Self::new_at(value, Local::now().date_naive())
    }

    /// Validates against an explicit `today`.
    pub fn new_at(value: impl Into<String>, today: NaiveDate) -> Result<Self, ValidationError> {
        let raw = value.into();
        ensure_not_blank(&raw, Self::FIELD)?;

        let caps = BIRTHDAY_RE
            .captures(&raw)
            .ok_or_else(|| ValidationError::InvalidBirthdayFormat(raw.clone()))?;
        let parts = (
            caps[1].parse::<i32>(),
            caps[2].parse::<u32>(),
            caps[3].parse::<u32>(),
        );
        let date = match parts {
            // year 0 is outside the calendar this format allows
            (Ok(y), Ok(m), Ok(d)) if y >= 1 => NaiveDate::from_ymd_opt(y, m, d),
            _ => None,
        }
        .ok_or_else(|| ValidationError::InvalidDate(raw.clone()))?;

        if date > today {
            return Err(ValidationError::FutureBirthday(raw));
        }
        Ok(Self { raw, date })
    }

    pub fn set(&mut self, value: impl Into<String>) -> Result<(), ValidationError> {
        *self = Self::new(value)?;
        Ok(())
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

// Serde support - serialize as the raw string
impl Serialize for Name {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl Serialize for Phone {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.raw.serialize(serializer)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
