use crate::error::ValidationError;
use crate::fields::{phone_code, Birthday, Name, Phone};
use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// One contact in the book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: Name,
    phones: Vec<Phone>,
    birthday: Option<Birthday>,
}

/// Shape of a record inside the book file.
///
/// `name` and `birthday` keep an absent key (`None`) apart from an explicit `null`
/// (`Some(None)`). Entries without a name are skipped on load; a `null` name or
/// birthday is rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportedRecord {
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub birthday: Option<Option<String>>,
    #[serde(default)]
    pub phones: Vec<String>,
}

impl ExportedRecord {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(Some(name.into())),
            ..Self::default()
        }
    }

    pub fn with_birthday(mut self, birthday: impl Into<String>) -> Self {
        self.birthday = Some(Some(birthday.into()));
        self
    }

    pub fn with_phones(mut self, phones: &[&str]) -> Self {
        self.phones = phones.iter().map(|p| p.to_string()).collect();
        self
    }

    /// The name, when the key is present and not `null`.
    pub fn name(&self) -> Option<&str> {
        self.name.as_ref()?.as_deref()
    }
}

// Only runs when the key is present, so `null` becomes `Some(None)`.
fn present<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

impl Record {
    pub fn new(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn with_birthday(name: Name, birthday: Birthday) -> Self {
        Self {
            birthday: Some(birthday),
            ..Self::new(name)
        }
    }

    /// Builds a record from raw strings, validating every field.
    pub fn from_exported(data: &ExportedRecord) -> Result<Option<Self>, ValidationError> {
        let name = match &data.name {
            None => return Ok(None),
            Some(None) => return Err(ValidationError::Null { field: Name::FIELD }),
            Some(Some(name)) => name,
        };
        let mut record = Record::new(Name::new(name.as_str())?);
        match &data.birthday {
            None => {}
            Some(None) => return Err(ValidationError::Null { field: Birthday::FIELD }),
            Some(Some(birthday)) => record.set_birthday(Birthday::new(birthday.as_str())?),
        }
        for phone in &data.phones {
            record.add_phone(Phone::new(phone.as_str())?);
        }
        Ok(Some(record))
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    pub fn add_phone(&mut self, phone: Phone) {
        self.phones.push(phone);
    }

    /// Replaces every phone on the record with `phone`.
    pub fn edit_phone(&mut self, phone: Phone) {
        self.phones.clear();
        self.phones.push(phone);
    }

    /// Removes the first phone sharing `number`'s phone code. Returns whether one was removed.
    pub fn delete_phone(&mut self, number: &str) -> bool {
        let code = phone_code(number);
        match self.phones.iter().position(|p| p.phone_code() == code) {
            Some(idx) => {
                self.phones.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn set_birthday(&mut self, birthday: Birthday) {
        self.birthday = Some(birthday);
    }

    /// Days until the next birthday, counted from the local date.
    pub fn days_to_birthday(&self) -> Option<i64> {
        self.days_to_birthday_from(Local::now().date_naive())
    }

    /// Days from `today` until the next birthday; `Some(0)` when it is today.
    ///
    /// Returns `None` when no birthday is set.
    pub fn days_to_birthday_from(&self, today: NaiveDate) -> Option<i64> {
        let born = self.birthday.as_ref()?.date();
        let this_year = anniversary(born, today.year())?;
        let next = if this_year >= today {
            this_year
        } else {
            anniversary(born, today.year() + 1)?
        };
        Some((next - today).num_days())
    }

    /// Display line as of `today`.
    pub fn line_at(&self, today: NaiveDate) -> String {
        let phones: Vec<&str> = self.phones.iter().map(Phone::as_str).collect();
        let mut line = format!("{}\t| {}", self.name, phones.join(", "));
        if let Some(birthday) = &self.birthday {
            let days = self.days_to_birthday_from(today).unwrap_or_default();
            line.push_str(&format!(
                "\t| {}\t| next birthday in {} days",
                birthday, days
            ));
        }
        line
    }

    pub fn to_exported(&self) -> ExportedRecord {
        ExportedRecord {
            name: Some(Some(self.name.as_str().to_string())),
            birthday: self.birthday.as_ref().map(|b| Some(b.as_str().to_string())),
            phones: self.phones.iter().map(|p| p.as_str().to_string()).collect(),
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.line_at(Local::now().date_naive()))
    }
}

// 29 February falls back to 28 February in non-leap years.
fn anniversary(born: NaiveDate, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, born.month(), born.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, born.month(), born.day() - 1))
}
