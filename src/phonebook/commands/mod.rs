//! # Command Layer
//!
//! One module per REPL command. Each `run` takes the
//! [`AddressBook`](crate::book::AddressBook) explicitly plus
//! already-split arguments and returns a [`CmdResult`]; failures come back as typed
//! [`BookError`](crate::error::BookError)s and are turned into text by the session.
//!
//! Nothing in here prints.

use crate::record::Record;
use chrono::NaiveDate;

pub mod add;
pub mod birthday;
pub mod change;
pub mod find;
pub mod hello;
pub mod phone;
pub mod show;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A line of listing output: a page banner or a rendered record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListedLine {
    PageHeader(usize),
    Record(String),
}

impl std::fmt::Display for ListedLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListedLine::PageHeader(n) => write!(f, "====\tpage: {}\t====", n),
            ListedLine::Record(line) => f.write_str(line),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CmdResult {
    pub listed: Vec<ListedLine>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_listed(mut self, listed: Vec<ListedLine>) -> Self {
        self.listed = listed;
        self
    }

    /// Everything as plain text, listing first, one entry per line.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for line in &self.listed {
            out.push_str(&line.to_string());
            out.push('\n');
        }
        for message in &self.messages {
            out.push_str(&message.content);
            out.push('\n');
        }
        out
    }
}

/// Calendar context for rendering "next birthday in N days".
#[derive(Debug, Clone, Copy)]
pub struct Today(pub NaiveDate);

impl Today {
    pub fn local() -> Self {
        Self(chrono::Local::now().date_naive())
    }
}

pub(crate) fn render<'a>(
    records: impl IntoIterator<Item = &'a Record>,
    today: Today,
) -> Vec<ListedLine> {
    records
        .into_iter()
        .map(|r| ListedLine::Record(r.line_at(today.0)))
        .collect()
}

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::book::AddressBook;
    use crate::fields::{Birthday, Name, Phone};

    pub fn today() -> Today {
        Today(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())
    }

    pub struct BookFixture {
        pub book: AddressBook,
    }

    impl Default for BookFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl BookFixture {
        pub fn new() -> Self {
            Self {
                book: AddressBook::new(),
            }
        }

        pub fn with_page_size(page_size: usize) -> Self {
            Self {
                book: AddressBook::with_page_size(page_size),
            }
        }

        pub fn with_contact(mut self, name: &str, phones: &[&str]) -> Self {
            let mut record = Record::new(Name::new(name).unwrap());
            for phone in phones {
                record.add_phone(Phone::new(*phone).unwrap());
            }
            self.book.add_record(record);
            self
        }

        pub fn with_birthday_contact(mut self, name: &str, phone: &str, birthday: &str) -> Self {
            let mut record = Record::with_birthday(
                Name::new(name).unwrap(),
                Birthday::new_at(birthday, today().0).unwrap(),
            );
            record.add_phone(Phone::new(phone).unwrap());
            self.book.add_record(record);
            self
        }

        pub fn with_contacts(mut self, count: usize) -> Self {
            for i in 0..count {
                let name = format!("Contact {}", i + 1);
                let phone = format!("050000{:04}", i + 1);
                self = self.with_contact(&name, &[&phone]);
            }
            self
        }
    }
}
