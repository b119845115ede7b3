//! # Address Book
//!
//! [`AddressBook`] owns every [`Record`], keyed by the literal name string. Keys keep
//! their insertion order, and that order drives paging, lookups and export.
//!
//! ## Paging
//!
//! Pages are computed on read: [`AddressBook::pages`] yields consecutive groups of at
//! most `max_page` records, the last one possibly shorter. Page numbers are 1-based.
//!
//! ## Lookups
//!
//! Name and phone lookups are case-insensitive and come in two modes: exact equality,
//! or substring containment. Phone lookups compare the stored phone text, not the
//! phone code.

use crate::error::{BookError, Result};
use crate::record::{ExportedRecord, Record};
use tracing::{debug, info};

pub const DEFAULT_PAGE_SIZE: usize = 3;

#[derive(Debug, Clone)]
pub struct AddressBook {
    records: Vec<Record>,
    max_page: usize,
}

impl Default for AddressBook {
    fn default() -> Self {
        Self::new()
    }
}

fn matches(haystack: &str, query: &str, use_substring: bool) -> bool {
    let haystack = haystack.to_lowercase();
    if use_substring {
        haystack.contains(query)
    } else {
        haystack == query
    }
}

impl AddressBook {
    pub fn new() -> Self {
        Self::with_page_size(DEFAULT_PAGE_SIZE)
    }

    /// A page size of 0 is treated as 1.
    pub fn with_page_size(max_page: usize) -> Self {
        Self {
            records: Vec::new(),
            max_page: max_page.max(1),
        }
    }

    pub fn page_size(&self) -> usize {
        self.max_page
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Inserts `record`, replacing any record with the same name in place.
    pub fn add_record(&mut self, record: Record) {
        let key = record.name().as_str();
        match self.records.iter().position(|r| r.name().as_str() == key) {
            Some(idx) => {
                debug!(name = key, "replacing existing record");
                self.records[idx] = record;
            }
            None => {
                debug!(name = key, "adding record");
                self.records.push(record);
            }
        }
    }

    pub fn pages(&self) -> std::slice::Chunks<'_, Record> {
        self.records.chunks(self.max_page)
    }

    pub fn page_count(&self) -> usize {
        self.records.len().div_ceil(self.max_page)
    }

    /// Returns the 1-based page `number`.
    pub fn page(&self, number: usize) -> Result<&[Record]> {
        if number == 0 {
            return Err(self.out_of_range(number));
        }
        self.pages()
            .nth(number - 1)
            .ok_or_else(|| self.out_of_range(number))
    }

    fn out_of_range(&self, requested: usize) -> BookError {
        BookError::PageOutOfRange {
            requested,
            pages: self.page_count(),
        }
    }

    pub fn find_by_name(&self, query: &str, use_substring: bool) -> Vec<&Record> {
        let query = query.to_lowercase();
        self.records
            .iter()
            .filter(|r| matches(r.name().as_str(), &query, use_substring))
            .collect()
    }

    pub fn find_by_name_mut(&mut self, query: &str, use_substring: bool) -> Vec<&mut Record> {
        let query = query.to_lowercase();
        self.records
            .iter_mut()
            .filter(|r| matches(r.name().as_str(), &query, use_substring))
            .collect()
    }

    /// Records with at least one phone matching `query`, each listed once.
    pub fn find_by_phone(&self, query: &str, use_substring: bool) -> Vec<&Record> {
        let query = query.to_lowercase();
        self.records
            .iter()
            .filter(|r| {
                r.phones()
                    .iter()
                    .any(|p| matches(p.as_str(), &query, use_substring))
            })
            .collect()
    }

    pub fn export(&self) -> Vec<ExportedRecord> {
        self.records.iter().map(Record::to_exported).collect()
    }

    /// Replaces the whole book with `entries`.
    ///
    /// Entries without a name are skipped. The first invalid entry aborts the load with
    /// its 0-based index, and the book is left empty.
    pub fn load_exported(&mut self, entries: &[ExportedRecord]) -> Result<()> {
        self.records.clear();
        for (index, entry) in entries.iter().enumerate() {
            match Record::from_exported(entry) {
                Ok(Some(record)) => self.add_record(record),
                Ok(None) => debug!(index, "skipping entry without a name"),
                Err(source) => {
                    self.records.clear();
                    return Err(BookError::InvalidRecord { index, source });
                }
            }
        }
        info!(records = self.records.len(), "address book loaded");
        Ok(())
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::fields::{Birthday, Name, Phone};

    fn record(name: &str, phones: &[&str]) -> Record {
        let mut r = Record::new(Name::new(name).unwrap());
        for p in phones {
            r.add_phone(Phone::new(*p).unwrap());
        }
        r
    }

    fn book_of(n: usize, page_size: usize) -> AddressBook {
        let mut book = AddressBook::with_page_size(page_size);
        for i in 0..n {
            book.add_record(record(&format!("Contact {}", i + 1), &[]));
        }
        book
    }

    fn names(records: &[&Record]) -> Vec<String> {
        records.iter().map(|r| r.name().to_string()).collect()
    }

    #[test]
    fn test_default_page_size() {
        assert_eq!(AddressBook::new().page_size(), 3);
        assert_eq!(AddressBook::with_page_size(0).page_size(), 1);
    }

    #[test]
    fn test_add_record_overwrites_in_place() {
        let mut book = AddressBook::new();
        book.add_record(record("Ann", &["0501234567"]));
        book.add_record(record("Bob", &[]));
        book.add_record(record("Ann", &["0661234567"]));

        assert_eq!(book.len(), 2);
        let first = book.iter().next().unwrap();
        assert_eq!(first.name().as_str(), "Ann");
        assert_eq!(first.phones()[0].as_str(), "0661234567");
    }

    #[test]
    fn test_keys_are_case_sensitive() {
        let mut book = AddressBook::new();
        book.add_record(record("ann", &[]));
        book.add_record(record("Ann", &[]));
        assert_eq!(book.len(), 2);
        assert_eq!(book.find_by_name("ANN", false).len(), 2);
    }

    #[test]
    fn test_page_count_and_sizes() {
        for n in 0..10 {
            for p in 1..5 {
                let book = book_of(n, p);
                let pages: Vec<&[Record]> = book.pages().collect();
                assert_eq!(pages.len(), n.div_ceil(p));
                assert_eq!(book.page_count(), pages.len());
                if let Some(last) = pages.last() {
                    let expected = if n % p == 0 { p } else { n % p };
                    assert_eq!(last.len(), expected);
                }
                assert!(pages[..pages.len().saturating_sub(1)]
                    .iter()
                    .all(|page| page.len() == p));
            }
        }
    }

    #[test]
    fn test_pages_follow_insertion_order() {
        let book = book_of(5, 2);
        let page = book.page(3).unwrap();
        assert_eq!(page.len(), 1);
        assert_eq!(page[0].name().as_str(), "Contact 5");
        assert_eq!(book.page(1).unwrap()[1].name().as_str(), "Contact 2");
    }

    #[test]
    fn test_page_out_of_range() {
        let book = book_of(7, 3);
        assert!(book.page(3).is_ok());
        assert!(matches!(
            book.page(4),
            Err(BookError::PageOutOfRange {
                requested: 4,
                pages: 3
            })
        ));
        assert!(matches!(
            book.page(0),
            Err(BookError::PageOutOfRange { requested: 0, .. })
        ));
        assert!(AddressBook::new().page(1).is_err());
    }

    #[test]
    fn test_find_by_name_exact_and_substring() {
        let mut book = AddressBook::new();
        book.add_record(record("Ann", &[]));
        book.add_record(record("Joanna", &[]));
        book.add_record(record("Bob", &[]));

        assert_eq!(names(&book.find_by_name("ann", false)), vec!["Ann"]);
        assert_eq!(
            names(&book.find_by_name("ANN", true)),
            vec!["Ann", "Joanna"]
        );
        assert!(book.find_by_name("An", false).is_empty());
    }

    #[test]
    fn test_find_by_phone_uses_literal_text() {
        let mut book = AddressBook::new();
        book.add_record(record("Ann", &["+380501112233", "0501112233"]));
        book.add_record(record("Bob", &["0661234567"]));

        assert_eq!(names(&book.find_by_phone("501112233", true)), vec!["Ann"]);
        assert_eq!(
            names(&book.find_by_phone("0501112233", false)),
            vec!["Ann"]
        );
        // exact mode does not normalize
        assert!(book.find_by_phone("501112233", false).is_empty());
        assert_eq!(names(&book.find_by_phone("0", true)), vec!["Ann", "Bob"]);
    }

    #[test]
    fn test_find_by_name_mut_edits_in_place() {
        let mut book = AddressBook::new();
        book.add_record(record("Ann", &["0501234567", "0661234567"]));
        for r in book.find_by_name_mut("ann", false) {
            r.edit_phone(Phone::new("0991234567").unwrap());
        }
        let ann = book.find_by_name("Ann", false)[0];
        assert_eq!(ann.phones().len(), 1);
    }

    #[test]
    fn test_scenario_add_then_find() {
        let mut book = AddressBook::new();
        let mut ann = Record::new(Name::new("Ann").unwrap());
        ann.add_phone(Phone::new("+380501112233").unwrap());
        book.add_record(ann);

        let found = book.find_by_name("Ann", true);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].phones()[0].as_str(), "+380501112233");
    }

    #[test]
    fn test_export_then_load_roundtrip() {
        let mut book = AddressBook::new();
        let mut ann = Record::with_birthday(
            Name::new("Ann").unwrap(),
            Birthday::new("1990-3-7").unwrap(),
        );
        ann.add_phone(Phone::new("+380501112233").unwrap());
        ann.add_phone(Phone::new("0661234567").unwrap());
        book.add_record(ann);
        book.add_record(record("Bob", &[]));

        let mut restored = AddressBook::new();
        restored.load_exported(&book.export()).unwrap();
        assert_eq!(restored.export(), book.export());
    }

    #[test]
    fn test_load_skips_entries_without_name() {
        let entries = vec![
            ExportedRecord::default().with_birthday("1990-1-1"),
            ExportedRecord::named("Ann"),
        ];
        let mut book = AddressBook::new();
        book.load_exported(&entries).unwrap();
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_failed_load_reports_index_and_empties_book() {
        let mut book = AddressBook::new();
        book.add_record(record("Old", &[]));

        let entries = vec![
            ExportedRecord::named("Ann"),
            ExportedRecord::named("Cid"),
            ExportedRecord::named("Bob").with_birthday("2999-01-01"),
        ];
        let err = book.load_exported(&entries).unwrap_err();
        match err {
            BookError::InvalidRecord { index, source } => {
                assert_eq!(index, 2);
                assert!(matches!(source, ValidationError::FutureBirthday(_)));
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(book.is_empty());
    }

    #[test]
    fn test_null_name_or_birthday_aborts_load() {
        let mut book = AddressBook::new();
        let entries: Vec<ExportedRecord> = serde_json::from_str(
            r#"[{"name": "Ann"}, {"name": null, "phones": ["0501112233"]}]"#,
        )
        .unwrap();
        match book.load_exported(&entries).unwrap_err() {
            BookError::InvalidRecord { index, source } => {
                assert_eq!(index, 1);
                assert_eq!(source, ValidationError::Null { field: "Name" });
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(book.is_empty());

        let entries: Vec<ExportedRecord> =
            serde_json::from_str(r#"[{"name": "Ann", "birthday": null}]"#).unwrap();
        let err = book.load_exported(&entries).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation error in 0 record: Birthday cannot be None"
        );
    }
}
