use super::{CmdResult, ListedLine};
use crate::book::AddressBook;
use crate::error::{BookError, Result};
use crate::fields::Phone;

/// Lists the phones of every contact named `name`.
pub fn run(book: &AddressBook, name: &str) -> Result<CmdResult> {
    let matches = book.find_by_name(name, false);
    if matches.is_empty() {
        return Err(BookError::NotFound(name.to_string()));
    }
    let listed = matches
        .into_iter()
        .map(|r| {
            let phones: Vec<&str> = r.phones().iter().map(Phone::as_str).collect();
            ListedLine::Record(format!("{}\t| {}", r.name(), phones.join(", ")))
        })
        .collect();
    Ok(CmdResult::default().with_listed(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fixtures::BookFixture;

    #[test]
    fn lists_phones_of_matching_contact() {
        let book = BookFixture::new()
            .with_contact("Ann", &["0501112233", "0661112233"])
            .with_contact("Bob", &["0991112233"])
            .book;
        let result = run(&book, "ann").unwrap();
        assert_eq!(result.to_text(), "Ann\t| 0501112233, 0661112233\n");
    }

    #[test]
    fn unknown_name_is_not_found() {
        let book = AddressBook::new();
        assert!(matches!(run(&book, "Ann"), Err(BookError::NotFound(_))));
    }
}
