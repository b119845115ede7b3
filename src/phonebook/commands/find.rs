use super::{render, CmdResult, Today};
use crate::book::AddressBook;
use crate::error::{BookError, Result};

/// Substring search: names first, then phone numbers if no name matched.
pub fn run(book: &AddressBook, query: &str, today: Today) -> Result<CmdResult> {
    let mut matches = book.find_by_name(query, true);
    if matches.is_empty() {
        matches = book.find_by_phone(query, true);
    }
    if matches.is_empty() {
        return Err(BookError::NotFound(query.to_string()));
    }
    Ok(CmdResult::default().with_listed(render(matches, today)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fixtures::{today, BookFixture};

    fn fixture() -> AddressBook {
        BookFixture::new()
            .with_contact("Ann", &["+380501112233"])
            .with_contact("Joanna", &["0669990011"])
            .with_contact("Bob", &["0501230000"])
            .book
    }

    #[test]
    fn name_matches_win_over_phone_matches() {
        let result = run(&fixture(), "ann", today()).unwrap();
        assert_eq!(
            result.to_text(),
            "Ann\t| +380501112233\nJoanna\t| 0669990011\n"
        );
    }

    #[test]
    fn falls_back_to_phone_text() {
        let result = run(&fixture(), "050123", today()).unwrap();
        assert_eq!(result.to_text(), "Bob\t| 0501230000\n");

        let result = run(&fixture(), "+380", today()).unwrap();
        assert_eq!(result.to_text(), "Ann\t| +380501112233\n");
    }

    #[test]
    fn nothing_found() {
        assert!(matches!(
            run(&fixture(), "zed", today()),
            Err(BookError::NotFound(_))
        ));
    }
}
