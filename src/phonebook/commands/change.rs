use super::{CmdMessage, CmdResult};
use crate::book::AddressBook;
use crate::error::{BookError, Result};
use crate::fields::Phone;

/// Replaces all phones of every contact named `name` with `phone`.
pub fn run(book: &mut AddressBook, name: &str, phone: &str) -> Result<CmdResult> {
    let matches = book.find_by_name_mut(name, false);
    if matches.is_empty() {
        return Err(BookError::NotFound(name.to_string()));
    }
    let phone = Phone::new(phone)?;
    for record in matches {
        record.edit_phone(phone.clone());
    }
    Ok(CmdResult::default().with_message(CmdMessage::success("Number is changed")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fixtures::BookFixture;

    #[test]
    fn replaces_every_phone() {
        let mut book = BookFixture::new()
            .with_contact("Ann", &["0501112233", "0661112233"])
            .book;
        run(&mut book, "ann", "0991112233").unwrap();

        let ann = book.find_by_name("Ann", false)[0];
        assert_eq!(ann.phones().len(), 1);
        assert_eq!(ann.phones()[0].as_str(), "0991112233");
    }

    #[test]
    fn unknown_name_is_not_found() {
        let mut book = BookFixture::new().with_contact("Ann", &[]).book;
        assert!(matches!(
            run(&mut book, "Bob", "0991112233"),
            Err(BookError::NotFound(_))
        ));
    }

    #[test]
    fn invalid_phone_keeps_old_numbers() {
        let mut book = BookFixture::new().with_contact("Ann", &["0501112233"]).book;
        assert!(matches!(
            run(&mut book, "Ann", "nope"),
            Err(BookError::Validation(_))
        ));
        assert_eq!(
            book.find_by_name("Ann", false)[0].phones()[0].as_str(),
            "0501112233"
        );
    }
}
