use super::{CmdMessage, CmdResult};
use crate::book::AddressBook;
use crate::error::{BookError, Result};
use crate::fields::Birthday;

/// Sets the birthday of the first contact named `name`.
pub fn run(book: &mut AddressBook, name: &str, birthday: &str) -> Result<CmdResult> {
    let record = book
        .find_by_name_mut(name, false)
        .into_iter()
        .next()
        .ok_or_else(|| BookError::NotFound(name.to_string()))?;
    record.set_birthday(Birthday::new(birthday)?);
    Ok(CmdResult::default().with_message(CmdMessage::success("Birthday set successfully")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fixtures::BookFixture;

    #[test]
    fn sets_and_overwrites_birthday() {
        let mut book = BookFixture::new().with_contact("Ann", &[]).book;
        run(&mut book, "Ann", "1990-3-7").unwrap();
        run(&mut book, "ANN", "1991-04-08").unwrap();

        let ann = book.find_by_name("Ann", false)[0];
        assert_eq!(ann.birthday().unwrap().as_str(), "1991-04-08");
    }

    #[test]
    fn unknown_name_is_not_found() {
        let mut book = AddressBook::new();
        assert!(matches!(
            run(&mut book, "Ann", "1990-3-7"),
            Err(BookError::NotFound(_))
        ));
    }

    #[test]
    fn invalid_birthday_is_rejected() {
        let mut book = BookFixture::new().with_contact("Ann", &[]).book;
        assert!(matches!(
            run(&mut book, "Ann", "1990/3/7"),
            Err(BookError::Validation(_))
        ));
        assert!(book.find_by_name("Ann", false)[0].birthday().is_none());
    }
}
