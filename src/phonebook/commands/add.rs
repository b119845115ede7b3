use super::{CmdMessage, CmdResult};
use crate::book::AddressBook;
use crate::error::Result;
use crate::fields::{Birthday, Name, Phone};
use crate::record::Record;

/// Adds a contact with one phone and an optional birthday.
///
/// An existing contact with the same name is replaced.
pub fn run(
    book: &mut AddressBook,
    name: &str,
    phone: &str,
    birthday: Option<&str>,
) -> Result<CmdResult> {
    let mut record = Record::new(Name::new(name)?);
    record.add_phone(Phone::new(phone)?);
    if let Some(raw) = birthday.filter(|b| !b.is_empty()) {
        record.set_birthday(Birthday::new(raw)?);
    }
    book.add_record(record);
    Ok(CmdResult::default().with_message(CmdMessage::success("add completed")))
}
