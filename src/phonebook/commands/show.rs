use super::{render, CmdResult, ListedLine, Today};
use crate::book::AddressBook;
use crate::error::{BookError, Result};

/// What `show` was asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShowTarget {
    All,
    Page(usize),
    Name(String),
}

impl ShowTarget {
    /// `all`, a page number (anything below 1 means page 1), or a contact name.
    ///
    /// Any optionally signed run of digits is a page number, however large; numbers
    /// past `usize::MAX` saturate.
    pub fn parse(arg: &str) -> Self {
        if arg == "all" {
            return ShowTarget::All;
        }
        let digits = arg.strip_prefix(['+', '-']).unwrap_or(arg);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return ShowTarget::Name(arg.to_string());
        }
        if arg.starts_with('-') {
            return ShowTarget::Page(1);
        }
        ShowTarget::Page(digits.parse::<usize>().unwrap_or(usize::MAX).max(1))
    }
}

pub fn run(book: &AddressBook, target: &ShowTarget, today: Today) -> Result<CmdResult> {
    let listed = match target {
        ShowTarget::All => book
            .pages()
            .enumerate()
            .flat_map(|(i, page)| {
                std::iter::once(ListedLine::PageHeader(i + 1)).chain(render(page, today))
            })
            .collect(),
        ShowTarget::Page(number) => render(book.page(*number)?, today),
        ShowTarget::Name(name) => {
            let matches = book.find_by_name(name, false);
            if matches.is_empty() {
                return Err(BookError::NotFound(name.clone()));
            }
            render(matches, today)
        }
    };
    Ok(CmdResult::default().with_listed(listed))
}
