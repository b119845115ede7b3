//! # Session API
//!
//! [`Session`] is the single entry point for a UI: it owns the [`AddressBook`] and the
//! [`DataStore`] it came from, turns raw input lines into command calls, and converts
//! command errors into user-facing messages.
//!
//! ## Line Format
//!
//! A line is trimmed and split on its first space into a command word and a remainder.
//! The remainder is split on commas, each piece trimmed, giving the positional
//! arguments:
//!
//! ```text
//! add Ann Smith, +380501112233, 1990-3-7
//! └┬┘ └───────────────┬──────────────────┘
//! command        3 arguments
//! ```
//!
//! Argument counts are checked here, before any command runs. A wrong count produces
//! the command's usage text instead.
//!
//! ## Lifecycle
//!
//! - [`Session::open`] loads the store into a fresh book. Any load error is returned
//!   as-is and the session is not created.
//! - [`Session::execute`] runs one line.
//! - [`Session::close`] writes the book back through the store.

use crate::book::AddressBook;
use crate::commands::{self, show::ShowTarget, CmdMessage, CmdResult, Today};
use crate::error::{BookError, Result};
use crate::store::DataStore;
use tracing::{debug, info};

/// Phrases that end the session. Matched against the whole trimmed line.
pub const EXIT_COMMANDS: [&str; 3] = ["good bye", "exit", "close"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add,
    Change,
    Birthday,
    Phone,
    Show,
    Find,
}

impl Command {
    /// Looks up a command word. Case-sensitive; `hi` is an alias of `hello`.
    pub fn parse(word: &str) -> Option<Self> {
        match word {
            "hello" | "hi" => Some(Command::Hello),
            "add" => Some(Command::Add),
            "change" => Some(Command::Change),
            "birthday" => Some(Command::Birthday),
            "phone" => Some(Command::Phone),
            "show" => Some(Command::Show),
            "find" => Some(Command::Find),
            _ => None,
        }
    }

    fn accepts(self, count: usize) -> bool {
        match self {
            Command::Hello => true,
            Command::Add => (2..=3).contains(&count),
            Command::Change | Command::Birthday => count == 2,
            Command::Phone | Command::Show | Command::Find => count == 1,
        }
    }

    pub fn usage(self) -> &'static str {
        match self {
            Command::Hello => "hello [name]",
            Command::Add => "Give me name and phone please, birthday optional",
            Command::Change => "Give me name and phone please",
            Command::Birthday => "Give me name and birthday please",
            Command::Phone => "Enter user name",
            Command::Show => "Show must be with parameter `all`, a page number or name",
            Command::Find => "Find must be with one parameter (part of phone or name)",
        }
    }

    fn not_found(self, query: &str) -> String {
        match self {
            Command::Find => format!("Not found record by {}", query),
            _ => "Name is not found".to_string(),
        }
    }
}

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine {
    pub command: String,
    pub args: Vec<String>,
}

pub fn parse_line(line: &str) -> ParsedLine {
    let line = line.trim();
    let (command, rest) = match line.split_once(' ') {
        Some((command, rest)) => (command, Some(rest)),
        None => (line, None),
    };
    let args = rest
        .map(|rest| rest.split(',').map(|a| a.trim().to_string()).collect())
        .unwrap_or_default();
    ParsedLine {
        command: command.to_string(),
        args,
    }
}

/// Result of feeding one line to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Continue(CmdResult),
    Exit(CmdResult),
}

impl Outcome {
    pub fn result(&self) -> &CmdResult {
        match self {
            Outcome::Continue(result) | Outcome::Exit(result) => result,
        }
    }
}

pub struct Session<S: DataStore> {
    book: AddressBook,
    store: S,
}

impl<S: DataStore> Session<S> {
    /// Loads `store` into a new book with `page_size` records per page.
    pub fn open(store: S, page_size: usize) -> Result<Self> {
        let entries = store.load()?;
        let mut book = AddressBook::with_page_size(page_size);
        book.load_exported(&entries)?;
        Ok(Self { book, store })
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn book_mut(&mut self) -> &mut AddressBook {
        &mut self.book
    }

    pub fn execute(&mut self, line: &str) -> Outcome {
        self.execute_at(line, Today::local())
    }

    pub fn execute_at(&mut self, line: &str, today: Today) -> Outcome {
        if EXIT_COMMANDS.contains(&line.trim()) {
            return Outcome::Exit(CmdResult::default().with_message(CmdMessage::info("Good Bye!")));
        }

        let parsed = parse_line(line);
        let Some(command) = Command::parse(&parsed.command) else {
            debug!(command = %parsed.command, "unknown command");
            return Outcome::Continue(
                CmdResult::default().with_message(CmdMessage::error("Not correct command")),
            );
        };

        if !command.accepts(parsed.args.len()) {
            return Outcome::Continue(
                CmdResult::default().with_message(CmdMessage::warning(command.usage())),
            );
        }

        debug!(?command, args = parsed.args.len(), "dispatching");
        let result = self
            .dispatch(command, &parsed.args, today)
            .unwrap_or_else(|err| {
                CmdResult::default().with_message(CmdMessage::error(describe(command, &err)))
            });
        Outcome::Continue(result)
    }

    fn dispatch(&mut self, command: Command, args: &[String], today: Today) -> Result<CmdResult> {
        let arg = |i: usize| args.get(i).map(String::as_str).unwrap_or_default();
        match command {
            Command::Hello => Ok(commands::hello::run(args.first().map(String::as_str))),
            Command::Add => {
                commands::add::run(&mut self.book, arg(0), arg(1), args.get(2).map(String::as_str))
            }
            Command::Change => commands::change::run(&mut self.book, arg(0), arg(1)),
            Command::Birthday => commands::birthday::run(&mut self.book, arg(0), arg(1)),
            Command::Phone => commands::phone::run(&self.book, arg(0)),
            Command::Show => commands::show::run(&self.book, &ShowTarget::parse(arg(0)), today),
            Command::Find => commands::find::run(&self.book, arg(0), today),
        }
    }

    /// Writes the book back to the store.
    pub fn save(&mut self) -> Result<()> {
        let records = self.book.export();
        self.store.save(&records)?;
        info!(records = records.len(), "address book saved");
        Ok(())
    }

    /// Saves and hands back the store.
    pub fn close(mut self) -> Result<S> {
        self.save()?;
        Ok(self.store)
    }
}

fn describe(command: Command, err: &BookError) -> String {
    match err {
        BookError::NotFound(query) => command.not_found(query),
        other => other.to_string(),
    }
}
