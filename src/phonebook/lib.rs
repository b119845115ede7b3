//! # Phonebook Architecture
//!
//! Phonebook is a small address book: contacts with a name, any number of phone
//! numbers and an optional birthday, browsed page by page from an interactive prompt
//! and kept in a JSON file between runs.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (main.rs, args.rs, print.rs)                           │
//! │  - Arguments, logging, the stdin loop, coloured output      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Session (api.rs)                                           │
//! │  - Line parsing, argument counts, error → message           │
//! │  - Load on open, save on close                              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Commands (commands/*.rs)                                   │
//! │  - One function per command, explicit &mut AddressBook      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (fields.rs, record.rs, book.rs)                       │
//! │  - Validated fields, records, the paginated book            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage (store/)                                           │
//! │  - DataStore trait: FileStore (JSON), InMemoryStore (tests) │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No I/O in the Core
//!
//! From `api.rs` inward nothing writes to stdout/stderr or exits the process. Errors
//! are typed ([`error::BookError`]); turning them into text happens in the session.
//!
//! ## Module Overview
//!
//! - [`api`]: the session facade
//! - [`commands`]: command implementations
//! - [`book`]: the [`book::AddressBook`] store and paging
//! - [`record`]: one contact and its file shape
//! - [`fields`]: validated `Name`, `Phone`, `Birthday`
//! - [`store`]: persistence backends
//! - [`config`]: `config.json` and data directory lookup
//! - [`error`]: error types

pub mod api;
pub mod book;
pub mod commands;
pub mod config;
pub mod error;
pub mod fields;
pub mod record;
pub mod store;
