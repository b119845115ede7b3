//! # Storage Layer
//!
//! The [`DataStore`] trait is how a session reads and writes the book. The book itself
//! never touches the filesystem; it only deals in [`ExportedRecord`]s.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, a single JSON array file
//! - [`memory::InMemoryStore`]: no persistence, for tests
//!
//! ## Storage Format
//!
//! ```text
//! [
//!   { "name": "Ann", "birthday": "1990-3-7", "phones": ["+380501112233"] },
//!   { "name": "Bob", "phones": [] }
//! ]
//! ```
//!
//! `birthday` and `phones` may be left out. Saving overwrites the whole file.

use crate::error::Result;
use crate::record::ExportedRecord;

pub mod fs;
pub mod memory;

/// Abstract interface for book storage.
pub trait DataStore {
    /// Read every stored entry, in file order. A store with nothing saved yet is empty.
    fn load(&self) -> Result<Vec<ExportedRecord>>;

    /// Replace the stored entries with `records`.
    fn save(&mut self, records: &[ExportedRecord]) -> Result<()>;
}
