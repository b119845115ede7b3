use crate::book::DEFAULT_PAGE_SIZE;
use crate::error::{BookError, Result};
use directories::ProjectDirs;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_BOOK_FILE: &str = "book.json";

/// Overrides the data directory (config and default book location).
pub const HOME_ENV: &str = "PHONEBOOK_HOME";

/// Configuration for the phonebook, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct BookConfig {
    /// Records per page for `show`
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Book file; relative paths resolve against the data directory
    #[serde(default = "default_book_file")]
    pub book_file: PathBuf,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_book_file() -> PathBuf {
    PathBuf::from(DEFAULT_BOOK_FILE)
}

impl Default for BookConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            book_file: default_book_file(),
        }
    }
}

impl BookConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(BookError::Io)?;
        let config: BookConfig =
            serde_json::from_str(&content).map_err(BookError::Serialization)?;
        if config.page_size == 0 {
            return Err(BookError::Config("page_size must be at least 1".to_string()));
        }
        Ok(config)
    }

    /// Absolute location of the book file under `data_dir`
    pub fn book_path(&self, data_dir: &Path) -> PathBuf {
        if self.book_file.is_absolute() {
            self.book_file.clone()
        } else {
            data_dir.join(&self.book_file)
        }
    }
}

/// `$PHONEBOOK_HOME` when set, otherwise the platform data directory.
pub fn data_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "phonebook", "phonebook")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| BookError::Config("Could not determine data directory".to_string()))
}
