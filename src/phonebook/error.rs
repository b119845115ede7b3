use thiserror::Error;

/// Rejection raised when a field value fails validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} cannot be None")]
    Null { field: &'static str },

    #[error("{field} cannot be empty or whitespaces")]
    Empty { field: &'static str },

    #[error("Phone is not correct: {0}")]
    InvalidPhone(String),

    #[error("Birthday is not correct, should be YYYY-MM-DD: {0}")]
    InvalidBirthdayFormat(String),

    #[error("Birthday is not a valid calendar date: {0}")]
    InvalidDate(String),

    #[error("Birthday cannot be later than today: {0}")]
    FutureBirthday(String),
}

#[derive(Error, Debug)]
pub enum BookError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Name is not found: {0}")]
    NotFound(String),

    #[error("index out of range in book, max page: {pages}")]
    PageOutOfRange { requested: usize, pages: usize },

    #[error("Validation error in {index} record: {source}")]
    InvalidRecord {
        index: usize,
        #[source]
        source: ValidationError,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, BookError>;
