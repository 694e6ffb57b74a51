//! Error type for the fallible helpers.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    /// The input did not name a real `YYYY-MM-DD` calendar date.
    #[error("invalid date: {0}")]
    InvalidDate(String),
}

pub type Result<T> = std::result::Result<T, CoreError>;
