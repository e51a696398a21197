use thiserror::Error;

use crate::domain::{ParseAmountError, ParseDateError};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid date '{input}': {source}")]
    InvalidDate {
        input: String,
        source: ParseDateError,
    },

    #[error("Invalid amount '{input}': {source}")]
    InvalidAmount {
        input: String,
        source: ParseAmountError,
    },

    #[error("Not a number: '{0}'")]
    InvalidNumber(String),

    #[error("Choice {0} is not between 1 and 6")]
    ChoiceOutOfRange(i64),

    #[error("End of input")]
    EndOfInput,

    #[error("Console error: {0}")]
    Io(#[from] std::io::Error),
}
