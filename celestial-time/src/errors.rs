use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TimeError {
    /// A civil field outside its calendar range.
    #[error("invalid date: {0}")]
    InvalidDate(String),

    #[error("parse error: {0}")]
    ParseError(String),

    #[error("conversion error: {0}")]
    ConversionError(String),
}

pub type TimeResult<T> = Result<T, TimeError>;
