//! Error type for angle parsing and validation.
//!
//! Everything else in this crate is infallible arithmetic; errors only arise
//! when text is turned into numbers or when a caller asks for a finite angle
//! and gets NaN or infinity.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AstroError {
    /// Text that is not a valid sexagesimal value.
    #[error("cannot parse '{input}': {message}")]
    Parse { input: String, message: String },

    /// NaN or infinity where a finite angle is required.
    #[error("{context} is not finite ({value})")]
    NotFinite { context: String, value: f64 },
}

/// Convenience alias for `Result<T, AstroError>`.
pub type AstroResult<T> = Result<T, AstroError>;

impl AstroError {
    pub fn parse(input: &str, message: impl Into<String>) -> Self {
        Self::Parse {
            input: input.to_string(),
            message: message.into(),
        }
    }

    pub fn not_finite(context: &str, value: f64) -> Self {
        Self::NotFinite {
            context: context.to_string(),
            value,
        }
    }
}
