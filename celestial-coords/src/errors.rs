use celestial_core::AstroError;
use thiserror::Error;

pub type CoordResult<T> = Result<T, CoordError>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum CoordError {
    #[error("Invalid coordinate: {message}")]
    InvalidCoordinate { message: String },

    #[error("Core astronomical calculation failed: {message}")]
    CoreError { message: String },
}

impl CoordError {
    pub fn invalid_coordinate(message: impl Into<String>) -> Self {
        Self::InvalidCoordinate {
            message: message.into(),
        }
    }

    pub fn from_core(error: AstroError) -> Self {
        Self::CoreError {
            message: error.to_string(),
        }
    }
}

impl From<AstroError> for CoordError {
    fn from(error: AstroError) -> Self {
        match error {
            AstroError::NotFinite { .. } => Self::invalid_coordinate(error.to_string()),
            other => Self::from_core(other),
        }
    }
}
