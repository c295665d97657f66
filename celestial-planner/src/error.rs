use celestial_coords::CoordError;
use celestial_core::AstroError;
use celestial_time::TimeError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("parse error: {0}")]
    Parse(String),

    #[error("step size must be a positive number of hours, got {0}")]
    InvalidStep(f64),

    #[error("no configuration named \"{0}\"")]
    MissingConfiguration(String),

    #[error("there is already a configuration named \"{0}\"")]
    DuplicateConfiguration(String),

    #[error("catalog lookup failed: {0}")]
    Catalog(String),

    #[error("no saved configurations at {}", .0.display())]
    StoreNotFound(PathBuf),

    #[error("plot error: {0}")]
    Plot(String),

    #[error(transparent)]
    Angle(#[from] AstroError),

    #[error(transparent)]
    Time(#[from] TimeError),

    #[error(transparent)]
    Coord(#[from] CoordError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
