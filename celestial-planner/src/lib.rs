//! Observation planning on top of the horizontal transform.
//!
//! A [`Session`](session::Session) holds the working scenario and a named
//! collection of [`Configuration`](configuration::Configuration)s. Sweeps
//! sample a configuration over time into a
//! [`Trajectory`](trajectory::Trajectory); the visibility scan reduces one
//! trajectory per catalog object to a verdict. Catalog, persistence and
//! plotting sit behind their own modules so the shell can swap them.

pub mod catalog;
pub mod commands;
pub mod configuration;
pub mod error;
pub mod plot;
pub mod session;
pub mod store;
pub mod trajectory;
pub mod visibility;

pub use error::{Error, Result};
