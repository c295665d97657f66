//! Angle arithmetic shared by the celestial planner crates.
//!
//! Angles travel through the workspace as plain `f64` degrees. This crate
//! owns the conversions between degrees, radians and sexagesimal triples,
//! the display rules for those angles, and the 3x3 rotation matrices that
//! the horizontal transform composes.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`angle`] | degree/radian/sexagesimal conversion, formatting, parsing |
//! | [`matrix`] | [`RotationMatrix3`] |
//! | [`constants`] | epoch and circle constants |
//! | [`errors`] | [`AstroError`] |

pub mod angle;
pub mod constants;
pub mod errors;
pub mod matrix;

pub use angle::{AngleDisplay, DisplayOptions, Sexagesimal};
pub use errors::{AstroError, AstroResult};
pub use matrix::RotationMatrix3;
