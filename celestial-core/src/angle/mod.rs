//! Angles as `f64` degrees, and everything needed to get them in and out.
//!
//! Storage is always decimal degrees. Radians appear only inside the
//! horizontal transform, hours only in input (`h m s` right ascension) and
//! display.
//!
//! # Sign convention
//!
//! A sexagesimal triple carries its sign on the leading component only.
//! Minutes and seconds are magnitudes:
//!
//! ```
//! use celestial_core::angle::dms_to_deg;
//!
//! let dec = dms_to_deg(-29.0, 51.0, 56.74);
//! assert!((dec + 29.865761).abs() < 1e-6);
//! ```
//!
//! # Display
//!
//! [`deg_to_dms`] and [`deg_to_hms`] take a [`DisplayOptions`] value instead
//! of consulting process state, so two callers can format the same angle in
//! two modes at once.
//!
//! ```
//! use celestial_core::angle::{deg_to_dms, hms_to_deg, deg_to_hms};
//! use celestial_core::DisplayOptions;
//!
//! let opts = DisplayOptions::default();
//! assert_eq!(deg_to_dms(34.5, &opts), "34° 30' 0.00\"");
//! assert_eq!(deg_to_hms(hms_to_deg(13.0, 37.0, 0.919), &opts), "13h 37m 0.92s");
//! ```

mod convert;
mod format;
mod normalize;
mod parse;
mod validate;

pub use convert::{deg_to_hours, deg_to_rad, dms_to_deg, hms_to_deg, rad_to_deg};
pub use format::{deg_to_dms, deg_to_hms, AngleDisplay, DisplayOptions, Sexagesimal};
pub use normalize::{wrap_0_2pi, wrap_0_360};
pub use parse::{parse_components, parse_sexagesimal};
pub use validate::ensure_finite;
