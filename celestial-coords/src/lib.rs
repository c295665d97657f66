//! Equatorial to horizontal coordinates for a ground observer.
//!
//! The model is deliberately small: Earth orientation comes from the linear
//! Earth Rotation Angle formula, UT1 is taken as UTC, and precession,
//! nutation, aberration and refraction are ignored. That is enough to point
//! a small telescope within a fraction of a degree for a few decades either
//! side of J2000.
//!
//! ```
//! use celestial_coords::{compute_azimuth_elevation, ObserverLocation, Target};
//!
//! let target = Target::from_sexagesimal([13.0, 37.0, 0.919], [-29.0, 51.0, 56.74]).unwrap();
//! let here = ObserverLocation::remeis();
//! let pos = target.observe_from(&here, 2459206.8156770836);
//! assert!((pos.elevation_deg - 9.5009).abs() < 1e-3);
//!
//! let same = compute_azimuth_elevation(
//!     2459206.8156770836,
//!     target.ra_deg(),
//!     target.dec_deg(),
//!     here.lon_deg(),
//!     here.lat_deg(),
//! );
//! assert_eq!(pos, same);
//! ```

pub mod errors;
pub mod horizontal;
pub mod location;
pub mod target;

pub use errors::{CoordError, CoordResult};
pub use horizontal::{
    compute_azimuth_elevation, earth_rotation_angle, horizon_matrix, spherical_to_cartesian,
    HorizontalPosition,
};
pub use location::ObserverLocation;
pub use target::Target;
