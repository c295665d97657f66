//! Time handling for the celestial planner.
//!
//! An [`Instant`] is a civil UTC timestamp with its Julian Date cached
//! alongside. [`JulianDate`] keeps the two-part representation used for the
//! arithmetic, and [`ClockSource`] decides whether "now" means the wall clock
//! or a pinned instant.
//!
//! UT1 is taken to equal UTC throughout. Leap seconds and DUT1 are ignored.

pub mod clock;
pub mod constants;
pub mod errors;
pub mod instant;
pub mod julian;
pub mod parsing;

pub use clock::ClockSource;
pub use errors::{TimeError, TimeResult};
pub use instant::Instant;
pub use julian::{hours_from_julian_day, JulianDate};
pub use parsing::{parse_iso8601, ParsedDateTime};
